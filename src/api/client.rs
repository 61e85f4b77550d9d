use std::sync::Arc;

use async_trait::async_trait;
use leptos::prelude::*;
use reqwest::multipart;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use super::upload::SlideFile;
use crate::config::ApiConfig;

// ============================================================================
// Errors
// ============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server responded with status {status}")]
    Status { status: u16 },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to read file '{name}': {reason}")]
    FileRead { name: String, reason: String },
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

// ============================================================================
// Transport
// ============================================================================

/// Raw response as seen by the client, before status handling and decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The network seam of the API client.
///
/// Futures are not required to be `Send`: in the browser every request runs
/// on the single UI thread.
#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    /// Issue a GET request to a fully resolved URL.
    async fn get(&self, url: Url) -> ApiResult<HttpResponse>;

    /// POST a multipart body carrying every file under the same field name.
    async fn post_multipart(
        &self,
        url: Url,
        field: &str,
        files: Vec<SlideFile>,
    ) -> ApiResult<HttpResponse>;
}

/// `reqwest`-backed transport (uses `fetch` when compiled to wasm).
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn get(&self, url: Url) -> ApiResult<HttpResponse> {
        let response = self.client.get(url).send().await?;
        read_response(response).await
    }

    async fn post_multipart(
        &self,
        url: Url,
        field: &str,
        files: Vec<SlideFile>,
    ) -> ApiResult<HttpResponse> {
        let mut form = multipart::Form::new();
        for file in files {
            let SlideFile { name, media_type, bytes } = file;
            let mut part = multipart::Part::bytes(bytes).file_name(name);
            if !media_type.is_empty() {
                part = part.mime_str(&media_type)?;
            }
            form = form.part(field.to_string(), part);
        }

        let response = self.client.post(url).multipart(form).send().await?;
        read_response(response).await
    }
}

async fn read_response(response: reqwest::Response) -> ApiResult<HttpResponse> {
    let status = response.status().as_u16();
    let body = response.text().await?;
    Ok(HttpResponse { status, body })
}

// ============================================================================
// Client
// ============================================================================

/// Typed entry point for every backend call.
///
/// Cheap to clone; the transport is shared.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) base_url: Url,
    pub(crate) transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_transport(config.base_url.clone(), Arc::new(HttpTransport::default()))
    }

    pub fn with_transport(base_url: Url, transport: Arc<dyn Transport>) -> Self {
        Self { base_url, transport }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve path segments against the base URL. Segments are
    /// percent-encoded individually, so an id containing `/` stays one segment.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

pub(crate) fn ensure_success(response: HttpResponse) -> ApiResult<HttpResponse> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status { status: response.status })
    }
}

pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

// ============================================================================
// Context
// ============================================================================

pub fn provide_api_client(client: ApiClient) {
    provide_context(client);
}

pub fn use_api_client() -> ApiClient {
    expect_context::<ApiClient>()
}
