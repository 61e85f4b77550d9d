use serde::{Deserialize, Serialize};
use serde_json::Value;
use wasm_bindgen_futures::JsFuture;

use super::client::{ensure_success, ApiClient, ApiError, ApiResult};

/// Multipart field name repeated once per uploaded file.
pub const UPLOAD_FIELD: &str = "files";

/// A file read into memory, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideFile {
    pub name: String,
    /// Declared media type; may be empty when the browser could not tell.
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl SlideFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Read a browser `File` into memory.
    pub async fn read(file: &web_sys::File) -> ApiResult<Self> {
        let buffer = JsFuture::from(file.array_buffer())
            .await
            .map_err(|e| ApiError::FileRead {
                name: file.name(),
                reason: format!("{e:?}"),
            })?;
        let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
        Ok(Self::new(file.name(), file.type_(), bytes))
    }
}

/// Whatever the upload endpoint answers with. The UI only cares that the
/// call succeeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UploadReceipt(pub Value);

impl UploadReceipt {
    /// Any accepted body is a receipt: empty is `null`, JSON is kept as
    /// parsed, anything else is kept as text.
    fn from_body(body: String) -> Self {
        if body.trim().is_empty() {
            return UploadReceipt(Value::Null);
        }
        match serde_json::from_str(&body) {
            Ok(value) => UploadReceipt(value),
            Err(_) => UploadReceipt(Value::String(body)),
        }
    }
}

impl ApiClient {
    /// `POST /api/upload` with every file under the repeated `files` field.
    ///
    /// Media types are not re-checked here; the drop surface filters them.
    pub async fn upload_slides(&self, files: Vec<SlideFile>) -> ApiResult<UploadReceipt> {
        let url = self.endpoint(&["api", "upload"])?;
        log::info!("Uploading {} file(s) to {url}", files.len());

        let response = ensure_success(self.transport.post_multipart(url, UPLOAD_FIELD, files).await?)?;
        Ok(UploadReceipt::from_body(response.body))
    }
}
