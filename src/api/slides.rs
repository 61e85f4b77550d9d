use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::client::{decode, ensure_success, ApiClient, ApiError, ApiResult};

/// Keys the backend has used for a slide's own id, most preferred first.
const ID_KEYS: &[&str] = &["id", "slide_id", "slideId"];

/// Metadata of a single slide. The shape is owned by the backend, so every
/// field is kept as raw JSON, the id included.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlideMetadata {
    pub fields: BTreeMap<String, Value>,
}

impl SlideMetadata {
    /// The slide id, whichever key carries it. Numbers are accepted.
    pub fn id(&self) -> Option<String> {
        ID_KEYS
            .iter()
            .filter_map(|key| self.fields.get(*key))
            .find_map(|value| match value {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
    }

    /// Fields as label/value pairs, strings unquoted.
    pub fn display_fields(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .map(|(key, value)| {
                let rendered = match value {
                    Value::String(s) => s.clone(),
                    Value::Null => "-".to_string(),
                    other => other.to_string(),
                };
                (key.clone(), rendered)
            })
            .collect()
    }
}

impl ApiClient {
    /// `GET /api/slides/{id}`. A 404 becomes [`ApiError::NotFound`].
    pub async fn get_slide_metadata(&self, slide_id: &str) -> ApiResult<SlideMetadata> {
        let url = self.endpoint(&["api", "slides", slide_id])?;
        log::debug!("GET {url}");

        let response = self.transport.get(url).await?;
        if response.status == 404 {
            return Err(ApiError::NotFound(slide_id.to_string()));
        }
        decode(&ensure_success(response)?.body)
    }
}
