use chrono::NaiveDate;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::client::{decode, ensure_success, ApiClient, ApiResult};

/// Wire format of the date range filters.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// Filters
// ============================================================================

/// Search-narrowing criteria. Every field is independent; there is no
/// cross-field validation (a start date after the end date is sent as is).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presentation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<String>,
}

/// A single-key edit of a [`FilterSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEdit {
    PresentationId(Option<String>),
    StartDate(Option<NaiveDate>),
    EndDate(Option<NaiveDate>),
    Topics(Vec<String>),
}

impl FilterEdit {
    /// Edit from the raw presentation id input; an empty box clears the key.
    pub fn presentation_id(raw: &str) -> Self {
        FilterEdit::PresentationId(non_empty(raw))
    }

    /// Edit from a raw `<input type="date">` value. Empty or malformed
    /// values clear the key.
    pub fn start_date(raw: &str) -> Self {
        FilterEdit::StartDate(parse_date(raw))
    }

    pub fn end_date(raw: &str) -> Self {
        FilterEdit::EndDate(parse_date(raw))
    }
}

impl FilterSet {
    /// Replace exactly one key, leaving the others untouched.
    pub fn apply(&mut self, edit: FilterEdit) {
        match edit {
            FilterEdit::PresentationId(value) => self.presentation_id = value,
            FilterEdit::StartDate(value) => self.start_date = value,
            FilterEdit::EndDate(value) => self.end_date = value,
            FilterEdit::Topics(value) => self.topics = value,
        }
    }

    pub fn merged(mut self, edit: FilterEdit) -> Self {
        self.apply(edit);
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &FilterSet::default()
    }

    /// Flatten into request parameters. Absent keys are omitted so the
    /// backend applies its own defaults; topics repeat once per value.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(id) = &self.presentation_id {
            pairs.push(("presentationId", id.clone()));
        }
        if let Some(date) = self.start_date {
            pairs.push(("startDate", date.format(DATE_FORMAT).to_string()));
        }
        if let Some(date) = self.end_date {
            pairs.push(("endDate", date.format(DATE_FORMAT).to_string()));
        }
        pairs.extend(self.topics.iter().map(|topic| ("topics", topic.clone())));
        pairs
    }
}

fn non_empty(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

// ============================================================================
// Results
// ============================================================================

/// One slide hit. Only `id` is guaranteed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub slide_number: Option<u32>,
    #[serde(default)]
    pub presentation_id: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub topics: Vec<String>,
}

impl SearchResult {
    /// Card heading, e.g. "Slide 12".
    pub fn title(&self) -> String {
        match self.slide_number {
            Some(n) => format!("Slide {n}"),
            None => "Slide".to_string(),
        }
    }

    /// Image URL if there is one worth rendering (empty strings are skipped).
    pub fn visible_image(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.is_empty())
    }

    pub fn has_topics(&self) -> bool {
        !self.topics.is_empty()
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "expected a string or number id, got {other}"
        ))),
    }
}

fn nullable_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Commands
// ============================================================================

impl ApiClient {
    /// `GET /api/search` with the query text and flattened filters.
    pub async fn search_slides(
        &self,
        query: &str,
        filters: &FilterSet,
    ) -> ApiResult<Vec<SearchResult>> {
        let mut url = self.endpoint(&["api", "search"])?;
        {
            let mut params = url.query_pairs_mut();
            params.append_pair("query", query);
            for (key, value) in filters.query_pairs() {
                params.append_pair(key, &value);
            }
        }

        log::debug!("GET {url}");
        let response = ensure_success(self.transport.get(url).await?)?;
        decode(&response.body)
    }
}
