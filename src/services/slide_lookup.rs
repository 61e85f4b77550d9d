//! Slide metadata lookups
//!
//! The detail page asks for one slide at a time. When the route id changes
//! while a request is in flight, the older response must not replace the
//! newer one.

use crate::api::{ApiError, ApiResult, SlideMetadata};

/// What the detail page shows.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Loaded(SlideMetadata),
    NotFound,
    Failed,
}

impl DetailState {
    pub fn from_outcome(outcome: ApiResult<SlideMetadata>) -> Self {
        match outcome {
            Ok(metadata) => DetailState::Loaded(metadata),
            Err(ApiError::NotFound(_)) => DetailState::NotFound,
            Err(_) => DetailState::Failed,
        }
    }
}

/// Handle for one issued lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    generation: u64,
    slide_id: String,
}

impl LookupTicket {
    pub fn slide_id(&self) -> &str {
        &self.slide_id
    }
}

#[derive(Debug, Default)]
pub struct SlideLookup {
    generation: u64,
}

impl SlideLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a lookup. Every earlier ticket becomes stale.
    pub fn begin(&mut self, slide_id: impl Into<String>) -> LookupTicket {
        self.generation += 1;
        LookupTicket {
            generation: self.generation,
            slide_id: slide_id.into(),
        }
    }

    /// State to show for a finished lookup, or `None` if a newer lookup has
    /// been started since.
    pub fn settle(
        &self,
        ticket: &LookupTicket,
        outcome: ApiResult<SlideMetadata>,
    ) -> Option<DetailState> {
        if ticket.generation != self.generation {
            log::debug!(
                "Dropping stale metadata for slide '{}' (generation {}, current {})",
                ticket.slide_id,
                ticket.generation,
                self.generation
            );
            return None;
        }
        Some(DetailState::from_outcome(outcome))
    }
}
