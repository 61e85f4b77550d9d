//! Search request lifecycle
//!
//! Decides, for every change of the search key, whether a request is needed
//! and which responses may still reach the screen.
//!
//! # Rules
//! - An empty query never issues a request.
//! - Keys compare by value: an edit that produces an equal `(query, filters)`
//!   pair starts nothing new.
//! - Successful responses are cached per key, up to [`CACHE_CAPACITY`] keys;
//!   the least recently used key is evicted first.
//! - Only the response for the most recently issued key is displayed; late
//!   responses for older keys are dropped (but still cached).

use std::collections::{HashMap, VecDeque};

use crate::api::{ApiError, ApiResult, FilterSet, SearchResult};

/// Number of distinct keys whose results are kept.
pub const CACHE_CAPACITY: usize = 32;

/// The value a search request is derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SearchKey {
    pub query: String,
    pub filters: FilterSet,
}

impl SearchKey {
    pub fn new(query: impl Into<String>, filters: FilterSet) -> Self {
        Self {
            query: query.into(),
            filters,
        }
    }

    pub fn is_searchable(&self) -> bool {
        !self.query.is_empty()
    }
}

/// Handle for one issued request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    key: SearchKey,
}

impl SearchTicket {
    pub fn key(&self) -> &SearchKey {
        &self.key
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What the page should do after the key changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStep {
    /// Empty query: show the empty list, no request.
    Idle,
    /// Same key as the one already on screen or in flight.
    Unchanged,
    /// Answer known from an earlier response for an equal key.
    Cached(Vec<SearchResult>),
    /// Issue a request and settle it with this ticket.
    Fetch(SearchTicket),
}

#[derive(Debug, Default)]
pub struct SearchSession {
    generation: u64,
    current: Option<SearchKey>,
    cache: HashMap<SearchKey, Vec<SearchResult>>,
    /// Cached keys, least recently used first.
    recency: VecDeque<SearchKey>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new key. Every step except `Unchanged` invalidates
    /// outstanding tickets.
    pub fn begin(&mut self, key: SearchKey) -> SearchStep {
        if self.current.as_ref() == Some(&key) {
            return SearchStep::Unchanged;
        }

        self.generation += 1;
        self.current = Some(key.clone());

        if !key.is_searchable() {
            return SearchStep::Idle;
        }
        if let Some(results) = self.cache.get(&key).cloned() {
            log::debug!("Search cache hit for '{}'", key.query);
            self.touch(&key);
            return SearchStep::Cached(results);
        }

        SearchStep::Fetch(SearchTicket {
            generation: self.generation,
            key,
        })
    }

    /// Accept a response. Returns `None` when a newer key has been issued
    /// since the ticket was handed out.
    pub fn settle(
        &mut self,
        ticket: SearchTicket,
        outcome: ApiResult<Vec<SearchResult>>,
    ) -> Option<ApiResult<Vec<SearchResult>>> {
        if let Ok(results) = &outcome {
            self.remember(ticket.key.clone(), results.clone());
        }

        if !self.is_current(&ticket) {
            log::debug!(
                "Dropping stale search response for '{}' (generation {}, current {})",
                ticket.key.query,
                ticket.generation,
                self.generation
            );
            return None;
        }
        Some(outcome)
    }

    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        ticket.generation == self.generation
    }

    pub fn cached_keys(&self) -> usize {
        self.cache.len()
    }

    fn remember(&mut self, key: SearchKey, results: Vec<SearchResult>) {
        self.touch(&key);
        self.cache.insert(key, results);

        while self.recency.len() > CACHE_CAPACITY {
            if let Some(oldest) = self.recency.pop_front() {
                log::debug!("Evicting cached search for '{}'", oldest.query);
                self.cache.remove(&oldest);
            }
        }
    }

    /// Mark a key as the most recently used.
    fn touch(&mut self, key: &SearchKey) {
        if let Some(pos) = self.recency.iter().position(|k| k == key) {
            self.recency.remove(pos);
        }
        self.recency.push_back(key.clone());
    }
}

/// Props handed to the result list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchView {
    pub results: Vec<SearchResult>,
    pub is_loading: bool,
    pub error: Option<ApiError>,
}

impl SearchView {
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Default::default()
        }
    }

    pub fn ready(results: Vec<SearchResult>) -> Self {
        Self {
            results,
            ..Default::default()
        }
    }

    pub fn from_outcome(outcome: ApiResult<Vec<SearchResult>>) -> Self {
        match outcome {
            Ok(results) => Self::ready(results),
            Err(error) => Self {
                error: Some(error),
                ..Default::default()
            },
        }
    }
}
