// src/session/state.rs

use crate::domain::document::ResultDocument;
use crate::domain::facets::{self, Facets};
use crate::domain::filters::{self, FilterSelection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    NotStarted,
    Fetched,
    Error,
}

/// All mutable state for one user's query/filter cycle.
///
/// Lifecycle rules live here as explicit methods rather than being scattered
/// across handlers: a new non-empty input resets everything derived from the
/// previous query, filter-only interactions leave results and facets alone,
/// and a failed fetch records a message without touching results.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySession {
    pub last_input: String,
    pub fetch_status: FetchStatus,
    pub results: Vec<ResultDocument>,
    pub summary: String,
    /// User-visible message when `fetch_status == Error`.
    pub error: Option<String>,
    pub facets: Facets,
    pub filters: FilterSelection,
}

impl Default for QuerySession {
    fn default() -> Self {
        QuerySession {
            last_input: String::new(),
            fetch_status: FetchStatus::NotStarted,
            results: Vec::new(),
            summary: String::new(),
            error: None,
            facets: Facets::default(),
            filters: FilterSelection::default(),
        }
    }
}

impl QuerySession {
    /// Registers a query submission. Empty input and repeats of the current
    /// input are no-ops, which guarantees at most one fetch per distinct
    /// query string. A genuinely new input resets all derived state before
    /// the fetch begins, so stale filters can never leak into a new query.
    pub fn submit_query(&mut self, input: &str) {
        if input.is_empty() || input == self.last_input {
            return;
        }

        self.results.clear();
        self.summary.clear();
        self.error = None;
        self.facets = Facets::default();
        self.filters = FilterSelection::default();
        self.fetch_status = FetchStatus::NotStarted;
        self.last_input = input.to_string();
    }

    /// True only while a submitted query has not been fetched yet; renders
    /// and repeated submissions of the same input observe `false`.
    pub fn needs_fetch(&self) -> bool {
        !self.last_input.is_empty() && self.fetch_status == FetchStatus::NotStarted
    }

    pub fn record_success(&mut self, results: Vec<ResultDocument>, summary: String) {
        self.facets = facets::extract(&results);
        self.filters = FilterSelection::from_facets(&self.facets);
        self.results = results;
        self.summary = summary;
        self.error = None;
        self.fetch_status = FetchStatus::Fetched;
    }

    /// Records a failed fetch. Results stay as they were (empty for a fresh
    /// query cycle); the session remains interactive.
    pub fn record_error(&mut self, message: String) {
        self.error = Some(message);
        self.fetch_status = FetchStatus::Error;
    }

    /// The list to render: current results through the filter + sort engine.
    pub fn displayed(&self) -> Vec<ResultDocument> {
        filters::apply(&self.results, &self.filters)
    }
}
