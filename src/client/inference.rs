// src/client/inference.rs

use crate::client::fetch_error::FetchError;
use crate::client::models::QueryResponse;
use crate::domain::document::ResultDocument;
use reqwest::blocking::Client;
use std::time::Duration;

pub const DEFAULT_SERVICE_URL: &str =
    "https://property-ai-service-288104261568.us-central1.run.app";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const GENERIC_ERROR: &str = "An error occurred. Please try again.";
const DEFAULT_SUMMARY: &str = "No summary available.";

/// A successfully parsed search response.
#[derive(Debug)]
pub struct QueryOutcome {
    pub results: Vec<ResultDocument>,
    pub summary: String,
}

/// Client for the natural-language inference service. One attempt per call,
/// bounded timeout; retrying is the user's decision, not ours.
pub struct InferenceClient {
    client: Client,
    base_url: String,
}

impl InferenceClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    /// Builds a client for `INFERENCE_SERVICE_URL`, falling back to the
    /// production endpoint.
    pub fn from_env() -> Result<Self, FetchError> {
        let base_url = std::env::var("INFERENCE_SERVICE_URL")
            .unwrap_or_else(|_| DEFAULT_SERVICE_URL.to_string());
        Self::new(base_url)
    }

    /// Sends one free-text query and maps the response into an outcome.
    /// Never panics: transport problems and service-reported errors both come
    /// back as `FetchError`.
    pub fn fetch(&self, input: &str) -> Result<QueryOutcome, FetchError> {
        let resp = self
            .client
            .post(format!("{}/process_request", self.base_url))
            .json(&serde_json::json!({ "user_input": input }))
            .send()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        parse_response(status, &body)
    }
}

/// Maps an HTTP status + body into the query outcome. Split out of `fetch` so
/// the mapping is testable without a network. A parseable error payload wins
/// over the HTTP status; a non-2xx status without one is a transport failure.
pub fn parse_response(status: u16, body: &str) -> Result<QueryOutcome, FetchError> {
    let parsed: QueryResponse = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(e) => return Err(FetchError::Transport(format!("unreadable response body: {e}"))),
    };

    if parsed.status.as_deref() == Some("error") {
        let message = parsed
            .message
            .unwrap_or_else(|| GENERIC_ERROR.to_string());
        return Err(FetchError::Application(message));
    }

    if !(200..300).contains(&status) {
        return Err(FetchError::Transport(format!("service returned HTTP {status}")));
    }

    let results = parsed
        .properties
        .into_iter()
        .map(|envelope| ResultDocument::from_raw(envelope.document.unwrap_or_default()))
        .collect();

    Ok(QueryOutcome {
        results,
        summary: parsed
            .summary
            .unwrap_or_else(|| DEFAULT_SUMMARY.to_string()),
    })
}
