//! FAST suggestion client
//!
//! Queries the OCLC FAST autoSubject suggest service and turns every returned
//! heading into a ready-to-insert subject citation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use url::form_urlencoded;

use crate::{
    config::SuggestConfig,
    error::{AppError, AppResult},
    marc::breaker::citation_for_mode,
    models::{FormatMode, Suggestion, SuggestionRecord},
};

/// Fields requested from the service, comma URL-escaped
const QUERY_RETURN: &str = "suggestall%2Cidroot%2Cauth%2Ctag%2Ctype%2Craw%2Cbreaker%2Cindicator";

/// Transport used to reach the suggestion service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SuggestBackend: Send + Sync {
    /// GET `url` and return the response body
    async fn fetch(&self, url: &str) -> AppResult<String>;
}

/// reqwest transport
pub struct HttpSuggestBackend {
    client: reqwest::Client,
}

impl HttpSuggestBackend {
    pub fn new(timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl SuggestBackend for HttpSuggestBackend {
    async fn fetch(&self, url: &str) -> AppResult<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::SuggestionFetchFailed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::SuggestionFetchFailed(format!("Service answered {}", status)));
        }

        response
            .text()
            .await
            .map_err(|e| AppError::SuggestionFetchFailed(format!("Failed to read response: {}", e)))
    }
}

/// Strip the characters the service's query grammar reserves and escape spaces
pub fn sanitize_query(query: &str) -> String {
    query
        .chars()
        .filter(|c| !matches!(c, '-' | '(' | ')' | ':'))
        .collect::<String>()
        .replace(' ', "%20")
}

/// Switch `http:` to `https:` when the page itself is served securely
pub fn upgrade_scheme(url: &str, page_is_secure: bool) -> String {
    match url.strip_prefix("http:") {
        Some(rest) if page_is_secure => format!("https:{}", rest),
        _ => url.to_string(),
    }
}

/// Full service URL for a query
pub fn build_url(base_url: &str, query: &str, query_index: &str, page_is_secure: bool) -> String {
    // '&', '#' and '+' would otherwise split or truncate the query parameter
    let query = sanitize_query(query)
        .replace('&', "%26")
        .replace('#', "%23")
        .replace('+', "%2B");

    let query_index: String = form_urlencoded::byte_serialize(query_index.as_bytes()).collect();

    let url = format!(
        "{}?query={}&queryIndex={}&queryReturn={}&suggest=autoSubject",
        base_url, query, query_index, QUERY_RETURN
    );
    upgrade_scheme(&url, page_is_secure)
}

#[derive(Deserialize)]
struct SuggestPayload {
    response: SuggestResponseBody,
}

#[derive(Deserialize)]
struct SuggestResponseBody {
    #[serde(default)]
    docs: Vec<SuggestionRecord>,
}

/// Decode a service response, plain JSON or wrapped in a JSONP callback
pub fn decode_payload(body: &str) -> AppResult<Vec<SuggestionRecord>> {
    let json = unwrap_jsonp(body.trim());
    let payload: SuggestPayload = serde_json::from_str(json)
        .map_err(|e| AppError::SuggestionFetchFailed(format!("Malformed payload: {}", e)))?;
    Ok(payload.response.docs)
}

fn unwrap_jsonp(body: &str) -> &str {
    if body.starts_with('{') {
        return body;
    }
    match (body.find('('), body.rfind(')')) {
        (Some(open), Some(close)) if open < close => &body[open + 1..close],
        _ => body,
    }
}

/// Monotonic request sequence; only the most recently issued request is current
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    /// Issue the next sequence number, superseding every earlier one
    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_latest(&self, seq: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == seq
    }
}

/// Result of a sequenced suggestion request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestOutcome {
    Current { seq: u64, suggestions: Vec<Suggestion> },
    /// A newer request was issued while this one was in flight
    Superseded { seq: u64 },
}

#[derive(Clone)]
pub struct SuggestService {
    backend: Arc<dyn SuggestBackend>,
    config: SuggestConfig,
    sequencer: Arc<RequestSequencer>,
}

impl SuggestService {
    pub fn new(config: SuggestConfig) -> AppResult<Self> {
        let backend = HttpSuggestBackend::new(Duration::from_secs(config.timeout_seconds))?;
        Ok(Self::with_backend(config, Arc::new(backend)))
    }

    pub fn with_backend(config: SuggestConfig, backend: Arc<dyn SuggestBackend>) -> Self {
        Self {
            backend,
            config,
            sequencer: Arc::new(RequestSequencer::default()),
        }
    }

    /// Fetch candidates for `query`, in the order the service returned them
    pub async fn search(
        &self,
        query: &str,
        query_index: Option<&str>,
        page_is_secure: bool,
        mode: FormatMode,
    ) -> AppResult<Vec<Suggestion>> {
        if sanitize_query(query).is_empty() {
            return Err(AppError::BadRequest(
                "Query has no searchable characters".to_string(),
            ));
        }

        let index = query_index.unwrap_or(self.config.query_index.as_str());
        let secure = page_is_secure || self.config.page_is_secure();
        let url = build_url(&self.config.base_url, query, index, secure);

        tracing::debug!("FAST suggest request: {}", url);

        let body = self.backend.fetch(&url).await?;
        let records = decode_payload(&body)?;

        tracing::info!("FAST suggest returned {} headings for {:?}", records.len(), query);

        Ok(records
            .into_iter()
            .map(|record| {
                let value = citation_for_mode(&record, mode);
                Suggestion::new(record, value)
            })
            .collect())
    }

    /// Like [`search`](Self::search), but a response overtaken by a newer
    /// request is reported as superseded, whether it succeeded or failed
    pub async fn search_latest(
        &self,
        query: &str,
        query_index: Option<&str>,
        page_is_secure: bool,
        mode: FormatMode,
    ) -> AppResult<SuggestOutcome> {
        let seq = self.sequencer.issue();
        let result = self.search(query, query_index, page_is_secure, mode).await;

        if !self.sequencer.is_latest(seq) {
            tracing::debug!("Discarding stale suggest response #{}", seq);
            return Ok(SuggestOutcome::Superseded { seq });
        }

        result.map(|suggestions| SuggestOutcome::Current { seq, suggestions })
    }
}
