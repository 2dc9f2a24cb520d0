//! FAST heading suggestion endpoint

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    error::AppResult,
    models::{FormatMode, Suggestion},
};

/// Suggestion query parameters
#[derive(Deserialize, Validate, IntoParams, ToSchema, Debug)]
pub struct SuggestQuery {
    /// Text typed so far
    #[validate(length(min = 1, message = "Query must not be empty"))]
    pub q: String,
    /// FAST suggest index (defaults to the configured index)
    pub index: Option<String>,
    /// Caller's request sequence number, echoed back
    pub seq: Option<u64>,
    /// Transcription mode of the citations
    #[serde(default)]
    pub mode: FormatMode,
}

#[derive(Serialize, ToSchema)]
pub struct SuggestResponse {
    /// Echo of the request sequence number; the page drops any response
    /// that is not for its latest request
    pub seq: Option<u64>,
    pub suggestions: Vec<Suggestion>,
}

/// Suggest FAST subject headings
#[utoipa::path(
    get,
    path = "/suggest",
    tag = "suggest",
    params(SuggestQuery),
    responses(
        (status = 200, description = "Candidate headings", body = SuggestResponse),
        (status = 400, description = "Empty query"),
        (status = 502, description = "Suggestions unavailable", body = crate::error::ErrorResponse)
    )
)]
pub async fn suggest(
    State(state): State<crate::AppState>,
    headers: HeaderMap,
    Query(query): Query<SuggestQuery>,
) -> AppResult<Json<SuggestResponse>> {
    query.validate()?;

    let suggestions = state
        .services
        .suggest
        .search(
            &query.q,
            query.index.as_deref(),
            super::page_is_secure(&headers),
            query.mode,
        )
        .await?;

    Ok(Json(SuggestResponse {
        seq: query.seq,
        suggestions,
    }))
}
