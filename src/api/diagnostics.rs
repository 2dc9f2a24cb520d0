//! MARC diagnostics endpoints

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{FormatMode, RuleView, ScanReport, Severity},
};

/// Scan request
#[derive(Deserialize, ToSchema, Debug)]
pub struct ScanRequest {
    /// Raw MARC breaker text, one field per line
    pub text: String,
    #[serde(default)]
    pub mode: FormatMode,
}

/// Rules of one severity tier
#[derive(Serialize, ToSchema)]
pub struct RuleGroup {
    pub severity: Severity,
    /// Highlight colour for the tier
    pub colour: String,
    pub rules: Vec<RuleView>,
}

#[derive(Serialize, ToSchema)]
pub struct RulesResponse {
    pub version: String,
    pub groups: Vec<RuleGroup>,
}

/// Scan MARC text against the diagnostic rules
#[utoipa::path(
    post,
    path = "/diagnostics/scan",
    tag = "diagnostics",
    request_body = ScanRequest,
    responses(
        (status = 200, description = "All rule matches", body = ScanReport)
    )
)]
pub async fn scan(
    State(state): State<crate::AppState>,
    Json(request): Json<ScanRequest>,
) -> AppResult<Json<ScanReport>> {
    Ok(Json(state.services.diagnostics.scan(&request.text, request.mode)))
}

/// List the diagnostic rules grouped by severity
#[utoipa::path(
    get,
    path = "/diagnostics/rules",
    tag = "diagnostics",
    responses(
        (status = 200, description = "Loaded rule table", body = RulesResponse)
    )
)]
pub async fn rules(State(state): State<crate::AppState>) -> Json<RulesResponse> {
    let table = state.services.diagnostics.rules();

    let groups = Severity::ALL
        .iter()
        .map(|severity| RuleGroup {
            severity: *severity,
            colour: severity.colour().to_string(),
            rules: table.by_severity(*severity).map(|rule| rule.view()).collect(),
        })
        .collect();

    Json(RulesResponse {
        version: table.version().to_string(),
        groups,
    })
}
