//! Record navigation endpoints
//!
//! Thin proxies over the record server so the editing page talks to a
//! single origin.

use axum::{extract::State, Form, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{NavigationMode, RecordFragmentResponse},
};

/// Record validation form
#[derive(Deserialize, ToSchema, Debug)]
pub struct ValidateForm {
    #[serde(default)]
    pub locked_marc: String,
    #[serde(default)]
    pub editable_marc: String,
}

#[derive(Serialize, ToSchema)]
pub struct ValidationResponse {
    pub html: String,
}

#[derive(Serialize, ToSchema)]
pub struct PositionResponse {
    pub position: u32,
}

/// Move to the next record
#[utoipa::path(
    post,
    path = "/records/next",
    tag = "records",
    responses(
        (status = 200, description = "Next record or end of file", body = RecordFragmentResponse),
        (status = 502, description = "Record server error")
    )
)]
pub async fn next_record(State(state): State<crate::AppState>) -> AppResult<Json<RecordFragmentResponse>> {
    let fragment = state.services.records.next(NavigationMode::Next).await?;
    Ok(Json(fragment.into()))
}

/// Move to the next record that fails validation
#[utoipa::path(
    post,
    path = "/records/next-with-errors",
    tag = "records",
    responses(
        (status = 200, description = "Next invalid record or end of file", body = RecordFragmentResponse),
        (status = 502, description = "Record server error")
    )
)]
pub async fn next_record_with_errors(
    State(state): State<crate::AppState>,
) -> AppResult<Json<RecordFragmentResponse>> {
    let fragment = state.services.records.next(NavigationMode::NextWithErrors).await?;
    Ok(Json(fragment.into()))
}

/// Validate the record being edited
#[utoipa::path(
    post,
    path = "/records/validate",
    tag = "records",
    request_body(content = ValidateForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Rendered validation result", body = ValidationResponse),
        (status = 502, description = "Record server error")
    )
)]
pub async fn validate(
    State(state): State<crate::AppState>,
    Form(form): Form<ValidateForm>,
) -> AppResult<Json<ValidationResponse>> {
    let html = state
        .services
        .records
        .validate(&form.locked_marc, &form.editable_marc)
        .await?;
    Ok(Json(ValidationResponse { html }))
}

/// Current position in the input file
#[utoipa::path(
    get,
    path = "/records/position",
    tag = "records",
    responses(
        (status = 200, description = "1-based record position", body = PositionResponse),
        (status = 502, description = "Record server error")
    )
)]
pub async fn position(State(state): State<crate::AppState>) -> AppResult<Json<PositionResponse>> {
    let position = state.services.records.position().await?;
    Ok(Json(PositionResponse { position }))
}
