//! Format mode conversion endpoint

use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{marc::breaker, models::FormatMode};

#[derive(Deserialize, ToSchema, Debug)]
pub struct ConvertRequest {
    pub text: String,
    /// Mode to convert the text to
    pub mode: FormatMode,
}

#[derive(Serialize, ToSchema)]
pub struct ConvertResponse {
    pub mode: FormatMode,
    pub text: String,
}

/// Rewrite record text for the selected format mode
#[utoipa::path(
    post,
    path = "/marc/convert",
    tag = "marc",
    request_body = ConvertRequest,
    responses(
        (status = 200, description = "Converted text", body = ConvertResponse)
    )
)]
pub async fn convert(Json(request): Json<ConvertRequest>) -> Json<ConvertResponse> {
    Json(ConvertResponse {
        mode: request.mode,
        text: breaker::convert(&request.text, request.mode),
    })
}
