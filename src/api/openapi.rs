//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{diagnostics, health, marc, records, suggest};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Buzz API",
        version = "2.0.0",
        description = "MARC record checking and FAST heading assignment",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Suggestions
        suggest::suggest,
        // Diagnostics
        diagnostics::scan,
        diagnostics::rules,
        // Format mode
        marc::convert,
        // Records
        records::next_record,
        records::next_record_with_errors,
        records::validate,
        records::position,
    ),
    components(
        schemas(
            crate::error::ErrorResponse,
            health::HealthResponse,
            health::ReadinessResponse,
            suggest::SuggestQuery,
            suggest::SuggestResponse,
            diagnostics::ScanRequest,
            diagnostics::RuleGroup,
            diagnostics::RulesResponse,
            marc::ConvertRequest,
            marc::ConvertResponse,
            records::ValidateForm,
            records::ValidationResponse,
            records::PositionResponse,
            crate::models::Suggestion,
            crate::models::HeadingType,
            crate::models::FormatMode,
            crate::models::Severity,
            crate::models::MatchSpan,
            crate::models::ScanSummary,
            crate::models::ScanReport,
            crate::models::RuleView,
            crate::models::RecordFragmentResponse,
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "suggest", description = "FAST subject heading suggestions"),
        (name = "diagnostics", description = "MARC breaker diagnostics"),
        (name = "marc", description = "MARC text utilities"),
        (name = "records", description = "Record navigation")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
