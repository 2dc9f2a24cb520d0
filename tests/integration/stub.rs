//! Stub upstream services and a served instance of the Buzz router

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Form, Router,
};
use serde_json::json;

use buzz_server::{api, AppConfig, AppState};

#[derive(Clone, Default)]
struct StubState {
    next_calls: Arc<AtomicUsize>,
}

async fn fastsuggest(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    let query = params.get("query").cloned().unwrap_or_default();
    match query.as_str() {
        "fail" => (StatusCode::SERVICE_UNAVAILABLE, "busy".to_string()),
        "garbage" => (StatusCode::OK, "<html>not json</html>".to_string()),
        _ => {
            let body = json!({
                "responseHeader": {"status": 0},
                "response": {
                    "numFound": 2,
                    "docs": [
                        {
                            "suggestall": [query],
                            "idroot": "fst00849103",
                            "auth": "Cats",
                            "tag": 150,
                            "type": "auth",
                            "raw": "",
                            "breaker": "Cats",
                            "indicator": " "
                        },
                        {
                            "suggestall": ["Zürich (Switzerland)"],
                            "idroot": "fst01205536",
                            "auth": "Zurich (Switzerland)",
                            "tag": "151",
                            "type": "alt",
                            "raw": "Zürich (Switzerland)",
                            "breaker": "Zu{uml}rich (Switzerland)",
                            "indicator": " "
                        }
                    ]
                }
            });
            (StatusCode::OK, format!("cb({})", body))
        }
    }
}

async fn next_record(State(state): State<StubState>, Form(form): Form<HashMap<String, String>>) -> String {
    assert_eq!(form.get("action").map(String::as_str), Some("next"));
    match state.next_calls.fetch_add(1, Ordering::SeqCst) {
        0 => "<div id=\"record\">=LDR  00000nam a2200000 a 4500</div>".to_string(),
        _ => "<p>End of file reached for records.lex</p>".to_string(),
    }
}

async fn next_record_with_errors() -> String {
    "<p>End of file reached for records.lex</p>".to_string()
}

async fn validate(Form(form): Form<HashMap<String, String>>) -> String {
    format!(
        "<p>locked={} editable={}</p>",
        form.get("locked_marc").map(String::len).unwrap_or_default(),
        form.get("editable_marc").cloned().unwrap_or_default()
    )
}

async fn record_number() -> &'static str {
    "3"
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Start the stub upstream; returns its base URL
pub async fn spawn_upstream() -> String {
    let router = Router::new()
        .route("/searchfast/fastsuggest", get(fastsuggest))
        .route("/next_record", post(next_record))
        .route("/next_record_with_errors", post(next_record_with_errors))
        .route("/validate", post(validate))
        .route("/record_number", get(record_number))
        .with_state(StubState::default());
    serve(router).await
}

/// Configuration pointing every upstream at `upstream`
pub fn config_for(upstream: &str) -> AppConfig {
    let mut config = AppConfig::default();
    config.suggest.base_url = format!("{}/searchfast/fastsuggest", upstream);
    config.suggest.timeout_seconds = 5;
    config.records.base_url = upstream.to_string();
    config.records.timeout_seconds = 5;
    config
}

/// Serve the Buzz router against a fresh upstream; returns the API base URL
pub async fn spawn_app() -> String {
    let upstream = spawn_upstream().await;
    let state = AppState::new(config_for(&upstream)).unwrap();
    let base = serve(api::router(state)).await;
    format!("{}/api/v1", base)
}
