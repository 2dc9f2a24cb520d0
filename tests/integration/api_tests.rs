//! API integration tests

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use crate::stub::spawn_app;

#[tokio::test]
async fn test_health_check() {
    let base = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", base))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_readiness_reports_rule_table() {
    let base = spawn_app().await;
    let client = Client::new();

    let body: Value = client
        .get(format!("{}/ready", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(body["status"], "ready");
    assert_eq!(body["rules_version"], "2.0.0");
    assert_eq!(body["rules"], 29);
}

#[tokio::test]
async fn test_suggest_returns_citations() {
    let base = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/suggest", base))
        .query(&[("q", "Cats"), ("seq", "7")])
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["seq"], 7);

    let suggestions = body["suggestions"].as_array().expect("No suggestions");
    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0]["label"], "Cats");
    assert_eq!(suggestions[0]["value"], "=650  #7 $aCats.$2fast$0(OCoLC)fst00849103");
    assert_eq!(suggestions[1]["type"], "alt");
    assert_eq!(
        suggestions[1]["value"],
        "=651  #7 $aZürich (Switzerland).$2fast$0(OCoLC)fst01205536"
    );
}

#[tokio::test]
async fn test_suggest_in_aleph_mode() {
    let base = spawn_app().await;
    let client = Client::new();

    let body: Value = client
        .get(format!("{}/suggest", base))
        .query(&[("q", "Cats"), ("mode", "aleph")])
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert!(body["seq"].is_null());
    assert_eq!(
        body["suggestions"][0]["value"],
        "=650  #7 $$aCats.$$2fast$$0(OCoLC)fst00849103"
    );
}

#[tokio::test]
async fn test_suggest_upstream_failure() {
    let base = spawn_app().await;
    let client = Client::new();

    for query in ["fail", "garbage"] {
        let response = client
            .get(format!("{}/suggest", base))
            .query(&[("q", query)])
            .send()
            .await
            .expect("Failed to send request");

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let body: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["error"], "SuggestionFetchFailed");
        assert_eq!(body["code"], 3);
        assert_eq!(body["message"], "Suggestions unavailable");
    }
}

#[tokio::test]
async fn test_suggest_rejects_empty_query() {
    let base = spawn_app().await;
    let client = Client::new();

    for query in ["", "()", "-:"] {
        let response = client
            .get(format!("{}/suggest", base))
            .query(&[("q", query)])
            .send()
            .await
            .expect("Failed to send request");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{:?}", query);

        let body: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["error"], "BadValue");
    }
}

#[tokio::test]
async fn test_diagnostics_scan() {
    let base = spawn_app().await;
    let client = Client::new();

    let body: Value = client
        .post(format!("{}/diagnostics/scan", base))
        .json(&json!({
            "text": "=100  1# $aJOHN SMITH\n=650  07$aFast$"
        }))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    let spans = body["spans"].as_array().expect("No spans");
    let capitals = spans
        .iter()
        .find(|s| s["rule_id"] == "main-entry-capitals")
        .expect("Capitals warning missing");
    assert_eq!(capitals["severity"], "warning");
    assert_eq!(capitals["line"], 1);
    assert_eq!(capitals["start"], 0);
    assert_eq!(capitals["end"], 15);

    let trailing = spans
        .iter()
        .find(|s| s["rule_id"] == "subfield-delimiter-at-line-end")
        .expect("Trailing delimiter error missing");
    assert_eq!(trailing["line"], 2);
    assert_eq!(trailing["start"], 36);
    assert_eq!(trailing["end"], 37);

    assert!(body["summary"]["errors"].as_u64().unwrap() >= 1);
    assert!(body["summary"]["warnings"].as_u64().unwrap() >= 1);
}

#[tokio::test]
async fn test_diagnostics_scan_clean_citation() {
    let base = spawn_app().await;
    let client = Client::new();

    let body: Value = client
        .post(format!("{}/diagnostics/scan", base))
        .json(&json!({
            "text": "=650  #7 $$aCats.$$2fast$$0(OCoLC)fst00849103",
            "mode": "aleph"
        }))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(body["spans"], json!([]));
    assert_eq!(body["summary"], json!({"errors": 0, "warnings": 0, "infos": 0}));
}

#[tokio::test]
async fn test_rules_grouped_by_severity() {
    let base = spawn_app().await;
    let client = Client::new();

    let body: Value = client
        .get(format!("{}/diagnostics/rules", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(body["version"], "2.0.0");

    let groups = body["groups"].as_array().expect("No groups");
    let summary: Vec<(&str, &str, usize)> = groups
        .iter()
        .map(|g| {
            (
                g["severity"].as_str().unwrap(),
                g["colour"].as_str().unwrap(),
                g["rules"].as_array().unwrap().len(),
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![("error", "red", 12), ("warning", "orange", 8), ("info", "green", 9)]
    );
}

#[tokio::test]
async fn test_convert_format_mode() {
    let base = spawn_app().await;
    let client = Client::new();

    let body: Value = client
        .post(format!("{}/marc/convert", base))
        .json(&json!({
            "text": "=245  10$aTitle$bsubtitle",
            "mode": "aleph"
        }))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(body["mode"], "aleph");
    assert_eq!(body["text"], "=245  10$$aTitle$$bsubtitle");

    let body: Value = client
        .post(format!("{}/marc/convert", base))
        .json(&json!({
            "text": "=245  10$$aTitle$$bsubtitle",
            "mode": "breaker"
        }))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(body["text"], "=245  10$aTitle$bsubtitle");
}

#[tokio::test]
async fn test_records_walk_to_end_of_file() {
    let base = spawn_app().await;
    let client = Client::new();

    let first: Value = client
        .post(format!("{}/records/next", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(first["end_of_file"], false);
    assert!(first["html"].as_str().unwrap().contains("=LDR"));

    let second: Value = client
        .post(format!("{}/records/next", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(second["end_of_file"], true);
}

#[tokio::test]
async fn test_records_validate_and_position() {
    let base = spawn_app().await;
    let client = Client::new();

    let body: Value = client
        .post(format!("{}/records/validate", base))
        .form(&[("locked_marc", "=LDR  x"), ("editable_marc", "=245  10$aTitle")])
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(body["html"], "<p>locked=7 editable==245  10$aTitle</p>");

    let body: Value = client
        .get(format!("{}/records/position", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(body["position"], 3);
}

#[tokio::test]
async fn test_openapi_document_served() {
    let base = spawn_app().await;
    let root = base.trim_end_matches("/api/v1");
    let client = Client::new();

    let body: Value = client
        .get(format!("{}/api-docs/openapi.json", root))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert!(body["paths"]["/suggest"].is_object());
    assert!(body["paths"]["/diagnostics/scan"].is_object());
}
