//! Router-level tests: drive the full Axum app without a network listener.
//!
//! Run with: cargo test --package labnav-web --test test_router

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::time::Duration;
use tokio_stream::StreamExt;
use tower::ServiceExt;

use labnav_config::{Config, UnknownPathPolicy};
use labnav_web::{router::build_router, state::AppState};

const PAGES: [(&str, &str); 5] = [
    ("/", "AdvancedSearchBox"),
    ("/upload", "ProtocolUploader"),
    ("/analytics", "FeedbackAnalyticsDashboard"),
    ("/search-quality", "SearchQualityDashboard"),
    ("/security", "SecurityAuditDashboard"),
];

fn app_with(config: Config) -> Router {
    build_router(AppState::new(config).expect("app state"))
}

fn app() -> Router {
    app_with(Config::default())
}

async fn get(app: &Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_every_page_renders_with_its_component() {
    let app = app();
    for (path, component) in PAGES {
        let (status, _, html) = get(&app, path).await;
        assert_eq!(status, StatusCode::OK, "{}", path);
        assert!(html.contains(&format!(r#"data-component="{}""#, component)), "{}", path);
        assert_eq!(html.matches("aria-current=\"page\"").count(), 1, "{}", path);
        assert_eq!(html.matches("<li>").count(), 5, "{}", path);
    }
}

#[tokio::test]
async fn test_navigation_sequence_ends_on_home() {
    let app = app();
    for path in ["/", "/analytics", "/security", "/"] {
        let (status, _, _) = get(&app, path).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, _, body) = get(&app, "/api/navigation").await;
    assert_eq!(status, StatusCode::OK);
    let snapshot: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(snapshot["current_path"], "/");
    assert_eq!(snapshot["active"]["label"], "Home");
    assert_eq!(snapshot["routes"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_home_filter_reaches_search_box() {
    let app = app();
    let (status, _, html) = get(&app, "/?doc_type=protocol").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#""docType":"protocol""#));
    assert!(html.contains(r#""selected":"protocol""#));
}

#[tokio::test]
async fn test_unknown_doc_type_falls_back_to_all() {
    let app = app();
    let (status, _, html) = get(&app, "/?doc_type=memo").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#""docType":"all""#));
}

#[tokio::test]
async fn test_filter_does_not_survive_navigation() {
    let app = app();
    get(&app, "/?doc_type=paper").await;
    get(&app, "/upload").await;
    let (_, _, html) = get(&app, "/").await;
    assert!(html.contains(r#""docType":"all""#));
}

#[tokio::test]
async fn test_malformed_query_is_ignored_on_pages() {
    let app = app();
    let (status, _, html) = get(&app, "/?doc_type=paper&doc_type=thesis").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#""docType":"all""#));

    let (status, _, html) = get(&app, "/upload?doc_type=a&doc_type=b").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"data-component="ProtocolUploader""#));

    let (status, headers, _) = get(&app, "/nonexistent?doc_type=a&doc_type=b").await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(headers[header::LOCATION], "/");
}

#[tokio::test]
async fn test_unknown_page_redirects_home_by_default() {
    let app = app();
    get(&app, "/analytics").await;

    let (status, headers, _) = get(&app, "/nonexistent").await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(headers[header::LOCATION], "/");

    // the failed navigation left the state alone
    let (_, _, body) = get(&app, "/api/navigation").await;
    let snapshot: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(snapshot["current_path"], "/analytics");
}

#[tokio::test]
async fn test_unknown_page_can_render_not_found() {
    let mut config = Config::default();
    config.routing.unknown_path = UnknownPathPolicy::NotFoundPage;
    let app = app_with(config);

    let (status, _, html) = get(&app, "/nonexistent").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Page not found"));
    assert!(!html.contains("aria-current"));
    assert_eq!(html.matches("<li>").count(), 5);
}

#[tokio::test]
async fn test_unknown_api_path_is_json_404() {
    let app = app();
    let (status, _, body) = get(&app, "/api/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"], "No route for path: /api/nope");
}

#[tokio::test]
async fn test_health() {
    let app = app();
    let (status, _, body) = get(&app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "RNA Lab Navigator");
    assert!(json["time"].is_string());
}

#[tokio::test]
async fn test_query_rejects_unknown_doc_type_before_backend() {
    let app = app();
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/query")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"query":"RNA extraction","doc_type":"memo"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_query_rejects_blank_query() {
    let app = app();
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/query")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"query":"   "}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_events_stream_reports_navigation() {
    let app = app();
    let response = app
        .clone()
        .oneshot(Request::builder().uri("/api/events").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/event-stream"));

    // the handler subscribed before returning, so this navigation is seen
    get(&app, "/security").await;

    let mut stream = response.into_body().into_data_stream();
    let mut frame = String::new();
    while !frame.contains("\n\n") {
        let chunk = tokio::time::timeout(Duration::from_secs(5), stream.next())
            .await
            .expect("event within timeout")
            .expect("stream still open")
            .unwrap();
        frame.push_str(std::str::from_utf8(&chunk).unwrap());
    }

    assert!(frame.contains("event: navigated"), "{}", frame);
    let data = frame
        .lines()
        .find_map(|line| line.strip_prefix("data: "))
        .expect("data line");
    let event: Value = serde_json::from_str(data).unwrap();
    assert_eq!(event["type"], "navigated");
    assert_eq!(event["previous"], "/");
    assert_eq!(event["current"], "/security");
    assert_eq!(event["changed"], true);
}
