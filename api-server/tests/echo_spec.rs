use api_server::{create_app, AppState};
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use diag_log::{Log, MemorySink};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt; // for oneshot

async fn post_echo(log: Arc<Log>, body: Value) -> (StatusCode, Value) {
    let app = create_app(AppState::new(log));
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/echo")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn given_envelope_body_when_echoed_then_returned_unchanged() {
    let sink = Arc::new(MemorySink::new());
    let log = Arc::new(Log::with_sink(true, sink.clone()));
    let envelope = json!({"isOk": true, "mssg": "created", "data": {"id": 1}, "expired": false});

    let (status, body) = post_echo(log, envelope.clone()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, envelope);
    assert_eq!(sink.lines(), vec!["\x1b[90mechoing envelope: created\x1b[0m\n"]);
}

#[tokio::test]
async fn given_body_missing_mssg_when_echoed_then_unprocessable() {
    let sink = Arc::new(MemorySink::new());
    let log = Arc::new(Log::with_sink(true, sink.clone()));

    let (status, body) = post_echo(log, json!({"isOk": true})).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, json!({"isOk": false, "mssg": "invalid envelope"}));
    assert_eq!(sink.lines().len(), 1);
    assert!(sink.lines()[0].starts_with("\x1b[33m"));
}

#[tokio::test]
async fn given_disabled_log_when_rejecting_then_no_diagnostic_output() {
    let sink = Arc::new(MemorySink::new());
    let log = Arc::new(Log::with_sink(false, sink.clone()));

    let (status, _) = post_echo(log, json!(["isOk", "mssg"])).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(sink.is_empty());
}
