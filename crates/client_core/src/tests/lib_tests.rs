use super::*;
use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::post,
    Router,
};
use shared::{
    domain::Tone,
    error::{ApiError, ErrorCode},
    protocol::GenerateReplyRequest,
};
use tokio::net::TcpListener;

#[derive(Clone, Default)]
struct CapturedRequests(Arc<Mutex<Vec<serde_json::Value>>>);

impl CapturedRequests {
    fn take(&self) -> Vec<serde_json::Value> {
        std::mem::take(&mut *self.0.lock().expect("captured requests lock"))
    }
}

async fn spawn_fixture(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind fixture");
    let addr = listener.local_addr().expect("fixture addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve fixture");
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn sends_exactly_one_request_with_camel_case_payload() {
    let captured = CapturedRequests::default();
    let router = Router::new()
        .route(
            "/api/email/generate",
            post(
                |State(captured): State<CapturedRequests>, Json(body): Json<serde_json::Value>| async move {
                    captured.0.lock().expect("lock").push(body);
                    "Sure, let's move it to Thursday."
                },
            ),
        )
        .with_state(captured.clone());
    let base_url = spawn_fixture(router).await;

    let client = GenerationClient::new(base_url);
    let request = GenerateReplyRequest::new("Can we reschedule?", Tone::Friendly);
    let reply = client.generate_reply(&request).await.expect("reply");

    assert_eq!(reply, "Sure, let's move it to Thursday.");
    let bodies = captured.take();
    assert_eq!(bodies.len(), 1);
    assert_eq!(
        bodies[0],
        serde_json::json!({"emailContent": "Can we reschedule?", "tone": "Friendly"})
    );
}

#[tokio::test]
async fn json_string_body_is_used_verbatim() {
    let router = Router::new().route(
        "/api/email/generate",
        post(|| async { Json(serde_json::Value::String("Hello".to_string())) }),
    );
    let base_url = spawn_fixture(router).await;

    let client = GenerationClient::new(base_url);
    let reply = client
        .generate_reply(&GenerateReplyRequest::new("ping", Tone::Unspecified))
        .await
        .expect("reply");

    assert_eq!(reply, "Hello");
}

#[tokio::test]
async fn non_string_json_body_is_serialized_for_display() {
    let router = Router::new().route(
        "/api/email/generate",
        post(|| async { Json(serde_json::json!({"x": 1})) }),
    );
    let base_url = spawn_fixture(router).await;

    let client = GenerationClient::new(base_url);
    let reply = client
        .generate_reply(&GenerateReplyRequest::new("ping", Tone::Unspecified))
        .await
        .expect("reply");

    assert_eq!(reply, r#"{"x":1}"#);
}

#[tokio::test]
async fn non_success_status_maps_to_status_error() {
    let router = Router::new().route(
        "/api/email/generate",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new(ErrorCode::Internal, "model unavailable")),
            )
                .into_response()
        }),
    );
    let base_url = spawn_fixture(router).await;

    let client = GenerationClient::new(base_url);
    let err = client
        .generate_reply(&GenerateReplyRequest::new("ping", Tone::Casual))
        .await
        .expect_err("expected status error");

    match err {
        GenerationError::Status(status) => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR)
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_service_maps_to_transport_error() {
    // Reserve a port, then release it so the connect attempt is refused.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let client = GenerationClient::new(format!("http://{addr}"));
    let err = client
        .generate_reply(&GenerateReplyRequest::new("ping", Tone::Professional))
        .await
        .expect_err("expected transport error");

    assert!(matches!(err, GenerationError::Transport(_)));
}

#[test]
fn plain_text_body_passes_through_even_when_it_looks_like_json() {
    assert_eq!(
        reply_text(Some("text/plain; charset=utf-8"), r#"{"x":1}"#),
        r#"{"x":1}"#
    );
}

#[test]
fn missing_content_type_is_treated_as_plain_text() {
    assert_eq!(reply_text(None, "Hello"), "Hello");
}

#[test]
fn malformed_json_body_falls_back_to_raw_text() {
    assert_eq!(reply_text(Some("application/json"), "not-json"), "not-json");
}
