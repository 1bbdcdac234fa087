use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::post,
    Router,
};
use serde_json::Value;
use std::sync::Arc;

use crate::{services::ServiceError, types::ErrorResponse, AppState};

const VALIDATION_MESSAGE: &str = "A conversation string is required.";
const GENERIC_FAILURE_MESSAGE: &str = "Failed to organize conversation. Please try again.";

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/organize", post(organize_conversation))
        .with_state(state)
}

pub async fn organize_conversation(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, (StatusCode, Json<ErrorResponse>)> {
    // Checked by hand: a missing or wrongly-typed field must get the fixed
    // 400 message, not a framework rejection.
    let conversation = match body.get("conversation").and_then(Value::as_str) {
        Some(text) if !text.is_empty() => text,
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(VALIDATION_MESSAGE)),
            ));
        }
    };

    match state.organizer.organize(conversation).await {
        Ok(parsed) => Ok(Json(parsed)),
        Err(ServiceError::InvalidInput(msg)) => {
            Err((StatusCode::BAD_REQUEST, Json(ErrorResponse::new(msg))))
        }
        Err(err) => {
            tracing::error!("Error in /api/organize: {:?}", err);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(GENERIC_FAILURE_MESSAGE)),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{OrganizerService, TextGenerator};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    enum StubMode {
        Text(&'static str),
        Empty,
        Fail,
    }

    struct StubGenerator {
        mode: StubMode,
        calls: AtomicUsize,
    }

    impl StubGenerator {
        fn new(mode: StubMode) -> Arc<Self> {
            Arc::new(Self {
                mode,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl TextGenerator for StubGenerator {
        async fn generate(&self, _prompt: &str) -> Result<Option<String>, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.mode {
                StubMode::Text(t) => Ok(Some(t.to_string())),
                StubMode::Empty => Ok(None),
                StubMode::Fail => Err(ServiceError::Http("connection refused".to_string())),
            }
        }
    }

    fn test_router(stub: Arc<StubGenerator>) -> Router {
        let state = Arc::new(AppState {
            organizer: OrganizerService::new(stub),
        });
        router(state)
    }

    fn organize_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/organize")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_valid_transcript_returns_blocks() {
        let stub = StubGenerator::new(StubMode::Text(
            r#"{"blocks":[{"category":"Greeting","messages":["User: hi","Assistant: hello"]}]}"#,
        ));
        let response = test_router(stub.clone())
            .oneshot(organize_request(
                r#"{"conversation":"User: hi\nAssistant: hello"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let blocks = json["blocks"].as_array().unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0]["category"].as_str().unwrap(), "Greeting");
        assert_eq!(blocks[0]["messages"][0].as_str().unwrap(), "User: hi");
        assert_eq!(blocks[0]["messages"][1].as_str().unwrap(), "Assistant: hello");
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_missing_conversation_is_rejected_without_model_call() {
        let stub = StubGenerator::new(StubMode::Text("{}"));
        let response = test_router(stub.clone())
            .oneshot(organize_request("{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(
            json["error"].as_str().unwrap(),
            "A conversation string is required."
        );
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_non_string_conversation_is_rejected_without_model_call() {
        let stub = StubGenerator::new(StubMode::Text("{}"));
        let response = test_router(stub.clone())
            .oneshot(organize_request(r#"{"conversation":42}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(
            json["error"].as_str().unwrap(),
            "A conversation string is required."
        );
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_conversation_is_rejected_without_model_call() {
        let stub = StubGenerator::new(StubMode::Text("{}"));
        let response = test_router(stub.clone())
            .oneshot(organize_request(r#"{"conversation":""}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_malformed_model_output_returns_generic_failure() {
        let stub = StubGenerator::new(StubMode::Text("this is not json"));
        let response = test_router(stub)
            .oneshot(organize_request(r#"{"conversation":"User: hi"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(
            json["error"].as_str().unwrap(),
            "Failed to organize conversation. Please try again."
        );
    }

    #[tokio::test]
    async fn test_empty_model_output_returns_generic_failure() {
        let stub = StubGenerator::new(StubMode::Empty);
        let response = test_router(stub)
            .oneshot(organize_request(r#"{"conversation":"User: hi"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(
            json["error"].as_str().unwrap(),
            "Failed to organize conversation. Please try again."
        );
    }

    #[tokio::test]
    async fn test_upstream_failure_returns_generic_failure() {
        let stub = StubGenerator::new(StubMode::Fail);
        let response = test_router(stub)
            .oneshot(organize_request(r#"{"conversation":"User: hi"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(
            json["error"].as_str().unwrap(),
            "Failed to organize conversation. Please try again."
        );
    }
}
