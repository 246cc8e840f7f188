use super::test_support::{send, test_router};
use super::*;

#[test]
fn backend_error_to_status_maps_taxonomy() {
    assert_eq!(backend_error_to_status(&BackendError::Unauthorized), StatusCode::UNAUTHORIZED);
    assert_eq!(backend_error_to_status(&BackendError::NotFound), StatusCode::NOT_FOUND);
    assert_eq!(backend_error_to_status(&BackendError::PendingConfirmation), StatusCode::ACCEPTED);
    assert_eq!(
        backend_error_to_status(&BackendError::InvalidInput("x".into())),
        StatusCode::UNPROCESSABLE_ENTITY
    );
    assert_eq!(backend_error_to_status(&BackendError::Request("refused".into())), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        backend_error_to_status(&BackendError::Response { status: 500, body: String::new() }),
        StatusCode::BAD_GATEWAY
    );
    assert_eq!(backend_error_to_status(&BackendError::Parse("eof".into())), StatusCode::BAD_GATEWAY);
    assert_eq!(
        backend_error_to_status(&BackendError::HttpClientBuild("tls".into())),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn backend_failure_surfaces_invalid_input_reason() {
    let (status, Json(body)) = backend_failure(BackendError::InvalidInput("user already registered".into()), "sign up");
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body.error, "user already registered");
}

#[test]
fn backend_failure_hides_upstream_details() {
    let err = BackendError::Response { status: 500, body: "stack trace".into() };
    let (status, Json(body)) = backend_failure(err, "fetch workouts");
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body.error, "fetch workouts failed");
}

#[tokio::test]
async fn healthz_ok() {
    let app = test_router();
    let response = send(&app, "GET", "/healthz", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);
}
