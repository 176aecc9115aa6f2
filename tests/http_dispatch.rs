// tests/http_dispatch.rs
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use axum::response::IntoResponse;
use axum::routing::any;
use axum::{Json, Router};
use serde_json::{Value, json};
use tower::util::ServiceExt as _;

use promptbase_core::application::error::ApplicationError;
use promptbase_core::domain::access::{AccessRule, Actor, AdminOnly};
use promptbase_core::domain::content::ContentItem;
use promptbase_core::domain::user::UserId;
use promptbase_core::presentation::http::error::{HttpError, IntoHttpResult};
use promptbase_core::presentation::http::extractors::RequestAccess;

async fn describe(RequestAccess(request): RequestAccess) -> Json<Value> {
    Json(json!({
        "safe": request.is_safe_method(),
        "authenticated": request.actor().is_some(),
        "staff": request.is_staff(),
    }))
}

async fn staff_only(RequestAccess(request): RequestAccess) -> axum::response::Response {
    let allowed = AccessRule::<ContentItem>::has_permission(&AdminOnly, &request);
    let outcome: Result<(), ApplicationError> = if allowed {
        Ok(())
    } else {
        Err(ApplicationError::forbidden("staff only"))
    };
    match outcome.into_http() {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}

fn router() -> Router {
    Router::new()
        .route("/describe", any(describe))
        .route("/staff-only", any(staff_only))
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn anonymous_get_is_safe_and_unauthenticated() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/describe")
        .body(Body::empty())
        .unwrap();

    let response = router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body, json!({ "safe": true, "authenticated": false, "staff": false }));
}

#[tokio::test]
async fn actor_extension_is_picked_up() {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/describe")
        .extension(Actor::new(UserId::generate(), true))
        .body(Body::empty())
        .unwrap();

    let response = router().oneshot(request).await.unwrap();
    let body = json_body(response).await;
    assert_eq!(body, json!({ "safe": false, "authenticated": true, "staff": true }));
}

#[tokio::test]
async fn denied_write_becomes_403_with_reason() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/staff-only")
        .extension(Actor::new(UserId::generate(), false))
        .body(Body::empty())
        .unwrap();

    let response = router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Forbidden");
    assert_eq!(body["message"], "staff only");
}

#[tokio::test]
async fn staff_write_passes() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/staff-only")
        .extension(Actor::new(UserId::generate(), true))
        .body(Body::empty())
        .unwrap();

    let response = router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[test]
fn http_error_reports_status() {
    let err = HttpError::from_error(ApplicationError::method_not_allowed("GET"));
    assert_eq!(err.status(), StatusCode::METHOD_NOT_ALLOWED);
}
