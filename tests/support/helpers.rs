// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks::{FakePasswordHasher, InMemoryBlogStore, TickingClock};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use serde_json::Value;
use tower::util::ServiceExt as _;

use scribe_core::application::ports::{security::PasswordHasher, time::Clock};
use scribe_core::application::services::ApplicationServices;
use scribe_core::domain::account::AccountRepository;
use scribe_core::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use scribe_core::domain::engagement::EngagementRepository;
use scribe_core::presentation::http::{routes::build_router, state::HttpState};

pub fn build_services(store: Arc<InMemoryBlogStore>) -> Arc<ApplicationServices> {
    let account_repo: Arc<dyn AccountRepository> = store.clone();
    let article_write: Arc<dyn ArticleWriteRepository> = store.clone();
    let article_read: Arc<dyn ArticleReadRepository> = store.clone();
    let engagement: Arc<dyn EngagementRepository> = store.clone();
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(FakePasswordHasher);
    let clock: Arc<dyn Clock> = Arc::new(TickingClock::new());

    Arc::new(ApplicationServices::new(
        account_repo,
        article_write,
        article_read,
        engagement,
        password_hasher,
        clock,
    ))
}

pub fn make_test_router() -> axum::Router {
    let store = Arc::new(InMemoryBlogStore::new());
    let services = build_services(store);
    build_router(HttpState { services })
}

pub async fn send_json(
    app: &axum::Router,
    method: &str,
    uri: &str,
    payload: Option<Value>,
) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match payload {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn read_json(response: Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("valid json body")
}

pub async fn expect_json(response: Response, expected_status: StatusCode) -> Value {
    assert_eq!(response.status(), expected_status);
    read_json(response).await
}

/// Assert an `{error, message}` failure body with the expected status.
pub async fn assert_error_response(
    response: Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(response.status(), expected_status);
    let json = read_json(response).await;
    let error = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let message = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(error, expected_error, "unexpected error field: {error}");
    assert!(!message.is_empty(), "expected non-empty message field");
}

/// Registers an account over HTTP and returns its id.
pub async fn signup(app: &axum::Router, name: &str, email: &str) -> i64 {
    let response = send_json(
        app,
        "POST",
        "/accounts/signup",
        Some(serde_json::json!({
            "name": name,
            "email": email,
            "password": "hunter2",
        })),
    )
    .await;
    let json = expect_json(response, StatusCode::CREATED).await;
    json["account"]["id"].as_i64().expect("account id")
}

/// Creates an article over HTTP and returns its id.
pub async fn create_article(app: &axum::Router, title: &str, desc: &str, owner: i64) -> i64 {
    let response = send_json(
        app,
        "POST",
        "/articles",
        Some(serde_json::json!({
            "title": title,
            "desc": desc,
            "owner": owner,
        })),
    )
    .await;
    let json = expect_json(response, StatusCode::OK).await;
    json["article"]["id"].as_i64().expect("article id")
}
