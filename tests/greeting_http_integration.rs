//! Integration tests for greeting HTTP endpoints.
//!
//! These tests drive the fully assembled application router:
//! 1. Every endpoint answers with the expected body and content type
//! 2. Suspending endpoints agree with their plain counterparts
//! 3. Method lookup failures surface as server errors

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use greeting_service::adapters::http::{app_router, GreetingHandlers};
use greeting_service::config::ServerConfig;
use greeting_service::domain::foundation::DomainError;
use greeting_service::domain::greeting::{MethodRegistry, REFLECT_METHOD};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestResponse {
    status: StatusCode,
    content_type: String,
    body: String,
}

impl TestResponse {
    fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

fn app() -> Router {
    app_router(&ServerConfig::default(), GreetingHandlers::default())
}

async fn call(router: Router, request: Request<Body>) -> TestResponse {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    TestResponse {
        status,
        content_type,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

async fn get(router: Router, uri: &str) -> TestResponse {
    call(router, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn post_person(router: Router, body: Value) -> TestResponse {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    call(router, request).await
}

// =============================================================================
// Read endpoints
// =============================================================================

#[tokio::test]
async fn hello_returns_jim_halpert() {
    let response = get(app(), "/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.content_type, "application/json");
    assert_eq!(response.json(), json!({"name": "Jim Halpert"}));
}

#[tokio::test]
async fn suspend_is_equivalent_to_hello() {
    let plain = get(app(), "/").await;
    let suspended = get(app(), "/suspend").await;

    assert_eq!(suspended.status, StatusCode::OK);
    assert_eq!(suspended.json(), plain.json());
}

#[tokio::test]
async fn suspend_list_wraps_hello_in_single_element_list() {
    let plain = get(app(), "/").await;
    let list = get(app(), "/suspendList").await;

    assert_eq!(list.status, StatusCode::OK);
    assert_eq!(list.json(), Value::Array(vec![plain.json()]));
}

// =============================================================================
// Marry
// =============================================================================

#[tokio::test]
async fn marry_keeps_first_name() {
    let response = post_person(app(), json!({"name": "John Doe"})).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.content_type, "application/json");
    assert_eq!(response.json(), json!({"name": "John Halpert"}));
}

#[tokio::test]
async fn marry_single_name_uses_whole_name() {
    let response = post_person(app(), json!({"name": "Pam"})).await;
    assert_eq!(response.json(), json!({"name": "Pam Halpert"}));
}

#[tokio::test]
async fn marry_rejects_missing_name() {
    let response = post_person(app(), json!({})).await;

    assert!(response.status.is_client_error());
    assert_eq!(response.json()["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn marry_rejects_unknown_fields() {
    let response = post_person(app(), json!({"name": "John Doe", "age": 30})).await;
    assert!(response.status.is_client_error());
}

#[tokio::test]
async fn post_to_create_is_method_not_allowed() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/create")
        .body(Body::empty())
        .unwrap();
    let response = call(app(), request).await;
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}

// =============================================================================
// Create (named method invocation)
// =============================================================================

#[tokio::test]
async fn create_returns_plain_text_greeting() {
    let response = get(app(), "/create").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.content_type.starts_with("text/plain"));
    assert_eq!(response.body, "hello, world");
}

#[tokio::test]
async fn create_without_registered_method_is_server_error() {
    let handlers = GreetingHandlers::with_invoker(Arc::new(MethodRegistry::new()));
    let router = app_router(&ServerConfig::default(), handlers);

    let response = get(router, "/create").await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json();
    assert_eq!(body["code"], "METHOD_NOT_FOUND");
    assert_eq!(body["details"]["method"], REFLECT_METHOD);
}

#[tokio::test]
async fn create_with_failing_method_is_server_error() {
    let mut registry = MethodRegistry::new();
    registry
        .register(REFLECT_METHOD, || {
            Err(DomainError::invocation_failed(REFLECT_METHOD, "boom"))
        })
        .unwrap();
    let router = app_router(
        &ServerConfig::default(),
        GreetingHandlers::with_invoker(Arc::new(registry)),
    );

    let response = get(router, "/create").await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json()["code"], "INVOCATION_FAILED");
}

#[tokio::test]
async fn create_uses_replaced_method() {
    let mut registry = MethodRegistry::with_greeting_methods();
    registry
        .register(REFLECT_METHOD, || Ok("goodbye, world".to_string()))
        .unwrap();
    let router = app_router(
        &ServerConfig::default(),
        GreetingHandlers::with_invoker(Arc::new(registry)),
    );

    let response = get(router, "/create").await;
    assert_eq!(response.body, "goodbye, world");
}
