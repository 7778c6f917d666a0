//! HTTP routes for greeting endpoints.

use axum::{routing::get, Router};

use super::handlers::{create, hello, marry, suspend_hello, suspend_hello_list, GreetingHandlers};

/// Creates the greeting router with all endpoints.
///
/// Routes:
/// - `GET /` - Canned greeting
/// - `POST /` - Marry the posted person
/// - `GET /suspend` - Canned greeting from a suspending handler
/// - `GET /suspendList` - One-element list from a suspending handler
/// - `GET /create` - Text produced by the `reflect` method
pub fn greeting_routes(handlers: GreetingHandlers) -> Router {
    Router::new()
        .route("/", get(hello).post(marry))
        .route("/suspend", get(suspend_hello))
        .route("/suspendList", get(suspend_hello_list))
        .route("/create", get(create))
        .with_state(handlers)
}
