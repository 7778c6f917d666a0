//! HTTP handlers for greeting endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::application::handlers::greeting::{
    HelloHandler, HelloQuery, InvokeMethodHandler, InvokeMethodQuery, MarryCommand,
    MarryHandler,
};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::greeting::{MethodRegistry, REFLECT_METHOD};
use crate::ports::MethodInvoker;

use super::dto::{ErrorResponse, PersonRequest, PersonResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct GreetingHandlers {
    hello_handler: Arc<HelloHandler>,
    marry_handler: Arc<MarryHandler>,
    invoke_handler: Arc<InvokeMethodHandler>,
}

impl GreetingHandlers {
    pub fn new(
        hello_handler: Arc<HelloHandler>,
        marry_handler: Arc<MarryHandler>,
        invoke_handler: Arc<InvokeMethodHandler>,
    ) -> Self {
        Self {
            hello_handler,
            marry_handler,
            invoke_handler,
        }
    }

    /// Builds the handler set around a specific method invoker.
    pub fn with_invoker(invoker: Arc<dyn MethodInvoker>) -> Self {
        Self::new(
            Arc::new(HelloHandler::new()),
            Arc::new(MarryHandler::new()),
            Arc::new(InvokeMethodHandler::new(invoker)),
        )
    }
}

impl Default for GreetingHandlers {
    fn default() -> Self {
        Self::with_invoker(Arc::new(MethodRegistry::with_greeting_methods()))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET / - Canned greeting
pub async fn hello(State(handlers): State<GreetingHandlers>) -> Json<PersonResponse> {
    let person = handlers.hello_handler.handle(HelloQuery);
    Json(person.into())
}

/// GET /suspend - Canned greeting through a suspending handler
pub async fn suspend_hello(State(handlers): State<GreetingHandlers>) -> Json<PersonResponse> {
    let person = handlers.hello_handler.handle_suspending(HelloQuery).await;
    Json(person.into())
}

/// GET /suspendList - One-element list of the canned greeting
pub async fn suspend_hello_list(
    State(handlers): State<GreetingHandlers>,
) -> Json<Vec<PersonResponse>> {
    let people = handlers
        .hello_handler
        .handle_suspending_list(HelloQuery)
        .await;
    Json(people.into_iter().map(PersonResponse::from).collect())
}

/// POST / - Give the posted person the family surname
pub async fn marry(
    State(handlers): State<GreetingHandlers>,
    payload: Result<Json<PersonRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return handle_rejection(rejection),
    };

    let cmd = MarryCommand {
        person: req.into(),
    };
    let married = handlers.marry_handler.handle(cmd);
    (StatusCode::OK, Json(PersonResponse::from(married))).into_response()
}

/// GET /create - Invoke the `reflect` method by name, answer in plain text
pub async fn create(State(handlers): State<GreetingHandlers>) -> Response {
    match handlers
        .invoke_handler
        .handle(InvokeMethodQuery::new(REFLECT_METHOD))
    {
        Ok(text) => (StatusCode::OK, text).into_response(),
        Err(e) => handle_greeting_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_rejection(rejection: JsonRejection) -> Response {
    let status = rejection.status();
    tracing::debug!(%status, error = %rejection.body_text(), "Rejected request body");
    (status, Json(ErrorResponse::bad_request(rejection.body_text()))).into_response()
}

fn handle_greeting_error(error: DomainError) -> Response {
    match error.code() {
        ErrorCode::MethodNotFound | ErrorCode::InvocationFailed => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                code: error.code().to_string(),
                message: error.message().to_string(),
                details: None,
            }
            .with_details(json!(error.details))),
        )
            .into_response(),
        ErrorCode::InternalError => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal(error.message())),
        )
            .into_response(),
    }
}
