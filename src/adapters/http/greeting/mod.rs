//! HTTP adapter for greeting endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ErrorResponse, PersonRequest, PersonResponse};
pub use handlers::GreetingHandlers;
pub use routes::greeting_routes;
