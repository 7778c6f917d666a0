//! HTTP adapters - REST API implementations.
//!
//! Each resource has its own HTTP adapter for endpoint exposure.

pub mod app;
pub mod greeting;

// Re-export key types for convenience
pub use app::{app_router, serve};
pub use greeting::{greeting_routes, GreetingHandlers};
