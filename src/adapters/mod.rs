//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `http` - REST endpoints served with axum
pub mod http;
