//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (write-shaped input) are kept apart from query handlers.

pub mod handlers;

pub use handlers::{
    HelloHandler, HelloQuery, InvokeMethodHandler, InvokeMethodQuery, MarryCommand,
    MarryHandler,
};
