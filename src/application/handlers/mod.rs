//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod greeting;

pub use greeting::{
    HelloHandler, HelloQuery, InvokeMethodHandler, InvokeMethodQuery, MarryCommand,
    MarryHandler,
};
