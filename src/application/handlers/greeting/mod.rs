//! Greeting application handlers.

mod hello;
mod invoke_method;
mod marry;

pub use hello::{HelloHandler, HelloQuery};
pub use invoke_method::{InvokeMethodHandler, InvokeMethodQuery};
pub use marry::{MarryCommand, MarryHandler};
