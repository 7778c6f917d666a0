//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application and the outside world. Adapters implement these ports.
//!
//! - `MethodInvoker` - Resolves a method by name and invokes it

mod method_invoker;

pub use method_invoker::MethodInvoker;
