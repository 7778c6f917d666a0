//! Domain layer containing the greeting types and the method registry.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (errors)
//! - `greeting` - The `Person` record, its transformations and named methods

pub mod foundation;
pub mod greeting;
