//! Foundation module - Shared domain primitives.
//!
//! Contains the error vocabulary shared by the greeting domain and the
//! adapters that expose it.

mod errors;

pub use errors::{DomainError, ErrorCode, ValidationError};
