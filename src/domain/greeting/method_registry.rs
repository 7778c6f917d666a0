//! Method Registry - explicit name to method table for the greeting resource.
//!
//! Methods are zero-argument functions producing text. They are registered
//! under a name at startup and resolved by that name at request time.
//!
//! # Example
//!
//! ```
//! use greeting_service::domain::greeting::MethodRegistry;
//!
//! let mut registry = MethodRegistry::new();
//! registry
//!     .register("shout", || Ok("HELLO".to_string()))
//!     .unwrap();
//!
//! assert_eq!(registry.invoke("shout").unwrap(), "HELLO");
//! assert!(registry.invoke("whisper").is_err());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, ValidationError};

/// Name under which [`reflect`] is registered.
pub const REFLECT_METHOD: &str = "reflect";

/// A registered method.
pub type Method = Arc<dyn Fn() -> Result<String, DomainError> + Send + Sync>;

/// The method behind `GET /create`.
pub fn reflect() -> String {
    "hello, world".to_string()
}

/// Registry of named methods.
#[derive(Clone, Default)]
pub struct MethodRegistry {
    methods: HashMap<String, Method>,
}

impl MethodRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            methods: HashMap::new(),
        }
    }

    /// Creates a registry holding the methods of the greeting resource.
    pub fn with_greeting_methods() -> Self {
        let mut registry = Self::new();
        registry.insert(REFLECT_METHOD.to_string(), Arc::new(|| Ok(reflect())));
        registry
    }

    /// Registers a method under `name`, replacing any earlier registration.
    ///
    /// Names must be non-empty and free of whitespace.
    pub fn register<F>(&mut self, name: impl Into<String>, method: F) -> Result<(), ValidationError>
    where
        F: Fn() -> Result<String, DomainError> + Send + Sync + 'static,
    {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::empty_field("method_name"));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(ValidationError::invalid_format(
                "method_name",
                "must not contain whitespace",
            ));
        }
        self.insert(name, Arc::new(method));
        Ok(())
    }

    fn insert(&mut self, name: String, method: Method) {
        if self.methods.insert(name.clone(), method).is_some() {
            tracing::debug!(method = %name, "Replaced registered method");
        }
    }

    /// Resolves `name` and invokes the method.
    pub fn invoke(&self, name: &str) -> Result<String, DomainError> {
        let method = self
            .methods
            .get(name)
            .ok_or_else(|| DomainError::method_not_found(name))?;
        method()
    }

    /// Checks whether a method is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.methods.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered methods.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Checks whether no methods are registered.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl fmt::Debug for MethodRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodRegistry")
            .field("methods", &self.names())
            .finish()
    }
}
