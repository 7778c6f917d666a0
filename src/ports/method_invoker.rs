//! Method invoker port - name-based method invocation.

use crate::domain::foundation::DomainError;
use crate::domain::greeting::MethodRegistry;

/// Port for resolving a zero-argument method by name and calling it.
pub trait MethodInvoker: Send + Sync {
    /// Invokes the method registered under `name` and returns its text.
    ///
    /// # Errors
    ///
    /// - `MethodNotFound` if no method is registered under `name`
    /// - `InvocationFailed` if the method itself fails
    fn invoke(&self, name: &str) -> Result<String, DomainError>;
}

impl MethodInvoker for MethodRegistry {
    fn invoke(&self, name: &str) -> Result<String, DomainError> {
        MethodRegistry::invoke(self, name)
    }
}
