//! InvokeMethod - Query handler resolving a method by name and calling it.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::ports::MethodInvoker;

/// Query naming the method to invoke.
#[derive(Debug, Clone)]
pub struct InvokeMethodQuery {
    pub method_name: String,
}

impl InvokeMethodQuery {
    pub fn new(method_name: impl Into<String>) -> Self {
        Self {
            method_name: method_name.into(),
        }
    }
}

/// Handler for invoking named methods.
pub struct InvokeMethodHandler {
    invoker: Arc<dyn MethodInvoker>,
}

impl InvokeMethodHandler {
    pub fn new(invoker: Arc<dyn MethodInvoker>) -> Self {
        Self { invoker }
    }

    pub fn handle(&self, query: InvokeMethodQuery) -> Result<String, DomainError> {
        self.invoker.invoke(&query.method_name).map_err(|e| {
            tracing::warn!(method = %query.method_name, error = %e, "Method invocation failed");
            e
        })
    }
}
