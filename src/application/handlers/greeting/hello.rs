//! Hello - Query handler returning the canned person.

use crate::domain::greeting::Person;

/// Query for the canned greeting. Carries no input.
#[derive(Debug, Clone, Default)]
pub struct HelloQuery;

/// Handler for hello queries.
#[derive(Debug, Clone, Default)]
pub struct HelloHandler;

impl HelloHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, _query: HelloQuery) -> Person {
        Person::jim()
    }

    /// Same result as [`handle`](Self::handle), passing through one
    /// cooperative yield point first.
    pub async fn handle_suspending(&self, query: HelloQuery) -> Person {
        tokio::task::yield_now().await;
        self.handle(query)
    }

    /// One-element list form of [`handle_suspending`](Self::handle_suspending).
    pub async fn handle_suspending_list(&self, query: HelloQuery) -> Vec<Person> {
        vec![self.handle_suspending(query).await]
    }
}
