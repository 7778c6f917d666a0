//! Person - the single record exchanged by the greeting resource.

use std::fmt;

/// Name returned by every read endpoint.
pub const DEFAULT_NAME: &str = "Jim Halpert";

/// Surname given to every person passing through `marry`.
pub const SURNAME: &str = "Halpert";

/// Immutable value holding a display name.
///
/// Equality is structural. The name is not validated; any text, including
/// the empty string, is a valid name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The canned person served by the read endpoints.
    pub fn jim() -> Self {
        Self::new(DEFAULT_NAME)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Everything before the first space, or the whole name if it has none.
    pub fn first_name(&self) -> &str {
        self.name
            .split_once(' ')
            .map_or(self.name.as_str(), |(first, _)| first)
    }

    /// Returns a new person keeping the first name and taking [`SURNAME`].
    pub fn married(&self) -> Person {
        Person::new(format!("{} {}", self.first_name(), SURNAME))
    }

    pub fn into_name(self) -> String {
        self.name
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
