//! Marry - Command handler giving a person the family surname.

use crate::domain::greeting::Person;

/// Command carrying the person to marry.
#[derive(Debug, Clone)]
pub struct MarryCommand {
    pub person: Person,
}

/// Handler for marry commands.
#[derive(Debug, Clone, Default)]
pub struct MarryHandler;

impl MarryHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: MarryCommand) -> Person {
        let married = cmd.person.married();
        tracing::debug!(from = %cmd.person, to = %married, "Married person");
        married
    }
}
