//! Greeting domain - the `Person` record and the named methods of the
//! greeting resource.

mod method_registry;
mod person;

pub use method_registry::{reflect, Method, MethodRegistry, REFLECT_METHOD};
pub use person::{Person, DEFAULT_NAME, SURNAME};
