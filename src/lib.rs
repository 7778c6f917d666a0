//! Greeting Service - a small REST resource around a single `Person` record.
//!
//! The crate exercises JSON serialization, suspending (async) handlers and
//! name-based method invocation through an axum router.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
