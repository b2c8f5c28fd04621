//! Event store abstractions and the in-memory implementation.
//!
//! # Responsibility
//! - Define the session-scoped event store contract.
//! - Keep identifier generation behind an injectable generator.
//!
//! # Invariants
//! - Stores never validate; validation belongs to callers (see `service`).
//! - Operations on unknown ids are no-ops, reported through return values.

pub mod event_store;
pub mod id_generator;
