//! Calendar domain model.
//!
//! # Responsibility
//! - Define the canonical event record and its insert/patch shapes.
//! - Own the field-level validation rules applied before store writes.
//!
//! # Invariants
//! - Every stored event is identified by a store-generated `EventId`.
//! - `start <= end` is a validation rule; the store itself does not enforce it.

pub mod event;
pub mod validation;
