//! Core use-case services.
//!
//! # Responsibility
//! - Combine validation with event store writes.
//! - Keep presentation layers decoupled from store implementations.

pub mod event_service;
