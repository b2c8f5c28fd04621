//! Event identifier generators.
//!
//! # Invariants
//! - A generator instance never yields the same id twice.
//! - Generated ids do not depend on wall-clock time.

use crate::model::event::EventId;
use uuid::Uuid;

const EVENT_ID_PREFIX: &str = "event_";

/// Source of fresh event identifiers for one store.
pub trait EventIdGenerator {
    /// Returns an id this generator has not returned before.
    fn next_id(&mut self) -> EventId;
}

/// Random v4 UUID ids, collision-resistant across stores and sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidEventIdGenerator;

impl EventIdGenerator for UuidEventIdGenerator {
    fn next_id(&mut self) -> EventId {
        EventId::new(format!("{EVENT_ID_PREFIX}{}", Uuid::new_v4().simple()))
    }
}

/// Monotonic counter ids (`event_1`, `event_2`, ...), unique per instance.
#[derive(Debug, Clone)]
pub struct SequentialEventIdGenerator {
    next: u64,
}

impl SequentialEventIdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }
}

impl Default for SequentialEventIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl EventIdGenerator for SequentialEventIdGenerator {
    fn next_id(&mut self) -> EventId {
        let id = EventId::new(format!("{EVENT_ID_PREFIX}{}", self.next));
        self.next += 1;
        id
    }
}
