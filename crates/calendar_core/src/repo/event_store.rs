//! Event store contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide add/update/delete/get over one session's events.
//! - Preserve insertion order for listing.
//!
//! # Invariants
//! - `add_event` always assigns a fresh id from the store's generator.
//! - `update_event` never changes an event's id.
//! - Unknown ids leave the store unchanged.

use crate::model::event::{CalendarEvent, EventDraft, EventId, EventPatch};
use crate::repo::id_generator::{EventIdGenerator, UuidEventIdGenerator};
use log::debug;

/// Store interface for calendar event lifecycle operations.
pub trait EventRepository {
    /// Stores `draft` under a fresh id and returns the stored event.
    fn add_event(&mut self, draft: EventDraft) -> CalendarEvent;

    /// Merges `patch` into the event with `id`.
    ///
    /// Returns `false` (and changes nothing) when no such event exists.
    fn update_event(&mut self, id: &EventId, patch: &EventPatch) -> bool;

    /// Removes the event with `id`, returning it when it was present.
    fn delete_event(&mut self, id: &EventId) -> Option<CalendarEvent>;

    fn get_event(&self, id: &EventId) -> Option<&CalendarEvent>;

    /// All events in insertion order.
    fn list_events(&self) -> &[CalendarEvent];

    fn len(&self) -> usize {
        self.list_events().len()
    }

    fn is_empty(&self) -> bool {
        self.list_events().is_empty()
    }
}

/// Vec-backed event store owned by one calendar session.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventStore<G: EventIdGenerator = UuidEventIdGenerator> {
    events: Vec<CalendarEvent>,
    ids: G,
}

impl InMemoryEventStore {
    /// Creates an empty store with random UUID-based ids.
    pub fn new() -> Self {
        Self::with_id_generator(UuidEventIdGenerator)
    }
}

impl<G: EventIdGenerator> InMemoryEventStore<G> {
    /// Creates an empty store that draws ids from `ids`.
    pub fn with_id_generator(ids: G) -> Self {
        Self {
            events: Vec::new(),
            ids,
        }
    }

    fn position(&self, id: &EventId) -> Option<usize> {
        self.events.iter().position(|event| &event.id == id)
    }
}

impl<G: EventIdGenerator> EventRepository for InMemoryEventStore<G> {
    fn add_event(&mut self, draft: EventDraft) -> CalendarEvent {
        let event = CalendarEvent::from_draft(self.ids.next_id(), draft);
        self.events.push(event.clone());
        debug!(
            "event=event_add module=store status=ok id={} count={}",
            event.id,
            self.events.len()
        );
        event
    }

    fn update_event(&mut self, id: &EventId, patch: &EventPatch) -> bool {
        match self.position(id) {
            Some(index) => {
                self.events[index].apply_patch(patch);
                debug!("event=event_update module=store status=ok id={id}");
                true
            }
            None => {
                debug!("event=event_update module=store status=skipped reason=not_found id={id}");
                false
            }
        }
    }

    fn delete_event(&mut self, id: &EventId) -> Option<CalendarEvent> {
        let index = self.position(id)?;
        let removed = self.events.remove(index);
        debug!(
            "event=event_delete module=store status=ok id={id} count={}",
            self.events.len()
        );
        Some(removed)
    }

    fn get_event(&self, id: &EventId) -> Option<&CalendarEvent> {
        self.events.iter().find(|event| &event.id == id)
    }

    fn list_events(&self) -> &[CalendarEvent] {
        &self.events
    }
}
