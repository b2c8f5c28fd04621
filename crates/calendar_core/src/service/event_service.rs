//! Event use-case service.
//!
//! # Responsibility
//! - Provide validated create/update/delete entry points over an injected store.
//! - Answer the per-day and conflict queries the calendar views need.
//!
//! # Invariants
//! - Every write through this service passes `validate_event` first.
//! - The service owns its store; there is no process-wide event state.

use crate::events::{events_on_date, overlapping_events};
use crate::form::EventForm;
use crate::model::event::{CalendarEvent, EventDraft, EventId, EventPatch};
use crate::model::validation::{validation_messages, EventCandidate, EventValidationError};
use crate::repo::event_store::EventRepository;
use chrono::NaiveDate;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from event service operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventServiceError {
    /// Input failed one or more validation rules.
    Validation(Vec<EventValidationError>),
    /// Target event does not exist.
    EventNotFound(EventId),
}

impl EventServiceError {
    /// User-facing messages for validation failures; empty otherwise.
    pub fn validation_messages(&self) -> Vec<String> {
        match self {
            Self::Validation(errors) => validation_messages(errors),
            Self::EventNotFound(_) => Vec::new(),
        }
    }
}

impl Display for EventServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(errors) => {
                write!(f, "invalid event: {}", validation_messages(errors).join("; "))
            }
            Self::EventNotFound(id) => write!(f, "event not found: {id}"),
        }
    }
}

impl Error for EventServiceError {}

impl From<Vec<EventValidationError>> for EventServiceError {
    fn from(value: Vec<EventValidationError>) -> Self {
        Self::Validation(value)
    }
}

pub type EventServiceResult<T> = Result<T, EventServiceError>;

/// Validated event operations over one session's store.
pub struct EventService<R: EventRepository> {
    repo: R,
}

impl<R: EventRepository> EventService<R> {
    /// Creates a service that owns `repo`.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Releases the owned store.
    pub fn into_repo(self) -> R {
        self.repo
    }

    /// Validates `candidate` and stores it under a fresh id.
    pub fn create_event(&mut self, candidate: EventCandidate) -> EventServiceResult<CalendarEvent> {
        let draft = into_valid_draft(candidate)?;
        let event = self.repo.add_event(draft);
        info!(
            "event=event_create module=service status=ok id={}",
            event.id
        );
        Ok(event)
    }

    /// Validates `candidate` and replaces every field of event `id` with it.
    ///
    /// # Errors
    /// - `Validation` when the candidate is invalid; the store is untouched.
    /// - `EventNotFound` when `id` is unknown.
    pub fn update_event(
        &mut self,
        id: &EventId,
        candidate: EventCandidate,
    ) -> EventServiceResult<CalendarEvent> {
        let draft = into_valid_draft(candidate)?;
        self.apply_patch(id, &EventPatch::replace_with(draft))
    }

    /// Merges a partial update into event `id` and validates the result.
    ///
    /// The merged event is checked before it is written, so an invalid patch
    /// leaves the store unchanged.
    pub fn patch_event(
        &mut self,
        id: &EventId,
        patch: &EventPatch,
    ) -> EventServiceResult<CalendarEvent> {
        let current = self
            .repo
            .get_event(id)
            .ok_or_else(|| EventServiceError::EventNotFound(id.clone()))?;
        let mut merged = current.clone();
        merged.apply_patch(patch);
        into_valid_draft(EventCandidate::from(&merged))?;
        self.apply_patch(id, patch)
    }

    fn apply_patch(&mut self, id: &EventId, patch: &EventPatch) -> EventServiceResult<CalendarEvent> {
        if !self.repo.update_event(id, patch) {
            warn!("event=event_update module=service status=error reason=not_found id={id}");
            return Err(EventServiceError::EventNotFound(id.clone()));
        }
        info!("event=event_update module=service status=ok id={id}");
        self.repo
            .get_event(id)
            .cloned()
            .ok_or_else(|| EventServiceError::EventNotFound(id.clone()))
    }

    /// Saves form input: updates `editing` when given, creates otherwise.
    pub fn save_form(
        &mut self,
        form: &EventForm,
        editing: Option<&EventId>,
    ) -> EventServiceResult<CalendarEvent> {
        let candidate = form.to_candidate();
        match editing {
            Some(id) => self.update_event(id, candidate),
            None => self.create_event(candidate),
        }
    }

    /// Removes event `id`.
    ///
    /// # Errors
    /// - `EventNotFound` when `id` is unknown.
    pub fn delete_event(&mut self, id: &EventId) -> EventServiceResult<CalendarEvent> {
        let removed = self
            .repo
            .delete_event(id)
            .ok_or_else(|| EventServiceError::EventNotFound(id.clone()))?;
        info!("event=event_delete module=service status=ok id={id}");
        Ok(removed)
    }

    pub fn get_event(&self, id: &EventId) -> Option<&CalendarEvent> {
        self.repo.get_event(id)
    }

    pub fn list_events(&self) -> &[CalendarEvent] {
        self.repo.list_events()
    }

    pub fn events_on_date(&self, date: NaiveDate) -> Vec<&CalendarEvent> {
        events_on_date(self.repo.list_events(), date)
    }

    /// Stored events that would overlap `candidate`, excluding itself.
    pub fn conflicts_for(&self, candidate: &CalendarEvent) -> Vec<&CalendarEvent> {
        overlapping_events(self.repo.list_events(), candidate)
    }
}

fn into_valid_draft(candidate: EventCandidate) -> Result<EventDraft, EventServiceError> {
    candidate.into_draft().map_err(|errors| {
        warn!(
            "event=event_validate module=service status=error error_count={}",
            errors.len()
        );
        EventServiceError::Validation(errors)
    })
}
