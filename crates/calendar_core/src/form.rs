//! Event editing form model.
//!
//! # Responsibility
//! - Hold the string-valued state of the create/edit form.
//! - Normalize form input into a validated `EventDraft`.
//!
//! # Invariants
//! - Title and description are trimmed before validation.
//! - Empty description/category inputs become `None`.
//! - Unparsable date inputs are treated as missing.

use crate::dates::{at_hour, format_date_time, parse_date_time};
use crate::events::DEFAULT_EVENT_COLOR;
use crate::model::event::{CalendarEvent, EventDraft};
use crate::model::validation::{validate_event, EventCandidate, EventValidationError};
use chrono::NaiveDate;

const NEW_EVENT_START_HOUR: u32 = 9;
const NEW_EVENT_END_HOUR: u32 = 10;

/// Raw form fields, as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventForm {
    pub title: String,
    pub description: String,
    /// Datetime-local value, e.g. `2026-10-19T09:00`.
    pub start: String,
    pub end: String,
    pub color: String,
    pub category: String,
}

impl Default for EventForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            start: String::new(),
            end: String::new(),
            color: DEFAULT_EVENT_COLOR.to_string(),
            category: String::new(),
        }
    }
}

impl EventForm {
    /// Blank form for a new event on `date`, prefilled 09:00-10:00.
    pub fn for_new_event(date: NaiveDate) -> Self {
        Self {
            start: format_date_time(at_hour(date, NEW_EVENT_START_HOUR)),
            end: format_date_time(at_hour(date, NEW_EVENT_END_HOUR)),
            ..Self::default()
        }
    }

    /// Form prefilled from a stored event.
    pub fn from_event(event: &CalendarEvent) -> Self {
        Self {
            title: event.title.clone(),
            description: event.description.clone().unwrap_or_default(),
            start: format_date_time(event.start),
            end: format_date_time(event.end),
            color: event
                .color
                .clone()
                .unwrap_or_else(|| DEFAULT_EVENT_COLOR.to_string()),
            category: event.category.clone().unwrap_or_default(),
        }
    }

    /// Normalized candidate for validation.
    pub fn to_candidate(&self) -> EventCandidate {
        EventCandidate {
            title: Some(self.title.trim().to_string()),
            description: non_empty(self.description.trim()),
            start: parse_date_time(&self.start).ok(),
            end: parse_date_time(&self.end).ok(),
            color: non_empty(self.color.trim()),
            category: non_empty(self.category.trim()),
        }
    }

    /// Validation errors for the current input, empty when submittable.
    pub fn errors(&self) -> Vec<EventValidationError> {
        validate_event(&self.to_candidate())
    }

    /// Validates and converts the form into a storable draft.
    ///
    /// # Errors
    /// - Returns every failed validation rule.
    pub fn submit(&self) -> Result<EventDraft, Vec<EventValidationError>> {
        self.to_candidate().into_draft()
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
