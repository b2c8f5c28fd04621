//! Event field validation.
//!
//! # Responsibility
//! - Check a partially filled event before it reaches the store.
//! - Report every failing rule at once, in a stable order.
//!
//! # Invariants
//! - Validation is pure and never mutates its input.
//! - An empty error list implies `start <= end` and a usable title.

use crate::model::event::{CalendarEvent, EventDraft};
use chrono::NaiveDateTime;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Maximum title length, counted in Unicode scalar values.
pub const MAX_TITLE_CHARS: usize = 100;

/// Partially filled event as produced by an editing form or import path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventCandidate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub color: Option<String>,
    pub category: Option<String>,
}

/// One failed validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventValidationError {
    /// Title is missing or blank after trimming.
    TitleRequired,
    /// Title exceeds `MAX_TITLE_CHARS`.
    TitleTooLong { chars: usize },
    StartRequired,
    EndRequired,
    /// Start instant is after end instant.
    EndBeforeStart {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl Display for EventValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TitleRequired => write!(f, "Title is required"),
            Self::TitleTooLong { .. } => {
                write!(f, "Title must be {MAX_TITLE_CHARS} characters or less")
            }
            Self::StartRequired => write!(f, "Start date is required"),
            Self::EndRequired => write!(f, "End date is required"),
            Self::EndBeforeStart { .. } => write!(f, "End date must be after start date"),
        }
    }
}

impl Error for EventValidationError {}

impl From<&EventDraft> for EventCandidate {
    fn from(value: &EventDraft) -> Self {
        Self {
            title: Some(value.title.clone()),
            description: value.description.clone(),
            start: Some(value.start),
            end: Some(value.end),
            color: value.color.clone(),
            category: value.category.clone(),
        }
    }
}

impl From<&CalendarEvent> for EventCandidate {
    fn from(value: &CalendarEvent) -> Self {
        Self::from(&value.to_draft())
    }
}

impl EventCandidate {
    /// Validates and converts into a storable draft.
    ///
    /// # Errors
    /// - Returns every failed rule when validation does not pass.
    pub fn into_draft(self) -> Result<EventDraft, Vec<EventValidationError>> {
        let errors = validate_event(&self);
        match (self.title, self.start, self.end) {
            (Some(title), Some(start), Some(end)) if errors.is_empty() => Ok(EventDraft {
                title,
                description: self.description,
                start,
                end,
                color: self.color,
                category: self.category,
            }),
            _ => Err(errors),
        }
    }
}

/// Validates a candidate event and returns all failed rules.
///
/// Rule order is stable: title presence, title length, start presence,
/// end presence, start/end ordering.
pub fn validate_event(candidate: &EventCandidate) -> Vec<EventValidationError> {
    let mut errors = Vec::new();

    let title = candidate.title.as_deref().unwrap_or_default();
    if title.trim().is_empty() {
        errors.push(EventValidationError::TitleRequired);
    }

    let chars = title.chars().count();
    if chars > MAX_TITLE_CHARS {
        errors.push(EventValidationError::TitleTooLong { chars });
    }

    if candidate.start.is_none() {
        errors.push(EventValidationError::StartRequired);
    }
    if candidate.end.is_none() {
        errors.push(EventValidationError::EndRequired);
    }

    if let (Some(start), Some(end)) = (candidate.start, candidate.end) {
        if start > end {
            errors.push(EventValidationError::EndBeforeStart { start, end });
        }
    }

    errors
}

/// Renders validation errors as user-facing messages.
pub fn validation_messages(errors: &[EventValidationError]) -> Vec<String> {
    errors.iter().map(ToString::to_string).collect()
}
