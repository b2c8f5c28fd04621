//! Calendar event model.
//!
//! # Responsibility
//! - Define the stored `CalendarEvent` record and its id-less `EventDraft`.
//! - Provide the typed partial-update (`EventPatch`) merge.
//!
//! # Invariants
//! - `id` is assigned once by the store and never changed by a patch.
//! - Patch fields left as `None` keep the current value.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Opaque, store-generated event identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Wraps an existing identifier value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for EventId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Event fields without an identifier; input to `EventRepository::add_event`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub description: Option<String>,
    /// Wall-clock start instant.
    pub start: NaiveDateTime,
    /// Wall-clock end instant. Validation requires `end >= start`.
    pub end: NaiveDateTime,
    /// Display color, usually one of `events::EVENT_COLORS`.
    pub color: Option<String>,
    pub category: Option<String>,
}

impl EventDraft {
    /// Creates a draft with only the required fields set.
    pub fn new(title: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            title: title.into(),
            description: None,
            start,
            end,
            color: None,
            category: None,
        }
    }
}

/// Stored calendar event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: EventId,
    pub title: String,
    pub description: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub color: Option<String>,
    pub category: Option<String>,
}

impl CalendarEvent {
    /// Binds a draft to an identifier.
    pub fn from_draft(id: EventId, draft: EventDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            start: draft.start,
            end: draft.end,
            color: draft.color,
            category: draft.category,
        }
    }

    /// Returns the event fields without the identifier.
    pub fn to_draft(&self) -> EventDraft {
        EventDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            start: self.start,
            end: self.end,
            color: self.color.clone(),
            category: self.category.clone(),
        }
    }

    /// Merges `patch` into this event, keeping every field the patch leaves
    /// unset and always keeping `id`.
    pub fn apply_patch(&mut self, patch: &EventPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(start) = patch.start {
            self.start = start;
        }
        if let Some(end) = patch.end {
            self.end = end;
        }
        if let Some(color) = &patch.color {
            self.color = color.clone();
        }
        if let Some(category) = &patch.category {
            self.category = category.clone();
        }
    }
}

/// Typed partial update for a stored event.
///
/// Nullable fields use `Option<Option<_>>`: `None` keeps the current value,
/// `Some(None)` clears it, `Some(Some(v))` replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub color: Option<Option<String>>,
    pub category: Option<Option<String>>,
}

impl EventPatch {
    /// Builds a patch that overwrites every field with the draft's values.
    pub fn replace_with(draft: EventDraft) -> Self {
        Self {
            title: Some(draft.title),
            description: Some(draft.description),
            start: Some(draft.start),
            end: Some(draft.end),
            color: Some(draft.color),
            category: Some(draft.category),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    pub fn color(mut self, color: Option<String>) -> Self {
        self.color = Some(color);
        self
    }

    pub fn category(mut self, category: Option<String>) -> Self {
        self.category = Some(category);
        self
    }

    /// Returns whether applying this patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
