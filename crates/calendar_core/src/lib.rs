//! Core domain logic for the calendar.
//! This crate is the single source of truth for event invariants and
//! calendar grid math; presentation layers only render what it derives.

pub mod dates;
pub mod events;
pub mod form;
pub mod logging;
pub mod model;
pub mod navigation;
pub mod repo;
pub mod service;
pub mod views;

pub use dates::{
    calendar_grid, is_same_day, is_same_month, week_days, week_range_label, CalendarDay,
    DateTimeParseError,
};
pub use events::{events_in_range, events_on_date, has_overlap, sort_by_start};
pub use form::EventForm;
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::event::{CalendarEvent, EventDraft, EventId, EventPatch};
pub use model::validation::{
    validate_event, validation_messages, EventCandidate, EventValidationError, MAX_TITLE_CHARS,
};
pub use navigation::{CalendarState, CalendarViewMode};
pub use repo::event_store::{EventRepository, InMemoryEventStore};
pub use repo::id_generator::{EventIdGenerator, SequentialEventIdGenerator, UuidEventIdGenerator};
pub use service::event_service::{EventService, EventServiceError, EventServiceResult};
pub use views::{month_cells, week_columns, DayCell, WeekColumn};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
