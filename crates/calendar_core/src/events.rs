//! Event filtering, ordering and overlap queries.
//!
//! # Responsibility
//! - Select the events shown on a day, in a date range or in an hour slot.
//! - Detect time conflicts between a candidate and existing events.
//!
//! # Invariants
//! - Queries never mutate or reorder their input slice.
//! - Interval comparisons are strict: touching intervals do not overlap and
//!   range edges are exclusive.

use crate::dates::{at_hour, end_of_day, is_same_day, start_of_day};
use crate::model::event::{CalendarEvent, EventDraft};
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use std::cmp::Ordering;

/// Fallback color for events without one.
pub const DEFAULT_EVENT_COLOR: &str = "#3b82f6";

/// Selectable event colors: blue, red, emerald, amber, violet, cyan, lime, orange.
pub const EVENT_COLORS: [&str; 8] = [
    DEFAULT_EVENT_COLOR,
    "#ef4444",
    "#10b981",
    "#f59e0b",
    "#8b5cf6",
    "#06b6d4",
    "#84cc16",
    "#f97316",
];

pub const EVENT_CATEGORIES: [&str; 8] = [
    "Meeting",
    "Personal",
    "Work",
    "Health",
    "Travel",
    "Education",
    "Social",
    "Other",
];

const DEFAULT_START_HOUR: u32 = 9;
const DEFAULT_END_HOUR: u32 = 10;

fn strictly_between(value: NaiveDateTime, low: NaiveDateTime, high: NaiveDateTime) -> bool {
    low < value && value < high
}

/// Returns the events that touch `date`.
///
/// An event is included when it starts or ends on `date`, or when `date`
/// lies strictly inside the event's day span (multi-day events).
pub fn events_on_date(events: &[CalendarEvent], date: NaiveDate) -> Vec<&CalendarEvent> {
    let target = start_of_day(date);
    events
        .iter()
        .filter(|event| {
            is_same_day(&event.start, &date)
                || is_same_day(&event.end, &date)
                || strictly_between(
                    target,
                    start_of_day(event.start.date()),
                    end_of_day(event.end.date()),
                )
        })
        .collect()
}

/// Returns the events that intersect the day range `range_start..=range_end`.
///
/// Event and range bounds are widened to whole days, then compared strictly:
/// an event is included when its start or end lies strictly inside the
/// range, or when it strictly contains the range. Bounds that coincide with
/// the range edges do not count.
pub fn events_in_range(
    events: &[CalendarEvent],
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> Vec<&CalendarEvent> {
    let low = start_of_day(range_start);
    let high = end_of_day(range_end);
    events
        .iter()
        .filter(|event| {
            let event_start = start_of_day(event.start.date());
            let event_end = end_of_day(event.end.date());
            strictly_between(event_start, low, high)
                || strictly_between(event_end, low, high)
                || (event_start < low && event_end > high)
        })
        .collect()
}

fn compare_by_start(a: &CalendarEvent, b: &CalendarEvent) -> Ordering {
    a.start.cmp(&b.start).then_with(|| a.end.cmp(&b.end))
}

/// Orders events by start, then by end. The sort is stable.
pub fn sort_by_start<'a, I>(events: I) -> Vec<&'a CalendarEvent>
where
    I: IntoIterator<Item = &'a CalendarEvent>,
{
    let mut sorted: Vec<_> = events.into_iter().collect();
    sorted.sort_by(|a, b| compare_by_start(a, b));
    sorted
}

fn intervals_overlap(a: &CalendarEvent, b: &CalendarEvent) -> bool {
    strictly_between(b.start, a.start, a.end)
        || strictly_between(b.end, a.start, a.end)
        || strictly_between(a.start, b.start, b.end)
        || strictly_between(a.end, b.start, b.end)
}

/// Returns the events, other than `candidate` itself, whose interval
/// overlaps the candidate's.
pub fn overlapping_events<'a>(
    events: &'a [CalendarEvent],
    candidate: &CalendarEvent,
) -> Vec<&'a CalendarEvent> {
    events
        .iter()
        .filter(|event| event.id != candidate.id && intervals_overlap(candidate, event))
        .collect()
}

/// Returns whether any other event overlaps `candidate`.
pub fn has_overlap(events: &[CalendarEvent], candidate: &CalendarEvent) -> bool {
    events
        .iter()
        .any(|event| event.id != candidate.id && intervals_overlap(candidate, event))
}

/// Events on `date` occupying the hourly slot `hour` (start hour <= hour < end hour).
///
/// Only the clock hours of start and end are compared, never their dates. On
/// every day a multi-day event spans it fills the same start..end hour slots,
/// so an overnight event (22:00 to 02:00) fills none on the days it passes
/// through. An event ending at 10:30 does not fill the 10:00 slot.
pub fn events_for_hour(
    events: &[CalendarEvent],
    date: NaiveDate,
    hour: u32,
) -> Vec<&CalendarEvent> {
    events_on_date(events, date)
        .into_iter()
        .filter(|event| event.start.hour() <= hour && hour < event.end.hour())
        .collect()
}

/// Default draft for a click on `date`: 09:00-10:00 with the first palette
/// color and first category.
pub fn draft_for_date(date: NaiveDate, title: impl Into<String>) -> EventDraft {
    let mut draft = EventDraft::new(
        title,
        at_hour(date, DEFAULT_START_HOUR),
        at_hour(date, DEFAULT_END_HOUR),
    );
    draft.color = Some(EVENT_COLORS[0].to_string());
    draft.category = Some(EVENT_CATEGORIES[0].to_string());
    draft
}

/// Color to render `event` with.
pub fn display_color(event: &CalendarEvent) -> &str {
    event.color.as_deref().unwrap_or(DEFAULT_EVENT_COLOR)
}
