//! Per-day projections consumed by month and week layouts.

use crate::dates::{calendar_grid, is_same_month, week_days, HOURS_PER_DAY};
use crate::events::{events_for_hour, events_on_date};
use crate::model::event::CalendarEvent;
use chrono::NaiveDate;

/// Events listed in a month cell before the rest collapse into a counter.
pub const MAX_VISIBLE_EVENTS_PER_CELL: usize = 3;

/// One month-grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell<'a> {
    pub date: NaiveDate,
    /// False for leading/trailing days borrowed from adjacent months.
    pub is_current_month: bool,
    pub is_today: bool,
    /// Events on this day, in store order.
    pub events: Vec<&'a CalendarEvent>,
}

impl<'a> DayCell<'a> {
    pub fn visible_events(&self) -> &[&'a CalendarEvent] {
        let shown = self.events.len().min(MAX_VISIBLE_EVENTS_PER_CELL);
        &self.events[..shown]
    }

    /// Number of events hidden behind a "+N more" marker.
    pub fn hidden_count(&self) -> usize {
        self.events.len().saturating_sub(MAX_VISIBLE_EVENTS_PER_CELL)
    }
}

/// Builds the 42 month cells for `reference`'s month.
pub fn month_cells<'a>(
    events: &'a [CalendarEvent],
    reference: NaiveDate,
    today: NaiveDate,
) -> Vec<DayCell<'a>> {
    calendar_grid(reference)
        .into_iter()
        .map(|date| DayCell {
            date,
            is_current_month: is_same_month(&date, &reference),
            is_today: date == today,
            events: events_on_date(events, date),
        })
        .collect()
}

/// One week-view day column split into hourly slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekColumn<'a> {
    pub date: NaiveDate,
    /// `slots[h]` holds the events occupying hour `h`.
    pub slots: Vec<Vec<&'a CalendarEvent>>,
}

/// Builds the seven day columns of the week containing `reference`.
pub fn week_columns(events: &[CalendarEvent], reference: NaiveDate) -> Vec<WeekColumn<'_>> {
    week_days(reference)
        .into_iter()
        .map(|date| WeekColumn {
            date,
            slots: (0..HOURS_PER_DAY)
                .map(|hour| events_for_hour(events, date, hour))
                .collect(),
        })
        .collect()
}
