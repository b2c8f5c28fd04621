//! Calendar date math for month and week views.
//!
//! # Responsibility
//! - Generate month grids and Sunday-starting weeks.
//! - Compare instants by calendar day or month.
//! - Format and parse the date/time strings used by the editing form.
//!
//! # Invariants
//! - Weeks start on Sunday.
//! - `calendar_grid` always yields `GRID_DAYS` consecutive days starting on a Sunday,
//!   except at the edges of chrono's date range where it stops short.
//! - Day and week arithmetic saturates at `NaiveDate::MIN`/`MAX` and never panics.

use chrono::{Datelike, Duration, Local, Months, NaiveDate, NaiveDateTime, NaiveTime};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::iter::successors;

/// Number of cells in a month grid (six full weeks).
pub const GRID_DAYS: usize = 42;
pub const DAYS_PER_WEEK: usize = 7;
pub const HOURS_PER_DAY: u32 = 24;

/// Datetime-local form value format, minute precision.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";
const DATE_TIME_SECONDS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// Anything that can be placed on a calendar day.
pub trait CalendarDay {
    fn calendar_day(&self) -> NaiveDate;
}

impl CalendarDay for NaiveDate {
    fn calendar_day(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDay for NaiveDateTime {
    fn calendar_day(&self) -> NaiveDate {
        self.date()
    }
}

/// Returns whether both values fall on the same calendar day.
pub fn is_same_day(a: &impl CalendarDay, b: &impl CalendarDay) -> bool {
    a.calendar_day() == b.calendar_day()
}

/// Returns whether both values fall in the same month of the same year.
pub fn is_same_month(a: &impl CalendarDay, b: &impl CalendarDay) -> bool {
    let (a, b) = (a.calendar_day(), b.calendar_day());
    a.year() == b.year() && a.month() == b.month()
}

/// First day of `date`'s month.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Sunday on or before `date`, or `NaiveDate::MIN` when that Sunday is out of range.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date.checked_sub_signed(Duration::days(i64::from(
        date.weekday().num_days_from_sunday(),
    )))
    .unwrap_or(NaiveDate::MIN)
}

/// Saturday on or after `date`, or `NaiveDate::MAX` when that Saturday is out of range.
pub fn end_of_week(date: NaiveDate) -> NaiveDate {
    start_of_week(date)
        .checked_add_signed(Duration::days(DAYS_PER_WEEK as i64 - 1))
        .unwrap_or(NaiveDate::MAX)
}

/// Six-week month grid for `reference`'s month, starting on the Sunday on or
/// before the first of the month.
pub fn calendar_grid(reference: NaiveDate) -> Vec<NaiveDate> {
    days_from(start_of_week(first_of_month(reference)))
        .take(GRID_DAYS)
        .collect()
}

/// The Sunday-starting week containing `reference`.
pub fn week_days(reference: NaiveDate) -> Vec<NaiveDate> {
    days_from(start_of_week(reference))
        .take(DAYS_PER_WEEK)
        .collect()
}

/// Every day of `reference`'s month, in order.
pub fn days_in_month(reference: NaiveDate) -> Vec<NaiveDate> {
    let first = first_of_month(reference);
    days_from(first)
        .take_while(|day| day.month() == first.month())
        .collect()
}

/// Consecutive days from `start`, ending after `NaiveDate::MAX`.
fn days_from(start: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    successors(Some(start), |day| day.succ_opt())
}

/// Hour row labels for the week view: `00:00` through `23:00`.
pub fn week_hours() -> Vec<String> {
    (0..HOURS_PER_DAY).map(|hour| format!("{hour:02}:00")).collect()
}

/// Current local calendar day.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn is_today(date: &impl CalendarDay) -> bool {
    date.calendar_day() == today()
}

/// Midnight at the start of `date`.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Last millisecond of `date` (23:59:59.999).
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_milli_opt(23, 59, 59, 999)
        .unwrap_or(NaiveDateTime::MAX)
}

/// Shifts `date` by a signed number of months.
///
/// Days past the end of the target month clamp to its last day
/// (Jan 31 + 1 month = Feb 28/29). Returns `None` outside chrono's range.
pub fn add_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    let delta = Months::new(months.unsigned_abs());
    if months >= 0 {
        date.checked_add_months(delta)
    } else {
        date.checked_sub_months(delta)
    }
}

/// Month-view title, e.g. `October 2026`.
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Week-view title for the week containing `reference`.
///
/// Within one month: `Oct 18 - 24, 2026`.
/// Across months: `Sep 27, 2026 - Oct 3, 2026`.
pub fn week_range_label(reference: NaiveDate) -> String {
    let start = start_of_week(reference);
    let end = end_of_week(reference);

    if is_same_month(&start, &end) {
        format!("{} - {}", start.format("%b %-d"), end.format("%-d, %Y"))
    } else {
        format!("{} - {}", start.format("%b %-d, %Y"), end.format("%b %-d, %Y"))
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_time(instant: NaiveDateTime) -> String {
    instant.format(TIME_FORMAT).to_string()
}

/// Formats an instant as a datetime-local form value (`2026-10-19T09:00`).
pub fn format_date_time(instant: NaiveDateTime) -> String {
    instant.format(DATE_TIME_FORMAT).to_string()
}

/// Error for unparsable datetime-local values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeParseError {
    input: String,
}

impl DateTimeParseError {
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl Display for DateTimeParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid date/time `{}`; expected YYYY-MM-DDTHH:MM",
            self.input
        )
    }
}

impl Error for DateTimeParseError {}

/// Parses a datetime-local value with minute or second precision.
///
/// # Errors
/// - Returns `DateTimeParseError` when the value matches neither format.
pub fn parse_date_time(value: &str) -> Result<NaiveDateTime, DateTimeParseError> {
    let trimmed = value.trim();
    NaiveDateTime::parse_from_str(trimmed, DATE_TIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, DATE_TIME_SECONDS_FORMAT))
        .map_err(|_| DateTimeParseError {
            input: value.to_string(),
        })
}

/// `date` at `hour`:00. Hours past 23 roll over into the following days,
/// saturating at `NaiveDateTime::MAX`.
pub fn at_hour(date: NaiveDate, hour: u32) -> NaiveDateTime {
    start_of_day(date)
        .checked_add_signed(Duration::hours(i64::from(hour)))
        .unwrap_or(NaiveDateTime::MAX)
}
