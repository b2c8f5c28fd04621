//! Calendar session navigation state.
//!
//! # Responsibility
//! - Track the focused date, active view mode and selected day.
//! - Move between months and weeks and derive the header title.
//!
//! # Invariants
//! - Month navigation always lands on the first day of the target month.
//! - Week navigation moves exactly seven days.
//! - Navigation past chrono's date range is ignored.

use crate::dates::{
    add_months, calendar_grid, first_of_month, month_label, today, week_days, week_range_label,
    DAYS_PER_WEEK,
};
use chrono::{Duration, NaiveDate};
use log::debug;
use serde::{Deserialize, Serialize};

/// Active calendar layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarViewMode {
    #[default]
    Month,
    Week,
}

impl CalendarViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::Week => "week",
        }
    }
}

/// Navigation state for one calendar session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarState {
    current_date: NaiveDate,
    view: CalendarViewMode,
    selected_date: Option<NaiveDate>,
}

impl CalendarState {
    /// Starts in month view focused on `initial_date`, nothing selected.
    pub fn new(initial_date: NaiveDate) -> Self {
        Self {
            current_date: initial_date,
            view: CalendarViewMode::Month,
            selected_date: None,
        }
    }

    /// Starts focused on the current local day.
    pub fn starting_today() -> Self {
        Self::new(today())
    }

    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    pub fn view(&self) -> CalendarViewMode {
        self.view
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn next_month(&mut self) {
        self.shift_months(1);
    }

    pub fn previous_month(&mut self) {
        self.shift_months(-1);
    }

    fn shift_months(&mut self, months: i32) {
        // Out-of-range targets leave the state unchanged.
        if let Some(target) = add_months(first_of_month(self.current_date), months) {
            self.go_to(target);
        }
    }

    pub fn next_week(&mut self) {
        self.shift_days(DAYS_PER_WEEK as i64);
    }

    pub fn previous_week(&mut self) {
        self.shift_days(-(DAYS_PER_WEEK as i64));
    }

    fn shift_days(&mut self, days: i64) {
        // Out-of-range targets leave the state unchanged.
        if let Some(target) = self.current_date.checked_add_signed(Duration::days(days)) {
            self.go_to(target);
        }
    }

    /// Moves one month or one week forward, depending on the view.
    pub fn next(&mut self) {
        match self.view {
            CalendarViewMode::Month => self.next_month(),
            CalendarViewMode::Week => self.next_week(),
        }
    }

    /// Moves one month or one week back, depending on the view.
    pub fn previous(&mut self) {
        match self.view {
            CalendarViewMode::Month => self.previous_month(),
            CalendarViewMode::Week => self.previous_week(),
        }
    }

    pub fn go_to_today(&mut self) {
        self.go_to(today());
    }

    pub fn go_to(&mut self, date: NaiveDate) {
        self.current_date = date;
        debug!(
            "event=calendar_navigate module=navigation view={} date={}",
            self.view.as_str(),
            date
        );
    }

    pub fn set_view(&mut self, view: CalendarViewMode) {
        self.view = view;
    }

    pub fn select_date(&mut self, date: Option<NaiveDate>) {
        self.selected_date = date;
    }

    /// Header title: month name in month view, week span in week view.
    pub fn title(&self) -> String {
        match self.view {
            CalendarViewMode::Month => month_label(self.current_date),
            CalendarViewMode::Week => week_range_label(self.current_date),
        }
    }

    /// Days rendered by the active view.
    pub fn visible_days(&self) -> Vec<NaiveDate> {
        match self.view {
            CalendarViewMode::Month => calendar_grid(self.current_date),
            CalendarViewMode::Week => week_days(self.current_date),
        }
    }
}
