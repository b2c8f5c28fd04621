//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `calendar_core` linkage and render the current month as text.
//! - Optionally start core file logging from the environment.
//!
//! Environment:
//! - `CALENDAR_LOG_DIR`: absolute log directory; logging is off when unset.
//! - `CALENDAR_LOG_LEVEL`: overrides the build-mode default level.

use calendar_core::dates::{today, DAYS_PER_WEEK};
use calendar_core::{default_log_level, init_logging, CalendarState};
use chrono::Datelike;

const DAY_HEADER: &str = "Su Mo Tu We Th Fr Sa";

fn main() {
    if let Ok(log_dir) = std::env::var("CALENDAR_LOG_DIR") {
        let level = std::env::var("CALENDAR_LOG_LEVEL")
            .unwrap_or_else(|_| default_log_level().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("calendar_cli logging disabled: {err}");
        }
    }

    println!("calendar_core version={}", calendar_core::core_version());

    let state = CalendarState::new(today());
    println!("{}", state.title());
    println!("{DAY_HEADER}");
    for week in state.visible_days().chunks(DAYS_PER_WEEK) {
        let row: Vec<String> = week
            .iter()
            .map(|day| {
                if day.month() == state.current_date().month() {
                    format!("{:>2}", day.day())
                } else {
                    "  ".to_string()
                }
            })
            .collect();
        println!("{}", row.join(" "));
    }
}
