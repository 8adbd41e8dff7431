//! Shift calculation result model.
//!
//! This module contains [`ShiftResult`], the outcome of a single workday
//! calculation, and the [`BreakWindow`] placed within it.

use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AuditStep;

/// Rounds a timestamp to the nearest whole minute, half-up.
///
/// # Examples
///
/// ```
/// use jornada_engine::models::round_to_minute;
/// use chrono::NaiveDateTime;
///
/// let exact = NaiveDateTime::parse_from_str("2023-01-01 23:34:30", "%Y-%m-%d %H:%M:%S").unwrap();
/// let rounded = NaiveDateTime::parse_from_str("2023-01-01 23:35:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(round_to_minute(exact), rounded);
/// ```
pub fn round_to_minute(at: NaiveDateTime) -> NaiveDateTime {
    let round_up = at.second() >= 30;
    let truncated = at
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(at);

    if round_up {
        truncated + Duration::minutes(1)
    } else {
        truncated
    }
}

/// The unpaid break placed within a workday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakWindow {
    /// When the break starts.
    pub start: NaiveDateTime,
    /// When work resumes.
    pub end: NaiveDateTime,
}

/// The outcome of a single workday calculation.
///
/// Clock-in and clock-out are anchored to a reference date so that a shift
/// crossing midnight keeps a well-defined order. Minute quantities are
/// decimals because night work elapses in fractions of a minute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftResult {
    /// When the workday starts.
    pub clock_in: NaiveDateTime,
    /// When the workday ends, resolved to the millisecond.
    pub clock_out: NaiveDateTime,
    /// The break, if one was taken.
    pub break_window: Option<BreakWindow>,
    /// Work credited for the day, in minutes.
    pub target_work_minutes: u32,
    /// Break applied, in minutes.
    pub break_minutes: u32,
    /// Clock minutes worked outside the night window.
    pub day_minutes: Decimal,
    /// Clock minutes worked inside the night window.
    pub night_minutes: Decimal,
    /// Work credit earned by the night minutes.
    pub night_credit_minutes: Decimal,
    /// Clock minutes from clock-in to clock-out, break included.
    pub elapsed_minutes: Decimal,
    /// The rules applied, in order.
    pub audit_steps: Vec<AuditStep>,
}

impl ShiftResult {
    /// Clock-out time of day, exact.
    pub fn clock_out_time(&self) -> NaiveTime {
        self.clock_out.time()
    }

    /// Clock-out time of day rounded to the nearest minute.
    pub fn clock_out_rounded(&self) -> NaiveTime {
        round_to_minute(self.clock_out).time()
    }

    /// Whether clock-out falls on the day after clock-in.
    pub fn ends_next_day(&self) -> bool {
        self.clock_out.date() > self.clock_in.date()
    }

    /// Clock minutes actually worked, break excluded.
    pub fn worked_clock_minutes(&self) -> Decimal {
        self.day_minutes + self.night_minutes
    }

    /// Work credit earned, day minutes plus night credit.
    pub fn credited_minutes(&self) -> Decimal {
        self.day_minutes + self.night_credit_minutes
    }

    /// Whether any part of the workday fell in the night window.
    pub fn has_night_work(&self) -> bool {
        self.night_minutes > Decimal::ZERO
    }
}
