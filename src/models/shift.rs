//! Shift input model.
//!
//! This module defines [`ShiftInput`], the scalar inputs of a single
//! workday calculation, and the clock-time parser used at the input boundary.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Parses a clock time in `HH:MM` or `HH:MM:SS` form.
///
/// # Examples
///
/// ```
/// use jornada_engine::models::parse_clock_time;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_clock_time("22:30").unwrap(), NaiveTime::from_hms_opt(22, 30, 0).unwrap());
/// assert!(parse_clock_time("24:00").is_err());
/// ```
pub fn parse_clock_time(input: &str) -> EngineResult<NaiveTime> {
    let trimmed = input.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .ok()
        // chrono accepts :60 as a leap second
        .filter(|time| time.nanosecond() < 1_000_000_000)
        .ok_or_else(|| EngineError::InvalidTimeFormat {
            input: input.to_string(),
        })
}

/// The inputs of a single workday calculation.
///
/// Night-window boundaries and the night-hour length are not part of the
/// input; they come from [`crate::config::CltRules`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftInput {
    /// Clock-in time of day.
    pub clock_in: NaiveTime,
    /// Work to be credited for the day, in minutes.
    pub target_work_minutes: u32,
    /// Unpaid break taken during the day, in minutes.
    pub break_minutes: u32,
}

impl ShiftInput {
    /// Creates an input from an already-parsed clock-in time.
    pub fn new(clock_in: NaiveTime, target_work_minutes: u32, break_minutes: u32) -> Self {
        Self {
            clock_in,
            target_work_minutes,
            break_minutes,
        }
    }

    /// Creates an input from a raw clock-in string.
    ///
    /// # Examples
    ///
    /// ```
    /// use jornada_engine::models::ShiftInput;
    ///
    /// let input = ShiftInput::parse("07:00", 528, 60).unwrap();
    /// assert_eq!(input.target_work_minutes, 528);
    /// ```
    pub fn parse(clock_in: &str, target_work_minutes: u32, break_minutes: u32) -> EngineResult<Self> {
        Ok(Self::new(
            parse_clock_time(clock_in)?,
            target_work_minutes,
            break_minutes,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_parse_hour_minute() {
        assert_eq!(parse_clock_time("07:00").unwrap(), time(7, 0, 0));
        assert_eq!(parse_clock_time(" 22:00 ").unwrap(), time(22, 0, 0));
    }

    #[test]
    fn test_parse_hour_minute_second() {
        assert_eq!(parse_clock_time("23:34:30").unwrap(), time(23, 34, 30));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for bad in ["", "7h", "25:00", "12:60", "07:00:60", "noon", "12-30"] {
            match parse_clock_time(bad) {
                Err(EngineError::InvalidTimeFormat { input }) => assert_eq!(input, bad),
                other => panic!("Expected InvalidTimeFormat for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_shift_input_parse() {
        let input = ShiftInput::parse("20:00", 528, 60).unwrap();
        assert_eq!(input.clock_in, time(20, 0, 0));
        assert_eq!(input.break_minutes, 60);
    }

    #[test]
    fn test_shift_input_parse_propagates_time_error() {
        assert!(ShiftInput::parse("8 o'clock", 528, 60).is_err());
    }

    #[test]
    fn test_shift_input_deserialization() {
        let json = r#"{"clock_in": "08:00:00", "target_work_minutes": 440, "break_minutes": 60}"#;
        let input: ShiftInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.clock_in, time(8, 0, 0));
        assert_eq!(input.target_work_minutes, 440);
    }
}
