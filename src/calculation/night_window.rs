//! Night window membership and the reduced night hour.
//!
//! Under CLT art. 73 work between 22:00 and 05:00 is night work, and each
//! night hour is 52m30s of clock time. This module walks time forward across
//! day/night boundaries in both directions of the conversion:
//!
//! - [`reduce_interval`] turns a clock interval into day minutes, night
//!   minutes and the work credit they earn;
//! - [`advance_by_credit`] finds the instant at which a given work credit has
//!   been earned, starting from a clock time.
//!
//! Both operate on whole segments between boundaries rather than minute by
//! minute, so the cost depends on the number of boundaries crossed only.

use chrono::{Duration, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::config::NightRules;
use crate::error::{EngineError, EngineResult};

const MILLIS_PER_MINUTE: i64 = 60_000;

/// Converts a clock span to decimal minutes.
pub fn minutes_between(start: NaiveDateTime, end: NaiveDateTime) -> Decimal {
    Decimal::from((end - start).num_milliseconds()) / Decimal::from(MILLIS_PER_MINUTE)
}

/// Converts decimal minutes to a duration, rounded to the millisecond.
pub fn minutes_to_duration(minutes: Decimal) -> EngineResult<Duration> {
    let millis = (minutes * Decimal::from(MILLIS_PER_MINUTE))
        .round()
        .to_i64()
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("{} minutes is out of range for a duration", minutes),
        })?;
    Ok(Duration::milliseconds(millis))
}

/// The legal night window, half-open: `[start, end)`.
///
/// When `start` is later than `end` the window wraps midnight, as the
/// statutory 22:00–05:00 window does.
///
/// # Example
///
/// ```
/// use jornada_engine::calculation::NightWindow;
/// use chrono::NaiveTime;
///
/// let window = NightWindow::new(
///     NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(5, 0, 0).unwrap(),
/// ).unwrap();
///
/// assert!(window.contains(NaiveTime::from_hms_opt(22, 0, 0).unwrap()));
/// assert!(window.contains(NaiveTime::from_hms_opt(3, 0, 0).unwrap()));
/// assert!(!window.contains(NaiveTime::from_hms_opt(5, 0, 0).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightWindow {
    start: NaiveTime,
    end: NaiveTime,
}

impl NightWindow {
    /// Creates a window; `start` and `end` must differ.
    pub fn new(start: NaiveTime, end: NaiveTime) -> EngineResult<Self> {
        if start == end {
            return Err(EngineError::InvalidConfig {
                field: "night.window_start".to_string(),
                message: "night window start and end must differ".to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Creates the window described by the night rules.
    pub fn from_rules(rules: &NightRules) -> EngineResult<Self> {
        Self::new(rules.window_start, rules.window_end)
    }

    /// Start of the window (inclusive).
    pub fn start(&self) -> NaiveTime {
        self.start
    }

    /// End of the window (exclusive).
    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Whether the window spans midnight.
    pub fn wraps_midnight(&self) -> bool {
        self.start > self.end
    }

    /// Whether a time of day falls inside the window.
    pub fn contains(&self, time: NaiveTime) -> bool {
        if self.wraps_midnight() {
            time >= self.start || time < self.end
        } else {
            time >= self.start && time < self.end
        }
    }

    /// The first instant strictly after `at` where day turns into night or back.
    pub fn next_boundary(&self, at: NaiveDateTime) -> NaiveDateTime {
        let boundary = if self.contains(at.time()) {
            self.end
        } else {
            self.start
        };
        next_occurrence(at, boundary)
    }
}

fn next_occurrence(at: NaiveDateTime, time: NaiveTime) -> NaiveDateTime {
    let candidate = at.date().and_time(time);
    if candidate > at {
        candidate
    } else {
        candidate + Duration::days(1)
    }
}

/// Conversion between night clock minutes and work credit.
///
/// # Example
///
/// ```
/// use jornada_engine::calculation::NightHourRule;
/// use rust_decimal::Decimal;
///
/// let rule = NightHourRule::new(Decimal::new(525, 1)).unwrap();
/// assert_eq!(rule.clock_for_credit(Decimal::from(60)), Decimal::new(525, 1));
/// assert_eq!(rule.credit_for_clock(Decimal::from(105)), Decimal::from(120));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightHourRule {
    night_hour_minutes: Decimal,
}

impl NightHourRule {
    /// Creates a rule; the night hour must lie in (0, 60] clock minutes so the
    /// rule can only ever shorten clock time.
    pub fn new(night_hour_minutes: Decimal) -> EngineResult<Self> {
        if night_hour_minutes <= Decimal::ZERO || night_hour_minutes > Decimal::from(60) {
            return Err(EngineError::InvalidConfig {
                field: "night.night_hour_minutes".to_string(),
                message: format!(
                    "must be greater than 0 and at most 60, got {}",
                    night_hour_minutes
                ),
            });
        }
        Ok(Self { night_hour_minutes })
    }

    /// Creates the rule described by the night rules.
    pub fn from_rules(rules: &NightRules) -> EngineResult<Self> {
        Self::new(rules.night_hour_minutes)
    }

    /// Clock minutes that make up one night hour.
    pub fn night_hour_minutes(&self) -> Decimal {
        self.night_hour_minutes
    }

    /// Work credit earned per night clock minute (60 / 52.5 by default).
    pub fn credit_factor(&self) -> Decimal {
        Decimal::from(60) / self.night_hour_minutes
    }

    /// Work credit earned by `clock` minutes of night work.
    pub fn credit_for_clock(&self, clock: Decimal) -> Decimal {
        clock * Decimal::from(60) / self.night_hour_minutes
    }

    /// Night clock minutes needed to earn `credit` minutes of work.
    pub fn clock_for_credit(&self, credit: Decimal) -> Decimal {
        credit * self.night_hour_minutes / Decimal::from(60)
    }
}

/// A clock interval split by the night window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReducedInterval {
    /// Clock minutes outside the night window.
    pub day_minutes: Decimal,
    /// Clock minutes inside the night window.
    pub night_minutes: Decimal,
    /// Work credit: day minutes plus night minutes at the night-hour rate.
    pub credited_minutes: Decimal,
}

/// Splits `[start, end)` into day and night minutes and credits them.
///
/// An empty or inverted interval reduces to zero.
///
/// # Example
///
/// ```
/// use jornada_engine::calculation::{reduce_interval, NightHourRule, NightWindow};
/// use chrono::{NaiveDateTime, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let window = NightWindow::new(
///     NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(5, 0, 0).unwrap(),
/// ).unwrap();
/// let rule = NightHourRule::new(Decimal::new(525, 1)).unwrap();
///
/// let start = NaiveDateTime::parse_from_str("2023-01-01 21:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2023-01-01 23:45:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let reduced = reduce_interval(start, end, &window, &rule);
///
/// assert_eq!(reduced.day_minutes, Decimal::from(60));
/// assert_eq!(reduced.night_minutes, Decimal::from(105));
/// assert_eq!(reduced.credited_minutes, Decimal::from(180));
/// ```
pub fn reduce_interval(
    start: NaiveDateTime,
    end: NaiveDateTime,
    window: &NightWindow,
    rule: &NightHourRule,
) -> ReducedInterval {
    let mut day_minutes = Decimal::ZERO;
    let mut night_minutes = Decimal::ZERO;
    let mut cursor = start;

    while cursor < end {
        let segment_end = window.next_boundary(cursor).min(end);
        let minutes = minutes_between(cursor, segment_end);
        if window.contains(cursor.time()) {
            night_minutes += minutes;
        } else {
            day_minutes += minutes;
        }
        cursor = segment_end;
    }

    ReducedInterval {
        day_minutes,
        night_minutes,
        credited_minutes: day_minutes + rule.credit_for_clock(night_minutes),
    }
}

/// A stretch of continuous work found by [`advance_by_credit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkLeg {
    /// When the leg starts.
    pub start: NaiveDateTime,
    /// When the requested credit has been earned.
    pub end: NaiveDateTime,
    /// Clock minutes worked outside the night window.
    pub day_minutes: Decimal,
    /// Clock minutes worked inside the night window.
    pub night_minutes: Decimal,
}

/// Works forward from `start` until `credit` minutes of work are earned.
///
/// Day minutes credit one for one; night minutes credit at the night-hour
/// rate. The end instant is resolved to the millisecond.
///
/// # Arguments
///
/// * `start` - When work starts or resumes
/// * `credit` - Work to be credited, in minutes
/// * `window` - The night window
/// * `rule` - The night-hour length used for night minutes
pub fn advance_by_credit(
    start: NaiveDateTime,
    credit: Decimal,
    window: &NightWindow,
    rule: &NightHourRule,
) -> EngineResult<WorkLeg> {
    let mut remaining = credit;
    let mut cursor = start;
    let mut day_minutes = Decimal::ZERO;
    let mut night_minutes = Decimal::ZERO;

    while remaining > Decimal::ZERO {
        let is_night = window.contains(cursor.time());
        let boundary = window.next_boundary(cursor);
        let segment_clock = minutes_between(cursor, boundary);
        let segment_credit = if is_night {
            rule.credit_for_clock(segment_clock)
        } else {
            segment_clock
        };

        let clock = if segment_credit >= remaining {
            let needed = if is_night {
                rule.clock_for_credit(remaining)
            } else {
                remaining
            };
            remaining = Decimal::ZERO;
            let duration = minutes_to_duration(needed)?;
            cursor += duration;
            Decimal::from(duration.num_milliseconds()) / Decimal::from(MILLIS_PER_MINUTE)
        } else {
            remaining -= segment_credit;
            cursor = boundary;
            segment_clock
        };

        if is_night {
            night_minutes += clock;
        } else {
            day_minutes += clock;
        }
    }

    Ok(WorkLeg {
        start,
        end: cursor,
        day_minutes,
        night_minutes,
    })
}
