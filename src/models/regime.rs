//! Weekly working regimes.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

const FIVE_DAY_WEEK: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

const SIX_DAY_WEEK: [Weekday; 6] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// The weekly regime a worker follows.
///
/// Both regimes reach the same 44-hour weekly limit; they differ in how many
/// days the hours are spread over.
///
/// # Example
///
/// ```
/// use jornada_engine::models::Regime;
///
/// let regime: Regime = "6x1".parse().unwrap();
/// assert_eq!(regime, Regime::SixDay);
/// assert_eq!(regime.working_days(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    /// Monday to Friday, with Saturday hours compensated over the week (5x2).
    FiveDay,
    /// Monday to Saturday (6x1).
    SixDay,
}

impl Regime {
    /// Number of working days per week.
    pub fn working_days(self) -> u32 {
        self.weekdays().len() as u32
    }

    /// The working days, in week order.
    pub fn weekdays(self) -> &'static [Weekday] {
        match self {
            Regime::FiveDay => &FIVE_DAY_WEEK,
            Regime::SixDay => &SIX_DAY_WEEK,
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Regime::FiveDay => write!(f, "5-day (5x2)"),
            Regime::SixDay => write!(f, "6-day (6x1)"),
        }
    }
}

impl FromStr for Regime {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "5" | "5x2" | "five_day" | "five-day" => Ok(Regime::FiveDay),
            "6" | "6x1" | "six_day" | "six-day" => Ok(Regime::SixDay),
            _ => Err(EngineError::InvalidRegime {
                input: s.to_string(),
            }),
        }
    }
}
