//! Configuration types for CLT workday rules.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every type implements
//! [`Default`] with the statutory values, so the engine works without any
//! configuration directory.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::Regime;

/// Night-work rules (CLT art. 73).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NightRules {
    /// Reference to the legal clause defining these rules.
    pub clause: String,
    /// Start of the night window (inclusive).
    pub window_start: NaiveTime,
    /// End of the night window (exclusive).
    pub window_end: NaiveTime,
    /// Clock minutes that count as one full hour of night work.
    pub night_hour_minutes: Decimal,
}

impl Default for NightRules {
    fn default() -> Self {
        Self {
            clause: "CLT art. 73".to_string(),
            window_start: NaiveTime::from_hms_opt(22, 0, 0).expect("22:00 is a valid time"),
            window_end: NaiveTime::from_hms_opt(5, 0, 0).expect("05:00 is a valid time"),
            night_hour_minutes: Decimal::new(525, 1),
        }
    }
}

/// Where the break is inserted within the workday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum BreakPlacement {
    /// The break starts once this many credited work minutes are done.
    ///
    /// Workdays no longer than the threshold take the break at their midpoint.
    AfterWorkedMinutes {
        /// Credited minutes worked before the break.
        minutes: u32,
    },
    /// The break starts at the credited midpoint of the workday.
    Midpoint,
}

impl Default for BreakPlacement {
    fn default() -> Self {
        BreakPlacement::AfterWorkedMinutes { minutes: 240 }
    }
}

/// Intrajornada break rules (CLT art. 71).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakRules {
    /// Reference to the legal clause defining these rules.
    pub clause: String,
    /// Workdays longer than this need the long-shift minimum break.
    pub long_shift_threshold_minutes: u32,
    /// Minimum break for long shifts.
    pub long_shift_min_break_minutes: u32,
    /// Workdays longer than this (up to the long threshold) need the medium minimum.
    pub medium_shift_threshold_minutes: u32,
    /// Minimum break for medium shifts.
    pub medium_shift_min_break_minutes: u32,
    /// Longest break accepted.
    pub max_break_minutes: u32,
    /// Where the break is inserted.
    #[serde(default)]
    pub placement: BreakPlacement,
}

impl Default for BreakRules {
    fn default() -> Self {
        Self {
            clause: "CLT art. 71".to_string(),
            long_shift_threshold_minutes: 360,
            long_shift_min_break_minutes: 60,
            medium_shift_threshold_minutes: 240,
            medium_shift_min_break_minutes: 15,
            max_break_minutes: 120,
            placement: BreakPlacement::default(),
        }
    }
}

/// Which working day absorbs the difference to the weekly limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsorbingDay {
    /// The first working day of the week (Monday).
    First,
    /// The last working day of the week (Friday or Saturday).
    Last,
}

/// How a regime spreads the weekly limit over its working days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegimeDistribution {
    /// The day that absorbs the remainder.
    pub absorbing_day: AbsorbingDay,
    /// Fixed target for the absorbing day; the other days split the rest evenly.
    #[serde(default)]
    pub absorbing_day_minutes: Option<u32>,
    /// Working days assumed in a month for the monthly projection.
    pub working_days_per_month: u32,
}

/// Weekly regime rules (CF art. 7, XIII; CLT art. 58).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegimeRules {
    /// Reference to the legal clause defining the weekly limit.
    pub clause: String,
    /// Weekly work limit in minutes.
    pub weekly_limit_minutes: u32,
    /// Distribution for the 5-day (compensation) regime.
    pub five_day: RegimeDistribution,
    /// Distribution for the 6-day regime.
    pub six_day: RegimeDistribution,
}

impl RegimeRules {
    /// Returns the distribution configured for a regime.
    pub fn distribution(&self, regime: Regime) -> &RegimeDistribution {
        match regime {
            Regime::FiveDay => &self.five_day,
            Regime::SixDay => &self.six_day,
        }
    }
}

impl Default for RegimeRules {
    fn default() -> Self {
        Self {
            clause: "CF art. 7, XIII".to_string(),
            weekly_limit_minutes: 2640,
            five_day: RegimeDistribution {
                absorbing_day: AbsorbingDay::Last,
                absorbing_day_minutes: None,
                working_days_per_month: 22,
            },
            six_day: RegimeDistribution {
                absorbing_day: AbsorbingDay::Last,
                absorbing_day_minutes: None,
                working_days_per_month: 26,
            },
        }
    }
}

/// Conventions used to project a week onto a month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRules {
    /// Average number of weeks in a month.
    pub weeks_per_month: Decimal,
    /// Weeks used for the CLT monthly reference (44h x 5 = 220h).
    pub reference_weeks: u32,
}

impl Default for MonthlyRules {
    fn default() -> Self {
        Self {
            weeks_per_month: Decimal::new(42857, 4),
            reference_weeks: 5,
        }
    }
}

/// Structure of `rules.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RulesFile {
    /// Night-work rules.
    pub night: NightRules,
    /// Break rules.
    pub breaks: BreakRules,
    /// Longest accepted daily work target, in minutes.
    pub max_daily_work_minutes: u32,
}

/// Structure of `regimes.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegimesFile {
    /// Weekly regime rules.
    pub regimes: RegimeRules,
    /// Monthly projection conventions.
    pub monthly: MonthlyRules,
}

/// The complete set of rules the calculator runs against.
///
/// Built either from [`Default`] (the statutory values) or from a
/// configuration directory via [`crate::config::ConfigLoader`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CltRules {
    /// Night-work rules.
    pub night: NightRules,
    /// Break rules.
    pub breaks: BreakRules,
    /// Longest accepted daily work target, in minutes (8h + 2h overtime, art. 59).
    pub max_daily_work_minutes: u32,
    /// Weekly regime rules.
    pub regimes: RegimeRules,
    /// Monthly projection conventions.
    pub monthly: MonthlyRules,
}

impl Default for CltRules {
    fn default() -> Self {
        Self {
            night: NightRules::default(),
            breaks: BreakRules::default(),
            max_daily_work_minutes: 600,
            regimes: RegimeRules::default(),
            monthly: MonthlyRules::default(),
        }
    }
}

impl CltRules {
    /// Assembles rules from the two configuration files and validates them.
    pub fn from_files(rules: RulesFile, regimes: RegimesFile) -> EngineResult<Self> {
        let assembled = Self {
            night: rules.night,
            breaks: rules.breaks,
            max_daily_work_minutes: rules.max_daily_work_minutes,
            regimes: regimes.regimes,
            monthly: regimes.monthly,
        };
        assembled.validate()?;
        Ok(assembled)
    }

    /// Checks the invariants the calculator relies on.
    ///
    /// The night hour may only shorten clock time, so its length must lie in
    /// (0, 60]. The window must have a non-zero length.
    pub fn validate(&self) -> EngineResult<()> {
        let night_hour = self.night.night_hour_minutes;
        if night_hour <= Decimal::ZERO || night_hour > Decimal::from(60) {
            return Err(invalid(
                "night.night_hour_minutes",
                format!("must be greater than 0 and at most 60, got {}", night_hour),
            ));
        }
        if self.night.window_start == self.night.window_end {
            return Err(invalid(
                "night.window_start",
                "night window start and end must differ".to_string(),
            ));
        }
        if self.breaks.medium_shift_threshold_minutes > self.breaks.long_shift_threshold_minutes {
            return Err(invalid(
                "breaks.medium_shift_threshold_minutes",
                "must not exceed long_shift_threshold_minutes".to_string(),
            ));
        }
        if self.breaks.long_shift_min_break_minutes > self.breaks.max_break_minutes {
            return Err(invalid(
                "breaks.max_break_minutes",
                "must be at least long_shift_min_break_minutes".to_string(),
            ));
        }
        if self.max_daily_work_minutes == 0 {
            return Err(invalid(
                "max_daily_work_minutes",
                "must be greater than zero".to_string(),
            ));
        }
        if self.regimes.weekly_limit_minutes == 0 {
            return Err(invalid(
                "regimes.weekly_limit_minutes",
                "must be greater than zero".to_string(),
            ));
        }
        if self.monthly.weeks_per_month <= Decimal::ZERO {
            return Err(invalid(
                "monthly.weeks_per_month",
                "must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: String) -> EngineError {
    EngineError::InvalidConfig {
        field: field.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_are_valid() {
        assert!(CltRules::default().validate().is_ok());
    }

    #[test]
    fn test_default_night_window_is_22_to_05() {
        let night = NightRules::default();
        assert_eq!(night.window_start, NaiveTime::from_hms_opt(22, 0, 0).unwrap());
        assert_eq!(night.window_end, NaiveTime::from_hms_opt(5, 0, 0).unwrap());
        assert_eq!(night.night_hour_minutes, Decimal::new(525, 1));
    }

    #[test]
    fn test_night_hour_longer_than_clock_hour_is_rejected() {
        let mut rules = CltRules::default();
        rules.night.night_hour_minutes = Decimal::from(61);

        match rules.validate() {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "night.night_hour_minutes");
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_night_hour_is_rejected() {
        let mut rules = CltRules::default();
        rules.night.night_hour_minutes = Decimal::ZERO;
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_empty_night_window_is_rejected() {
        let mut rules = CltRules::default();
        rules.night.window_end = rules.night.window_start;
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_distribution_selects_regime() {
        let rules = RegimeRules::default();
        assert_eq!(rules.distribution(Regime::FiveDay).working_days_per_month, 22);
        assert_eq!(rules.distribution(Regime::SixDay).working_days_per_month, 26);
    }

    #[test]
    fn test_break_placement_deserializes_tagged() {
        let placement: BreakPlacement =
            serde_yaml::from_str("policy: after_worked_minutes\nminutes: 180\n").unwrap();
        assert_eq!(placement, BreakPlacement::AfterWorkedMinutes { minutes: 180 });

        let midpoint: BreakPlacement = serde_yaml::from_str("policy: midpoint\n").unwrap();
        assert_eq!(midpoint, BreakPlacement::Midpoint);
    }
}
