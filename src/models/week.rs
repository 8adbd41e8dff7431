//! Weekly plan and summary models.

use chrono::{NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Regime, ShiftResult};

/// The work target for one day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTarget {
    /// The working day.
    pub weekday: Weekday,
    /// Work to be credited on that day, in minutes.
    pub target_work_minutes: u32,
}

/// The daily targets of a regime for one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPlan {
    /// The regime the plan was built for.
    pub regime: Regime,
    /// One target per working day, in week order.
    pub days: Vec<DayTarget>,
}

impl WeekPlan {
    /// Sum of all daily targets, in minutes.
    pub fn total_minutes(&self) -> u32 {
        self.days.iter().map(|d| d.target_work_minutes).sum()
    }
}

/// One row of the weekly table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRow {
    /// The working day.
    pub weekday: Weekday,
    /// The calculated workday.
    pub result: ShiftResult,
}

/// A full week of calculated workdays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// The regime followed.
    pub regime: Regime,
    /// Clock-in time shared by every day.
    pub clock_in: NaiveTime,
    /// Break taken every day, in minutes.
    pub break_minutes: u32,
    /// The calculated days, in week order.
    pub rows: Vec<DayRow>,
    /// Sum of daily work targets, in minutes.
    pub total_target_minutes: u32,
    /// Clock minutes worked in the day window.
    pub total_day_minutes: Decimal,
    /// Clock minutes worked in the night window.
    pub total_night_minutes: Decimal,
    /// Work credit earned by night minutes.
    pub total_night_credit_minutes: Decimal,
    /// Sum of daily breaks, in minutes.
    pub total_break_minutes: u32,
    /// Sum of daily clock-in to clock-out spans, in minutes.
    pub total_elapsed_minutes: Decimal,
    /// The legal weekly limit, in minutes.
    pub weekly_limit_minutes: u32,
    /// Whether the targets stay within the weekly limit.
    pub within_weekly_limit: bool,
}

/// A week projected onto a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// The regime followed.
    pub regime: Regime,
    /// Weekly work target, in minutes.
    pub weekly_target_minutes: u32,
    /// CLT monthly reference (weekly limit times reference weeks), in hours.
    pub reference_hours: Decimal,
    /// Average weeks per month used for the weekly projection.
    pub weeks_per_month: Decimal,
    /// Weekly target times weeks per month, in hours.
    pub projected_hours_by_weeks: Decimal,
    /// Working days assumed in a month.
    pub working_days_per_month: u32,
    /// Average daily target times working days per month, in hours.
    pub projected_hours_by_working_days: Decimal,
    /// Night clock minutes projected over the working days of a month.
    pub projected_night_minutes: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(targets: &[u32]) -> WeekPlan {
        let weekdays = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
        ];
        WeekPlan {
            regime: if targets.len() == 6 {
                Regime::SixDay
            } else {
                Regime::FiveDay
            },
            days: targets
                .iter()
                .zip(weekdays)
                .map(|(&target_work_minutes, weekday)| DayTarget {
                    weekday,
                    target_work_minutes,
                })
                .collect(),
        }
    }

    #[test]
    fn test_total_minutes() {
        assert_eq!(plan(&[528; 5]).total_minutes(), 2640);
        assert_eq!(plan(&[480, 480, 480, 480, 480, 240]).total_minutes(), 2640);
    }
}
