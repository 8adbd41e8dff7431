//! Weekly aggregation and monthly projection.
//!
//! A week is the regime's working days, each calculated with
//! [`calculate_shift`] from the same clock-in and break. The month is a
//! projection of that week under three conventions: the CLT reference
//! (220 hours for 44 hours a week), a weeks-per-month factor, and a count of
//! working days per month.

use chrono::NaiveTime;
use rust_decimal::Decimal;

use crate::config::CltRules;
use crate::error::EngineResult;
use crate::models::{DayRow, MonthlySummary, Regime, ShiftInput, WeekPlan, WeeklySummary};

use super::shift_calculator::calculate_shift;
use super::week_plan::build_week_plan;

/// Calculates every working day of a regime's week.
///
/// # Arguments
///
/// * `clock_in` - Clock-in time shared by every day
/// * `break_minutes` - Break taken each day
/// * `regime` - The weekly regime, which decides the days and their targets
/// * `rules` - The CLT rules
///
/// # Examples
///
/// ```
/// use jornada_engine::calculation::summarize_week;
/// use jornada_engine::config::CltRules;
/// use jornada_engine::models::Regime;
/// use chrono::NaiveTime;
///
/// let clock_in = NaiveTime::from_hms_opt(7, 0, 0).unwrap();
/// let week = summarize_week(clock_in, 60, Regime::FiveDay, &CltRules::default()).unwrap();
///
/// assert_eq!(week.rows.len(), 5);
/// assert_eq!(week.total_target_minutes, 2640);
/// assert!(week.within_weekly_limit);
/// ```
pub fn summarize_week(
    clock_in: NaiveTime,
    break_minutes: u32,
    regime: Regime,
    rules: &CltRules,
) -> EngineResult<WeeklySummary> {
    let plan = build_week_plan(regime, &rules.regimes)?;
    summarize_plan(&plan, clock_in, break_minutes, rules)
}

/// Calculates every day of an existing week plan.
///
/// # Arguments
///
/// * `plan` - The daily targets to calculate
/// * `clock_in` - Clock-in time shared by every day
/// * `break_minutes` - Break taken each day
/// * `rules` - The CLT rules
///
/// # Returns
///
/// The weekly summary, or the first error raised by any day.
pub fn summarize_plan(
    plan: &WeekPlan,
    clock_in: NaiveTime,
    break_minutes: u32,
    rules: &CltRules,
) -> EngineResult<WeeklySummary> {
    let rows = plan
        .days
        .iter()
        .map(|day| {
            let input = ShiftInput::new(clock_in, day.target_work_minutes, break_minutes);
            calculate_shift(&input, rules).map(|result| DayRow {
                weekday: day.weekday,
                result,
            })
        })
        .collect::<EngineResult<Vec<_>>>()?;

    let total_target_minutes = plan.total_minutes();
    let weekly_limit_minutes = rules.regimes.weekly_limit_minutes;

    let summary = WeeklySummary {
        regime: plan.regime,
        clock_in,
        break_minutes,
        total_target_minutes,
        total_day_minutes: rows.iter().map(|r| r.result.day_minutes).sum(),
        total_night_minutes: rows.iter().map(|r| r.result.night_minutes).sum(),
        total_night_credit_minutes: rows.iter().map(|r| r.result.night_credit_minutes).sum(),
        total_break_minutes: rows.iter().map(|r| r.result.break_minutes).sum(),
        total_elapsed_minutes: rows.iter().map(|r| r.result.elapsed_minutes).sum(),
        weekly_limit_minutes,
        within_weekly_limit: total_target_minutes <= weekly_limit_minutes,
        rows,
    };

    tracing::debug!(
        regime = %summary.regime,
        days = summary.rows.len(),
        total_target_minutes = summary.total_target_minutes,
        total_night_minutes = %summary.total_night_minutes.round_dp(3),
        "Week summarized"
    );

    Ok(summary)
}

/// Projects a calculated week onto a month.
///
/// # Examples
///
/// ```
/// use jornada_engine::calculation::{project_month, summarize_week};
/// use jornada_engine::config::CltRules;
/// use jornada_engine::models::Regime;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let rules = CltRules::default();
/// let clock_in = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
/// let week = summarize_week(clock_in, 60, Regime::FiveDay, &rules).unwrap();
/// let month = project_month(&week, &rules);
///
/// assert_eq!(month.reference_hours, Decimal::from(220));
/// assert_eq!(month.working_days_per_month, 22);
/// ```
pub fn project_month(weekly: &WeeklySummary, rules: &CltRules) -> MonthlySummary {
    let minutes_per_hour = Decimal::from(60);
    let weekly_target = Decimal::from(weekly.total_target_minutes);
    let working_days_per_month = rules
        .regimes
        .distribution(weekly.regime)
        .working_days_per_month;
    let month_days = Decimal::from(working_days_per_month);

    let reference_hours = Decimal::from(rules.regimes.weekly_limit_minutes) / minutes_per_hour
        * Decimal::from(rules.monthly.reference_weeks);
    let projected_hours_by_weeks = weekly_target / minutes_per_hour * rules.monthly.weeks_per_month;

    let (projected_hours_by_working_days, projected_night_minutes) = if weekly.rows.is_empty() {
        (Decimal::ZERO, Decimal::ZERO)
    } else {
        let week_days = Decimal::from(weekly.rows.len() as u32);
        (
            weekly_target / week_days * month_days / minutes_per_hour,
            weekly.total_night_minutes / week_days * month_days,
        )
    };

    MonthlySummary {
        regime: weekly.regime,
        weekly_target_minutes: weekly.total_target_minutes,
        reference_hours,
        weeks_per_month: rules.monthly.weeks_per_month,
        projected_hours_by_weeks,
        working_days_per_month,
        projected_hours_by_working_days,
        projected_night_minutes,
    }
}
