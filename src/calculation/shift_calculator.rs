//! Clock-out calculation for a single workday.
//!
//! Given a clock-in time, a daily work target and a break, this module finds
//! the clock-out time at which the target has been credited, counting night
//! work at the reduced night hour (CLT art. 73) and inserting the break
//! (CLT art. 71) once.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::config::CltRules;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, BreakWindow, ShiftInput, ShiftResult};

use super::break_rules::{break_start_credit, validate_break};
use super::night_window::{
    NightHourRule, NightWindow, WorkLeg, advance_by_credit, minutes_between,
};

/// Date every workday is anchored to; only the day offset of clock-out matters.
fn reference_date() -> EngineResult<NaiveDate> {
    NaiveDate::from_ymd_opt(2023, 1, 1).ok_or_else(|| EngineError::CalculationError {
        message: "invalid reference date".to_string(),
    })
}

/// Rejects a work target of zero or above the daily cap.
pub fn validate_work_duration(work_minutes: u32, max_daily_work_minutes: u32) -> EngineResult<()> {
    if work_minutes == 0 {
        return Err(EngineError::InvalidWorkDuration {
            work_minutes,
            message: "must be greater than zero".to_string(),
        });
    }
    if work_minutes > max_daily_work_minutes {
        return Err(EngineError::InvalidWorkDuration {
            work_minutes,
            message: format!("exceeds the daily cap of {} minutes", max_daily_work_minutes),
        });
    }
    Ok(())
}

/// Calculates the clock-out time for a workday.
///
/// This function:
/// 1. Validates the work target and the break
/// 2. Works forward from clock-in until the break point is credited
/// 3. Inserts the break, which counts as neither day nor night work
/// 4. Works forward again until the full target is credited
///
/// Clock-in is anchored to a fixed reference date; a clock-out on the
/// following day is reported by [`ShiftResult::ends_next_day`].
///
/// # Arguments
///
/// * `input` - Clock-in, work target and break for the day
/// * `rules` - The CLT rules: night window, night hour, break rules and daily cap
///
/// # Returns
///
/// The [`ShiftResult`], or an error if:
/// - the target is zero or above `max_daily_work_minutes` (`InvalidWorkDuration`)
/// - the break breaks the intrajornada rules (`InvalidBreakDuration`)
/// - the night rules are inconsistent (`InvalidConfig`)
///
/// # Examples
///
/// ```
/// use jornada_engine::calculation::calculate_shift;
/// use jornada_engine::config::CltRules;
/// use jornada_engine::models::ShiftInput;
/// use chrono::NaiveTime;
///
/// let rules = CltRules::default();
///
/// // Day shift: no night overlap
/// let day = calculate_shift(&ShiftInput::parse("07:00", 528, 60).unwrap(), &rules).unwrap();
/// assert_eq!(day.clock_out_time(), NaiveTime::from_hms_opt(16, 48, 0).unwrap());
///
/// // Evening shift: the night hours elapse faster
/// let evening = calculate_shift(&ShiftInput::parse("20:00", 528, 60).unwrap(), &rules).unwrap();
/// assert_eq!(evening.clock_out_time(), NaiveTime::from_hms_opt(4, 57, 0).unwrap());
/// assert!(evening.ends_next_day());
/// ```
pub fn calculate_shift(input: &ShiftInput, rules: &CltRules) -> EngineResult<ShiftResult> {
    let mut audit_steps = Vec::new();
    let mut step_number: u32 = 1;

    validate_work_duration(input.target_work_minutes, rules.max_daily_work_minutes)?;
    audit_steps.push(validate_break(
        input.target_work_minutes,
        input.break_minutes,
        &rules.breaks,
        step_number,
    )?);
    step_number += 1;

    let window = NightWindow::from_rules(&rules.night)?;
    let night_rule = NightHourRule::from_rules(&rules.night)?;

    let clock_in = reference_date()?.and_time(input.clock_in);
    let target = Decimal::from(input.target_work_minutes);

    let mut legs: Vec<WorkLeg> = Vec::with_capacity(2);
    let mut break_window = None;

    if input.break_minutes > 0 {
        let break_credit = break_start_credit(input.target_work_minutes, rules.breaks.placement);

        let before = advance_by_credit(clock_in, break_credit, &window, &night_rule)?;
        audit_steps.push(leg_step(&before, break_credit, "before the break", rules, step_number));
        step_number += 1;

        let resumed = before.end + Duration::minutes(i64::from(input.break_minutes));
        let placed = BreakWindow {
            start: before.end,
            end: resumed,
        };
        audit_steps.push(break_step(&placed, break_credit, input.break_minutes, rules, step_number));
        step_number += 1;
        legs.push(before);
        break_window = Some(placed);

        let remaining = target - break_credit;
        let after = advance_by_credit(resumed, remaining, &window, &night_rule)?;
        audit_steps.push(leg_step(&after, remaining, "after the break", rules, step_number));
        step_number += 1;
        legs.push(after);
    } else {
        let only = advance_by_credit(clock_in, target, &window, &night_rule)?;
        audit_steps.push(leg_step(&only, target, "without a break", rules, step_number));
        step_number += 1;
        legs.push(only);
    }

    let clock_out = legs.last().map(|leg| leg.end).unwrap_or(clock_in);
    let day_minutes: Decimal = legs.iter().map(|leg| leg.day_minutes).sum();
    let night_minutes: Decimal = legs.iter().map(|leg| leg.night_minutes).sum();
    let night_credit_minutes = night_rule.credit_for_clock(night_minutes);
    let elapsed_minutes = minutes_between(clock_in, clock_out);

    audit_steps.push(clock_out_step(
        clock_in,
        clock_out,
        day_minutes,
        night_minutes,
        night_credit_minutes,
        step_number,
    ));

    tracing::debug!(
        clock_in = %clock_in.time(),
        clock_out = %clock_out.time(),
        target_work_minutes = input.target_work_minutes,
        break_minutes = input.break_minutes,
        day_minutes = %day_minutes.round_dp(3),
        night_minutes = %night_minutes.round_dp(3),
        "Workday calculated"
    );

    Ok(ShiftResult {
        clock_in,
        clock_out,
        break_window,
        target_work_minutes: input.target_work_minutes,
        break_minutes: input.break_minutes,
        day_minutes,
        night_minutes,
        night_credit_minutes,
        elapsed_minutes,
        audit_steps,
    })
}

fn display_minutes(minutes: Decimal) -> String {
    minutes.round_dp(3).normalize().to_string()
}

fn leg_step(
    leg: &WorkLeg,
    credit: Decimal,
    label: &str,
    rules: &CltRules,
    step_number: u32,
) -> AuditStep {
    let reasoning = if leg.night_minutes > Decimal::ZERO {
        format!(
            "{} credited minutes {} elapse in {} day and {} night clock minutes, \
             each night hour lasting {} minutes",
            display_minutes(credit),
            label,
            display_minutes(leg.day_minutes),
            display_minutes(leg.night_minutes),
            rules.night.night_hour_minutes.normalize()
        )
    } else {
        format!(
            "{} credited minutes {} fall entirely outside the night window",
            display_minutes(credit),
            label
        )
    };

    AuditStep {
        step_number,
        rule_id: "night_hour_reduction".to_string(),
        rule_name: "Reduced Night Hour".to_string(),
        clause_ref: rules.night.clause.clone(),
        input: serde_json::json!({
            "start": leg.start.time().to_string(),
            "credit_minutes": display_minutes(credit),
        }),
        output: serde_json::json!({
            "end": leg.end.time().to_string(),
            "day_minutes": display_minutes(leg.day_minutes),
            "night_minutes": display_minutes(leg.night_minutes),
        }),
        reasoning,
    }
}

fn break_step(
    placed: &BreakWindow,
    break_credit: Decimal,
    break_minutes: u32,
    rules: &CltRules,
    step_number: u32,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "break_placement".to_string(),
        rule_name: "Intrajornada Break Placement".to_string(),
        clause_ref: rules.breaks.clause.clone(),
        input: serde_json::json!({
            "break_minutes": break_minutes,
            "after_credit_minutes": display_minutes(break_credit),
        }),
        output: serde_json::json!({
            "start": placed.start.time().to_string(),
            "end": placed.end.time().to_string(),
        }),
        reasoning: format!(
            "{}-minute break starts after {} credited minutes of work and is not counted as work",
            break_minutes,
            display_minutes(break_credit)
        ),
    }
}

fn clock_out_step(
    clock_in: NaiveDateTime,
    clock_out: NaiveDateTime,
    day_minutes: Decimal,
    night_minutes: Decimal,
    night_credit_minutes: Decimal,
    step_number: u32,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "clock_out".to_string(),
        rule_name: "Clock-out Time".to_string(),
        clause_ref: "CLT art. 58".to_string(),
        input: serde_json::json!({
            "clock_in": clock_in.time().to_string(),
        }),
        output: serde_json::json!({
            "clock_out": clock_out.time().to_string(),
            "day_minutes": display_minutes(day_minutes),
            "night_minutes": display_minutes(night_minutes),
            "night_credit_minutes": display_minutes(night_credit_minutes),
        }),
        reasoning: format!(
            "Clock-out at {} after {} day and {} night clock minutes of work",
            clock_out.time(),
            display_minutes(day_minutes),
            display_minutes(night_minutes)
        ),
    }
}
