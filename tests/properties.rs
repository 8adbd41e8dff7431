//! Property tests for the workday calculator.

use chrono::{Duration, NaiveTime};
use proptest::prelude::*;
use rust_decimal::Decimal;

use jornada_engine::calculation::calculate_shift;
use jornada_engine::config::CltRules;
use jornada_engine::models::ShiftInput;

fn clock(minute_of_day: u32) -> NaiveTime {
    NaiveTime::from_num_seconds_from_midnight_opt(minute_of_day * 60, 0).unwrap()
}

fn tolerance() -> Decimal {
    Decimal::new(1, 3)
}

proptest! {
    #[test]
    fn prop_day_shift_is_plain_addition(
        start in 300u32..=600,
        work in 1u32..=600,
        break_minutes in 60u32..=120,
    ) {
        let input = ShiftInput::new(clock(start), work, break_minutes);
        let result = calculate_shift(&input, &CltRules::default()).unwrap();

        let expected = result.clock_in + Duration::minutes(i64::from(work + break_minutes));
        prop_assert_eq!(result.clock_out, expected);
        prop_assert_eq!(result.night_minutes, Decimal::ZERO);
    }

    #[test]
    fn prop_night_shift_elapses_at_seven_eighths(
        offset in 0u32..=60,
        work in 1u32..=360,
        break_minutes in 15u32..=40,
    ) {
        let input = ShiftInput::new(clock(22 * 60 + offset), work, break_minutes);
        let result = calculate_shift(&input, &CltRules::default()).unwrap();

        let worked = result.elapsed_minutes - Decimal::from(break_minutes);
        let expected = Decimal::from(work) * Decimal::new(875, 3);
        prop_assert!((worked - expected).abs() < tolerance());
        prop_assert_eq!(result.day_minutes, Decimal::ZERO);
    }

    #[test]
    fn prop_credit_matches_target(
        start in 0u32..1440,
        work in 1u32..=600,
        break_minutes in 60u32..=120,
    ) {
        let input = ShiftInput::new(clock(start), work, break_minutes);
        let result = calculate_shift(&input, &CltRules::default()).unwrap();

        prop_assert!((result.credited_minutes() - Decimal::from(work)).abs() < tolerance());
        prop_assert!(result.worked_clock_minutes() <= Decimal::from(work) + tolerance());
    }

    #[test]
    fn prop_elapsed_is_worked_plus_break(
        start in 0u32..1440,
        work in 1u32..=600,
        break_minutes in 60u32..=120,
    ) {
        let input = ShiftInput::new(clock(start), work, break_minutes);
        let result = calculate_shift(&input, &CltRules::default()).unwrap();

        let rebuilt = result.worked_clock_minutes() + Decimal::from(break_minutes);
        prop_assert!((result.elapsed_minutes - rebuilt).abs() < tolerance());
        prop_assert!(result.clock_out > result.clock_in);
    }

    #[test]
    fn prop_calculation_is_idempotent(
        start in 0u32..1440,
        work in 1u32..=600,
        break_minutes in 60u32..=120,
    ) {
        let rules = CltRules::default();
        let input = ShiftInput::new(clock(start), work, break_minutes);

        let first = calculate_shift(&input, &rules).unwrap();
        let second = calculate_shift(&input, &rules).unwrap();
        prop_assert_eq!(first, second);
    }
}
