//! Text rendering of workday results.
//!
//! Times are shown as `HH:MM`, rounded half-up to the minute; durations as
//! `08h 48m`.

use chrono::{NaiveDateTime, NaiveTime};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{MonthlySummary, ShiftResult, WeeklySummary, round_to_minute};

/// Formats minutes as `HHh MMm`, rounded to the nearest minute.
///
/// # Examples
///
/// ```
/// use jornada_engine::report::format_minutes;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_minutes(Decimal::from(528)), "08h 48m");
/// assert_eq!(format_minutes(Decimal::new(945, 1)), "01h 35m");
/// ```
pub fn format_minutes(minutes: Decimal) -> String {
    let whole = minutes
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or_default();
    let sign = if whole < 0 { "-" } else { "" };
    let whole = whole.abs();
    format!("{}{:02}h {:02}m", sign, whole / 60, whole % 60)
}

/// Formats a time of day as `HH:MM`, rounded to the nearest minute.
pub fn format_clock(at: NaiveDateTime) -> String {
    round_to_minute(at).format("%H:%M").to_string()
}

fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

fn format_hours(hours: Decimal) -> String {
    hours.round_dp(2).normalize().to_string()
}

fn break_column(result: &ShiftResult) -> String {
    match &result.break_window {
        Some(window) => format!("{} - {}", format_clock(window.start), format_clock(window.end)),
        None => "-".to_string(),
    }
}

fn clock_out_column(result: &ShiftResult) -> String {
    let clock_out = format_clock(result.clock_out);
    if result.ends_next_day() {
        format!("{} (+1)", clock_out)
    } else {
        clock_out
    }
}

/// Renders a single workday.
pub fn render_shift(result: &ShiftResult) -> String {
    format!(
        "Clock-in:   {}\n\
         Break:      {}\n\
         Clock-out:  {}\n\
         Work:       {} credited ({} day, {} night clock)\n",
        format_clock(result.clock_in),
        break_column(result),
        clock_out_column(result),
        format_minutes(Decimal::from(result.target_work_minutes)),
        format_minutes(result.day_minutes),
        format_minutes(result.night_minutes)
    )
}

fn table_row(columns: [&str; 7]) -> String {
    let [day, clock_in, break_window, clock_out, target, day_work, night_work] = columns;
    format!(
        "{:<4} {:<9} {:<15} {:<11} {:<9} {:<9} {:<9}\n",
        day, clock_in, break_window, clock_out, target, day_work, night_work
    )
}

/// Renders the weekly table, one row per working day plus a totals row.
pub fn render_week_table(weekly: &WeeklySummary) -> String {
    let mut out = format!(
        "Regime: {}  |  Clock-in: {}  |  Break: {} min\n",
        weekly.regime,
        format_time(weekly.clock_in),
        weekly.break_minutes
    );
    out.push_str(&table_row([
        "Day",
        "Clock-in",
        "Break",
        "Clock-out",
        "Target",
        "Day",
        "Night",
    ]));

    for row in &weekly.rows {
        let result = &row.result;
        out.push_str(&table_row([
            &row.weekday.to_string(),
            &format_clock(result.clock_in),
            &break_column(result),
            &clock_out_column(result),
            &format_minutes(Decimal::from(result.target_work_minutes)),
            &format_minutes(result.day_minutes),
            &format_minutes(result.night_minutes),
        ]));
    }

    out.push_str(&table_row([
        "Week",
        "",
        "",
        "",
        &format_minutes(Decimal::from(weekly.total_target_minutes)),
        &format_minutes(weekly.total_day_minutes),
        &format_minutes(weekly.total_night_minutes),
    ]));

    let limit = format_minutes(Decimal::from(weekly.weekly_limit_minutes));
    if weekly.within_weekly_limit {
        out.push_str(&format!("Within the weekly limit of {}.\n", limit));
    } else {
        out.push_str(&format!("Exceeds the weekly limit of {}!\n", limit));
    }
    out
}

/// Renders the monthly projection.
pub fn render_month(monthly: &MonthlySummary) -> String {
    let mut out = format!(
        "Monthly reference (CLT):       {}h\n\
         Projected by weeks (x{}):  {}h\n\
         Projected by {} working days: {}h\n",
        format_hours(monthly.reference_hours),
        monthly.weeks_per_month.normalize(),
        format_hours(monthly.projected_hours_by_weeks),
        monthly.working_days_per_month,
        format_hours(monthly.projected_hours_by_working_days)
    );
    if monthly.projected_night_minutes > Decimal::ZERO {
        out.push_str(&format!(
            "Projected night work:          {}\n",
            format_minutes(monthly.projected_night_minutes)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{calculate_shift, project_month, summarize_week};
    use crate::config::CltRules;
    use crate::models::{Regime, ShiftInput};

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(Decimal::from(2640)), "44h 00m");
        assert_eq!(format_minutes(Decimal::ZERO), "00h 00m");
        assert_eq!(format_minutes(dec("171.4285714")), "02h 51m");
        assert_eq!(format_minutes(dec("-30")), "-00h 30m");
    }

    #[test]
    fn test_format_clock_rounds() {
        let at = NaiveDateTime::parse_from_str("2023-01-01 23:34:30", "%Y-%m-%d %H:%M:%S").unwrap();
        assert_eq!(format_clock(at), "23:35");
    }

    #[test]
    fn test_render_shift_marks_next_day() {
        let input = ShiftInput::parse("20:00", 528, 60).unwrap();
        let result = calculate_shift(&input, &CltRules::default()).unwrap();
        let text = render_shift(&result);

        assert!(text.contains("Clock-out:  04:57 (+1)"));
        assert!(text.contains("Break:      23:45 - 00:45"));
        assert!(text.contains("02h 00m day"));
        assert!(text.contains("05h 57m night"));
    }

    #[test]
    fn test_render_week_table() {
        let clock_in = chrono::NaiveTime::from_hms_opt(7, 0, 0).unwrap();
        let week = summarize_week(clock_in, 60, Regime::FiveDay, &CltRules::default()).unwrap();
        let text = render_week_table(&week);

        assert_eq!(text.lines().filter(|l| l.contains("16:48")).count(), 5);
        assert!(text.contains("Mon"));
        assert!(text.contains("44h 00m"));
        assert!(text.contains("Within the weekly limit"));
    }

    #[test]
    fn test_render_month() {
        let rules = CltRules::default();
        let clock_in = chrono::NaiveTime::from_hms_opt(7, 0, 0).unwrap();
        let week = summarize_week(clock_in, 60, Regime::FiveDay, &rules).unwrap();
        let text = render_month(&project_month(&week, &rules));

        assert!(text.contains("220h"));
        assert!(text.contains("193.6h"));
        assert!(!text.contains("night"));
    }
}
