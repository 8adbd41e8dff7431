//! Daily work targets for a weekly regime.
//!
//! The weekly limit (44 hours) is spread over the regime's working days.
//! All days share the same target except one configurable *absorbing day*,
//! which takes whatever is needed to reach the limit exactly.

use crate::config::{AbsorbingDay, RegimeRules};
use crate::error::{EngineError, EngineResult};
use crate::models::{DayTarget, Regime, WeekPlan};

fn distribution_key(regime: Regime) -> &'static str {
    match regime {
        Regime::FiveDay => "regimes.five_day.absorbing_day_minutes",
        Regime::SixDay => "regimes.six_day.absorbing_day_minutes",
    }
}

/// Builds the week plan for a regime.
///
/// Without a fixed absorbing-day target, every day gets
/// `weekly_limit / days` minutes and the absorbing day also takes the
/// remainder. With a fixed target, the other days split the rest evenly.
///
/// # Arguments
///
/// * `regime` - The weekly regime whose working days are planned
/// * `rules` - The weekly limit and per-regime distribution
///
/// # Returns
///
/// The plan, or `InvalidConfig` if a fixed target exceeds the weekly limit
/// or leaves a rest that the other days cannot split evenly.
///
/// # Examples
///
/// ```
/// use jornada_engine::calculation::build_week_plan;
/// use jornada_engine::config::RegimeRules;
/// use jornada_engine::models::Regime;
///
/// let rules = RegimeRules::default();
///
/// let five = build_week_plan(Regime::FiveDay, &rules).unwrap();
/// assert!(five.days.iter().all(|d| d.target_work_minutes == 528));
///
/// let six = build_week_plan(Regime::SixDay, &rules).unwrap();
/// assert!(six.days.iter().all(|d| d.target_work_minutes == 440));
/// assert_eq!(six.total_minutes(), 2640);
/// ```
pub fn build_week_plan(regime: Regime, rules: &RegimeRules) -> EngineResult<WeekPlan> {
    let weekdays = regime.weekdays();
    let day_count = regime.working_days();
    let weekly = rules.weekly_limit_minutes;
    let distribution = rules.distribution(regime);

    let (standard, absorbing) = match distribution.absorbing_day_minutes {
        Some(fixed) => {
            if fixed > weekly {
                return Err(EngineError::InvalidConfig {
                    field: distribution_key(regime).to_string(),
                    message: format!(
                        "{} minutes exceeds the weekly limit of {} minutes",
                        fixed, weekly
                    ),
                });
            }
            let rest = weekly - fixed;
            let others = day_count - 1;
            if rest % others != 0 {
                return Err(EngineError::InvalidConfig {
                    field: distribution_key(regime).to_string(),
                    message: format!(
                        "the remaining {} minutes cannot be split evenly over {} days",
                        rest, others
                    ),
                });
            }
            (rest / others, fixed)
        }
        None => {
            let standard = weekly / day_count;
            (standard, weekly - standard * (day_count - 1))
        }
    };

    let absorbing_index = match distribution.absorbing_day {
        AbsorbingDay::First => 0,
        AbsorbingDay::Last => weekdays.len() - 1,
    };

    let days = weekdays
        .iter()
        .enumerate()
        .map(|(index, &weekday)| DayTarget {
            weekday,
            target_work_minutes: if index == absorbing_index {
                absorbing
            } else {
                standard
            },
        })
        .collect();

    Ok(WeekPlan { regime, days })
}
