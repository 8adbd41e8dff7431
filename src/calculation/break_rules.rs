//! Intrajornada break rules.
//!
//! This module validates the break requested for a workday against
//! CLT art. 71 and decides where in the workday the break is placed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{BreakPlacement, BreakRules};
use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// The break range the rules allow for a given workday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakRequirement {
    /// Shortest accepted break, in minutes.
    pub minimum_minutes: u32,
    /// Longest accepted break, in minutes.
    pub maximum_minutes: u32,
}

/// Returns the break range required for `work_minutes` of work.
///
/// # Example
///
/// ```
/// use jornada_engine::calculation::required_break;
/// use jornada_engine::config::BreakRules;
///
/// let rules = BreakRules::default();
/// assert_eq!(required_break(528, &rules).minimum_minutes, 60);
/// assert_eq!(required_break(300, &rules).minimum_minutes, 15);
/// assert_eq!(required_break(240, &rules).minimum_minutes, 0);
/// ```
pub fn required_break(work_minutes: u32, rules: &BreakRules) -> BreakRequirement {
    let minimum_minutes = if work_minutes > rules.long_shift_threshold_minutes {
        rules.long_shift_min_break_minutes
    } else if work_minutes > rules.medium_shift_threshold_minutes {
        rules.medium_shift_min_break_minutes
    } else {
        0
    };

    BreakRequirement {
        minimum_minutes,
        maximum_minutes: rules.max_break_minutes,
    }
}

/// Validates a break against the rules for the workday.
///
/// # Returns
///
/// The audit step documenting the check, or `InvalidBreakDuration` when the
/// break is shorter than the minimum or longer than the maximum.
pub fn validate_break(
    work_minutes: u32,
    break_minutes: u32,
    rules: &BreakRules,
    step_number: u32,
) -> EngineResult<AuditStep> {
    let requirement = required_break(work_minutes, rules);

    if break_minutes < requirement.minimum_minutes {
        let threshold = if work_minutes > rules.long_shift_threshold_minutes {
            rules.long_shift_threshold_minutes
        } else {
            rules.medium_shift_threshold_minutes
        };
        return Err(EngineError::InvalidBreakDuration {
            break_minutes,
            work_minutes,
            reason: format!(
                "at least {} minutes required above {} minutes of work",
                requirement.minimum_minutes, threshold
            ),
        });
    }

    if break_minutes > requirement.maximum_minutes {
        return Err(EngineError::InvalidBreakDuration {
            break_minutes,
            work_minutes,
            reason: format!("at most {} minutes allowed", requirement.maximum_minutes),
        });
    }

    let reasoning = if requirement.minimum_minutes == 0 {
        format!(
            "{} minutes of work require no minimum break; {} minutes accepted",
            work_minutes, break_minutes
        )
    } else {
        format!(
            "{} minutes of work require at least {} minutes of break; {} minutes accepted",
            work_minutes, requirement.minimum_minutes, break_minutes
        )
    };

    Ok(AuditStep {
        step_number,
        rule_id: "break_validation".to_string(),
        rule_name: "Intrajornada Break Validation".to_string(),
        clause_ref: rules.clause.clone(),
        input: serde_json::json!({
            "work_minutes": work_minutes,
            "break_minutes": break_minutes,
        }),
        output: serde_json::json!({
            "minimum_break_minutes": requirement.minimum_minutes,
            "maximum_break_minutes": requirement.maximum_minutes,
        }),
        reasoning,
    })
}

/// Work credit, in minutes, at which the break starts.
///
/// With [`BreakPlacement::AfterWorkedMinutes`] the break starts after the
/// configured credit, unless the workday is not longer than that, in which
/// case it falls back to the midpoint.
///
/// # Example
///
/// ```
/// use jornada_engine::calculation::break_start_credit;
/// use jornada_engine::config::BreakPlacement;
/// use rust_decimal::Decimal;
///
/// let placement = BreakPlacement::AfterWorkedMinutes { minutes: 240 };
/// assert_eq!(break_start_credit(528, placement), Decimal::from(240));
/// assert_eq!(break_start_credit(60, placement), Decimal::from(30));
/// ```
pub fn break_start_credit(work_minutes: u32, placement: BreakPlacement) -> Decimal {
    let midpoint = Decimal::from(work_minutes) / Decimal::from(2);
    match placement {
        BreakPlacement::AfterWorkedMinutes { minutes } if minutes < work_minutes => {
            Decimal::from(minutes)
        }
        BreakPlacement::AfterWorkedMinutes { .. } | BreakPlacement::Midpoint => midpoint,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> BreakRules {
        BreakRules::default()
    }

    #[test]
    fn test_long_shift_requires_one_hour() {
        let requirement = required_break(528, &rules());
        assert_eq!(requirement.minimum_minutes, 60);
        assert_eq!(requirement.maximum_minutes, 120);
    }

    #[test]
    fn test_six_hours_exactly_requires_fifteen_minutes() {
        assert_eq!(required_break(360, &rules()).minimum_minutes, 15);
        assert_eq!(required_break(361, &rules()).minimum_minutes, 60);
    }

    #[test]
    fn test_short_shift_requires_no_break() {
        assert_eq!(required_break(240, &rules()).minimum_minutes, 0);
        assert_eq!(required_break(60, &rules()).minimum_minutes, 0);
    }

    #[test]
    fn test_break_below_minimum_is_rejected() {
        match validate_break(528, 30, &rules(), 1) {
            Err(EngineError::InvalidBreakDuration {
                break_minutes,
                work_minutes,
                reason,
            }) => {
                assert_eq!(break_minutes, 30);
                assert_eq!(work_minutes, 528);
                assert!(reason.contains("at least 60 minutes"));
                assert!(reason.contains("above 360 minutes"));
            }
            other => panic!("Expected InvalidBreakDuration, got {:?}", other),
        }
    }

    #[test]
    fn test_medium_shift_break_below_fifteen_is_rejected() {
        match validate_break(300, 10, &rules(), 1) {
            Err(EngineError::InvalidBreakDuration { reason, .. }) => {
                assert!(reason.contains("above 240 minutes"));
            }
            other => panic!("Expected InvalidBreakDuration, got {:?}", other),
        }
    }

    #[test]
    fn test_break_above_maximum_is_rejected() {
        match validate_break(528, 150, &rules(), 1) {
            Err(EngineError::InvalidBreakDuration { reason, .. }) => {
                assert_eq!(reason, "at most 120 minutes allowed");
            }
            other => panic!("Expected InvalidBreakDuration, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_break_produces_audit_step() {
        let step = validate_break(528, 60, &rules(), 3).unwrap();
        assert_eq!(step.step_number, 3);
        assert_eq!(step.rule_id, "break_validation");
        assert_eq!(step.clause_ref, "CLT art. 71");
        assert_eq!(step.input["break_minutes"], 60);
        assert_eq!(step.output["minimum_break_minutes"], 60);
        assert!(step.reasoning.contains("at least 60 minutes"));
    }

    #[test]
    fn test_zero_break_accepted_for_short_shift() {
        let step = validate_break(120, 0, &rules(), 1).unwrap();
        assert!(step.reasoning.contains("no minimum break"));
    }

    #[test]
    fn test_break_start_after_configured_credit() {
        let placement = BreakPlacement::AfterWorkedMinutes { minutes: 240 };
        assert_eq!(break_start_credit(440, placement), Decimal::from(240));
    }

    #[test]
    fn test_break_start_falls_back_to_midpoint() {
        let placement = BreakPlacement::AfterWorkedMinutes { minutes: 240 };
        assert_eq!(break_start_credit(240, placement), Decimal::from(120));
    }

    #[test]
    fn test_break_start_midpoint_policy() {
        assert_eq!(
            break_start_credit(528, BreakPlacement::Midpoint),
            Decimal::from(264)
        );
        assert_eq!(
            break_start_credit(45, BreakPlacement::Midpoint),
            "22.5".parse::<Decimal>().unwrap()
        );
    }
}
