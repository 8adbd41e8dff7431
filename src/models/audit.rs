//! Audit trail entries recorded by the calculator.

use serde::{Deserialize, Serialize};

/// A single step in the audit trail recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application,
/// so a clock-out time can be traced back to the legal rules that produced it.
///
/// # Example
///
/// ```
/// use jornada_engine::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "break_validation".to_string(),
///     rule_name: "Intrajornada Break Validation".to_string(),
///     clause_ref: "CLT art. 71".to_string(),
///     input: serde_json::json!({"work_minutes": 528, "break_minutes": 60}),
///     output: serde_json::json!({"minimum_break_minutes": 60}),
///     reasoning: "528 minutes of work require at least 60 minutes of break".to_string(),
/// };
/// assert_eq!(step.rule_id, "break_validation");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the legal clause for this rule.
    pub clause_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}
