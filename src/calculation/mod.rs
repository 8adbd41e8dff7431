//! Calculation logic for the Jornada Engine.
//!
//! This module contains the night-window reduction, break validation and
//! placement, the single-workday clock-out calculation, the per-regime week
//! plan, and the weekly and monthly summaries built on top of them.

mod break_rules;
mod night_window;
mod shift_calculator;
mod summary;
mod week_plan;

pub use break_rules::{BreakRequirement, break_start_credit, required_break, validate_break};
pub use night_window::{
    NightHourRule, NightWindow, ReducedInterval, WorkLeg, advance_by_credit, minutes_between,
    minutes_to_duration, reduce_interval,
};
pub use shift_calculator::{calculate_shift, validate_work_duration};
pub use summary::{project_month, summarize_plan, summarize_week};
pub use week_plan::build_week_plan;
