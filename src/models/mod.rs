//! Core data models for the Jornada Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod regime;
mod shift;
mod shift_result;
mod week;

pub use audit::AuditStep;
pub use regime::Regime;
pub use shift::{ShiftInput, parse_clock_time};
pub use shift_result::{BreakWindow, ShiftResult, round_to_minute};
pub use week::{DayRow, DayTarget, MonthlySummary, WeekPlan, WeeklySummary};
