//! Configuration module for the Jornada Engine.
//!
//! This module provides types and functionality for loading CLT rules
//! from YAML files, with statutory defaults when no files are given.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AbsorbingDay, BreakPlacement, BreakRules, CltRules, MonthlyRules, NightRules,
    RegimeDistribution, RegimeRules, RegimesFile, RulesFile,
};
