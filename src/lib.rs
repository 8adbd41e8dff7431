//! Jornada Engine: clock-out time under Brazilian CLT rules
//!
//! This crate calculates when a worker must clock out to complete a day's
//! work target, counting night work at the reduced night hour (CLT art. 73)
//! and inserting the intrajornada break (CLT art. 71). It also spreads the
//! 44-hour week over 5-day or 6-day regimes and projects the week onto a month.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod report;
