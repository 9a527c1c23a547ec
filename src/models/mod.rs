//! Core data models for the shift pricing engine.
//!
//! This module contains the domain value objects used throughout the engine.

mod shift;
mod weekly_record;

pub use shift::{DayCode, MINUTES_PER_DAY, Shift};
pub use weekly_record::WeeklyRecord;
