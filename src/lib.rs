//! Shift pricing engine for weekly hourly payroll.
//!
//! This crate computes weekly pay for hourly workers from text schedules of
//! the form `NAME=MO10:00-12:00,SA14:00-18:00`, applying banded hourly rates
//! by day-of-week category (weekday/weekend) and time-of-day band
//! (night/day/evening).

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod payroll;
pub mod report;
