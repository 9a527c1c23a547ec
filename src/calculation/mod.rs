//! Calculation logic for the shift pricing engine.
//!
//! This module contains the pay calculation functions: day category
//! detection for weekend rates, the pricing band definitions and the band
//! walk that splits a shift into banded sub-intervals, single-shift pricing,
//! and weekly aggregation.

mod band;
mod day_category;
mod shift_pricer;
mod week;

pub use band::{BandSegment, PricingBand, band_of, segment_by_band};
pub use day_category::{DayCategory, get_day_category};
pub use shift_pricer::{PricedSegment, ShiftPricingResult, day_pay, price_shift};
pub use week::week_pay;
