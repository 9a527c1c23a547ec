//! Single-shift pricing.
//!
//! This module prices one single-day shift by walking its banded segments
//! and billing each at the rate for the shift's day category.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::RateTable;
use crate::models::Shift;

use super::band::{BandSegment, PricingBand, segment_by_band};
use super::day_category::{DayCategory, get_day_category};

/// One priced sub-interval of a shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedSegment {
    /// The pricing band this segment falls in.
    pub band: PricingBand,
    /// The day category that selected the rate row.
    pub category: DayCategory,
    /// The start of the segment in minutes from midnight.
    pub start_minute: u32,
    /// The end of the segment in minutes from midnight.
    pub end_minute: u32,
    /// The duration of the segment in hours.
    pub hours: Decimal,
    /// The hourly rate billed for this segment.
    pub rate: Decimal,
    /// The charge for this segment (hours × rate, unrounded).
    pub amount: Decimal,
}

/// The result of pricing one shift, including the per-band breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftPricingResult {
    /// The priced segments, in chronological (ascending band) order.
    pub segments: Vec<PricedSegment>,
    /// The unrounded total charge for the shift.
    pub amount: Decimal,
}

/// Prices one single-day shift.
///
/// Determines the day category from the shift's day code, splits the shift
/// interval into band-aligned segments, and bills each segment's duration
/// at the rate for (category, band). The returned amount is exact and
/// unrounded; rounding happens once at the day or week total.
///
/// # Arguments
///
/// * `shift` - The shift to price; its extended end must be after its start
///   (guaranteed by the input parser)
/// * `rates` - The rate table to bill against
///
/// # Example
///
/// ```
/// use shift_pricer::calculation::price_shift;
/// use shift_pricer::config::RateTable;
/// use shift_pricer::models::{DayCode, Shift};
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let shift = Shift {
///     day: DayCode::Mo,
///     start: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
///     end: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
/// };
/// let result = price_shift(&shift, &RateTable::default());
/// assert_eq!(result.amount, Decimal::from(30));
/// ```
pub fn price_shift(shift: &Shift, rates: &RateTable) -> ShiftPricingResult {
    let category = get_day_category(shift.day);
    let segments = segment_by_band(shift.start_minute(), shift.end_minute());

    let priced: Vec<PricedSegment> = segments
        .into_iter()
        .map(|segment| price_segment(segment, category, rates))
        .collect();
    let amount: Decimal = priced.iter().map(|s| s.amount).sum();

    debug!(
        shift = %shift,
        %category,
        segments = priced.len(),
        %amount,
        "priced shift"
    );

    ShiftPricingResult {
        segments: priced,
        amount,
    }
}

/// Prices one single-day shift and rounds the total to 2 decimal places.
///
/// # Example
///
/// ```
/// use shift_pricer::calculation::day_pay;
/// use shift_pricer::config::RateTable;
/// use shift_pricer::models::{DayCode, Shift};
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// // Saturday 20:00-24:00: 4 evening hours at the weekend rate of 25
/// let shift = Shift {
///     day: DayCode::Sa,
///     start: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
///     end: NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
/// };
/// assert_eq!(day_pay(&shift, &RateTable::default()), Decimal::from(100));
/// ```
pub fn day_pay(shift: &Shift, rates: &RateTable) -> Decimal {
    price_shift(shift, rates).amount.round_dp(2)
}

fn price_segment(segment: BandSegment, category: DayCategory, rates: &RateTable) -> PricedSegment {
    let rate = rates.rate(category, segment.band);
    PricedSegment {
        band: segment.band,
        category,
        start_minute: segment.start_minute,
        end_minute: segment.end_minute,
        hours: segment.hours,
        rate,
        amount: segment.hours * rate,
    }
}
