//! Weekly aggregation.
//!
//! This module sums single-shift pricing results over one worker's week.

use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::models::Shift;

use super::shift_pricer::price_shift;

/// Sums shift pay over one worker's week, rounded to 2 decimal places.
///
/// Pure function of its input: no validation is performed here, the shifts
/// are assumed to come from the input parser. Per-shift amounts are kept
/// exact and the rounding happens once on the weekly total.
///
/// # Arguments
///
/// * `shifts` - The week's shifts, in input order
/// * `rates` - The rate table to bill against
///
/// # Example
///
/// ```
/// use shift_pricer::calculation::week_pay;
/// use shift_pricer::config::RateTable;
/// use shift_pricer::input::parse_shift_list;
/// use rust_decimal::Decimal;
///
/// let shifts = parse_shift_list("MO10:00-12:00,TH12:00-14:00,SU20:00-21:00").unwrap();
/// assert_eq!(week_pay(&shifts, &RateTable::default()), Decimal::from(85));
/// ```
pub fn week_pay(shifts: &[Shift], rates: &RateTable) -> Decimal {
    let total: Decimal = shifts
        .iter()
        .map(|shift| price_shift(shift, rates).amount)
        .sum();
    total.round_dp(2)
}
