//! Rate table types.
//!
//! This module contains the strongly-typed rate structures that map a
//! (day category, pricing band) pair to an hourly rate in currency units.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::{DayCategory, PricingBand};

/// Hourly rates for the three pricing bands of one day category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BandRates {
    /// The hourly rate for the night band (00:00-09:00).
    pub night: Decimal,
    /// The hourly rate for the day band (09:00-18:00).
    pub day: Decimal,
    /// The hourly rate for the evening band (18:00-24:00).
    pub evening: Decimal,
}

/// The full rate table: one rate row per day category.
///
/// The table is immutable once constructed; nothing in the engine ever
/// modifies it. [`RateTable::default`] carries the reference constants:
///
/// | | Night | Day | Evening |
/// |---|---|---|---|
/// | Weekday | 25 | 15 | 20 |
/// | Weekend | 30 | 20 | 25 |
///
/// # Example
///
/// ```
/// use shift_pricer::calculation::{DayCategory, PricingBand};
/// use shift_pricer::config::RateTable;
/// use rust_decimal::Decimal;
///
/// let rates = RateTable::default();
/// let rate = rates.rate(DayCategory::Weekend, PricingBand::Night);
/// assert_eq!(rate, Decimal::from(30));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RateTable {
    /// Rates applied Monday through Friday.
    pub weekday: BandRates,
    /// Rates applied Saturday and Sunday.
    pub weekend: BandRates,
}

impl RateTable {
    /// Returns the hourly rate for the given day category and band.
    pub fn rate(&self, category: DayCategory, band: PricingBand) -> Decimal {
        let row = match category {
            DayCategory::Weekday => &self.weekday,
            DayCategory::Weekend => &self.weekend,
        };
        match band {
            PricingBand::Night => row.night,
            PricingBand::Day => row.day,
            PricingBand::Evening => row.evening,
        }
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            weekday: BandRates {
                night: Decimal::from(25),
                day: Decimal::from(15),
                evening: Decimal::from(20),
            },
            weekend: BandRates {
                night: Decimal::from(30),
                day: Decimal::from(20),
                evening: Decimal::from(25),
            },
        }
    }
}
