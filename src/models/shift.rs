//! Shift model and related types.
//!
//! This module defines the DayCode and Shift types for representing one
//! contiguous work interval within a single calendar day.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PricerError;

/// The number of minutes in a full day; also the extended end-of-day minute.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A two-letter day-of-week code used in schedule data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DayCode {
    /// Monday.
    Mo,
    /// Tuesday.
    Tu,
    /// Wednesday.
    We,
    /// Thursday.
    Th,
    /// Friday.
    Fr,
    /// Saturday.
    Sa,
    /// Sunday.
    Su,
}

impl DayCode {
    /// Returns the uppercase two-letter token for this day code.
    pub fn as_str(&self) -> &'static str {
        match self {
            DayCode::Mo => "MO",
            DayCode::Tu => "TU",
            DayCode::We => "WE",
            DayCode::Th => "TH",
            DayCode::Fr => "FR",
            DayCode::Sa => "SA",
            DayCode::Su => "SU",
        }
    }
}

impl fmt::Display for DayCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayCode {
    type Err = PricerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MO" => Ok(DayCode::Mo),
            "TU" => Ok(DayCode::Tu),
            "WE" => Ok(DayCode::We),
            "TH" => Ok(DayCode::Th),
            "FR" => Ok(DayCode::Fr),
            "SA" => Ok(DayCode::Sa),
            "SU" => Ok(DayCode::Su),
            _ => Err(PricerError::InvalidDayCode {
                code: s.to_string(),
            }),
        }
    }
}

/// Represents one work shift within a single calendar day.
///
/// A shift never spans a day-code boundary. An `end` of 00:00 is interpreted
/// as end-of-day (24:00), never start-of-day, so a shift may run up to but
/// not past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// The day-of-week code the shift was worked on.
    pub day: DayCode,
    /// The start time of the shift.
    pub start: NaiveTime,
    /// The end time of the shift (00:00 means end-of-day).
    pub end: NaiveTime,
}

impl Shift {
    /// Returns the shift start as minutes from midnight.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_pricer::models::{DayCode, Shift};
    /// use chrono::NaiveTime;
    ///
    /// let shift = Shift {
    ///     day: DayCode::Mo,
    ///     start: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
    ///     end: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
    /// };
    /// assert_eq!(shift.start_minute(), 600);
    /// ```
    pub fn start_minute(&self) -> u32 {
        self.start.hour() * 60 + self.start.minute()
    }

    /// Returns the shift end as minutes from midnight, with 00:00 normalized
    /// to the extended end-of-day value of 1440.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_pricer::models::{DayCode, MINUTES_PER_DAY, Shift};
    /// use chrono::NaiveTime;
    ///
    /// let shift = Shift {
    ///     day: DayCode::Sa,
    ///     start: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
    ///     end: NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
    /// };
    /// assert_eq!(shift.end_minute(), MINUTES_PER_DAY);
    /// ```
    pub fn end_minute(&self) -> u32 {
        let minute = self.end.hour() * 60 + self.end.minute();
        if minute == 0 { MINUTES_PER_DAY } else { minute }
    }

    /// Calculates the worked duration of the shift in hours.
    ///
    /// # Returns
    ///
    /// The number of worked hours as a Decimal, exact to minute resolution.
    pub fn worked_hours(&self) -> Decimal {
        let minutes = self.end_minute() - self.start_minute();
        Decimal::from(minutes) / Decimal::from(60)
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}-{}",
            self.day,
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}
