//! Pricing band definitions and the band walk.
//!
//! This module defines the three fixed time-of-day bands (night, day,
//! evening) and the forward walk that splits a shift interval into
//! contiguous sub-intervals aligned to band boundaries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::MINUTES_PER_DAY;

/// Represents one of the three fixed time-of-day pricing bands.
///
/// Bands are contiguous and cover the full 24-hour day with no gaps,
/// ordered Night < Day < Evening:
///
/// - Night: 00:00-09:00
/// - Day: 09:00-18:00
/// - Evening: 18:00-24:00
///
/// # Example
///
/// ```
/// use shift_pricer::calculation::PricingBand;
///
/// assert!(PricingBand::Night < PricingBand::Evening);
/// assert_eq!(PricingBand::Day.begin_minute(), 540);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingBand {
    /// 00:00 up to 09:00.
    Night,
    /// 09:00 up to 18:00.
    Day,
    /// 18:00 up to and including 24:00.
    Evening,
}

impl PricingBand {
    /// All bands in ascending boundary order. The walk and the membership
    /// tie-break both depend on this order, so it is an explicit array
    /// rather than an incidental iteration order.
    pub const ALL: [PricingBand; 3] = [PricingBand::Night, PricingBand::Day, PricingBand::Evening];

    /// Returns the minute-from-midnight where this band begins.
    pub fn begin_minute(&self) -> u32 {
        match self {
            PricingBand::Night => 0,
            PricingBand::Day => 9 * 60,
            PricingBand::Evening => 18 * 60,
        }
    }

    /// Returns the minute-from-midnight where this band ends.
    ///
    /// The evening band ends at the extended end-of-day minute 1440.
    pub fn end_minute(&self) -> u32 {
        match self {
            PricingBand::Night => 9 * 60,
            PricingBand::Day => 18 * 60,
            PricingBand::Evening => MINUTES_PER_DAY,
        }
    }

    /// Returns the next band in ascending order, or `None` for Evening.
    pub fn next(&self) -> Option<PricingBand> {
        match self {
            PricingBand::Night => Some(PricingBand::Day),
            PricingBand::Day => Some(PricingBand::Evening),
            PricingBand::Evening => None,
        }
    }
}

impl std::fmt::Display for PricingBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PricingBand::Night => write!(f, "Night"),
            PricingBand::Day => write!(f, "Day"),
            PricingBand::Evening => write!(f, "Evening"),
        }
    }
}

/// Classifies a minute-of-day into its pricing band.
///
/// Membership is tested against closed `[begin, end]` boundaries in
/// Night, Day, Evening order and the LAST matching band wins, so a minute
/// sitting exactly on a boundary belongs to the later band. The extended
/// end-of-day minute 1440 belongs to Evening.
///
/// # Arguments
///
/// * `minute` - Minutes from midnight, in the range `0..=1440`
///
/// # Example
///
/// ```
/// use shift_pricer::calculation::{PricingBand, band_of};
///
/// assert_eq!(band_of(0), PricingBand::Night);
/// assert_eq!(band_of(540), PricingBand::Day);     // 09:00 boundary
/// assert_eq!(band_of(1080), PricingBand::Evening); // 18:00 boundary
/// assert_eq!(band_of(1440), PricingBand::Evening); // end-of-day
/// ```
pub fn band_of(minute: u32) -> PricingBand {
    let mut result = None;
    for band in PricingBand::ALL {
        if band.begin_minute() <= minute && minute <= band.end_minute() {
            result = Some(band);
        }
    }
    result.expect("pricing bands cover the full day")
}

/// One sub-interval of a shift lying entirely within a single pricing band.
///
/// The segments produced by [`segment_by_band`] partition the shift
/// interval with no gap or overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandSegment {
    /// The band this segment falls in.
    pub band: PricingBand,
    /// The start of the segment in minutes from midnight.
    pub start_minute: u32,
    /// The end of the segment in minutes from midnight (up to 1440).
    pub end_minute: u32,
    /// The duration of the segment in hours.
    pub hours: Decimal,
}

/// Splits a shift interval into contiguous band-aligned segments.
///
/// Walks the bands in ascending order starting from the band containing
/// `start_minute` until the band containing `end_minute` is reached,
/// emitting one segment per band crossed. The walk is monotonic
/// (Night → Day → Evening, never backward). Zero-length segments, which
/// arise when the shift end sits exactly on a band boundary, are dropped.
///
/// # Arguments
///
/// * `start_minute` - Shift start, minutes from midnight, `0..1440`
/// * `end_minute` - Shift end after midnight normalization, `1..=1440`
///
/// # Panics
///
/// Debug-asserts `start_minute < end_minute`; a backward or empty interval
/// is a precondition violation the input parser must have rejected.
///
/// # Example
///
/// ```
/// use shift_pricer::calculation::{PricingBand, segment_by_band};
/// use rust_decimal::Decimal;
///
/// // 08:00-20:00 crosses all three bands
/// let segments = segment_by_band(480, 1200);
/// assert_eq!(segments.len(), 3);
/// assert_eq!(segments[0].band, PricingBand::Night);
/// assert_eq!(segments[0].hours, Decimal::from(1));
/// assert_eq!(segments[1].band, PricingBand::Day);
/// assert_eq!(segments[1].hours, Decimal::from(9));
/// assert_eq!(segments[2].band, PricingBand::Evening);
/// assert_eq!(segments[2].hours, Decimal::from(2));
/// ```
pub fn segment_by_band(start_minute: u32, end_minute: u32) -> Vec<BandSegment> {
    debug_assert!(
        start_minute < end_minute,
        "shift interval must be forward-moving: {start_minute}..{end_minute}"
    );

    let mut segments = Vec::new();
    let mut current_start = start_minute;
    let mut current_band = band_of(start_minute);
    let end_band = band_of(end_minute);

    loop {
        if current_band == end_band {
            push_segment(&mut segments, current_band, current_start, end_minute);
            break;
        }

        push_segment(
            &mut segments,
            current_band,
            current_start,
            current_band.end_minute(),
        );
        current_start = current_band.end_minute();
        current_band = current_band
            .next()
            .expect("band walk cannot run past the evening band");
    }

    segments
}

/// Appends a segment unless it is zero-length.
fn push_segment(segments: &mut Vec<BandSegment>, band: PricingBand, start: u32, end: u32) {
    if end > start {
        segments.push(BandSegment {
            band,
            start_minute: start,
            end_minute: end,
            hours: Decimal::from(end - start) / Decimal::from(60),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_band_boundaries_are_contiguous() {
        assert_eq!(
            PricingBand::Night.end_minute(),
            PricingBand::Day.begin_minute()
        );
        assert_eq!(
            PricingBand::Day.end_minute(),
            PricingBand::Evening.begin_minute()
        );
        assert_eq!(PricingBand::Night.begin_minute(), 0);
        assert_eq!(PricingBand::Evening.end_minute(), MINUTES_PER_DAY);
    }

    #[test]
    fn test_band_of_interior_minutes() {
        assert_eq!(band_of(0), PricingBand::Night);
        assert_eq!(band_of(300), PricingBand::Night);
        assert_eq!(band_of(600), PricingBand::Day);
        assert_eq!(band_of(1079), PricingBand::Day);
        assert_eq!(band_of(1200), PricingBand::Evening);
        assert_eq!(band_of(1439), PricingBand::Evening);
    }

    #[test]
    fn test_band_of_boundary_minutes_take_later_band() {
        // A minute exactly on a boundary belongs to the later band.
        assert_eq!(band_of(540), PricingBand::Day);
        assert_eq!(band_of(1080), PricingBand::Evening);
    }

    #[test]
    fn test_band_of_end_of_day_is_evening() {
        assert_eq!(band_of(MINUTES_PER_DAY), PricingBand::Evening);
    }

    #[test]
    fn test_band_ordering() {
        assert!(PricingBand::Night < PricingBand::Day);
        assert!(PricingBand::Day < PricingBand::Evening);
    }

    #[test]
    fn test_single_band_shift_single_segment() {
        // 10:00-12:00 sits entirely in the day band
        let segments = segment_by_band(600, 720);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].band, PricingBand::Day);
        assert_eq!(segments[0].start_minute, 600);
        assert_eq!(segments[0].end_minute, 720);
        assert_eq!(segments[0].hours, dec("2"));
    }

    #[test]
    fn test_one_boundary_crossing_two_segments() {
        // 01:00-13:00 crosses the night/day boundary
        let segments = segment_by_band(60, 780);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].band, PricingBand::Night);
        assert_eq!(segments[0].hours, dec("8"));
        assert_eq!(segments[1].band, PricingBand::Day);
        assert_eq!(segments[1].hours, dec("4"));
    }

    #[test]
    fn test_two_boundary_crossings_three_segments() {
        // 08:00-20:00 crosses both boundaries
        let segments = segment_by_band(480, 1200);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].band, PricingBand::Night);
        assert_eq!(segments[0].hours, dec("1"));
        assert_eq!(segments[1].band, PricingBand::Day);
        assert_eq!(segments[1].hours, dec("9"));
        assert_eq!(segments[2].band, PricingBand::Evening);
        assert_eq!(segments[2].hours, dec("2"));
    }

    #[test]
    fn test_end_on_boundary_drops_empty_segment() {
        // 01:00-09:00 ends exactly on the night/day boundary; the end
        // minute classifies as Day but the day segment would be empty.
        let segments = segment_by_band(60, 540);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].band, PricingBand::Night);
        assert_eq!(segments[0].hours, dec("8"));
    }

    #[test]
    fn test_start_on_boundary_takes_later_band() {
        // 09:00-18:00 is exactly the day band
        let segments = segment_by_band(540, 1080);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].band, PricingBand::Day);
        assert_eq!(segments[0].hours, dec("9"));
    }

    #[test]
    fn test_evening_to_end_of_day() {
        // 20:00-24:00 sits entirely in the evening band
        let segments = segment_by_band(1200, MINUTES_PER_DAY);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].band, PricingBand::Evening);
        assert_eq!(segments[0].hours, dec("4"));
    }

    #[test]
    fn test_full_day_partition() {
        let segments = segment_by_band(0, MINUTES_PER_DAY);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].hours, dec("9"));
        assert_eq!(segments[1].hours, dec("9"));
        assert_eq!(segments[2].hours, dec("6"));
    }

    #[test]
    fn test_segments_partition_with_no_gap_or_overlap() {
        let segments = segment_by_band(75, 1395);
        assert_eq!(segments[0].start_minute, 75);
        assert_eq!(segments.last().unwrap().end_minute, 1395);
        for pair in segments.windows(2) {
            assert_eq!(pair[0].end_minute, pair[1].start_minute);
        }
    }

    #[test]
    fn test_segment_hours_sum_to_shift_duration() {
        let segments = segment_by_band(490, 1250);
        let total: Decimal = segments.iter().map(|s| s.hours).sum();
        assert_eq!(total, Decimal::from(1250 - 490) / Decimal::from(60));
    }

    #[test]
    fn test_walk_is_monotonic() {
        let segments = segment_by_band(0, MINUTES_PER_DAY);
        for pair in segments.windows(2) {
            assert!(pair[0].band < pair[1].band);
        }
    }

    #[test]
    fn test_band_display() {
        assert_eq!(format!("{}", PricingBand::Night), "Night");
        assert_eq!(format!("{}", PricingBand::Day), "Day");
        assert_eq!(format!("{}", PricingBand::Evening), "Evening");
    }

    #[test]
    fn test_band_serialization() {
        let json = serde_json::to_string(&PricingBand::Evening).unwrap();
        assert_eq!(json, "\"evening\"");

        let deserialized: PricingBand = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, PricingBand::Evening);
    }

    #[test]
    fn test_band_segment_serialization() {
        let segment = BandSegment {
            band: PricingBand::Day,
            start_minute: 600,
            end_minute: 720,
            hours: dec("2"),
        };

        let json = serde_json::to_string(&segment).unwrap();
        assert!(json.contains("\"band\":\"day\""));

        let deserialized: BandSegment = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, segment);
    }
}
