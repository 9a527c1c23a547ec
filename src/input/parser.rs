//! Schedule tokenizer.
//!
//! Turns validated schedule strings into [`WeeklyRecord`] and [`Shift`]
//! value objects. The tokenizer is stricter than the line grammar in one
//! respect: it rejects backward intervals (`end <= start` where the end is
//! not 00:00), which the regex cannot express, so the pricer never sees a
//! non-forward shift.

use chrono::NaiveTime;

use crate::error::{PricerError, PricerResult};
use crate::models::{DayCode, Shift, WeeklyRecord};

/// Parses one full record line of the form `NAME=<shift-list>`.
///
/// # Errors
///
/// Returns `InvalidRecord` if the `=` separator or the worker name is
/// missing, or any error produced by [`parse_shift_list`].
///
/// # Example
///
/// ```
/// use shift_pricer::input::parse_record;
///
/// let record = parse_record("ASTRID=MO10:00-12:00,TH12:00-14:00").unwrap();
/// assert_eq!(record.worker_name, "ASTRID");
/// assert_eq!(record.shifts.len(), 2);
/// ```
pub fn parse_record(line: &str) -> PricerResult<WeeklyRecord> {
    let (name, shift_list) = line.split_once('=').ok_or_else(|| PricerError::InvalidRecord {
        message: "missing '=' separator".to_string(),
    })?;
    if name.is_empty() {
        return Err(PricerError::InvalidRecord {
            message: "empty worker name".to_string(),
        });
    }

    Ok(WeeklyRecord::new(name, parse_shift_list(shift_list)?))
}

/// Parses a comma-separated shift list into [`Shift`] values, in order.
///
/// A trailing comma (allowed by the line grammar) is tolerated.
pub fn parse_shift_list(list: &str) -> PricerResult<Vec<Shift>> {
    list.split(',')
        .filter(|token| !token.is_empty())
        .map(parse_shift)
        .collect()
}

/// Parses one `<DAYCODE><HH:MM>-<HH:MM>` token.
///
/// The day code is the fixed-length two-character prefix; the remainder
/// splits on `-` into the start and end times. An end of 00:00 means
/// end-of-day; any other `end <= start` is rejected.
pub fn parse_shift(token: &str) -> PricerResult<Shift> {
    if token.len() < 2 || !token.is_char_boundary(2) {
        return Err(PricerError::InvalidShift {
            token: token.to_string(),
            message: "missing day code prefix".to_string(),
        });
    }
    let (code, times) = token.split_at(2);
    let day: DayCode = code.parse()?;

    let (start_str, end_str) = times.split_once('-').ok_or_else(|| PricerError::InvalidShift {
        token: token.to_string(),
        message: "missing '-' between start and end times".to_string(),
    })?;
    let shift = Shift {
        day,
        start: parse_time(start_str)?,
        end: parse_time(end_str)?,
    };

    if shift.end_minute() <= shift.start_minute() {
        return Err(PricerError::InvalidShift {
            token: token.to_string(),
            message: "end time not after start time".to_string(),
        });
    }

    Ok(shift)
}

fn parse_time(value: &str) -> PricerResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| PricerError::InvalidTime {
        value: value.to_string(),
    })
}
