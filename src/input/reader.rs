//! Line reading and tagging.
//!
//! Reads raw schedule lines, cleans and validates each one, and tags it as
//! valid data or an error-message row. A line failing the grammar becomes
//! data, never an error, so one bad line cannot block the rest of the file.

use std::io::BufRead;

use crate::error::PricerResult;
use crate::report::format_error;

use super::validate::{LineValidator, clean_line};

/// One input line after cleaning and validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputLine {
    /// A cleaned line conforming to the schedule grammar.
    Valid {
        /// The cleaned line text (`NAME=<shift-list>`).
        text: String,
    },
    /// A line that failed the grammar, carrying its formatted error row.
    Invalid {
        /// The error message to emit in place of a computed amount.
        message: String,
    },
}

/// Reads and tags every schedule line from a reader.
///
/// Each line is cleaned with [`clean_line`] and checked against the given
/// validator. Lines are tagged in input order; error messages carry the
/// 1-based line number.
///
/// # Arguments
///
/// * `reader` - The input source
/// * `validator` - The grammar validation strategy
///
/// # Errors
///
/// Returns `PricerError::Io` if reading from the source fails; grammar
/// failures are NOT errors.
///
/// # Example
///
/// ```
/// use shift_pricer::input::{InputLine, PatternValidator, read_week_data};
/// use std::io::Cursor;
///
/// let input = Cursor::new("ASTRID=MO10:00-12:00\nnot a schedule\n");
/// let lines = read_week_data(input, &PatternValidator).unwrap();
/// assert!(matches!(lines[0], InputLine::Valid { .. }));
/// assert!(matches!(lines[1], InputLine::Invalid { .. }));
/// ```
pub fn read_week_data<R: BufRead>(
    reader: R,
    validator: &dyn LineValidator,
) -> PricerResult<Vec<InputLine>> {
    let mut lines = Vec::new();

    for (number, line) in reader.lines().enumerate() {
        let cleaned = clean_line(&line?);
        if validator.is_valid(&cleaned) {
            lines.push(InputLine::Valid { text: cleaned });
        } else {
            lines.push(InputLine::Invalid {
                message: format_error(number + 1, &cleaned),
            });
        }
    }

    Ok(lines)
}
