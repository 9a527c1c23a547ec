//! The payroll pipeline.
//!
//! Ties the input, calculation, and report layers together: raw lines in,
//! one formatted result row per line out, in input order. Invalid lines
//! flow through as error-message rows and never interrupt the batch.

use std::io::BufRead;

use tracing::debug;

use crate::calculation::week_pay;
use crate::config::RateTable;
use crate::error::PricerResult;
use crate::input::{InputLine, LineValidator, parse_record, read_week_data};
use crate::report::amount_message;

/// Computes the pay message for one validated record line.
///
/// # Arguments
///
/// * `line` - A cleaned line conforming to the schedule grammar
/// * `rates` - The rate table to bill against
///
/// # Example
///
/// ```
/// use shift_pricer::config::RateTable;
/// use shift_pricer::payroll::worker_pay;
///
/// let message = worker_pay(
///     "ASTRID=MO10:00-12:00,TH12:00-14:00,SU20:00-21:00",
///     &RateTable::default(),
/// ).unwrap();
/// assert_eq!(message, "The amount to pay ASTRID is: 85.0 USD");
/// ```
pub fn worker_pay(line: &str, rates: &RateTable) -> PricerResult<String> {
    let record = parse_record(line)?;
    let amount = week_pay(&record.shifts, rates);
    debug!(worker = %record.worker_name, shifts = record.shifts.len(), %amount, "computed week pay");
    Ok(amount_message(&record.worker_name, amount))
}

/// Runs the full pipeline over a schedule file.
///
/// Every input line produces exactly one output row, in input order:
/// a pay message for lines passing the grammar, the numbered error row
/// for lines failing it.
///
/// # Errors
///
/// Returns an error only for process-level problems: I/O failure while
/// reading, or a validated line the parser cannot consume (a programming
/// error in the grammar, surfaced loudly rather than mispriced).
///
/// # Example
///
/// ```
/// use shift_pricer::config::RateTable;
/// use shift_pricer::input::PatternValidator;
/// use shift_pricer::payroll::pay_lines;
/// use std::io::Cursor;
///
/// let input = Cursor::new("ASTRID=MO10:00-12:00,TH12:00-14:00,SU20:00-21:00\n");
/// let rows = pay_lines(input, &PatternValidator, &RateTable::default()).unwrap();
/// assert_eq!(rows, vec!["The amount to pay ASTRID is: 85.0 USD".to_string()]);
/// ```
pub fn pay_lines<R: BufRead>(
    reader: R,
    validator: &dyn LineValidator,
    rates: &RateTable,
) -> PricerResult<Vec<String>> {
    let mut rows = Vec::new();

    for line in read_week_data(reader, validator)? {
        match line {
            InputLine::Valid { text } => rows.push(worker_pay(&text, rates)?),
            InputLine::Invalid { message } => rows.push(message),
        }
    }

    Ok(rows)
}
