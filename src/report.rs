//! Output message formatting.
//!
//! One output row is produced per input line: either a pay amount message
//! or, for lines failing the grammar, a numbered error message.

use rust_decimal::Decimal;

/// Formats a rounded pay amount for output.
///
/// Canonical format choice: trailing zeros are trimmed but at least one
/// decimal digit is kept, so whole amounts print as `215.0` and halves as
/// `1307.5`, matching the reference output.
///
/// # Example
///
/// ```
/// use shift_pricer::report::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::new(21500, 2)), "215.0");
/// assert_eq!(format_amount(Decimal::new(130750, 2)), "1307.5");
/// ```
pub fn format_amount(amount: Decimal) -> String {
    let normalized = amount.normalize().to_string();
    if normalized.contains('.') {
        normalized
    } else {
        format!("{normalized}.0")
    }
}

/// Formats the pay message for one worker.
pub fn amount_message(name: &str, amount: Decimal) -> String {
    format!(
        "The amount to pay {} is: {} USD",
        name,
        format_amount(amount)
    )
}

/// Formats the error row for a line that failed the schedule grammar.
///
/// `line_number` is 1-based.
pub fn format_error(line_number: usize, text: &str) -> String {
    format!(
        "Data string {} does not comply with the format: {}",
        line_number, text
    )
}
