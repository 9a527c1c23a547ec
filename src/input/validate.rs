//! Line cleaning and grammar validation.

use once_cell::sync::Lazy;
use regex::Regex;

/// The schedule line grammar: a worker name, `=`, then one or more
/// `<DAYCODE><HH:MM>-<HH:MM>` tokens, comma-separated.
pub const WEEK_DATA_PATTERN: &str =
    r"^[A-Z]+=(?:(?:MO|TU|WE|TH|FR|SA|SU)\d{2}:\d{2}-\d{2}:\d{2},?)+$";

static WEEK_DATA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(WEEK_DATA_PATTERN).expect("week data pattern compiles"));

/// Validation strategy for schedule lines.
///
/// Passed explicitly to the reader so alternative grammars can be swapped
/// in without touching the pipeline.
pub trait LineValidator {
    /// Returns whether a cleaned line conforms to the schedule grammar.
    fn is_valid(&self, line: &str) -> bool;
}

/// The default validator, matching lines against [`WEEK_DATA_PATTERN`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternValidator;

impl LineValidator for PatternValidator {
    fn is_valid(&self, line: &str) -> bool {
        WEEK_DATA_RE.is_match(line)
    }
}

/// Cleans a raw input line: strips surrounding whitespace, removes interior
/// spaces, and uppercases all characters.
///
/// # Example
///
/// ```
/// use shift_pricer::input::clean_line;
///
/// assert_eq!(
///     clean_line("  rosE=MO00:00-22:00, TH01:00-13:00  "),
///     "ROSE=MO00:00-22:00,TH01:00-13:00"
/// );
/// ```
pub fn clean_line(line: &str) -> String {
    line.trim().replace(' ', "").to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> PatternValidator {
        PatternValidator
    }

    #[test]
    fn test_valid_single_shift_line() {
        assert!(validator().is_valid("ASTRID=MO10:00-12:00"));
    }

    #[test]
    fn test_valid_multi_shift_line() {
        assert!(
            validator()
                .is_valid("RENE=MO10:00-12:00,TU10:00-12:00,TH01:00-03:00,SA14:00-18:00,SU20:00-21:00")
        );
    }

    #[test]
    fn test_valid_line_with_midnight_end() {
        assert!(validator().is_valid("JHON=MO00:00-09:00,TH09:00-18:00,SU18:00-00:00"));
    }

    #[test]
    fn test_invalid_time_token_rejected() {
        // 14:F0 is not a valid time
        assert!(!validator().is_valid("ROSE=MO00:00-22:00,TH01:00-13:00,SA14:F0-18:00,SU02:00-23:30"));
    }

    #[test]
    fn test_unknown_day_code_rejected() {
        assert!(!validator().is_valid("ROSE=XX10:00-12:00"));
    }

    #[test]
    fn test_missing_name_rejected() {
        assert!(!validator().is_valid("=MO10:00-12:00"));
    }

    #[test]
    fn test_lowercase_name_rejected() {
        assert!(!validator().is_valid("rose=MO10:00-12:00"));
    }

    #[test]
    fn test_single_digit_hour_rejected() {
        assert!(!validator().is_valid("ROSE=MO9:00-12:00"));
    }

    #[test]
    fn test_empty_line_rejected() {
        assert!(!validator().is_valid(""));
    }

    #[test]
    fn test_clean_line_strips_and_uppercases() {
        assert_eq!(clean_line("ReNE=MO10:00-12:00  \n"), "RENE=MO10:00-12:00");
        assert_eq!(
            clean_line("ASTRID=MO10:00-12:00,  TH12:00-14:00"),
            "ASTRID=MO10:00-12:00,TH12:00-14:00"
        );
        assert_eq!(
            clean_line("  rosE=MO00:00-22:00,TH01:00-13:00"),
            "ROSE=MO00:00-22:00,TH01:00-13:00"
        );
    }

    #[test]
    fn test_cleaned_messy_line_validates() {
        let cleaned = clean_line("  rene = MO10:00-12:00, SA14:00-18:00 ");
        assert!(validator().is_valid(&cleaned));
    }
}
