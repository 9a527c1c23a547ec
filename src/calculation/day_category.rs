//! Day category detection logic.
//!
//! This module provides the weekday/weekend classification that selects
//! which rate row applies to a shift.

use serde::{Deserialize, Serialize};

use crate::models::DayCode;

/// Represents the category of a day for rate selection.
///
/// Weekend hours are billed at higher rates than weekday hours in every
/// time-of-day band.
///
/// # Example
///
/// ```
/// use shift_pricer::calculation::DayCategory;
///
/// let category = DayCategory::Weekend;
/// assert_eq!(format!("{:?}", category), "Weekend");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayCategory {
    /// Monday through Friday.
    Weekday,
    /// Saturday and Sunday.
    Weekend,
}

impl std::fmt::Display for DayCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayCategory::Weekday => write!(f, "Weekday"),
            DayCategory::Weekend => write!(f, "Weekend"),
        }
    }
}

/// Determines the day category for a given day code.
///
/// # Arguments
///
/// * `day` - The day code to classify
///
/// # Returns
///
/// [`DayCategory::Weekday`] for Monday through Friday,
/// [`DayCategory::Weekend`] for Saturday and Sunday.
///
/// # Example
///
/// ```
/// use shift_pricer::calculation::{DayCategory, get_day_category};
/// use shift_pricer::models::DayCode;
///
/// assert_eq!(get_day_category(DayCode::Mo), DayCategory::Weekday);
/// assert_eq!(get_day_category(DayCode::Sa), DayCategory::Weekend);
/// ```
pub fn get_day_category(day: DayCode) -> DayCategory {
    match day {
        DayCode::Sa | DayCode::Su => DayCategory::Weekend,
        _ => DayCategory::Weekday,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monday_is_weekday() {
        assert_eq!(get_day_category(DayCode::Mo), DayCategory::Weekday);
    }

    #[test]
    fn test_tuesday_is_weekday() {
        assert_eq!(get_day_category(DayCode::Tu), DayCategory::Weekday);
    }

    #[test]
    fn test_wednesday_is_weekday() {
        assert_eq!(get_day_category(DayCode::We), DayCategory::Weekday);
    }

    #[test]
    fn test_thursday_is_weekday() {
        assert_eq!(get_day_category(DayCode::Th), DayCategory::Weekday);
    }

    #[test]
    fn test_friday_is_weekday() {
        assert_eq!(get_day_category(DayCode::Fr), DayCategory::Weekday);
    }

    #[test]
    fn test_saturday_is_weekend() {
        assert_eq!(get_day_category(DayCode::Sa), DayCategory::Weekend);
    }

    #[test]
    fn test_sunday_is_weekend() {
        assert_eq!(get_day_category(DayCode::Su), DayCategory::Weekend);
    }

    #[test]
    fn test_day_category_display() {
        assert_eq!(format!("{}", DayCategory::Weekday), "Weekday");
        assert_eq!(format!("{}", DayCategory::Weekend), "Weekend");
    }

    #[test]
    fn test_day_category_serialization() {
        let weekend = DayCategory::Weekend;
        let json = serde_json::to_string(&weekend).unwrap();
        assert_eq!(json, "\"weekend\"");

        let deserialized: DayCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, DayCategory::Weekend);
    }
}
