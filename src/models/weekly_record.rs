//! Weekly record model.

use serde::{Deserialize, Serialize};

use super::Shift;

/// One worker's validated week of shifts, built fresh from one input line.
///
/// A record is constructed by the input parser, consumed synchronously by the
/// week aggregator, and discarded. It is never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyRecord {
    /// The worker's name as it appeared before the `=` separator.
    pub worker_name: String,
    /// The shifts worked during the week, in input order.
    pub shifts: Vec<Shift>,
}

impl WeeklyRecord {
    /// Creates a new weekly record.
    pub fn new(worker_name: impl Into<String>, shifts: Vec<Shift>) -> Self {
        Self {
            worker_name: worker_name.into(),
            shifts,
        }
    }
}
