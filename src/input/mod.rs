//! Input handling for the shift pricing engine.
//!
//! This module contains the line cleaning/validation collaborators and the
//! tokenizer that turns validated schedule strings into domain models. The
//! grammar can be unit-tested independently of the pricing arithmetic.

mod parser;
mod reader;
mod validate;

pub use parser::{parse_record, parse_shift, parse_shift_list};
pub use reader::{InputLine, read_week_data};
pub use validate::{LineValidator, PatternValidator, WEEK_DATA_PATTERN, clean_line};
