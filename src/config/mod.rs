//! Rate configuration for the shift pricing engine.
//!
//! The built-in [`RateTable::default`] carries the fixed reference rates;
//! an alternative table can be loaded from a YAML file.

mod loader;
mod types;

pub use loader::load_rate_table;
pub use types::{BandRates, RateTable};
