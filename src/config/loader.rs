//! Rate table loading functionality.
//!
//! This module loads a [`RateTable`] from a YAML file, for deployments
//! where the reference rates need to be overridden.

use std::fs;
use std::path::Path;

use crate::error::{PricerError, PricerResult};

use super::types::RateTable;

/// Loads a rate table from a YAML file.
///
/// # Arguments
///
/// * `path` - Path to the rates file (e.g., "./config/rates.yaml")
///
/// # Returns
///
/// Returns the parsed [`RateTable`] on success, or an error if:
/// - The file is missing (`ConfigNotFound`)
/// - The file contains invalid YAML or is missing a rate (`ConfigParseError`)
///
/// # Example
///
/// ```no_run
/// use shift_pricer::config::load_rate_table;
///
/// let rates = load_rate_table("./config/rates.yaml")?;
/// # Ok::<(), shift_pricer::error::PricerError>(())
/// ```
pub fn load_rate_table<P: AsRef<Path>>(path: P) -> PricerResult<RateTable> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| PricerError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    serde_yaml::from_str(&content).map_err(|e| PricerError::ConfigParseError {
        path: path_str,
        message: e.to_string(),
    })
}
