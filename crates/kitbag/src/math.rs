//! Min/max convenience wrappers over value lists.

use crate::error::{KitbagError, KitbagResult};

/// Maximum of the provided values.
///
/// Errors if `values` is empty.
pub fn max_of(values: &[f64]) -> KitbagResult<f64> {
    extremum(values, f64::max)
}

/// Minimum of the provided values.
///
/// Errors if `values` is empty.
pub fn min_of(values: &[f64]) -> KitbagResult<f64> {
    extremum(values, f64::min)
}

fn extremum(values: &[f64], pick: fn(f64, f64) -> f64) -> KitbagResult<f64> {
    values
        .iter()
        .copied()
        .reduce(pick)
        .ok_or_else(|| KitbagError::InvalidArgument("no items provided".to_string()))
}
