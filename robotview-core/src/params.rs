//! Key-path configuration lookups
//!
//! Keys are dotted paths such as `calibration.vehicle_bounds.front_left`.

use crate::error::{Error, Result};

/// Read-only access to a hierarchical parameter store
pub trait ParamSource {
    fn get_double(&self, key: &str) -> Option<f64>;

    fn get_double_array(&self, key: &str) -> Option<Vec<f64>>;

    fn get_str(&self, key: &str) -> Option<String>;

    fn has_key(&self, key: &str) -> bool;
}

/// Fixed-length double array that must be present
pub fn require_array<const N: usize>(params: &dyn ParamSource, key: &str) -> Result<[f64; N]> {
    let values = params
        .get_double_array(key)
        .ok_or_else(|| Error::MissingParam(key.to_string()))?;
    <[f64; N]>::try_from(values.as_slice()).map_err(|_| {
        Error::invalid_param(key, format!("expected {} values, found {}", N, values.len()))
    })
}

/// Fixed-length double array that may be absent.
///
/// A value of the wrong shape is treated as absent.
pub fn optional_array<const N: usize>(params: &dyn ParamSource, key: &str) -> Option<[f64; N]> {
    if !params.has_key(key) {
        return None;
    }
    match require_array::<N>(params, key) {
        Ok(values) => Some(values),
        Err(err) => {
            tracing::warn!(%err, "ignoring malformed parameter");
            None
        }
    }
}

/// Scalar double that may be absent; a non-numeric value is treated as absent.
pub fn optional_double(params: &dyn ParamSource, key: &str) -> Option<f64> {
    if !params.has_key(key) {
        return None;
    }
    let value = params.get_double(key);
    if value.is_none() {
        tracing::warn!(key, "ignoring non-numeric parameter");
    }
    value
}
