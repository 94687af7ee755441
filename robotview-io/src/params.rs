//! TOML-backed parameter store
//!
//! Dotted key paths address nested tables, so
//! `calibration.vehicle_bounds.front_left` resolves to
//!
//! ```toml
//! [calibration.vehicle_bounds]
//! front_left = [1.0, 0.5]
//! ```

use crate::error::IoError;
use robotview_core::{ParamSource, Result};
use std::path::Path;
use toml::{Table, Value};

#[derive(Debug, Clone, Default)]
pub struct TomlParams {
    root: Table,
}

impl TomlParams {
    pub fn from_table(root: Table) -> Self {
        Self { root }
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let root = text.parse::<Table>().map_err(|e| IoError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { root })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => IoError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => IoError::Io(e),
        })?;
        let root = text.parse::<Table>().map_err(|e| IoError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), "loaded parameters");
        Ok(Self { root })
    }

    fn lookup(&self, key: &str) -> Option<&Value> {
        let mut parts = key.split('.');
        let mut value = self.root.get(parts.next()?)?;
        for part in parts {
            value = value.as_table()?.get(part)?;
        }
        Some(value)
    }
}

fn as_double(value: &Value) -> Option<f64> {
    match value {
        Value::Float(f) => Some(*f),
        Value::Integer(i) => Some(*i as f64),
        _ => None,
    }
}

impl ParamSource for TomlParams {
    fn get_double(&self, key: &str) -> Option<f64> {
        as_double(self.lookup(key)?)
    }

    fn get_double_array(&self, key: &str) -> Option<Vec<f64>> {
        self.lookup(key)?.as_array()?.iter().map(as_double).collect()
    }

    fn get_str(&self, key: &str) -> Option<String> {
        self.lookup(key)?.as_str().map(str::to_string)
    }

    fn has_key(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }
}
