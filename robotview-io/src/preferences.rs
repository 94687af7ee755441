//! Viewer preference file
//!
//! Renderers persist their UI controls under a section named after the
//! renderer, one boolean entry per control:
//!
//! ```toml
//! [Robot]
//! Bling = true
//! Shadow = false
//! ```

use crate::error::IoError;
use robotview_core::Result;
use std::path::Path;
use toml::{Table, Value};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyFile {
    sections: Table,
}

impl KeyFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let sections = text.parse::<Table>().map_err(|e| IoError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { sections })
    }

    /// Load a preference file; a missing file yields empty preferences.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml_str(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no preference file, using defaults");
                Ok(Self::new())
            }
            Err(e) => Err(IoError::Io(e).into()),
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path.as_ref(), self.to_toml_string()?)?;
        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(&self.sections).map_err(|e| {
            IoError::WriteError {
                message: e.to_string(),
            }
            .into()
        })
    }

    pub fn get_bool(&self, section: &str, name: &str) -> Option<bool> {
        self.sections.get(section)?.as_table()?.get(name)?.as_bool()
    }

    pub fn set_bool(&mut self, section: &str, name: &str, value: bool) {
        let entry = self
            .sections
            .entry(section.to_string())
            .or_insert(Value::Table(Table::new()));
        if !entry.is_table() {
            *entry = Value::Table(Table::new());
        }
        if let Value::Table(table) = entry {
            table.insert(name.to_string(), Value::Boolean(value));
        }
    }
}
