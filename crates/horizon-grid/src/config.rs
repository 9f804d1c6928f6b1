//! Grid configuration.
//!
//! [`GridConfig`] collects the tunables of an [`EditableGrid`]. It can be
//! built in code or loaded from a TOML document:
//!
//! ```toml
//! load_rows_count = 50
//! auto_select_first_row = true
//! initial_load_deferred = true
//!
//! [navigation_modifiers]
//! control = true
//! ```
//!
//! Missing keys fall back to their defaults.
//!
//! [`EditableGrid`]: crate::grid::EditableGrid

use std::path::Path;

use horizon_grid_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::widget::KeyboardModifiers;

/// Default number of rows materialized per batch.
pub const DEFAULT_LOAD_ROWS_COUNT: usize = 20;

/// Tunables for an editable grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Number of additional rows materialized per lazy-load batch.
    pub load_rows_count: usize,
    /// Select the first loaded record when nothing is selected.
    pub auto_select_first_row: bool,
    /// Defer the first batch load to the first tick instead of loading
    /// as soon as records arrive.
    pub initial_load_deferred: bool,
    /// Modifiers that, combined with Up/Down, move between rows.
    pub navigation_modifiers: KeyboardModifiers,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            load_rows_count: DEFAULT_LOAD_ROWS_COUNT,
            auto_select_first_row: true,
            initial_load_deferred: true,
            navigation_modifiers: KeyboardModifiers::CTRL,
        }
    }
}

impl GridConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), ?config, "loaded grid config");
        Ok(config)
    }

    /// Serialize the configuration as TOML.
    pub fn to_toml_string(&self) -> String {
        // Every field is a plain scalar or table, so serialization cannot fail.
        toml::to_string(self).unwrap_or_default()
    }

    /// Builder-style batch size.
    pub fn with_load_rows_count(mut self, count: usize) -> Self {
        self.load_rows_count = count;
        self
    }

    /// Builder-style navigation modifiers.
    pub fn with_navigation_modifiers(mut self, modifiers: KeyboardModifiers) -> Self {
        self.navigation_modifiers = modifiers;
        self
    }

    /// Builder-style deferral of the first batch load.
    pub fn with_initial_load_deferred(mut self, deferred: bool) -> Self {
        self.initial_load_deferred = deferred;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.load_rows_count == 0 {
            return Err(ConfigError::InvalidValue {
                field: "load_rows_count",
                message: "must be at least 1".to_owned(),
            });
        }
        if self.navigation_modifiers.none() {
            return Err(ConfigError::InvalidValue {
                field: "navigation_modifiers",
                message: "at least one modifier is required".to_owned(),
            });
        }
        Ok(())
    }
}
