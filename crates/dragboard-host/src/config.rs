#![forbid(unsafe_code)]

//! Host configuration: layout metrics and gesture thresholds.
//!
//! # Loading
//!
//! ```toml
//! # dragboard.toml
//! drag_threshold = 2
//! column_width = 32
//! card_height = 4
//! ```
//!
//! ```rust,ignore
//! let config = HostConfig::from_toml_file("dragboard.toml")?.validated()?;
//! ```
//!
//! Missing fields take their defaults, which match the terminal kanban
//! layout: 28-cell columns, 3-row cards, a 3-cell drag threshold.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Layout and gesture parameters for a [`BoardView`](crate::BoardView).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Manhattan distance in cells a press must travel before it becomes a
    /// drag. Shorter gestures are clicks.
    pub drag_threshold: u16,
    pub column_width: u16,
    /// Blank cells between adjacent columns.
    pub column_gap: u16,
    /// Rows reserved for the column title.
    pub header_height: u16,
    pub card_height: u16,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            drag_threshold: 3,
            column_width: 28,
            column_gap: 1,
            header_height: 1,
            card_height: 3,
        }
    }
}

impl HostConfig {
    #[must_use]
    pub fn with_drag_threshold(mut self, cells: u16) -> Self {
        self.drag_threshold = cells;
        self
    }

    #[must_use]
    pub fn with_column_width(mut self, cells: u16) -> Self {
        self.column_width = cells;
        self
    }

    #[must_use]
    pub fn with_column_gap(mut self, cells: u16) -> Self {
        self.column_gap = cells;
        self
    }

    #[must_use]
    pub fn with_header_height(mut self, rows: u16) -> Self {
        self.header_height = rows;
        self
    }

    #[must_use]
    pub fn with_card_height(mut self, rows: u16) -> Self {
        self.card_height = rows;
        self
    }

    /// Load from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(ConfigError::Toml)
    }

    /// Load from a TOML file on disk.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(ConfigError::Json)
    }

    /// Load from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Check all parameters. An empty list means the config is usable.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.column_width == 0 {
            errors.push("column_width must be > 0".to_owned());
        }
        if self.card_height == 0 {
            errors.push("card_height must be > 0".to_owned());
        }
        if self.drag_threshold > self.column_stride() {
            errors.push(format!(
                "drag_threshold ({}) must not exceed one column stride ({})",
                self.drag_threshold,
                self.column_stride()
            ));
        }
        errors
    }

    /// Return `self` if it validates cleanly.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Horizontal distance from one column's left edge to the next.
    #[must_use]
    pub fn column_stride(&self) -> u16 {
        self.column_width.saturating_add(self.column_gap)
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur when loading a host configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Json(serde_json::Error),
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Toml(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}
