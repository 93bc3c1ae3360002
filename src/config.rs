//! Builder configuration, bundled from `assets/builder.json`.
//!
//! Platform selection is a Cargo feature (`web`, `desktop`, `mobile`); this
//! file only covers runtime knobs. Missing keys fall back to defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::visual_editor::component::Component;
use crate::visual_editor::tree::{PageTree, TreeError};

const BUNDLED: &str = include_str!("../assets/builder.json");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown log level {0:?}")]
    InvalidLogLevel(String),
    #[error("invalid starter page: {0}")]
    StarterPage(#[from] TreeError),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    pub log_level: String,
    pub canvas_label: String,
    pub empty_canvas_message: String,
    pub empty_container_message: String,
    pub starter_page: Vec<Component>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            canvas_label: "Page".to_owned(),
            empty_canvas_message: "Drag components here to start building".to_owned(),
            empty_container_message: "Drop components here".to_owned(),
            starter_page: Vec::new(),
        }
    }
}

impl BuilderConfig {
    /// # Errors
    ///
    /// Returns `Parse` if `raw` is not a valid configuration document.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The configuration compiled into the binary.
    ///
    /// # Errors
    ///
    /// See [`BuilderConfig::from_json`].
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_json(BUNDLED)
    }

    /// # Errors
    ///
    /// Returns `InvalidLogLevel` for anything `tracing` does not recognise.
    pub fn level(&self) -> Result<Level, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    /// # Errors
    ///
    /// Returns `StarterPage` if the starter records reuse an id.
    pub fn starter_tree(&self) -> Result<PageTree, ConfigError> {
        Ok(PageTree::from_roots(self.starter_page.clone())?)
    }
}
