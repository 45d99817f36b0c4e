// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Guard configuration loaded from an optional JSON file.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::logic::validator::REQUIRED_MESSAGE;
use crate::models::profile::ProfileField;

/// File looked up in the working directory on startup.
pub const CONFIG_FILE_NAME: &str = "profile-form.json";

/// How a blocked submission is reported to the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertMode {
    /// Native blocking message dialog.
    Native,
    /// Modal window drawn inside the app.
    #[default]
    Modal,
}

/// Settings for the submission guard.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GuardConfig {
    /// Input ids that must be non-empty before the form may submit.
    pub required_fields: Vec<String>,
    /// Alert text shown when a required field is blank.
    pub message: String,
    pub alert_mode: AlertMode,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            required_fields: ProfileField::ALL
                .iter()
                .map(|field| field.id().to_string())
                .collect(),
            message: REQUIRED_MESSAGE.to_string(),
            alert_mode: AlertMode::default(),
        }
    }
}

impl GuardConfig {
    /// Parse a configuration from JSON text. Missing keys keep their defaults.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Invalid guard configuration")
    }

    /// Read and parse the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("In {}", path.display()))
    }

    /// Like [`GuardConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
