//! Configuration handling for the form engine

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::validate::ValidationPolicy;

/// User configuration for the sign-up form engine
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Require the age field to parse as a number
    pub numeric_age: Option<bool>,
    /// Require the MBTI field to be one of the 16 canonical codes
    pub known_mbti: Option<bool>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "signup", "signup-form")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: FormConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Convert the persisted toggles into a validation policy.
    /// Unset toggles keep the lenient default behavior.
    pub fn policy(&self) -> ValidationPolicy {
        ValidationPolicy {
            numeric_age: self.numeric_age.unwrap_or(false),
            known_mbti: self.known_mbti.unwrap_or(false),
        }
    }
}
