// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use pslv_ui::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Keep toasts on screen a little longer
//! config.toast_duration_ms = Some(8_000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.toast_duration_ms, Some(8_000));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "PSLVNews";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub toast_duration_ms: Option<u64>,
    #[serde(default)]
    pub error_toast_duration_ms: Option<u64>,
    #[serde(default)]
    pub toast_closable: Option<bool>,
    #[serde(default)]
    pub toast_progress: Option<bool>,
    #[serde(default)]
    pub tick_interval_ms: Option<u64>,
    #[serde(default)]
    pub api_base_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            toast_duration_ms: Some(DEFAULT_TOAST_DURATION_MS),
            error_toast_duration_ms: Some(DEFAULT_ERROR_TOAST_DURATION_MS),
            toast_closable: Some(DEFAULT_TOAST_CLOSABLE),
            toast_progress: Some(DEFAULT_TOAST_PROGRESS),
            tick_interval_ms: Some(DEFAULT_TICK_INTERVAL_MS),
            api_base_url: None,
        }
    }
}

impl Config {
    /// Display time for non-error toasts, clamped to the supported range.
    #[must_use]
    pub fn toast_duration(&self) -> Duration {
        let ms = self
            .toast_duration_ms
            .unwrap_or(DEFAULT_TOAST_DURATION_MS)
            .min(MAX_TOAST_DURATION_MS);
        Duration::from_millis(ms)
    }

    /// Display time for error toasts, clamped to the supported range.
    #[must_use]
    pub fn error_toast_duration(&self) -> Duration {
        let ms = self
            .error_toast_duration_ms
            .unwrap_or(DEFAULT_ERROR_TOAST_DURATION_MS)
            .min(MAX_TOAST_DURATION_MS);
        Duration::from_millis(ms)
    }

    /// Period of the expiry tick, clamped to the supported range.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        let ms = self
            .tick_interval_ms
            .unwrap_or(DEFAULT_TICK_INTERVAL_MS)
            .clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS);
        Duration::from_millis(ms)
    }

    #[must_use]
    pub fn api_base_url(&self) -> &str {
        self.api_base_url
            .as_deref()
            .unwrap_or(DEFAULT_API_BASE_URL)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_else(|err| {
        tracing::warn!(path = %path.display(), %err, "ignoring invalid settings file");
        Config::default()
    }))
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
