// SPDX-License-Identifier: MPL-2.0
//! Layout-description configuration for the card widget.
//!
//! A [`CardConfig`] is the plain, serializable counterpart of the design-time
//! property panel: the four card properties with their defaults, loadable from
//! and savable to a `card.toml` file. Hosts that build their UI from a layout
//! description deserialize one of these and hand it to
//! [`FlipCard::from_config`](crate::FlipCard::from_config).
//!
//! # Examples
//!
//! ```no_run
//! use flip_card::config::{self, CardConfig};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.flip_duration_secs = 0.3;
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "card.toml";
const APP_NAME: &str = "FlipCard";

/// Flip duration applied when none is configured, in seconds.
pub const DEFAULT_FLIP_DURATION_SECS: f32 = 0.5;

/// Serializable card description with the four design-time properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardConfig {
    /// Duration of the flip animation in seconds. Must be positive;
    /// non-positive values are normalized to the default at use.
    #[serde(default = "default_flip_duration")]
    pub flip_duration_secs: f32,
    /// Whether the card starts face-up. Defaults to false (resting on back).
    #[serde(default)]
    pub is_showing_front: bool,
    /// Path of the image shown when face-up.
    #[serde(default)]
    pub front: Option<PathBuf>,
    /// Path of the image shown when face-down.
    #[serde(default)]
    pub back: Option<PathBuf>,
}

fn default_flip_duration() -> f32 {
    DEFAULT_FLIP_DURATION_SECS
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            flip_duration_secs: DEFAULT_FLIP_DURATION_SECS,
            is_showing_front: false,
            front: None,
            back: None,
        }
    }
}

impl CardConfig {
    /// Returns the configured flip duration, falling back to
    /// [`DEFAULT_FLIP_DURATION_SECS`] for non-positive or non-finite values.
    #[must_use]
    pub fn normalized_flip_duration_secs(&self) -> f32 {
        if self.flip_duration_secs.is_finite() && self.flip_duration_secs > 0.0 {
            self.flip_duration_secs
        } else {
            DEFAULT_FLIP_DURATION_SECS
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<CardConfig> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(CardConfig::default())
}

pub fn save(config: &CardConfig) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<CardConfig> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &CardConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
