// SPDX-License-Identifier: MPL-2.0
//! This module handles the lightbox configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use media_lightbox::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.upscale_small_images = Some(false);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "MediaLightbox";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Inset subtracted from each viewport axis before sizing media.
    #[serde(default)]
    pub viewport_inset: Option<u32>,
    /// Whether small images may be rendered at double size.
    #[serde(default)]
    pub upscale_small_images: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viewport_inset: Some(defaults::DEFAULT_VIEWPORT_INSET),
            upscale_small_images: Some(true),
        }
    }
}

impl Config {
    /// Returns the configured viewport inset, falling back to the default.
    #[must_use]
    pub fn viewport_inset(&self) -> u32 {
        self.viewport_inset
            .unwrap_or(defaults::DEFAULT_VIEWPORT_INSET)
    }

    /// Returns whether the small-image upscale branch is enabled.
    #[must_use]
    pub fn upscale_small_images(&self) -> bool {
        self.upscale_small_images.unwrap_or(true)
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
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
