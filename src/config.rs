// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Dashboard configuration.
//!
//! Layout constants and behaviour knobs, loaded from a YAML or JSON file.
//! Every field has a default so partial files are valid.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "SHOWREEL_CONFIG";

/// Configuration file looked up in the working directory when the
/// environment variable is unset.
pub const DEFAULT_CONFIG_FILE: &str = "showreel.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Width of one carousel card in logical pixels
    pub card_width: f32,
    /// Gap between adjacent cards
    pub card_spacing: f32,
    /// Scroll distance per pixel of pointer drag
    pub drag_speed: f32,
    /// Time the skeleton placeholder is shown after start-up
    pub loading_delay_ms: u64,
    /// Extra fade-in delay per card position
    pub card_fade_step_secs: f32,
    /// Duration of one card's fade-in
    pub card_fade_secs: f32,
    pub window_width: f32,
    pub window_height: f32,
    /// Catalog file; the built-in catalog is used when absent
    pub catalog: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            card_width: 290.0,
            card_spacing: 16.0,
            drag_speed: 2.0,
            loading_delay_ms: 300,
            card_fade_step_secs: 0.1,
            card_fade_secs: 0.5,
            window_width: 1280.0,
            window_height: 720.0,
            catalog: None,
        }
    }
}

impl DashboardConfig {
    /// Load from `SHOWREEL_CONFIG`, then `showreel.yaml`, then defaults.
    pub fn load() -> Result<Self> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Self::from_file(Path::new(&path));
        }

        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.exists() {
            return Self::from_file(fallback);
        }

        log::info!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    /// Parse a configuration file, dispatching on its extension.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;

        let extension = path.extension().and_then(|s| s.to_str());
        let mut config: Self = match extension {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&text)
                .with_context(|| format!("Invalid YAML in {}", path.display()))?,
            Some("json") => serde_json::from_str(&text)
                .with_context(|| format!("Invalid JSON in {}", path.display()))?,
            _ => bail!("Unsupported config extension: {:?}", extension),
        };

        // Catalog paths are relative to the config file.
        if let (Some(catalog), Some(dir)) = (config.catalog.as_ref(), path.parent()) {
            if catalog.is_relative() {
                config.catalog = Some(dir.join(catalog));
            }
        }

        config.validate()?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.card_width.is_finite() && self.card_width > 0.0) {
            bail!("card_width must be positive, got {}", self.card_width);
        }
        if !(self.card_spacing.is_finite() && self.card_spacing >= 0.0) {
            bail!("card_spacing must not be negative, got {}", self.card_spacing);
        }
        if !(self.drag_speed.is_finite() && self.drag_speed > 0.0) {
            bail!("drag_speed must be positive, got {}", self.drag_speed);
        }
        Ok(())
    }

    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }
}
