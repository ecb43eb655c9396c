//! Run settings
//!
//! Loaded from an optional JSON file; every field falls back to its default.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Settings for one run of the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed; None derives one from the clock
    pub seed: Option<u64>,

    // === Frame loop ===
    /// Upper bound on the wall-clock delta handed to the simulation (seconds)
    pub max_frame_dt: f32,
    /// Seconds between status lines
    pub status_interval: f64,

    // === Layers ===
    pub show_grid: bool,
    pub show_aim_line: bool,
    pub show_hud: bool,

    /// Game balance
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,

            max_frame_dt: 0.1,
            status_interval: 0.4,

            show_grid: true,
            show_aim_line: true,
            show_hud: true,

            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json).context("invalid settings JSON")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        let depth_clamp = self.tuning.depth_clamp;
        if !(0.0..=1.0).contains(&depth_clamp) {
            bail!("tuning.depth_clamp must be within [0, 1], got {depth_clamp}");
        }
        Ok(())
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        let settings = Self::from_json(&json)
            .with_context(|| format!("parsing settings from {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// The configured seed, or one derived from the system clock
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }
}
