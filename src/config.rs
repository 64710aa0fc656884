//! Startup configuration, read once from an optional JSON file.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Tunables for the simulation, the loop and the window.
/// Missing fields fall back to their defaults.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub grid_size: usize,
    pub interval_ms: f64,
    pub slider_min_ms: f64,
    pub slider_max_ms: f64,
    pub line_thickness: f32,
    pub transition_ms: f64,
    pub random_density: f64,
    /// Fixed seed for the Random button; the binary picks one from the clock when absent
    pub random_seed: Option<u64>,
    /// Cell count from which generations are computed with rayon
    pub parallel_threshold: usize,
    pub window_width: i32,
    pub window_height: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_size: 15,
            interval_ms: 110.0,
            slider_min_ms: 20.0,
            slider_max_ms: 200.0,
            line_thickness: 2.0,
            transition_ms: 200.0,
            random_density: 0.3,
            random_seed: None,
            parallel_threshold: 40_000,
            window_width: 900,
            window_height: 720,
        }
    }
}

impl Config {
    /// Parse and validate a JSON document
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(Error::InvalidConfig("grid_size must be at least 1"));
        }
        if !(self.interval_ms.is_finite() && self.interval_ms > 0.0) {
            return Err(Error::InvalidConfig("interval_ms must be positive"));
        }
        if !(self.slider_min_ms < self.slider_max_ms) {
            return Err(Error::InvalidConfig("slider_min_ms must be below slider_max_ms"));
        }
        if !(self.transition_ms > 0.0) {
            return Err(Error::InvalidConfig("transition_ms must be positive"));
        }
        if !(0.0..=1.0).contains(&self.random_density) {
            return Err(Error::InvalidConfig("random_density must be within 0..=1"));
        }
        if self.line_thickness < 0.0 {
            return Err(Error::InvalidConfig("line_thickness must not be negative"));
        }
        Ok(())
    }
}
