//! Picker preset configuration.

use serde::{Deserialize, Serialize};
use tint_params::{BOOTSTRAP_PALETTE, COMPLEMENT_DEGREES};

/// `[presets]`: swatches and the complement rotation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PresetsConfig {
    pub palette: Vec<String>,
    /// Hue rotation in degrees (0-359) for autofill and the complement preset.
    pub complement_degrees: f64,
}

impl Default for PresetsConfig {
    fn default() -> Self {
        Self {
            palette: BOOTSTRAP_PALETTE.iter().map(|c| c.to_string()).collect(),
            complement_degrees: COMPLEMENT_DEGREES,
        }
    }
}
