//! Share link configuration.

use serde::{Deserialize, Serialize};

/// `[share]`: where shared links point.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShareConfig {
    /// Origin and path; the encoded query is appended.
    pub base_url: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: "https://example.com/theme-color/".into(),
        }
    }
}
