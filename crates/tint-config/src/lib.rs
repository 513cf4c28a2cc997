//! tint configuration.
//!
//! TOML-based configuration for slot defaults, share links, presets and
//! logging. All sections have defaults so partial configs work out of the
//! box.
//!
//! ```rust,no_run
//! use tint_config::{config_to_json, load_config};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;

pub use schema::{TintConfig, CONFIG_SCHEMA_VERSION};
pub use toml_writer::{config_to_toml, save_config_to_path};

use std::path::Path;
use tint_common::ConfigError;

/// Load and validate config from the platform default path, creating a
/// commented default file if none exists.
pub fn load_config() -> Result<TintConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<TintConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &TintConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&TintConfig::default());
        assert!(json.contains("\"slots\""));
        assert!(json.contains("\"share\""));
        assert!(json.contains("\"presets\""));
        assert!(json.contains("\"logging\""));
        assert!(json.contains("\"#363636\""));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let json = config_to_json(&TintConfig::default());
        let parsed: TintConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, TintConfig::default());
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[presets]\ncomplement_degrees = 400.0\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }
}
