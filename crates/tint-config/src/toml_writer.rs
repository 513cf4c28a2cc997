//! Render TintConfig as TOML and write it to disk.

use std::path::Path;

use tint_common::ConfigError;
use tracing::{debug, warn};

use crate::schema::TintConfig;
use crate::validation;

const HEADER: &str = "# tint configuration, written by `tint config --write`\n\n";

/// The config as a TOML document, every field spelled out.
pub fn config_to_toml(config: &TintConfig) -> Result<String, ConfigError> {
    toml::to_string_pretty(config)
        .map_err(|e| ConfigError::WriteError(format!("cannot render config as TOML: {e}")))
}

/// Validate `config` and write it to `path`, replacing whatever is there.
///
/// Parent directories are created as needed.
pub fn save_config_to_path(config: &TintConfig, path: &Path) -> Result<(), ConfigError> {
    validation::validate(config)?;
    let contents = format!("{HEADER}{}", config_to_toml(config)?);
    write_atomic(path, &contents)?;
    debug!(path = %path.display(), "config written");
    Ok(())
}

/// Write through a sibling `.tmp` file so readers never see half a config.
fn write_atomic(path: &Path, contents: &str) -> Result<(), ConfigError> {
    let failed = |target: &Path, e: std::io::Error| {
        ConfigError::WriteError(format!("{}: {e}", target.display()))
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| failed(parent, e))?;
    }

    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, contents).map_err(|e| failed(&tmp, e))?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        // rename over an existing file fails on some platforms
        warn!("rename into {} failed ({e}), writing in place", path.display());
        let _ = std::fs::remove_file(&tmp);
        std::fs::write(path, contents).map_err(|e| failed(path, e))?;
    }
    Ok(())
}
