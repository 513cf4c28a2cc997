//! Full configuration validation.
//!
//! Each section has its own check; this orchestrator runs them all and
//! collects errors into a single `ConfigError`. Log levels are checked by
//! deserialization, so an unknown level never reaches this point.

mod helpers;
mod misc;
mod slots;


use crate::schema::TintConfig;
use tint_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TintConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    slots::validate_slots(&mut errors, config);
    misc::validate_share(&mut errors, config);
    misc::validate_presets(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
