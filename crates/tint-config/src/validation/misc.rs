//! Validation for the share and presets sections.

use crate::schema::TintConfig;
use url::Url;

use super::helpers::{validate_color_value, validate_range_f64};

/// `share.base_url` must be an absolute http(s) URL.
pub(crate) fn validate_share(errors: &mut Vec<String>, config: &TintConfig) {
    let raw = config.share.base_url.trim();
    match Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => errors.push(format!(
            "share.base_url = {raw:?} has scheme {:?}, expected http or https",
            url.scheme()
        )),
        Err(e) => errors.push(format!("share.base_url = {raw:?} is not a URL: {e}")),
    }
}

pub(crate) fn validate_presets(errors: &mut Vec<String>, config: &TintConfig) {
    validate_range_f64(
        errors,
        "presets.complement_degrees",
        config.presets.complement_degrees,
        0.0,
        359.0,
    );
    for (i, color) in config.presets.palette.iter().enumerate() {
        validate_color_value(errors, &format!("presets.palette[{i}]"), color);
    }
}
