//! Compiled patterns shared by the format detectors and parsers.

use regex::Regex;
use std::sync::LazyLock;

/// Optional `#` followed by 3, 4, 6, or 8 hex digits.
pub(crate) static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap()
});

/// `rgb(` or `rgba(` with a closed argument list.
pub(crate) static RGB_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^rgba?\s*\(.*\)\s*$").unwrap());

/// Loose channel extraction: commas optional, trailing alpha ignored.
pub(crate) static RGB_CHANNELS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)rgba?\s*\(\s*(\d+)\s*,?\s*(\d+)\s*,?\s*(\d+)\s*(?:,?\s*[\d.]+\s*)?\)").unwrap()
});

/// Strict `rgb(r,g,b)` / `rgba(r,g,b,a)` for configuration values.
pub(crate) static RGB_STRICT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)$",
    )
    .unwrap()
});
