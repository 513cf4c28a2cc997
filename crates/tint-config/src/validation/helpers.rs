//! Shared validation helpers.

use tint_colors::parse_color;

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range_f64(
    errors: &mut Vec<String>,
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) {
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is not a color `parse_color` accepts.
pub(crate) fn validate_color_value(errors: &mut Vec<String>, name: &str, value: &str) {
    if let Err(e) = parse_color(value) {
        errors.push(format!("{name}: {e}"));
    }
}
