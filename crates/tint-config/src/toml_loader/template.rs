//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# tint configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

# Slot defaults apply when a query leaves the slot out.
# color: hex (3/4/6/8 digits) or rgb()/rgba(); "" or "inherit" for none.
# A slot table may set just one field; the other keeps its default.

# [slots.body]
# color = "#0088FF"
# enabled = true

# [slots.meta]
# color = "#363636"
# enabled = false

# [slots.fixed]
# color = "#FFCC33"
# enabled = true

[share]
# base_url = "https://example.com/theme-color/"

[presets]
# complement_degrees = 180   # 0-359
# palette = ["#0d6efd", "#6610f2", "#6f42c1"]   # defaults to the Bootstrap 5 scale

[logging]
# level = "info"             # trace, debug, info, warn, error
"##
    .to_string()
}
