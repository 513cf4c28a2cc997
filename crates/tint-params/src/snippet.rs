//! HTML snippet reproducing the chosen look.

use tint_colors::{normalize_color, Theme};
use tint_common::types::SlotSet;

/// Background used for theme selection when the body color is off.
const PAGE_FALLBACK_BACKGROUND: &str = "#FFFFFF";

/// Build the `<head>`/`<body>` example for the given slots.
///
/// The meta tag and body background appear only for enabled slots with a
/// color. The fixed bar always carries its color when it has one and is
/// hidden with `display: none;` when disabled.
pub fn generate_snippet(slots: &SlotSet) -> String {
    let meta = slots.meta.applied_color().map(normalize_color);
    let body = slots.body.applied_color().map(normalize_color);
    let fixed = slots.fixed.color.as_color().map(normalize_color);

    let head = match meta {
        Some(color) => format!("    <meta name=\"theme-color\" content=\"{color}\">\n"),
        None => String::new(),
    };

    let body_attr = match body {
        Some(color) => format!(" style=\"background-color: {color};\""),
        None => String::new(),
    };

    let mut div_style = String::from("position: fixed; top: 0;");
    if let Some(color) = fixed {
        div_style.push_str(&format!(" background-color: {color};"));
    }
    if !slots.fixed.checked {
        div_style.push_str(" display: none;");
    }

    format!(
        "<head>\n{head}</head>\n<body{body_attr}>\n    <div style=\"{div_style}\">\n    </div>\n</body>"
    )
}

/// Theme the page should use: from the body color when it is applied,
/// otherwise from a white background.
pub fn page_theme(slots: &SlotSet) -> Theme {
    match slots.body.applied_color() {
        Some(color) => Theme::for_background(color),
        None => Theme::for_background(PAGE_FALLBACK_BACKGROUND),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tint_common::types::SlotState;

    fn defaults() -> SlotSet {
        SlotSet {
            body: SlotState::new("#0088FF", true),
            meta: SlotState::new("#363636", false),
            fixed: SlotState::new("#FFCC33", true),
        }
    }

    #[test]
    fn default_slots_snippet() {
        let expected = "<head>\n</head>\n<body style=\"background-color: #0088ff;\">\n    <div style=\"position: fixed; top: 0; background-color: #ffcc33;\">\n    </div>\n</body>";
        assert_eq!(generate_snippet(&defaults()), expected);
    }

    #[test]
    fn enabled_meta_adds_head_line() {
        let slots = defaults().with(
            tint_common::SlotKind::Meta,
            SlotState::new("rgba(54, 54, 54, 0.5)", true),
        );
        let snippet = generate_snippet(&slots);
        assert!(snippet.starts_with(
            "<head>\n    <meta name=\"theme-color\" content=\"rgb(54, 54, 54)\">\n</head>\n"
        ));
    }

    #[test]
    fn disabled_fixed_is_hidden_but_keeps_color() {
        let slots = defaults().with(tint_common::SlotKind::Fixed, SlotState::new("#fc3", false));
        let snippet = generate_snippet(&slots);
        assert!(snippet.contains(
            "<div style=\"position: fixed; top: 0; background-color: #ffcc33; display: none;\">"
        ));
    }

    #[test]
    fn empty_slots() {
        let expected = "<head>\n</head>\n<body>\n    <div style=\"position: fixed; top: 0; display: none;\">\n    </div>\n</body>";
        assert_eq!(generate_snippet(&SlotSet::default()), expected);
    }

    #[test]
    fn inherit_body_and_meta_are_left_out() {
        let slots = SlotSet {
            body: SlotState::new(tint_common::types::SlotColor::Inherit, true),
            meta: SlotState::new(tint_common::types::SlotColor::Inherit, true),
            fixed: SlotState::new("#FFCC33", true),
        };
        let snippet = generate_snippet(&slots);
        assert!(snippet.starts_with("<head>\n</head>\n<body>\n"));
        assert_eq!(page_theme(&slots), Theme::Light);
    }

    #[test]
    fn page_theme_follows_body() {
        assert_eq!(page_theme(&defaults()), Theme::Dark);
        let off = defaults().with(tint_common::SlotKind::Body, SlotState::new("#0088FF", false));
        assert_eq!(page_theme(&off), Theme::Light);
        let pale = defaults().with(tint_common::SlotKind::Body, SlotState::new("#f8f9fa", true));
        assert_eq!(page_theme(&pale), Theme::Light);
    }
}
