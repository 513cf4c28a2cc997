//! Picker presets: the Bootstrap swatch palette and the labelled keyword
//! list (`default`, `initial`, `complement`) each picker offers.

use serde::Serialize;
use std::fmt;
use tint_colors::{color_to_rgb, rotate_hue};
use tint_common::types::SlotKind;

/// Bootstrap 5 color scale, nine steps per hue.
pub const BOOTSTRAP_PALETTE: &[&str] = &[
    "#031633", "#052c65", "#084298", "#0a58ca", "#0d6efd", "#3d8bfd", "#6ea8fe", "#9ec5fe",
    "#cfe2ff", "#140330", "#290661", "#3d0a91", "#520dc2", "#6610f2", "#8540f5", "#a370f7",
    "#c29ffa", "#e0cffc", "#160d27", "#2c1a4d", "#432874", "#59359a", "#6f42c1", "#8c68cd",
    "#a98eda", "#c5b3e6", "#e2d9f3", "#2b0a1a", "#561435", "#801f4f", "#ab296a", "#d63384",
    "#de5c9d", "#e685b5", "#efadce", "#f7d6e6", "#2c0b0e", "#58151c", "#842029", "#b02a37",
    "#dc3545", "#e35d6a", "#ea868f", "#f1aeb5", "#f8d7da", "#331904", "#653208", "#984c0c",
    "#ca6510", "#fd7e14", "#fd9843", "#feb272", "#fecba1", "#ffe5d0", "#332701", "#664d03",
    "#997404", "#cc9a06", "#ffc107", "#ffcd39", "#ffda6a", "#ffe69c", "#fff3cd", "#051b11",
    "#0a3622", "#0f5132", "#146c43", "#198754", "#479f76", "#75b798", "#a3cfbb", "#d1e7dd",
    "#06281e", "#0d503c", "#13795b", "#1aa179", "#20c997", "#4dd4ac", "#79dfc1", "#a6e9d5",
    "#d2f4ea", "#032830", "#055160", "#087990", "#0aa2c0", "#0dcaf0", "#3dd5f3", "#6edff6",
    "#9eeaf9", "#cff4fc", "#212529", "#343a40", "#495057", "#6c757d", "#adb5bd", "#ced4da",
    "#dee2e6", "#e9ecef", "#f8f9fa",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetKeyword {
    pub color: String,
    pub label: &'static str,
}

/// Ordered `color:label` list, rendered comma-separated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PresetKeywords(Vec<PresetKeyword>);

impl PresetKeywords {
    pub fn push(&mut self, color: impl Into<String>, label: &'static str) {
        self.0.push(PresetKeyword {
            color: color.into(),
            label,
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &PresetKeyword> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Color carrying `label`, if present.
    pub fn color_for(&self, label: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|k| k.label == label)
            .map(|k| k.color.as_str())
    }
}

impl fmt::Display for PresetKeywords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, keyword) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}:{}", keyword.color, keyword.label)?;
        }
        Ok(())
    }
}

/// Complement suggested to the fixed and meta pickers.
///
/// Derived from the current body color, or from `default_body` when the
/// body input is empty. `None` when neither can be read.
pub fn body_complement(body: Option<&str>, default_body: &str, degrees: f64) -> Option<String> {
    let source = body.filter(|b| !b.trim().is_empty()).unwrap_or(default_body);
    let rgb = color_to_rgb(source)?;
    rotate_hue(&rgb.to_hex(), degrees)
}

/// Keywords for one picker.
///
/// Body offers `default` and `initial`; fixed and meta add `complement`
/// when one is given.
pub fn slot_presets(
    kind: SlotKind,
    default: &str,
    initial: &str,
    complement: Option<&str>,
) -> PresetKeywords {
    let mut keywords = PresetKeywords::default();
    keywords.push(default, "default");
    keywords.push(initial, "initial");
    if kind != SlotKind::Body {
        if let Some(complement) = complement {
            keywords.push(complement, "complement");
        }
    }
    keywords
}
