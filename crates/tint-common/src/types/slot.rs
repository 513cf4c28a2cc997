use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three independently configurable color targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    /// Page background.
    Body,
    /// `<meta name="theme-color">` content.
    Meta,
    /// Fixed header/footer bar.
    Fixed,
}

impl SlotKind {
    pub const ALL: [SlotKind; 3] = [SlotKind::Body, SlotKind::Meta, SlotKind::Fixed];

    /// Order in which slots appear in a generated query string.
    pub const QUERY_ORDER: [SlotKind; 3] = [SlotKind::Body, SlotKind::Fixed, SlotKind::Meta];

    /// Query parameter key for this slot.
    pub fn param_key(self) -> &'static str {
        match self {
            SlotKind::Body => "b",
            SlotKind::Meta => "m",
            SlotKind::Fixed => "f",
        }
    }

    pub fn from_param_key(key: &str) -> Option<Self> {
        match key {
            "b" => Some(SlotKind::Body),
            "m" => Some(SlotKind::Meta),
            "f" => Some(SlotKind::Fixed),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SlotKind::Body => "body",
            SlotKind::Meta => "meta",
            SlotKind::Fixed => "fixed",
        }
    }
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A slot's color, or the `inherit` sentinel meaning no color was chosen.
///
/// Serializes as a plain string so `"inherit"` round-trips through JSON and TOML.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SlotColor {
    #[default]
    Inherit,
    Value(String),
}

impl SlotColor {
    pub const INHERIT: &'static str = "inherit";

    pub fn value(color: impl Into<String>) -> Self {
        SlotColor::Value(color.into())
    }

    pub fn is_inherit(&self) -> bool {
        matches!(self, SlotColor::Inherit)
    }

    /// The chosen color, if any.
    pub fn as_color(&self) -> Option<&str> {
        match self {
            SlotColor::Inherit => None,
            SlotColor::Value(c) => Some(c),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SlotColor::Inherit => Self::INHERIT,
            SlotColor::Value(c) => c,
        }
    }
}

impl From<String> for SlotColor {
    fn from(s: String) -> Self {
        if s.is_empty() || s.eq_ignore_ascii_case(Self::INHERIT) {
            SlotColor::Inherit
        } else {
            SlotColor::Value(s)
        }
    }
}

impl From<&str> for SlotColor {
    fn from(s: &str) -> Self {
        SlotColor::from(s.to_string())
    }
}

impl From<SlotColor> for String {
    fn from(c: SlotColor) -> Self {
        match c {
            SlotColor::Inherit => SlotColor::INHERIT.to_string(),
            SlotColor::Value(v) => v,
        }
    }
}

impl fmt::Display for SlotColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color plus enabled flag for a single slot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SlotState {
    /// Whether the color is applied to the page or only staged.
    pub checked: bool,
    pub color: SlotColor,
}

impl SlotState {
    pub fn new(color: impl Into<SlotColor>, checked: bool) -> Self {
        Self {
            checked,
            color: color.into(),
        }
    }

    /// Unchecked with no color.
    pub fn inherit() -> Self {
        Self::default()
    }

    /// The color to apply, present only when checked and not `inherit`.
    pub fn applied_color(&self) -> Option<&str> {
        if self.checked {
            self.color.as_color()
        } else {
            None
        }
    }
}

/// The three slots together.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SlotSet {
    pub body: SlotState,
    pub meta: SlotState,
    pub fixed: SlotState,
}

impl SlotSet {
    pub fn get(&self, kind: SlotKind) -> &SlotState {
        match kind {
            SlotKind::Body => &self.body,
            SlotKind::Meta => &self.meta,
            SlotKind::Fixed => &self.fixed,
        }
    }

    pub fn get_mut(&mut self, kind: SlotKind) -> &mut SlotState {
        match kind {
            SlotKind::Body => &mut self.body,
            SlotKind::Meta => &mut self.meta,
            SlotKind::Fixed => &mut self.fixed,
        }
    }

    /// Copy of this set with one slot replaced.
    #[must_use]
    pub fn with(mut self, kind: SlotKind, state: SlotState) -> Self {
        *self.get_mut(kind) = state;
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlotKind, &SlotState)> {
        SlotKind::ALL.into_iter().map(move |k| (k, self.get(k)))
    }
}
