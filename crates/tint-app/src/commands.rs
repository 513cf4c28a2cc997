//! Subcommand implementations.
//!
//! Every command builds a report that prints as plain text or, with
//! `--json`, as pretty JSON.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tint_colors::{
    complementary_color, luma, normalize_color, parse_color, rgb_to_hsl, triadic_colors, Theme,
};
use tint_common::types::{Hsl, Rgb, SlotColor, SlotKind, SlotState};
use tint_common::{ColorError, Result, TintError};
use tint_config::{config_to_json, config_to_toml, save_config_to_path, TintConfig};
use tint_params::{
    decode_query_with_rotation, encode_query, share_url, ControllerState, PresetKeywords,
    SlotSource,
};

use crate::cli::Command;

pub fn run(
    command: &Command,
    config: &TintConfig,
    config_path: Option<&Path>,
    json: bool,
) -> Result<String> {
    match command {
        Command::Convert { color } => render(&convert(color)?, json),
        Command::Encode {
            body,
            fixed,
            meta,
            no_body,
            no_fixed,
            no_meta,
        } => {
            let overrides = [
                (SlotKind::Body, body.as_deref(), *no_body),
                (SlotKind::Fixed, fixed.as_deref(), *no_fixed),
                (SlotKind::Meta, meta.as_deref(), *no_meta),
            ];
            render(&encode(config, &overrides), json)
        }
        Command::Decode { query } => render(&decode(query, config), json),
        Command::Snippet { query } => render(&snippet(query, config), json),
        Command::Share { query, base } => {
            let base = base.as_deref().unwrap_or(&config.share.base_url);
            render(&share(query, base, config)?, json)
        }
        Command::Presets { query } => render(&presets(query, config), json),
        Command::Config { write: false } => show_config(config, json),
        Command::Config { write: true } => {
            let path = match config_path {
                Some(path) => path.to_path_buf(),
                None => tint_config::toml_loader::default_config_path()?,
            };
            render(&write_config(config, path)?, json)
        }
    }
}

fn render<T: Serialize + fmt::Display>(report: &T, json: bool) -> Result<String> {
    if json {
        serde_json::to_string_pretty(report).map_err(|e| TintError::Serialize(e.to_string()))
    } else {
        Ok(report.to_string())
    }
}

// -- convert ------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ConvertReport {
    pub input: String,
    pub normalized: String,
    pub rgb: Rgb,
    pub hsl: Hsl,
    pub complement: String,
    pub triad: [String; 3],
    pub luma: f64,
    pub theme: Theme,
}

impl fmt::Display for ConvertReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "input       {}", self.input)?;
        writeln!(f, "normalized  {}", self.normalized)?;
        writeln!(f, "rgb         {}", self.rgb.to_css())?;
        writeln!(f, "hsl         {}", self.hsl)?;
        writeln!(f, "complement  {}", self.complement)?;
        writeln!(f, "triad       {}", self.triad.join(" "))?;
        writeln!(f, "luma        {:.1}", self.luma)?;
        write!(f, "theme       {}", self.theme)
    }
}

pub fn convert(color: &str) -> Result<ConvertReport> {
    let rgb = parse_color(color)?;
    let hex = rgb.to_hex();
    let unreadable = || ColorError::InvalidHex(hex.clone());

    Ok(ConvertReport {
        input: color.to_string(),
        normalized: normalize_color(color),
        rgb,
        hsl: rgb_to_hsl(rgb),
        complement: complementary_color(&hex).ok_or_else(unreadable)?,
        triad: triadic_colors(&hex).ok_or_else(unreadable)?,
        luma: luma(&hex).ok_or_else(unreadable)?,
        theme: Theme::for_background(&hex),
    })
}

// -- encode / snippet / share --------------------------------------------------

#[derive(Debug, Serialize)]
pub struct QueryReport {
    pub query: String,
}

impl fmt::Display for QueryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.query)
    }
}

fn override_slot(state: &mut SlotState, color: Option<&str>, disabled: bool) {
    if let Some(color) = color.map(str::trim) {
        state.color = if color.is_empty() || color.eq_ignore_ascii_case(SlotColor::INHERIT) {
            SlotColor::Inherit
        } else {
            SlotColor::value(normalize_color(color))
        };
        state.checked = true;
    }
    if disabled {
        state.checked = false;
    }
}

/// Config defaults with per-slot overrides. Giving a color enables the slot
/// unless it is also switched off.
pub fn encode(config: &TintConfig, overrides: &[(SlotKind, Option<&str>, bool)]) -> QueryReport {
    let mut slots = config.slots.to_slot_set();
    for &(kind, color, disabled) in overrides {
        override_slot(slots.get_mut(kind), color, disabled);
    }
    QueryReport {
        query: encode_query(&slots),
    }
}

#[derive(Debug, Serialize)]
pub struct SnippetReport {
    pub snippet: String,
    pub theme: Theme,
    /// Class the page puts on `<body>` for this theme.
    pub body_class: &'static str,
}

impl fmt::Display for SnippetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.snippet)
    }
}

pub fn snippet(query: &str, config: &TintConfig) -> SnippetReport {
    let state = ControllerState::from_query(query, config.controller_settings());
    let theme = state.theme();
    SnippetReport {
        snippet: state.snippet(),
        theme,
        body_class: theme.css_class(),
    }
}

#[derive(Debug, Serialize)]
pub struct ShareReport {
    pub url: String,
}

impl fmt::Display for ShareReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// Link to `base` carrying the slots from `query`. Fails unless `base` is an
/// absolute http(s) URL.
pub fn share(query: &str, base: &str, config: &TintConfig) -> Result<ShareReport> {
    let state = ControllerState::from_query(query, config.controller_settings());
    Ok(ShareReport {
        url: share_url(base, state.slots())?,
    })
}

// -- decode -------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct SlotReport {
    pub slot: SlotKind,
    pub color: SlotColor,
    pub enabled: bool,
    pub source: SlotSource,
}

#[derive(Debug, Serialize)]
pub struct DecodeReport {
    pub slots: Vec<SlotReport>,
    pub autofilled: bool,
}

impl fmt::Display for DecodeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let source = match slot.source {
                SlotSource::Param => "query",
                SlotSource::Autofill => "autofill",
                SlotSource::Absent => "default",
            };
            write!(
                f,
                "{:<6} {:<20} {:<3} ({source})",
                slot.slot.name(),
                slot.color.as_str(),
                if slot.enabled { "on" } else { "off" },
            )?;
        }
        Ok(())
    }
}

pub fn decode(query: &str, config: &TintConfig) -> DecodeReport {
    let decoded = decode_query_with_rotation(query, config.presets.complement_degrees);
    let slots = decoded.resolve(&config.slots.to_slot_set());

    DecodeReport {
        slots: SlotKind::QUERY_ORDER
            .into_iter()
            .map(|kind| {
                let state = slots.get(kind);
                SlotReport {
                    slot: kind,
                    color: state.color.clone(),
                    enabled: state.checked,
                    source: decoded.get(kind).source,
                }
            })
            .collect(),
        autofilled: decoded.autofilled(),
    }
}

// -- presets ------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct PresetsReport {
    pub body: PresetKeywords,
    pub fixed: PresetKeywords,
    pub meta: PresetKeywords,
    /// Swatches shared by every picker.
    pub palette: Vec<String>,
}

impl fmt::Display for PresetsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "body   {}", self.body)?;
        writeln!(f, "fixed  {}", self.fixed)?;
        writeln!(f, "meta   {}", self.meta)?;
        write!(f, "palette {}", self.palette.join(","))
    }
}

pub fn presets(query: &str, config: &TintConfig) -> PresetsReport {
    let state = ControllerState::from_query(query, config.controller_settings());
    PresetsReport {
        body: state.presets(SlotKind::Body),
        fixed: state.presets(SlotKind::Fixed),
        meta: state.presets(SlotKind::Meta),
        palette: state.palette().to_vec(),
    }
}

// -- config -------------------------------------------------------------------

fn show_config(config: &TintConfig, json: bool) -> Result<String> {
    if json {
        Ok(config_to_json(config))
    } else {
        Ok(config_to_toml(config)?)
    }
}

#[derive(Debug, Serialize)]
pub struct WriteReport {
    pub written: PathBuf,
}

impl fmt::Display for WriteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wrote {}", self.written.display())
    }
}

pub fn write_config(config: &TintConfig, path: PathBuf) -> Result<WriteReport> {
    save_config_to_path(config, &path)?;
    tracing::info!(path = %path.display(), "config written");
    Ok(WriteReport { written: path })
}
