use super::*;
use tint_common::types::SlotColor;

fn fresh() -> ControllerState {
    ControllerState::from_query("", ControllerSettings::default())
}

fn input(slot: SlotKind, value: &str) -> Edit {
    Edit::Input {
        slot,
        value: value.to_string(),
    }
}

fn blur(slot: SlotKind, value: &str) -> Edit {
    Edit::Blur {
        slot,
        value: value.to_string(),
    }
}

#[test]
fn empty_query_starts_from_defaults() {
    let state = fresh();
    assert_eq!(state.slots(), &ControllerSettings::default().defaults);
    assert_eq!(state.query(), "?b=0088ff&f=ffcc33&m=0,363636");
    assert_eq!(state.theme(), Theme::Dark);
    assert_eq!(state.initial(SlotKind::Meta), "#363636");
}

#[test]
fn autofilled_query_sets_presets() {
    let state = ControllerState::from_query("?b=0044ff", ControllerSettings::default());
    assert_eq!(state.slots().fixed, SlotState::new("#ffbb00", true));
    assert_eq!(state.initial(SlotKind::Body), "#0044ff");
    // fixed was not in the query, so its initial preset is the default
    assert_eq!(
        state.presets(SlotKind::Fixed).to_string(),
        "#FFCC33:default,#FFCC33:initial,#ffbb00:complement"
    );
    assert_eq!(
        state.presets(SlotKind::Body).to_string(),
        "#0088FF:default,#0044ff:initial"
    );
}

#[test]
fn render_paints_everything() {
    let effects = fresh().render();
    assert_eq!(effects.len(), 6);
    assert_eq!(
        effects[0],
        Effect::QueryChanged("?b=0088ff&f=ffcc33&m=0,363636".into())
    );
    assert_eq!(effects[2], Effect::ThemeChanged(Theme::Dark));
    assert!(matches!(
        effects[5],
        Effect::PresetsChanged {
            slot: SlotKind::Fixed,
            ..
        }
    ));
}

#[test]
fn body_input_refreshes_theme_and_presets() {
    let (state, effects) = fresh().apply(input(SlotKind::Body, "#FFF"));
    assert_eq!(state.slots().body, SlotState::new("#ffffff", true));
    assert_eq!(
        effects[0],
        Effect::QueryChanged("?b=ffffff&f=ffcc33&m=0,363636".into())
    );
    assert!(matches!(effects[1], Effect::SnippetChanged(_)));
    assert_eq!(effects[2], Effect::ThemeChanged(Theme::Light));

    let presets: Vec<(SlotKind, String)> = effects[3..]
        .iter()
        .map(|e| match e {
            Effect::PresetsChanged { slot, presets, .. } => (*slot, presets.to_string()),
            other => panic!("unexpected effect {other:?}"),
        })
        .collect();
    assert_eq!(
        presets,
        vec![
            (
                SlotKind::Fixed,
                "#FFCC33:default,#FFCC33:initial,#ffffff:complement".to_string()
            ),
            (
                SlotKind::Meta,
                "#363636:default,#363636:initial,#ffffff:complement".to_string()
            ),
        ]
    );
}

#[test]
fn repeated_input_is_silent() {
    let (state, effects) = fresh().apply(input(SlotKind::Fixed, "#abc"));
    assert_eq!(effects.len(), 2);
    let (_, effects) = state.apply(input(SlotKind::Fixed, "#AABBCC"));
    assert!(effects.is_empty());
}

#[test]
fn clearing_input_inherits() {
    let (state, effects) = fresh().apply(input(SlotKind::Fixed, "  "));
    assert_eq!(state.slots().fixed.color, SlotColor::Inherit);
    assert!(state.slots().fixed.checked);
    assert_eq!(effects[0], Effect::QueryChanged("?b=0088ff&f=&m=0,363636".into()));
    assert_eq!(effects.len(), 2);
}

#[test]
fn rgb_input_is_normalized() {
    let (state, _) = fresh().apply(input(SlotKind::Meta, "rgba(1,2,3,0.5)"));
    assert_eq!(state.slots().meta.color.as_str(), "rgb(1, 2, 3)");
    assert_eq!(state.query(), "?b=0088ff&f=ffcc33&m=0,010203");
}

#[test]
fn blur_inherit_only_clears_field() {
    let before = fresh();
    let (after, effects) = before.clone().apply(blur(SlotKind::Body, " Inherit "));
    assert_eq!(effects, vec![Effect::InputCleared(SlotKind::Body)]);
    assert_eq!(after, before);
}

#[test]
fn blur_commits_typed_hex() {
    let (state, effects) = fresh().apply(blur(SlotKind::Fixed, " ABC "));
    assert_eq!(state.slots().fixed.color.as_str(), "#aabbcc");
    assert_eq!(effects.len(), 2);
}

#[test]
fn blur_ignores_other_text() {
    let before = fresh();
    for text in ["teal", "#12", "rgb(1,2,3)", ""] {
        let (after, effects) = before.clone().apply(blur(SlotKind::Meta, text));
        assert!(effects.is_empty(), "{text:?}");
        assert_eq!(after, before);
    }
}

#[test]
fn toggles() {
    let (state, effects) = fresh().apply(Edit::Toggle {
        slot: SlotKind::Meta,
        checked: true,
    });
    assert_eq!(
        effects,
        vec![
            Effect::QueryChanged("?b=0088ff&f=ffcc33&m=363636".into()),
            Effect::SnippetChanged(state.snippet()),
        ]
    );

    let (state, effects) = state.apply(Edit::Toggle {
        slot: SlotKind::Body,
        checked: false,
    });
    assert_eq!(effects.len(), 3);
    assert_eq!(effects[2], Effect::ThemeChanged(Theme::Light));

    let (_, effects) = state.apply(Edit::Toggle {
        slot: SlotKind::Body,
        checked: false,
    });
    assert!(effects.is_empty());
}

#[test]
fn custom_rotation_drives_autofill_and_presets() {
    let settings = ControllerSettings {
        complement_degrees: 120.0,
        ..ControllerSettings::default()
    };
    let state = ControllerState::from_query("?b=ff0000", settings);
    assert_eq!(state.slots().meta.color.as_str(), "#00ff00");
    assert_eq!(
        state.presets(SlotKind::Meta).color_for("complement"),
        Some("#00ff00")
    );
}

#[test]
fn configured_palette_reaches_every_picker() {
    let settings = ControllerSettings {
        palette: vec!["#000000".to_string()],
        ..ControllerSettings::default()
    };
    let state = ControllerState::from_query("", settings);
    assert_eq!(state.palette(), ["#000000".to_string()]);

    let rendered = state.render();
    let palettes: Vec<&Vec<String>> = rendered
        .iter()
        .filter_map(|e| match e {
            Effect::PresetsChanged { palette, .. } => Some(palette),
            _ => None,
        })
        .collect();
    assert_eq!(palettes.len(), 3);
    assert!(palettes.iter().all(|p| p.as_slice() == ["#000000"]));

    let (_, effects) = state.apply(input(SlotKind::Body, "#123456"));
    assert!(effects.iter().any(|e| matches!(
        e,
        Effect::PresetsChanged { palette, .. } if palette == &vec!["#000000".to_string()]
    )));
}

#[test]
fn default_palette_is_bootstrap() {
    assert_eq!(fresh().palette().len(), crate::presets::BOOTSTRAP_PALETTE.len());
}
