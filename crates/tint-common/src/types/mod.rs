mod color;
mod slot;

pub use color::*;
pub use slot::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_to_hex_is_lowercase_and_padded() {
        assert_eq!(Rgb::new(0, 136, 255).to_hex(), "#0088ff");
        assert_eq!(Rgb::new(1, 2, 3).to_hex(), "#010203");
    }

    #[test]
    fn rgb_to_css() {
        assert_eq!(Rgb::new(10, 20, 30).to_css(), "rgb(10, 20, 30)");
    }

    #[test]
    fn hsl_rotation_wraps() {
        let hsl = Hsl::new(300.0, 50.0, 40.0).rotated(120.0);
        assert_eq!(hsl.h, 60.0);
        assert_eq!(hsl.s, 50.0);
        assert_eq!(hsl.l, 40.0);

        let back = Hsl::new(10.0, 0.0, 0.0).rotated(-30.0);
        assert_eq!(back.h, 340.0);
    }

    #[test]
    fn slot_kind_param_keys() {
        for kind in SlotKind::ALL {
            assert_eq!(SlotKind::from_param_key(kind.param_key()), Some(kind));
        }
        assert_eq!(SlotKind::from_param_key("x"), None);
        assert_eq!(SlotKind::Fixed.to_string(), "fixed");
    }

    #[test]
    fn slot_color_inherit_sentinel() {
        assert!(SlotColor::from("inherit").is_inherit());
        assert!(SlotColor::from("INHERIT").is_inherit());
        assert!(SlotColor::from("").is_inherit());
        assert_eq!(SlotColor::from("#0088ff").as_color(), Some("#0088ff"));
        assert_eq!(SlotColor::Inherit.as_str(), "inherit");
    }

    #[test]
    fn slot_color_serializes_as_string() {
        let json = serde_json::to_string(&SlotColor::Inherit).unwrap();
        assert_eq!(json, "\"inherit\"");

        let state = SlotState::new("#363636", false);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r##"{"checked":false,"color":"#363636"}"##);
        let back: SlotState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn applied_color_requires_checked() {
        assert_eq!(SlotState::new("#fff", true).applied_color(), Some("#fff"));
        assert_eq!(SlotState::new("#fff", false).applied_color(), None);
        assert_eq!(SlotState::new(SlotColor::Inherit, true).applied_color(), None);
    }

    #[test]
    fn slot_set_with_replaces_one_slot() {
        let set = SlotSet::default().with(SlotKind::Meta, SlotState::new("#123456", true));
        assert_eq!(set.meta.color.as_str(), "#123456");
        assert!(set.body.color.is_inherit());
        let kinds: Vec<_> = set.iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, SlotKind::ALL.to_vec());
    }
}
