use super::*;

#[test]
fn tone_default_is_primary() {
    assert_eq!(Tone::default(), Tone::Primary);
}

#[test]
fn class_includes_tone() {
    assert_eq!(button_class(Tone::Danger, false, false), "btn btn--danger");
}

#[test]
fn class_flags_are_appended_in_order() {
    assert_eq!(
        button_class(Tone::Secondary, true, true),
        "btn btn--secondary btn--active btn--block"
    );
}
