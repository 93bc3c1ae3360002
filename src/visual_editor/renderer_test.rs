use pretty_assertions::assert_eq;

use super::*;
use crate::visual_editor::component::ComponentType;
use crate::visual_editor::factory::create;
use crate::visual_editor::style::StyleValue;

fn bare(kind: ComponentKind) -> Component {
    Component {
        id: "n".into(),
        kind,
        styles: StyleObject::new(),
        content: None,
    }
}

fn text_of(styles: &StyleObject, property: &str) -> Option<String> {
    styles.get(property).map(ToString::to_string)
}

#[test]
fn text_padding_defaults_to_8px() {
    let style = effective_style(&bare(ComponentKind::Text));
    assert_eq!(text_of(&style, "padding"), Some("8px".into()));
}

#[test]
fn container_padding_defaults_to_16px() {
    let style = effective_style(&bare(ComponentKind::Container { children: vec![] }));
    assert_eq!(text_of(&style, "padding"), Some("16px".into()));
}

#[test]
fn explicit_style_overrides_variant_default() {
    let mut record = bare(ComponentKind::Text);
    record.styles.insert("padding", "2px");
    record.styles.insert("letter-spacing", "1px");

    let style = effective_style(&record);

    assert_eq!(text_of(&style, "padding"), Some("2px".into()));
    assert_eq!(text_of(&style, "letter-spacing"), Some("1px".into()));
    assert_eq!(text_of(&style, "font-size"), Some("16px".into()));
}

#[test]
fn properties_absent_everywhere_stay_absent() {
    let style = effective_style(&bare(ComponentKind::Text));
    assert!(style.get("background-color").is_none());
}

#[test]
fn button_defaults_follow_variant() {
    let primary = variant_defaults(&ComponentKind::Button { variant: ButtonVariant::Primary });
    let outline = variant_defaults(&ComponentKind::Button { variant: ButtonVariant::Outline });

    assert_eq!(primary.get("background-color"), Some(&StyleValue::from("#3b82f6")));
    assert_eq!(outline.get("background-color"), Some(&StyleValue::from("transparent")));
    assert_eq!(outline.get("border"), Some(&StyleValue::from("1px solid #3b82f6")));
}

#[test]
fn every_known_variant_has_defaults() {
    for ty in ComponentType::ALL {
        assert!(!variant_defaults(&create(ty).kind).is_empty(), "{ty}");
    }
}

#[test]
fn unknown_variant_has_no_defaults_and_a_placeholder() {
    let record = bare(ComponentKind::Unknown);
    assert!(variant_defaults(&record.kind).is_empty());
    assert_eq!(unknown_placeholder(&record), "Unknown component (n)");
}

#[test]
fn node_class_marks_selection_only_when_selected() {
    let record = bare(ComponentKind::Divider);
    assert_eq!(
        node_class(&record, true, EditorMode::Editor),
        "canvas-node canvas-node--divider canvas-node--editable canvas-node--selected"
    );
    assert_eq!(node_class(&record, false, EditorMode::Preview), "canvas-node canvas-node--divider");
}
