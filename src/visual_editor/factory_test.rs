use std::collections::HashSet;

use pretty_assertions::assert_eq;

use super::*;
use crate::visual_editor::style::StyleValue;

#[test]
fn every_type_produces_matching_record() {
    for ty in ComponentType::ALL {
        let record = create(ty);
        assert_eq!(record.component_type(), Some(ty));
    }
}

#[test]
fn ids_are_unique_across_calls() {
    let mut seen = HashSet::new();
    for _ in 0..10 {
        for ty in ComponentType::ALL {
            assert!(seen.insert(create(ty).id));
        }
    }
    assert_eq!(seen.len(), 10 * ComponentType::ALL.len());
}

#[test]
fn heading_defaults() {
    let record = create(ComponentType::Heading);
    assert_eq!(record.kind, ComponentKind::Heading { level: HeadingLevel::new(2).unwrap() });
    assert_eq!(record.content.as_deref(), Some("Your Heading Here"));
}

#[test]
fn button_defaults_to_primary() {
    let record = create(ComponentType::Button);
    assert_eq!(record.kind, ComponentKind::Button { variant: ButtonVariant::Primary });
}

#[test]
fn container_starts_empty() {
    let record = create(ComponentType::Container);
    assert!(record.is_container());
    assert!(record.children().is_empty());
}

#[test]
fn styles_are_seeded_with_spacing() {
    let text = create(ComponentType::Text);
    assert_eq!(text.styles.get("margin"), Some(&StyleValue::from("8px")));
    assert_eq!(text.styles.get("padding"), Some(&StyleValue::from("8px")));

    let container = create(ComponentType::Container);
    assert_eq!(container.styles.get("padding"), Some(&StyleValue::from("16px")));
}

#[test]
fn content_only_on_content_types() {
    for ty in ComponentType::ALL {
        assert_eq!(create(ty).content.is_some(), ty.has_content(), "{ty}");
    }
}
