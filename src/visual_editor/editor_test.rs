use pretty_assertions::assert_eq;

use super::*;
use crate::config::BuilderConfig;
use crate::visual_editor::factory::create;
use crate::visual_editor::style::StyleValue;

// =============================================================
// Field edits
// =============================================================

#[test]
fn heading_level_edit_keeps_content_and_id() {
    let heading = create(ComponentType::Heading);
    let mut session = EditSession::new(heading.clone());

    let updated = session.set_field(FieldEdit::HeadingLevel(HeadingLevel::new(4).unwrap())).unwrap();

    assert_eq!(updated.kind, ComponentKind::Heading { level: HeadingLevel::new(4).unwrap() });
    assert_eq!(updated.content.as_deref(), Some("Your Heading Here"));
    assert_eq!(updated.id, heading.id);
    assert_eq!(session.working(), &updated);
}

#[test]
fn field_edit_leaves_source_record_untouched() {
    let button = create(ComponentType::Button);
    let before = button.clone();
    let updated = apply_field(&button, FieldEdit::ButtonVariant(ButtonVariant::Danger)).unwrap();

    assert_eq!(button, before);
    assert_eq!(updated.kind, ComponentKind::Button { variant: ButtonVariant::Danger });
}

#[test]
fn field_for_other_variant_is_rejected() {
    let text = create(ComponentType::Text);
    let err = apply_field(&text, FieldEdit::ImageSrc("a.png".into())).unwrap_err();
    assert_eq!(
        err,
        EditError::FieldNotApplicable { field: "src", component_type: "TEXT" }
    );
}

#[test]
fn content_is_rejected_on_image() {
    let image = create(ComponentType::Image);
    assert!(apply_field(&image, FieldEdit::Content("hi".into())).is_err());
}

#[test]
fn image_and_input_fields_apply() {
    let image = apply_field(&create(ComponentType::Image), FieldEdit::ImageAlt("Logo".into())).unwrap();
    assert!(matches!(image.kind, ComponentKind::Image { ref alt, .. } if alt == "Logo"));

    let input = apply_field(&create(ComponentType::Input), FieldEdit::InputType(InputType::Email)).unwrap();
    assert!(matches!(input.kind, ComponentKind::Input { input_type: InputType::Email, .. }));
}

// =============================================================
// Style edits
// =============================================================

#[test]
fn style_edit_changes_exactly_one_property() {
    let text = create(ComponentType::Text);
    let updated = apply_style(&text, "color", "#ff0000");

    assert_eq!(updated.styles.get("color"), Some(&StyleValue::from("#ff0000")));
    assert_eq!(updated.styles.without("color"), text.styles);
    assert_eq!(updated.id, text.id);
    assert_eq!(updated.kind, text.kind);
    assert_eq!(updated.content, text.content);
}

#[test]
fn blank_style_value_removes_property() {
    let text = create(ComponentType::Text);
    let updated = apply_style(&text, "margin", "");
    assert!(!updated.styles.contains("margin"));
}

#[test]
fn rename_keeps_value() {
    let mut session = EditSession::new(create(ComponentType::Text));
    let updated = session.rename_style("margin", "margin-top");
    assert!(!updated.styles.contains("margin"));
    assert_eq!(updated.styles.get("margin-top"), Some(&StyleValue::from("8px")));
}

#[test]
fn rename_to_blank_parks_value_in_draft() {
    let mut session = EditSession::new(create(ComponentType::Text));
    let updated = session.rename_style("margin", "");
    assert!(!updated.styles.contains("margin"));
    assert_eq!(session.drafts(), &[StyleDraft { property: String::new(), value: "8px".into() }]);
}

#[test]
fn panel_edit_replaces_camel_case_key_from_loaded_page() {
    let page = BuilderConfig::bundled().unwrap().starter_tree().unwrap();
    let hero = page.find(&"starter-hero".into()).unwrap().clone();
    let mut session = EditSession::new(hero);
    assert_eq!(session.working().styles.css_value("background-color").as_deref(), Some("#f8fafc"));

    let updated = session.set_style("background-color", "#ff0000");

    assert_eq!(
        updated.styles.to_css(),
        "background-color: #ff0000; border-radius: 8px; padding: 32px;"
    );
}

#[test]
fn rename_to_blank_keeps_units_of_numeric_value() {
    let mut record = create(ComponentType::Text);
    record.styles.insert("letterSpacing", 2.0);
    let mut session = EditSession::new(record);

    session.rename_style("letter-spacing", " ");

    assert_eq!(session.drafts().last().map(|d| d.value.as_str()), Some("2px"));
}

// =============================================================
// Drafts
// =============================================================

#[test]
fn draft_names_are_unique() {
    let mut session = EditSession::new(create(ComponentType::Text));
    session.add_draft();
    session.add_draft();
    let names: Vec<_> = session.drafts().iter().map(|d| d.property.as_str()).collect();
    assert_eq!(names, vec!["new-property", "new-property-1"]);
}

#[test]
fn complete_draft_moves_into_record() {
    let mut session = EditSession::new(create(ComponentType::Text));
    let index = session.add_draft();

    assert_eq!(session.edit_draft(index, Some("opacity".into()), None).unwrap(), None);
    let updated = session.edit_draft(index, None, Some("0.5".into())).unwrap().unwrap();

    assert_eq!(updated.styles.get("opacity"), Some(&StyleValue::from("0.5")));
    assert!(session.drafts().is_empty());
}

#[test]
fn editing_missing_draft_fails() {
    let mut session = EditSession::new(create(ComponentType::Text));
    assert_eq!(session.edit_draft(3, None, None), Err(EditError::NoSuchDraft(3)));
    assert_eq!(session.discard_draft(0), Err(EditError::NoSuchDraft(0)));
}

// =============================================================
// Selection sync
// =============================================================

#[test]
fn selecting_other_record_discards_drafts() {
    let first = create(ComponentType::Text);
    let second = create(ComponentType::Heading);
    let mut session = EditSession::new(first);
    let index = session.add_draft();
    session.edit_draft(index, Some(String::new()), Some("half-typed".into())).unwrap();
    assert_eq!(session.drafts().len(), 1);

    assert_eq!(session.sync(&second), SyncOutcome::Swapped);
    assert_eq!(session.working(), &second);
    assert!(session.drafts().is_empty());
}

#[test]
fn no_bleed_through_after_swap() {
    let first = create(ComponentType::Text);
    let second = create(ComponentType::Text);
    let mut session = EditSession::new(first);
    session.set_style("color", "red");

    session.sync(&second);
    let updated = session.set_style("padding", "2px");

    assert_eq!(updated.id, second.id);
    assert!(!updated.styles.contains("color"));
}

#[test]
fn refresh_keeps_drafts() {
    let record = create(ComponentType::Text);
    let mut session = EditSession::new(record.clone());
    session.add_draft();

    let newer = apply_style(&record, "color", "blue");
    assert_eq!(session.sync(&newer), SyncOutcome::Refreshed);
    assert_eq!(session.drafts().len(), 1);
    assert_eq!(session.sync(&newer), SyncOutcome::Unchanged);
}
