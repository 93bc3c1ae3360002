use pretty_assertions::assert_eq;

use super::*;
use crate::visual_editor::component::ComponentType;

#[test]
fn bundled_config_parses() {
    let config = BuilderConfig::bundled().unwrap();
    assert_eq!(config.level().unwrap(), Level::INFO);
}

#[test]
fn bundled_starter_page_is_valid() {
    let tree = BuilderConfig::bundled().unwrap().starter_tree().unwrap();
    let hero = tree.find(&"starter-hero".into()).unwrap();
    assert_eq!(hero.component_type(), Some(ComponentType::Container));
    assert_eq!(hero.children().len(), 3);
}

#[test]
fn missing_keys_use_defaults() {
    let config = BuilderConfig::from_json(r#"{ "canvas_label": "Landing" }"#).unwrap();
    assert_eq!(config.canvas_label, "Landing");
    assert_eq!(config.log_level, BuilderConfig::default().log_level);
    assert!(config.starter_page.is_empty());
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = BuilderConfig::from_json("{ nope").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn unknown_log_level_is_rejected() {
    let config = BuilderConfig { log_level: "loud".into(), ..BuilderConfig::default() };
    assert!(matches!(config.level(), Err(ConfigError::InvalidLogLevel(level)) if level == "loud"));
}

#[test]
fn starter_page_with_duplicate_ids_is_rejected() {
    let raw = r#"{
        "starter_page": [
            { "id": "same", "type": "TEXT" },
            { "id": "same", "type": "DIVIDER" }
        ]
    }"#;
    let config = BuilderConfig::from_json(raw).unwrap();
    assert!(matches!(config.starter_tree(), Err(ConfigError::StarterPage(TreeError::DuplicateId(_)))));
}

#[test]
fn degenerate_records_do_not_drop_their_siblings() {
    let raw = r#"{
        "starter_page": [
            { "id": "intro", "type": "TEXT", "content": "Hello" },
            { "id": "photo", "type": "IMAGE" },
            { "id": "title", "type": "HEADING", "level": 9 },
            { "id": "more", "type": "LINK" }
        ]
    }"#;
    let tree = BuilderConfig::from_json(raw).unwrap().starter_tree().unwrap();

    assert_eq!(tree.len(), 4);
    assert_eq!(tree.find(&"intro".into()).unwrap().content.as_deref(), Some("Hello"));
}

#[test]
fn starter_styles_use_css_property_names() {
    let tree = BuilderConfig::bundled().unwrap().starter_tree().unwrap();
    let hero = tree.find(&"starter-hero".into()).unwrap();

    assert!(hero.styles.contains("background-color"));
    assert!(hero.styles.iter().all(|(property, _)| !property.chars().any(|c| c.is_ascii_uppercase())));
}
