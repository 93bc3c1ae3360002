//! Component factory: default records for each variant.

#[cfg(test)]
#[path = "factory_test.rs"]
mod factory_test;

use tracing::debug;

use super::component::{ButtonVariant, Component, ComponentId, ComponentKind, ComponentType, HeadingLevel, InputType};
use super::style::StyleObject;

pub const PLACEHOLDER_IMAGE_SRC: &str = "https://via.placeholder.com/300x200";

/// Create a fresh record of `component_type` with a new id and defaults.
pub fn create(component_type: ComponentType) -> Component {
    let (kind, content) = match component_type {
        ComponentType::Text => (ComponentKind::Text, Some("Your text here")),
        ComponentType::Heading => (
            ComponentKind::Heading { level: HeadingLevel::default() },
            Some("Your Heading Here"),
        ),
        ComponentType::Button => (
            ComponentKind::Button { variant: ButtonVariant::Primary },
            Some("Click Me"),
        ),
        ComponentType::Image => (
            ComponentKind::Image {
                src: PLACEHOLDER_IMAGE_SRC.to_owned(),
                alt: "Placeholder image".to_owned(),
            },
            None,
        ),
        ComponentType::Input => (
            ComponentKind::Input {
                placeholder: "Enter text...".to_owned(),
                input_type: InputType::Text,
            },
            None,
        ),
        ComponentType::Container => (ComponentKind::Container { children: Vec::new() }, None),
        ComponentType::Link => (
            ComponentKind::Link { href: "#".to_owned(), new_tab: false },
            Some("Link text"),
        ),
        ComponentType::Divider => (ComponentKind::Divider, None),
    };

    let component = Component {
        id: ComponentId::generate(),
        kind,
        styles: seeded_styles(component_type),
        content: content.map(str::to_owned),
    };
    debug!(id = %component.id, kind = %component_type, "component created");
    component
}

fn seeded_styles(component_type: ComponentType) -> StyleObject {
    let padding = if component_type.is_container() { "16px" } else { "8px" };
    [("margin", "8px"), ("padding", padding)].into_iter().collect()
}
