//! Palette of draggable component templates.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use dioxus::prelude::*;

use super::component::ComponentType;
use super::dnd::DragPayload;
use super::state::{add_component, begin_drag, cancel_drag};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteTemplate {
    pub component_type: ComponentType,
    pub icon: &'static str,
    pub description: &'static str,
}

impl PaletteTemplate {
    pub fn label(&self) -> &'static str {
        self.component_type.label()
    }

    /// Drag payload marked as coming from the palette.
    pub fn payload(&self) -> DragPayload {
        DragPayload::from_palette(self.component_type)
    }
}

pub const PALETTE: [PaletteTemplate; 8] = [
    PaletteTemplate { component_type: ComponentType::Heading, icon: "H", description: "Section title" },
    PaletteTemplate { component_type: ComponentType::Text, icon: "¶", description: "Paragraph of text" },
    PaletteTemplate { component_type: ComponentType::Button, icon: "▭", description: "Call to action" },
    PaletteTemplate { component_type: ComponentType::Image, icon: "▣", description: "Picture from a URL" },
    PaletteTemplate { component_type: ComponentType::Input, icon: "⌨", description: "Form field" },
    PaletteTemplate { component_type: ComponentType::Link, icon: "↗", description: "Hyperlink" },
    PaletteTemplate { component_type: ComponentType::Divider, icon: "—", description: "Horizontal rule" },
    PaletteTemplate { component_type: ComponentType::Container, icon: "▢", description: "Groups other components" },
];

#[component]
pub fn Palette() -> Element {
    rsx! {
        div { class: "palette",
            for template in PALETTE {
                PaletteItem { key: "{template.component_type}", template: template }
            }
        }
    }
}

#[component]
fn PaletteItem(template: PaletteTemplate) -> Element {
    let label = template.label();
    rsx! {
        div {
            class: "palette__item",
            draggable: "true",
            title: "{template.description}",
            ondragstart: move |_| begin_drag(template.payload()),
            ondragend: move |_| cancel_drag(),
            onclick: move |_| add_component(template.component_type),
            span { class: "palette__icon", "{template.icon}" }
            span { class: "palette__label", "{label}" }
        }
    }
}
