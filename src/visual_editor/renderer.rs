//! Recursive rendering of component records.
//!
//! DESIGN
//! ======
//! Rendering is one exhaustive match over `ComponentKind`, so adding a
//! variant fails to compile until it has a case here. Each element receives
//! `variant_defaults` overridden by the record's own styles; nothing else is
//! consulted. Records of unknown type render a visible placeholder.

#[cfg(test)]
#[path = "renderer_test.rs"]
mod renderer_test;

use dioxus::prelude::*;

use super::component::{ButtonVariant, Component, ComponentId, ComponentKind};
use super::dnd::ZoneId;
use super::drop_zone::DropZone;
use super::state::EditorMode;
use super::style::StyleObject;
use crate::config::BuilderConfig;

/// Per-variant fallbacks for properties a record leaves unset.
pub fn variant_defaults(kind: &ComponentKind) -> StyleObject {
    let pairs: &[(&str, &str)] = match kind {
        ComponentKind::Text => &[("padding", "8px"), ("font-size", "16px"), ("line-height", "1.5"), ("color", "#333333")],
        ComponentKind::Heading { .. } => &[("padding", "8px"), ("color", "#111827"), ("font-weight", "700")],
        ComponentKind::Button { variant } => return button_defaults(*variant),
        ComponentKind::Image { .. } => &[("display", "block"), ("max-width", "100%"), ("height", "auto")],
        ComponentKind::Input { .. } => &[
            ("padding", "8px"),
            ("border", "1px solid #d1d5db"),
            ("border-radius", "4px"),
            ("font-size", "14px"),
        ],
        ComponentKind::Container { .. } => &[
            ("padding", "16px"),
            ("display", "flex"),
            ("flex-direction", "column"),
            ("gap", "8px"),
            ("min-height", "48px"),
        ],
        ComponentKind::Link { .. } => &[("padding", "8px"), ("color", "#2563eb"), ("text-decoration", "underline")],
        ComponentKind::Divider => &[("border", "none"), ("border-top", "1px solid #e5e7eb"), ("margin", "16px 0")],
        ComponentKind::Unknown => &[],
    };
    pairs.iter().copied().collect()
}

fn button_defaults(variant: ButtonVariant) -> StyleObject {
    let (background, color, border) = match variant {
        ButtonVariant::Primary => ("#3b82f6", "#ffffff", "none"),
        ButtonVariant::Secondary => ("#e5e7eb", "#111827", "none"),
        ButtonVariant::Outline => ("transparent", "#3b82f6", "1px solid #3b82f6"),
        ButtonVariant::Danger => ("#ef4444", "#ffffff", "none"),
    };
    [
        ("padding", "10px 20px"),
        ("border-radius", "6px"),
        ("font-size", "14px"),
        ("cursor", "pointer"),
        ("background-color", background),
        ("color", color),
        ("border", border),
    ]
    .into_iter()
    .collect()
}

/// The style actually applied: variant defaults overridden by the record.
pub fn effective_style(component: &Component) -> StyleObject {
    component.styles.merged_over(&variant_defaults(&component.kind))
}

pub fn unknown_placeholder(component: &Component) -> String {
    format!("Unknown component ({})", component.id)
}

fn node_class(component: &Component, selected: bool, mode: EditorMode) -> String {
    let mut class = format!("canvas-node canvas-node--{}", component.kind.tag().to_ascii_lowercase());
    if mode == EditorMode::Editor {
        class.push_str(" canvas-node--editable");
    }
    if selected {
        class.push_str(" canvas-node--selected");
    }
    class
}

#[component]
pub fn ComponentRenderer(
    component: Component,
    #[props(!optional)] selected_id: Option<ComponentId>,
    mode: EditorMode,
    on_select: EventHandler<Component>,
) -> Element {
    let config = try_use_context::<BuilderConfig>().unwrap_or_default();
    let selected = mode == EditorMode::Editor && selected_id.as_ref() == Some(&component.id);
    let class = node_class(&component, selected, mode);
    let style = effective_style(&component).to_css();
    let content = component.content_or_empty().to_owned();
    let editing = mode == EditorMode::Editor;
    let record = component.clone();

    let body = match &component.kind {
        ComponentKind::Text => rsx! { p { style: "{style}", "{content}" } },
        ComponentKind::Heading { level } => match level.get() {
            1 => rsx! { h1 { style: "{style}", "{content}" } },
            2 => rsx! { h2 { style: "{style}", "{content}" } },
            3 => rsx! { h3 { style: "{style}", "{content}" } },
            4 => rsx! { h4 { style: "{style}", "{content}" } },
            5 => rsx! { h5 { style: "{style}", "{content}" } },
            _ => rsx! { h6 { style: "{style}", "{content}" } },
        },
        ComponentKind::Button { variant } => {
            let variant = variant.as_str();
            rsx! {
                button {
                    r#type: "button",
                    class: "page-button page-button--{variant}",
                    style: "{style}",
                    "{content}"
                }
            }
        }
        ComponentKind::Image { src, alt } => rsx! {
            img { src: "{src}", alt: "{alt}", style: "{style}", draggable: "false" }
        },
        ComponentKind::Input { placeholder, input_type } => rsx! {
            input {
                r#type: input_type.as_str(),
                placeholder: "{placeholder}",
                readonly: editing,
                style: "{style}",
            }
        },
        ComponentKind::Container { children } if editing => rsx! {
            div { style: "{style}",
                DropZone {
                    zone: ZoneId::Container(component.id.clone()),
                    empty_message: config.empty_container_message.clone(),
                    components: children.clone(),
                    selected_id: selected_id.clone(),
                    on_select: on_select,
                }
            }
        },
        ComponentKind::Container { children } => rsx! {
            div { style: "{style}",
                if children.is_empty() {
                    div { class: "empty-state", "{config.empty_container_message}" }
                }
                for child in children.iter() {
                    ComponentRenderer {
                        key: "{child.id}",
                        component: child.clone(),
                        selected_id: None,
                        mode: mode,
                        on_select: on_select,
                    }
                }
            }
        },
        ComponentKind::Link { href, new_tab } => {
            let target = if *new_tab { "_blank" } else { "_self" };
            rsx! {
                a {
                    href: "{href}",
                    target: target,
                    style: "{style}",
                    onclick: move |e: MouseEvent| {
                        if editing {
                            e.prevent_default();
                        }
                    },
                    "{content}"
                }
            }
        }
        ComponentKind::Divider => rsx! { hr { style: "{style}" } },
        ComponentKind::Unknown => {
            let message = unknown_placeholder(&component);
            rsx! { div { class: "unknown-component", role: "alert", "{message}" } }
        }
    };

    rsx! {
        div {
            class: "{class}",
            "data-component-id": "{component.id}",
            onclick: move |e: MouseEvent| {
                if editing {
                    e.stop_propagation();
                    on_select.call(record.clone());
                }
            },
            {body}
        }
    }
}
