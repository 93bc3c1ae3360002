//! Properties panel for the selected component.
//!
//! Holds an `EditSession` for the selected record. Every change goes to
//! `on_update` with the full replacement record as soon as it happens; the
//! parent keys this component by record id, so selecting another record
//! starts from a fresh session.

use dioxus::prelude::*;
use tracing::{debug, warn};

use super::component::{ButtonVariant, Component, ComponentId, ComponentKind, HeadingLevel, InputType};
use super::editor::{EditSession, FieldEdit, SyncOutcome};
use super::styles_editor::StyleInput;
use crate::ui::{Button, CheckboxField, ColorField, SelectField, SelectOption, TextField, Tone};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleFieldKind {
    Text,
    Color,
    Choice(&'static [&'static str]),
}

/// A style property with a dedicated input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleField {
    pub property: &'static str,
    pub label: &'static str,
    pub kind: StyleFieldKind,
}

pub const STYLE_FIELDS: &[StyleField] = &[
    StyleField { property: "color", label: "Text color", kind: StyleFieldKind::Color },
    StyleField { property: "background-color", label: "Background", kind: StyleFieldKind::Color },
    StyleField { property: "font-size", label: "Font size", kind: StyleFieldKind::Text },
    StyleField {
        property: "font-weight",
        label: "Font weight",
        kind: StyleFieldKind::Choice(&["", "300", "400", "500", "600", "700", "800"]),
    },
    StyleField {
        property: "text-align",
        label: "Text align",
        kind: StyleFieldKind::Choice(&["", "left", "center", "right", "justify"]),
    },
    StyleField { property: "margin", label: "Margin", kind: StyleFieldKind::Text },
    StyleField { property: "padding", label: "Padding", kind: StyleFieldKind::Text },
    StyleField { property: "border-radius", label: "Border radius", kind: StyleFieldKind::Text },
    StyleField { property: "width", label: "Width", kind: StyleFieldKind::Text },
];

#[component]
pub fn PropertyEditor(
    record: ReadOnlySignal<Component>,
    on_update: EventHandler<Component>,
    on_delete: EventHandler<ComponentId>,
) -> Element {
    let mut session = use_signal(|| EditSession::new(record.peek().clone()));

    use_effect(move || {
        let selected = record.read().clone();
        if session.peek().working() == &selected {
            return;
        }
        if session.write().sync(&selected) == SyncOutcome::Swapped {
            debug!(id = %selected.id, "property editor switched record");
        }
    });

    let working = session.read().working().clone();
    let id = working.id.clone();
    let type_label = working.label();
    let delete = rsx! {
        div { class: "property-editor__danger",
            Button {
                tone: Tone::Danger,
                full_width: true,
                onclick: move |_| on_delete.call(id.clone()),
                "Delete Component"
            }
        }
    };

    let Some(component_type) = working.component_type() else {
        return rsx! {
            div { class: "property-editor",
                p { class: "property-editor__notice", "This component has an unknown type and cannot be edited." }
                {delete}
            }
        };
    };

    let content_field = component_type.has_content().then(|| {
        let content = working.content_or_empty().to_owned();
        rsx! {
            TextField {
                label: "Content",
                value: content,
                on_input: move |text: String| commit_field(session, on_update, FieldEdit::Content(text)),
            }
        }
    });

    rsx! {
        div { class: "property-editor",
            header { class: "property-editor__header",
                h3 { "{type_label}" }
                code { class: "property-editor__id", "{working.id}" }
            }

            section { class: "property-editor__section",
                h4 { "Settings" }
                {content_field}
                {variant_fields(&working.kind, session, on_update)}
            }

            section { class: "property-editor__section",
                h4 { "Styles" }
                for field in STYLE_FIELDS.iter().copied() {
                    {style_field(field, &working, session, on_update)}
                }
            }

            section { class: "property-editor__section",
                h4 { "Custom properties" }
                StyleInput { session: session, on_update: on_update }
            }

            {delete}
        }
    }
}

fn commit_field(mut session: Signal<EditSession>, on_update: EventHandler<Component>, edit: FieldEdit) {
    let result = session.write().set_field(edit);
    match result {
        Ok(updated) => on_update.call(updated),
        Err(err) => warn!(error = %err, "field edit rejected"),
    }
}

fn commit_style(mut session: Signal<EditSession>, on_update: EventHandler<Component>, property: &str, value: &str) {
    let updated = session.write().set_style(property, value);
    on_update.call(updated);
}

fn variant_fields(kind: &ComponentKind, session: Signal<EditSession>, on_update: EventHandler<Component>) -> Element {
    match kind {
        ComponentKind::Heading { level } => {
            let options = (HeadingLevel::MIN..=HeadingLevel::MAX)
                .map(|n| SelectOption::new(n.to_string(), format!("H{n}")))
                .collect::<Vec<_>>();
            rsx! {
                SelectField {
                    label: "Level",
                    value: level.to_string(),
                    options: options,
                    on_change: move |raw: String| {
                        match raw.parse::<u8>().ok().and_then(|n| HeadingLevel::new(n).ok()) {
                            Some(level) => commit_field(session, on_update, FieldEdit::HeadingLevel(level)),
                            None => warn!(value = %raw, "invalid heading level"),
                        }
                    },
                }
            }
        }
        ComponentKind::Button { variant } => {
            let options = ButtonVariant::ALL
                .into_iter()
                .map(|v| SelectOption::new(v.as_str(), v.as_str()))
                .collect::<Vec<_>>();
            rsx! {
                SelectField {
                    label: "Variant",
                    value: variant.as_str().to_owned(),
                    options: options,
                    on_change: move |raw: String| {
                        if let Some(variant) = ButtonVariant::parse(&raw) {
                            commit_field(session, on_update, FieldEdit::ButtonVariant(variant));
                        }
                    },
                }
            }
        }
        ComponentKind::Image { src, alt } => rsx! {
            TextField {
                label: "Image URL",
                value: src.clone(),
                on_input: move |text: String| commit_field(session, on_update, FieldEdit::ImageSrc(text)),
            }
            TextField {
                label: "Alt text",
                value: alt.clone(),
                on_input: move |text: String| commit_field(session, on_update, FieldEdit::ImageAlt(text)),
            }
        },
        ComponentKind::Input { placeholder, input_type } => {
            let options = InputType::ALL
                .into_iter()
                .map(|t| SelectOption::new(t.as_str(), t.as_str()))
                .collect::<Vec<_>>();
            rsx! {
                TextField {
                    label: "Placeholder",
                    value: placeholder.clone(),
                    on_input: move |text: String| commit_field(session, on_update, FieldEdit::Placeholder(text)),
                }
                SelectField {
                    label: "Input type",
                    value: input_type.as_str().to_owned(),
                    options: options,
                    on_change: move |raw: String| {
                        if let Some(input_type) = InputType::parse(&raw) {
                            commit_field(session, on_update, FieldEdit::InputType(input_type));
                        }
                    },
                }
            }
        }
        ComponentKind::Link { href, new_tab } => rsx! {
            TextField {
                label: "URL",
                value: href.clone(),
                on_input: move |text: String| commit_field(session, on_update, FieldEdit::LinkHref(text)),
            }
            CheckboxField {
                label: "Open in new tab",
                checked: *new_tab,
                on_change: move |checked: bool| commit_field(session, on_update, FieldEdit::LinkNewTab(checked)),
            }
        },
        ComponentKind::Text | ComponentKind::Container { .. } | ComponentKind::Divider | ComponentKind::Unknown => {
            rsx! {}
        }
    }
}

fn style_field(
    field: StyleField,
    working: &Component,
    session: Signal<EditSession>,
    on_update: EventHandler<Component>,
) -> Element {
    let value = working.styles.css_value(field.property).unwrap_or_default();
    let on_value = move |value: String| commit_style(session, on_update, field.property, &value);

    match field.kind {
        StyleFieldKind::Text => rsx! {
            TextField {
                key: "{field.property}",
                label: field.label.to_owned(),
                value: value,
                on_input: on_value,
            }
        },
        StyleFieldKind::Color => rsx! {
            ColorField {
                key: "{field.property}",
                label: field.label.to_owned(),
                value: value,
                on_input: on_value,
            }
        },
        StyleFieldKind::Choice(choices) => {
            let options = choices
                .iter()
                .map(|choice| {
                    let label = if choice.is_empty() { "Default" } else { choice };
                    SelectOption::new(*choice, label)
                })
                .collect::<Vec<_>>();
            rsx! {
                SelectField {
                    key: "{field.property}",
                    label: field.label.to_owned(),
                    value: value,
                    options: options,
                    on_change: on_value,
                }
            }
        }
    }
}
