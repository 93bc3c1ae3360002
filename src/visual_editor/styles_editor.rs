//! Free-form style rows: every property without a dedicated field in the
//! properties panel, plus rows the user is still filling in.

#[cfg(test)]
#[path = "styles_editor_test.rs"]
mod styles_editor_test;

use dioxus::prelude::*;
use tracing::warn;

use super::component::Component;
use super::editor::EditSession;
use super::properties::STYLE_FIELDS;
use super::style::StyleObject;
use crate::ui::{Button, Tone};

/// Properties shown as free-form rows, in display order.
pub fn custom_rows(styles: &StyleObject) -> Vec<(String, String)> {
    styles
        .iter()
        .filter(|(property, _)| !STYLE_FIELDS.iter().any(|field| field.property == property.as_str()))
        .map(|(property, value)| (property.clone(), value.to_css(property)))
        .collect()
}

#[component]
pub fn StyleInput(session: Signal<EditSession>, on_update: EventHandler<Component>) -> Element {
    let mut session = session;
    let (rows, drafts) = {
        let current = session.read();
        (custom_rows(&current.working().styles), current.drafts().to_vec())
    };

    rsx! {
        div { class: "styles-editor",
            for (property, value) in rows {
                StyleRow {
                    key: "{property}",
                    property: property,
                    value: value,
                    session: session,
                    on_update: on_update,
                }
            }
            for (index, draft) in drafts.into_iter().enumerate() {
                div { key: "draft-{index}", class: "styles-editor__row styles-editor__row--draft",
                    input {
                        class: "styles-editor__key",
                        placeholder: "property",
                        value: "{draft.property}",
                        onchange: move |e: FormEvent| edit_draft(session, on_update, index, Some(e.value()), None),
                    }
                    input {
                        class: "styles-editor__value",
                        placeholder: "value",
                        value: "{draft.value}",
                        onchange: move |e: FormEvent| edit_draft(session, on_update, index, None, Some(e.value())),
                    }
                    Button {
                        tone: Tone::Ghost,
                        onclick: move |_| {
                            if let Err(err) = session.write().discard_draft(index) {
                                warn!(error = %err, "draft discard ignored");
                            }
                        },
                        "X"
                    }
                }
            }
            div { class: "styles-editor__actions",
                Button {
                    tone: Tone::Secondary,
                    onclick: move |_| {
                        session.write().add_draft();
                    },
                    "Add style"
                }
            }
        }
    }
}

#[component]
fn StyleRow(
    property: String,
    value: String,
    session: Signal<EditSession>,
    on_update: EventHandler<Component>,
) -> Element {
    let mut session = session;
    let renamed_from = property.clone();
    let edited = property.clone();
    let removed = property.clone();

    rsx! {
        div { class: "styles-editor__row",
            input {
                class: "styles-editor__key",
                value: "{property}",
                onchange: move |e: FormEvent| {
                    let updated = session.write().rename_style(&renamed_from, &e.value());
                    on_update.call(updated);
                },
            }
            input {
                class: "styles-editor__value",
                value: "{value}",
                oninput: move |e: FormEvent| {
                    let updated = session.write().set_style(&edited, &e.value());
                    on_update.call(updated);
                },
            }
            Button {
                tone: Tone::Ghost,
                onclick: move |_| {
                    let updated = session.write().remove_style(&removed);
                    on_update.call(updated);
                },
                "X"
            }
        }
    }
}

fn edit_draft(
    mut session: Signal<EditSession>,
    on_update: EventHandler<Component>,
    index: usize,
    property: Option<String>,
    value: Option<String>,
) {
    let result = session.write().edit_draft(index, property, value);
    match result {
        Ok(Some(updated)) => on_update.call(updated),
        Ok(None) => {}
        Err(err) => warn!(error = %err, "draft edit ignored"),
    }
}
