//! Labelled form fields.
//!
//! Text-like fields report on every keystroke; selects and checkboxes report
//! on change.

use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into() }
    }
}

#[component]
pub fn TextField(
    label: String,
    value: String,
    #[props(default)] placeholder: String,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        label { class: "field",
            span { class: "field__label", "{label}" }
            input {
                class: "field__input",
                r#type: "text",
                value: "{value}",
                placeholder: "{placeholder}",
                oninput: move |e: FormEvent| on_input.call(e.value()),
            }
        }
    }
}

/// Colour picker paired with a free-text input, so values such as
/// `transparent` or `rgba(...)` can still be typed.
#[component]
pub fn ColorField(label: String, value: String, on_input: EventHandler<String>) -> Element {
    let swatch = if is_hex_color(&value) { value.clone() } else { "#000000".to_owned() };
    rsx! {
        label { class: "field field--color",
            span { class: "field__label", "{label}" }
            div { class: "field__row",
                input {
                    class: "field__swatch",
                    r#type: "color",
                    value: "{swatch}",
                    oninput: move |e: FormEvent| on_input.call(e.value()),
                }
                input {
                    class: "field__input",
                    r#type: "text",
                    value: "{value}",
                    oninput: move |e: FormEvent| on_input.call(e.value()),
                }
            }
        }
    }
}

#[component]
pub fn SelectField(
    label: String,
    value: String,
    options: Vec<SelectOption>,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        label { class: "field",
            span { class: "field__label", "{label}" }
            select {
                class: "field__input",
                onchange: move |e: FormEvent| on_change.call(e.value()),
                for choice in options.iter() {
                    option {
                        key: "{choice.value}",
                        value: "{choice.value}",
                        selected: choice.value == value,
                        "{choice.label}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn CheckboxField(label: String, checked: bool, on_change: EventHandler<bool>) -> Element {
    rsx! {
        label { class: "field field--inline",
            input {
                r#type: "checkbox",
                checked: checked,
                onchange: move |e: FormEvent| on_change.call(e.checked()),
            }
            span { class: "field__label", "{label}" }
        }
    }
}

/// `#rrggbb`, the only form an `<input type="color">` accepts.
fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}
