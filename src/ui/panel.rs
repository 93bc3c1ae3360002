use dioxus::prelude::*;

/// Titled side-panel section.
#[component]
pub fn Panel(title: String, #[props(default)] class: String, children: Element) -> Element {
    rsx! {
        section { class: "panel {class}",
            h2 { class: "panel__title", "{title}" }
            div { class: "panel__body", {children} }
        }
    }
}
