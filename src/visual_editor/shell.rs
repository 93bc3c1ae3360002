use dioxus::prelude::*;

use super::component::{Component, ComponentId};
use super::dnd::ZoneId;
use super::drop_zone::DropZone;
use super::palette::Palette;
use super::properties::PropertyEditor;
use super::renderer::ComponentRenderer;
use super::state::{
    clear_selection, delete_component, select_component, set_mode, update_component, EditorMode,
    EDITOR_STATE,
};
use crate::config::BuilderConfig;
use crate::ui::{Button, Panel, Tone};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    use_context_provider(|| BuilderConfig::bundled().unwrap_or_default());

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        VisualEditor {}
    }
}

#[component]
pub fn VisualEditor() -> Element {
    let config = use_context::<BuilderConfig>();
    let (mode, roots, selected_id, selected, count) = {
        let state = EDITOR_STATE.read();
        (
            state.mode,
            state.page.roots().to_vec(),
            state.selected_id.clone(),
            state.selected().cloned(),
            state.page.len(),
        )
    };
    let editing = mode == EditorMode::Editor;
    let (editor_tone, preview_tone) = if editing {
        (Tone::Primary, Tone::Secondary)
    } else {
        (Tone::Secondary, Tone::Primary)
    };
    let canvas_label = format!("{} · {count} components", config.canvas_label);

    let properties = match selected {
        Some(record) => rsx! {
            PropertyEditor {
                key: "{record.id}",
                record: record.clone(),
                on_update: move |updated: Component| update_component(updated),
                on_delete: move |id: ComponentId| delete_component(&id),
            }
        },
        None => rsx! {
            p { class: "properties__empty", "Select a component" }
        },
    };

    rsx! {
        div { class: "visual-editor",
            aside { class: "toolbox",
                Panel { title: "Components",
                    div { class: "mode-toggle",
                        Button {
                            tone: editor_tone,
                            active: editing,
                            onclick: move |_| set_mode(EditorMode::Editor),
                            "Editor"
                        }
                        Button {
                            tone: preview_tone,
                            active: !editing,
                            onclick: move |_| set_mode(EditorMode::Preview),
                            "Preview"
                        }
                    }
                    if editing {
                        Palette {}
                        p { class: "toolbox__hint",
                            "Drag a component onto the page, or click it to add it to the selected container."
                        }
                    }
                }
            }

            main {
                class: "canvas-wrapper",
                onclick: move |_| clear_selection(),
                if editing {
                    DropZone {
                        zone: ZoneId::Root,
                        label: canvas_label,
                        empty_message: config.empty_canvas_message.clone(),
                        components: roots,
                        selected_id: selected_id,
                        on_select: move |record: Component| select_component(&record.id),
                    }
                } else {
                    div { class: "preview-canvas",
                        for root in roots {
                            ComponentRenderer {
                                key: "{root.id}",
                                component: root.clone(),
                                selected_id: None,
                                mode: EditorMode::Preview,
                                on_select: move |_: Component| {},
                            }
                        }
                    }
                }
            }

            if editing {
                aside { class: "properties",
                    Panel { title: "Properties", {properties} }
                }
            }
        }
    }
}
