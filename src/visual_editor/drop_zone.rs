//! Drop zones: the canvas root and the body of every container in editor
//! mode.
//!
//! A zone highlights while a drag hovers it and lists its placed records,
//! each with a drag handle. Where exactly a drop lands is decided by the
//! browser's hit-testing; the zone only reports which zone, and which item
//! if the drop happened on one, to the editor state.

use dioxus::prelude::*;

use super::component::{Component, ComponentId};
use super::dnd::{DragPayload, DropTarget, ZoneId};
use super::renderer::ComponentRenderer;
use super::state::{begin_drag, cancel_drag, drop_on, hover_zone, leave_zone, EditorMode, EDITOR_STATE};

fn zone_class(zone: &ZoneId, hovered: bool, dragging: bool) -> String {
    let mut class = match zone {
        ZoneId::Root => "drop-zone drop-zone--root".to_owned(),
        ZoneId::Container(_) => "drop-zone drop-zone--nested".to_owned(),
    };
    if dragging {
        class.push_str(" drop-zone--armed");
    }
    if hovered {
        class.push_str(" drop-zone--over");
    }
    class
}

#[component]
pub fn DropZone(
    zone: ZoneId,
    #[props(default)] label: String,
    empty_message: String,
    components: Vec<Component>,
    #[props(!optional)] selected_id: Option<ComponentId>,
    on_select: EventHandler<Component>,
) -> Element {
    let (hovered, dragging) = {
        let state = EDITOR_STATE.read();
        (state.drag.is_over(&zone), state.drag.is_active())
    };
    let class = zone_class(&zone, hovered, dragging);
    let over = zone.clone();
    let left = zone.clone();
    let dropped = zone.clone();

    rsx! {
        div {
            class: "{class}",
            ondragover: move |e: DragEvent| {
                e.prevent_default();
                e.stop_propagation();
                hover_zone(over.clone());
            },
            ondragleave: move |_| leave_zone(&left),
            ondrop: move |e: DragEvent| {
                e.prevent_default();
                e.stop_propagation();
                drop_on(DropTarget::append(dropped.clone()));
            },
            if !label.is_empty() {
                div { class: "drop-zone__label", "{label}" }
            }
            if components.is_empty() {
                div { class: "drop-zone__empty empty-state", "{empty_message}" }
            }
            for component in components.iter() {
                PlacedItem {
                    key: "{component.id}",
                    zone: zone.clone(),
                    component: component.clone(),
                    selected_id: selected_id.clone(),
                    on_select: on_select,
                }
            }
        }
    }
}

/// One placed record inside a zone: highlight, drag handle, then the record.
#[component]
fn PlacedItem(
    zone: ZoneId,
    component: Component,
    #[props(!optional)] selected_id: Option<ComponentId>,
    on_select: EventHandler<Component>,
) -> Element {
    let selected = selected_id.as_ref() == Some(&component.id);
    let payload = DragPayload::from_canvas(&component);
    let draggable = payload.is_some();
    let class = if selected { "placed-item placed-item--selected" } else { "placed-item" };
    let anchor = component.id.clone();
    let label = component.label();

    rsx! {
        div {
            class: "{class}",
            draggable: "{draggable}",
            ondragstart: move |e: DragEvent| {
                e.stop_propagation();
                if let Some(payload) = payload.clone() {
                    begin_drag(payload);
                }
            },
            ondragend: move |_| cancel_drag(),
            ondrop: move |e: DragEvent| {
                e.prevent_default();
                e.stop_propagation();
                drop_on(DropTarget::before(zone.clone(), anchor.clone()));
            },
            if draggable {
                span { class: "placed-item__handle", title: "Drag to move {label}", "⠿" }
            }
            ComponentRenderer {
                component: component.clone(),
                selected_id: selected_id.clone(),
                mode: EditorMode::Editor,
                on_select: on_select,
            }
        }
    }
}
