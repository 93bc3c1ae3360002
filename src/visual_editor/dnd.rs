//! Drag session glue.
//!
//! The browser's drag events do the spatial work (hit-testing, pointer
//! tracking). This module only remembers what is being dragged, where it
//! came from and which zone is currently hovered, then turns a finished drag
//! into an intent for the editor state.

#[cfg(test)]
#[path = "dnd_test.rs"]
mod dnd_test;

use super::component::{Component, ComponentId, ComponentType};

/// Where a drag started.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragOrigin {
    /// A template from the palette; dropping creates a new record.
    Palette,
    /// An existing record on the canvas; dropping moves it.
    Canvas(ComponentId),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragPayload {
    pub component_type: ComponentType,
    pub origin: DragOrigin,
}

impl DragPayload {
    pub fn from_palette(component_type: ComponentType) -> Self {
        Self { component_type, origin: DragOrigin::Palette }
    }

    /// `None` for records of unknown type, which cannot be dragged.
    pub fn from_canvas(component: &Component) -> Option<Self> {
        let component_type = component.component_type()?;
        Some(Self {
            component_type,
            origin: DragOrigin::Canvas(component.id.clone()),
        })
    }
}

/// A region that accepts drops.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ZoneId {
    Root,
    Container(ComponentId),
}

impl ZoneId {
    pub fn parent(&self) -> Option<&ComponentId> {
        match self {
            Self::Root => None,
            Self::Container(id) => Some(id),
        }
    }
}

/// Where a drop landed: a zone, optionally in front of one of its items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropTarget {
    pub zone: ZoneId,
    pub before: Option<ComponentId>,
}

impl DropTarget {
    pub fn append(zone: ZoneId) -> Self {
        Self { zone, before: None }
    }

    pub fn before(zone: ZoneId, sibling: ComponentId) -> Self {
        Self { zone, before: Some(sibling) }
    }
}

/// What the page should do with a finished drag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropIntent {
    Create { component_type: ComponentType, target: DropTarget },
    Move { id: ComponentId, target: DropTarget },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragEnd {
    pub payload: DragPayload,
    pub target: DropTarget,
}

impl DragEnd {
    pub fn intent(self) -> DropIntent {
        match self.payload.origin {
            DragOrigin::Palette => DropIntent::Create {
                component_type: self.payload.component_type,
                target: self.target,
            },
            DragOrigin::Canvas(id) => DropIntent::Move { id, target: self.target },
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragSession {
    active: Option<DragPayload>,
    over: Option<ZoneId>,
}

impl DragSession {
    pub fn begin(&mut self, payload: DragPayload) {
        self.active = Some(payload);
        self.over = None;
    }

    pub fn active(&self) -> Option<&DragPayload> {
        self.active.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn hover(&mut self, zone: ZoneId) {
        if self.active.is_some() {
            self.over = Some(zone);
        }
    }

    /// Clear hover, but only if `zone` is the one currently hovered.
    pub fn leave(&mut self, zone: &ZoneId) {
        if self.over.as_ref() == Some(zone) {
            self.over = None;
        }
    }

    pub fn is_over(&self, zone: &ZoneId) -> bool {
        self.over.as_ref() == Some(zone)
    }

    /// End the drag at `target`. `None` if nothing was being dragged.
    pub fn finish(&mut self, target: DropTarget) -> Option<DragEnd> {
        self.over = None;
        let payload = self.active.take()?;
        Some(DragEnd { payload, target })
    }

    pub fn cancel(&mut self) {
        self.active = None;
        self.over = None;
    }
}
