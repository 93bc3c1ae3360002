//! Editor state: the page tree, selection, mode and drag session.
//!
//! `EditorState` holds the logic and is plain data so it can be tested
//! without a renderer. The free functions at the bottom apply it to the
//! global signal the UI reads from.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use dioxus::prelude::*;
use tracing::{debug, info, warn};

use super::component::{Component, ComponentId, ComponentType};
use super::dnd::{DragPayload, DragSession, DropIntent, DropTarget, ZoneId};
use super::factory;
use super::tree::{PageTree, TreeError};
use crate::config::BuilderConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditorMode {
    #[default]
    Editor,
    Preview,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditorState {
    pub page: PageTree,
    pub selected_id: Option<ComponentId>,
    pub mode: EditorMode,
    pub drag: DragSession,
}

impl EditorState {
    pub fn with_page(page: PageTree) -> Self {
        Self { page, ..Self::default() }
    }

    pub fn selected(&self) -> Option<&Component> {
        self.selected_id.as_ref().and_then(|id| self.page.find(id))
    }

    /// # Errors
    ///
    /// Returns `NotFound` if `id` is not in the page.
    pub fn select(&mut self, id: &ComponentId) -> Result<(), TreeError> {
        if !self.page.contains(id) {
            return Err(TreeError::NotFound(id.clone()));
        }
        self.selected_id = Some(id.clone());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    /// Create a record and place it in the selected container, or at the
    /// end of the page when nothing (or a non-container) is selected. The
    /// new record becomes the selection.
    ///
    /// # Errors
    ///
    /// Propagates tree errors from the insertion.
    pub fn add_component(&mut self, component_type: ComponentType) -> Result<ComponentId, TreeError> {
        let parent = self
            .selected()
            .filter(|selected| selected.is_container())
            .map(|selected| selected.id.clone());
        let record = factory::create(component_type);
        let id = record.id.clone();
        self.page.insert(parent.as_ref(), None, record)?;
        self.selected_id = Some(id.clone());
        Ok(id)
    }

    /// # Errors
    ///
    /// See [`PageTree::replace`].
    pub fn update_component(&mut self, record: Component) -> Result<(), TreeError> {
        self.page.replace(record)?;
        Ok(())
    }

    /// Remove a record and its subtree. Selection is cleared when it pointed
    /// anywhere inside the removed subtree.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `id` is not in the page.
    pub fn delete_component(&mut self, id: &ComponentId) -> Result<Component, TreeError> {
        let removed = self.page.remove(id)?;
        if self.selected_id.as_ref().is_some_and(|selected| removed.subtree_contains(selected)) {
            self.selected_id = None;
        }
        Ok(removed)
    }

    /// Finish the active drag at `target`.
    ///
    /// Returns the id of the created or moved record, or `None` when no drag
    /// was active.
    ///
    /// # Errors
    ///
    /// Propagates tree errors; the page is left unchanged in that case.
    pub fn drop_on(&mut self, target: DropTarget) -> Result<Option<ComponentId>, TreeError> {
        let Some(end) = self.drag.finish(target) else {
            return Ok(None);
        };
        match end.intent() {
            DropIntent::Create { component_type, target } => {
                let record = factory::create(component_type);
                let id = record.id.clone();
                self.page.insert(target.zone.parent(), target.before.as_ref(), record)?;
                self.selected_id = Some(id.clone());
                Ok(Some(id))
            }
            DropIntent::Move { id, target } => {
                self.page.move_node(&id, target.zone.parent(), target.before.as_ref())?;
                Ok(Some(id))
            }
        }
    }

    pub fn set_mode(&mut self, mode: EditorMode) {
        self.mode = mode;
        if mode == EditorMode::Preview {
            self.drag.cancel();
        }
    }
}

/// Initial state: the bundled starter page, or an empty page if the bundled
/// configuration cannot be used.
fn initial_state() -> EditorState {
    let page = BuilderConfig::bundled()
        .and_then(|config| config.starter_tree())
        .unwrap_or_else(|err| {
            warn!(error = %err, "starter page unavailable; starting empty");
            PageTree::default()
        });
    EditorState::with_page(page)
}

pub static EDITOR_STATE: GlobalSignal<EditorState> = Signal::global(initial_state);

// =============================================================================
// ACTIONS
// =============================================================================

pub fn select_component(id: &ComponentId) {
    match EDITOR_STATE.write().select(id) {
        Ok(()) => debug!(%id, "component selected"),
        Err(err) => warn!(error = %err, "selection ignored"),
    }
}

pub fn clear_selection() {
    EDITOR_STATE.write().clear_selection();
}

pub fn add_component(component_type: ComponentType) {
    match EDITOR_STATE.write().add_component(component_type) {
        Ok(id) => info!(%id, kind = %component_type, "component added"),
        Err(err) => warn!(error = %err, kind = %component_type, "component not added"),
    }
}

pub fn update_component(record: Component) {
    let id = record.id.clone();
    match EDITOR_STATE.write().update_component(record) {
        Ok(()) => debug!(%id, "component updated"),
        Err(err) => warn!(error = %err, "update rejected"),
    }
}

pub fn delete_component(id: &ComponentId) {
    match EDITOR_STATE.write().delete_component(id) {
        Ok(removed) => info!(%id, kind = removed.kind.tag(), "component deleted"),
        Err(err) => warn!(error = %err, "delete ignored"),
    }
}

pub fn set_mode(mode: EditorMode) {
    EDITOR_STATE.write().set_mode(mode);
    debug!(?mode, "editor mode changed");
}

pub fn begin_drag(payload: DragPayload) {
    debug!(kind = %payload.component_type, origin = ?payload.origin, "drag started");
    EDITOR_STATE.write().drag.begin(payload);
}

pub fn hover_zone(zone: ZoneId) {
    {
        let state = EDITOR_STATE.read();
        if !state.drag.is_active() || state.drag.is_over(&zone) {
            return;
        }
    }
    EDITOR_STATE.write().drag.hover(zone);
}

pub fn leave_zone(zone: &ZoneId) {
    if EDITOR_STATE.read().drag.is_over(zone) {
        EDITOR_STATE.write().drag.leave(zone);
    }
}

pub fn cancel_drag() {
    if EDITOR_STATE.read().drag.is_active() {
        EDITOR_STATE.write().drag.cancel();
        debug!("drag cancelled");
    }
}

pub fn drop_on(target: DropTarget) {
    let mut state = EDITOR_STATE.write();
    match state.drop_on(target) {
        Ok(Some(id)) => {
            let parent = state.page.parent_of(&id).map_or_else(|| "root".to_owned(), ToString::to_string);
            info!(%id, %parent, "drop applied");
        }
        Ok(None) => debug!("drop without active drag"),
        Err(err) => warn!(error = %err, "drop rejected"),
    }
}
