//! Drag-and-drop page builder.
//!
//! Pages are trees of [`visual_editor::component::Component`] records that
//! the canvas renders recursively. Components are created from the palette,
//! arranged by dragging them between drop zones, and edited in the
//! properties panel.

pub mod config;
pub mod ui;
pub mod visual_editor;
