//! The page builder: component model, rendering, editing and drag-and-drop.

pub mod component;
pub mod dnd;
pub mod drop_zone;
pub mod editor;
pub mod factory;
pub mod palette;
pub mod properties;
pub mod renderer;
pub mod shell;
pub mod state;
pub mod style;
pub mod styles_editor;
pub mod tree;

pub use shell::{App, VisualEditor};
