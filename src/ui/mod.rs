//! Presentational primitives shared by the editor panels.
//!
//! These know nothing about components or the page tree; they take plain
//! values and report changes through callbacks.

pub mod button;
pub mod input;
pub mod panel;

pub use button::{Button, Tone};
pub use input::{CheckboxField, ColorField, SelectField, SelectOption, TextField};
pub use panel::Panel;
