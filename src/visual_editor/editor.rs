//! Property editing: copy-on-write edits against a working copy.
//!
//! DESIGN
//! ======
//! Each edit produces a whole new record that differs from the working copy
//! in exactly one field. The caller forwards it to the host straight away;
//! there is no commit step. The only state that is not already reflected in
//! the record is the list of custom style rows that are still incomplete
//! (no name or no value yet). Those drafts belong to the selected record and
//! are dropped when the selection moves to another record.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use super::component::{ButtonVariant, Component, ComponentKind, ComponentType, HeadingLevel, InputType};
use super::style::{css_property_name, StyleValue};

/// A change to one type-specific field.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldEdit {
    Content(String),
    HeadingLevel(HeadingLevel),
    ButtonVariant(ButtonVariant),
    ImageSrc(String),
    ImageAlt(String),
    Placeholder(String),
    InputType(InputType),
    LinkHref(String),
    LinkNewTab(bool),
}

impl FieldEdit {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Content(_) => "content",
            Self::HeadingLevel(_) => "level",
            Self::ButtonVariant(_) => "variant",
            Self::ImageSrc(_) => "src",
            Self::ImageAlt(_) => "alt",
            Self::Placeholder(_) => "placeholder",
            Self::InputType(_) => "inputType",
            Self::LinkHref(_) => "href",
            Self::LinkNewTab(_) => "newTab",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("field {field} does not apply to {component_type} components")]
    FieldNotApplicable {
        field: &'static str,
        component_type: &'static str,
    },
    #[error("no draft row at index {0}")]
    NoSuchDraft(usize),
}

/// Apply `edit` to a copy of `record`.
///
/// # Errors
///
/// Returns `FieldNotApplicable` when the record's variant has no such field.
pub fn apply_field(record: &Component, edit: FieldEdit) -> Result<Component, EditError> {
    let mut next = record.clone();
    let not_applicable = EditError::FieldNotApplicable {
        field: edit.name(),
        component_type: record.kind.tag(),
    };

    match (edit, &mut next.kind) {
        (FieldEdit::Content(text), _) => {
            if !record.component_type().is_some_and(ComponentType::has_content) {
                return Err(not_applicable);
            }
            next.content = Some(text);
        }
        (FieldEdit::HeadingLevel(value), ComponentKind::Heading { level }) => *level = value,
        (FieldEdit::ButtonVariant(value), ComponentKind::Button { variant }) => *variant = value,
        (FieldEdit::ImageSrc(value), ComponentKind::Image { src, .. }) => *src = value,
        (FieldEdit::ImageAlt(value), ComponentKind::Image { alt, .. }) => *alt = value,
        (FieldEdit::Placeholder(value), ComponentKind::Input { placeholder, .. }) => *placeholder = value,
        (FieldEdit::InputType(value), ComponentKind::Input { input_type, .. }) => *input_type = value,
        (FieldEdit::LinkHref(value), ComponentKind::Link { href, .. }) => *href = value,
        (FieldEdit::LinkNewTab(value), ComponentKind::Link { new_tab, .. }) => *new_tab = value,
        _ => return Err(not_applicable),
    }
    Ok(next)
}

/// Set one style property on a copy of `record`; a blank value removes it.
pub fn apply_style(record: &Component, property: &str, value: &str) -> Component {
    let mut next = record.clone();
    next.styles = if value.trim().is_empty() {
        record.styles.without(property)
    } else {
        record.styles.with(property, StyleValue::from(value))
    };
    next
}

/// An incomplete custom style row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleDraft {
    pub property: String,
    pub value: String,
}

impl StyleDraft {
    fn is_complete(&self) -> bool {
        !self.property.trim().is_empty() && !self.value.trim().is_empty()
    }
}

/// Result of resynchronizing with the externally selected record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncOutcome {
    Unchanged,
    /// Same record, newer contents.
    Refreshed,
    /// A different record; drafts were discarded.
    Swapped,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EditSession {
    working: Component,
    drafts: Vec<StyleDraft>,
}

impl EditSession {
    pub fn new(record: Component) -> Self {
        Self { working: record, drafts: Vec::new() }
    }

    pub fn working(&self) -> &Component {
        &self.working
    }

    pub fn drafts(&self) -> &[StyleDraft] {
        &self.drafts
    }

    pub fn sync(&mut self, selected: &Component) -> SyncOutcome {
        if self.working.id != selected.id {
            self.working = selected.clone();
            self.drafts.clear();
            SyncOutcome::Swapped
        } else if self.working != *selected {
            self.working = selected.clone();
            SyncOutcome::Refreshed
        } else {
            SyncOutcome::Unchanged
        }
    }

    /// # Errors
    ///
    /// See [`apply_field`].
    pub fn set_field(&mut self, edit: FieldEdit) -> Result<Component, EditError> {
        let next = apply_field(&self.working, edit)?;
        Ok(self.adopt(next))
    }

    pub fn set_style(&mut self, property: &str, value: &str) -> Component {
        let next = apply_style(&self.working, property, value);
        self.adopt(next)
    }

    pub fn remove_style(&mut self, property: &str) -> Component {
        let mut next = self.working.clone();
        next.styles = self.working.styles.without(property);
        self.adopt(next)
    }

    /// Rename a property, keeping its value. Renaming to a blank name moves
    /// the value into a draft row so it is not lost while the user types.
    pub fn rename_style(&mut self, from: &str, to: &str) -> Component {
        let mut next = self.working.clone();
        if let Some(value) = next.styles.remove(from) {
            if to.trim().is_empty() {
                self.drafts.push(StyleDraft { property: String::new(), value: value.to_css(&css_property_name(from)) });
            } else {
                next.styles.insert(to.trim(), value);
            }
        }
        self.adopt(next)
    }

    /// Append an empty draft row with a fresh placeholder name.
    pub fn add_draft(&mut self) -> usize {
        let mut name = "new-property".to_owned();
        let mut counter = 1;
        while self.working.styles.contains(&name) || self.drafts.iter().any(|d| d.property == name) {
            name = format!("new-property-{counter}");
            counter += 1;
        }
        self.drafts.push(StyleDraft { property: name, value: String::new() });
        self.drafts.len() - 1
    }

    /// Update a draft row. Once it has both a name and a value it is moved
    /// into the record and the new record is returned.
    ///
    /// # Errors
    ///
    /// Returns `NoSuchDraft` if `index` is out of range.
    pub fn edit_draft(
        &mut self,
        index: usize,
        property: Option<String>,
        value: Option<String>,
    ) -> Result<Option<Component>, EditError> {
        let draft = self.drafts.get_mut(index).ok_or(EditError::NoSuchDraft(index))?;
        if let Some(property) = property {
            draft.property = property;
        }
        if let Some(value) = value {
            draft.value = value;
        }
        if !draft.is_complete() {
            return Ok(None);
        }
        let draft = self.drafts.remove(index);
        Ok(Some(self.set_style(draft.property.trim(), &draft.value)))
    }

    /// # Errors
    ///
    /// Returns `NoSuchDraft` if `index` is out of range.
    pub fn discard_draft(&mut self, index: usize) -> Result<StyleDraft, EditError> {
        if index >= self.drafts.len() {
            return Err(EditError::NoSuchDraft(index));
        }
        Ok(self.drafts.remove(index))
    }

    fn adopt(&mut self, next: Component) -> Component {
        self.working = next.clone();
        next
    }
}
