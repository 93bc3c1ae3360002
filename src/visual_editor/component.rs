//! Component records: the nodes of the page tree.
//!
//! DESIGN
//! ======
//! A record is a tagged union keyed by `type`. `ComponentType` is the bare
//! tag used by the palette and factory; `ComponentKind` carries the
//! variant-specific data. Containers own their children directly, so the
//! tree has single ownership and no back-references.

#[cfg(test)]
#[path = "component_test.rs"]
mod component_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::style::StyleObject;

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Unique identifier of a component within a page tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(String);

impl ComponentId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for ComponentId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

// =============================================================================
// COMPONENT TYPE (TAG)
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComponentType {
    Text,
    Heading,
    Button,
    Image,
    Input,
    Container,
    Link,
    Divider,
}

impl ComponentType {
    /// Every creatable variant, in palette order.
    pub const ALL: [ComponentType; 8] = [
        Self::Heading,
        Self::Text,
        Self::Button,
        Self::Image,
        Self::Input,
        Self::Link,
        Self::Divider,
        Self::Container,
    ];

    /// Wire tag, as stored in the `type` field.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Heading => "HEADING",
            Self::Button => "BUTTON",
            Self::Image => "IMAGE",
            Self::Input => "INPUT",
            Self::Container => "CONTAINER",
            Self::Link => "LINK",
            Self::Divider => "DIVIDER",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Heading => "Heading",
            Self::Button => "Button",
            Self::Image => "Image",
            Self::Input => "Input",
            Self::Container => "Container",
            Self::Link => "Link",
            Self::Divider => "Divider",
        }
    }

    pub fn is_container(self) -> bool {
        self == Self::Container
    }

    /// Whether records of this type display a `content` string.
    pub fn has_content(self) -> bool {
        matches!(self, Self::Text | Self::Heading | Self::Button | Self::Link)
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A tag outside the fixed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown component type: {0:?}")]
pub struct UnknownComponentType(pub String);

impl FromStr for ComponentType {
    type Err = UnknownComponentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|ty| ty.tag().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownComponentType(s.to_owned()))
    }
}

// =============================================================================
// VARIANT FIELDS
// =============================================================================

/// Heading level, always within `1..=6`.
///
/// Deserialization clamps out-of-range levels instead of rejecting the
/// record; [`HeadingLevel::new`] stays strict for edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct HeadingLevel(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("heading level must be between 1 and 6, got {0}")]
pub struct InvalidHeadingLevel(pub u8);

impl HeadingLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    pub fn new(level: u8) -> Result<Self, InvalidHeadingLevel> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(InvalidHeadingLevel(level))
        }
    }

    /// Nearest valid level to `level`.
    pub fn clamped(level: i64) -> Self {
        let level = level.clamp(i64::from(Self::MIN), i64::from(Self::MAX));
        Self(u8::try_from(level).unwrap_or(Self::MIN))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for HeadingLevel {
    fn default() -> Self {
        Self(2)
    }
}

impl From<i64> for HeadingLevel {
    fn from(value: i64) -> Self {
        Self::clamped(value)
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.0
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Danger,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 4] = [Self::Primary, Self::Secondary, Self::Outline, Self::Danger];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
            Self::Danger => "danger",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == value)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    #[default]
    Text,
    Email,
    Password,
    Number,
    Tel,
    Url,
}

impl InputType {
    pub const ALL: [InputType; 6] = [
        Self::Text,
        Self::Email,
        Self::Password,
        Self::Number,
        Self::Tel,
        Self::Url,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Tel => "tel",
            Self::Url => "url",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == value)
    }
}

// =============================================================================
// RECORDS
// =============================================================================

/// Variant-specific data of a component record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentKind {
    Text,
    Heading {
        #[serde(default)]
        level: HeadingLevel,
    },
    Button {
        #[serde(default)]
        variant: ButtonVariant,
    },
    Image {
        #[serde(default = "default_image_src")]
        src: String,
        #[serde(default)]
        alt: String,
    },
    Input {
        #[serde(default)]
        placeholder: String,
        #[serde(default, rename = "inputType")]
        input_type: InputType,
    },
    Container {
        #[serde(default)]
        children: Vec<Component>,
    },
    Link {
        #[serde(default = "default_href")]
        href: String,
        #[serde(default, rename = "newTab")]
        new_tab: bool,
    },
    Divider,
    /// Any `type` outside the enumeration. Only produced by deserialization.
    #[serde(other)]
    Unknown,
}

fn default_image_src() -> String {
    super::factory::PLACEHOLDER_IMAGE_SRC.to_owned()
}

fn default_href() -> String {
    "#".to_owned()
}

impl ComponentKind {
    /// `None` for [`ComponentKind::Unknown`].
    pub fn component_type(&self) -> Option<ComponentType> {
        let ty = match self {
            Self::Text => ComponentType::Text,
            Self::Heading { .. } => ComponentType::Heading,
            Self::Button { .. } => ComponentType::Button,
            Self::Image { .. } => ComponentType::Image,
            Self::Input { .. } => ComponentType::Input,
            Self::Container { .. } => ComponentType::Container,
            Self::Link { .. } => ComponentType::Link,
            Self::Divider => ComponentType::Divider,
            Self::Unknown => return None,
        };
        Some(ty)
    }

    pub fn tag(&self) -> &'static str {
        self.component_type().map_or("UNKNOWN", ComponentType::tag)
    }
}

/// One node of the page tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: ComponentId,
    #[serde(flatten)]
    pub kind: ComponentKind,
    #[serde(default)]
    pub styles: StyleObject,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Component {
    pub fn component_type(&self) -> Option<ComponentType> {
        self.kind.component_type()
    }

    pub fn label(&self) -> &'static str {
        self.component_type().map_or("Unknown", ComponentType::label)
    }

    pub fn is_container(&self) -> bool {
        matches!(self.kind, ComponentKind::Container { .. })
    }

    /// Children in stored order; empty for non-container variants.
    pub fn children(&self) -> &[Component] {
        match &self.kind {
            ComponentKind::Container { children } => children,
            _ => &[],
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Component>> {
        match &mut self.kind {
            ComponentKind::Container { children } => Some(children),
            _ => None,
        }
    }

    pub fn content_or_empty(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }

    /// Ids of this record and all of its descendants, depth first.
    pub fn subtree_ids(&self) -> Vec<ComponentId> {
        let mut ids = Vec::new();
        collect_ids(self, &mut ids);
        ids
    }

    /// Whether `id` names this record or one of its descendants.
    pub fn subtree_contains(&self, id: &ComponentId) -> bool {
        self.id == *id || self.children().iter().any(|child| child.subtree_contains(id))
    }
}

fn collect_ids(component: &Component, out: &mut Vec<ComponentId>) {
    out.push(component.id.clone());
    for child in component.children() {
        collect_ids(child, out);
    }
}
