//! Style objects: flat property/value maps attached to every component.
//!
//! Keys are open-ended and stored as CSS property names: `backgroundColor`
//! and `background-color` are the same key. Consumers apply their own
//! defaults for absent keys, usually through [`StyleObject::merged_over`].

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Properties whose numeric values are emitted without a `px` suffix.
const UNITLESS: &[&str] = &[
    "opacity",
    "font-weight",
    "line-height",
    "z-index",
    "flex",
    "flex-grow",
    "flex-shrink",
    "order",
];

/// A single style value. Numbers are kept apart from text so `px` can be
/// appended at emission time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Text(String),
}

impl StyleValue {
    /// CSS text for this value when assigned to `property`.
    pub fn to_css(&self, property: &str) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(n) if UNITLESS.contains(&property) => format_number(*n),
            Self::Number(n) => format!("{}px", format_number(*n)),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(text) if text.trim().is_empty())
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(n) => f.write_str(&format_number(*n)),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        #[allow(clippy::cast_possible_truncation)]
        let whole = n as i64;
        whole.to_string()
    } else {
        n.to_string()
    }
}

/// Ordered mapping from style property name to value.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StyleObject(BTreeMap<String, StyleValue>);

impl StyleObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.0.get(&*css_property_name(property))
    }

    /// The value as it is emitted in CSS, so `16` on `padding` reads `16px`.
    /// Editors show this text so saving it back does not change the result.
    pub fn css_value(&self, property: &str) -> Option<String> {
        let property = css_property_name(property);
        self.0.get(&*property).map(|value| value.to_css(&property))
    }

    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<StyleValue>) {
        self.0.insert(normalized(property.into()), value.into());
    }

    pub fn remove(&mut self, property: &str) -> Option<StyleValue> {
        self.0.remove(&*css_property_name(property))
    }

    /// Copy with one property set.
    #[must_use]
    pub fn with(&self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        let mut next = self.clone();
        next.insert(property, value);
        next
    }

    /// Copy with one property removed.
    #[must_use]
    pub fn without(&self, property: &str) -> Self {
        let mut next = self.clone();
        next.remove(property);
        next
    }

    /// Explicit values in `self` override `defaults`; keys absent from both
    /// stay absent.
    #[must_use]
    pub fn merged_over(&self, defaults: &StyleObject) -> Self {
        let mut merged = defaults.clone();
        for (property, value) in &self.0 {
            merged.0.insert(property.clone(), value.clone());
        }
        merged
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &StyleValue)> {
        self.0.iter()
    }

    pub fn contains(&self, property: &str) -> bool {
        self.0.contains_key(&*css_property_name(property))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Inline `style` attribute text, e.g. `color: red; padding: 8px;`.
    pub fn to_css(&self) -> String {
        self.0
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(property, value)| format!("{property}: {};", value.to_css(property)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<K, V> FromIterator<(K, V)> for StyleObject
where
    K: Into<String>,
    V: Into<StyleValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (normalized(k.into()), v.into())).collect())
    }
}

impl<'de> Deserialize<'de> for StyleObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, StyleValue>::deserialize(deserializer)?;
        Ok(raw.into_iter().collect())
    }
}

fn normalized(property: String) -> String {
    if property.chars().any(|c| c.is_ascii_uppercase()) {
        css_property_name(&property).into_owned()
    } else {
        property
    }
}

/// `backgroundColor` becomes `background-color`; kebab-case passes through.
pub fn css_property_name(property: &str) -> Cow<'_, str> {
    if !property.chars().any(|c| c.is_ascii_uppercase()) {
        return Cow::Borrowed(property);
    }
    let mut out = String::with_capacity(property.len() + 4);
    for c in property.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}
