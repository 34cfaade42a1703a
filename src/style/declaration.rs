use std::collections::BTreeMap;
use std::fmt;

use super::property::StyleProperty;

/// Importance flag carried alongside every declared value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Priority {
    #[default]
    Normal,
    /// `!important`
    Important,
}

/// A declared value plus its priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleValue {
    pub value: String,
    pub priority: Priority,
}

/// An ordered set of property declarations.
///
/// Used both for inline styles written onto an element and for the computed
/// style read back from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDeclaration {
    entries: BTreeMap<StyleProperty, StyleValue>,
}

impl StyleDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`set`](Self::set) with normal priority.
    pub fn with(mut self, prop: StyleProperty, value: impl Into<String>) -> Self {
        self.set(prop, value, Priority::Normal);
        self
    }

    /// Builder form of [`set`](Self::set) with `!important` priority.
    pub fn important(mut self, prop: StyleProperty, value: impl Into<String>) -> Self {
        self.set(prop, value, Priority::Important);
        self
    }

    /// Declare `prop`, replacing any previous value. `prop` must be a single
    /// property; masks are ignored.
    pub fn set(&mut self, prop: StyleProperty, value: impl Into<String>, priority: Priority) {
        if !prop.is_single() {
            log::warn!("ignoring style write to property mask {prop:?}");
            return;
        }
        self.entries.insert(
            prop,
            StyleValue {
                value: value.into(),
                priority,
            },
        );
    }

    pub fn get(&self, prop: StyleProperty) -> Option<&StyleValue> {
        self.entries.get(&prop)
    }

    /// The declared value text, without its priority.
    pub fn value(&self, prop: StyleProperty) -> Option<&str> {
        self.entries.get(&prop).map(|v| v.value.as_str())
    }

    pub fn priority(&self, prop: StyleProperty) -> Option<Priority> {
        self.entries.get(&prop).map(|v| v.priority)
    }

    pub fn remove(&mut self, prop: StyleProperty) -> Option<StyleValue> {
        self.entries.remove(&prop)
    }

    pub fn contains(&self, prop: StyleProperty) -> bool {
        self.entries.contains_key(&prop)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, &StyleValue)> {
        self.entries.iter().map(|(prop, value)| (*prop, value))
    }

    /// The set of properties declared here.
    pub fn properties(&self) -> StyleProperty {
        self.entries
            .keys()
            .fold(StyleProperty::empty(), |acc, prop| acc | *prop)
    }

    /// Cascade `other` on top of `self`.
    ///
    /// An incoming normal declaration does not replace an existing
    /// important one.
    pub fn overlay(&mut self, other: &StyleDeclaration) {
        for (prop, incoming) in other.iter() {
            let keep_existing = matches!(
                (self.priority(prop), incoming.priority),
                (Some(Priority::Important), Priority::Normal)
            );
            if !keep_existing {
                self.entries.insert(prop, incoming.clone());
            }
        }
    }

    /// Copy of the declarations whose property is in `mask`, priorities kept.
    pub fn project(&self, mask: StyleProperty) -> StyleDeclaration {
        StyleDeclaration {
            entries: self
                .entries
                .iter()
                .filter(|(prop, _)| mask.contains(**prop))
                .map(|(prop, value)| (*prop, value.clone()))
                .collect(),
        }
    }
}

impl fmt::Display for StyleDeclaration {
    /// Formats as an inline `style` attribute, e.g. `width: 70px; color: red !important`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (prop, value) in self.iter() {
            let Some(name) = prop.css_name() else {
                continue;
            };
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            write!(f, "{name}: {}", value.value)?;
            if value.priority == Priority::Important {
                f.write_str(" !important")?;
            }
        }
        Ok(())
    }
}
