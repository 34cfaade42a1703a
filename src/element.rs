//! The visible input as seen by the sizing logic.
//!
//! [`InputElement`] is the imperative handle the control writes its width
//! through. It deliberately bypasses whatever declarative styling the host
//! uses so a width lands in the same update as the value that produced it.

use std::collections::BTreeMap;

use crate::style::{parse::parse_length, Priority, StyleDeclaration, StyleProperty};

/// Handle onto the live input element.
pub trait InputElement {
    /// Whether the element is attached to a document and can be measured.
    fn is_attached(&self) -> bool;

    /// The element's resolved style. `None` while detached.
    fn computed_style(&self) -> Option<StyleDeclaration>;

    /// Write an inline style declaration immediately.
    fn set_style(&mut self, prop: StyleProperty, value: &str, priority: Priority);

    /// Set an attribute verbatim.
    fn set_attribute(&mut self, name: &str, value: &str);
}

impl<E: InputElement + ?Sized> InputElement for &mut E {
    fn is_attached(&self) -> bool {
        (**self).is_attached()
    }

    fn computed_style(&self) -> Option<StyleDeclaration> {
        (**self).computed_style()
    }

    fn set_style(&mut self, prop: StyleProperty, value: &str, priority: Priority) {
        (**self).set_style(prop, value, priority)
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        (**self).set_attribute(name, value)
    }
}

/// In-memory input element.
///
/// Holds a base stylesheet, an inline style and an attribute map. The
/// computed style is the stylesheet with the inline style cascaded on top.
#[derive(Debug, Clone, Default)]
pub struct InputNode {
    stylesheet: StyleDeclaration,
    inline: StyleDeclaration,
    attributes: BTreeMap<String, String>,
    attached: bool,
}

impl InputNode {
    /// A detached node with no styles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `stylesheet` as the cascade base for the computed style.
    pub fn with_stylesheet(mut self, stylesheet: StyleDeclaration) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Builder form of [`attach`](Self::attach).
    pub fn attached(mut self) -> Self {
        self.attached = true;
        self
    }

    pub fn attach(&mut self) {
        self.attached = true;
    }

    pub fn detach(&mut self) {
        self.attached = false;
    }

    pub fn stylesheet_mut(&mut self) -> &mut StyleDeclaration {
        &mut self.stylesheet
    }

    pub fn inline_style(&self) -> &StyleDeclaration {
        &self.inline
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// The inline `width` in pixels, if one has been written.
    pub fn width_px(&self) -> Option<f32> {
        let width = self.inline.value(StyleProperty::WIDTH)?;
        parse_length(width, None).ok()
    }
}

impl InputElement for InputNode {
    fn is_attached(&self) -> bool {
        self.attached
    }

    fn computed_style(&self) -> Option<StyleDeclaration> {
        if !self.attached {
            return None;
        }
        let mut computed = self.stylesheet.clone();
        computed.overlay(&self.inline);
        Some(computed)
    }

    fn set_style(&mut self, prop: StyleProperty, value: &str, priority: Priority) {
        self.inline.set(prop, value, priority);
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }
}
