use std::collections::BTreeMap;

use crate::resolver::{WidthBounds, DEFAULT_MAX_WIDTH, DEFAULT_MIN_WIDTH};
use crate::style::StyleDeclaration;

/// Construction-time options for an [`AutosizeInput`](super::AutosizeInput).
#[derive(Debug, Clone)]
pub struct AutosizeConfig {
    pub min_width: f32,
    /// Ceiling before the caret padding is added.
    pub max_width: f32,
    /// Fixed width written instead of the resolved one. Negative values are
    /// written as zero.
    pub width: Option<f32>,
    pub placeholder: Option<String>,
    /// Extra class appended to the input's base class.
    pub class_name: Option<String>,
    /// Inline style declarations, applied after `box-sizing: content-box`.
    pub style: StyleDeclaration,
    /// Attributes forwarded verbatim to the element.
    pub attributes: BTreeMap<String, String>,
}

impl Default for AutosizeConfig {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_WIDTH,
            max_width: DEFAULT_MAX_WIDTH,
            width: None,
            placeholder: None,
            class_name: None,
            style: StyleDeclaration::new(),
            attributes: BTreeMap::new(),
        }
    }
}

impl AutosizeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_width(mut self, min_width: f32) -> Self {
        self.min_width = min_width;
        self
    }

    pub fn max_width(mut self, max_width: f32) -> Self {
        self.max_width = max_width;
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn style(mut self, style: StyleDeclaration) -> Self {
        self.style = style;
        self
    }

    /// Forward an attribute to the element, e.g. `disabled` or `type`.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn bounds(&self) -> WidthBounds {
        WidthBounds::new(self.min_width, self.max_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AutosizeConfig::default();
        assert_eq!(config.min_width, 60.0);
        assert_eq!(config.max_width, 600.0);
        assert!(config.width.is_none());
        assert!(config.placeholder.is_none());
    }

    #[test]
    fn builder_sets_fields() {
        let config = AutosizeConfig::new()
            .min_width(40.0)
            .max_width(300.0)
            .placeholder("Search")
            .attribute("type", "search");

        assert_eq!(config.bounds(), WidthBounds::new(40.0, 300.0));
        assert_eq!(config.placeholder.as_deref(), Some("Search"));
        assert_eq!(config.attributes.get("type").map(String::as_str), Some("search"));
    }
}
