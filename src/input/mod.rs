//! The auto-sizing input control.
//!
//! On mount the control copies font metrics from the live element into its
//! [`MetricMirror`] and measures the placeholder once. Every value change
//! then measures the new text in the mirror and writes the resolved width
//! onto the element, in that order and within the same call.

mod bound;
mod config;

pub use bound::BoundInput;
pub use config::AutosizeConfig;

use crate::element::InputElement;
use crate::measure::TextMeasurer;
use crate::mirror::MetricMirror;
use crate::reactive::Signal;
use crate::resolver::{apply_width, non_negative, resolve_width};
use crate::style::{Priority, StyleProperty};

/// Class every auto-sizing input carries.
pub const BASE_CLASS: &str = "autowidth-input";

pub struct AutosizeInput<E, M> {
    element: E,
    mirror: MetricMirror<M>,
    config: AutosizeConfig,
    value: String,
    mounted: bool,
    content_width: f32,
    resolved_width: Option<f32>,
}

impl<E: InputElement, M: TextMeasurer> AutosizeInput<E, M> {
    /// Prepare `element` and wrap it. Nothing is measured until [`mount`](Self::mount).
    pub fn new(
        mut element: E,
        measurer: M,
        value: impl Into<String>,
        config: AutosizeConfig,
    ) -> Self {
        let value = value.into();

        // Caller style comes after box-sizing and may override it.
        element.set_style(StyleProperty::BOX_SIZING, "content-box", Priority::Normal);
        for (prop, declared) in config.style.iter() {
            element.set_style(prop, &declared.value, declared.priority);
        }

        let class = match &config.class_name {
            Some(extra) => format!("{BASE_CLASS} {extra}"),
            None => BASE_CLASS.to_string(),
        };
        element.set_attribute("class", &class);
        if let Some(placeholder) = &config.placeholder {
            element.set_attribute("placeholder", placeholder);
        }
        for (name, attr) in &config.attributes {
            element.set_attribute(name, attr);
        }
        element.set_attribute("value", &value);

        Self {
            element,
            mirror: MetricMirror::new(measurer),
            config,
            value,
            mounted: false,
            content_width: 0.0,
            resolved_width: None,
        }
    }

    /// Mark the control as mounted and run the first update.
    pub fn mount(&mut self) -> Option<f32> {
        self.mounted = true;
        self.refresh()
    }

    /// Stop reacting to value changes. The last written width stays in place.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Replace the value and, once mounted, resize to fit it.
    pub fn set_value(&mut self, value: impl Into<String>) -> Option<f32> {
        self.value = value.into();
        self.element.set_attribute("value", &self.value);
        self.refresh()
    }

    /// Forward a new placeholder to the element.
    ///
    /// The width baseline captured at mount is kept as is; it is not
    /// re-measured for the new text.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        let placeholder = placeholder.into();
        self.element.set_attribute("placeholder", &placeholder);
        self.config.placeholder = Some(placeholder);
    }

    /// Run one update: sync font metrics if still pending, measure the
    /// current value, then write the width.
    ///
    /// Returns the width written, or `None` when the control is unmounted or
    /// the element is detached. Safe to call any number of times.
    pub fn refresh(&mut self) -> Option<f32> {
        if !self.mounted || !self.element.is_attached() {
            return None;
        }

        if !self.mirror.is_synced() {
            if let Some(computed) = self.element.computed_style() {
                self.mirror.sync(&computed, self.config.placeholder.as_deref());
            }
        }

        self.mirror.set_text(&self.value);

        self.content_width = self.mirror.offset_width();

        let width = match self.config.width {
            Some(fixed) => non_negative(fixed),
            None => resolve_width(
                self.content_width,
                self.mirror.placeholder_width(),
                self.config.bounds(),
            ),
        };

        if apply_width(&mut self.element, width) {
            self.resolved_width = Some(width);
        }
        self.resolved_width
    }

    /// Drive the value from a signal. See [`BoundInput`].
    pub fn bind(self, value: Signal<String>) -> BoundInput<E, M>
    where
        E: 'static,
        M: 'static,
    {
        BoundInput::new(self, value)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// The last width written onto the element.
    pub fn resolved_width(&self) -> Option<f32> {
        self.resolved_width
    }

    /// Width of the value as last measured.
    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    pub fn placeholder_width(&self) -> f32 {
        self.mirror.placeholder_width()
    }

    pub fn config(&self) -> &AutosizeConfig {
        &self.config
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn element_mut(&mut self) -> &mut E {
        &mut self.element
    }

    pub fn mirror(&self) -> &MetricMirror<M> {
        &self.mirror
    }

    pub fn into_element(self) -> E {
        self.element
    }
}
