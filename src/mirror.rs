//! The offscreen measurement surface.
//!
//! A [`MetricMirror`] is kept in font-metric lockstep with the visible input
//! and is fed text to learn how wide that text would render inside it. It is
//! declared inert: out of flow, invisible, zero height, unfocusable and
//! hidden from assistive technology, with whitespace preserved.

use crate::measure::{measure_styled, TextMeasurer};
use crate::style::{FontDescriptor, Priority, StyleDeclaration, StyleProperty};

/// Attributes that keep the mirror out of focus order and the accessibility tree.
pub const MIRROR_ATTRIBUTES: [(&str, &str); 2] = [("aria-hidden", "true"), ("tabindex", "-1")];

const INERT_STYLE: [(StyleProperty, &str); 4] = [
    (StyleProperty::POSITION, "absolute"),
    (StyleProperty::VISIBILITY, "hidden"),
    (StyleProperty::HEIGHT, "0"),
    (StyleProperty::WHITE_SPACE, "pre"),
];

pub struct MetricMirror<M> {
    measurer: M,
    style: StyleDeclaration,
    font: FontDescriptor,
    text: String,
    synced: bool,
    placeholder_width: f32,
}

impl<M: TextMeasurer> MetricMirror<M> {
    pub fn new(measurer: M) -> Self {
        let mut style = StyleDeclaration::new();
        for (prop, value) in INERT_STYLE {
            style.set(prop, value, Priority::Normal);
        }
        Self {
            measurer,
            style,
            font: FontDescriptor::default(),
            text: String::new(),
            synced: false,
            placeholder_width: 0.0,
        }
    }

    /// Copy font metrics from the live input and capture the placeholder baseline.
    ///
    /// Runs once; later calls return `false` and change nothing, even if the
    /// placeholder differs. Only [`StyleProperty::FONT_METRICS`] are copied,
    /// each with its priority. An absent or empty placeholder gives a
    /// baseline of zero.
    pub fn sync(&mut self, computed: &StyleDeclaration, placeholder: Option<&str>) -> bool {
        if self.synced {
            return false;
        }

        let metrics = computed.project(StyleProperty::FONT_METRICS);
        for (prop, value) in metrics.iter() {
            self.style.set(prop, value.value.clone(), value.priority);
        }
        self.font = FontDescriptor::from_style(&metrics);
        self.synced = true;
        log::debug!("mirror font metrics synced: {metrics}");

        if let Some(placeholder) = placeholder.filter(|p| !p.is_empty()) {
            self.set_text(placeholder);
            self.placeholder_width = self.offset_width();
            log::debug!(
                "placeholder {placeholder:?} measures {}px",
                self.placeholder_width
            );
        }
        true
    }

    /// Replace the measured text exactly as given.
    pub fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }

    /// Width of the current text in whole pixels, as a layout box would report it.
    pub fn offset_width(&mut self) -> f32 {
        measure_styled(&mut self.measurer, &self.text, &self.font).round()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_synced(&self) -> bool {
        self.synced
    }

    /// The cached placeholder width. Zero until synced or without a placeholder.
    pub fn placeholder_width(&self) -> f32 {
        self.placeholder_width
    }

    pub fn font(&self) -> &FontDescriptor {
        &self.font
    }

    /// The mirror's own declarations: inert presentation plus copied metrics.
    pub fn style(&self) -> &StyleDeclaration {
        &self.style
    }

    pub fn attributes(&self) -> &'static [(&'static str, &'static str)] {
        &MIRROR_ATTRIBUTES
    }

    pub fn measurer_mut(&mut self) -> &mut M {
        &mut self.measurer
    }
}
