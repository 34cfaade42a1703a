//! Text measurement.
//!
//! A [`TextMeasurer`] turns a string plus a [`FontDescriptor`] into the pixel
//! width the string occupies on one line. Implementations only report glyph
//! advances; [`measure_styled`] layers `text-transform` and `letter-spacing`
//! on top so every backend treats those the same way.

mod cosmic;
mod fixed;

pub use cosmic::{measure_text_width, CosmicMeasurer, SharedCosmicMeasurer};
pub use fixed::FixedAdvanceMeasurer;

use crate::style::FontDescriptor;

/// Measures single-line text width with a given font.
///
/// Whitespace must never be collapsed: `"a  b"` is wider than `"a b"`, and
/// trailing spaces count.
pub trait TextMeasurer {
    /// Sum of glyph advances for `text` shaped with `font`, in pixels.
    fn advance_width(&mut self, text: &str, font: &FontDescriptor) -> f32;
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &mut M {
    fn advance_width(&mut self, text: &str, font: &FontDescriptor) -> f32 {
        (**self).advance_width(text, font)
    }
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for Box<M> {
    fn advance_width(&mut self, text: &str, font: &FontDescriptor) -> f32 {
        (**self).advance_width(text, font)
    }
}

/// Width of `text` with the full font descriptor applied.
///
/// The text transform runs before shaping; letter spacing is added once per
/// character afterwards. The result is never negative.
pub fn measure_styled<M: TextMeasurer + ?Sized>(
    measurer: &mut M,
    text: &str,
    font: &FontDescriptor,
) -> f32 {
    if text.is_empty() {
        return 0.0;
    }
    let text = font.text_transform.apply(text);
    let advance = measurer.advance_width(&text, font);
    let spacing = font.letter_spacing * text.chars().count() as f32;
    (advance + spacing).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::TextTransform;

    #[test]
    fn empty_text_is_zero() {
        let mut measurer = FixedAdvanceMeasurer::new(10.0);
        let font = FontDescriptor::default().letter_spacing(3.0);
        assert_eq!(measure_styled(&mut measurer, "", &font), 0.0);
    }

    #[test]
    fn letter_spacing_after_every_character() {
        let mut measurer = FixedAdvanceMeasurer::new(10.0);
        let font = FontDescriptor::default().letter_spacing(2.0);
        assert_eq!(measure_styled(&mut measurer, "abc", &font), 36.0);
    }

    #[test]
    fn negative_spacing_never_goes_below_zero() {
        let mut measurer = FixedAdvanceMeasurer::new(1.0);
        let font = FontDescriptor::default().letter_spacing(-5.0);
        assert_eq!(measure_styled(&mut measurer, "ab", &font), 0.0);
    }

    #[test]
    fn transform_applies_before_measuring() {
        let mut measurer = FixedAdvanceMeasurer::new(8.0).with_advance('A', 12.0);
        let plain = FontDescriptor::default();
        let upper = FontDescriptor::default().text_transform(TextTransform::Uppercase);
        assert_eq!(measure_styled(&mut measurer, "aa", &plain), 16.0);
        assert_eq!(measure_styled(&mut measurer, "aa", &upper), 24.0);
    }

    #[test]
    fn boxed_measurer_delegates() {
        let mut measurer: Box<dyn TextMeasurer> = Box::new(FixedAdvanceMeasurer::new(5.0));
        assert_eq!(
            measure_styled(&mut measurer, "abcd", &FontDescriptor::default()),
            20.0
        );
    }
}
