use std::collections::HashMap;

use super::TextMeasurer;
use crate::style::{FontDescriptor, DEFAULT_FONT_SIZE};

/// Measures text by summing a per-character advance table.
///
/// Advances are given for [`DEFAULT_FONT_SIZE`] and scale linearly with the
/// descriptor's font size. Family, weight and style are ignored. Useful for
/// terminals, fixed-pitch fonts and deterministic tests.
#[derive(Debug, Clone)]
pub struct FixedAdvanceMeasurer {
    default_advance: f32,
    advances: HashMap<char, f32>,
}

impl FixedAdvanceMeasurer {
    /// Every character advances by `default_advance` pixels at the default size.
    pub fn new(default_advance: f32) -> Self {
        Self {
            default_advance,
            advances: HashMap::new(),
        }
    }

    /// Override the advance of a single character.
    pub fn with_advance(mut self, c: char, advance: f32) -> Self {
        self.advances.insert(c, advance);
        self
    }

    fn advance_of(&self, c: char) -> f32 {
        if c.is_control() {
            return 0.0;
        }
        self.advances
            .get(&c)
            .copied()
            .unwrap_or(self.default_advance)
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn advance_width(&mut self, text: &str, font: &FontDescriptor) -> f32 {
        let scale = font.size / DEFAULT_FONT_SIZE;
        text.chars().map(|c| self.advance_of(c)).sum::<f32>() * scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_advances() {
        let mut m = FixedAdvanceMeasurer::new(10.0).with_advance(' ', 4.0);
        assert_eq!(m.advance_width("a b", &FontDescriptor::default()), 24.0);
    }

    #[test]
    fn space_runs_are_not_collapsed() {
        let mut m = FixedAdvanceMeasurer::new(10.0).with_advance(' ', 4.0);
        let font = FontDescriptor::default();
        assert!(m.advance_width("   ", &font) > m.advance_width(" ", &font));
        assert_eq!(m.advance_width("a  ", &font), 18.0);
    }

    #[test]
    fn scales_with_font_size() {
        let mut m = FixedAdvanceMeasurer::new(10.0);
        let font = FontDescriptor::default().size(32.0);
        assert_eq!(m.advance_width("ab", &font), 40.0);
    }

    #[test]
    fn control_characters_have_no_advance() {
        let mut m = FixedAdvanceMeasurer::new(10.0);
        assert_eq!(m.advance_width("a\u{7}", &FontDescriptor::default()), 10.0);
    }
}
