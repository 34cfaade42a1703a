use std::cell::RefCell;

use cosmic_text::{Attrs, Buffer, FontSystem, Metrics, Shaping};

use super::TextMeasurer;
use crate::style::FontDescriptor;

/// Line height relative to font size. Only used to size the shaping buffer.
const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// Measures text by shaping it with cosmic-text.
pub struct CosmicMeasurer {
    font_system: FontSystem,
}

impl CosmicMeasurer {
    /// Create a measurer backed by the system's installed fonts.
    pub fn new() -> Self {
        Self {
            font_system: FontSystem::new(),
        }
    }

    /// Use a pre-populated font system, e.g. one with application fonts loaded.
    pub fn with_font_system(font_system: FontSystem) -> Self {
        Self { font_system }
    }

    pub fn font_system_mut(&mut self) -> &mut FontSystem {
        &mut self.font_system
    }

    /// Shape `text` and return its widest line.
    ///
    /// The width is the far edge of the last glyph rather than the wrapped
    /// line width, so trailing spaces are counted.
    pub fn shape_width(&mut self, text: &str, font: &FontDescriptor) -> f32 {
        if text.is_empty() || font.size <= 0.0 {
            return 0.0;
        }

        let metrics = Metrics::new(font.size, font.size * LINE_HEIGHT_FACTOR);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        buffer.set_size(&mut self.font_system, None, None);

        let attrs = Attrs::new()
            .family(font.family.to_cosmic())
            .weight(font.weight.to_cosmic())
            .style(font.style.to_cosmic());
        buffer.set_text(&mut self.font_system, text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(&mut self.font_system, true);

        let mut width = 0.0f32;
        for run in buffer.layout_runs() {
            let run_width = run
                .glyphs
                .iter()
                .map(|glyph| glyph.x + glyph.w)
                .fold(run.line_w, f32::max);
            width = width.max(run_width);
        }
        width
    }
}

impl Default for CosmicMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for CosmicMeasurer {
    fn advance_width(&mut self, text: &str, font: &FontDescriptor) -> f32 {
        self.shape_width(text, font)
    }
}

thread_local! {
    static SHARED_MEASURER: RefCell<Option<CosmicMeasurer>> = const { RefCell::new(None) };
}

/// Measure text width with the thread's shared font system.
///
/// The font system is loaded on first use and reused by every control on
/// this thread.
pub fn measure_text_width(text: &str, font: &FontDescriptor) -> f32 {
    SHARED_MEASURER.with_borrow_mut(|shared| {
        shared
            .get_or_insert_with(CosmicMeasurer::new)
            .shape_width(text, font)
    })
}

/// A [`TextMeasurer`] handle onto the thread-local cosmic-text font system.
///
/// Cheap to create; many controls can share one loaded font database.
#[derive(Debug, Clone, Copy, Default)]
pub struct SharedCosmicMeasurer;

impl TextMeasurer for SharedCosmicMeasurer {
    fn advance_width(&mut self, text: &str, font: &FontDescriptor) -> f32 {
        measure_text_width(text, font)
    }
}
