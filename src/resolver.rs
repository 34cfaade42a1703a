//! Turning measured widths into the width written onto the input.

use crate::element::InputElement;
use crate::style::{Priority, StyleProperty};

/// Room reserved past the measured text for the caret, in pixels.
pub const FIXED_PADDING: f32 = 10.0;
pub const DEFAULT_MIN_WIDTH: f32 = 60.0;
pub const DEFAULT_MAX_WIDTH: f32 = 600.0;

/// Minimum and maximum width, in pixels.
///
/// Negative values are raised to zero. `min <= max` is the caller's
/// responsibility; an inverted pair yields a wrong width but never panics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthBounds {
    min: f32,
    max: f32,
}

impl WidthBounds {
    pub fn new(min: f32, max: f32) -> Self {
        Self {
            min: non_negative(min),
            max: non_negative(max),
        }
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }
}

impl Default for WidthBounds {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_WIDTH, DEFAULT_MAX_WIDTH)
    }
}

pub(crate) fn non_negative(value: f32) -> f32 {
    // NaN also ends up as zero
    value.max(0.0)
}

/// `min(max, max(content, placeholder, min)) + FIXED_PADDING`
pub fn resolve_width(content_width: f32, placeholder_width: f32, bounds: WidthBounds) -> f32 {
    let wanted = content_width.max(placeholder_width).max(bounds.min);
    wanted.min(bounds.max) + FIXED_PADDING
}

/// Write `width` onto the element's inline style. Skipped while detached.
///
/// Returns whether the write happened.
pub fn apply_width<E: InputElement + ?Sized>(element: &mut E, width: f32) -> bool {
    if !element.is_attached() {
        return false;
    }
    log::trace!("input width -> {width}px");
    element.set_style(StyleProperty::WIDTH, &format!("{width}px"), Priority::Normal);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::InputNode;

    fn bounds() -> WidthBounds {
        WidthBounds::new(60.0, 600.0)
    }

    #[test]
    fn test_content_above_min() {
        assert_eq!(resolve_width(200.0, 0.0, bounds()), 210.0);
    }

    #[test]
    fn test_min_floor() {
        assert_eq!(resolve_width(20.0, 0.0, bounds()), 70.0);
    }

    #[test]
    fn test_placeholder_floor() {
        assert_eq!(resolve_width(0.0, 95.0, bounds()), 105.0);
    }

    #[test]
    fn test_max_clamp() {
        assert_eq!(resolve_width(820.0, 0.0, bounds()), 610.0);
        assert_eq!(resolve_width(595.0, 0.0, bounds()), 605.0);
        assert_eq!(resolve_width(0.0, 900.0, bounds()), 610.0);
    }

    #[test]
    fn test_resolution_is_monotonic_and_bounded() {
        let mut last = 0.0;
        for content in (0..2000).step_by(7) {
            let width = resolve_width(content as f32, 0.0, bounds());
            assert!(width >= last);
            assert!((70.0..=610.0).contains(&width));
            last = width;
        }
    }

    #[test]
    fn test_idempotent() {
        let a = resolve_width(123.0, 45.0, bounds());
        let b = resolve_width(123.0, 45.0, bounds());
        assert_eq!(a, b);
    }

    #[test]
    fn test_negative_bounds_raised_to_zero() {
        let bounds = WidthBounds::new(-5.0, -1.0);
        assert_eq!(bounds.min(), 0.0);
        assert_eq!(bounds.max(), 0.0);
        assert_eq!(resolve_width(50.0, 0.0, bounds), FIXED_PADDING);
    }

    #[test]
    fn test_inverted_bounds_do_not_panic() {
        let width = resolve_width(10.0, 0.0, WidthBounds::new(500.0, 100.0));
        assert_eq!(width, 110.0);
    }

    #[test]
    fn test_apply_width_writes_inline_style() {
        let mut node = InputNode::new().attached();
        assert!(apply_width(&mut node, 70.0));
        assert_eq!(node.inline_style().value(StyleProperty::WIDTH), Some("70px"));
    }

    #[test]
    fn test_apply_width_skips_detached() {
        let mut node = InputNode::new();
        assert!(!apply_width(&mut node, 70.0));
        assert_eq!(node.width_px(), None);
    }
}
