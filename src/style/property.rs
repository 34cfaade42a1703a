use bitflags::bitflags;

bitflags! {
    /// Style properties known to the input and its measurement mirror.
    ///
    /// Each single-bit flag is one CSS-like property. Composite masks group
    /// properties that are handled together, most importantly
    /// [`StyleProperty::FONT_METRICS`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct StyleProperty: u16 {
        const FONT_FAMILY    = 1 << 0;
        const FONT_SIZE      = 1 << 1;
        const FONT_WEIGHT    = 1 << 2;
        const FONT_STYLE     = 1 << 3;
        const LETTER_SPACING = 1 << 4;
        const TEXT_TRANSFORM = 1 << 5;
        const COLOR          = 1 << 6;
        const PADDING        = 1 << 7;
        const WIDTH          = 1 << 8;
        const HEIGHT         = 1 << 9;
        const BOX_SIZING     = 1 << 10;
        const POSITION       = 1 << 11;
        const VISIBILITY     = 1 << 12;
        const WHITE_SPACE    = 1 << 13;

        /// Properties that change glyph shaping or horizontal advance.
        const FONT_METRICS = Self::FONT_FAMILY.bits()
            | Self::FONT_SIZE.bits()
            | Self::FONT_WEIGHT.bits()
            | Self::FONT_STYLE.bits()
            | Self::LETTER_SPACING.bits()
            | Self::TEXT_TRANSFORM.bits();
    }
}

const SINGLE: [(StyleProperty, &str); 14] = [
    (StyleProperty::FONT_FAMILY, "font-family"),
    (StyleProperty::FONT_SIZE, "font-size"),
    (StyleProperty::FONT_WEIGHT, "font-weight"),
    (StyleProperty::FONT_STYLE, "font-style"),
    (StyleProperty::LETTER_SPACING, "letter-spacing"),
    (StyleProperty::TEXT_TRANSFORM, "text-transform"),
    (StyleProperty::COLOR, "color"),
    (StyleProperty::PADDING, "padding"),
    (StyleProperty::WIDTH, "width"),
    (StyleProperty::HEIGHT, "height"),
    (StyleProperty::BOX_SIZING, "box-sizing"),
    (StyleProperty::POSITION, "position"),
    (StyleProperty::VISIBILITY, "visibility"),
    (StyleProperty::WHITE_SPACE, "white-space"),
];

impl StyleProperty {
    /// CSS name of a single property. Returns `None` for masks.
    pub fn css_name(self) -> Option<&'static str> {
        SINGLE
            .iter()
            .find(|(prop, _)| *prop == self)
            .map(|(_, name)| *name)
    }

    /// Look up a single property by its CSS name.
    pub fn from_css_name(name: &str) -> Option<Self> {
        let name = name.trim();
        SINGLE
            .iter()
            .find(|(_, css)| css.eq_ignore_ascii_case(name))
            .map(|(prop, _)| *prop)
    }

    /// Iterate the single properties contained in this set, in declaration order.
    pub fn properties(self) -> impl Iterator<Item = StyleProperty> {
        SINGLE
            .iter()
            .map(|(prop, _)| *prop)
            .filter(move |prop| self.contains(*prop))
    }

    /// True when exactly one property bit is set.
    pub fn is_single(self) -> bool {
        self.bits().count_ones() == 1
    }
}
