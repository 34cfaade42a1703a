//! Font types describing everything that affects how wide a run of text is.
//!
//! [`FontDescriptor`] is what a [`TextMeasurer`](crate::measure::TextMeasurer)
//! receives; it is derived from the font metric declarations copied off the
//! live input.

use std::borrow::Cow;
use std::str::FromStr;

use cosmic_text::{Family, Style, Weight};

use super::declaration::StyleDeclaration;
use super::parse::{first_family, parse_font_size, parse_letter_spacing, StyleParseError};
use super::property::StyleProperty;

/// Default font size in pixels when none is declared.
pub const DEFAULT_FONT_SIZE: f32 = 16.0;

/// Font family specification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    #[default]
    SansSerif,
    Serif,
    Monospace,
    Cursive,
    Fantasy,
    /// Custom font by name
    Name(String),
}

impl FontFamily {
    /// Convert to cosmic-text Family type for shaping.
    pub fn to_cosmic(&self) -> Family<'_> {
        match self {
            FontFamily::SansSerif => Family::SansSerif,
            FontFamily::Serif => Family::Serif,
            FontFamily::Monospace => Family::Monospace,
            FontFamily::Cursive => Family::Cursive,
            FontFamily::Fantasy => Family::Fantasy,
            FontFamily::Name(name) => Family::Name(name),
        }
    }
}

impl FromStr for FontFamily {
    type Err = StyleParseError;

    /// Parses a `font-family` list; only the first entry is used.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = first_family(s)?;
        Ok(match name.to_ascii_lowercase().as_str() {
            "sans-serif" | "system-ui" => FontFamily::SansSerif,
            "serif" => FontFamily::Serif,
            "monospace" => FontFamily::Monospace,
            "cursive" => FontFamily::Cursive,
            "fantasy" => FontFamily::Fantasy,
            _ => FontFamily::Name(name.to_string()),
        })
    }
}

/// Font weight on the CSS 1-1000 scale; the named constants cover 100-900.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const THIN: Self = Self(100);
    pub const LIGHT: Self = Self(300);
    pub const NORMAL: Self = Self(400);
    pub const MEDIUM: Self = Self(500);
    pub const SEMI_BOLD: Self = Self(600);
    pub const BOLD: Self = Self(700);
    pub const BLACK: Self = Self(900);

    /// Convert to cosmic-text Weight type for shaping.
    pub fn to_cosmic(self) -> Weight {
        Weight(self.0)
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl FromStr for FontWeight {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "normal" => Ok(Self::NORMAL),
            "bold" | "bolder" => Ok(Self::BOLD),
            "lighter" => Ok(Self::THIN),
            numeric => match numeric.parse::<u16>() {
                Ok(weight @ 1..=1000) => Ok(Self(weight)),
                _ => Err(StyleParseError::InvalidWeight(s.to_string())),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

impl FontStyle {
    pub fn to_cosmic(self) -> Style {
        match self {
            FontStyle::Normal => Style::Normal,
            FontStyle::Italic => Style::Italic,
            FontStyle::Oblique => Style::Oblique,
        }
    }
}

impl FromStr for FontStyle {
    type Err = StyleParseError;

    /// Accepts `normal`, `italic` and `oblique` with an optional angle.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let keyword = s.split_whitespace().next().unwrap_or_default();
        match keyword.to_ascii_lowercase().as_str() {
            "normal" => Ok(FontStyle::Normal),
            "italic" => Ok(FontStyle::Italic),
            "oblique" => Ok(FontStyle::Oblique),
            _ => Err(StyleParseError::UnknownFontStyle(s.trim().to_string())),
        }
    }
}

/// Case mapping applied to text before it is shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextTransform {
    #[default]
    None,
    Uppercase,
    Lowercase,
    Capitalize,
}

impl TextTransform {
    /// Apply the case mapping. Borrows when nothing changes.
    pub fn apply<'a>(self, text: &'a str) -> Cow<'a, str> {
        match self {
            TextTransform::None => Cow::Borrowed(text),
            TextTransform::Uppercase => Cow::Owned(text.to_uppercase()),
            TextTransform::Lowercase => Cow::Owned(text.to_lowercase()),
            TextTransform::Capitalize => {
                let mut out = String::with_capacity(text.len());
                let mut word_start = true;
                for c in text.chars() {
                    if word_start && c.is_alphanumeric() {
                        out.extend(c.to_uppercase());
                    } else {
                        out.push(c);
                    }
                    word_start = c.is_whitespace();
                }
                Cow::Owned(out)
            }
        }
    }
}

impl FromStr for TextTransform {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(TextTransform::None),
            "uppercase" => Ok(TextTransform::Uppercase),
            "lowercase" => Ok(TextTransform::Lowercase),
            "capitalize" => Ok(TextTransform::Capitalize),
            _ => Err(StyleParseError::UnknownTextTransform(s.trim().to_string())),
        }
    }
}

/// The resolved font metrics a piece of text is measured with.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    pub family: FontFamily,
    /// Pixels
    pub size: f32,
    pub weight: FontWeight,
    pub style: FontStyle,
    /// Extra advance after every character, in pixels. May be negative.
    pub letter_spacing: f32,
    pub text_transform: TextTransform,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            family: FontFamily::default(),
            size: DEFAULT_FONT_SIZE,
            weight: FontWeight::default(),
            style: FontStyle::default(),
            letter_spacing: 0.0,
            text_transform: TextTransform::default(),
        }
    }
}

impl FontDescriptor {
    pub fn family(mut self, family: FontFamily) -> Self {
        self.family = family;
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    pub fn letter_spacing(mut self, spacing: f32) -> Self {
        self.letter_spacing = spacing;
        self
    }

    pub fn text_transform(mut self, transform: TextTransform) -> Self {
        self.text_transform = transform;
        self
    }

    /// Build a descriptor from font metric declarations.
    ///
    /// Missing properties keep their defaults. Values that fail to parse are
    /// logged and also fall back to the default.
    pub fn from_style(style: &StyleDeclaration) -> Self {
        let defaults = Self::default();

        let size = read(style, StyleProperty::FONT_SIZE, parse_font_size).unwrap_or(defaults.size);
        let letter_spacing = read(style, StyleProperty::LETTER_SPACING, |v| {
            parse_letter_spacing(v, size)
        })
        .unwrap_or(defaults.letter_spacing);

        Self {
            family: read(style, StyleProperty::FONT_FAMILY, str::parse).unwrap_or(defaults.family),
            size,
            weight: read(style, StyleProperty::FONT_WEIGHT, str::parse).unwrap_or(defaults.weight),
            style: read(style, StyleProperty::FONT_STYLE, str::parse).unwrap_or(defaults.style),
            letter_spacing,
            text_transform: read(style, StyleProperty::TEXT_TRANSFORM, str::parse)
                .unwrap_or(defaults.text_transform),
        }
    }
}

fn read<T>(
    style: &StyleDeclaration,
    prop: StyleProperty,
    parse: impl FnOnce(&str) -> Result<T, StyleParseError>,
) -> Option<T> {
    let value = style.value(prop)?;
    match parse(value) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            log::warn!(
                "{}: {err}, using default",
                prop.css_name().unwrap_or("style")
            );
            None
        }
    }
}
