//! Parsers for the computed-style text of font metric properties.

use thiserror::Error;

/// Points to CSS pixels.
const PX_PER_PT: f32 = 4.0 / 3.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StyleParseError {
    #[error("invalid length `{0}`")]
    InvalidLength(String),
    #[error("`{0}` is relative to the font size, which is unknown here")]
    RelativeLength(String),
    #[error("invalid font weight `{0}`")]
    InvalidWeight(String),
    #[error("unknown font style `{0}`")]
    UnknownFontStyle(String),
    #[error("unknown text transform `{0}`")]
    UnknownTextTransform(String),
    #[error("empty font family list")]
    EmptyFamily,
}

/// Parse a length into pixels.
///
/// Accepts `px`, `pt`, bare numbers (pixels) and, when `font_size` is
/// known, `em`.
pub fn parse_length(text: &str, font_size: Option<f32>) -> Result<f32, StyleParseError> {
    let text = text.trim();
    let invalid = || StyleParseError::InvalidLength(text.to_string());

    let (number, scale) = if let Some(n) = text.strip_suffix("px") {
        (n, 1.0)
    } else if let Some(n) = text.strip_suffix("pt") {
        (n, PX_PER_PT)
    } else if let Some(n) = text.strip_suffix("em") {
        let size = font_size.ok_or_else(|| StyleParseError::RelativeLength(text.to_string()))?;
        (n, size)
    } else {
        (text, 1.0)
    };

    let value: f32 = number.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value * scale)
}

/// Parse a `font-size`. Negative sizes are rejected.
pub fn parse_font_size(text: &str) -> Result<f32, StyleParseError> {
    let size = parse_length(text, None)?;
    if size < 0.0 {
        return Err(StyleParseError::InvalidLength(text.trim().to_string()));
    }
    Ok(size)
}

/// Parse a `letter-spacing`. `normal` is zero.
pub fn parse_letter_spacing(text: &str, font_size: f32) -> Result<f32, StyleParseError> {
    if text.trim().eq_ignore_ascii_case("normal") {
        return Ok(0.0);
    }
    parse_length(text, Some(font_size))
}

/// Split a `font-family` list and return its first entry with quotes removed.
pub fn first_family(text: &str) -> Result<&str, StyleParseError> {
    text.split(',')
        .map(|name| name.trim().trim_matches(|c| c == '"' || c == '\''))
        .find(|name| !name.is_empty())
        .ok_or(StyleParseError::EmptyFamily)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths() {
        assert_eq!(parse_length("16px", None), Ok(16.0));
        assert_eq!(parse_length(" 12 ", None), Ok(12.0));
        assert_eq!(parse_length("12pt", None), Ok(16.0));
        assert_eq!(parse_length("0.5em", Some(20.0)), Ok(10.0));
        assert_eq!(parse_length("-1px", None), Ok(-1.0));
    }

    #[test]
    fn em_without_font_size_is_rejected() {
        assert_eq!(
            parse_length("1em", None),
            Err(StyleParseError::RelativeLength("1em".into()))
        );
    }

    #[test]
    fn garbage_lengths_are_rejected() {
        assert!(parse_length("wide", None).is_err());
        assert!(parse_length("inf", None).is_err());
        assert!(parse_font_size("-2px").is_err());
    }

    #[test]
    fn letter_spacing_normal_is_zero() {
        assert_eq!(parse_letter_spacing("normal", 16.0), Ok(0.0));
        assert_eq!(parse_letter_spacing("0.125em", 16.0), Ok(2.0));
    }

    #[test]
    fn family_list() {
        assert_eq!(first_family("\"Helvetica Neue\", Arial"), Ok("Helvetica Neue"));
        assert_eq!(first_family(" , 'Inter'"), Ok("Inter"));
        assert_eq!(first_family(" , "), Err(StyleParseError::EmptyFamily));
    }
}
