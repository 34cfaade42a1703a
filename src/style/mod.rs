//! Style declarations, the font metric properties the mirror copies, and the
//! font descriptor measurement runs against.

pub mod declaration;
pub mod font;
pub mod parse;
pub mod property;

pub use declaration::{Priority, StyleDeclaration, StyleValue};
pub use font::{FontDescriptor, FontFamily, FontStyle, FontWeight, TextTransform, DEFAULT_FONT_SIZE};
pub use parse::StyleParseError;
pub use property::StyleProperty;
