//! A text input that grows and shrinks to fit its content.
//!
//! The input's width is resolved from the rendered width of its value,
//! measured with the input's own font metrics on an invisible
//! [`MetricMirror`](mirror::MetricMirror), and clamped between a minimum and
//! a maximum. It never gets narrower than its placeholder.
//!
//! ```ignore
//! use autowidth::prelude::*;
//!
//! let value = create_signal(String::new());
//! let input = AutosizeInput::new(
//!     InputNode::new().attached(),
//!     SharedCosmicMeasurer,
//!     "",
//!     AutosizeConfig::new().placeholder("Search"),
//! )
//! .bind(value.clone());
//!
//! value.set("a longer query".into());
//! println!("{:?}", input.resolved_width());
//! ```

pub mod element;
pub mod input;
pub mod measure;
pub mod mirror;
pub mod reactive;
pub mod resolver;
pub mod style;

pub mod prelude {
    pub use crate::element::{InputElement, InputNode};
    pub use crate::input::{AutosizeConfig, AutosizeInput, BoundInput};
    pub use crate::measure::{
        CosmicMeasurer, FixedAdvanceMeasurer, SharedCosmicMeasurer, TextMeasurer,
    };
    pub use crate::reactive::{batch, create_effect, create_signal, Effect, Signal};
    pub use crate::resolver::{resolve_width, WidthBounds, FIXED_PADDING};
    pub use crate::style::{
        FontDescriptor, FontFamily, FontStyle, FontWeight, Priority, StyleDeclaration,
        StyleProperty, TextTransform,
    };
}
