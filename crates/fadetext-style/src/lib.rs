#![forbid(unsafe_code)]

//! Style types for FadeText.
//!
//! - [`Style`] - cell-level colors and flags used when painting
//! - [`TextStyle`] - the typographic attributes a caller sets on text
//! - [`first_set`] / [`resolve_color`] - layered, first-match-wins resolution
//! - [`FadeGradient`] and [`FadeStyle`] - the horizontal fade-out brush
//! - [`AmbientStyle`] - contextual defaults supplied by the host theme
//!
//! # Example
//! ```
//! use fadetext_render::cell::PackedRgba;
//! use fadetext_style::{TextStyle, FontWeight};
//!
//! let base = TextStyle::new().color(PackedRgba::RED).font_size(14.0);
//! let merged = TextStyle::new().font_weight(FontWeight::BOLD).merge(&base);
//! assert_eq!(merged.color, Some(PackedRgba::RED));
//! assert_eq!(merged.font_weight, Some(FontWeight::BOLD));
//! ```

pub mod ambient;
pub mod gradient;
pub mod resolve;
pub mod style;
pub mod text_style;

pub use ambient::AmbientStyle;
pub use gradient::{FadeGradient, FadeStyle};
pub use resolve::{first_set, resolve_color};
pub use style::Style;
pub use text_style::{FontStyle, FontWeight, TextAlign, TextDecoration, TextStyle};

pub use fadetext_render::cell::StyleFlags;
