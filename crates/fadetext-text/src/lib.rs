#![forbid(unsafe_code)]

//! Text layout for FadeText.
//!
//! This crate provides the measurement side of fading text:
//! - [`wrap`] - offset-preserving line breaking and ellipsis truncation
//! - [`TextMeasurer`] - the capability that lays text out at a fixed width
//! - [`CellMeasurer`] / [`FixedAdvanceMeasurer`] - terminal and fixed-pitch models
//! - [`MeasuredLayout`] - line count and line start offsets
//! - [`split_at_index`] - lossless split at a measured offset
//!
//! # Example
//! ```
//! use fadetext_style::TextStyle;
//! use fadetext_text::{CellMeasurer, TextMeasurer, split_at_index};
//!
//! let text = "The quick brown fox";
//! let layout = CellMeasurer.measure(text, &TextStyle::new(), 10.0);
//! assert_eq!(layout.line_count(), 2);
//!
//! let (head, tail) = split_at_index(text, layout.line_start(1));
//! assert_eq!(head, "The quick ");
//! assert_eq!(tail, "brown fox");
//! ```

pub mod measure;
pub mod split;
pub mod wrap;

pub use measure::{
    CellMeasurer, DEFAULT_FONT_SIZE, FixedAdvanceMeasurer, MeasuredLayout, TextMeasurer,
    letter_spacing_cells,
};
pub use split::split_at_index;
pub use wrap::{LineMetrics, advance_width, display_width, fit_with_ellipsis, truncate_to_width};
