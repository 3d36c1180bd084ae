#![forbid(unsafe_code)]

//! FadeText public facade crate.
//!
//! This crate re-exports the types needed to lay out and draw text whose
//! last visible line fades out, and offers a prelude for day-to-day usage.
//!
//! # Example
//! ```
//! use fadetext::prelude::*;
//!
//! let text = FadedText::new("The quick brown fox jumps over the lazy dog")
//!     .max_lines(2)
//!     .ambient(AmbientStyle::new(PackedRgba::rgb(220, 220, 220)));
//!
//! let decision = text.layout(12);
//! assert!(decision.is_split);
//! assert_eq!(decision.head_text, "The quick ");
//!
//! let mut buf = Buffer::new(12, text.height(12));
//! Widget::render(&text, Rect::new(0, 0, 12, 2), &mut buf);
//! assert_eq!(buf.row_text(0), "The quick   ");
//! ```

// --- Core re-exports -------------------------------------------------------

pub use fadetext_core::geometry::Rect;
#[cfg(feature = "tracing-json")]
pub use fadetext_core::logging::init_json_subscriber;

// --- Render re-exports -----------------------------------------------------

pub use fadetext_render::buffer::Buffer;
pub use fadetext_render::cell::{Cell, PackedRgba, StyleFlags};

// --- Style re-exports ------------------------------------------------------

pub use fadetext_style::{
    AmbientStyle, FadeGradient, FadeStyle, FontStyle, FontWeight, Style, TextAlign,
    TextDecoration, TextStyle,
};

// --- Text re-exports -------------------------------------------------------

pub use fadetext_text::{
    CellMeasurer, FixedAdvanceMeasurer, MeasuredLayout, TextMeasurer, split_at_index,
};

// --- Widget re-exports -----------------------------------------------------

pub use fadetext_widgets::{
    FadeLayoutEngine, FadedText, FadedTextState, LayoutDecision, RequestError, StatefulWidget,
    TextBlock, Widget,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        AmbientStyle, Buffer, FadedText, FadedTextState, LayoutDecision, PackedRgba, Rect,
        StatefulWidget, Style, TextStyle, Widget,
    };

    pub use crate::{core, render, style, text, widgets};
}

pub use fadetext_core as core;
pub use fadetext_render as render;
pub use fadetext_style as style;
pub use fadetext_text as text;
pub use fadetext_widgets as widgets;
