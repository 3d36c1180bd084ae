#![forbid(unsafe_code)]

//! Widgets for FadeText.
//!
//! - [`FadedText`] - text whose last visible line fades out when truncated
//! - [`FadeLayoutEngine`] - the pure layout decision behind it
//! - [`TextBlock`] - one painted block of the resulting visual tree

pub mod error;
pub mod fade_engine;
pub mod faded_text;
pub mod text_block;

pub use error::RequestError;
pub use fade_engine::{FadeLayoutEngine, LayoutDecision, resolve_plain_style};
pub use faded_text::{DEFAULT_FADE_WIDTH, FadedText, FadedTextState};
pub use text_block::{BlockPaint, ELLIPSIS, Overflow, TextBlock};

use fadetext_core::geometry::Rect;
use fadetext_render::buffer::Buffer;
use fadetext_render::cell::{Cell, PackedRgba};
use fadetext_style::Style;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A `Widget` is a renderable component.
///
/// Widgets render themselves into a `Buffer` within a given `Rect`.
pub trait Widget {
    /// Render the widget into the buffer at the given area.
    fn render(&self, area: Rect, buf: &mut Buffer);
}

/// A `StatefulWidget` is a widget that renders based on mutable state.
pub trait StatefulWidget {
    type State;

    /// Render the widget into the buffer with mutable state.
    fn render(&self, area: Rect, buf: &mut Buffer, state: &mut Self::State);
}

/// Helper to apply style to a cell.
pub(crate) fn apply_style(cell: &mut Cell, style: Style) {
    if let Some(fg) = style.fg {
        cell.fg = fg;
    }
    if let Some(bg) = style.bg {
        cell.bg = bg;
    }
    if let Some(attrs) = style.attrs {
        cell.flags |= attrs;
    }
}

/// Apply a style to all cells in a rectangular area.
///
/// This modifies existing cells, preserving their content.
pub(crate) fn set_style_area(buf: &mut Buffer, area: Rect, style: Style) {
    if style.is_empty() {
        return;
    }
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                apply_style(cell, style);
            }
        }
    }
}

/// Draw a text span into a buffer at the given position.
///
/// Each grapheme is followed by `letter_spacing` empty cells. `fg_at` is
/// asked for a per-glyph foreground (given the glyph's x and width) and
/// overrides the style's foreground when it returns a color.
///
/// Returns the x position after the last drawn character.
/// Stops at `max_x` (exclusive).
#[allow(clippy::too_many_arguments)]
pub(crate) fn draw_text_span<F>(
    buf: &mut Buffer,
    mut x: u16,
    y: u16,
    content: &str,
    style: Style,
    max_x: u16,
    letter_spacing: usize,
    fg_at: F,
) -> u16
where
    F: Fn(u16, usize) -> Option<PackedRgba>,
{
    for grapheme in content.graphemes(true) {
        if x >= max_x {
            break;
        }
        let w = UnicodeWidthStr::width(grapheme);
        if w == 0 {
            continue;
        }
        if x as usize + w > max_x as usize {
            break;
        }
        let mut cell = Cell::new(buf.content_for(grapheme));
        apply_style(&mut cell, style);
        if let Some(fg) = fg_at(x, w) {
            cell.fg = fg;
        }
        buf.set(x, y, cell);
        x = x.saturating_add((w + letter_spacing) as u16);
    }
    x
}
