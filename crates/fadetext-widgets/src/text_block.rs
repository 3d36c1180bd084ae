#![forbid(unsafe_code)]

//! Painting one block of text into a buffer.
//!
//! A [`TextBlock`] is one node of the visual tree a
//! [`LayoutDecision`](crate::fade_engine::LayoutDecision) produces: a string,
//! how to paint it (flat color or fade brush), and its line policy.

use fadetext_core::geometry::Rect;
use fadetext_render::buffer::Buffer;
use fadetext_style::{FadeStyle, TextAlign, TextStyle};
use fadetext_text::{CellMeasurer, advance_width, fit_with_ellipsis, letter_spacing_cells, truncate_to_width};

use crate::draw_text_span;

/// Marker drawn at the end of a truncated line.
pub const ELLIPSIS: &str = "…";

/// What happens to text beyond the last visible line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    /// Cut without a marker.
    #[default]
    Clip,
    /// End the last visible line with [`ELLIPSIS`].
    Ellipsis,
}

/// Flat or faded paint for a block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BlockPaint<'a> {
    Plain(&'a TextStyle),
    Faded(&'a FadeStyle),
}

impl<'a> BlockPaint<'a> {
    /// Typography of the block.
    pub fn text_style(&self) -> &'a TextStyle {
        match *self {
            Self::Plain(style) => style,
            Self::Faded(fade) => &fade.text,
        }
    }
}

/// One block of text with its line policy.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock<'a> {
    pub text: &'a str,
    pub paint: BlockPaint<'a>,
    /// Line cap; `None` is unbounded.
    pub max_lines: Option<usize>,
    /// Lines reserved even when the text is shorter.
    pub min_lines: usize,
    pub overflow: Overflow,
    pub soft_wrap: bool,
}

/// Rows each text line occupies.
fn row_height(style: &TextStyle) -> u16 {
    style
        .line_height
        .map_or(1, |height| height.round().clamp(1.0, f32::from(u16::MAX)) as u16)
}

/// X position of a line `width` cells wide inside `area`.
fn align_x(area: Rect, width: usize, align: TextAlign) -> u16 {
    let width = width.min(area.width as usize) as u16;
    match align {
        TextAlign::Left => area.x,
        TextAlign::Center => area.x + (area.width - width) / 2,
        TextAlign::Right => area.right() - width,
    }
}

impl TextBlock<'_> {
    /// Lines this block draws at `width` before `min_lines` is applied.
    fn visible_lines(&self, width: u16) -> (fadetext_text::MeasuredLayout, usize) {
        let style = self.paint.text_style();
        let layout = CellMeasurer.layout(self.text, style, f32::from(width), self.soft_wrap);
        let total = layout.line_count();
        let visible = self.max_lines.map_or(total, |max| total.min(max));
        (layout, visible)
    }

    /// Rows needed at `width`, including reserved `min_lines`.
    pub fn height(&self, width: u16) -> u16 {
        let (_, visible) = self.visible_lines(width);
        let lines = visible.max(self.min_lines);
        let rows = lines.saturating_mul(row_height(self.paint.text_style()) as usize);
        rows.min(u16::MAX as usize) as u16
    }

    /// Paint into `area`, returning the rows consumed (at most `area.height`).
    pub fn render(&self, area: Rect, buf: &mut Buffer) -> u16 {
        if area.is_empty() {
            return 0;
        }
        let style = self.paint.text_style();
        let spacing = letter_spacing_cells(style);
        let step = row_height(style);
        let cell_style = style.cell_style();
        let align = style.align();
        let (layout, visible) = self.visible_lines(area.width);
        let truncated = visible < layout.line_count();
        let max_width = area.width as usize;

        let mut y = area.y;
        for line in 0..visible {
            if y >= area.bottom() {
                break;
            }
            let raw = self.text[layout.line_range(line)].trim_end();
            let is_last = line + 1 == visible;
            let content = if is_last && self.overflow == Overflow::Ellipsis {
                fit_with_ellipsis(raw, max_width, ELLIPSIS, spacing, truncated)
            } else {
                truncate_to_width(raw, max_width, spacing).into()
            };

            let x = align_x(area, advance_width(&content, spacing), align);
            match self.paint {
                BlockPaint::Plain(_) => {
                    draw_text_span(buf, x, y, &content, cell_style, area.right(), spacing, |_, _| None);
                }
                BlockPaint::Faded(fade) => {
                    let span = f32::from(area.width);
                    draw_text_span(buf, x, y, &content, cell_style, area.right(), spacing, |gx, w| {
                        let center = f32::from(gx - area.x) + w as f32 / 2.0;
                        Some(fade.color_at(center / span))
                    });
                }
            }
            y = y.saturating_add(step);
        }

        let reserved = visible.max(self.min_lines).saturating_mul(step as usize);
        reserved.min(area.height as usize) as u16
    }
}
