#![forbid(unsafe_code)]

//! Text measurement at a fixed width.
//!
//! A [`TextMeasurer`] lays text out against a width and reports where each
//! line starts. The fade engine only needs the line count and line start
//! offsets, so any layout model can sit behind the trait: the terminal
//! [`CellMeasurer`], the proportional-free [`FixedAdvanceMeasurer`], or a
//! hand-built fake in tests.

use std::ops::Range;

use fadetext_style::TextStyle;
use tracing::trace;

use crate::wrap::{LineMetrics, break_lines, display_width};

/// Font size assumed when a style leaves it unspecified.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Result of laying text out at a fixed width.
///
/// Offsets are UTF-8 byte offsets into the measured text and always fall on
/// char boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredLayout {
    text_len: usize,
    lines: Vec<LineMetrics>,
}

impl MeasuredLayout {
    /// Wrap precomputed lines.
    ///
    /// An empty `lines` is normalized to a single empty line.
    #[must_use]
    pub fn new(text_len: usize, mut lines: Vec<LineMetrics>) -> Self {
        if lines.is_empty() {
            lines.push(LineMetrics {
                start: 0,
                end: text_len,
                width: 0.0,
            });
        }
        debug_assert!(
            lines.windows(2).all(|w| w[0].end == w[1].start),
            "lines must tile the text"
        );
        Self { text_len, lines }
    }

    /// Build a layout from line start offsets alone (widths are zero).
    ///
    /// Handy for deterministic fakes that only model where lines begin.
    #[must_use]
    pub fn from_line_starts(text_len: usize, starts: &[usize]) -> Self {
        let lines = starts
            .iter()
            .enumerate()
            .map(|(i, &start)| LineMetrics {
                start,
                end: starts.get(i + 1).copied().unwrap_or(text_len),
                width: 0.0,
            })
            .collect();
        Self::new(text_len, lines)
    }

    /// Number of laid-out lines (at least one).
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Offset where `line` starts; `text_len` past the last line.
    #[inline]
    pub fn line_start(&self, line: usize) -> usize {
        self.lines.get(line).map_or(self.text_len, |l| l.start)
    }

    /// Offset where the line after `line` starts; `text_len` past the last line.
    #[inline]
    pub fn line_end(&self, line: usize) -> usize {
        self.lines.get(line).map_or(self.text_len, |l| l.end)
    }

    /// Byte range covered by `line`, including hanging whitespace.
    pub fn line_range(&self, line: usize) -> Range<usize> {
        self.line_start(line)..self.line_end(line)
    }

    /// Visible width of `line`; zero past the last line.
    pub fn line_width(&self, line: usize) -> f32 {
        self.lines.get(line).map_or(0.0, |l| l.width)
    }

    /// Widest line.
    pub fn max_line_width(&self) -> f32 {
        self.lines.iter().map(|l| l.width).fold(0.0, f32::max)
    }

    /// All lines in order.
    pub fn lines(&self) -> &[LineMetrics] {
        &self.lines
    }

    /// Length of the measured text in bytes.
    pub fn text_len(&self) -> usize {
        self.text_len
    }
}

/// Lays text out at a fixed width.
pub trait TextMeasurer {
    /// Measure `text` styled with `style`, soft-wrapping at `width`.
    fn measure(&self, text: &str, style: &TextStyle, width: f32) -> MeasuredLayout;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, style: &TextStyle, width: f32) -> MeasuredLayout {
        (**self).measure(text, style, width)
    }
}

/// Letter spacing rounded to whole cells; negative spacing is ignored.
#[inline]
pub fn letter_spacing_cells(style: &TextStyle) -> usize {
    style
        .letter_spacing
        .map_or(0, |spacing| spacing.round().max(0.0) as usize)
}

/// Terminal measurement: every grapheme advances its display width in cells.
///
/// `font_size` and `font_family` have no meaning on a cell grid and are
/// ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellMeasurer;

impl CellMeasurer {
    /// Lay out with soft wrapping switchable per call.
    pub fn layout(&self, text: &str, style: &TextStyle, width: f32, soft_wrap: bool) -> MeasuredLayout {
        let spacing = letter_spacing_cells(style);
        let lines = break_lines(text, width, soft_wrap, |g| (display_width(g) + spacing) as f32);
        let layout = MeasuredLayout::new(text.len(), lines);
        trace!(
            measurer = "cell",
            width,
            soft_wrap,
            line_count = layout.line_count(),
            "measured text"
        );
        layout
    }
}

impl TextMeasurer for CellMeasurer {
    fn measure(&self, text: &str, style: &TextStyle, width: f32) -> MeasuredLayout {
        self.layout(text, style, width, true)
    }
}

/// Deterministic fixed-pitch model: each grapheme advances
/// `font_size * advance_em * display_width`, plus letter spacing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvanceMeasurer {
    /// Advance of a single-width glyph as a fraction of the font size.
    pub advance_em: f32,
}

impl FixedAdvanceMeasurer {
    #[must_use]
    pub const fn new(advance_em: f32) -> Self {
        Self { advance_em }
    }

    /// Advance of one grapheme under `style`.
    pub fn advance(&self, grapheme: &str, style: &TextStyle) -> f32 {
        let font_size = style.font_size.unwrap_or(DEFAULT_FONT_SIZE);
        let spacing = style.letter_spacing.unwrap_or(0.0);
        font_size * self.advance_em * display_width(grapheme) as f32 + spacing
    }
}

impl Default for FixedAdvanceMeasurer {
    fn default() -> Self {
        Self::new(0.6)
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn measure(&self, text: &str, style: &TextStyle, width: f32) -> MeasuredLayout {
        let lines = break_lines(text, width, true, |g| self.advance(g, style));
        let layout = MeasuredLayout::new(text.len(), lines);
        trace!(
            measurer = "fixed_advance",
            width,
            line_count = layout.line_count(),
            "measured text"
        );
        layout
    }
}
