#![forbid(unsafe_code)]

//! Fade layout decisions.
//!
//! [`FadeLayoutEngine::decide`] is a pure function of a [`FadedText`] request
//! and the observed container width. It measures the text, decides whether
//! the last visible line must fade, and if so where to split the text so the
//! lines above it render normally:
//!
//! ```text
//! max_lines = 3, five measured lines
//!
//!   line 0 ┐
//!   line 1 ┘ head: plain style, no cap
//!   line 2 ┐ tail: fade style, one line, ellipsis
//!   line 3 │
//!   line 4 ┘
//! ```
//!
//! Hosts recompute whenever the width or any request input changes;
//! [`FadedTextState`](crate::faded_text::FadedTextState) does that memoization
//! for the stateful widget.

use fadetext_style::{FadeStyle, TextStyle, resolve_color};
use fadetext_text::{TextMeasurer, split_at_index};

use crate::faded_text::FadedText;
use crate::text_block::{BlockPaint, Overflow, TextBlock};

/// How a request should be drawn at one width.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutDecision {
    /// More lines were measured than `max_lines` allows, at a non-zero width.
    pub should_fade: bool,
    /// The text was split into a head and a fading tail (`max_lines > 1`).
    pub is_split: bool,
    /// Lines before the last visible one; empty unless split.
    pub head_text: String,
    /// The last visible line onward; the whole text unless split.
    pub tail_text: String,
    /// Resolved style for text that does not fade.
    pub plain_style: TextStyle,
    /// Fade brush for the last line; `None` only at zero width.
    pub fade_style: Option<FadeStyle>,
    /// Lines measured at `available_width`.
    pub line_count: usize,
    /// The width this decision was made for.
    pub available_width: u32,
    /// Line cap copied from the request.
    pub max_lines: Option<usize>,
    /// Reserved lines copied from the request.
    pub min_lines: usize,
}

impl LayoutDecision {
    /// Text blocks to draw, top to bottom.
    ///
    /// - split: plain head (capped one line short of `max_lines`, clipped)
    ///   above a one-line faded tail
    /// - single-line fade: the whole text on `max_lines` faded lines, no soft wrap
    /// - no fade: the whole text, plain, capped at `max_lines`, soft-wrapped
    pub fn blocks(&self) -> Vec<TextBlock<'_>> {
        let fade = self.fade_style.as_ref().filter(|_| self.should_fade);
        match fade {
            Some(fade) if self.is_split => vec![
                TextBlock {
                    text: &self.head_text,
                    paint: BlockPaint::Plain(&self.plain_style),
                    // A head ending in a forced break re-wraps with a
                    // trailing empty line; the cap drops it.
                    max_lines: self.max_lines.map(|max| max.saturating_sub(1)),
                    // The tail below always takes one line.
                    min_lines: self.min_lines.saturating_sub(1),
                    overflow: Overflow::Clip,
                    soft_wrap: true,
                },
                TextBlock {
                    text: &self.tail_text,
                    paint: BlockPaint::Faded(fade),
                    max_lines: Some(1),
                    min_lines: 1,
                    overflow: Overflow::Ellipsis,
                    soft_wrap: false,
                },
            ],
            Some(fade) => vec![TextBlock {
                text: &self.tail_text,
                paint: BlockPaint::Faded(fade),
                max_lines: self.max_lines,
                min_lines: self.min_lines,
                overflow: Overflow::Ellipsis,
                soft_wrap: false,
            }],
            None => vec![TextBlock {
                text: &self.tail_text,
                paint: BlockPaint::Plain(&self.plain_style),
                max_lines: self.max_lines,
                min_lines: self.min_lines,
                overflow: Overflow::Ellipsis,
                soft_wrap: true,
            }],
        }
    }
}

/// Resolve the style text is measured and drawn with.
///
/// Explicit attributes win over the base style, which defaults to the
/// ambient text style. The color walks explicit, base, then ambient content
/// color.
pub fn resolve_plain_style(request: &FadedText) -> TextStyle {
    let ambient = &request.ambient;
    let base = request.base_style().unwrap_or(&ambient.text_style);
    let explicit = request.explicit_style();
    let color = resolve_color(explicit.color, base.color, ambient.content_color);
    TextStyle {
        color: Some(color),
        ..explicit.merge(base)
    }
}

/// Decides how a [`FadedText`] request lays out, using an injected measurer.
#[derive(Debug, Clone, Default)]
pub struct FadeLayoutEngine<M> {
    measurer: M,
}

impl<M: TextMeasurer> FadeLayoutEngine<M> {
    pub const fn new(measurer: M) -> Self {
        Self { measurer }
    }

    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    /// Decide the layout of `request` in a container `available_width` wide.
    ///
    /// A zero width never fades and never builds a gradient.
    pub fn decide(&self, request: &FadedText, available_width: u32) -> LayoutDecision {
        debug_assert!(
            request.validate().is_ok(),
            "invalid FadedText request: {:?}",
            request.validate()
        );

        let plain_style = resolve_plain_style(request);
        let color = plain_style.color.unwrap_or_default();
        let width = available_width as f32;

        let fade_style = FadeStyle::for_width(
            plain_style.clone(),
            color,
            request.fade_width_px(),
            width,
        );

        let layout = self.measurer.measure(request.text(), &plain_style, width);
        let line_count = layout.line_count();
        let max_lines = request.max_lines;
        let should_fade = available_width > 0 && max_lines.is_some_and(|max| line_count > max);

        let text = request.text();
        let (is_split, head_text, tail_text) = match max_lines {
            Some(max) if should_fade && max > 1 => {
                let last_line_start = layout.line_start(max - 1);
                let (head, tail) = split_at_index(text, last_line_start);
                (true, head.to_owned(), tail.to_owned())
            }
            _ => (false, String::new(), text.to_owned()),
        };

        fadetext_core::debug!(
            available_width,
            line_count,
            should_fade,
            is_split,
            head_len = head_text.len(),
            "fade layout decided"
        );

        LayoutDecision {
            should_fade,
            is_split,
            head_text,
            tail_text,
            plain_style,
            fade_style,
            line_count,
            available_width,
            max_lines,
            min_lines: request.min_lines,
        }
    }
}
