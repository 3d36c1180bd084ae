#![forbid(unsafe_code)]

//! Text that fades out on its last visible line.
//!
//! [`FadedText`] renders like a paragraph until the text needs more lines
//! than `max_lines` allows. Then the final visible line is drawn with a
//! horizontal gradient that goes transparent over the last `fade_width`
//! units instead of being hard-clipped.
//!
//! # Example
//! ```
//! use fadetext_core::geometry::Rect;
//! use fadetext_render::buffer::Buffer;
//! use fadetext_widgets::{FadedText, Widget};
//!
//! let text = FadedText::new("The quick brown fox jumps over the lazy dog")
//!     .max_lines(2)
//!     .fade_width(4.0);
//!
//! let mut buf = Buffer::new(12, 2);
//! text.render(Rect::new(0, 0, 12, 2), &mut buf);
//! assert_eq!(buf.row_text(0), "The quick   ");
//! assert!(buf.row_text(1).starts_with("brown fox"));
//! ```

use fadetext_core::geometry::Rect;
use fadetext_render::buffer::Buffer;
use fadetext_render::cell::PackedRgba;
use fadetext_style::{
    AmbientStyle, FontStyle, FontWeight, Style, TextAlign, TextDecoration, TextStyle,
};
use fadetext_text::{CellMeasurer, TextMeasurer};

use crate::error::RequestError;
use crate::fade_engine::{FadeLayoutEngine, LayoutDecision};
use crate::{StatefulWidget, Widget, set_style_area};

/// Width of the fade zone when none is given, in density-independent units.
pub const DEFAULT_FADE_WIDTH: f32 = 10.0;

/// A render request for text whose last visible line fades out.
#[derive(Debug, Clone, PartialEq)]
pub struct FadedText {
    text: String,
    explicit: TextStyle,
    base_style: Option<TextStyle>,
    pub(crate) max_lines: Option<usize>,
    pub(crate) min_lines: usize,
    fade_width: f32,
    density: f32,
    pub(crate) ambient: AmbientStyle,
    container_style: Style,
}

impl FadedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            explicit: TextStyle::default(),
            base_style: None,
            max_lines: None,
            min_lines: 1,
            fade_width: DEFAULT_FADE_WIDTH,
            density: 1.0,
            ambient: AmbientStyle::default(),
            container_style: Style::default(),
        }
    }

    pub fn color(mut self, color: PackedRgba) -> Self {
        self.explicit.color = Some(color);
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.explicit = self.explicit.font_size(size);
        self
    }

    pub fn font_style(mut self, style: FontStyle) -> Self {
        self.explicit.font_style = Some(style);
        self
    }

    pub fn font_weight(mut self, weight: FontWeight) -> Self {
        self.explicit.font_weight = Some(weight);
        self
    }

    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.explicit.font_family = Some(family.into());
        self
    }

    pub fn letter_spacing(mut self, spacing: f32) -> Self {
        self.explicit = self.explicit.letter_spacing(spacing);
        self
    }

    pub fn text_decoration(mut self, decoration: TextDecoration) -> Self {
        self.explicit.text_decoration = Some(decoration);
        self
    }

    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.explicit.text_align = Some(align);
        self
    }

    pub fn line_height(mut self, height: f32) -> Self {
        self.explicit = self.explicit.line_height(height);
        self
    }

    /// Cap the visible lines; the last one fades when text is cut.
    pub fn max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = Some(max_lines);
        self
    }

    /// Reserve at least this many lines.
    pub fn min_lines(mut self, min_lines: usize) -> Self {
        self.min_lines = min_lines;
        self
    }

    /// Inherited style. Replaces the ambient text style as the base that
    /// explicit attributes are merged over.
    pub fn style(mut self, style: TextStyle) -> Self {
        self.base_style = Some(style);
        self
    }

    /// Width of the fade zone in density-independent units.
    pub fn fade_width(mut self, fade_width: f32) -> Self {
        self.fade_width = fade_width;
        self
    }

    /// Cells per density-independent unit.
    pub fn density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    pub fn ambient(mut self, ambient: AmbientStyle) -> Self {
        self.ambient = ambient;
        self
    }

    /// Style applied to the whole area before the text is painted.
    pub fn container_style(mut self, style: Style) -> Self {
        self.container_style = style;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Attributes set directly on this request.
    pub fn explicit_style(&self) -> &TextStyle {
        &self.explicit
    }

    pub fn base_style(&self) -> Option<&TextStyle> {
        self.base_style.as_ref()
    }

    /// Fade width converted to cells.
    pub fn fade_width_px(&self) -> f32 {
        self.fade_width * self.density
    }

    /// Check the request's line and fade contracts.
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.min_lines == 0 {
            return Err(RequestError::MinLinesZero);
        }
        if let Some(max_lines) = self.max_lines {
            if max_lines == 0 {
                return Err(RequestError::MaxLinesZero);
            }
            if self.min_lines > max_lines {
                return Err(RequestError::MinLinesExceedMaxLines {
                    min_lines: self.min_lines,
                    max_lines,
                });
            }
        }
        if !self.fade_width.is_finite() {
            return Err(RequestError::NonFiniteFadeWidth {
                fade_width: self.fade_width,
            });
        }
        if self.fade_width < 0.0 {
            return Err(RequestError::NegativeFadeWidth {
                fade_width: self.fade_width,
            });
        }
        Ok(())
    }

    /// Decide the layout at `width` cells with the terminal measurer.
    pub fn layout(&self, width: u16) -> LayoutDecision {
        self.layout_with(&FadeLayoutEngine::new(CellMeasurer), width)
    }

    /// Decide the layout at `width` with a caller-supplied engine.
    pub fn layout_with<M: TextMeasurer>(&self, engine: &FadeLayoutEngine<M>, width: u16) -> LayoutDecision {
        engine.decide(self, u32::from(width))
    }

    /// Rows needed to draw this text `width` cells wide.
    pub fn height(&self, width: u16) -> u16 {
        self.layout(width)
            .blocks()
            .iter()
            .fold(0u16, |rows, block| rows.saturating_add(block.height(width)))
    }

    /// Paint a decision into `area`: head block on top, tail beneath.
    fn paint(&self, decision: &LayoutDecision, area: Rect, buf: &mut Buffer) {
        set_style_area(buf, area, self.container_style);

        let mut remaining = area;
        for block in decision.blocks() {
            if remaining.is_empty() {
                break;
            }
            let used = block.render(remaining, buf);
            remaining = remaining.split_top(used).1;
        }
    }
}

impl Widget for FadedText {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "FadedText",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        if area.is_empty() {
            return;
        }
        let decision = self.layout(area.width);
        self.paint(&decision, area, buf);
    }
}

/// Memoized layout for a [`FadedText`] instance.
///
/// The decision is recomputed only when the observed width or the request
/// changes.
#[derive(Debug, Clone, Default)]
pub struct FadedTextState {
    last_width: Option<u16>,
    request: Option<FadedText>,
    decision: Option<LayoutDecision>,
    recompute_count: u64,
}

impl FadedTextState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Width the cached decision was made for.
    pub fn last_width(&self) -> Option<u16> {
        self.last_width
    }

    /// How many times the decision has been computed.
    pub fn recompute_count(&self) -> u64 {
        self.recompute_count
    }

    pub fn decision(&self) -> Option<&LayoutDecision> {
        self.decision.as_ref()
    }

    /// Drop the cached decision.
    pub fn invalidate(&mut self) {
        self.last_width = None;
        self.request = None;
        self.decision = None;
    }

    /// Cached decision for `width`, recomputing when anything changed.
    pub fn decision_for(&mut self, request: &FadedText, width: u16) -> &LayoutDecision {
        let stale = self.last_width != Some(width) || self.request.as_ref() != Some(request);
        if stale || self.decision.is_none() {
            fadetext_core::trace!(width, recompute = self.recompute_count + 1, "fade layout recomputed");
            self.last_width = Some(width);
            self.request = Some(request.clone());
            self.recompute_count += 1;
            self.decision = None;
        }
        self.decision.get_or_insert_with(|| request.layout(width))
    }
}

impl StatefulWidget for FadedText {
    type State = FadedTextState;

    fn render(&self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "FadedText",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        if area.is_empty() {
            return;
        }
        let decision = state.decision_for(self, area.width);
        self.paint(decision, area, buf);
    }
}
