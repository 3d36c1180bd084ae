#![forbid(unsafe_code)]

//! Typographic text style.
//!
//! [`TextStyle`] carries the attributes a caller can set on a piece of text.
//! Every attribute is optional: `None` means "unspecified" and falls through to
//! the inherited style during [`TextStyle::merge`].
//!
//! Length attributes (`font_size`, `letter_spacing`, `line_height`) use the
//! unit of whichever measurer lays the text out; the terminal measurer works
//! in cells and ignores `font_size` and `font_family`.

use fadetext_render::cell::{PackedRgba, StyleFlags};

use crate::resolve::first_set;
use crate::style::Style;

/// Typeface slant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    /// Upright glyphs.
    #[default]
    Normal,
    /// Slanted glyphs.
    Italic,
}

/// Typeface thickness on the usual 100–900 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const THIN: Self = Self(100);
    pub const LIGHT: Self = Self(300);
    pub const NORMAL: Self = Self(400);
    pub const MEDIUM: Self = Self(500);
    pub const SEMI_BOLD: Self = Self(600);
    pub const BOLD: Self = Self(700);
    pub const BLACK: Self = Self(900);
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

bitflags::bitflags! {
    /// Lines drawn with the text.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TextDecoration: u8 {
        /// Line under the glyphs.
        const UNDERLINE    = 0b01;
        /// Line through the glyphs.
        const LINE_THROUGH = 0b10;
    }
}

/// Horizontal alignment of each line within the available width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlign {
    /// Lines start at the left edge.
    #[default]
    Left,
    /// Lines are centered.
    Center,
    /// Lines end at the right edge.
    Right,
}

/// Typographic attributes of a run of text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextStyle {
    /// Flat text color.
    pub color: Option<PackedRgba>,
    /// Glyph size.
    pub font_size: Option<f32>,
    /// Slant.
    pub font_style: Option<FontStyle>,
    /// Thickness.
    pub font_weight: Option<FontWeight>,
    /// Family name; meaning is measurer-defined.
    pub font_family: Option<String>,
    /// Extra advance after every grapheme.
    pub letter_spacing: Option<f32>,
    /// Underline / line-through.
    pub text_decoration: Option<TextDecoration>,
    /// Line alignment.
    pub text_align: Option<TextAlign>,
    /// Height of one line.
    pub line_height: Option<f32>,
}

/// Non-finite lengths are the "unspecified" sentinel.
#[inline]
fn specified(value: f32) -> Option<f32> {
    value.is_finite().then_some(value)
}

impl TextStyle {
    /// A style with nothing specified.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn color(mut self, color: PackedRgba) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the font size. Non-finite values leave it unspecified.
    #[must_use]
    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = specified(size);
        self
    }

    #[must_use]
    pub fn font_style(mut self, style: FontStyle) -> Self {
        self.font_style = Some(style);
        self
    }

    #[must_use]
    pub fn font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    #[must_use]
    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Set the letter spacing. Non-finite values leave it unspecified.
    #[must_use]
    pub fn letter_spacing(mut self, spacing: f32) -> Self {
        self.letter_spacing = specified(spacing);
        self
    }

    #[must_use]
    pub fn text_decoration(mut self, decoration: TextDecoration) -> Self {
        self.text_decoration = Some(decoration);
        self
    }

    #[must_use]
    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }

    /// Set the line height. Non-finite values leave it unspecified.
    #[must_use]
    pub fn line_height(mut self, height: f32) -> Self {
        self.line_height = specified(height);
        self
    }

    /// Resolve every attribute against `base`: attributes set on `self` win,
    /// unset ones fall through to `base`.
    #[must_use]
    pub fn merge(&self, base: &TextStyle) -> TextStyle {
        TextStyle {
            color: first_set([self.color, base.color]),
            font_size: first_set([self.font_size, base.font_size]),
            font_style: first_set([self.font_style, base.font_style]),
            font_weight: first_set([self.font_weight, base.font_weight]),
            font_family: first_set([self.font_family.as_ref(), base.font_family.as_ref()])
                .cloned(),
            letter_spacing: first_set([self.letter_spacing, base.letter_spacing]),
            text_decoration: first_set([self.text_decoration, base.text_decoration]),
            text_align: first_set([self.text_align, base.text_align]),
            line_height: first_set([self.line_height, base.line_height]),
        }
    }

    /// Effective alignment (left when unspecified).
    #[inline]
    pub fn align(&self) -> TextAlign {
        self.text_align.unwrap_or_default()
    }

    /// Cell style flags implied by weight, slant, and decoration.
    pub fn flags(&self) -> StyleFlags {
        let mut flags = StyleFlags::empty();
        match self.font_weight {
            Some(weight) if weight >= FontWeight::SEMI_BOLD => flags |= StyleFlags::BOLD,
            Some(weight) if weight <= FontWeight::LIGHT => flags |= StyleFlags::DIM,
            _ => {}
        }
        if self.font_style == Some(FontStyle::Italic) {
            flags |= StyleFlags::ITALIC;
        }
        let decoration = self.text_decoration.unwrap_or_default();
        if decoration.contains(TextDecoration::UNDERLINE) {
            flags |= StyleFlags::UNDERLINE;
        }
        if decoration.contains(TextDecoration::LINE_THROUGH) {
            flags |= StyleFlags::STRIKETHROUGH;
        }
        flags
    }

    /// Cell style for painting this text with a flat color.
    pub fn cell_style(&self) -> Style {
        let flags = self.flags();
        Style {
            fg: self.color,
            bg: None,
            attrs: (!flags.is_empty()).then_some(flags),
        }
    }
}
