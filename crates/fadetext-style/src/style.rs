#![forbid(unsafe_code)]

//! Cell-level style: foreground, background, and flags.

use fadetext_render::cell::{PackedRgba, StyleFlags};

/// Style applied to individual cells while painting.
///
/// Unset fields leave the target cell untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Style {
    /// Foreground color.
    pub fg: Option<PackedRgba>,
    /// Background color.
    pub bg: Option<PackedRgba>,
    /// Style flags.
    pub attrs: Option<StyleFlags>,
}

impl Style {
    /// An empty style.
    #[inline]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn fg(mut self, color: PackedRgba) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn bg(mut self, color: PackedRgba) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add style flags.
    #[must_use]
    pub fn add_flags(mut self, flags: StyleFlags) -> Self {
        self.attrs = Some(self.attrs.unwrap_or_default() | flags);
        self
    }

    /// Make the text bold.
    #[must_use]
    pub fn bold(self) -> Self {
        self.add_flags(StyleFlags::BOLD)
    }

    /// Make the text italic.
    #[must_use]
    pub fn italic(self) -> Self {
        self.add_flags(StyleFlags::ITALIC)
    }

    /// Underline the text.
    #[must_use]
    pub fn underline(self) -> Self {
        self.add_flags(StyleFlags::UNDERLINE)
    }

    /// True when no field is set.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_none()
    }

    /// Fill unset fields from `parent`. Fields set on `self` win.
    #[must_use]
    pub fn merge(&self, parent: &Style) -> Style {
        Style {
            fg: self.fg.or(parent.fg),
            bg: self.bg.or(parent.bg),
            attrs: match (self.attrs, parent.attrs) {
                (Some(a), Some(b)) => Some(a | b),
                (a, b) => a.or(b),
            },
        }
    }
}
