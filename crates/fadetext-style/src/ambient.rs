#![forbid(unsafe_code)]

//! Contextual defaults supplied by the host theme.
//!
//! Text that specifies neither an explicit color nor a style color falls back
//! to the ambient content color, and every request inherits the ambient text
//! style as its base.
//!
//! # Example
//! ```
//! use fadetext_render::cell::PackedRgba;
//! use fadetext_style::{AmbientStyle, TextStyle};
//!
//! let ambient = AmbientStyle::new(PackedRgba::rgb(200, 200, 200))
//!     .with_text_style(TextStyle::new().line_height(1.0));
//! assert_eq!(ambient.content_color, PackedRgba::rgb(200, 200, 200));
//! ```

use std::env;

use fadetext_render::cell::PackedRgba;

use crate::text_style::TextStyle;

/// Content color used on dark backgrounds.
pub const DARK_MODE_CONTENT: PackedRgba = PackedRgba::rgb(230, 230, 230);
/// Content color used on light backgrounds.
pub const LIGHT_MODE_CONTENT: PackedRgba = PackedRgba::rgb(28, 28, 28);

/// Theme-provided defaults for text.
#[derive(Debug, Clone, PartialEq)]
pub struct AmbientStyle {
    /// Color of content drawn on the current surface.
    pub content_color: PackedRgba,
    /// Text style every request inherits from.
    pub text_style: TextStyle,
}

impl AmbientStyle {
    /// Ambient defaults with the given content color and an empty text style.
    #[must_use]
    pub fn new(content_color: PackedRgba) -> Self {
        Self {
            content_color,
            text_style: TextStyle::default(),
        }
    }

    /// Replace the inherited text style.
    #[must_use]
    pub fn with_text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = text_style;
        self
    }

    /// Pick a content color for the terminal's background.
    ///
    /// Detection order:
    /// 1. `COLORFGBG` environment variable
    /// 2. Dark background (most terminals are dark)
    #[must_use]
    pub fn detect() -> Self {
        Self::from_colorfgbg(env::var("COLORFGBG").ok().as_deref())
    }

    fn from_colorfgbg(colorfgbg: Option<&str>) -> Self {
        if is_dark_background(colorfgbg) {
            Self::new(DARK_MODE_CONTENT)
        } else {
            Self::new(LIGHT_MODE_CONTENT)
        }
    }
}

impl Default for AmbientStyle {
    fn default() -> Self {
        Self::new(DARK_MODE_CONTENT)
    }
}

/// `COLORFGBG` is `"fg;bg"` with ANSI indices; bg 7 and 15 are light.
fn is_dark_background(colorfgbg: Option<&str>) -> bool {
    if let Some(colorfgbg) = colorfgbg
        && let Some(bg_part) = colorfgbg.split(';').next_back()
        && let Ok(bg) = bg_part.trim().parse::<u8>()
    {
        return bg != 7 && bg != 15;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_dark_mode() {
        assert_eq!(AmbientStyle::default().content_color, DARK_MODE_CONTENT);
        assert_eq!(AmbientStyle::default().text_style, TextStyle::default());
    }

    #[test]
    fn colorfgbg_black_background_is_dark() {
        assert_eq!(
            AmbientStyle::from_colorfgbg(Some("15;0")).content_color,
            DARK_MODE_CONTENT
        );
    }

    #[test]
    fn colorfgbg_white_background_is_light() {
        assert_eq!(
            AmbientStyle::from_colorfgbg(Some("0;15")).content_color,
            LIGHT_MODE_CONTENT
        );
        assert_eq!(
            AmbientStyle::from_colorfgbg(Some("0;7")).content_color,
            LIGHT_MODE_CONTENT
        );
    }

    #[test]
    fn colorfgbg_three_part_uses_last() {
        assert_eq!(
            AmbientStyle::from_colorfgbg(Some("0;default;15")).content_color,
            LIGHT_MODE_CONTENT
        );
    }

    #[test]
    fn missing_or_garbage_colorfgbg_is_dark() {
        assert!(is_dark_background(None));
        assert!(is_dark_background(Some("")));
        assert!(is_dark_background(Some("fg;bg")));
    }

    #[test]
    fn with_text_style_replaces_base() {
        let style = TextStyle::new().letter_spacing(1.0);
        let ambient = AmbientStyle::new(PackedRgba::RED).with_text_style(style.clone());
        assert_eq!(ambient.text_style, style);
    }
}
