#![forbid(unsafe_code)]

/// Contract violations in a [`FadedText`](crate::faded_text::FadedText) request.
///
/// Rendering never fails; hosts that build requests from outside input can
/// call [`FadedText::validate`](crate::faded_text::FadedText::validate) first.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestError {
    /// `min_lines` must be at least one.
    MinLinesZero,
    /// `max_lines`, when bounded, must be at least one.
    MaxLinesZero,
    /// `min_lines` is larger than a bounded `max_lines`.
    MinLinesExceedMaxLines { min_lines: usize, max_lines: usize },
    /// The fade width is negative.
    NegativeFadeWidth { fade_width: f32 },
    /// The fade width is NaN or infinite.
    NonFiniteFadeWidth { fade_width: f32 },
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MinLinesZero => write!(f, "min_lines must be at least 1"),
            Self::MaxLinesZero => write!(f, "max_lines must be at least 1"),
            Self::MinLinesExceedMaxLines {
                min_lines,
                max_lines,
            } => write!(
                f,
                "min_lines ({}) exceeds max_lines ({})",
                min_lines, max_lines
            ),
            Self::NegativeFadeWidth { fade_width } => {
                write!(f, "fade width {} is negative", fade_width)
            }
            Self::NonFiniteFadeWidth { fade_width } => {
                write!(f, "fade width {} is not finite", fade_width)
            }
        }
    }
}

impl std::error::Error for RequestError {}
