#![forbid(unsafe_code)]

//! Lossless text splitting at a measured offset.

/// Largest char boundary at or below `index`.
fn floor_char_boundary(text: &str, index: usize) -> usize {
    if index >= text.len() {
        return text.len();
    }
    let mut index = index;
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Split `text` into `text[..index]` and `text[index..]`.
///
/// `index` is a byte offset as reported by [`MeasuredLayout`], so
/// `head + tail == text` always holds. An index past the end or inside a
/// multi-byte character is a caller bug; debug builds assert, release builds
/// clamp down to the nearest char boundary.
///
/// [`MeasuredLayout`]: crate::measure::MeasuredLayout
///
/// # Example
/// ```
/// use fadetext_text::split_at_index;
///
/// assert_eq!(split_at_index("hello world", 6), ("hello ", "world"));
/// ```
#[must_use]
pub fn split_at_index(text: &str, index: usize) -> (&str, &str) {
    debug_assert!(
        index <= text.len() && text.is_char_boundary(index),
        "split index {index} is not a char boundary of a {}-byte string",
        text.len()
    );
    text.split_at(floor_char_boundary(text, index))
}
