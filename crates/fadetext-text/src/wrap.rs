#![forbid(unsafe_code)]

//! Offset-preserving line breaking and width helpers.
//!
//! Unlike a string-producing wrapper, [`break_lines`] reports byte ranges into
//! the original text so a caller can split the text exactly where a line
//! begins. Breaking respects:
//! - Grapheme cluster boundaries (never break emoji, ZWJ sequences, etc.)
//! - Word boundaries, with grapheme fallback for words wider than the line
//! - Hanging whitespace: spaces at a soft break stay at the end of the
//!   earlier line and do not count toward its width
//! - Forced breaks on `\n` / `\r\n`, which belong to the line they end
//!
//! # Example
//! ```
//! use fadetext_text::wrap::{break_lines, display_width};
//!
//! let text = "Hello world foo bar";
//! let lines = break_lines(text, 10.0, true, |g| display_width(g) as f32);
//! let starts: Vec<usize> = lines.iter().map(|l| l.start).collect();
//! assert_eq!(starts, vec![0, 6, 16]);
//! assert_eq!(&text[lines[1].start..lines[1].end], "world foo ");
//! ```

use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Slack for float width comparisons.
const WIDTH_EPSILON: f32 = 1e-4;

/// One laid-out line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMetrics {
    /// Byte offset of the first character on the line.
    pub start: usize,
    /// Byte offset where the next line starts (includes hanging whitespace
    /// and the terminating newline).
    pub end: usize,
    /// Visible width, excluding hanging whitespace.
    pub width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunKind {
    Word,
    Space,
    Newline,
}

#[derive(Debug, Clone, Copy)]
struct Run {
    kind: RunKind,
    start: usize,
    end: usize,
    width: f32,
}

fn classify(grapheme: &str) -> RunKind {
    if grapheme == "\n" || grapheme == "\r\n" {
        RunKind::Newline
    } else if grapheme.chars().all(char::is_whitespace) {
        RunKind::Space
    } else {
        RunKind::Word
    }
}

/// Group graphemes into word, whitespace, and newline runs.
fn split_runs<F>(text: &str, grapheme_width: &F) -> Vec<Run>
where
    F: Fn(&str) -> f32,
{
    let mut runs: Vec<Run> = Vec::new();
    for (idx, grapheme) in text.grapheme_indices(true) {
        let kind = classify(grapheme);
        let width = if kind == RunKind::Newline {
            0.0
        } else {
            grapheme_width(grapheme)
        };
        let end = idx + grapheme.len();
        match runs.last_mut() {
            Some(run) if run.kind == kind && kind != RunKind::Newline => {
                run.end = end;
                run.width += width;
            }
            _ => runs.push(Run {
                kind,
                start: idx,
                end,
                width,
            }),
        }
    }
    runs
}

struct OpenLine {
    start: usize,
    width: f32,
    pending: f32,
    has_content: bool,
}

impl OpenLine {
    fn at(start: usize) -> Self {
        Self {
            start,
            width: 0.0,
            pending: 0.0,
            has_content: false,
        }
    }

    fn fits(&self, width: f32, max_width: f32) -> bool {
        self.width + self.pending + width <= max_width + WIDTH_EPSILON
    }

    fn place(&mut self, width: f32) {
        self.width += self.pending + width;
        self.pending = 0.0;
        self.has_content = true;
    }

    fn close(&self, end: usize) -> LineMetrics {
        LineMetrics {
            start: self.start,
            end,
            width: self.width,
        }
    }
}

/// Break `text` into lines no wider than `max_width`.
///
/// `grapheme_width` gives the advance of a single grapheme cluster (including
/// any letter spacing). With `soft_wrap` disabled, or a non-positive
/// `max_width`, lines only end at forced breaks.
///
/// Always returns at least one line; the lines tile `0..text.len()` exactly.
pub fn break_lines<F>(text: &str, max_width: f32, soft_wrap: bool, grapheme_width: F) -> Vec<LineMetrics>
where
    F: Fn(&str) -> f32,
{
    let wrapping = soft_wrap && max_width > 0.0;
    let mut lines = Vec::new();
    let mut line = OpenLine::at(0);

    for run in split_runs(text, &grapheme_width) {
        match run.kind {
            RunKind::Newline => {
                lines.push(line.close(run.end));
                line = OpenLine::at(run.end);
            }
            RunKind::Space => line.pending += run.width,
            RunKind::Word => {
                if !wrapping || line.fits(run.width, max_width) {
                    line.place(run.width);
                    continue;
                }
                // Indentation that overflows stays behind on its own line.
                if line.has_content || line.pending > 0.0 {
                    lines.push(line.close(run.start));
                    line = OpenLine::at(run.start);
                }
                if line.fits(run.width, max_width) {
                    line.place(run.width);
                    continue;
                }
                // Word wider than a whole line: fall back to grapheme breaks.
                for (offset, grapheme) in text[run.start..run.end].grapheme_indices(true) {
                    let width = grapheme_width(grapheme);
                    if line.has_content && !line.fits(width, max_width) {
                        let at = run.start + offset;
                        lines.push(line.close(at));
                        line = OpenLine::at(at);
                    }
                    line.place(width);
                }
            }
        }
    }

    lines.push(line.close(text.len()));
    lines
}

/// Calculate the display width of text in cells.
#[inline]
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Width in cells when every grapheme is followed by `letter_spacing` cells.
#[must_use]
pub fn advance_width(text: &str, letter_spacing: usize) -> usize {
    if letter_spacing == 0 {
        return text.width();
    }
    text.graphemes(true)
        .map(|g| g.width() + letter_spacing)
        .sum()
}

/// Longest prefix of `text` whose advance fits in `max_width` cells.
///
/// Respects grapheme boundaries.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize, letter_spacing: usize) -> &str {
    let mut current = 0;
    for (idx, grapheme) in text.grapheme_indices(true) {
        let advance = grapheme.width() + letter_spacing;
        if current + advance > max_width {
            return &text[..idx];
        }
        current += advance;
    }
    text
}

/// Fit `text` into `max_width` cells, ending with `ellipsis` when it does not
/// fit or when `force` is set (more content follows).
///
/// If the ellipsis alone does not fit, the text is cut without it.
#[must_use]
pub fn fit_with_ellipsis<'a>(
    text: &'a str,
    max_width: usize,
    ellipsis: &str,
    letter_spacing: usize,
    force: bool,
) -> Cow<'a, str> {
    if !force && advance_width(text, letter_spacing) <= max_width {
        return Cow::Borrowed(text);
    }
    let ellipsis_width = ellipsis.width();
    if ellipsis_width > max_width {
        return Cow::Borrowed(truncate_to_width(text, max_width, letter_spacing));
    }
    let kept = truncate_to_width(text, max_width - ellipsis_width, letter_spacing);
    let mut result = String::with_capacity(kept.len() + ellipsis.len());
    result.push_str(kept);
    result.push_str(ellipsis);
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(text: &str, width: f32) -> Vec<LineMetrics> {
        break_lines(text, width, true, |g| display_width(g) as f32)
    }

    fn slices(text: &str, width: f32) -> Vec<&str> {
        cells(text, width)
            .iter()
            .map(|l| &text[l.start..l.end])
            .collect()
    }

    // ==========================================================================
    // break_lines tests
    // ==========================================================================

    #[test]
    fn no_wrap_needed() {
        let lines = cells("hello", 10.0);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], LineMetrics { start: 0, end: 5, width: 5.0 });
    }

    #[test]
    fn whitespace_hangs_on_previous_line() {
        assert_eq!(slices("hello world", 5.0), vec!["hello ", "world"]);
        let lines = cells("hello world", 5.0);
        assert_eq!(lines[0].width, 5.0);
    }

    #[test]
    fn multiple_spaces_hang_together() {
        assert_eq!(slices("ab   cd", 3.0), vec!["ab   ", "cd"]);
    }

    #[test]
    fn newline_belongs_to_line_it_ends() {
        assert_eq!(slices("line1\nline2", 20.0), vec!["line1\n", "line2"]);
    }

    #[test]
    fn crlf_is_one_break() {
        assert_eq!(slices("a\r\nb", 20.0), vec!["a\r\n", "b"]);
    }

    #[test]
    fn trailing_newline_adds_empty_line() {
        let lines = cells("abc\n", 10.0);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], LineMetrics { start: 4, end: 4, width: 0.0 });
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        let lines = cells("", 10.0);
        assert_eq!(lines, vec![LineMetrics { start: 0, end: 0, width: 0.0 }]);
    }

    #[test]
    fn long_word_breaks_at_graphemes() {
        assert_eq!(slices("supercalifragilistic", 10.0), vec!["supercalif", "ragilistic"]);
    }

    #[test]
    fn long_word_after_short_word_starts_fresh_line() {
        assert_eq!(slices("ab abcdefgh", 4.0), vec!["ab ", "abcd", "efgh"]);
    }

    #[test]
    fn overflowing_indent_breaks_before_word() {
        assert_eq!(slices("    ab", 3.0), vec!["    ", "ab"]);
        assert_eq!(cells("    ab", 3.0)[0].width, 0.0);
    }

    #[test]
    fn cjk_respects_cell_width() {
        assert_eq!(slices("你好世界", 4.0), vec!["你好", "世界"]);
        assert_eq!(slices("你好世", 5.0), vec!["你好", "世"]);
    }

    #[test]
    fn zwj_sequence_is_never_split() {
        let text = "👨‍👩‍👧👨‍👩‍👧";
        for line in cells(text, 2.0) {
            assert!(text.is_char_boundary(line.start));
            let slice = &text[line.start..line.end];
            assert!(slice.is_empty() || slice.starts_with('👨'), "{slice:?}");
        }
    }

    #[test]
    fn soft_wrap_disabled_only_breaks_on_newline() {
        let lines = break_lines("hello world\nagain", 3.0, false, |g| display_width(g) as f32);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].width, 11.0);
    }

    #[test]
    fn zero_width_never_soft_wraps() {
        assert_eq!(cells("a b c", 0.0).len(), 1);
    }

    #[test]
    fn lines_tile_the_text() {
        let text = "The quick brown fox\njumps over the lazy dog";
        let lines = cells(text, 7.0);
        assert_eq!(lines[0].start, 0);
        assert_eq!(lines.last().unwrap().end, text.len());
        for pair in lines.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn fractional_widths_wrap() {
        let lines = break_lines("aa bb cc", 5.0, true, |_| 1.2);
        let starts: Vec<usize> = lines.iter().map(|l| l.start).collect();
        assert_eq!(starts, vec![0, 3, 6]);
    }

    // ==========================================================================
    // Width and truncation tests
    // ==========================================================================

    #[test]
    fn advance_width_adds_spacing_per_grapheme() {
        assert_eq!(advance_width("abc", 0), 3);
        assert_eq!(advance_width("abc", 1), 6);
        assert_eq!(advance_width("你", 1), 3);
    }

    #[test]
    fn truncate_to_width_basic() {
        assert_eq!(truncate_to_width("hello world", 5, 0), "hello");
        assert_eq!(truncate_to_width("你好", 3, 0), "你");
        assert_eq!(truncate_to_width("abcd", 4, 1), "ab");
    }

    #[test]
    fn fit_keeps_text_that_fits() {
        assert!(matches!(fit_with_ellipsis("hello", 10, "…", 0, false), Cow::Borrowed("hello")));
    }

    #[test]
    fn fit_cuts_and_appends_ellipsis() {
        assert_eq!(fit_with_ellipsis("hello world", 8, "…", 0, false), "hello w…");
        assert_eq!(fit_with_ellipsis("hello world", 8, "...", 0, false), "hello...");
    }

    #[test]
    fn forced_ellipsis_on_short_text() {
        assert_eq!(fit_with_ellipsis("ab", 10, "…", 0, true), "ab…");
    }

    #[test]
    fn ellipsis_wider_than_space_is_dropped() {
        assert_eq!(fit_with_ellipsis("hello", 2, "...", 0, false), "he");
    }

    #[test]
    fn display_width_cjk() {
        assert_eq!(display_width("你好"), 4);
        assert_eq!(display_width(""), 0);
    }
}
