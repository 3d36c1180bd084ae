//! Property-based invariant tests for fade layout decisions.
//!
//! 1. Zero width never fades, whatever the text or line cap.
//! 2. Text that fits renders unchanged with the plain style.
//! 3. A split's head and tail reconstruct the text, and the tail starts at
//!    the measured start of the last visible line.
//! 4. Gradient stops are ordered and fade stops below zero never panic.
//! 5. Rendering never writes outside the area and never panics.
//! 6. A capped request never needs more rows than its line cap.

use fadetext_core::geometry::Rect;
use fadetext_render::buffer::Buffer;
use fadetext_render::cell::PackedRgba;
use fadetext_style::{AmbientStyle, FadeStyle, TextStyle};
use fadetext_text::{CellMeasurer, TextMeasurer};
use fadetext_widgets::{BlockPaint, FadeLayoutEngine, FadedText, Widget};
use proptest::prelude::*;

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-z]{1,10}",
            Just(" ".to_string()),
            Just("\n".to_string()),
            Just("日本".to_string()),
        ],
        0..30,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn zero_width_never_fades(text in text_strategy(), max_lines in 1usize..5) {
        let request = FadedText::new(text).max_lines(max_lines);
        let decision = FadeLayoutEngine::new(CellMeasurer).decide(&request, 0);
        prop_assert!(!decision.should_fade);
        prop_assert!(!decision.is_split);
        prop_assert!(decision.fade_style.is_none());
    }

    #[test]
    fn fitting_text_is_plain_and_whole(text in text_strategy(), width in 1u16..40) {
        let lines = CellMeasurer.measure(&text, &TextStyle::new(), f32::from(width)).line_count();
        let request = FadedText::new(text.clone()).max_lines(lines);
        let decision = request.layout(width);
        prop_assert!(!decision.should_fade);
        prop_assert!(!decision.is_split);
        prop_assert_eq!(&decision.tail_text, &text);
        let blocks = decision.blocks();
        prop_assert_eq!(blocks.len(), 1);
        prop_assert!(matches!(blocks[0].paint, BlockPaint::Plain(_)));
    }

    #[test]
    fn split_reconstructs_text(text in text_strategy(), width in 1u16..40, max_lines in 2usize..5) {
        let request = FadedText::new(text.clone()).max_lines(max_lines);
        let decision = request.layout(width);
        if decision.is_split {
            let layout = CellMeasurer.measure(&text, &decision.plain_style, f32::from(width));
            prop_assert!(layout.line_count() > max_lines);
            prop_assert_eq!(decision.head_text.len(), layout.line_start(max_lines - 1));
            prop_assert_eq!(format!("{}{}", decision.head_text, decision.tail_text), text);
        } else {
            prop_assert_eq!(&decision.tail_text, &text);
            prop_assert!(decision.head_text.is_empty());
        }
    }

    #[test]
    fn gradient_stops_are_ordered(fade_width in 0.0f32..200.0, width in 1u32..200) {
        let fade = FadeStyle::for_width(TextStyle::new(), PackedRgba::WHITE, fade_width, width as f32)
            .expect("non-zero width");
        let stops = fade.gradient.stops();
        prop_assert!(stops.windows(2).all(|w| w[0].0 <= w[1].0));
        prop_assert!(stops.iter().all(|(p, _)| (0.0..=1.0).contains(p)));
        if fade_width < width as f32 {
            prop_assert!(0.0 <= fade.fade_stop / 2.0);
            prop_assert!(fade.fade_stop / 2.0 < fade.fade_stop);
            prop_assert!(fade.fade_stop <= 1.0);
        } else {
            prop_assert!(fade.fade_stop <= 0.0);
            prop_assert_eq!(fade.color_at(0.5).a(), 0);
        }
    }

    #[test]
    fn alpha_never_increases_left_to_right(fade_width in 0.0f32..50.0, width in 1u32..120) {
        let fade = FadeStyle::for_width(TextStyle::new(), PackedRgba::WHITE, fade_width, width as f32)
            .expect("non-zero width");
        let mut prev = u8::MAX;
        for x in 0..width {
            let a = fade.color_at((x as f32 + 0.5) / width as f32).a();
            prop_assert!(a <= prev);
            prev = a;
        }
    }

    #[test]
    fn height_never_exceeds_line_cap(text in text_strategy(), width in 1u16..40, max_lines in 1usize..5) {
        let request = FadedText::new(text).max_lines(max_lines);
        let height = usize::from(request.height(width));
        prop_assert!(height <= max_lines, "height {} over cap {}", height, max_lines);
    }

    #[test]
    fn render_stays_inside_area(
        text in text_strategy(),
        max_lines in 1usize..4,
        w in 0u16..20,
        h in 0u16..6,
    ) {
        let request = FadedText::new(text)
            .max_lines(max_lines)
            .ambient(AmbientStyle::new(PackedRgba::RED));
        let mut buf = Buffer::new(24, 8);
        request.render(Rect::new(2, 1, w, h), &mut buf);
        for y in 0..8u16 {
            for x in 0..24u16 {
                let inside = x >= 2 && x < 2 + w && y >= 1 && y < 1 + h;
                if !inside {
                    prop_assert!(buf.get(x, y).unwrap().is_empty(), "wrote at ({}, {})", x, y);
                }
            }
        }
    }
}
