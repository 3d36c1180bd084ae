//! Property-based invariant tests for style resolution and fade gradients.
//!
//! 1. Merging with an empty layer is the identity on either side.
//! 2. A set attribute always wins over the base layer.
//! 3. Normalized gradient stops are monotonic and inside `[0, 1]`.
//! 4. Sampling a fade never yields more alpha than the source color.

use fadetext_render::cell::PackedRgba;
use fadetext_style::{FadeGradient, FontWeight, TextAlign, TextStyle, resolve_color};
use proptest::prelude::*;

fn color() -> impl Strategy<Value = PackedRgba> {
    any::<u32>().prop_map(PackedRgba)
}

fn text_style() -> impl Strategy<Value = TextStyle> {
    (
        prop::option::of(color()),
        prop::option::of(1.0f32..64.0),
        prop::option::of(prop_oneof![Just(FontWeight::NORMAL), Just(FontWeight::BOLD)]),
        prop::option::of(-2.0f32..4.0),
        prop::option::of(prop_oneof![
            Just(TextAlign::Left),
            Just(TextAlign::Center),
            Just(TextAlign::Right)
        ]),
    )
        .prop_map(|(color, font_size, font_weight, letter_spacing, text_align)| TextStyle {
            color,
            font_size,
            font_weight,
            letter_spacing,
            text_align,
            ..TextStyle::default()
        })
}

proptest! {
    #[test]
    fn merge_with_empty_is_identity(style in text_style()) {
        prop_assert_eq!(style.merge(&TextStyle::new()), style.clone());
        prop_assert_eq!(TextStyle::new().merge(&style), style);
    }

    #[test]
    fn set_attributes_win(top in text_style(), base in text_style()) {
        let merged = top.merge(&base);
        prop_assert_eq!(merged.color, top.color.or(base.color));
        prop_assert_eq!(merged.font_size, top.font_size.or(base.font_size));
        prop_assert_eq!(merged.font_weight, top.font_weight.or(base.font_weight));
        prop_assert_eq!(merged.text_align, top.text_align.or(base.text_align));
    }

    #[test]
    fn resolved_color_is_one_of_the_layers(
        explicit in prop::option::of(color()),
        style in prop::option::of(color()),
        ambient in color(),
    ) {
        let resolved = resolve_color(explicit, style, ambient);
        let expected = explicit.or(style).unwrap_or(ambient);
        prop_assert_eq!(resolved, expected);
    }

    #[test]
    fn normalized_stops_are_monotonic(
        positions in prop::collection::vec(prop_oneof![-2.0f32..3.0, Just(f32::NAN)], 0..6),
    ) {
        let gradient = FadeGradient::new(
            positions.into_iter().map(|p| (p, PackedRgba::WHITE)).collect(),
        );
        let stops = gradient.stops();
        prop_assert!(stops.iter().all(|(p, _)| (0.0..=1.0).contains(p)));
        prop_assert!(stops.windows(2).all(|w| w[0].0 <= w[1].0));
    }

    #[test]
    fn fade_alpha_bounded_by_source(c in color(), fade_stop in -1.0f32..1.5, t in -0.5f32..1.5) {
        let sampled = FadeGradient::fade_out(c, fade_stop).sample(t);
        prop_assert!(sampled.a() <= c.a());
        prop_assert_eq!((sampled.r(), sampled.g(), sampled.b()), (c.r(), c.g(), c.b()));
    }
}
