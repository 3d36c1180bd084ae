#![forbid(unsafe_code)]

//! Horizontal fade-out gradient.
//!
//! A [`FadeGradient`] maps a horizontal position `t` (0 at the left edge of a
//! line, 1 at the right edge) to a straight-alpha color. Positions are
//! normalized the way raster gradients clamp them: the first stop is pinned
//! into `[0, 1]` and every following stop into `[previous, 1]`. Outside the
//! stops the end colors extend (clamped tiling).

use fadetext_render::cell::PackedRgba;

use crate::text_style::TextStyle;

#[inline]
fn lerp_u8(a: u8, b: u8, t: f32) -> u8 {
    let a = a as f32;
    let b = b as f32;
    (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
}

#[inline]
fn lerp_color(a: PackedRgba, b: PackedRgba, t: f32) -> PackedRgba {
    let t = t.clamp(0.0, 1.0);
    PackedRgba::rgba(
        lerp_u8(a.r(), b.r(), t),
        lerp_u8(a.g(), b.g(), t),
        lerp_u8(a.b(), b.b(), t),
        lerp_u8(a.a(), b.a(), t),
    )
}

/// A multi-stop horizontal gradient with clamped tiling.
#[derive(Clone, Debug, PartialEq)]
pub struct FadeGradient {
    stops: Vec<(f32, PackedRgba)>,
}

impl FadeGradient {
    /// Create a gradient, normalizing stop positions to be monotonic in `[0, 1]`.
    ///
    /// Stops keep their given order; a position below its predecessor is
    /// raised to it, and NaN positions collapse onto the previous stop.
    pub fn new(stops: Vec<(f32, PackedRgba)>) -> Self {
        let mut prev = 0.0_f32;
        let stops = stops
            .into_iter()
            .map(|(pos, color)| {
                let pos = if pos.is_nan() { prev } else { pos.clamp(prev, 1.0) };
                prev = pos;
                (pos, color)
            })
            .collect();
        Self { stops }
    }

    /// Solid `color` up to `fade_stop / 2`, then a linear fade to fully
    /// transparent at `fade_stop`.
    ///
    /// A `fade_stop` at or below zero degenerates to transparent from the
    /// very start of the line.
    pub fn fade_out(color: PackedRgba, fade_stop: f32) -> Self {
        Self::new(vec![
            (0.0, color),
            (fade_stop / 2.0, color),
            (fade_stop, color.with_alpha(0)),
        ])
    }

    /// Access the normalized stops.
    #[must_use]
    pub fn stops(&self) -> &[(f32, PackedRgba)] {
        &self.stops
    }

    /// Sample the gradient at horizontal position `t`.
    #[must_use]
    pub fn sample(&self, t: f32) -> PackedRgba {
        let Some(&(first_pos, first_color)) = self.stops.first() else {
            return PackedRgba::TRANSPARENT;
        };
        if t.is_nan() || t <= first_pos {
            return first_color;
        }
        let Some(&(last_pos, last_color)) = self.stops.last() else {
            return first_color;
        };
        if t >= last_pos {
            return last_color;
        }

        for window in self.stops.windows(2) {
            let (p0, c0) = window[0];
            let (p1, c1) = window[1];
            if t <= p1 {
                let denom = p1 - p0;
                if denom <= f32::EPSILON {
                    return c1;
                }
                return lerp_color(c0, c1, (t - p0) / denom);
            }
        }

        last_color
    }
}

/// A text style whose color is a horizontal fade-out brush.
#[derive(Clone, Debug, PartialEq)]
pub struct FadeStyle {
    /// Typography; its `color` is the opaque color the fade starts from.
    pub text: TextStyle,
    /// The brush painted instead of the flat color.
    pub gradient: FadeGradient,
    /// Position where the brush becomes fully transparent, before clamping.
    pub fade_stop: f32,
}

impl FadeStyle {
    /// Build the fade style for a line `available_width` wide whose last
    /// `fade_width` units fade out.
    ///
    /// Returns `None` for a zero width: there is no line to fade across.
    pub fn for_width(
        text: TextStyle,
        color: PackedRgba,
        fade_width: f32,
        available_width: f32,
    ) -> Option<Self> {
        if available_width <= 0.0 || available_width.is_nan() {
            return None;
        }
        let fade_stop = 1.0 - fade_width / available_width;
        Some(Self {
            text: TextStyle {
                color: Some(color),
                ..text
            },
            gradient: FadeGradient::fade_out(color, fade_stop),
            fade_stop,
        })
    }

    /// Color of the glyph whose center sits at `t`.
    #[inline]
    pub fn color_at(&self, t: f32) -> PackedRgba {
        self.gradient.sample(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: PackedRgba = PackedRgba::rgb(20, 40, 60);

    #[test]
    fn fade_out_has_three_stops() {
        let g = FadeGradient::fade_out(INK, 0.8);
        let stops = g.stops();
        assert_eq!(stops.len(), 3);
        assert_eq!(stops[0], (0.0, INK));
        assert_eq!(stops[1], (0.4, INK));
        assert_eq!(stops[2].0, 0.8);
        assert_eq!(stops[2].1.a(), 0);
    }

    #[test]
    fn solid_before_half_stop() {
        let g = FadeGradient::fade_out(INK, 0.8);
        assert_eq!(g.sample(0.0), INK);
        assert_eq!(g.sample(0.39), INK);
    }

    #[test]
    fn transparent_after_stop() {
        let g = FadeGradient::fade_out(INK, 0.8);
        assert_eq!(g.sample(0.8).a(), 0);
        assert_eq!(g.sample(1.0).a(), 0);
        assert_eq!(g.sample(7.0).a(), 0);
    }

    #[test]
    fn alpha_decreases_through_fade_zone() {
        let g = FadeGradient::fade_out(INK, 0.8);
        let a1 = g.sample(0.5).a();
        let a2 = g.sample(0.6).a();
        let a3 = g.sample(0.7).a();
        assert!(a1 > a2 && a2 > a3, "{a1} {a2} {a3}");
        assert_eq!(g.sample(0.6).r(), INK.r());
    }

    #[test]
    fn negative_stop_is_transparent_from_start() {
        let g = FadeGradient::fade_out(INK, -0.5);
        assert!(g.stops().iter().all(|(pos, _)| *pos == 0.0));
        assert_eq!(g.sample(0.01).a(), 0);
        assert_eq!(g.sample(0.5).a(), 0);
    }

    #[test]
    fn stop_of_one_fades_to_right_edge() {
        let g = FadeGradient::fade_out(INK, 1.0);
        assert_eq!(g.sample(0.5), INK);
        assert!(g.sample(0.75).a() > 0);
        assert_eq!(g.sample(1.0).a(), 0);
    }

    #[test]
    fn new_pins_descending_positions() {
        let g = FadeGradient::new(vec![
            (0.5, PackedRgba::RED),
            (0.2, PackedRgba::GREEN),
            (f32::NAN, PackedRgba::BLUE),
            (3.0, PackedRgba::WHITE),
        ]);
        let positions: Vec<f32> = g.stops().iter().map(|(p, _)| *p).collect();
        assert_eq!(positions, vec![0.5, 0.5, 0.5, 1.0]);
    }

    #[test]
    fn empty_gradient_samples_transparent() {
        assert_eq!(FadeGradient::new(Vec::new()).sample(0.3), PackedRgba::TRANSPARENT);
    }

    #[test]
    fn for_width_computes_fade_stop() {
        let style = FadeStyle::for_width(TextStyle::new(), INK, 10.0, 40.0).unwrap();
        assert_eq!(style.fade_stop, 0.75);
        assert_eq!(style.text.color, Some(INK));
        assert_eq!(style.color_at(0.2), INK);
    }

    #[test]
    fn for_width_zero_is_none() {
        assert!(FadeStyle::for_width(TextStyle::new(), INK, 10.0, 0.0).is_none());
    }

    #[test]
    fn for_width_wider_fade_than_line_is_allowed() {
        let style = FadeStyle::for_width(TextStyle::new(), INK, 50.0, 20.0).unwrap();
        assert!(style.fade_stop < 0.0);
        assert_eq!(style.color_at(0.5).a(), 0);
    }
}
