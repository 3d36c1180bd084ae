//! Property-based invariant tests for the cell buffer.
//!
//! 1. Filling a rect touches exactly its part inside the buffer.
//! 2. A wide glyph is always followed by its continuation cell.
//! 3. Pooled clusters read back exactly as written.
//! 4. Compositing an opaque color replaces the destination.

use fadetext_core::geometry::Rect;
use fadetext_render::buffer::Buffer;
use fadetext_render::cell::{Cell, PackedRgba};
use proptest::prelude::*;

proptest! {
    #[test]
    fn fill_touches_only_the_clipped_rect(
        rx in 0u16..14, ry in 0u16..9, rw in 0u16..14, rh in 0u16..9,
    ) {
        let mut buf = Buffer::new(10, 6);
        let rect = Rect::new(rx, ry, rw, rh);
        buf.fill(rect, Cell::from_char('x'));

        let clip = buf.bounds().intersection(&rect);
        for y in 0..6u16 {
            for x in 0..10u16 {
                let written = !buf.get(x, y).unwrap().is_empty();
                prop_assert_eq!(written, clip.contains(x, y), "cell ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn wide_glyph_has_continuation(
        writes in prop::collection::vec((0u16..8, prop_oneof![Just('a'), Just('日')]), 0..30),
    ) {
        let mut buf = Buffer::new(8, 1);
        for (x, c) in writes {
            buf.set(x, 0, Cell::from_char(c));
        }
        let row = buf.row_cells(0);
        for (x, cell) in row.iter().enumerate() {
            if cell.content.width() == 2 {
                prop_assert!(row[x + 1].is_continuation(), "orphaned head at {}", x);
            }
            if cell.is_continuation() {
                prop_assert!(x > 0 && row[x - 1].content.width() == 2, "orphaned tail at {}", x);
            }
        }
    }

    #[test]
    fn pooled_clusters_read_back(
        clusters in prop::collection::vec(
            prop_oneof![Just("e\u{301}"), Just("a\u{308}"), Just("o"), Just("n\u{303}")],
            1..8,
        ),
    ) {
        let mut buf = Buffer::new(8, 1);
        for (x, cluster) in clusters.iter().enumerate() {
            let content = buf.content_for(cluster);
            buf.set(x as u16, 0, Cell::new(content));
        }
        let row = buf.row_text(0);
        prop_assert_eq!(row.trim_end(), clusters.concat());
    }

    #[test]
    fn opaque_over_replaces(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), dst in any::<u32>()) {
        let src = PackedRgba::rgb(r, g, b);
        prop_assert_eq!(src.over(PackedRgba(dst)), src);
    }
}
