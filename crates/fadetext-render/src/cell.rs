#![forbid(unsafe_code)]

//! Cell types: content, straight-alpha colors, and style flags.
//!
//! A [`Cell`] holds one grapheme, its foreground and background colors, and
//! its [`StyleFlags`]. Single-scalar graphemes are stored inline; clusters of
//! several scalars (combining marks, ZWJ emoji) live in the owning buffer's
//! [`GraphemePool`](crate::grapheme_pool::GraphemePool) and the cell keeps a
//! [`GraphemeId`]. Wide graphemes occupy a head cell followed by
//! [`Cell::CONTINUATION`] cells.

use unicode_width::UnicodeWidthChar;

/// Reference to a pooled grapheme cluster.
///
/// Bits 0..24 hold the pool slot, bits 24..31 the display width, so width
/// queries never touch the pool.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct GraphemeId(u32);

impl GraphemeId {
    /// Largest addressable slot.
    pub const MAX_SLOT: u32 = 0x00FF_FFFF;

    /// Largest storable display width.
    pub const MAX_WIDTH: u8 = 127;

    /// Pack a slot and a display width.
    #[inline]
    pub const fn new(slot: u32, width: u8) -> Self {
        debug_assert!(slot <= Self::MAX_SLOT, "grapheme slot overflow");
        debug_assert!(width <= Self::MAX_WIDTH, "grapheme width overflow");
        Self((slot & Self::MAX_SLOT) | (((width & Self::MAX_WIDTH) as u32) << 24))
    }

    #[inline]
    pub const fn slot(self) -> usize {
        (self.0 & Self::MAX_SLOT) as usize
    }

    #[inline]
    pub const fn width(self) -> usize {
        ((self.0 >> 24) & 0x7F) as usize
    }
}

impl core::fmt::Debug for GraphemeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GraphemeId")
            .field("slot", &self.slot())
            .field("width", &self.width())
            .finish()
    }
}

/// Content of a single cell.
///
/// Encoding of the inner `u32`:
/// - `0`: empty
/// - `0x7FFF_FFFF`: continuation of a wide grapheme
/// - bit 31 set: a [`GraphemeId`] in the low 31 bits
/// - otherwise: a Unicode scalar value
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct CellContent(u32);

impl CellContent {
    /// Empty cell content.
    pub const EMPTY: Self = Self(0);

    /// Placeholder for the trailing columns of a wide grapheme.
    pub const CONTINUATION: Self = Self(0x7FFF_FFFF);

    const GRAPHEME_BIT: u32 = 0x8000_0000;

    /// Content holding a single scalar.
    #[inline]
    pub const fn from_char(c: char) -> Self {
        Self(c as u32)
    }

    /// Content referencing a pooled cluster.
    #[inline]
    pub const fn from_grapheme(id: GraphemeId) -> Self {
        Self(Self::GRAPHEME_BIT | id.0)
    }

    #[inline]
    pub const fn is_continuation(self) -> bool {
        self.0 == Self::CONTINUATION.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == Self::EMPTY.0
    }

    #[inline]
    pub const fn is_grapheme(self) -> bool {
        self.0 & Self::GRAPHEME_BIT != 0
    }

    /// The scalar stored inline, if any.
    #[inline]
    pub fn as_char(self) -> Option<char> {
        if self.is_empty() || self.is_continuation() || self.is_grapheme() {
            None
        } else {
            char::from_u32(self.0)
        }
    }

    /// The pooled cluster this content points at, if any.
    #[inline]
    pub const fn grapheme_id(self) -> Option<GraphemeId> {
        if self.is_grapheme() {
            Some(GraphemeId(self.0 & !Self::GRAPHEME_BIT))
        } else {
            None
        }
    }

    /// Display width in columns.
    ///
    /// Empty and continuation content are zero-width; control characters
    /// occupy one column so they never collapse the grid.
    #[inline]
    pub fn width(self) -> usize {
        if let Some(id) = self.grapheme_id() {
            return id.width();
        }
        match self.as_char() {
            Some(c) => c.width().unwrap_or(1),
            None => 0,
        }
    }
}

impl Default for CellContent {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl core::fmt::Debug for CellContent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_empty() {
            write!(f, "CellContent::EMPTY")
        } else if self.is_continuation() {
            write!(f, "CellContent::CONTINUATION")
        } else if let Some(id) = self.grapheme_id() {
            write!(f, "CellContent::Grapheme({id:?})")
        } else if let Some(c) = self.as_char() {
            write!(f, "CellContent::Char({c:?})")
        } else {
            write!(f, "CellContent::Invalid({:#x})", self.0)
        }
    }
}

/// A single terminal cell.
///
/// The default cell is empty, white on transparent, with no flags.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    pub content: CellContent,
    /// Foreground color (straight alpha).
    pub fg: PackedRgba,
    /// Background color (straight alpha).
    pub bg: PackedRgba,
    pub flags: StyleFlags,
}

impl Cell {
    /// Trailing column of a wide grapheme.
    pub const CONTINUATION: Self = Self {
        content: CellContent::CONTINUATION,
        fg: PackedRgba::TRANSPARENT,
        bg: PackedRgba::TRANSPARENT,
        flags: StyleFlags::empty(),
    };

    #[inline]
    pub const fn new(content: CellContent) -> Self {
        Self {
            content,
            fg: PackedRgba::WHITE,
            bg: PackedRgba::TRANSPARENT,
            flags: StyleFlags::empty(),
        }
    }

    #[inline]
    pub const fn from_char(c: char) -> Self {
        Self::new(CellContent::from_char(c))
    }

    #[inline]
    pub const fn is_continuation(&self) -> bool {
        self.content.is_continuation()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    #[inline]
    pub const fn with_fg(mut self, fg: PackedRgba) -> Self {
        self.fg = fg;
        self
    }

    #[inline]
    pub const fn with_bg(mut self, bg: PackedRgba) -> Self {
        self.bg = bg;
        self
    }

    #[inline]
    pub const fn with_flags(mut self, flags: StyleFlags) -> Self {
        self.flags = flags;
        self
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(CellContent::EMPTY)
    }
}

/// A 4-byte RGBA color, `0xRRGGBBAA`.
///
/// Channels are straight alpha: a fade lowers `a` and leaves `r`, `g`, `b`
/// untouched. Compositing is Porter-Duff source-over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(transparent)]
pub struct PackedRgba(pub u32);

impl PackedRgba {
    pub const TRANSPARENT: Self = Self(0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    /// Opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32))
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// Same color with the alpha channel replaced.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self((self.0 & 0xFFFF_FF00) | a as u32)
    }

    #[inline]
    const fn div_round_u8(numer: u64, denom: u64) -> u8 {
        debug_assert!(denom != 0);
        let v = (numer + (denom / 2)) / denom;
        if v > 255 { 255 } else { v as u8 }
    }

    /// Porter-Duff source-over: `self` over `dst`, rounded once.
    #[inline]
    pub fn over(self, dst: Self) -> Self {
        let s_a = self.a() as u64;
        if s_a == 255 {
            return self;
        }
        if s_a == 0 {
            return dst;
        }

        let d_a = dst.a() as u64;
        let inv_s_a = 255 - s_a;

        // Output alpha scaled by 255.
        let numer_a = 255 * s_a + d_a * inv_s_a;
        if numer_a == 0 {
            return Self::TRANSPARENT;
        }

        let out_a = Self::div_round_u8(numer_a, 255);
        let channel = |s: u8, d: u8| {
            Self::div_round_u8(
                (s as u64) * s_a * 255 + (d as u64) * d_a * inv_s_a,
                numer_a,
            )
        };

        Self::rgba(
            channel(self.r(), dst.r()),
            channel(self.g(), dst.g()),
            channel(self.b(), dst.b()),
            out_a,
        )
    }
}

bitflags::bitflags! {
    /// Per-cell text attributes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        const BOLD          = 0b0000_0001;
        const DIM           = 0b0000_0010;
        const ITALIC        = 0b0000_0100;
        const UNDERLINE     = 0b0000_1000;
        const STRIKETHROUGH = 0b0001_0000;
    }
}
