#![forbid(unsafe_code)]

//! Buffer grid storage.
//!
//! The `Buffer` is a 2D grid of [`Cell`]s plus the [`GraphemePool`] its
//! multi-scalar cells point into. Widgets paint into it; hosts and tests
//! read it back row by row.
//!
//! # Layout
//!
//! Cells are stored in row-major order: `index = y * width + x`.
//!
//! # Invariants
//!
//! 1. `cells.len() == width * height`
//! 2. Width and height never change after creation
//! 3. A wide head is always followed by its continuation cells, and a
//!    continuation never outlives its head
//! 4. Every pooled id stored in a cell resolves in `graphemes`

use unicode_width::UnicodeWidthStr;

use crate::cell::{Cell, CellContent};
use crate::grapheme_pool::GraphemePool;
use fadetext_core::geometry::Rect;

/// A 2D grid of terminal cells.
///
/// # Example
///
/// ```
/// use fadetext_render::buffer::Buffer;
/// use fadetext_render::cell::Cell;
///
/// let mut buffer = Buffer::new(8, 2);
/// buffer.set(0, 0, Cell::from_char('H'));
/// let accented = buffer.content_for("e\u{301}");
/// buffer.set(1, 0, Cell::new(accented));
/// assert_eq!(buffer.row_text(0).trim_end(), "He\u{301}");
/// ```
#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    graphemes: GraphemePool,
}

impl Buffer {
    /// Create a new buffer with the given dimensions.
    ///
    /// # Panics
    ///
    /// Panics if width or height is 0.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0, "buffer width must be > 0");
        assert!(height > 0, "buffer height must be > 0");

        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
            graphemes: GraphemePool::new(),
        }
    }

    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The whole buffer as a rect at the origin.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Cell content for one grapheme cluster.
    ///
    /// Single scalars are stored inline. Longer clusters are interned in the
    /// buffer's pool; if the pool is exhausted the cluster degrades to its
    /// first scalar.
    pub fn content_for(&mut self, grapheme: &str) -> CellContent {
        let mut chars = grapheme.chars();
        let Some(first) = chars.next() else {
            return CellContent::EMPTY;
        };
        if chars.next().is_none() {
            return CellContent::from_char(first);
        }
        let width = u8::try_from(UnicodeWidthStr::width(grapheme)).unwrap_or(u8::MAX);
        match self.graphemes.intern(grapheme, width) {
            Some(id) => CellContent::from_grapheme(id),
            None => CellContent::from_char(first),
        }
    }

    /// Text of a pooled cell, or `None` for inline and empty content.
    pub fn grapheme(&self, content: CellContent) -> Option<&str> {
        content.grapheme_id().and_then(|id| self.graphemes.get(id))
    }

    /// Reset the cells a wide head spans, or the head owning a continuation
    /// at (x, y), so no half of a wide grapheme is left behind.
    fn cleanup_overlap(&mut self, x: u16, y: u16) {
        let Some(idx) = self.index(x, y) else { return };
        let current = self.cells[idx];

        if current.content.width() > 1 {
            self.clear_tails(x, y, current.content.width());
        } else if current.is_continuation() {
            let mut head_x = x;
            while head_x > 0 {
                head_x -= 1;
                let Some(head_idx) = self.index(head_x, y) else { break };
                let head = self.cells[head_idx];
                if head.is_continuation() {
                    continue;
                }
                let width = head.content.width();
                if head_x as usize + width > x as usize {
                    self.cells[head_idx] = Cell::default();
                    self.clear_tails(head_x, y, width);
                }
                break;
            }
        }
    }

    fn clear_tails(&mut self, head_x: u16, y: u16, width: usize) {
        for i in 1..width {
            if let Some(tail) = self.index(head_x.saturating_add(i as u16), y)
                && self.cells[tail].is_continuation()
            {
                self.cells[tail] = Cell::default();
            }
        }
    }

    /// Set the cell at (x, y).
    ///
    /// - Skips cells outside the buffer
    /// - Composites the new background over the existing one
    /// - Writes continuation cells after wide graphemes; a wide grapheme
    ///   that does not fully fit is not written at all
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        let width = cell.content.width().max(1);
        if y >= self.height || x as usize + width > self.width as usize {
            return;
        }

        for i in 0..width {
            self.cleanup_overlap(x + i as u16, y);
        }

        let Some(idx) = self.index(x, y) else { return };
        let composited_bg = cell.bg.over(self.cells[idx].bg);
        self.cells[idx] = Cell {
            bg: composited_bg,
            ..cell
        };

        for i in 1..width {
            if let Some(tail) = self.index(x + i as u16, y) {
                self.cells[tail] = Cell::CONTINUATION;
            }
        }
    }

    /// Fill the part of `rect` inside the buffer with `cell`.
    pub fn fill(&mut self, rect: Rect, cell: Cell) {
        let clipped = self.bounds().intersection(&rect);
        for y in clipped.y..clipped.bottom() {
            for x in clipped.x..clipped.right() {
                self.set(x, y, cell);
            }
        }
    }

    /// Reset every cell and drop pooled graphemes.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
        self.graphemes.clear();
    }

    /// Cells of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_cells(&self, y: u16) -> &[Cell] {
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    /// Plain text of a row; empty cells read as spaces, continuations are skipped.
    pub fn row_text(&self, y: u16) -> String {
        let mut text = String::with_capacity(self.width as usize);
        for cell in self.row_cells(y) {
            if cell.is_continuation() {
                continue;
            }
            match (cell.content.as_char(), self.grapheme(cell.content)) {
                (Some(c), _) => text.push(c),
                (None, Some(cluster)) => text.push_str(cluster),
                (None, None) => text.push(' '),
            }
        }
        text
    }
}

impl Default for Buffer {
    /// Create a 1x1 buffer (minimum size).
    fn default() -> Self {
        Self::new(1, 1)
    }
}
