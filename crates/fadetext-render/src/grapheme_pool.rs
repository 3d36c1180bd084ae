#![forbid(unsafe_code)]

//! Interned storage for multi-scalar grapheme clusters.
//!
//! Cells hold a single `u32`. Clusters that need more than one scalar
//! (`"e\u{301}"`, flag and ZWJ emoji) are interned here once per buffer and
//! referenced by [`GraphemeId`]. The pool only grows; it is emptied together
//! with the buffer's cells.
//!
//! ```
//! use fadetext_render::grapheme_pool::GraphemePool;
//!
//! let mut pool = GraphemePool::new();
//! let id = pool.intern("e\u{301}", 1).unwrap();
//! assert_eq!(pool.get(id), Some("e\u{301}"));
//! assert_eq!(pool.intern("e\u{301}", 1), Some(id));
//! assert_eq!(pool.len(), 1);
//! ```

use rustc_hash::FxHashMap;

use crate::cell::GraphemeId;

/// Deduplicating, append-only grapheme storage.
#[derive(Debug, Clone, Default)]
pub struct GraphemePool {
    slots: Vec<String>,
    lookup: FxHashMap<String, GraphemeId>,
}

impl GraphemePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `text` with its display `width`, reusing an existing slot for
    /// identical text.
    ///
    /// Returns `None` once every slot is taken.
    pub fn intern(&mut self, text: &str, width: u8) -> Option<GraphemeId> {
        if let Some(&id) = self.lookup.get(text) {
            return Some(id);
        }
        let slot = u32::try_from(self.slots.len())
            .ok()
            .filter(|&slot| slot <= GraphemeId::MAX_SLOT)?;
        let id = GraphemeId::new(slot, width.min(GraphemeId::MAX_WIDTH));
        self.slots.push(text.to_owned());
        self.lookup.insert(text.to_owned(), id);
        Some(id)
    }

    /// Text of an interned cluster.
    pub fn get(&self, id: GraphemeId) -> Option<&str> {
        self.slots.get(id.slot()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.lookup.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_clusters_get_distinct_slots() {
        let mut pool = GraphemePool::new();
        let a = pool.intern("e\u{301}", 1).unwrap();
        let b = pool.intern("a\u{308}", 1).unwrap();
        assert_ne!(a, b);
        assert_eq!(pool.get(b), Some("a\u{308}"));
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn width_is_clamped_into_the_id() {
        let mut pool = GraphemePool::new();
        let id = pool.intern("xx", 200).unwrap();
        assert_eq!(id.width(), usize::from(GraphemeId::MAX_WIDTH));
    }

    #[test]
    fn clear_forgets_everything() {
        let mut pool = GraphemePool::new();
        let id = pool.intern("e\u{301}", 1).unwrap();
        pool.clear();
        assert!(pool.is_empty());
        assert_eq!(pool.get(id), None);
    }
}
