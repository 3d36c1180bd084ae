#![forbid(unsafe_code)]

//! Render kernel: cells, colors, and the buffer widgets paint into.

pub mod buffer;
pub mod cell;
pub mod grapheme_pool;
