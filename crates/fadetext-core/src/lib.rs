#![forbid(unsafe_code)]

//! Core: geometry and logging shared by every FadeText crate.

pub mod geometry;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, trace_span, warn};
