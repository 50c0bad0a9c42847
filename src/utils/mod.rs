//! Utility modules shared by the renderers
//!
//! Index conversion between flat state numbers and grid cells, and number
//! formatting for cell annotations.

pub mod format;
pub mod index;

// Re-export commonly used items
pub use format::*;
pub use index::*;
