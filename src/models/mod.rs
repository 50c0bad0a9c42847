//! Data model for grid-world heat maps
//!
//! - `grid`: cell layout and classification
//! - `policy`: per-state action preference weights
//! - `action`: action indices and arrow glyphs
//! - `maps`: preset Frozen Lake layouts

pub mod action;
pub mod grid;
pub mod maps;
pub mod policy;

pub use action::*;
pub use grid::*;
pub use policy::*;
