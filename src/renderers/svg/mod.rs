//! SVG rendering output
//!
//! This module provides an SVG drawing surface for heat-map panels and a
//! figure type that places several panels side by side.

pub mod document;
pub mod elements;
pub mod figure;

pub use document::{PanelFragment, SvgSurface};
pub use figure::SvgFigure;
