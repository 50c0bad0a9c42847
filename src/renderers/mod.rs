//! Renderers module
//!
//! This module contains the two grid renderers (value heat map, policy
//! overlay), the drawing surface abstraction they target, and the concrete
//! surfaces: a serializable display list and SVG output.

pub mod annotate;
pub mod color;
pub mod colormap;
pub mod display_list;
pub mod policy_grid;
pub mod surface;
pub mod svg;
pub mod value_grid;

// Re-export commonly used types
pub use colormap::Colormap;
pub use display_list::{DisplayList, DrawCommand, RenderText};
pub use policy_grid::{plot_policy_and_values, PolicyValueGridRenderer};
pub use surface::{ColorbarStyle, DrawingSurface, ImageInfo, TextStyle};
pub use svg::{SvgFigure, SvgSurface};
pub use value_grid::{plot_values, ValueGridRenderer};
