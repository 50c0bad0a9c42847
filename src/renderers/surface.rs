//! Drawing surface abstraction
//!
//! A surface is a single axes panel addressed in grid cells: the renderers
//! draw a color-mapped image, centered cell text, and a color bar onto it.

use serde::{Deserialize, Serialize};

use crate::error::SurfaceError;
use crate::utils::index::ValueGrid;
use super::colormap::Colormap;

/// Normalization of a drawn image, needed to attach a color bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageInfo {
    pub vmin: f64,
    pub vmax: f64,
    pub colormap: Colormap,
}

impl ImageInfo {
    /// Normalization spanning the finite values of `grid`
    pub fn for_grid(grid: &ValueGrid, colormap: Colormap) -> Self {
        let (vmin, vmax) = grid.finite_range().unwrap_or((0.0, 0.0));
        Self { vmin, vmax, colormap }
    }
}

/// Centered cell text style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in points
    pub font_size: f32,
    /// Color spec (named or hex), validated by the surface
    pub color: String,
}

impl TextStyle {
    pub fn new<S: Into<String>>(font_size: f32, color: S) -> Self {
        Self { font_size, color: color.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorbarStyle {
    pub label_font_size: f32,
    pub fraction: f32,
    pub pad: f32,
    /// Number of tick labels along the bar
    pub ticks: usize,
}

pub trait DrawingSurface {
    /// Draw `grid` as a color-mapped image covering the whole panel
    fn image(&mut self, grid: &ValueGrid, colormap: Colormap) -> Result<ImageInfo, SurfaceError>;

    /// Draw `text` centered in cell `(row, col)`
    fn text(&mut self, row: usize, col: usize, text: &str, style: &TextStyle) -> Result<(), SurfaceError>;

    /// Attach a labeled color bar for a drawn image
    fn colorbar(&mut self, image: &ImageInfo, label: &str, style: &ColorbarStyle) -> Result<(), SurfaceError>;

    /// Remove row/column tick marks
    fn clear_ticks(&mut self) -> Result<(), SurfaceError>;

    fn set_title(&mut self, _title: &str) -> Result<(), SurfaceError> {
        Ok(())
    }
}

impl<S: DrawingSurface + ?Sized> DrawingSurface for &mut S {
    fn image(&mut self, grid: &ValueGrid, colormap: Colormap) -> Result<ImageInfo, SurfaceError> {
        (**self).image(grid, colormap)
    }

    fn text(&mut self, row: usize, col: usize, text: &str, style: &TextStyle) -> Result<(), SurfaceError> {
        (**self).text(row, col, text, style)
    }

    fn colorbar(&mut self, image: &ImageInfo, label: &str, style: &ColorbarStyle) -> Result<(), SurfaceError> {
        (**self).colorbar(image, label, style)
    }

    fn clear_ticks(&mut self) -> Result<(), SurfaceError> {
        (**self).clear_ticks()
    }

    fn set_title(&mut self, title: &str) -> Result<(), SurfaceError> {
        (**self).set_title(title)
    }
}
