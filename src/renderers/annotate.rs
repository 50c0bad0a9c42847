//! Cell classification and text contrast shared by both grid renderers
//!
//! Both renderers draw the same frame: the color-mapped value image, fixed
//! markers on hazard and goal cells, no ticks, and a labeled color bar. They
//! only differ in what goes into ordinary cells, which is supplied as a
//! callback to `draw_panel`.

use serde::{Deserialize, Serialize};

use crate::config::RenderConfig;
use crate::error::{RenderError, Result};
use crate::models::grid::{CellCategory, GridDescription};
use crate::utils::format::nan_max;
use crate::utils::index::{cells, ValueGrid};
use super::colormap::Colormap;
use super::surface::{ColorbarStyle, DrawingSurface, TextStyle};

/// Codes that are ordinary without being worth a log line
const KNOWN_ORDINARY_CODES: [char; 2] = ['S', 'F'];

/// Text contrast against the cell background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Contrast {
    /// Dark text, drawn over low (light) cells
    Dark,
    /// Light text, drawn over high (dark) cells
    Light,
}

/// `Dark` when `value < max / 2`, `Light` otherwise (including NaN comparisons)
pub fn contrast_for(value: f64, max: f64) -> Contrast {
    if value < max / 2.0 {
        Contrast::Dark
    } else {
        Contrast::Light
    }
}

/// An ordinary cell handed to a renderer's annotation callback
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrdinaryCell {
    pub state: usize,
    pub row: usize,
    pub col: usize,
    pub value: f64,
    pub contrast: Contrast,
}

/// Text styles resolved from a `RenderConfig`
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationStyles {
    pub hazard: TextStyle,
    pub goal: TextStyle,
    pub dark: String,
    pub light: String,
    pub colorbar: ColorbarStyle,
}

impl AnnotationStyles {
    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            hazard: TextStyle::new(config.marker_font_size, config.colors.hazard.clone()),
            goal: TextStyle::new(config.marker_font_size, config.colors.goal.clone()),
            dark: config.colors.dark.clone(),
            light: config.colors.light.clone(),
            colorbar: ColorbarStyle {
                label_font_size: config.colorbar.label_font_size,
                fraction: config.colorbar.fraction,
                pad: config.colorbar.pad,
                ticks: config.colorbar.ticks,
            },
        }
    }

    /// Style for ordinary-cell text with the given contrast
    pub fn contrast_style(&self, font_size: f32, contrast: Contrast) -> TextStyle {
        let color = match contrast {
            Contrast::Dark => &self.dark,
            Contrast::Light => &self.light,
        };
        TextStyle::new(font_size, color.clone())
    }
}

/// Fail unless there is exactly one value per grid cell
pub fn check_shape(values: &[f64], grid: &GridDescription) -> Result<()> {
    if values.len() != grid.num_cells() {
        return Err(RenderError::ShapeMismatch { values: values.len(), cells: grid.num_cells() });
    }
    Ok(())
}

/// Draw the shared panel frame, delegating ordinary cells to `annotate`
pub fn draw_panel<S, F>(
    values: &[f64],
    grid: &GridDescription,
    config: &RenderConfig,
    surface: &mut S,
    mut annotate: F,
) -> Result<()>
where
    S: DrawingSurface + ?Sized,
    F: FnMut(&mut S, &AnnotationStyles, OrdinaryCell) -> Result<()>,
{
    check_shape(values, grid)?;
    let (rows, columns) = grid.shape();
    log::debug!("drawing {}x{} value grid ({} states)", rows, columns, values.len());

    let colormap = Colormap::from_name(&config.colormap)?;
    let styles = AnnotationStyles::from_config(config);
    let value_grid = ValueGrid::reshape(values, rows, columns)?;

    if let Some(title) = &config.title {
        surface.set_title(title)?;
    }
    let image = surface.image(&value_grid, colormap)?;

    let max = nan_max(values).unwrap_or(f64::NAN);
    let mut unrecognized = 0usize;
    for (state, row, col) in cells(rows, columns) {
        let code = grid.code(row, col).unwrap_or(' ');
        match CellCategory::from_code(code) {
            CellCategory::Hazard => surface.text(row, col, &config.hazard_marker, &styles.hazard)?,
            CellCategory::Goal => surface.text(row, col, &config.goal_marker, &styles.goal)?,
            CellCategory::Ordinary(c) => {
                if !KNOWN_ORDINARY_CODES.contains(&c) {
                    unrecognized += 1;
                }
                let value = values[state];
                let cell = OrdinaryCell { state, row, col, value, contrast: contrast_for(value, max) };
                annotate(surface, &styles, cell)?;
            }
        }
    }
    if unrecognized > 0 {
        log::warn!("{} cells with unrecognized codes drawn as ordinary states", unrecognized);
    }

    surface.clear_ticks()?;
    surface.colorbar(&image, &config.colorbar.label, &styles.colorbar)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contrast_is_max_relative() {
        assert_eq!(contrast_for(0.0, 1.0), Contrast::Dark);
        assert_eq!(contrast_for(0.5, 1.0), Contrast::Light);
        assert_eq!(contrast_for(0.49, 1.0), Contrast::Dark);
    }

    #[test]
    fn test_contrast_non_positive_max() {
        // all values negative: every value lies below max / 2
        assert_eq!(contrast_for(-1.0, -1.0), Contrast::Dark);
        assert_eq!(contrast_for(-4.0, -1.0), Contrast::Dark);
        // all zeros: 0 < 0 is false
        assert_eq!(contrast_for(0.0, 0.0), Contrast::Light);
    }

    #[test]
    fn test_contrast_nan_max_is_light() {
        assert_eq!(contrast_for(0.1, f64::NAN), Contrast::Light);
    }

    #[test]
    fn test_check_shape() {
        let grid = GridDescription::from_rows(&["SF", "HG"]).unwrap();
        assert!(check_shape(&[0.0; 4], &grid).is_ok());
        assert_eq!(
            check_shape(&[0.0; 3], &grid),
            Err(RenderError::ShapeMismatch { values: 3, cells: 4 })
        );
    }
}
