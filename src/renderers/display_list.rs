//! Display List for heat-map rendering
//!
//! A `DisplayList` is a recording drawing surface. Every draw call becomes a
//! serializable `DrawCommand` with colors already resolved, so JavaScript can
//! paint the panel (canvas, DOM) without any color mapping of its own.

use serde::{Deserialize, Serialize};

use crate::error::SurfaceError;
use crate::utils::index::{cells, ValueGrid};
use super::color::Rgb;
use super::colormap::Colormap;
use super::surface::{ColorbarStyle, DrawingSurface, ImageInfo, TextStyle};

/// A single recorded draw call
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    Title {
        text: String,
    },

    Image {
        rows: usize,
        columns: usize,
        vmin: f64,
        vmax: f64,
        colormap: Colormap,
        /// Fill color per cell (row-major hex), `None` for non-finite values
        fills: Vec<Option<String>>,
    },

    Text(RenderText),

    ClearTicks,

    Colorbar {
        label: String,
        label_font_size: f32,
        fraction: f32,
        pad: f32,
        vmin: f64,
        vmax: f64,
        /// Gradient stops from low to high (hex)
        stops: Vec<String>,
    },
}

/// Centered text in one grid cell
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderText {
    pub row: usize,
    pub col: usize,
    pub text: String,
    pub font_size: f32,
    /// Color as requested by the renderer
    pub color: String,
    /// Resolved color
    pub hex: String,
}

/// Recording surface for a `rows x columns` panel
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DisplayList {
    pub rows: usize,
    pub columns: usize,
    pub ticks_visible: bool,
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns, ticks_visible: true, commands: Vec::new() }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// All recorded text, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &RenderText> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text(t) => Some(t),
            _ => None,
        })
    }

    /// Text drawn in cell `(row, col)`
    pub fn text_at(&self, row: usize, col: usize) -> Option<&RenderText> {
        self.texts().find(|t| t.row == row && t.col == col)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl DrawingSurface for DisplayList {
    fn image(&mut self, grid: &ValueGrid, colormap: Colormap) -> Result<ImageInfo, SurfaceError> {
        if grid.rows() != self.rows || grid.columns() != self.columns {
            return Err(SurfaceError::ImageSize {
                rows: self.rows,
                columns: self.columns,
                found_rows: grid.rows(),
                found_columns: grid.columns(),
            });
        }
        let info = ImageInfo::for_grid(grid, colormap);
        let fills = cells(grid.rows(), grid.columns())
            .map(|(_, row, col)| {
                grid.get(row, col)
                    .and_then(|v| colormap.color_for(v, info.vmin, info.vmax))
                    .map(|rgb| rgb.to_hex())
            })
            .collect();

        self.commands.push(DrawCommand::Image {
            rows: grid.rows(),
            columns: grid.columns(),
            vmin: info.vmin,
            vmax: info.vmax,
            colormap,
            fills,
        });
        Ok(info)
    }

    fn text(&mut self, row: usize, col: usize, text: &str, style: &TextStyle) -> Result<(), SurfaceError> {
        if row >= self.rows || col >= self.columns {
            return Err(SurfaceError::CellOutOfBounds { row, col });
        }
        if !(style.font_size.is_finite() && style.font_size > 0.0) {
            return Err(SurfaceError::InvalidFontSize(style.font_size));
        }
        let hex = Rgb::parse(&style.color)?.to_hex();
        self.commands.push(DrawCommand::Text(RenderText {
            row,
            col,
            text: text.to_string(),
            font_size: style.font_size,
            color: style.color.clone(),
            hex,
        }));
        Ok(())
    }

    fn colorbar(&mut self, image: &ImageInfo, label: &str, style: &ColorbarStyle) -> Result<(), SurfaceError> {
        let stops = image.colormap.anchors().iter().map(Rgb::to_hex).collect();
        self.commands.push(DrawCommand::Colorbar {
            label: label.to_string(),
            label_font_size: style.label_font_size,
            fraction: style.fraction,
            pad: style.pad,
            vmin: image.vmin,
            vmax: image.vmax,
            stops,
        });
        Ok(())
    }

    fn clear_ticks(&mut self) -> Result<(), SurfaceError> {
        self.ticks_visible = false;
        self.commands.push(DrawCommand::ClearTicks);
        Ok(())
    }

    fn set_title(&mut self, title: &str) -> Result<(), SurfaceError> {
        self.commands.push(DrawCommand::Title { text: title.to_string() });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_fills() {
        let grid = ValueGrid::reshape(&[0.0, 1.0, f64::NAN, 0.5], 2, 2).unwrap();
        let mut list = DisplayList::new(2, 2);
        let info = list.image(&grid, Colormap::Blues).unwrap();
        assert_eq!((info.vmin, info.vmax), (0.0, 1.0));

        match &list.commands()[0] {
            DrawCommand::Image { fills, .. } => {
                assert_eq!(fills[0].as_deref(), Some("#f7fbff"));
                assert_eq!(fills[1].as_deref(), Some("#08306b"));
                assert_eq!(fills[2], None);
            }
            other => panic!("expected image, got {:?}", other),
        }
    }

    #[test]
    fn test_image_size_must_match() {
        let grid = ValueGrid::reshape(&[0.0; 4], 2, 2).unwrap();
        let mut list = DisplayList::new(1, 1);
        assert_eq!(
            list.image(&grid, Colormap::Blues),
            Err(SurfaceError::ImageSize { rows: 1, columns: 1, found_rows: 2, found_columns: 2 })
        );
        assert_eq!((list.rows, list.columns), (1, 1));
        assert!(list.commands().is_empty());
    }

    #[test]
    fn test_text_validation() {
        let mut list = DisplayList::new(1, 1);
        assert_eq!(
            list.text(0, 1, "x", &TextStyle::new(10.0, "red")),
            Err(SurfaceError::CellOutOfBounds { row: 0, col: 1 })
        );
        assert_eq!(
            list.text(0, 0, "x", &TextStyle::new(10.0, "not-a-color")),
            Err(SurfaceError::InvalidColor("not-a-color".to_string()))
        );
        assert_eq!(
            list.text(0, 0, "x", &TextStyle::new(0.0, "red")),
            Err(SurfaceError::InvalidFontSize(0.0))
        );
        assert!(list.commands().is_empty());
    }

    #[test]
    fn test_json_shape() {
        let mut list = DisplayList::new(1, 1);
        list.text(0, 0, "G", &TextStyle::new(10.0, "green")).unwrap();
        list.clear_ticks().unwrap();
        let json: serde_json::Value = serde_json::from_str(&list.to_json().unwrap()).unwrap();
        assert_eq!(json["commands"][0]["kind"], "text");
        assert_eq!(json["commands"][0]["hex"], "#008000");
        assert_eq!(json["commands"][1]["kind"], "clear_ticks");
        assert_eq!(json["ticks_visible"], false);
    }
}
