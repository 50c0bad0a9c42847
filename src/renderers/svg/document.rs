//! SVG document generation
//!
//! `SvgSurface` is a `DrawingSurface` that lays one heat-map panel out in px:
//! cell `(row, col)` occupies the square at `(col, row) * cell_size` inside the
//! axes area. Elements are recorded relative to the axes origin; margins for
//! the title, tick labels and color bar are only resolved in `fragment()`, so
//! draw calls may arrive in any order.

use std::path::Path;

use serde::Serialize;

use crate::config::RenderConfig;
use crate::error::SurfaceError;
use crate::utils::format::format_value;
use crate::utils::index::{cells, ValueGrid};
use crate::renderers::color::Rgb;
use crate::renderers::colormap::Colormap;
use crate::renderers::surface::{ColorbarStyle, DrawingSurface, ImageInfo, TextStyle};
use super::elements::{self, Anchor};

const AXES_TEMPLATE: &str = include_str!("templates/axes.svg.mustache");

const MARGIN: f32 = 12.0;
const TICK_MARGIN: f32 = 28.0;
const TITLE_MARGIN: f32 = 36.0;
const TICK_FONT_SIZE: f32 = 10.0;
const COLORBAR_LABEL_ROOM: f32 = 64.0;
const MIN_COLORBAR_WIDTH: f32 = 8.0;
const AXIS_COLOR: &str = "#333333";

/// Color bar geometry relative to the axes origin
#[derive(Debug, Clone, PartialEq)]
struct ColorbarLayout {
    x: f32,
    width: f32,
}

/// A laid-out panel, ready to be placed in a document
#[derive(Debug, Clone, Serialize)]
pub struct PanelFragment {
    pub width: f32,
    pub height: f32,
    pub defs: String,
    pub content: String,
}

#[derive(Serialize)]
struct AxesContext {
    width: String,
    height: String,
    has_title: bool,
    title: String,
    defs: String,
    content: String,
}

/// Single-panel SVG drawing surface
#[derive(Debug, Clone)]
pub struct SvgSurface {
    id: String,
    rows: usize,
    columns: usize,
    cell_size: f32,
    font_scale: f32,
    title: Option<String>,
    ticks_visible: bool,
    colorbar: Option<ColorbarLayout>,
    defs: Vec<String>,
    body: Vec<String>,
}

impl SvgSurface {
    pub fn new(rows: usize, columns: usize, config: &RenderConfig) -> Self {
        Self::with_id("gridplot", rows, columns, config)
    }

    /// Surface whose element ids start with `id` (distinct ids keep panels of
    /// one document from sharing gradients)
    pub fn with_id<S: Into<String>>(id: S, rows: usize, columns: usize, config: &RenderConfig) -> Self {
        Self {
            id: id.into(),
            rows,
            columns,
            cell_size: config.cell_size,
            font_scale: config.font_scale,
            title: None,
            ticks_visible: true,
            colorbar: None,
            defs: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn axes_width(&self) -> f32 {
        self.columns as f32 * self.cell_size
    }

    pub fn axes_height(&self) -> f32 {
        self.rows as f32 * self.cell_size
    }

    fn margin_left(&self) -> f32 {
        if self.ticks_visible { TICK_MARGIN } else { MARGIN }
    }

    fn margin_top(&self) -> f32 {
        if self.title.is_some() { TITLE_MARGIN } else { MARGIN }
    }

    fn margin_bottom(&self) -> f32 {
        if self.ticks_visible { TICK_MARGIN } else { MARGIN }
    }

    fn margin_right(&self) -> f32 {
        match &self.colorbar {
            Some(bar) => bar.x + bar.width - self.axes_width() + COLORBAR_LABEL_ROOM,
            None => MARGIN,
        }
    }

    fn cell_center(&self, row: usize, col: usize) -> (f32, f32) {
        ((col as f32 + 0.5) * self.cell_size, (row as f32 + 0.5) * self.cell_size)
    }

    fn scaled(&self, font_size: f32) -> f32 {
        font_size * self.font_scale
    }

    fn tick_labels(&self) -> Vec<String> {
        let size = self.scaled(TICK_FONT_SIZE);
        let below = self.axes_height() + TICK_MARGIN / 2.0;
        let mut out: Vec<String> = (0..self.columns)
            .map(|col| {
                let (x, _) = self.cell_center(0, col);
                elements::text(x, below, &col.to_string(), size, AXIS_COLOR, Anchor::Middle)
            })
            .collect();
        out.extend((0..self.rows).map(|row| {
            let (_, y) = self.cell_center(row, 0);
            elements::text(-4.0, y, &row.to_string(), size, AXIS_COLOR, Anchor::End)
        }));
        out
    }

    /// Lay the panel out; the fragment is positioned at the document origin
    pub fn fragment(&self) -> PanelFragment {
        let left = self.margin_left();
        let top = self.margin_top();
        let width = left + self.axes_width() + self.margin_right();
        let height = top + self.axes_height() + self.margin_bottom();

        let mut content = String::new();
        if let Some(title) = &self.title {
            content.push_str(&elements::text(
                left + self.axes_width() / 2.0,
                top / 2.0,
                title,
                self.scaled(12.0),
                "#000000",
                Anchor::Middle,
            ));
            content.push('\n');
        }
        content.push_str(&format!(
            r#"<g class="axes" transform="translate({},{})">"#,
            elements::px(left),
            elements::px(top)
        ));
        content.push('\n');
        for el in &self.body {
            content.push_str(el);
            content.push('\n');
        }
        if self.ticks_visible {
            for el in self.tick_labels() {
                content.push_str(&el);
                content.push('\n');
            }
        }
        content.push_str(&elements::frame(0.0, 0.0, self.axes_width(), self.axes_height(), AXIS_COLOR));
        content.push_str("\n</g>");

        PanelFragment { width, height, defs: self.defs.join(""), content }
    }

    /// Render the panel as a standalone SVG document
    pub fn finish(&self) -> Result<String, SurfaceError> {
        let fragment = self.fragment();
        let context = AxesContext {
            width: elements::px(fragment.width),
            height: elements::px(fragment.height),
            has_title: self.title.is_some(),
            title: self.title.as_deref().map(elements::escape_xml).unwrap_or_default(),
            defs: fragment.defs,
            content: fragment.content,
        };
        let template = mustache::compile_str(AXES_TEMPLATE)?;
        Ok(template.render_to_string(&context)?)
    }

    /// Write the SVG document to `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SurfaceError> {
        let svg = self.finish()?;
        std::fs::write(path.as_ref(), svg)?;
        log::info!("wrote heat map to {}", path.as_ref().display());
        Ok(())
    }

    fn check_cell(&self, row: usize, col: usize) -> Result<(), SurfaceError> {
        if row >= self.rows || col >= self.columns {
            return Err(SurfaceError::CellOutOfBounds { row, col });
        }
        Ok(())
    }
}

impl DrawingSurface for SvgSurface {
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
        for (_, row, col) in cells(self.rows, self.columns) {
            let fill = grid
                .get(row, col)
                .and_then(|v| colormap.color_for(v, info.vmin, info.vmax))
                .map(|rgb| rgb.to_hex())
                .unwrap_or_else(|| "none".to_string());
            self.body.push(elements::rect(
                col as f32 * self.cell_size,
                row as f32 * self.cell_size,
                self.cell_size,
                self.cell_size,
                &fill,
            ));
        }
        Ok(info)
    }

    fn text(&mut self, row: usize, col: usize, text: &str, style: &TextStyle) -> Result<(), SurfaceError> {
        self.check_cell(row, col)?;
        if !(style.font_size.is_finite() && style.font_size > 0.0) {
            return Err(SurfaceError::InvalidFontSize(style.font_size));
        }
        let fill = Rgb::parse(&style.color)?.to_hex();
        let (x, y) = self.cell_center(row, col);
        self.body.push(elements::text(x, y, text, self.scaled(style.font_size), &fill, Anchor::Middle));
        Ok(())
    }

    fn colorbar(&mut self, image: &ImageInfo, label: &str, style: &ColorbarStyle) -> Result<(), SurfaceError> {
        let axes_width = self.axes_width();
        let axes_height = self.axes_height();
        let x = axes_width + style.pad * axes_width;
        let width = (style.fraction * axes_width).max(MIN_COLORBAR_WIDTH);
        let gradient_id = format!("{}-colorbar", self.id);

        let stops: Vec<String> = image.colormap.anchors().iter().map(Rgb::to_hex).collect();
        self.defs.push(elements::vertical_gradient(&gradient_id, &stops));
        self.body.push(elements::rect(x, 0.0, width, axes_height, &format!("url(#{})", gradient_id)));
        self.body.push(elements::frame(x, 0.0, width, axes_height, AXIS_COLOR));

        let tick_size = self.scaled(TICK_FONT_SIZE);
        let tick_x = x + width + 4.0;
        if style.ticks >= 2 && image.vmax > image.vmin {
            for i in 0..style.ticks {
                let t = i as f64 / (style.ticks - 1) as f64;
                let value = image.vmin + t * (image.vmax - image.vmin);
                let y = axes_height * (1.0 - t as f32);
                self.body.push(elements::text(tick_x, y, &format_value(value, 2), tick_size, AXIS_COLOR, Anchor::Start));
            }
        } else if style.ticks > 0 {
            self.body.push(elements::text(
                tick_x,
                axes_height,
                &format_value(image.vmin, 2),
                tick_size,
                AXIS_COLOR,
                Anchor::Start,
            ));
        }

        let label_x = x + width + COLORBAR_LABEL_ROOM - self.scaled(style.label_font_size) / 2.0;
        self.body.push(elements::vertical_text(
            label_x,
            axes_height / 2.0,
            label,
            self.scaled(style.label_font_size),
            "#000000",
        ));

        self.colorbar = Some(ColorbarLayout { x, width });
        Ok(())
    }

    fn clear_ticks(&mut self) -> Result<(), SurfaceError> {
        self.ticks_visible = false;
        Ok(())
    }

    fn set_title(&mut self, title: &str) -> Result<(), SurfaceError> {
        self.title = Some(title.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface(rows: usize, columns: usize) -> SvgSurface {
        SvgSurface::new(rows, columns, &RenderConfig::default())
    }

    #[test]
    fn test_image_one_rect_per_cell() {
        let mut svg = surface(2, 3);
        let grid = ValueGrid::reshape(&[0.0, 1.0, 2.0, 3.0, 4.0, f64::NAN], 2, 3).unwrap();
        svg.image(&grid, Colormap::Blues).unwrap();
        let doc = svg.finish().unwrap();
        assert_eq!(doc.matches("<rect").count(), 6 + 1);
        assert!(doc.contains(r#"fill="none"/>"#));
        assert!(doc.contains(r##"fill="#f7fbff""##));
    }

    #[test]
    fn test_image_size_must_match() {
        let mut svg = surface(1, 1);
        let grid = ValueGrid::reshape(&[0.0; 4], 2, 2).unwrap();
        assert_eq!(
            svg.image(&grid, Colormap::Blues),
            Err(SurfaceError::ImageSize { rows: 1, columns: 1, found_rows: 2, found_columns: 2 })
        );
    }

    #[test]
    fn test_text_centered_in_cell() {
        let mut svg = surface(2, 2);
        svg.text(1, 0, "0.50", &TextStyle::new(8.0, "white")).unwrap();
        let doc = svg.finish().unwrap();
        assert!(doc.contains(r##"<text x="24" y="72" font-size="12" fill="#ffffff""##));
    }

    #[test]
    fn test_text_errors() {
        let mut svg = surface(1, 1);
        assert_eq!(
            svg.text(0, 0, "x", &TextStyle::new(10.0, "reddish")),
            Err(SurfaceError::InvalidColor("reddish".to_string()))
        );
        assert_eq!(
            svg.text(1, 0, "x", &TextStyle::new(10.0, "red")),
            Err(SurfaceError::CellOutOfBounds { row: 1, col: 0 })
        );
    }

    #[test]
    fn test_ticks_until_cleared() {
        let mut svg = surface(2, 2);
        assert!(svg.finish().unwrap().contains(r#"text-anchor="end""#));
        svg.clear_ticks().unwrap();
        assert!(!svg.finish().unwrap().contains(r#"text-anchor="end""#));
    }

    #[test]
    fn test_colorbar_gradient_and_label() {
        let mut svg = surface(4, 4);
        let info = ImageInfo { vmin: 0.0, vmax: 1.0, colormap: Colormap::Blues };
        let style = ColorbarStyle { label_font_size: 12.0, fraction: 0.05, pad: 0.04, ticks: 5 };
        svg.colorbar(&info, "State Value", &style).unwrap();
        let doc = svg.finish().unwrap();
        assert!(doc.contains(r#"<linearGradient id="gridplot-colorbar""#));
        assert!(doc.contains("url(#gridplot-colorbar)"));
        assert!(doc.contains(">State Value</text>"));
        assert!(doc.contains(">0.50</text>"));
        assert!(doc.contains(">1.00</text>"));
    }

    #[test]
    fn test_title_escaped() {
        let mut svg = surface(1, 1);
        svg.set_title("V & π").unwrap();
        let doc = svg.finish().unwrap();
        assert!(doc.contains("<title>V &amp; π</title>"));
        assert!(!doc.contains("V & π"));
    }
}
