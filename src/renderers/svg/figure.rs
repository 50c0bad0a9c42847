//! Multi-panel SVG figures
//!
//! Panels are laid out left to right, e.g. the value heat map next to the
//! policy overlay.

use std::path::Path;

use serde::Serialize;

use crate::config::RenderConfig;
use crate::error::SurfaceError;
use super::document::SvgSurface;
use super::elements;

const FIGURE_TEMPLATE: &str = include_str!("templates/figure.svg.mustache");

/// Horizontal gap between panels in px
const PANEL_SPACING: f32 = 16.0;

#[derive(Serialize)]
struct PanelContext {
    x: String,
    defs: String,
    content: String,
}

#[derive(Serialize)]
struct FigureContext {
    width: String,
    height: String,
    panels: Vec<PanelContext>,
}

#[derive(Debug, Clone, Default)]
pub struct SvgFigure {
    panels: Vec<SvgSurface>,
}

impl SvgFigure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty panel and return it for drawing
    pub fn new_panel(&mut self, rows: usize, columns: usize, config: &RenderConfig) -> &mut SvgSurface {
        let id = format!("panel{}", self.panels.len());
        self.panels.push(SvgSurface::with_id(id, rows, columns, config));
        let last = self.panels.len() - 1;
        &mut self.panels[last]
    }

    pub fn panels(&self) -> &[SvgSurface] {
        &self.panels
    }

    pub fn finish(&self) -> Result<String, SurfaceError> {
        let mut x = 0.0f32;
        let mut height = 0.0f32;
        let mut panels = Vec::with_capacity(self.panels.len());
        for (i, panel) in self.panels.iter().enumerate() {
            if i > 0 {
                x += PANEL_SPACING;
            }
            let fragment = panel.fragment();
            panels.push(PanelContext {
                x: elements::px(x),
                defs: fragment.defs,
                content: fragment.content,
            });
            x += fragment.width;
            height = height.max(fragment.height);
        }

        let context = FigureContext { width: elements::px(x), height: elements::px(height), panels };
        let template = mustache::compile_str(FIGURE_TEMPLATE)?;
        Ok(template.render_to_string(&context)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SurfaceError> {
        let svg = self.finish()?;
        std::fs::write(path.as_ref(), svg)?;
        log::info!("wrote {}-panel figure to {}", self.panels.len(), path.as_ref().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderers::surface::{ColorbarStyle, DrawingSurface, ImageInfo};
    use crate::renderers::colormap::Colormap;

    #[test]
    fn test_panels_get_distinct_gradient_ids() {
        let config = RenderConfig::default();
        let info = ImageInfo { vmin: 0.0, vmax: 1.0, colormap: Colormap::Blues };
        let style = ColorbarStyle { label_font_size: 12.0, fraction: 0.05, pad: 0.04, ticks: 2 };

        let mut figure = SvgFigure::new();
        figure.new_panel(2, 2, &config).colorbar(&info, "a", &style).unwrap();
        figure.new_panel(2, 2, &config).colorbar(&info, "b", &style).unwrap();

        let doc = figure.finish().unwrap();
        assert!(doc.contains(r#"id="panel0-colorbar""#));
        assert!(doc.contains(r#"id="panel1-colorbar""#));
        assert_eq!(doc.matches(r#"class="panel""#).count(), 2);
    }

    #[test]
    fn test_second_panel_offset() {
        let config = RenderConfig::default();
        let mut figure = SvgFigure::new();
        figure.new_panel(1, 1, &config).clear_ticks().unwrap();
        figure.new_panel(1, 1, &config).clear_ticks().unwrap();

        // each panel: 12 + 48 + 12 = 72 wide
        let doc = figure.finish().unwrap();
        assert!(doc.contains(r#"transform="translate(0,0)""#));
        assert!(doc.contains(r#"transform="translate(88,0)""#));
        assert!(doc.contains(r#"width="160""#));
    }
}
