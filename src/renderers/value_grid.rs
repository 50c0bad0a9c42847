//! Value heat-map renderer
//!
//! Draws the state values of a grid world as a color-mapped image. Ordinary
//! cells are annotated with their value; hazard and goal cells get fixed
//! markers instead.

use crate::config::RenderConfig;
use crate::error::Result;
use crate::models::grid::GridEnvironment;
use crate::utils::format::format_value;
use super::annotate::draw_panel;
use super::surface::{DrawingSurface, TextStyle};

#[derive(Debug, Clone, Default)]
pub struct ValueGridRenderer {
    config: RenderConfig,
}

impl ValueGridRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render `values` (one per state, row-major) over the layout of `env`
    pub fn render<E, S>(&self, values: &[f64], env: &E, surface: &mut S) -> Result<()>
    where
        E: GridEnvironment + ?Sized,
        S: DrawingSurface + ?Sized,
    {
        let config = &self.config;
        draw_panel(values, env.desc(), config, surface, |surface, styles, cell| {
            let text = format_value(cell.value, config.value_precision);
            let style: TextStyle = styles.contrast_style(config.value_font_size, cell.contrast);
            surface.text(cell.row, cell.col, &text, &style)?;
            Ok(())
        })
    }
}

/// Render a value heat map with the default configuration
pub fn plot_values<E, S>(values: &[f64], env: &E, surface: &mut S) -> Result<()>
where
    E: GridEnvironment + ?Sized,
    S: DrawingSurface + ?Sized,
{
    ValueGridRenderer::default().render(values, env, surface)
}
