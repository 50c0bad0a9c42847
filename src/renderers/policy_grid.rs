//! Policy overlay renderer
//!
//! Same heat map as `value_grid`, but ordinary cells show the greedy action as
//! an arrow instead of the numeric value. Cells whose weights sum to zero or
//! less carry no preference and are left blank.

use crate::config::RenderConfig;
use crate::error::{RenderError, Result};
use crate::models::action::glyph_for_action;
use crate::models::grid::GridEnvironment;
use crate::models::policy::PolicyWeights;
use super::annotate::{check_shape, draw_panel};
use super::surface::DrawingSurface;

#[derive(Debug, Clone, Default)]
pub struct PolicyValueGridRenderer {
    config: RenderConfig,
}

impl PolicyValueGridRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn render<E, S>(
        &self,
        values: &[f64],
        policy: &PolicyWeights,
        env: &E,
        surface: &mut S,
    ) -> Result<()>
    where
        E: GridEnvironment + ?Sized,
        S: DrawingSurface + ?Sized,
    {
        check_shape(values, env.desc())?;
        if policy.num_states() != values.len() {
            return Err(RenderError::PolicyShapeMismatch {
                policy_rows: policy.num_states(),
                states: values.len(),
            });
        }

        let config = &self.config;
        draw_panel(values, env.desc(), config, surface, |surface, styles, cell| {
            let weight_sum = policy.row_sum(cell.state);
            if weight_sum.is_nan() || weight_sum <= 0.0 {
                return Ok(());
            }
            let Some(action) = policy.greedy_action(cell.state) else {
                return Ok(());
            };
            let glyph = glyph_for_action(action)
                .ok_or(RenderError::UnknownAction { state: cell.state, action })?;
            let style = styles.contrast_style(config.glyph_font_size, cell.contrast);
            surface.text(cell.row, cell.col, &glyph.to_string(), &style)?;
            Ok(())
        })
    }
}

/// Render a policy overlay with the default configuration
pub fn plot_policy_and_values<E, S>(
    values: &[f64],
    policy: &PolicyWeights,
    env: &E,
    surface: &mut S,
) -> Result<()>
where
    E: GridEnvironment + ?Sized,
    S: DrawingSurface + ?Sized,
{
    PolicyValueGridRenderer::default().render(values, policy, env, surface)
}
