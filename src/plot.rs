//! One-call plotting helpers
//!
//! Build a surface, run a renderer on it and return the finished output. These
//! back the WASM API and are the easiest entry point from Rust.

use crate::config::RenderConfig;
use crate::error::PlotError;
use crate::models::grid::GridEnvironment;
use crate::models::policy::PolicyWeights;
use crate::renderers::display_list::DisplayList;
use crate::renderers::policy_grid::PolicyValueGridRenderer;
use crate::renderers::svg::{SvgFigure, SvgSurface};
use crate::renderers::value_grid::ValueGridRenderer;

/// Value heat map as an SVG document
pub fn values_svg<E>(values: &[f64], env: &E, config: &RenderConfig) -> Result<String, PlotError>
where
    E: GridEnvironment + ?Sized,
{
    config.validate()?;
    let (rows, columns) = env.desc().shape();
    let mut surface = SvgSurface::new(rows, columns, config);
    ValueGridRenderer::new(config.clone()).render(values, env, &mut surface)?;
    Ok(surface.finish()?)
}

/// Policy overlay as an SVG document
pub fn policy_svg<E>(
    values: &[f64],
    policy: &PolicyWeights,
    env: &E,
    config: &RenderConfig,
) -> Result<String, PlotError>
where
    E: GridEnvironment + ?Sized,
{
    config.validate()?;
    let (rows, columns) = env.desc().shape();
    let mut surface = SvgSurface::new(rows, columns, config);
    PolicyValueGridRenderer::new(config.clone()).render(values, policy, env, &mut surface)?;
    Ok(surface.finish()?)
}

/// Value heat map and policy overlay side by side
///
/// Panels are titled "State Values" and "Policy" unless `config.title` is set,
/// in which case both panels carry the caller's title.
pub fn values_and_policy_svg<E>(
    values: &[f64],
    policy: &PolicyWeights,
    env: &E,
    config: &RenderConfig,
) -> Result<String, PlotError>
where
    E: GridEnvironment + ?Sized,
{
    config.validate()?;
    let (rows, columns) = env.desc().shape();
    let mut figure = SvgFigure::new();

    let value_config = panel_config(config, "State Values");
    let panel = figure.new_panel(rows, columns, &value_config);
    ValueGridRenderer::new(value_config).render(values, env, panel)?;

    let policy_config = panel_config(config, "Policy");
    let panel = figure.new_panel(rows, columns, &policy_config);
    PolicyValueGridRenderer::new(policy_config).render(values, policy, env, panel)?;

    Ok(figure.finish()?)
}

/// Value heat map as a display list
pub fn values_display_list<E>(values: &[f64], env: &E, config: &RenderConfig) -> Result<DisplayList, PlotError>
where
    E: GridEnvironment + ?Sized,
{
    config.validate()?;
    let (rows, columns) = env.desc().shape();
    let mut list = DisplayList::new(rows, columns);
    ValueGridRenderer::new(config.clone()).render(values, env, &mut list)?;
    Ok(list)
}

/// Policy overlay as a display list
pub fn policy_display_list<E>(
    values: &[f64],
    policy: &PolicyWeights,
    env: &E,
    config: &RenderConfig,
) -> Result<DisplayList, PlotError>
where
    E: GridEnvironment + ?Sized,
{
    config.validate()?;
    let (rows, columns) = env.desc().shape();
    let mut list = DisplayList::new(rows, columns);
    PolicyValueGridRenderer::new(config.clone()).render(values, policy, env, &mut list)?;
    Ok(list)
}

fn panel_config(config: &RenderConfig, default_title: &str) -> RenderConfig {
    let title = config.title.clone().unwrap_or_else(|| default_title.to_string());
    RenderConfig { title: Some(title), ..config.clone() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, RenderError, SurfaceError};
    use crate::models::grid::GridDescription;

    #[test]
    fn test_values_svg_has_title_free_panel() {
        let grid = GridDescription::from_rows(&["SH", "FG"]).unwrap();
        let svg = values_svg(&[0.0, 0.5, 0.5, 1.0], &grid, &RenderConfig::default()).unwrap();
        assert!(svg.starts_with("<?xml"));
        assert!(!svg.contains("<title>"));
        assert!(svg.contains(">0.50</text>"));
    }

    #[test]
    fn test_invalid_color_propagates() {
        let grid = GridDescription::from_rows(&["SH"]).unwrap();
        let mut config = RenderConfig::default();
        config.colors.hazard = "blood-orange".to_string();
        let err = values_svg(&[0.0, 0.0], &grid, &config).unwrap_err();
        assert_eq!(
            err,
            PlotError::Render(RenderError::Surface(SurfaceError::InvalidColor("blood-orange".to_string())))
        );
    }

    #[test]
    fn test_unknown_colormap_propagates() {
        let grid = GridDescription::from_rows(&["S"]).unwrap();
        let config = RenderConfig { colormap: "jet".to_string(), ..RenderConfig::default() };
        let err = values_display_list(&[0.0], &grid, &config).unwrap_err();
        assert_eq!(
            err,
            PlotError::Render(RenderError::Surface(SurfaceError::UnknownColormap("jet".to_string())))
        );
    }

    #[test]
    fn test_invalid_config_rejected_before_drawing() {
        let grid = GridDescription::from_rows(&["S"]).unwrap();
        let config = RenderConfig { cell_size: -1.0, ..RenderConfig::default() };
        assert!(matches!(
            values_svg(&[0.0], &grid, &config),
            Err(PlotError::Config(ConfigError::Invalid(_)))
        ));
    }

    #[test]
    fn test_figure_has_two_titled_panels() {
        let grid = GridDescription::from_rows(&["SF", "HG"]).unwrap();
        let policy = PolicyWeights::from_actions(&[2, 1, 0, 0], 4).unwrap();
        let svg = values_and_policy_svg(&[0.1, 0.3, 0.0, 1.0], &policy, &grid, &RenderConfig::default()).unwrap();
        assert!(svg.contains(">State Values</text>"));
        assert!(svg.contains(">Policy</text>"));
        assert!(svg.contains(">→</text>"));
        assert!(svg.contains(">0.30</text>"));
    }

    #[test]
    fn test_figure_keeps_caller_title() {
        let grid = GridDescription::from_rows(&["SG"]).unwrap();
        let policy = PolicyWeights::from_actions(&[2, 0], 4).unwrap();
        let config = RenderConfig::default().with_title("Run 7");
        let svg = values_and_policy_svg(&[0.5, 1.0], &policy, &grid, &config).unwrap();
        assert_eq!(svg.matches(">Run 7</text>").count(), 2);
        assert!(!svg.contains(">State Values</text>"));
        assert!(!svg.contains(">Policy</text>"));
    }
}
