//! Heat-map rendering operations for the WASM API
//!
//! SVG output for direct insertion into the page, and display lists for
//! callers that paint on their own (canvas, DOM).

use wasm_bindgen::prelude::*;

use crate::api::helpers::{config_from_js, grid_from_js, js_error, policy_from_js, serialize, warn_non_finite};
use crate::config::RenderConfig;
use crate::models::maps;
use crate::plot;
use crate::{wasm_info, wasm_log};

// ============================================================================
// SVG Output
// ============================================================================

/// Render a value heat map as SVG
///
/// # Parameters
/// - `values`: one value per state, row-major
/// - `rows_js`: JavaScript array of row strings, e.g. `["SFFF", "FHFH", ...]`
/// - `config_js`: optional render config object (`null` for defaults)
///
/// # Returns
/// SVG document string
#[wasm_bindgen(js_name = plotValues)]
pub fn plot_values(values: Vec<f64>, rows_js: JsValue, config_js: JsValue) -> Result<String, JsValue> {
    wasm_info!("plotValues called: {} values", values.len());
    warn_non_finite(&values, "plotValues");

    let grid = grid_from_js(rows_js)?;
    let config = config_from_js(config_js)?;
    wasm_log!("  Grid shape: {:?}", grid.shape());

    let svg = plot::values_svg(&values, &grid, &config).map_err(|e| js_error("plotValues failed", e))?;

    wasm_info!("  SVG generated: {} bytes", svg.len());
    Ok(svg)
}

/// Render a policy overlay as SVG
///
/// # Parameters
/// - `values`: one value per state, row-major
/// - `policy_js`: JavaScript array of per-state weight arrays
/// - `rows_js`: JavaScript array of row strings
/// - `config_js`: optional render config object
#[wasm_bindgen(js_name = plotPolicyAndValues)]
pub fn plot_policy_and_values(
    values: Vec<f64>,
    policy_js: JsValue,
    rows_js: JsValue,
    config_js: JsValue,
) -> Result<String, JsValue> {
    wasm_info!("plotPolicyAndValues called: {} values", values.len());
    warn_non_finite(&values, "plotPolicyAndValues");

    let grid = grid_from_js(rows_js)?;
    let policy = policy_from_js(policy_js)?;
    let config = config_from_js(config_js)?;
    wasm_log!("  Grid shape: {:?}, policy: {} x {}", grid.shape(), policy.num_states(), policy.num_actions());

    let svg = plot::policy_svg(&values, &policy, &grid, &config)
        .map_err(|e| js_error("plotPolicyAndValues failed", e))?;

    wasm_info!("  SVG generated: {} bytes", svg.len());
    Ok(svg)
}

/// Render values and policy side by side as one SVG figure
#[wasm_bindgen(js_name = renderFigure)]
pub fn render_figure(
    values: Vec<f64>,
    policy_js: JsValue,
    rows_js: JsValue,
    config_js: JsValue,
) -> Result<String, JsValue> {
    wasm_info!("renderFigure called: {} values", values.len());
    warn_non_finite(&values, "renderFigure");

    let grid = grid_from_js(rows_js)?;
    let policy = policy_from_js(policy_js)?;
    let config = config_from_js(config_js)?;

    let svg = plot::values_and_policy_svg(&values, &policy, &grid, &config)
        .map_err(|e| js_error("renderFigure failed", e))?;

    wasm_info!("  Figure generated: {} bytes", svg.len());
    Ok(svg)
}

// ============================================================================
// Display List Output
// ============================================================================

/// Record a value heat map as a display list object
#[wasm_bindgen(js_name = plotValuesDisplayList)]
pub fn plot_values_display_list(values: Vec<f64>, rows_js: JsValue) -> Result<JsValue, JsValue> {
    wasm_info!("plotValuesDisplayList called: {} values", values.len());
    warn_non_finite(&values, "plotValuesDisplayList");

    let grid = grid_from_js(rows_js)?;
    let list = plot::values_display_list(&values, &grid, &RenderConfig::default())
        .map_err(|e| js_error("plotValuesDisplayList failed", e))?;

    wasm_log!("  Recorded {} draw commands", list.commands().len());
    serialize(&list, "Display list serialization error")
}

/// Record a policy overlay as a display list object
#[wasm_bindgen(js_name = plotPolicyAndValuesDisplayList)]
pub fn plot_policy_and_values_display_list(
    values: Vec<f64>,
    policy_js: JsValue,
    rows_js: JsValue,
) -> Result<JsValue, JsValue> {
    wasm_info!("plotPolicyAndValuesDisplayList called: {} values", values.len());
    warn_non_finite(&values, "plotPolicyAndValuesDisplayList");

    let grid = grid_from_js(rows_js)?;
    let policy = policy_from_js(policy_js)?;
    let list = plot::policy_display_list(&values, &policy, &grid, &RenderConfig::default())
        .map_err(|e| js_error("plotPolicyAndValuesDisplayList failed", e))?;

    wasm_log!("  Recorded {} draw commands", list.commands().len());
    serialize(&list, "Display list serialization error")
}

// ============================================================================
// Preset Maps
// ============================================================================

/// Row strings of a preset Frozen Lake map (`"4x4"` or `"8x8"`)
#[wasm_bindgen(js_name = frozenLakeMap)]
pub fn frozen_lake_map(name: &str) -> Result<JsValue, JsValue> {
    let grid = maps::frozen_lake(name).map_err(|e| js_error("frozenLakeMap failed", e))?;
    serialize(&grid.to_row_strings(), "Map serialization error")
}
