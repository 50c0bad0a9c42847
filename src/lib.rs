//! Grid-world heat-map WASM module
//!
//! Renders the state values of a tabular RL solution (value iteration,
//! policy iteration) on a grid world such as Frozen Lake, optionally with the
//! greedy policy drawn as arrows. Output is SVG or a serializable display list.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod plot;
pub mod renderers;
pub mod utils;

// Re-export commonly used types
pub use config::RenderConfig;
pub use error::{PlotError, RenderError, SurfaceError};
pub use models::grid::{CellCategory, GridDescription, GridEnvironment};
pub use models::policy::PolicyWeights;
pub use renderers::{
    plot_policy_and_values, plot_values, DisplayList, DrawingSurface, PolicyValueGridRenderer,
    SvgFigure, SvgSurface, ValueGridRenderer,
};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logger();

    log::info!("Grid heat-map WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logger() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already initialized: {}", e).into());
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logger() {}
