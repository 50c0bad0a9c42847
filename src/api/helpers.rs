//! Shared helpers for WASM API operations
//!
//! This module contains common patterns for console logging, serialization,
//! deserialization and error conversion across all API operations.

use wasm_bindgen::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::RenderConfig;
use crate::models::grid::GridDescription;
use crate::models::policy::PolicyWeights;

// ============================================================================
// Console Logging Functions
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn info(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

// ============================================================================
// Logging Helper Functions (called by macros)
// ============================================================================

pub fn log_debug(msg: &str) {
    log(&format!("[WASM] {}", msg));
}

pub fn log_info(msg: &str) {
    info(&format!("[WASM] {}", msg));
}

pub fn log_warn(msg: &str) {
    warn(&format!("[WASM] ⚠️ {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[WASM] ❌ {}", msg));
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        wasm_error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        wasm_error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

// ============================================================================
// Argument Conversion Helpers
// ============================================================================

/// Convert any error into a logged JsValue
pub fn js_error(context: &str, e: impl std::fmt::Display) -> JsValue {
    let msg = format!("{}: {}", context, e);
    wasm_error!("{}", msg);
    JsValue::from_str(&msg)
}

/// Warn when a value array carries NaN or infinite entries
///
/// Rendering still succeeds (such cells get no fill and print `nan` / `inf`),
/// but it usually means the solver diverged.
pub fn warn_non_finite(values: &[f64], context: &str) {
    let count = values.iter().filter(|v| !v.is_finite()).count();
    if count > 0 {
        wasm_warn!("{}: {} of {} values are not finite", context, count, values.len());
    }
}

/// Grid layout from a JS array of row strings
pub fn grid_from_js(rows_js: JsValue) -> Result<GridDescription, JsValue> {
    let rows: Vec<String> = deserialize(rows_js, "Grid rows deserialization error")?;
    GridDescription::from_rows(rows.as_slice()).map_err(|e| js_error("Invalid grid", e))
}

/// Policy weights from a JS array of arrays
pub fn policy_from_js(policy_js: JsValue) -> Result<PolicyWeights, JsValue> {
    let rows: Vec<Vec<f64>> = deserialize(policy_js, "Policy deserialization error")?;
    PolicyWeights::from_rows(rows).map_err(|e| js_error("Invalid policy", e))
}

/// Render config from an optional JS object; `null` / `undefined` give the defaults
pub fn config_from_js(config_js: JsValue) -> Result<RenderConfig, JsValue> {
    if config_js.is_null() || config_js.is_undefined() {
        return Ok(RenderConfig::default());
    }
    let config: RenderConfig = deserialize(config_js, "Config deserialization error")?;
    config.validate().map_err(|e| js_error("Invalid config", e))?;
    Ok(config)
}
