//! WASM build test
//!
//! Exercises the JavaScript-facing API. Only runs on wasm32 targets
//! (`wasm-pack test --headless --chrome`).

#![cfg(target_arch = "wasm32")]

use gridplot_wasm::api::{frozen_lake_map, plot_policy_and_values, plot_values, plot_values_display_list};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn rows_js(rows: &[&str]) -> JsValue {
    serde_wasm_bindgen::to_value(rows).unwrap()
}

#[wasm_bindgen_test]
fn test_plot_values_returns_svg() {
    let svg = plot_values(vec![0.0, 0.5, 0.5, 1.0], rows_js(&["SH", "FG"]), JsValue::NULL).unwrap();
    assert!(svg.contains(">0.50</text>"));
}

#[wasm_bindgen_test]
fn test_plot_values_shape_error() {
    assert!(plot_values(vec![0.0; 3], rows_js(&["SH", "FG"]), JsValue::UNDEFINED).is_err());
}

#[wasm_bindgen_test]
fn test_plot_policy_and_values() {
    let policy = serde_wasm_bindgen::to_value(&vec![vec![0.0, 3.0, 1.0, 0.0], vec![0.0; 4]]).unwrap();
    let svg = plot_policy_and_values(vec![0.2, 0.0], policy, rows_js(&["SH"]), JsValue::NULL).unwrap();
    assert!(svg.contains(">↓</text>"));
}

#[wasm_bindgen_test]
fn test_display_list_round_trips_to_js() {
    let list = plot_values_display_list(vec![0.0, 1.0], rows_js(&["SG"])).unwrap();
    assert!(list.is_object());
}

#[wasm_bindgen_test]
fn test_frozen_lake_map() {
    let rows: Vec<String> = serde_wasm_bindgen::from_value(frozen_lake_map("4x4").unwrap()).unwrap();
    assert_eq!(rows, vec!["SFFF", "FHFH", "FFFH", "HFFG"]);
    assert!(frozen_lake_map("3x3").is_err());
}

#[wasm_bindgen_test]
fn test_non_finite_values_still_render() {
    let svg = plot_values(vec![f64::NAN, 1.0], rows_js(&["SF"]), JsValue::NULL).unwrap();
    assert!(svg.contains(">nan</text>"));
}

#[wasm_bindgen_test]
fn test_bad_config_is_reported() {
    #[derive(serde::Serialize)]
    struct Sizes {
        cell_size: f32,
    }
    let config = serde_wasm_bindgen::to_value(&Sizes { cell_size: -4.0 }).unwrap();
    let err = plot_values(vec![0.0, 1.0], rows_js(&["SF"]), config).unwrap_err();
    assert!(err.as_string().unwrap().starts_with("Invalid config"));
}
