//! WASM API module
//!
//! JavaScript-facing entry points. Arguments arrive as `JsValue`s, are
//! converted with the helpers in `helpers`, and are handed to `crate::plot`.

pub mod helpers;
pub mod render;

pub use render::*;
