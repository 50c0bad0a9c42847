//! Error types for heat-map rendering
//!
//! Rendering fails fast on inconsistent input shapes. Failures raised by the
//! drawing surface (bad colors, template problems) pass through unchanged
//! inside `RenderError::Surface`.

use thiserror::Error;

/// Top-level rendering error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    /// Value array length does not match the number of grid cells
    #[error("value array has {values} entries but the grid has {cells} cells")]
    ShapeMismatch { values: usize, cells: usize },

    /// Policy row count does not match the value array length
    #[error("policy has {policy_rows} rows but there are {states} states")]
    PolicyShapeMismatch { policy_rows: usize, states: usize },

    /// Greedy action has no arrow glyph
    #[error("state {state}: greedy action {action} has no glyph")]
    UnknownAction { state: usize, action: usize },

    /// Failure reported by the drawing surface
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

/// Failures raised by a drawing surface
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SurfaceError {
    #[error("invalid color: '{0}'")]
    InvalidColor(String),

    #[error("unknown colormap: '{0}'")]
    UnknownColormap(String),

    #[error("cell ({row}, {col}) is outside the image")]
    CellOutOfBounds { row: usize, col: usize },

    #[error("image is {found_rows}x{found_columns}, surface expects {rows}x{columns}")]
    ImageSize { rows: usize, columns: usize, found_rows: usize, found_columns: usize },

    #[error("invalid font size: {0}")]
    InvalidFontSize(f32),

    #[error("template error: {0}")]
    Template(String),

    #[error("io error: {0}")]
    Io(String),
}

impl From<mustache::Error> for SurfaceError {
    fn from(e: mustache::Error) -> Self {
        SurfaceError::Template(e.to_string())
    }
}

impl From<std::io::Error> for SurfaceError {
    fn from(e: std::io::Error) -> Self {
        SurfaceError::Io(e.to_string())
    }
}

/// Grid description construction errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("grid has no cells")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },

    #[error("{len} cell codes cannot be split into rows of {columns}")]
    FlatLength { len: usize, columns: usize },

    #[error("unknown map: '{0}'")]
    UnknownMap(String),
}

/// Policy weight construction errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolicyError {
    #[error("policy row {row} has {found} weights, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },

    #[error("{len} weights cannot be split into rows of {actions}")]
    FlatLength { len: usize, actions: usize },

    #[error("state {state}: action {action} out of range (0..{actions})")]
    ActionOutOfRange { state: usize, action: usize, actions: usize },
}

/// Render configuration errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("yaml config error: {0}")]
    Yaml(String),

    #[error("json config error: {0}")]
    Json(String),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Any failure of the one-call plotting helpers
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlotError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),

    #[error("invalid policy: {0}")]
    Policy(#[from] PolicyError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<SurfaceError> for PlotError {
    fn from(e: SurfaceError) -> Self {
        PlotError::Render(RenderError::Surface(e))
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;
