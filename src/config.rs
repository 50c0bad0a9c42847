//! Render configuration
//!
//! Every field has a default matching the classic matplotlib look (Blues
//! colormap, 8pt values, 10pt markers, 12pt arrows, "State Value" color bar).
//! Configs can be loaded from YAML or JSON; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Colormap name (`Blues`, `Greens`, `Greys`, `viridis`)
    pub colormap: String,

    /// Side length of one grid cell in px
    pub cell_size: f32,

    /// Multiplier from font points to px
    pub font_scale: f32,

    pub value_font_size: f32,
    pub marker_font_size: f32,
    pub glyph_font_size: f32,

    /// Decimal places of value annotations
    pub value_precision: usize,

    pub hazard_marker: String,
    pub goal_marker: String,

    pub colors: TextColors,
    pub colorbar: ColorbarConfig,

    /// Optional panel title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Text colors used for annotations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextColors {
    /// Text on light (low-value) cells
    pub dark: String,
    /// Text on dark (high-value) cells
    pub light: String,
    pub hazard: String,
    pub goal: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorbarConfig {
    pub label: String,
    pub label_font_size: f32,
    /// Bar width as a fraction of the axes width
    pub fraction: f32,
    /// Gap between axes and bar as a fraction of the axes width
    pub pad: f32,
    /// Number of tick labels along the bar
    pub ticks: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            colormap: "Blues".to_string(),
            cell_size: 48.0,
            font_scale: 1.5,
            value_font_size: 8.0,
            marker_font_size: 10.0,
            glyph_font_size: 12.0,
            value_precision: 2,
            hazard_marker: "x".to_string(),
            goal_marker: "G".to_string(),
            colors: TextColors::default(),
            colorbar: ColorbarConfig::default(),
            title: None,
        }
    }
}

impl Default for TextColors {
    fn default() -> Self {
        Self {
            dark: "black".to_string(),
            light: "white".to_string(),
            hazard: "red".to_string(),
            goal: "green".to_string(),
        }
    }
}

impl Default for ColorbarConfig {
    fn default() -> Self {
        Self {
            label: "State Value".to_string(),
            label_font_size: 12.0,
            fraction: 0.05,
            pad: 0.04,
            ticks: 5,
        }
    }
}

impl RenderConfig {
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(source).map_err(|e| ConfigError::Yaml(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(source).map_err(|e| ConfigError::Json(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Set the panel title
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Reject sizes and fractions that cannot produce a drawing
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("cell_size", self.cell_size),
            ("font_scale", self.font_scale),
            ("value_font_size", self.value_font_size),
            ("marker_font_size", self.marker_font_size),
            ("glyph_font_size", self.glyph_font_size),
            ("colorbar.label_font_size", self.colorbar.label_font_size),
            ("colorbar.fraction", self.colorbar.fraction),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!("{} must be positive, got {}", name, value)));
            }
        }
        if !(self.colorbar.pad.is_finite() && self.colorbar.pad >= 0.0) {
            return Err(ConfigError::Invalid(format!("colorbar.pad must be >= 0, got {}", self.colorbar.pad)));
        }
        if self.colorbar.ticks == 1 {
            return Err(ConfigError::Invalid("colorbar.ticks must be 0 or at least 2".to_string()));
        }
        Ok(())
    }
}
