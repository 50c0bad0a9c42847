//! Sequential colormaps
//!
//! Anchor colors come from the ColorBrewer sequential schemes (Blues, Greens,
//! Greys) and matplotlib's viridis. Values in between anchors are linearly
//! interpolated in RGB.

use serde::{Deserialize, Serialize};

use crate::error::SurfaceError;
use super::color::Rgb;

const BLUES: [Rgb; 9] = [
    Rgb::new(0xf7, 0xfb, 0xff),
    Rgb::new(0xde, 0xeb, 0xf7),
    Rgb::new(0xc6, 0xdb, 0xef),
    Rgb::new(0x9e, 0xca, 0xe1),
    Rgb::new(0x6b, 0xae, 0xd6),
    Rgb::new(0x42, 0x92, 0xc6),
    Rgb::new(0x21, 0x71, 0xb5),
    Rgb::new(0x08, 0x51, 0x9c),
    Rgb::new(0x08, 0x30, 0x6b),
];

const GREENS: [Rgb; 9] = [
    Rgb::new(0xf7, 0xfc, 0xf5),
    Rgb::new(0xe5, 0xf5, 0xe0),
    Rgb::new(0xc7, 0xe9, 0xc0),
    Rgb::new(0xa1, 0xd9, 0x9b),
    Rgb::new(0x74, 0xc4, 0x76),
    Rgb::new(0x41, 0xab, 0x5d),
    Rgb::new(0x23, 0x8b, 0x45),
    Rgb::new(0x00, 0x6d, 0x2c),
    Rgb::new(0x00, 0x44, 0x1b),
];

const GREYS: [Rgb; 9] = [
    Rgb::new(0xff, 0xff, 0xff),
    Rgb::new(0xf0, 0xf0, 0xf0),
    Rgb::new(0xd9, 0xd9, 0xd9),
    Rgb::new(0xbd, 0xbd, 0xbd),
    Rgb::new(0x96, 0x96, 0x96),
    Rgb::new(0x73, 0x73, 0x73),
    Rgb::new(0x52, 0x52, 0x52),
    Rgb::new(0x25, 0x25, 0x25),
    Rgb::new(0x00, 0x00, 0x00),
];

const VIRIDIS: [Rgb; 10] = [
    Rgb::new(0x44, 0x01, 0x54),
    Rgb::new(0x48, 0x28, 0x78),
    Rgb::new(0x3e, 0x49, 0x89),
    Rgb::new(0x31, 0x68, 0x8e),
    Rgb::new(0x26, 0x82, 0x8e),
    Rgb::new(0x1f, 0x9e, 0x89),
    Rgb::new(0x35, 0xb7, 0x79),
    Rgb::new(0x6e, 0xce, 0x58),
    Rgb::new(0xb5, 0xde, 0x2b),
    Rgb::new(0xfd, 0xe7, 0x25),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Colormap {
    #[default]
    Blues,
    Greens,
    Greys,
    Viridis,
}

impl Colormap {
    /// Look up a colormap by its matplotlib name
    pub fn from_name(name: &str) -> Result<Self, SurfaceError> {
        match name {
            "Blues" => Ok(Colormap::Blues),
            "Greens" => Ok(Colormap::Greens),
            "Greys" | "Grays" => Ok(Colormap::Greys),
            "viridis" => Ok(Colormap::Viridis),
            other => Err(SurfaceError::UnknownColormap(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Colormap::Blues => "Blues",
            Colormap::Greens => "Greens",
            Colormap::Greys => "Greys",
            Colormap::Viridis => "viridis",
        }
    }

    pub fn anchors(&self) -> &'static [Rgb] {
        match self {
            Colormap::Blues => &BLUES,
            Colormap::Greens => &GREENS,
            Colormap::Greys => &GREYS,
            Colormap::Viridis => &VIRIDIS,
        }
    }

    /// Color at position `t` in 0..=1 (clamped)
    pub fn sample(&self, t: f64) -> Rgb {
        let anchors = self.anchors();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let scaled = t * (anchors.len() - 1) as f64;
        let lower = (scaled.floor() as usize).min(anchors.len() - 2);
        anchors[lower].lerp(&anchors[lower + 1], scaled - lower as f64)
    }

    /// Color for `value` normalized over `vmin..=vmax`; `None` for non-finite values
    pub fn color_for(&self, value: f64, vmin: f64, vmax: f64) -> Option<Rgb> {
        if !value.is_finite() {
            return None;
        }
        Some(self.sample(normalize(value, vmin, vmax)))
    }
}

/// Position of `value` in `vmin..=vmax`; a degenerate range maps to 0
pub fn normalize(value: f64, vmin: f64, vmax: f64) -> f64 {
    if vmax <= vmin {
        return 0.0;
    }
    ((value - vmin) / (vmax - vmin)).clamp(0.0, 1.0)
}
