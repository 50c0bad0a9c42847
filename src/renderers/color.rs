//! Color parsing
//!
//! Accepts a small set of named colors plus `#rgb` / `#rrggbb` hex.

use serde::{Deserialize, Serialize};

use crate::error::SurfaceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("black", Rgb::new(0x00, 0x00, 0x00)),
    ("white", Rgb::new(0xff, 0xff, 0xff)),
    ("red", Rgb::new(0xff, 0x00, 0x00)),
    ("green", Rgb::new(0x00, 0x80, 0x00)),
    ("blue", Rgb::new(0x00, 0x00, 0xff)),
    ("gray", Rgb::new(0x80, 0x80, 0x80)),
    ("grey", Rgb::new(0x80, 0x80, 0x80)),
    ("orange", Rgb::new(0xff, 0xa5, 0x00)),
];

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a named color or a hex literal
    pub fn parse(spec: &str) -> Result<Self, SurfaceError> {
        let spec = spec.trim();
        let invalid = || SurfaceError::InvalidColor(spec.to_string());

        if let Some(hex) = spec.strip_prefix('#') {
            if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
            return match hex.len() {
                6 => Ok(Self::new(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
                3 => {
                    let expand = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
                    Ok(Self::new(expand(0)?, expand(1)?, expand(2)?))
                }
                _ => Err(invalid()),
            };
        }

        let lower = spec.to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, rgb)| *rgb)
            .ok_or_else(invalid)
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear interpolation towards `other`, `t` clamped to 0..=1
    pub fn lerp(&self, other: &Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors() {
        assert_eq!(Rgb::parse("red").unwrap().to_hex(), "#ff0000");
        assert_eq!(Rgb::parse("Green").unwrap().to_hex(), "#008000");
        assert_eq!(Rgb::parse(" white ").unwrap(), Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(Rgb::parse("#08306b").unwrap(), Rgb::new(0x08, 0x30, 0x6b));
        assert_eq!(Rgb::parse("#fa0").unwrap(), Rgb::new(0xff, 0xaa, 0x00));
    }

    #[test]
    fn test_invalid_colors() {
        assert_eq!(Rgb::parse("mauve-ish"), Err(SurfaceError::InvalidColor("mauve-ish".to_string())));
        assert!(Rgb::parse("#12345").is_err());
        assert!(Rgb::parse("#gg0000").is_err());
        assert!(Rgb::parse("").is_err());
    }

    #[test]
    fn test_lerp() {
        let black = Rgb::new(0, 0, 0);
        let white = Rgb::new(255, 255, 255);
        assert_eq!(black.lerp(&white, 0.5), Rgb::new(128, 128, 128));
        assert_eq!(black.lerp(&white, 2.0), white);
    }
}
