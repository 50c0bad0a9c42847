//! Preset Frozen Lake map layouts
//!
//! `S` start, `F` frozen, `H` hole, `G` goal.

use crate::error::GridError;
use super::grid::GridDescription;

pub const FROZEN_LAKE_4X4: [&str; 4] = ["SFFF", "FHFH", "FFFH", "HFFG"];

pub const FROZEN_LAKE_8X8: [&str; 8] = [
    "SFFFFFFF",
    "FFFFFFFF",
    "FFFHFFFF",
    "FFFFFHFF",
    "FFFHFFFF",
    "FHHFFFHF",
    "FHFFHFHF",
    "FFFHFFFG",
];

/// Look up a preset map by name (`"4x4"` or `"8x8"`)
pub fn frozen_lake(name: &str) -> Result<GridDescription, GridError> {
    match name {
        "4x4" => GridDescription::from_rows(&FROZEN_LAKE_4X4),
        "8x8" => GridDescription::from_rows(&FROZEN_LAKE_8X8),
        other => Err(GridError::UnknownMap(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::grid::CellCategory;

    #[test]
    fn test_presets_load() {
        let small = frozen_lake("4x4").unwrap();
        assert_eq!(small.shape(), (4, 4));
        let large = frozen_lake("8x8").unwrap();
        assert_eq!(large.shape(), (8, 8));
        assert_eq!(large.category_of_state(63), Some(CellCategory::Goal));
    }

    #[test]
    fn test_unknown_preset() {
        assert_eq!(frozen_lake("5x5").unwrap_err(), GridError::UnknownMap("5x5".to_string()));
    }
}
