//! Grid actions and their arrow glyphs
//!
//! Action indices follow the Frozen Lake convention:
//! 0 = left, 1 = down, 2 = right, 3 = up.

use serde::{Deserialize, Serialize};

/// Arrow glyph per action index
pub const ACTION_GLYPHS: [char; 4] = ['←', '↓', '→', '↑'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Left,
    Down,
    Right,
    Up,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Left, Action::Down, Action::Right, Action::Up];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn glyph(self) -> char {
        ACTION_GLYPHS[self.index()]
    }
}

/// Glyph for an action index, `None` outside 0..=3
pub fn glyph_for_action(index: usize) -> Option<char> {
    Action::from_index(index).map(Action::glyph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_table() {
        assert_eq!(glyph_for_action(0), Some('←'));
        assert_eq!(glyph_for_action(1), Some('↓'));
        assert_eq!(glyph_for_action(2), Some('→'));
        assert_eq!(glyph_for_action(3), Some('↑'));
        assert_eq!(glyph_for_action(4), None);
    }

    #[test]
    fn test_index_round_trip() {
        for action in Action::ALL {
            assert_eq!(Action::from_index(action.index()), Some(action));
        }
    }
}
