//! Tile categories for generated maps.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What occupies a single map cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TileCategory {
    /// Unused space; the state every cell starts in.
    #[default]
    Empty,
    /// A room wall.
    Wall,
    /// Room interior.
    Floor,
    /// A wall cell a corridor punched through.
    Door,
    /// A dug connection between rooms.
    Corridor,
    /// A stairway to another level.
    Stair,
    /// A cell in no valid state.
    Invalid,
}

impl TileCategory {
    /// The character used for this category in ASCII dumps.
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => ' ',
            Self::Wall => '#',
            Self::Floor => '.',
            Self::Door => '0',
            Self::Corridor => 'X',
            Self::Stair => '$',
            Self::Invalid => '?',
        }
    }

    /// Returns true if the cell can be walked on.
    pub const fn is_passable(self) -> bool {
        matches!(self, Self::Floor | Self::Door | Self::Corridor | Self::Stair)
    }
}
