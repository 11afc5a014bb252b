//! 8-way grid directions.
//!
//! Directions are unit offsets on an integer grid with y growing downward,
//! so [`Direction::North`] is `(0, -1)`. The corridor digger walks in
//! cardinal directions and inspects the two diagonal cells flanking the
//! cell ahead; [`Direction::flanks`] names those diagonals.
//!
//! # Example
//!
//! ```
//! use glam::IVec2;
//! use mazewright_direction::Direction;
//!
//! let p = IVec2::new(3, 3);
//! assert_eq!(Direction::East.apply(p), IVec2::new(4, 3));
//!
//! let (left, right) = Direction::East.flanks();
//! assert_eq!(left, Direction::NorthEast);
//! assert_eq!(right, Direction::SouthEast);
//! ```

#![deny(missing_docs)]

use glam::IVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the eight grid directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Up, `(0, -1)`.
    North,
    /// Down, `(0, 1)`.
    South,
    /// Right, `(1, 0)`.
    East,
    /// Left, `(-1, 0)`.
    West,
    /// Up-right, `(1, -1)`.
    NorthEast,
    /// Up-left, `(-1, -1)`.
    NorthWest,
    /// Down-right, `(1, 1)`.
    SouthEast,
    /// Down-left, `(-1, 1)`.
    SouthWest,
}

/// The four cardinal directions.
pub const CARDINALS: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
];

impl Direction {
    /// The unit offset of this direction.
    #[inline]
    pub const fn offset(self) -> IVec2 {
        match self {
            Self::North => IVec2::new(0, -1),
            Self::South => IVec2::new(0, 1),
            Self::East => IVec2::new(1, 0),
            Self::West => IVec2::new(-1, 0),
            Self::NorthEast => IVec2::new(1, -1),
            Self::NorthWest => IVec2::new(-1, -1),
            Self::SouthEast => IVec2::new(1, 1),
            Self::SouthWest => IVec2::new(-1, 1),
        }
    }

    /// The cell one step from `p` in this direction.
    #[inline]
    pub fn apply(self, p: IVec2) -> IVec2 {
        p + self.offset()
    }

    /// Returns true for the four cardinal directions.
    #[inline]
    pub const fn is_cardinal(self) -> bool {
        matches!(self, Self::North | Self::South | Self::East | Self::West)
    }

    /// The diagonals flanking the cell one step ahead in this direction,
    /// as `(left-hand, right-hand)` relative to the walk.
    ///
    /// # Panics
    ///
    /// Flanks are only defined for cardinal directions; calling this on a
    /// diagonal is a precondition violation.
    pub const fn flanks(self) -> (Direction, Direction) {
        match self {
            Self::North => (Self::NorthWest, Self::NorthEast),
            Self::South => (Self::SouthWest, Self::SouthEast),
            Self::East => (Self::NorthEast, Self::SouthEast),
            Self::West => (Self::NorthWest, Self::SouthWest),
            _ => panic!("flanks are only defined for cardinal directions"),
        }
    }
}
