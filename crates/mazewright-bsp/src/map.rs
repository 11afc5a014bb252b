//! The dense tile grid a layout run writes into.

use std::fmt;

use glam::IVec2;
use mazewright_checked::MapSize;

use crate::tile::TileCategory;

/// A rectangular grid of [`TileCategory`] cells.
///
/// Coordinates run from `(0, 0)` at the top-left to
/// `(width - 1, height - 1)`; y grows downward. Accessing a cell outside
/// the grid is a bug in the caller and panics.
///
/// The `Display` implementation renders the grid as ASCII, one glyph per
/// cell (see [`TileCategory::glyph`]), which is handy for tests and quick
/// diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    width: i32,
    height: i32,
    cells: Vec<TileCategory>,
}

impl Map {
    /// Creates a map with every cell set to [`TileCategory::Empty`].
    pub fn new(width: MapSize, height: MapSize) -> Self {
        let (width, height) = (width.get(), height.get());
        Self {
            width,
            height,
            cells: vec![TileCategory::default(); (width * height) as usize],
        }
    }

    /// Width of the grid in cells.
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid in cells.
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Returns true if `(x, y)` addresses a cell of this grid.
    pub const fn is_valid_position(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Returns true if `p` addresses a cell of this grid.
    pub const fn contains(&self, p: IVec2) -> bool {
        self.is_valid_position(p.x, p.y)
    }

    /// The category at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the grid.
    pub fn get(&self, x: i32, y: i32) -> TileCategory {
        self.cells[self.index_of(x, y)]
    }

    /// Sets the category at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the grid.
    pub fn set(&mut self, x: i32, y: i32, value: TileCategory) {
        let index = self.index_of(x, y);
        self.cells[index] = value;
    }

    /// The category at `p`.
    pub fn get_at(&self, p: IVec2) -> TileCategory {
        self.get(p.x, p.y)
    }

    /// Sets the category at `p`.
    pub fn set_at(&mut self, p: IVec2, value: TileCategory) {
        self.set(p.x, p.y, value);
    }

    /// Resets every cell to [`TileCategory::Empty`].
    pub fn clear(&mut self) {
        self.cells.fill(TileCategory::default());
    }

    fn index_of(&self, x: i32, y: i32) -> usize {
        assert!(
            self.is_valid_position(x, y),
            "map access out of bounds: ({x}, {y}) on a {}x{} grid",
            self.width,
            self.height
        );
        (x + y * self.width) as usize
    }
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                write!(f, "{}", self.get(x, y).glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
