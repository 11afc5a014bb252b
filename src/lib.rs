//! # Mazewright 🧱🕯️
//!
//! ## A modular BSP dungeon layout library for Rust
//!
//! `mazewright` generates roguelike dungeon levels: a seeded binary space
//! partition carves the map into regions, regions grow rooms, and a
//! randomized digger connects sibling regions with corridors, punching
//! doors where a corridor crosses a room wall. Generation is
//! deterministic: the same seed and parameters always produce the same
//! map.
//!
//! This crate is the facade, re-exporting the `mazewright` ecosystem.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mazewright_rl::prelude::*;
//!
//! fn main() {
//!     let mut rng = Rng::with_seed(1984);
//!     let mut layout = BspLayout::new(BspParams::default());
//!     let map = layout.generate(&mut rng);
//!
//!     // One glyph per cell: '.' floor, '#' wall, 'X' corridor, '0' door.
//!     print!("{map}");
//! }
//! ```
//!
//! ## Available Features
//!
//! -   `bsp`: The layout generator itself (tile grid, regions, rooms,
//!     corridors). Enabled by default.
//! -   `direction`: Grid-based direction handling. Enabled by default.
//! -   `full`: Enables all features.

#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::module_name_repetitions)]
#![deny(missing_docs)]

// Re-export core types (always available)
pub use mazewright_checked as checked;
pub use mazewright_geometry as geometry;
pub use mazewright_random as random;

// Optional feature-gated crates
#[cfg(feature = "bsp")]
pub use mazewright_bsp as bsp;

#[cfg(feature = "direction")]
pub use mazewright_direction as direction;

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types (always available)
    pub use crate::checked::{
        AspectRatio, ClosedRange, MapSize, Percent, Positive, PositiveF32, SignedPercent,
    };
    pub use crate::geometry::prelude::*;
    pub use crate::random::prelude::*;

    // Optional feature-gated modules
    #[cfg(feature = "bsp")]
    pub use crate::bsp::prelude::*;

    #[cfg(feature = "direction")]
    pub use crate::direction::{Direction, CARDINALS};
}
