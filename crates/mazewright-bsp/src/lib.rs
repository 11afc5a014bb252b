//! Binary space partitioning for dungeon layout generation.
//!
//! This crate builds roguelike levels in four stages: a recursive binary
//! space partition cuts the map into regions, eligible regions grow rooms,
//! rooms are rasterized onto a tile grid (floor inside, walls around,
//! seamless joins where rooms abut), and a randomized digger connects
//! sibling regions with corridors, leaving doors where a corridor pierces
//! a room wall.
//!
//! Generation is deterministic: the same seed and the same [`BspParams`]
//! always produce the same [`Map`].
//!
//! # Example
//!
//! ```
//! use mazewright_bsp::{BspLayout, BspParams};
//! use mazewright_random::Rng;
//!
//! let params = BspParams::default().with_map_size(48, 32);
//! let mut rng = Rng::with_seed(1984);
//! let mut layout = BspLayout::new(params);
//! let map = layout.generate(&mut rng);
//!
//! // Print the level as ASCII.
//! print!("{map}");
//!
//! // Rooms and terminal regions are available for game logic and debug
//! // overlays.
//! for room in layout.rooms() {
//!     println!("room at ({}, {}), {}x{}", room.left, room.top, room.width(), room.height());
//! }
//! ```

#![deny(missing_docs)]

pub mod layout;
pub mod map;
pub mod params;
pub mod split;
pub mod tile;

mod corridor;
mod rooms;
mod tree;

pub use layout::BspLayout;
pub use map::Map;
pub use params::{BspParams, ParamsError};
pub use split::SplitKind;
pub use tile::TileCategory;

pub mod prelude {
    //! Convenient glob import for layout consumers.
    pub use crate::layout::BspLayout;
    pub use crate::map::Map;
    pub use crate::params::{BspParams, ParamsError};
    pub use crate::split::SplitKind;
    pub use crate::tile::TileCategory;
}
