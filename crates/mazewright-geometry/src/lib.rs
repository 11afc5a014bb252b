//! 2D geometry primitives for grid-based maps.
//!
//! # Overview
//!
//! `mazewright-geometry` provides the geometric types the layout pipeline is
//! built on. Points and vectors are `glam`'s `IVec2`; this crate adds the
//! grid-specific abstractions on top:
//!
//! *   **`Rect`:** An axis-aligned rectangle with half-open right/bottom
//!     edges, so `width == right - left` and neighbouring rectangles tile
//!     without overlap.
//! *   **Border predicates:** Queries like [`Rect::is_border`] that the room
//!     rasterizer uses to decide wall cells.
//!
//! # Example
//!
//! ```rust
//! use mazewright_geometry::prelude::*;
//!
//! let room = Rect::new(10, 10, 20, 18);
//! assert_eq!(room.width(), 10);
//! assert_eq!(room.height(), 8);
//! assert_eq!(room.center(), IVec2::new(15, 14));
//!
//! assert!(room.contains(IVec2::new(10, 10)));
//! assert!(!room.contains(IVec2::new(20, 10)));
//! ```

pub mod shapes;

pub mod prelude {
    //! Convenient glob import for geometry consumers.
    pub use crate::shapes::*;
    pub use glam::IVec2;
}
