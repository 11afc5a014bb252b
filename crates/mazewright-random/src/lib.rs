//! Random number generation for deterministic map generation.
//!
//! # Overview
//!
//! `mazewright-random` wraps `rand` behind a small [`Rng`] type with the
//! primitives the layout pipeline draws from:
//!
//! *   **Uniform integers** in an inclusive range ([`Rng::range`],
//!     [`Rng::range_in`]).
//! *   **Fair coin flips** ([`Rng::coin`]).
//! *   **Weighted range sampling** backed by a truncated normal
//!     distribution ([`Rng::weighted_range`]).
//!
//! Generators are borrowed mutably by the code that consumes them, never
//! owned: seeding one `Rng` and replaying the same calls yields the same
//! stream, which is what makes whole-map generation reproducible.
//!
//! # Example
//!
//! ```rust
//! use mazewright_random::prelude::*;
//!
//! let mut a = Rng::with_seed(12345);
//! let mut b = Rng::with_seed(12345);
//! assert_eq!(a.range(1, 100), b.range(1, 100));
//! assert_eq!(a.coin(), b.coin());
//! ```

pub mod rng;
pub mod weighted;

pub mod prelude {
    //! Convenient glob import for randomness consumers.
    pub use crate::rng::Rng;
}

pub use rng::Rng;
