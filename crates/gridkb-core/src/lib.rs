//! **gridkb-core** — coordinate types shared across the *gridkb* crates.
//!
//! A grid cell is addressed by [`Pos`] (row, column) and a grid's extent by
//! [`Bounds`]. Both are small `Copy` values with a total, deterministic order
//! so they can key ordered maps and break ties in priority queues.

pub mod geom;

pub use geom::{Bounds, BoundsIter, Pos};
