//! Shortest-path search over grid topology stored as facts.
//!
//! - **A\*** with the Manhattan heuristic ([`search`], [`Astar::path`])
//! - **BFS** unit-cost distance maps ([`bfs_distances`], [`reachable`])
//!
//! Algorithms are generic over the [`Pather`] / [`AstarPather`] traits;
//! [`MoveGraph`] implements both on top of the `Move` relation of a
//! [`FactStore`](gridkb_facts::FactStore). Every edge costs 1.
//!
//! # Tie-breaking
//!
//! Frontier entries pop by ascending `f = g + h`, then ascending `g`, then
//! ascending cell in row-major order, then in push order. Equal inputs
//! therefore always produce the same path.

mod astar;
mod bfs;
mod distance;
mod frontier;
mod graph;
mod traits;

pub use astar::{Astar, SearchStats, search};
pub use bfs::{bfs_distances, reachable};
pub use distance::manhattan;
pub use graph::MoveGraph;
pub use traits::{AstarPather, Pather};
