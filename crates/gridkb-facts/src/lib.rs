//! Relation-keyed fact storage for grid topology.
//!
//! A grid is described as ground facts rather than geometry: which cells
//! exist, which are blocked, where the endpoints sit, and which directed
//! moves are legal. Consumers query the [`FactStore`] by relation name and
//! never re-derive adjacency themselves.
//!
//! - [`Fact`] — one relation instance (name + integer arguments)
//! - [`FactStore`] — insertion-ordered multimap from relation name to facts
//! - [`Maze`] — rows, columns and obstacles, materialized via [`Maze::to_facts`]
//! - [`validate_endpoints`] — tells invalid input apart from "unreachable"

mod error;
mod fact;
mod maze;
mod store;

pub use error::{Endpoint, MazeError};
pub use fact::{Fact, relation};
pub use maze::{Maze, validate_endpoints};
pub use store::FactStore;
