use std::fmt;

use gridkb_core::{Bounds, Pos};
use thiserror::Error;

/// Which designated endpoint an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Endpoint::Start => "start",
            Endpoint::Goal => "goal",
        })
    }
}

/// Invalid grid or endpoint description.
///
/// Search itself never reports these: a bad endpoint just yields no path.
/// Validate first when "unreachable" and "invalid" must be told apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("grid {0} has no cells")]
    EmptyGrid(Bounds),

    #[error("{what} {pos} is outside the {bounds} grid")]
    OutOfBounds {
        what: Endpoint,
        pos: Pos,
        bounds: Bounds,
    },

    #[error("{what} {pos} is an obstacle")]
    Blocked { what: Endpoint, pos: Pos },

    #[error("{what} {pos} is not a known cell")]
    UnknownCell { what: Endpoint, pos: Pos },
}
