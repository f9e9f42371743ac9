use gridkb_core::Pos;

/// Minimal pathfinding interface: neighbour enumeration.
pub trait Pather {
    /// Append cells reachable in one step from `p` into `buf`. The caller
    /// clears `buf` before calling. Every step costs 1.
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>);
}

/// Pather with a heuristic for A*.
pub trait AstarPather: Pather {
    /// Estimated number of steps from `from` to `to`.
    /// Must never overestimate the true distance (admissible).
    fn estimate(&self, from: Pos, to: Pos) -> u32;
}
