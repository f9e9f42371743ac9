//! Grid-to-facts materialization.
//!
//! A [`Maze`] is the plain geometric description of a grid (dimensions,
//! blocked cells, endpoints). [`Maze::to_facts`] turns it into the relations
//! consumed by the search engine.

use std::collections::BTreeSet;

use gridkb_core::{Bounds, Pos};
use rand::{Rng, RngExt};

use crate::error::{Endpoint, MazeError};
use crate::fact::{Fact, relation};
use crate::store::FactStore;

/// Rows, columns, obstacles and the two designated endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maze {
    bounds: Bounds,
    obstacles: BTreeSet<Pos>,
    start: Pos,
    goal: Pos,
}

impl Maze {
    /// An obstacle-free `rows x cols` grid.
    pub fn new(rows: i32, cols: i32, start: Pos, goal: Pos) -> Self {
        Self {
            bounds: Bounds::new(rows, cols),
            obstacles: BTreeSet::new(),
            start,
            goal,
        }
    }

    /// The 5x6 reference layout: start (0, 0), goal (4, 5), six obstacles.
    pub fn sample() -> Self {
        Self::new(5, 6, Pos::new(0, 0), Pos::new(4, 5)).with_obstacles([
            Pos::new(0, 1),
            Pos::new(2, 1),
            Pos::new(3, 1),
            Pos::new(2, 3),
            Pos::new(3, 4),
            Pos::new(4, 4),
        ])
    }

    /// Scatter obstacles over a `rows x cols` grid, each cell blocked with
    /// probability `density` (clamped to `[0, 1]`). Start and goal are never
    /// blocked.
    pub fn random<R: Rng>(
        rows: i32,
        cols: i32,
        start: Pos,
        goal: Pos,
        density: f64,
        rng: &mut R,
    ) -> Self {
        let mut maze = Self::new(rows, cols, start, goal);
        let p = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        for pos in maze.bounds {
            if pos != start && pos != goal && rng.random_bool(p) {
                maze.obstacles.insert(pos);
            }
        }
        maze
    }

    /// Add obstacles. Duplicates collapse; positions outside the bounds are
    /// kept but never produce facts.
    pub fn with_obstacles(mut self, obstacles: impl IntoIterator<Item = Pos>) -> Self {
        self.obstacles.extend(obstacles);
        self
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn start(&self) -> Pos {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Pos {
        self.goal
    }

    /// Blocked positions, in row-major order.
    pub fn obstacles(&self) -> impl Iterator<Item = Pos> + '_ {
        self.obstacles.iter().copied()
    }

    /// Whether `p` is inside the grid and not blocked.
    #[inline]
    pub fn is_open(&self, p: Pos) -> bool {
        self.bounds.contains(p) && !self.obstacles.contains(&p)
    }

    /// Check that the grid is non-empty and both endpoints are open cells.
    pub fn validate(&self) -> Result<(), MazeError> {
        if self.bounds.is_empty() {
            return Err(MazeError::EmptyGrid(self.bounds));
        }
        for (what, pos) in [(Endpoint::Start, self.start), (Endpoint::Goal, self.goal)] {
            if !self.bounds.contains(pos) {
                return Err(MazeError::OutOfBounds {
                    what,
                    pos,
                    bounds: self.bounds,
                });
            }
            if self.obstacles.contains(&pos) {
                return Err(MazeError::Blocked { what, pos });
            }
        }
        Ok(())
    }

    /// Materialize the grid as facts.
    ///
    /// Emits, in order: a `Cell` for every in-bounds position (blocked ones
    /// included), an `Obstacle` per in-bounds blocked cell, `Start`, `Goal`,
    /// then for each open cell a `Move` to every open cardinal neighbour,
    /// visited down, up, right, left. Both directions of an edge are stored.
    pub fn to_facts(&self) -> FactStore {
        let mut store = FactStore::new();
        store.extend(self.bounds.iter().map(Fact::cell));
        store.extend(
            self.obstacles
                .iter()
                .filter(|p| self.bounds.contains(**p))
                .map(|&p| Fact::obstacle(p)),
        );
        store.add(Fact::start(self.start));
        store.add(Fact::goal(self.goal));

        for from in self.bounds {
            if !self.is_open(from) {
                continue;
            }
            for to in from.neighbors_4() {
                if self.is_open(to) {
                    store.add(Fact::step(from, to));
                }
            }
        }

        log::debug!(
            "materialized {} grid: {} cells, {} obstacles, {} moves",
            self.bounds,
            store.count(relation::CELL),
            store.count(relation::OBSTACLE),
            store.count(relation::MOVE)
        );
        store
    }
}

/// Check that `start` and `goal` name existing, unblocked cells of `store`.
///
/// Search treats a bogus endpoint exactly like an unreachable goal; callers
/// that need to tell the two apart validate first.
pub fn validate_endpoints(store: &FactStore, start: Pos, goal: Pos) -> Result<(), MazeError> {
    for (what, pos) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
        if !store.contains(&Fact::cell(pos)) {
            return Err(MazeError::UnknownCell { what, pos });
        }
        if store.contains(&Fact::obstacle(pos)) {
            return Err(MazeError::Blocked { what, pos });
        }
    }
    Ok(())
}
