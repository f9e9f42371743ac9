use std::collections::{BinaryHeap, HashSet};

use gridkb_core::Pos;
use gridkb_facts::FactStore;

use crate::frontier::{Frontier, ROOT, Step};
use crate::graph::MoveGraph;
use crate::traits::AstarPather;

/// Counters from the most recent [`Astar::path`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Cells taken off the frontier and expanded (closed).
    pub expanded: usize,
    /// Entries pushed onto the frontier, the seed included.
    pub pushed: usize,
    /// Entries popped for a cell that was already closed.
    pub stale: usize,
}

/// Reusable A* engine.
///
/// Holds the frontier, closed set and trail arena between calls so repeated
/// searches stop allocating once warmed up. Each call starts from a clean
/// slate; nothing carries over except capacity.
#[derive(Debug, Default)]
pub struct Astar {
    open: BinaryHeap<Frontier>,
    closed: HashSet<Pos>,
    trail: Vec<Step>,
    nbuf: Vec<Pos>,
    stats: SearchStats,
}

impl Astar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counters from the last search.
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Compute a shortest path from `from` to `to` using A*.
    ///
    /// Returns the full path (including both endpoints) or `None` if `to`
    /// cannot be reached. `from == to` yields `[from]` without consulting
    /// the pather. Endpoints are not validated: a cell unknown to `pather`
    /// simply has no neighbours.
    pub fn path<P: AstarPather>(&mut self, pather: &P, from: Pos, to: Pos) -> Option<Vec<Pos>> {
        self.open.clear();
        self.closed.clear();
        self.trail.clear();
        self.stats = SearchStats::default();

        self.trail.push(Step {
            pos: from,
            parent: ROOT,
        });
        self.open.push(Frontier {
            f: pather.estimate(from, to),
            g: 0,
            pos: from,
            trail: 0,
        });
        self.stats.pushed = 1;

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = loop {
            let Some(current) = self.open.pop() else {
                break None;
            };

            // A cheaper route to this cell was already finalized.
            if !self.closed.insert(current.pos) {
                self.stats.stale += 1;
                continue;
            }
            self.stats.expanded += 1;
            log::trace!("expand {} f={} g={}", current.pos, current.f, current.g);

            if current.pos == to {
                break Some(current.trail);
            }

            nbuf.clear();
            pather.neighbors(current.pos, &mut nbuf);

            let g = current.g + 1;
            for &np in nbuf.iter() {
                // Unit costs: a closed cell can never be improved.
                if self.closed.contains(&np) {
                    continue;
                }
                let idx = self.trail.len();
                self.trail.push(Step {
                    pos: np,
                    parent: current.trail,
                });
                self.open.push(Frontier {
                    f: g.saturating_add(pather.estimate(np, to)),
                    g,
                    pos: np,
                    trail: idx,
                });
                self.stats.pushed += 1;
            }
        };

        self.nbuf = nbuf;

        log::debug!(
            "astar {} -> {}: {} (expanded {}, pushed {}, stale {})",
            from,
            to,
            if found.is_some() { "found" } else { "no path" },
            self.stats.expanded,
            self.stats.pushed,
            self.stats.stale
        );

        // Reconstruct path.
        let mut path = Vec::new();
        let mut ti = found?;
        while ti != ROOT {
            let step = self.trail[ti];
            path.push(step.pos);
            ti = step.parent;
        }
        path.reverse();
        Some(path)
    }
}

/// Shortest path from `start` to `goal` over the `Move` relation of `store`.
///
/// Returns every cell from `start` to `goal` inclusive, or `None` when no
/// route exists. Endpoints that are out of bounds, blocked or unknown to the
/// store are indistinguishable from an unreachable goal here; use
/// [`validate_endpoints`](gridkb_facts::validate_endpoints) beforehand to
/// tell them apart.
pub fn search(store: &FactStore, start: Pos, goal: Pos) -> Option<Vec<Pos>> {
    Astar::new().path(&MoveGraph::new(store), start, goal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Pather;
    use gridkb_facts::{Fact, Maze};

    fn assert_walkable(maze: &Maze, path: &[Pos]) {
        for w in path.windows(2) {
            assert!(w[0].is_adjacent(w[1]), "{} -> {} is not a step", w[0], w[1]);
        }
        for &p in path {
            assert!(maze.is_open(p), "{p} is not open");
        }
    }

    #[test]
    fn sample_maze_takes_nine_steps() {
        let maze = Maze::sample();
        let store = maze.to_facts();
        let path = search(&store, maze.start(), maze.goal()).unwrap();
        // Equal to the Manhattan distance, so nothing shorter exists.
        assert_eq!(path.len() - 1, 9);
        assert_eq!(path.first(), Some(&maze.start()));
        assert_eq!(path.last(), Some(&maze.goal()));
        assert_walkable(&maze, &path);
    }

    #[test]
    fn sample_maze_path_is_fixed() {
        // Pinned under the documented tie-break order.
        let store = Maze::sample().to_facts();
        let path = search(&store, Pos::new(0, 0), Pos::new(4, 5)).unwrap();
        let expected: Vec<Pos> = [
            (0, 0),
            (1, 0),
            (1, 1),
            (1, 2),
            (1, 3),
            (1, 4),
            (1, 5),
            (2, 5),
            (3, 5),
            (4, 5),
        ]
        .into_iter()
        .map(Pos::from)
        .collect();
        assert_eq!(path, expected);
    }

    #[test]
    fn start_equals_goal() {
        let store = Maze::sample().to_facts();
        let c = Pos::new(2, 2);
        assert_eq!(search(&store, c, c), Some(vec![c]));
    }

    #[test]
    fn walled_in_goal_is_unreachable() {
        let goal = Pos::new(2, 2);
        let maze = Maze::new(5, 5, Pos::new(0, 0), goal).with_obstacles(goal.neighbors_4());
        let store = maze.to_facts();
        assert_eq!(search(&store, Pos::new(0, 0), goal), None);
        assert_eq!(search(&store, Pos::new(4, 4), goal), None);
    }

    #[test]
    fn empty_store_has_no_path() {
        let store = FactStore::new();
        assert_eq!(search(&store, Pos::new(0, 0), Pos::new(0, 1)), None);
    }

    #[test]
    fn directed_moves_are_respected() {
        let mut store = FactStore::new();
        store.add(Fact::step(Pos::new(0, 0), Pos::new(0, 1)));
        store.add(Fact::step(Pos::new(0, 1), Pos::new(0, 2)));
        assert_eq!(
            search(&store, Pos::new(0, 0), Pos::new(0, 2)),
            Some(vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)])
        );
        assert_eq!(search(&store, Pos::new(0, 2), Pos::new(0, 0)), None);
    }

    #[test]
    fn extreme_coordinates_give_no_path() {
        let store = FactStore::new();
        let lo = Pos::new(i32::MIN, i32::MIN);
        let hi = Pos::new(i32::MAX, i32::MAX);
        assert_eq!(search(&store, lo, hi), None);
        assert_eq!(search(&store, hi, lo), None);
    }

    #[test]
    fn far_goal_saturates_f() {
        // Start is wired to a neighbour; goal is as far away as i32 allows.
        let mut store = FactStore::new();
        store.add(Fact::step(Pos::new(i32::MIN, i32::MIN), Pos::new(i32::MIN + 1, i32::MIN)));
        let graph = MoveGraph::new(&store);
        let mut astar = Astar::new();
        let goal = Pos::new(i32::MAX, i32::MAX);
        assert_eq!(astar.path(&graph, Pos::new(i32::MIN, i32::MIN), goal), None);
        assert_eq!(astar.stats().expanded, 2);
    }

    /// Counts neighbour lookups made by the engine.
    struct Counting<'a> {
        graph: MoveGraph<'a>,
        calls: std::cell::Cell<usize>,
    }

    impl Pather for Counting<'_> {
        fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
            self.calls.set(self.calls.get() + 1);
            self.graph.neighbors(p, buf);
        }
    }

    impl AstarPather for Counting<'_> {
        fn estimate(&self, from: Pos, to: Pos) -> u32 {
            self.graph.estimate(from, to)
        }
    }

    #[test]
    fn large_grid_expands_each_cell_once() {
        // 200x200 with column 100 walled off except the bottom row.
        let n = 200;
        let wall = (0..n - 1).map(|row| Pos::new(row, 100));
        let maze = Maze::new(n, n, Pos::new(0, 0), Pos::new(0, n - 1)).with_obstacles(wall);
        let store = maze.to_facts();
        let pather = Counting {
            graph: MoveGraph::new(&store),
            calls: std::cell::Cell::new(0),
        };
        assert_eq!(pather.graph.move_count(), store.count(gridkb_facts::relation::MOVE));

        let mut astar = Astar::new();
        let path = astar.path(&pather, maze.start(), maze.goal()).unwrap();
        // Down, across through the gap, back up.
        assert_eq!(path.len() - 1, 3 * (n as usize - 1));
        assert!(path.contains(&Pos::new(n - 1, 100)));
        assert_walkable(&maze, &path);

        let stats = astar.stats();
        assert!(stats.expanded <= maze.bounds().len());
        // One lookup per expanded cell, none for the goal.
        assert_eq!(pather.calls.get(), stats.expanded - 1);
    }

    #[test]
    fn detour_around_wall() {
        // Column 2 blocked except the bottom row.
        let maze = Maze::new(4, 5, Pos::new(0, 0), Pos::new(0, 4))
            .with_obstacles([Pos::new(0, 2), Pos::new(1, 2), Pos::new(2, 2)]);
        let store = maze.to_facts();
        let path = search(&store, maze.start(), maze.goal()).unwrap();
        // 3 down, 4 across, 3 up.
        assert_eq!(path.len() - 1, 10);
        assert!(path.contains(&Pos::new(3, 2)));
        assert_walkable(&maze, &path);
    }

    #[test]
    fn engine_reuse_gives_identical_results() {
        let store = Maze::sample().to_facts();
        let graph = MoveGraph::new(&store);
        let mut astar = Astar::new();
        let first = astar.path(&graph, Pos::new(0, 0), Pos::new(4, 5));
        let stats = astar.stats();
        // An unrelated search in between must not leak state.
        assert!(astar.path(&graph, Pos::new(4, 0), Pos::new(0, 5)).is_some());
        let again = astar.path(&graph, Pos::new(0, 0), Pos::new(4, 5));
        assert_eq!(first, again);
        assert_eq!(stats, astar.stats());
    }

    #[test]
    fn stats_track_the_search() {
        let store = Maze::sample().to_facts();
        let graph = MoveGraph::new(&store);
        let mut astar = Astar::new();
        astar.path(&graph, Pos::new(0, 0), Pos::new(4, 5));
        assert_eq!(
            astar.stats(),
            SearchStats {
                expanded: 20,
                pushed: 27,
                stale: 3
            }
        );

        astar.path(&graph, Pos::new(3, 3), Pos::new(3, 3));
        assert_eq!(
            astar.stats(),
            SearchStats {
                expanded: 1,
                pushed: 1,
                stale: 0
            }
        );
    }
}
