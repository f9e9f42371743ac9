//! Property tests: A* against an independent BFS on random small grids.

use gridkb_core::Pos;
use gridkb_facts::{Fact, FactStore, Maze};
use gridkb_search::{Astar, MoveGraph, bfs_distances, manhattan, search};
use proptest::collection::vec;
use proptest::prelude::*;

/// A random grid with roughly 30% obstacles, plus a start cell index.
fn grid() -> impl Strategy<Value = (Maze, Pos)> {
    (1i32..7, 1i32..7).prop_flat_map(|(rows, cols)| {
        let n = (rows * cols) as usize;
        (vec(prop::bool::weighted(0.3), n), 0..n).prop_map(move |(mask, s)| {
            let at = |i: usize| Pos::new(i as i32 / cols, i as i32 % cols);
            let start = at(s);
            let blocked = mask
                .iter()
                .enumerate()
                .filter(|&(i, &b)| b && at(i) != start)
                .map(|(i, _)| at(i));
            let maze = Maze::new(rows, cols, start, start).with_obstacles(blocked);
            (maze, start)
        })
    })
}

fn open_cells(maze: &Maze) -> Vec<Pos> {
    maze.bounds().iter().filter(|&p| maze.is_open(p)).collect()
}

proptest! {
    /// Path length equals the BFS distance; no path exactly when BFS misses.
    #[test]
    fn astar_matches_bfs((maze, start) in grid()) {
        let store = maze.to_facts();
        let dist = bfs_distances(&MoveGraph::new(&store), start);

        for goal in open_cells(&maze) {
            match search(&store, start, goal) {
                Some(path) => {
                    prop_assert_eq!(path.first(), Some(&start));
                    prop_assert_eq!(path.last(), Some(&goal));
                    prop_assert_eq!(Some(&((path.len() - 1) as u32)), dist.get(&goal));
                }
                None => prop_assert!(!dist.contains_key(&goal)),
            }
        }
    }

    /// Every consecutive pair of a returned path is a stored `Move`.
    #[test]
    fn paths_only_use_move_facts((maze, start) in grid()) {
        let store = maze.to_facts();
        for goal in open_cells(&maze) {
            if let Some(path) = search(&store, start, goal) {
                for w in path.windows(2) {
                    prop_assert!(store.contains(&Fact::step(w[0], w[1])));
                }
            }
        }
    }

    /// Manhattan distance never exceeds the true distance.
    #[test]
    fn heuristic_is_admissible((maze, _start) in grid()) {
        let store = maze.to_facts();
        let graph = MoveGraph::new(&store);
        for a in open_cells(&maze) {
            for (b, d) in bfs_distances(&graph, a) {
                prop_assert!(manhattan(a, b) <= d, "h({}, {}) > {}", a, b, d);
            }
        }
    }

    /// Same store and endpoints give the same path, fresh engine or reused.
    #[test]
    fn repeated_searches_agree((maze, start) in grid()) {
        let store = maze.to_facts();
        let graph = MoveGraph::new(&store);
        let mut engine = Astar::new();
        for goal in open_cells(&maze) {
            let a = search(&store, start, goal);
            let b = engine.path(&graph, start, goal);
            let c = search(&store, start, goal);
            prop_assert_eq!(&a, &b);
            prop_assert_eq!(&a, &c);
        }
    }

    /// Any open cell reaches itself in zero steps.
    #[test]
    fn trivial_path((maze, _start) in grid()) {
        let store = maze.to_facts();
        for c in open_cells(&maze) {
            prop_assert_eq!(search(&store, c, c), Some(vec![c]));
        }
    }
}

#[test]
fn sample_scenario_is_optimal() {
    let maze = Maze::sample();
    let store = maze.to_facts();
    let path = search(&store, maze.start(), maze.goal()).expect("path");
    let dist = bfs_distances(&MoveGraph::new(&store), maze.start());
    assert_eq!((path.len() - 1) as u32, dist[&maze.goal()]);
    assert_eq!(path.len() - 1, 9);
    for p in maze.obstacles() {
        assert!(!path.contains(&p));
    }
}

#[test]
fn enclosed_goal_has_no_path_from_anywhere() {
    let goal = Pos::new(2, 3);
    let maze = Maze::new(5, 6, Pos::new(0, 0), goal).with_obstacles(goal.neighbors_4());
    let store = maze.to_facts();
    for start in open_cells(&maze) {
        if start != goal {
            assert_eq!(search(&store, start, goal), None, "from {start}");
        }
    }
}

#[test]
fn concurrent_searches_share_one_store() {
    let store: FactStore = Maze::sample().to_facts();
    let expected = search(&store, Pos::new(0, 0), Pos::new(4, 5));
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| search(&store, Pos::new(0, 0), Pos::new(4, 5))))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}
