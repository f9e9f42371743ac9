use std::collections::HashMap;

use gridkb_core::Pos;
use gridkb_facts::{Fact, FactStore, relation};

use crate::distance::manhattan;
use crate::traits::{AstarPather, Pather};

/// The `Move` relation of a [`FactStore`] viewed as a unit-cost graph.
///
/// Neighbours of a cell are the targets of `Move` facts whose source is that
/// cell, in insertion order. Adjacency is never re-derived from `Cell` or
/// `Obstacle` facts.
///
/// The relation is scanned once, in [`MoveGraph::new`]; lookups afterwards
/// only touch the source cell's own targets.
#[derive(Debug, Clone)]
pub struct MoveGraph<'a> {
    store: &'a FactStore,
    targets: HashMap<Pos, Vec<Pos>>,
    moves: usize,
}

impl<'a> MoveGraph<'a> {
    pub fn new(store: &'a FactStore) -> Self {
        let mut targets: HashMap<Pos, Vec<Pos>> = HashMap::new();
        let mut moves = 0;
        // Malformed (non 4-ary) Move facts are skipped.
        for (from, to) in store.fetch(relation::MOVE).iter().filter_map(Fact::as_step) {
            targets.entry(from).or_default().push(to);
            moves += 1;
        }
        Self {
            store,
            targets,
            moves,
        }
    }

    /// The underlying store.
    #[inline]
    pub fn store(&self) -> &'a FactStore {
        self.store
    }

    /// Number of well-formed `Move` facts indexed.
    #[inline]
    pub fn move_count(&self) -> usize {
        self.moves
    }

    /// Targets of `p`'s outgoing moves, in insertion order.
    #[inline]
    pub fn targets(&self, p: Pos) -> &[Pos] {
        self.targets.get(&p).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Pather for MoveGraph<'_> {
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
        buf.extend_from_slice(self.targets(p));
    }
}

impl AstarPather for MoveGraph<'_> {
    #[inline]
    fn estimate(&self, from: Pos, to: Pos) -> u32 {
        manhattan(from, to)
    }
}
