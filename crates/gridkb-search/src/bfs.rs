use std::collections::{BTreeMap, VecDeque};

use gridkb_core::Pos;

use crate::traits::Pather;

/// Breadth-first distance map from `source`.
///
/// Each step has cost 1. The result maps every reached cell, `source`
/// included at distance 0, to its step count.
pub fn bfs_distances<P: Pather>(pather: &P, source: Pos) -> BTreeMap<Pos, u32> {
    let mut dist = BTreeMap::new();
    let mut queue = VecDeque::new();
    let mut nbuf = Vec::new();

    dist.insert(source, 0);
    queue.push_back(source);

    while let Some(cp) = queue.pop_front() {
        let nd = dist[&cp] + 1;

        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            if dist.contains_key(&np) {
                continue;
            }
            dist.insert(np, nd);
            queue.push_back(np);
        }
    }

    dist
}

/// Whether `to` can be reached from `from` (trivially true when equal).
pub fn reachable<P: Pather>(pather: &P, from: Pos, to: Pos) -> bool {
    from == to || bfs_distances(pather, from).contains_key(&to)
}
