use std::cmp::Ordering;

use gridkb_core::Pos;

/// Parent link marking the start of a trail.
pub(crate) const ROOT: usize = usize::MAX;

/// One cell on a discovered path. A search node's path-so-far is the chain of
/// parents back to [`ROOT`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct Step {
    pub(crate) pos: Pos,
    pub(crate) parent: usize,
}

/// A frontier entry.
///
/// `trail` indexes the node's last [`Step`]; steps are only ever appended,
/// so it also records push order.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Frontier {
    pub(crate) f: u32,
    pub(crate) g: u32,
    pub(crate) pos: Pos,
    pub(crate) trail: usize,
}

impl Frontier {
    #[inline]
    fn key(&self) -> (u32, u32, Pos, usize) {
        (self.f, self.g, self.pos, self.trail)
    }
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Frontier {}

/// Lowest `f` first, then lowest `g`, then the row-major smaller cell, then
/// the earlier push. Reversed so `BinaryHeap` (a max-heap) pops the minimum.
impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key())
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
