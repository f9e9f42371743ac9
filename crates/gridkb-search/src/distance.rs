use gridkb_core::Pos;

/// Manhattan (L1) distance between two cells, saturating at `u32::MAX`.
#[inline]
pub fn manhattan(a: Pos, b: Pos) -> u32 {
    a.row.abs_diff(b.row).saturating_add(a.col.abs_diff(b.col))
}
