use std::fmt;

use gridkb_core::Pos;

/// Relation names used to describe a grid. Names are case-sensitive.
pub mod relation {
    /// `Cell(row, col)`: a position exists.
    pub const CELL: &str = "Cell";
    /// `Obstacle(row, col)`: a position is blocked.
    pub const OBSTACLE: &str = "Obstacle";
    /// `Start(row, col)`: the designated start.
    pub const START: &str = "Start";
    /// `Goal(row, col)`: the designated goal.
    pub const GOAL: &str = "Goal";
    /// `Move(row, col, row2, col2)`: a directed legal step.
    pub const MOVE: &str = "Move";
}

/// A ground relation instance: a relation name and its arguments.
///
/// Arguments are always concrete integers, so two facts match exactly when
/// they are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fact {
    relation: String,
    args: Vec<i32>,
}

impl Fact {
    /// Create a fact from a relation name and its arguments.
    pub fn new(relation: impl Into<String>, args: impl Into<Vec<i32>>) -> Self {
        Self {
            relation: relation.into(),
            args: args.into(),
        }
    }

    pub fn cell(p: Pos) -> Self {
        Self::unary(relation::CELL, p)
    }

    pub fn obstacle(p: Pos) -> Self {
        Self::unary(relation::OBSTACLE, p)
    }

    pub fn start(p: Pos) -> Self {
        Self::unary(relation::START, p)
    }

    pub fn goal(p: Pos) -> Self {
        Self::unary(relation::GOAL, p)
    }

    /// A `Move` fact from `from` to `to`.
    pub fn step(from: Pos, to: Pos) -> Self {
        Self::new(relation::MOVE, [from.row, from.col, to.row, to.col])
    }

    fn unary(relation: &str, p: Pos) -> Self {
        Self::new(relation, [p.row, p.col])
    }

    /// The relation name.
    #[inline]
    pub fn relation(&self) -> &str {
        &self.relation
    }

    /// The argument list.
    #[inline]
    pub fn args(&self) -> &[i32] {
        &self.args
    }

    /// Number of arguments.
    #[inline]
    pub fn arity(&self) -> usize {
        self.args.len()
    }

    /// Whether the leading arguments equal `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &[i32]) -> bool {
        self.args.starts_with(prefix)
    }

    /// Decode a 2-ary fact as a position.
    pub fn as_pos(&self) -> Option<Pos> {
        match *self.args.as_slice() {
            [row, col] => Some(Pos::new(row, col)),
            _ => None,
        }
    }

    /// Decode a 4-ary fact as a `(from, to)` step.
    pub fn as_step(&self) -> Option<(Pos, Pos)> {
        match *self.args.as_slice() {
            [r0, c0, r1, c1] => Some((Pos::new(r0, c0), Pos::new(r1, c1))),
            _ => None,
        }
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.relation)?;
        for (i, a) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{a}")?;
        }
        f.write_str(")")
    }
}
