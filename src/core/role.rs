//! Maximizing / minimizing roles.

use serde::{Deserialize, Serialize};

/// Which side moves at a node.
///
/// The root is always `Max`; roles alternate strictly with depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Max,
    Min,
}

impl Role {
    /// Role of a node at the given depth (root = 0).
    #[inline]
    #[must_use]
    pub const fn at_depth(depth: usize) -> Self {
        if depth % 2 == 0 {
            Role::Max
        } else {
            Role::Min
        }
    }

    /// The other side.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Role::Max => Role::Min,
            Role::Min => Role::Max,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_max(self) -> bool {
        matches!(self, Role::Max)
    }

    /// Fold `value` into a running best, where `None` stands for the
    /// role's starting infinity.
    #[must_use]
    pub fn fold(self, best: Option<i64>, value: i64) -> i64 {
        match (self, best) {
            (_, None) => value,
            (Role::Max, Some(b)) => b.max(value),
            (Role::Min, Some(b)) => b.min(value),
        }
    }

    /// Whether `candidate` is strictly better than `incumbent` for this role.
    #[inline]
    #[must_use]
    pub fn prefers(self, candidate: i64, incumbent: i64) -> bool {
        match self {
            Role::Max => candidate > incumbent,
            Role::Min => candidate < incumbent,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Max => write!(f, "MAX"),
            Role::Min => write!(f, "MIN"),
        }
    }
}
