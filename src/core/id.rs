//! Node identifiers and the per-parse id source.

use serde::{Deserialize, Serialize};

/// Index into the `GameTree` node arena.
///
/// Ids are handed out in creation order, so a parent's id is always smaller
/// than the ids of its descendants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Arena slot for this id.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

/// Sequential id source owned by a single parse.
///
/// Every parse starts its own generator at zero, so identical input always
/// yields identical ids and two parses never share counter state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdGenerator {
    next: u32,
}

impl IdGenerator {
    /// Create a generator starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator whose next id is `next`.
    #[must_use]
    pub fn starting_at(next: u32) -> Self {
        Self { next }
    }

    /// Hand out the next id.
    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId::new(self.next);
        self.next += 1;
        id
    }

    /// Number of ids issued so far.
    #[must_use]
    pub fn issued(&self) -> u32 {
        self.next
    }
}
