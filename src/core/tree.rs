//! Arena-based game tree.
//!
//! Uses a flat `Vec<TreeNode>` with index-based references. Nodes are
//! allocated in creation order, so a node's `NodeId` is its pre-order
//! position and doubles as the key the step log refers to.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;
use thiserror::Error;

use super::id::{IdGenerator, NodeId};
use super::role::Role;

/// A node in the game tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Stable id, equal to the node's arena slot.
    pub id: NodeId,

    /// Label from the source text. For literal leaves this is the token.
    pub name: String,

    /// Static evaluation for literal leaves; the search-resolved value for
    /// everything else once the trace has been reconstructed.
    pub value: Option<i64>,

    /// Depth in tree (root = 0).
    pub depth: u16,

    /// Created from a bare integer token rather than a bracketed expression.
    pub is_literal: bool,

    /// Ordered children. Order is move order.
    pub children: SmallVec<[NodeId; 4]>,
}

impl TreeNode {
    /// A node with no children counts as a leaf, whatever its origin.
    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Side to move at this node.
    #[inline]
    #[must_use]
    pub fn role(&self) -> Role {
        Role::at_depth(self.depth as usize)
    }
}

/// Arena-based game tree.
///
/// The root is always the first allocated node. Parent/child links are
/// fixed at construction; afterwards only `value` fields change.
/// Serializes as the flat node list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameTree {
    /// All nodes, indexed by `NodeId`.
    nodes: Vec<TreeNode>,

    /// Id source for this tree only.
    ids: IdGenerator,
}

impl Serialize for GameTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.nodes.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GameTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let nodes = Vec::<TreeNode>::deserialize(deserializer)?;
        Self::from_nodes(nodes).map_err(D::Error::custom)
    }
}

/// A node list that does not describe a single pre-order tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeShapeError {
    #[error("node in slot {slot} carries id {id}")]
    MisplacedId { slot: usize, id: NodeId },

    #[error("{parent} links to missing child {child}")]
    DanglingChild { parent: NodeId, child: NodeId },

    #[error("{parent} links to {child}, which does not come after it")]
    ChildBeforeParent { parent: NodeId, child: NodeId },

    #[error("{child} has more than one parent")]
    SharedChild { child: NodeId },

    #[error("{node} is not reachable from the root")]
    Orphan { node: NodeId },

    #[error("{node} has depth {depth}, expected {expected}")]
    WrongDepth {
        node: NodeId,
        depth: u16,
        expected: u16,
    },

    #[error("tree has more nodes than ids")]
    TooLarge,
}

impl GameTree {
    /// Create an empty tree with its own id counter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a tree from a flat node list, checking the arena invariants:
    /// ids match slots, every non-root node has exactly one parent that
    /// precedes it, and depths increase by one per level.
    pub fn from_nodes(nodes: Vec<TreeNode>) -> Result<Self, TreeShapeError> {
        let count = u32::try_from(nodes.len()).map_err(|_| TreeShapeError::TooLarge)?;
        let mut has_parent = vec![false; nodes.len()];

        for (slot, node) in nodes.iter().enumerate() {
            if node.id.index() != slot {
                return Err(TreeShapeError::MisplacedId { slot, id: node.id });
            }
            if slot == 0 && node.depth != 0 {
                return Err(TreeShapeError::WrongDepth {
                    node: node.id,
                    depth: node.depth,
                    expected: 0,
                });
            }

            for &child in &node.children {
                let Some(target) = nodes.get(child.index()) else {
                    return Err(TreeShapeError::DanglingChild {
                        parent: node.id,
                        child,
                    });
                };
                if child <= node.id {
                    return Err(TreeShapeError::ChildBeforeParent {
                        parent: node.id,
                        child,
                    });
                }
                if std::mem::replace(&mut has_parent[child.index()], true) {
                    return Err(TreeShapeError::SharedChild { child });
                }
                let expected = node.depth.saturating_add(1);
                if target.depth != expected {
                    return Err(TreeShapeError::WrongDepth {
                        node: child,
                        depth: target.depth,
                        expected,
                    });
                }
            }
        }

        if let Some(slot) = has_parent.iter().skip(1).position(|&linked| !linked) {
            return Err(TreeShapeError::Orphan {
                node: NodeId::new(slot as u32 + 1),
            });
        }

        Ok(Self {
            nodes,
            ids: IdGenerator::starting_at(count),
        })
    }

    /// Allocate a node, returning its ID. Links are added with `add_child`.
    pub fn alloc(
        &mut self,
        name: impl Into<String>,
        value: Option<i64>,
        depth: u16,
        is_literal: bool,
    ) -> NodeId {
        let id = self.ids.next_id();
        debug_assert_eq!(id.index(), self.nodes.len());
        self.nodes.push(TreeNode {
            id,
            name: name.into(),
            value,
            depth,
            is_literal,
            children: SmallVec::new(),
        });
        id
    }

    /// Append `child` to `parent`'s ordered child list.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.index()].children.push(child);
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &TreeNode {
        self.get(self.root())
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.index()]
    }

    /// Get a node by ID, if it exists.
    #[must_use]
    pub fn try_get(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut TreeNode {
        &mut self.nodes[id.index()]
    }

    /// Ordered children of a node.
    #[inline]
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.index()].children
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes in id (pre-order) order.
    pub fn iter(&self) -> std::slice::Iter<'_, TreeNode> {
        self.nodes.iter()
    }

    /// Iterate mutably over all nodes.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut TreeNode> {
        self.nodes.iter_mut()
    }

    /// `id` and every node below it, in pre-order.
    #[must_use]
    pub fn subtree(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.children(current).iter().rev().copied());
        }
        out
    }

    /// Number of nodes in the subtree rooted at `id`, including `id`.
    #[must_use]
    pub fn subtree_size(&self, id: NodeId) -> usize {
        self.subtree(id).len()
    }

    /// Render the tree back to bracketed text.
    ///
    /// Literal leaves render as their value; bracketed nodes keep their
    /// brackets even without children, so the output parses back to the
    /// same structure.
    #[must_use]
    pub fn to_sexpr(&self) -> String {
        enum Emit {
            Node(NodeId),
            Space,
            Close,
        }

        let mut out = String::new();
        if self.is_empty() {
            return out;
        }

        let mut stack = vec![Emit::Node(self.root())];
        while let Some(item) = stack.pop() {
            let id = match item {
                Emit::Node(id) => id,
                Emit::Space => {
                    out.push(' ');
                    continue;
                }
                Emit::Close => {
                    out.push(')');
                    continue;
                }
            };

            let node = self.get(id);
            if node.is_literal {
                match node.value {
                    Some(v) => out.push_str(&v.to_string()),
                    None => out.push_str(&node.name),
                }
                continue;
            }

            out.push('(');
            out.push_str(&node.name);
            stack.push(Emit::Close);
            for &child in node.children.iter().rev() {
                stack.push(Emit::Node(child));
                stack.push(Emit::Space);
            }
        }
        out
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let max_depth = self.nodes.iter().map(|n| n.depth).max().unwrap_or(0);
        let leaf_count = self.nodes.iter().filter(|n| n.is_leaf()).count();
        let total_edges: usize = self.nodes.iter().map(|n| n.children.len()).sum();

        TreeStats {
            node_count: self.nodes.len(),
            leaf_count,
            max_depth,
            total_edges,
        }
    }
}

/// Statistics about the shape of a game tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Number of nodes without children.
    pub leaf_count: usize,

    /// Maximum depth (root = 0).
    pub max_depth: u16,

    /// Total number of parent/child links.
    pub total_edges: usize,
}

impl TreeStats {
    /// Average number of children per internal node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        let internal = self.node_count - self.leaf_count;
        if internal == 0 {
            0.0
        } else {
            self.total_edges as f64 / internal as f64
        }
    }
}
