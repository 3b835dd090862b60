//! Core types: node ids, roles, bounds, the game tree arena and RNG.
//!
//! Everything else in the crate is expressed in terms of these. The tree is
//! built once by the parser, and afterwards only node values change.

pub mod bound;
pub mod id;
pub mod rng;
pub mod role;
pub mod tree;

pub use bound::Bound;
pub use id::{IdGenerator, NodeId};
pub use rng::TreeRng;
pub use role::Role;
pub use tree::{GameTree, TreeNode, TreeShapeError, TreeStats};
