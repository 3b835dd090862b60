//! # minimax-trace
//!
//! Minimax with alpha-beta pruning, instrumented to emit a replayable trace.
//!
//! A game tree is written as bracketed text, `(A (B 3 5) (C 6 9))`: a name
//! followed by children for internal nodes, a bare integer for a leaf. The
//! root maximizes and roles alternate by depth.
//!
//! ## Pipeline
//!
//! 1. `parser` turns text into an arena `GameTree` with pre-order ids.
//! 2. `search` runs alpha-beta and records every VISIT, LEAF, UPDATE and
//!    PRUNE event as a `VisualizationStep`.
//! 3. `trace` writes the resolved values back into the tree, derives the
//!    optimal path and appends the FINAL step. `StepCursor` and
//!    `ReplayFrame` let a front end step through the log.
//!
//! `pipeline::run` does all three.
//!
//! ```
//! let vis = minimax_trace::run("(A (B 3 5) (C 6 9))").unwrap();
//! assert_eq!(vis.final_value, 6);
//! ```
//!
//! ## Modules
//!
//! - `core`: node ids, roles, bounds, the tree arena, seeded RNG
//! - `parser`: bracketed-text parser and its errors
//! - `search`: alpha-beta engine, minimax oracle, step types, statistics
//! - `trace`: value reconstruction, optimal path, replay cursor and frames
//! - `explain`: prompt building and the pluggable explanation gateway
//! - `generate`: random complete binary trees
//! - `config`: combined settings, loadable from JSON
//! - `pipeline`: end-to-end run

pub mod config;
pub mod core;
pub mod explain;
pub mod generate;
pub mod parser;
pub mod pipeline;
pub mod search;
pub mod trace;

pub use crate::config::{ConfigError, VisualizerConfig};
pub use crate::core::{Bound, GameTree, NodeId, Role, TreeNode, TreeRng};
pub use crate::explain::{
    ExplainConfig, ExplanationGateway, ExplanationSlot, ProviderError, TextGenerator,
};
pub use crate::generate::{balanced_tree_text, random_leaves, GeneratorConfig};
pub use crate::parser::{parse, parse_with, FormatError, ParseConfig};
pub use crate::pipeline::{run, run_with, Visualization};
pub use crate::search::{
    search, search_with, SearchConfig, SearchOutcome, SearchStats, StepKind, VisualizationStep,
};
pub use crate::trace::{reconstruct, ReplayFrame, StepCursor};
