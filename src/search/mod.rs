//! Alpha-beta search over a `GameTree`.
//!
//! ## Overview
//!
//! `search` runs minimax with alpha-beta pruning and returns the root value
//! together with a step log: one entry per node visit, leaf evaluation,
//! bound update and pruning decision. The log is detailed enough to replay
//! the whole run forwards or backwards without searching again.
//!
//! ## Usage
//!
//! ```rust
//! use minimax_trace::parser::parse;
//! use minimax_trace::search::{search, StepKind};
//!
//! let tree = parse("(A (B 3 5) (C 6))").unwrap();
//! let outcome = search(&tree);
//!
//! assert_eq!(outcome.value, 6);
//! assert_eq!(outcome.steps[0].kind, StepKind::Visit);
//! ```
//!
//! `minimax::evaluate` gives the unpruned answer for comparison.

pub mod config;
pub mod engine;
pub mod minimax;
pub mod stats;
pub mod step;

// Re-export main types
pub use config::SearchConfig;
pub use engine::{search, search_with, SearchOutcome};
pub use stats::SearchStats;
pub use step::{PrunedIds, StepKind, VisualizationStep};
