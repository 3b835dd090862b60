//! Turning a step log into final values, a principal variation and
//! replayable frames.
//!
//! - `reconstruct`: writes resolved values into the tree, computes the
//!   optimal path and appends the FINAL step.
//! - `StepCursor`: the caller's position in the log.
//! - `ReplayFrame`: highlighted node, pruned nodes and path at a position.

pub mod cursor;
pub mod frame;
pub mod reconstruct;

pub use cursor::StepCursor;
pub use frame::ReplayFrame;
pub use reconstruct::{assign_values, optimal_path, reconstruct};
