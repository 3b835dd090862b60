//! Step cursor for forward/backward replay.

use serde::{Deserialize, Serialize};

use crate::search::VisualizationStep;

/// Index into a step log, kept inside `[0, len)`.
///
/// The only mutable state a caller holds over an immutable log. Moves that
/// would leave the range are ignored and reported as `false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepCursor {
    index: usize,
    len: usize,
}

impl StepCursor {
    /// Cursor at the first step of a log with `len` steps.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Advance one step.
    pub fn forward(&mut self) -> bool {
        self.seek(self.index + 1)
    }

    /// Go back one step.
    pub fn back(&mut self) -> bool {
        match self.index.checked_sub(1) {
            Some(i) => self.seek(i),
            None => false,
        }
    }

    /// Jump to `index` if it is in range.
    pub fn seek(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }

    /// Back to the first step.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Jump to the last step.
    pub fn seek_end(&mut self) {
        self.index = self.len.saturating_sub(1);
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.len
    }

    /// Fraction of the log replayed, `(index + 1) / len`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.len == 0 {
            0.0
        } else {
            (self.index + 1) as f64 / self.len as f64
        }
    }

    /// Step under the cursor.
    #[must_use]
    pub fn current<'a>(&self, steps: &'a [VisualizationStep]) -> Option<&'a VisualizationStep> {
        steps.get(self.index)
    }
}
