//! End-to-end run: text in, replayable visualization out.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::config::VisualizerConfig;
use crate::core::{GameTree, NodeId};
use crate::parser::{parse_with, ParseResult};
use crate::search::{search_with, SearchStats, StepKind, VisualizationStep};
use crate::trace::{reconstruct, ReplayFrame, StepCursor};

/// A finished run: the valued tree and its complete step log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visualization {
    /// Tree with every reachable node valued.
    pub tree: GameTree,

    /// Step log, ending in exactly one FINAL step.
    pub steps: Vec<VisualizationStep>,

    /// Value returned by the root search call.
    pub final_value: i64,
}

impl Visualization {
    /// Principal variation carried by the FINAL step.
    #[must_use]
    pub fn final_path(&self) -> &[NodeId] {
        self.steps
            .iter()
            .rev()
            .find(|s| s.kind == StepKind::Final)
            .and_then(|s| s.final_path.as_deref())
            .unwrap_or(&[])
    }

    /// Replay view at step `index`.
    #[must_use]
    pub fn frame(&self, index: usize) -> Option<ReplayFrame<'_>> {
        ReplayFrame::at(&self.tree, &self.steps, index)
    }

    /// A cursor positioned on the first step.
    #[must_use]
    pub fn cursor(&self) -> StepCursor {
        StepCursor::new(self.steps.len())
    }

    #[must_use]
    pub fn stats(&self) -> SearchStats {
        SearchStats::from_steps(&self.tree, &self.steps)
    }

    /// Serialize as pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Parse, search and reconstruct with default settings.
pub fn run(text: &str) -> ParseResult<Visualization> {
    run_with(text, &VisualizerConfig::default())
}

/// Parse, search and reconstruct.
///
/// Only parsing can fail; the input is rejected before any search starts.
#[instrument(skip_all, fields(len = text.len()))]
pub fn run_with(text: &str, config: &VisualizerConfig) -> ParseResult<Visualization> {
    let mut tree = parse_with(text, &config.parse)?;
    let outcome = search_with(&tree, &config.search);

    let mut steps = outcome.steps;
    let path = reconstruct(&mut tree, &mut steps);
    info!(
        value = outcome.value,
        steps = steps.len(),
        path_len = path.len(),
        "visualization ready"
    );

    Ok(Visualization {
        tree,
        steps,
        final_value: outcome.value,
    })
}
