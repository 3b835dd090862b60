//! Prompt text sent to the provider for one step.

use crate::core::Bound;
use crate::search::VisualizationStep;

const INSTRUCTIONS: &str = "\
1. Start by directly explaining what is happening in the current step based on the message log.
2. Explain the reasoning behind this action. For a VISIT, why the node is explored; for an UPDATE, why alpha or beta changes; for a PRUNE, exactly why the condition β ≤ α holds.
3. Briefly predict the algorithm's next step.
4. Keep the tone encouraging and educational. Use Markdown for emphasis and `code` for values and nodes. Do not use headers.";

/// Build the explanation prompt for `step` of a run over `tree_text`.
#[must_use]
pub fn build_prompt(tree_text: &str, step: &VisualizationStep) -> String {
    format!(
        "You are an expert computer science professor explaining the Minimax algorithm with Alpha-Beta pruning.\n\
         A student is visualizing the algorithm on a specific tree and is at a particular step.\n\
         Provide a clear, concise explanation of the current step.\n\
         \n\
         Tree structure (S-expression):\n\
         ```\n\
         {tree}\n\
         ```\n\
         \n\
         Current algorithm state:\n\
         - Step type: {kind}\n\
         - Current alpha (α): {alpha}\n\
         - Current beta (β): {beta}\n\
         - Message log: \"{message}\"\n\
         \n\
         Instructions:\n\
         {INSTRUCTIONS}\n",
        tree = tree_text.trim(),
        kind = step.kind,
        alpha = bound_text(step.alpha),
        beta = bound_text(step.beta),
        message = step.message,
    )
}

fn bound_text(bound: Bound) -> String {
    bound.to_string()
}
