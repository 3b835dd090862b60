//! The explanation boundary: one step in, prose out, never an error.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, error, warn};

use super::config::ExplainConfig;
use super::prompt::build_prompt;
use super::provider::TextGenerator;
use crate::search::VisualizationStep;

/// Returned when no provider is configured.
pub const UNAVAILABLE: &str = "Explanation unavailable: API key is not configured.";

/// Returned when the provider answers with nothing.
pub const EMPTY_EXPLANATION: &str = "No explanation was returned.";

/// Asks a text provider to narrate a single step.
///
/// Every failure is folded into the returned string, so callers can display
/// whatever comes back.
#[derive(Clone, Default)]
pub struct ExplanationGateway {
    generator: Option<Arc<dyn TextGenerator>>,
}

impl fmt::Debug for ExplanationGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExplanationGateway")
            .field("configured", &self.is_configured())
            .finish()
    }
}

impl ExplanationGateway {
    /// A gateway with no provider. Every call returns [`UNAVAILABLE`].
    #[must_use]
    pub fn unconfigured() -> Self {
        Self { generator: None }
    }

    /// A gateway backed by `generator`.
    pub fn with_generator(generator: impl TextGenerator + 'static) -> Self {
        Self {
            generator: Some(Arc::new(generator)),
        }
    }

    /// Build a gateway from the environment.
    ///
    /// `factory` receives the model name and API key and returns the
    /// provider. A missing key yields an unconfigured gateway.
    pub fn from_env<G, F>(config: &ExplainConfig, factory: F) -> Self
    where
        G: TextGenerator + 'static,
        F: FnOnce(&str, String) -> G,
    {
        match config.api_key() {
            Some(key) => Self::with_generator(factory(&config.model, key)),
            None => {
                warn!(var = %config.api_key_env, "API key not set, explanations disabled");
                Self::unconfigured()
            }
        }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.generator.is_some()
    }

    /// Explain `step` of a run over `tree_text`.
    #[must_use]
    pub fn explain(&self, tree_text: &str, step: &VisualizationStep) -> String {
        let Some(generator) = &self.generator else {
            return UNAVAILABLE.to_string();
        };

        let prompt = build_prompt(tree_text, step);
        debug!(kind = %step.kind, node = %step.node_id, "requesting explanation");

        match generator.generate(&prompt) {
            Ok(text) if text.trim().is_empty() => {
                warn!(node = %step.node_id, "provider returned empty explanation");
                EMPTY_EXPLANATION.to_string()
            }
            Ok(text) => text,
            Err(err) => {
                error!(error = %err, "explanation request failed");
                format!("Failed to get explanation: {err}")
            }
        }
    }
}
