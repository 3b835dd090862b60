//! Text-generation provider seam.
//!
//! The crate does not talk to any service itself. Hosts plug in a
//! `TextGenerator` that wraps whatever client they use.

use thiserror::Error;

/// Errors a text-generation provider can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The service could not be reached.
    #[error("service unreachable: {0}")]
    Unreachable(String),

    /// Credentials were rejected.
    #[error("request not authorized")]
    Unauthorized,

    /// The service answered without any text.
    #[error("service returned no text")]
    EmptyResponse,

    /// Anything else the provider wants to surface.
    #[error("{0}")]
    Other(String),
}

/// A black-box prompt → prose service.
pub trait TextGenerator: Send + Sync {
    /// Generate text for `prompt`.
    fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}

impl<F> TextGenerator for F
where
    F: Fn(&str) -> Result<String, ProviderError> + Send + Sync,
{
    fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        self(prompt)
    }
}
