//! Natural-language explanations of individual steps.
//!
//! The gateway turns a step into a prompt, hands it to a pluggable
//! [`TextGenerator`] and always returns displayable text.

pub mod config;
pub mod gateway;
pub mod prompt;
pub mod provider;
pub mod slot;

pub use config::ExplainConfig;
pub use gateway::ExplanationGateway;
pub use prompt::build_prompt;
pub use provider::{ProviderError, TextGenerator};
pub use slot::{ExplanationSlot, Ticket};
