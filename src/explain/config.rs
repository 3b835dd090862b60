//! Explanation gateway configuration.

use serde::{Deserialize, Serialize};

/// Explanation gateway configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplainConfig {
    /// Model identifier handed to the provider factory.
    pub model: String,

    /// Environment variable holding the API key.
    /// An unset or empty variable leaves the gateway unconfigured.
    pub api_key_env: String,
}

impl Default for ExplainConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            api_key_env: "API_KEY".to_string(),
        }
    }
}

impl ExplainConfig {
    /// Create a new config with a custom model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Create a new config reading the key from a different variable.
    pub fn with_api_key_env(mut self, var: impl Into<String>) -> Self {
        self.api_key_env = var.into();
        self
    }

    /// The API key, if the configured variable is set and non-empty.
    #[must_use]
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}
