//! OpenRouter connection settings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Chat completions endpoint.
pub const DEFAULT_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Model every request is routed to.
pub const DEFAULT_MODEL: &str = "mistralai/mistral-small-3.2-24b-instruct:free";

/// Sent as `X-Title` for OpenRouter attribution.
pub const DEFAULT_APP_TITLE: &str = "AI Startup Idea Generator & Market Validator";

fn default_api_url() -> String {
    String::from(DEFAULT_API_URL)
}

fn default_model() -> String {
    String::from(DEFAULT_MODEL)
}

fn default_app_title() -> String {
    String::from(DEFAULT_APP_TITLE)
}

#[derive(Clone, Deserialize, Serialize)]
pub struct OpenRouterConfig {
    /// Bearer credential. Usually supplied through `OPENROUTER_API_KEY`.
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_app_title")]
    pub app_title: String,
}

impl Default for OpenRouterConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: default_api_url(),
            model: default_model(),
            app_title: default_app_title(),
        }
    }
}

impl OpenRouterConfig {
    /// A whitespace-only key counts as missing.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

// Keeps the credential out of logs and panic messages.
impl fmt::Debug for OpenRouterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenRouterConfig")
            .field("api_key", &if self.is_configured() { "<redacted>" } else { "<unset>" })
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("app_title", &self.app_title)
            .finish()
    }
}
