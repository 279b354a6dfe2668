//! Completion request parameters.

use serde::{Deserialize, Serialize};

const fn default_temperature() -> f32 {
    0.7
}

const fn default_idea_max_tokens() -> u32 {
    2000
}

const fn default_validation_max_tokens() -> u32 {
    3000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GatewayConfig {
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// `max_tokens` for the idea prompt.
    #[serde(default = "default_idea_max_tokens")]
    pub idea_max_tokens: u32,

    /// `max_tokens` for the validation prompt.
    #[serde(default = "default_validation_max_tokens")]
    pub validation_max_tokens: u32,

    /// Per-request timeout. Unset leaves reqwest's default in place.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            idea_max_tokens: default_idea_max_tokens(),
            validation_max_tokens: default_validation_max_tokens(),
            request_timeout_secs: None,
        }
    }
}
