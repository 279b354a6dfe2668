//! Startup idea records.

use serde::{Deserialize, Serialize};

/// A single startup concept produced by the idea prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartupIdea {
    pub name: String,
    pub description: String,
    pub value_proposition: String,
    pub market_size: String,
    pub revenue_model: String,
    /// Ordered as returned; the prompt asks for 3-4 entries.
    pub key_features: Vec<String>,
    pub competitive_advantage: String,
}

/// Top-level object the idea prompt asks the model to return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaBatch {
    pub ideas: Vec<StartupIdea>,
}
