//! Web server settings.

use serde::{Deserialize, Serialize};

fn default_bind() -> String {
    String::from("127.0.0.1:8501")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Listen address for the page server.
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}
