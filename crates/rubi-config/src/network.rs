use std::env;

use serde::{Deserialize, Serialize};

#[derive(Default, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Per-request timeout for provider lookups
    pub timeout_seconds: u64,
}

impl NetworkConfig {
    pub fn new() -> Self {
        let timeout_seconds = env::var("RUBI_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30); // 30 seconds default

        Self { timeout_seconds }
    }
}
