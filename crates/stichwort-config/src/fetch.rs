use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct FetchConfig {
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
    /// How often a timed-out request is retried before giving up
    pub max_attempts: u32,
    /// Hop bound for root-redirect chains
    pub max_redirects: u32,
}

impl FetchConfig {
    pub fn new() -> Self {
        let timeout_ms = env::var("STICHWORT_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(800);

        let max_attempts = env::var("STICHWORT_FETCH_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3);

        let max_redirects = env::var("STICHWORT_MAX_REDIRECTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Self {
            timeout_ms,
            max_attempts,
            max_redirects,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self::new()
    }
}
