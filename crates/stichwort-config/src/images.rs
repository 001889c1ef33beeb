use std::env;

use serde::{Deserialize, Serialize};

/// Credentials for the optional image search. Missing values disable
/// the feature with a notice; they are never an error.
#[derive(Default, Serialize, Deserialize)]
pub struct ImageSearchConfig {
    pub api_key: Option<String>,
    pub cx: Option<String>,
}

impl ImageSearchConfig {
    pub fn new() -> Self {
        Self {
            api_key: env::var("GOOGLE_API_KEY").ok(),
            cx: env::var("GOOGLE_CX").ok(),
        }
    }

    pub fn available(&self) -> bool {
        self.api_key.is_some() && self.cx.is_some()
    }
}
