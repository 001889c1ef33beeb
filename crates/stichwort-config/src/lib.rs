//! Environment-driven configuration.

use std::env;

use serde::{Deserialize, Serialize};

use self::ebooks::EbookConfig;
use self::fetch::FetchConfig;
use self::images::ImageSearchConfig;

pub mod ebooks;
pub mod fetch;
pub mod images;

#[derive(Serialize, Deserialize)]
pub struct Config {
    /// Language code of the current session
    pub language: String,
    pub fetch: FetchConfig,
    pub ebooks: EbookConfig,
    pub images: ImageSearchConfig,
}

impl Config {
    pub fn new() -> Self {
        let language = env::var("STICHWORT_LANG").unwrap_or_else(|_| "de".to_string());

        Config {
            language,
            fetch: FetchConfig::new(),
            ebooks: EbookConfig::new(),
            images: ImageSearchConfig::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
