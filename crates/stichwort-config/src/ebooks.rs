use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct EbookConfig {
    /// Corpus root; plain-text books live in per-language
    /// subdirectories underneath it
    pub dir: PathBuf,
}

impl EbookConfig {
    pub fn new() -> Self {
        let dir = env::var("STICHWORT_EBOOK_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("ebooks"));

        Self { dir }
    }
}

impl Default for EbookConfig {
    fn default() -> Self {
        Self::new()
    }
}
