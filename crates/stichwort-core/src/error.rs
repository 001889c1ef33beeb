use url::Url;

/// Failures a single dictionary lookup can end in
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The word has no entry at this source. Expected and recoverable.
    #[error("Word not available at {origin}")]
    WordNotAvailable { origin: String },

    /// Every retry of the request timed out
    #[error("{url} still timing out after {attempts} attempts")]
    Timeout { url: String, attempts: u32 },

    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl LookupError {
    /// `WordNotAvailable` scoped to the host of `url`
    pub fn word_not_available(url: &str) -> Self {
        let origin = Url::parse(url)
            .ok()
            .and_then(|parsed| parsed.host_str().map(str::to_owned))
            .unwrap_or_else(|| url.to_owned());
        LookupError::WordNotAvailable { origin }
    }

    /// True for the failures a caller can answer with "try another source"
    pub fn is_not_available(&self) -> bool {
        matches!(self, LookupError::WordNotAvailable { .. })
    }
}
