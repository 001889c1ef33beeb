use std::fmt;
use std::str::FromStr;

/// Languages with at least one configured dictionary source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    German,
    English,
    French,
    Latin,
    Russian,
    Portuguese,
}

impl Language {
    /// ISO 639-1 code, also the ebook library subdirectory name
    pub fn code(self) -> &'static str {
        match self {
            Language::German => "de",
            Language::English => "en",
            Language::French => "fr",
            Language::Latin => "la",
            Language::Russian => "ru",
            Language::Portuguese => "pt",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "de" => Ok(Language::German),
            "en" => Ok(Language::English),
            "fr" => Ok(Language::French),
            "la" => Ok(Language::Latin),
            "ru" => Ok(Language::Russian),
            "pt" | "br" => Ok(Language::Portuguese),
            other => Err(format!("unsupported language code: {other}")),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A lookup request as the user issued it
#[derive(Debug, Clone)]
pub struct WordQuery {
    pub word: String,
    pub language: Language,
    /// Multi-token input was joined into a single phrase query
    pub phrase: bool,
}

impl WordQuery {
    pub fn new(word: impl Into<String>, language: Language) -> Self {
        Self {
            word: word.into(),
            language,
            phrase: false,
        }
    }

    /// Join multi-token input with underscores, the way wiki-style page
    /// names spell phrases
    pub fn phrase(tokens: &[String], language: Language) -> Self {
        Self {
            word: tokens.join("_"),
            language,
            phrase: true,
        }
    }
}

/// Phonetic transcription plus audio locator; either may be empty
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pronunciation {
    pub ipa: String,
    pub audio_url: String,
}

/// Normalized result of a successful lookup
#[derive(Debug, Clone)]
pub struct WordInfo {
    /// The queried word after source compatibility rewriting
    pub surface_word: String,
    /// Word whose entry the definition text actually describes
    pub root_word: String,
    pub ipa: String,
    pub root_ipa: String,
    pub pronunciation_url: String,
    pub root_pronunciation_url: String,
    /// Formatted definitions and examples; never empty
    pub info_text: String,
    /// True when the source led from an inflected form to its lemma
    pub redirected: bool,
    /// Markup of the resolved root page, kept for inflection extraction
    pub root_html: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_codes_round_trip() {
        for language in [
            Language::German,
            Language::English,
            Language::French,
            Language::Latin,
            Language::Russian,
            Language::Portuguese,
        ] {
            assert_eq!(language.code().parse::<Language>(), Ok(language));
        }
    }

    #[test]
    fn brazilian_alias_maps_to_portuguese() {
        assert_eq!("br".parse::<Language>(), Ok(Language::Portuguese));
    }

    #[test]
    fn phrase_query_joins_with_underscores() {
        let tokens = vec!["de".to_string(), "nouveau".to_string()];
        let query = WordQuery::phrase(&tokens, Language::French);
        assert_eq!(query.word, "de_nouveau");
        assert!(query.phrase);
    }
}
