//! Language and command mapping onto concrete adapters.

use stichwort_core::source::DictionarySource;
use stichwort_core::word::Language;

use crate::{Dicio, DictionaryCom, Duden, Dwds, WiktionaryDe, WiktionaryEn, WiktionaryFr, WiktionaryLa};

/// A secondary source was requested that does not exist or does not
/// serve the current language
#[derive(Debug, thiserror::Error)]
pub enum SelectError {
    #[error("unknown source: {0}")]
    Unknown(String),

    #[error("Change your language to {required} to use {source_name}")]
    LanguageMismatch {
        source_name: &'static str,
        required: Language,
    },
}

/// The default adapter for a language
pub fn primary(language: Language) -> Box<dyn DictionarySource> {
    match language {
        Language::German => Box::new(WiktionaryDe::new()),
        Language::English => Box::new(WiktionaryEn::english()),
        Language::French => Box::new(WiktionaryFr::new()),
        Language::Latin => Box::new(WiktionaryLa::new()),
        Language::Russian => Box::new(WiktionaryEn::russian()),
        Language::Portuguese => Box::new(Dicio::new()),
    }
}

/// A command-selected alternate source, gated on its language
pub fn secondary(
    name: &str,
    language: Language,
) -> Result<Box<dyn DictionarySource>, SelectError> {
    match name {
        "dwds" if language == Language::German => Ok(Box::new(Dwds::new())),
        "dwds" => Err(mismatch("dwds", Language::German)),
        "duden" if language == Language::German => Ok(Box::new(Duden::new())),
        "duden" => Err(mismatch("duden", Language::German)),
        "dict" if language == Language::English => Ok(Box::new(DictionaryCom::new())),
        "dict" => Err(mismatch("dict", Language::English)),
        other => Err(SelectError::Unknown(other.to_owned())),
    }
}

/// Primary adapter, or the named secondary one when a name is given
pub fn select(
    name: Option<&str>,
    language: Language,
) -> Result<Box<dyn DictionarySource>, SelectError> {
    match name {
        Some(name) => secondary(name, language),
        None => Ok(primary(language)),
    }
}

fn mismatch(source_name: &'static str, required: Language) -> SelectError {
    SelectError::LanguageMismatch {
        source_name,
        required,
    }
}
