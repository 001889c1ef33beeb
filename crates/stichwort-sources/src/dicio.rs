//! The Dicio JSON API, the primary Portuguese source.

use serde::Deserialize;
use stichwort_core::error::LookupError;
use stichwort_core::page::{PageKind, SourcePage};
use stichwort_core::source::{DictionarySource, SourceProfile};
use stichwort_core::word::Pronunciation;

const PROFILE: SourceProfile = SourceProfile {
    name: "dicio",
    base_url: "https://dicio-api-ten.vercel.app/v2/",
    query_suffix: "",
    kind: PageKind::Json,
    resolves_root: false,
};

/// One part-of-speech entry in the API response
#[derive(Debug, Deserialize)]
struct DicioEntry {
    #[serde(rename = "partOfSpeech")]
    part_of_speech: String,
    #[serde(default)]
    meanings: Vec<String>,
}

#[derive(Debug, Default)]
pub struct Dicio;

impl Dicio {
    pub fn new() -> Self {
        Self
    }
}

impl DictionarySource for Dicio {
    fn profile(&self) -> &SourceProfile {
        &PROFILE
    }

    fn info(
        &self,
        page: &SourcePage,
        _root_word: &str,
        _pron: &Pronunciation,
    ) -> Result<String, LookupError> {
        let value = page
            .json()
            .ok_or_else(|| self.profile().word_not_available())?;
        // the API answers missing words with 200 and an error object
        if value.get("error").is_some() {
            return Err(self.profile().word_not_available());
        }
        let entries: Vec<DicioEntry> = serde_json::from_value(value.clone())
            .map_err(|_| self.profile().word_not_available())?;

        let mut out = String::new();
        for entry in entries {
            out.push_str(&entry.part_of_speech.to_uppercase());
            out.push('\n');
            for meaning in entry.meanings {
                out.push_str(&meaning);
                out.push('\n');
            }
            out.push('\n');
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(body: &str) -> SourcePage {
        SourcePage::decode(PageKind::Json, body).unwrap()
    }

    #[test]
    fn entries_render_grouped_by_part_of_speech() {
        let body = r#"[
            {"partOfSpeech": "substantivo feminino", "meanings": [
                "Esfera; objeto redondo.",
                "Bola de futebol."
            ]},
            {"partOfSpeech": "interjeição", "meanings": ["Exprime surpresa."]}
        ]"#;
        let source = Dicio::new();
        let info = source
            .info(&page(body), "bola", &Pronunciation::default())
            .unwrap();
        assert!(info.starts_with("SUBSTANTIVO FEMININO\n"));
        assert!(info.contains("Esfera; objeto redondo.\n"));
        assert!(info.contains("INTERJEIÇÃO\n"));
    }

    #[test]
    fn an_error_object_is_word_not_available() {
        let source = Dicio::new();
        let err = source
            .info(
                &page(r#"{"error": "word not found"}"#),
                "xyzzy",
                &Pronunciation::default(),
            )
            .unwrap_err();
        assert!(
            matches!(err, LookupError::WordNotAvailable { ref origin }
                if origin == "dicio-api-ten.vercel.app")
        );
    }

    #[test]
    fn an_unexpected_shape_is_word_not_available() {
        let source = Dicio::new();
        let err = source
            .info(&page(r#"{"data": 1}"#), "x", &Pronunciation::default())
            .unwrap_err();
        assert!(err.is_not_available());
    }
}
