//! www.dictionary.com, a secondary English source.
//!
//! The site ships CSS-module class names, so the markup contract is a
//! set of obfuscated class literals; when the site rebuilds its
//! bundle these constants are what needs updating. Audio is a
//! synthesized-speech link for the headword rather than a recording.

use scraper::Html;
use stichwort_core::dom::{selector, text_of};
use stichwort_core::error::LookupError;
use stichwort_core::page::{PageKind, SourcePage};
use stichwort_core::source::{DictionarySource, SourceProfile};
use stichwort_core::word::Pronunciation;
use url::Url;

const PROFILE: SourceProfile = SourceProfile {
    name: "dict",
    base_url: "https://www.dictionary.com/browse/",
    query_suffix: "",
    kind: PageKind::Html,
    resolves_root: false,
};

/// CSS-module class contracts, current as of the site's last bundle
const PRONUNCIATION_CLASS: &str = "LgvbRZvyfgILDYMd8Lq6";
const GRAMMAR_CLASS: &str = "OoNk445te7MEusWxZIjw";
const DEFINITION_CLASS: &str = "ESah86zaufmd2_YPdZtq";
const EXAMPLE_CLASS: &str = "VvALg_9aE120lhieur0R";

const TTS_URL: &str = "https://translate.google.com/translate_tts";

#[derive(Debug, Default)]
pub struct DictionaryCom;

impl DictionaryCom {
    pub fn new() -> Self {
        Self
    }
}

/// Synthesized pronunciation link for a headword
fn tts_url(word: &str) -> String {
    Url::parse_with_params(
        TTS_URL,
        &[("ie", "UTF-8"), ("client", "tw-ob"), ("tl", "en"), ("q", word)],
    )
    .map(String::from)
    .unwrap_or_default()
}

impl DictionarySource for DictionaryCom {
    fn profile(&self) -> &SourceProfile {
        &PROFILE
    }

    fn pronunciation(&self, page: &SourcePage) -> Pronunciation {
        let Some(html) = page.html() else {
            return Pronunciation::default();
        };
        let ipa = html
            .select(&selector(&format!(".{PRONUNCIATION_CLASS}")))
            .next()
            .map(|el| {
                text_of(el).trim_matches([' ', '[', ']']).to_owned()
            })
            .unwrap_or_default();
        let audio_url = headword(html).map(|word| tts_url(&word)).unwrap_or_default();
        Pronunciation { ipa, audio_url }
    }

    fn info(
        &self,
        page: &SourcePage,
        root_word: &str,
        _pron: &Pronunciation,
    ) -> Result<String, LookupError> {
        let html = page
            .html()
            .ok_or_else(|| self.profile().word_not_available())?;

        let mut definitions_text = format!("{root_word}\n");
        let mut any_block = false;
        for block in html.select(&selector("[data-type=\"word-definitions\"]")) {
            // blocks without a grammar label are ads or cross-links
            let Some(grammar) = block
                .select(&selector(&format!(".{GRAMMAR_CLASS}")))
                .next()
                .map(text_of)
            else {
                continue;
            };
            any_block = true;
            definitions_text.push('\n');
            definitions_text.push_str(grammar.trim());
            definitions_text.push('\n');
            for definition in block.select(&selector(&format!(".{DEFINITION_CLASS}"))) {
                definitions_text.push_str(&text_of(definition));
                definitions_text.push('\n');
            }
        }
        if !any_block {
            return Ok(String::new());
        }

        let mut examples_text = String::new();
        for example in html.select(&selector(&format!(".{EXAMPLE_CLASS}"))) {
            if let Some(paragraph) = example.select(&selector("p")).next() {
                examples_text.push_str(&text_of(paragraph));
                examples_text.push('\n');
            }
        }
        Ok(format!("{definitions_text}\n\nEXAMPLES\n{examples_text}"))
    }
}

/// The page headword, used to build the speech-synthesis link
fn headword(html: &Html) -> Option<String> {
    html.select(&selector("h1"))
        .next()
        .map(|el| text_of(el).trim().to_owned())
        .filter(|word| !word.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCANT: &str = "\
<h1>scant</h1>
<span class=\"LgvbRZvyfgILDYMd8Lq6\">[ skant ]</span>
<div data-type=\"word-definitions\">
  <div class=\"OoNk445te7MEusWxZIjw\">adjective</div>
  <div class=\"ESah86zaufmd2_YPdZtq\">barely sufficient in amount or quantity.</div>
  <div class=\"ESah86zaufmd2_YPdZtq\">limited; meager.</div>
</div>
<div data-type=\"word-definitions\">
  <div>related words block without a grammar label</div>
</div>
<div class=\"VvALg_9aE120lhieur0R\"><p>She paid scant attention to the warning.</p></div>";

    fn page(markup: &str) -> SourcePage {
        SourcePage::decode(PageKind::Html, markup).unwrap()
    }

    #[test]
    fn phonetics_lose_their_brackets() {
        let source = DictionaryCom::new();
        let pron = source.pronunciation(&page(SCANT));
        assert_eq!(pron.ipa, "skant");
        assert!(pron.audio_url.contains("translate_tts"));
        assert!(pron.audio_url.contains("q=scant"));
    }

    #[test]
    fn grammar_blocks_group_their_definitions() {
        let source = DictionaryCom::new();
        let info = source
            .info(&page(SCANT), "scant", &Pronunciation::default())
            .unwrap();
        assert!(info.starts_with("scant\n"));
        assert!(info.contains("adjective"));
        assert!(info.contains("barely sufficient in amount or quantity."));
        assert!(info.contains("EXAMPLES\nShe paid scant attention to the warning."));
        assert!(!info.contains("related words"));
    }

    #[test]
    fn a_page_without_definition_blocks_reads_as_blank() {
        let source = DictionaryCom::new();
        let info = source
            .info(&page("<h1>nothing</h1>"), "nothing", &Pronunciation::default())
            .unwrap();
        assert!(info.is_empty());
    }
}
