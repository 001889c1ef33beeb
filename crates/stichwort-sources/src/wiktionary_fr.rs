//! fr.wiktionary.org, the primary French source.

use scraper::Html;
use stichwort_core::error::LookupError;
use stichwort_core::page::{PageKind, SourcePage};
use stichwort_core::source::{DictionarySource, SourceProfile};
use stichwort_core::word::Pronunciation;

use crate::wiki;

const PROFILE: SourceProfile = SourceProfile {
    name: "wiktionary",
    base_url: "https://fr.wiktionary.org/wiki/",
    query_suffix: "",
    kind: PageKind::Html,
    resolves_root: false,
};

/// French section id on fr.wiktionary
const SECTION_ID: &str = "fr";

#[derive(Debug, Default)]
pub struct WiktionaryFr;

impl WiktionaryFr {
    pub fn new() -> Self {
        Self
    }
}

impl DictionarySource for WiktionaryFr {
    fn profile(&self) -> &SourceProfile {
        &PROFILE
    }

    fn isolate(&self, page: SourcePage) -> SourcePage {
        let Some(html) = page.html() else {
            return page;
        };
        let markup = wiki::isolate_by_id(html, SECTION_ID).unwrap_or_default();
        SourcePage::Html(Html::parse_document(&markup))
    }

    /// French phonetics come in `.API` spans delimited by backslashes
    fn pronunciation(&self, page: &SourcePage) -> Pronunciation {
        let Some(html) = page.html() else {
            return Pronunciation::default();
        };
        Pronunciation {
            ipa: wiki::ipa_span(html, "API"),
            audio_url: wiki::ogg_url(html),
        }
    }

    fn info(
        &self,
        page: &SourcePage,
        _root_word: &str,
        _pron: &Pronunciation,
    ) -> Result<String, LookupError> {
        let html = page
            .html()
            .ok_or_else(|| self.profile().word_not_available())?;
        // fr examples sit in unordered sub-lists under each definition
        Ok(wiki::pos_sections(html, "ul li", false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DE_NOUVEAU: &str = "\
<h2><span class=\"sectionlangue\" id=\"fr\">Français</span></h2>
<p><span class=\"API\">\\də nu.vo\\</span>\
<a href=\"//upload.example.org/Fr-de_nouveau.ogg\">audio</a></p>
<h3>Locution adverbiale</h3>
<ol>
<li>Une fois de plus.<ul><li>Il a de nouveau perdu ses clés.</li></ul></li>
</ol>
<h2><span class=\"sectionlangue\" id=\"en\">Anglais</span></h2>
<ol><li>english definition</li></ol>";

    fn resolved(markup: &str) -> SourcePage {
        let source = WiktionaryFr::new();
        let page = SourcePage::decode(PageKind::Html, markup).unwrap();
        source.isolate(page)
    }

    #[test]
    fn ipa_loses_its_backslash_delimiters() {
        let source = WiktionaryFr::new();
        let pron = source.pronunciation(&resolved(DE_NOUVEAU));
        assert_eq!(pron.ipa, "də nu.vo");
        assert!(pron.audio_url.contains("Fr-de_nouveau.ogg"));
    }

    #[test]
    fn definitions_and_inline_examples_are_tagged() {
        let source = WiktionaryFr::new();
        let info = source
            .info(&resolved(DE_NOUVEAU), "de_nouveau", &Pronunciation::default())
            .unwrap();
        assert!(info.contains("Locution adverbiale\n"));
        assert!(info.contains("[1] Une fois de plus."));
        assert!(info.contains("[1] Il a de nouveau perdu ses clés."));
        assert!(!info.contains("english definition"));
    }
}
