//! en.wiktionary.org, serving the English and Russian sections.
//!
//! One adapter, parameterized over the language heading id; both
//! variants share the page layout, only the section differs.

use scraper::Html;
use stichwort_core::error::LookupError;
use stichwort_core::page::{PageKind, SourcePage};
use stichwort_core::source::{DictionarySource, SourceProfile};
use stichwort_core::word::Pronunciation;

use crate::wiki;

const EN_PROFILE: SourceProfile = SourceProfile {
    name: "wiktionary",
    base_url: "https://en.wiktionary.org/wiki/",
    query_suffix: "",
    kind: PageKind::Html,
    resolves_root: false,
};

#[derive(Debug)]
pub struct WiktionaryEn {
    section: &'static str,
}

impl WiktionaryEn {
    /// The "English" section, the primary English source
    pub fn english() -> Self {
        Self { section: "English" }
    }

    /// The "Russian" section of the same site, the primary Russian
    /// source
    pub fn russian() -> Self {
        Self { section: "Russian" }
    }
}

impl DictionarySource for WiktionaryEn {
    fn profile(&self) -> &SourceProfile {
        &EN_PROFILE
    }

    fn isolate(&self, page: SourcePage) -> SourcePage {
        let Some(html) = page.html() else {
            return page;
        };
        let markup = wiki::isolate_by_id(html, self.section).unwrap_or_default();
        SourcePage::Html(Html::parse_document(&markup))
    }

    fn pronunciation(&self, page: &SourcePage) -> Pronunciation {
        let Some(html) = page.html() else {
            return Pronunciation::default();
        };
        Pronunciation {
            ipa: wiki::ipa_span(html, "IPA"),
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
        Ok(wiki::pos_sections(html, "dl dd", false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUSE: &str = "\
<h2><span id=\"English\">English</span></h2>
<p><span class=\"IPA\">/haʊs/</span><sup>(key)</sup>\
<a href=\"//upload.example.org/En-us-house-noun.ogg\">audio</a></p>
<h3>Noun</h3>
<ol>
<li>A structure built for habitation.</li>
<li>A family line.<dl><dd>This is my house and my family's ancestral home.</dd></dl></li>
</ol>
<h2><span id=\"Swedish\">Swedish</span></h2>
<ol><li>svensk definition</li></ol>";

    fn resolved(source: &WiktionaryEn, markup: &str) -> SourcePage {
        let page = SourcePage::decode(PageKind::Html, markup).unwrap();
        source.isolate(page)
    }

    #[test]
    fn only_the_declared_section_survives() {
        let source = WiktionaryEn::english();
        let page = resolved(&source, HOUSE);
        let info = source
            .info(&page, "house", &Pronunciation::default())
            .unwrap();
        assert!(info.contains("[2] This is my house and my family's ancestral home."));
        assert!(!info.contains("svensk"));
    }

    #[test]
    fn pronunciation_has_no_key_residue() {
        let source = WiktionaryEn::english();
        let pron = source.pronunciation(&resolved(&source, HOUSE));
        assert_eq!(pron.ipa, "/haʊs/");
        assert!(!pron.ipa.contains("(key)"));
        assert!(pron.audio_url.contains("En-us-house-noun.ogg"));
    }

    #[test]
    fn the_russian_variant_strips_the_ipa_label() {
        let markup = "\
<h2><span id=\"Russian\">Russian</span></h2>
<p><span class=\"IPA\">IPA: [tvɐˈjə]</span></p>
<h3>Pronoun</h3>
<ol><li>yours</li></ol>";
        let source = WiktionaryEn::russian();
        let page = resolved(&source, markup);
        let pron = source.pronunciation(&page);
        assert_eq!(pron.ipa, "[tvɐˈjə]");
        let info = source
            .info(&page, "твоё", &Pronunciation::default())
            .unwrap();
        assert!(info.contains("[1] yours"));
    }

    #[test]
    fn a_page_without_the_section_reads_as_blank() {
        let source = WiktionaryEn::russian();
        let page = resolved(&source, HOUSE);
        let info = source
            .info(&page, "house", &Pronunciation::default())
            .unwrap();
        assert!(info.trim().is_empty());
    }
}
