//! The Latin section of en.wiktionary.org.
//!
//! Latin pages list several pronunciation traditions; only the
//! Ecclesiastical one is reported. Part-of-speech headers may come as
//! `h3` or `h4` depending on the page and render upper-cased either
//! way.

use scraper::Html;
use stichwort_core::dom::{selector, text_of};
use stichwort_core::error::LookupError;
use stichwort_core::page::{PageKind, SourcePage};
use stichwort_core::source::{DictionarySource, SourceProfile};
use stichwort_core::word::Pronunciation;

use crate::wiki;

const PROFILE: SourceProfile = SourceProfile {
    name: "wiktionary",
    base_url: "https://en.wiktionary.org/wiki/",
    query_suffix: "",
    kind: PageKind::Html,
    resolves_root: false,
};

#[derive(Debug, Default)]
pub struct WiktionaryLa;

impl WiktionaryLa {
    pub fn new() -> Self {
        Self
    }
}

impl DictionarySource for WiktionaryLa {
    fn profile(&self) -> &SourceProfile {
        &PROFILE
    }

    fn isolate(&self, page: SourcePage) -> SourcePage {
        let Some(html) = page.html() else {
            return page;
        };
        let markup = wiki::isolate_by_id(html, "Latin").unwrap_or_default();
        SourcePage::Html(Html::parse_document(&markup))
    }

    /// Ecclesiastical IPA only; the other pronunciation variants on the
    /// page are intentionally skipped, and no audio is offered
    fn pronunciation(&self, page: &SourcePage) -> Pronunciation {
        let Some(html) = page.html() else {
            return Pronunciation::default();
        };
        let ipa = html
            .select(&selector("li"))
            .find(|item| text_of(*item).contains("Ecclesiastical"))
            .and_then(|item| item.select(&selector("span.IPA")).next())
            .map(|span| wiki::clean_ipa(&text_of(span)))
            .unwrap_or_default();
        Pronunciation {
            ipa,
            audio_url: String::new(),
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
        Ok(wiki::pos_sections(html, "dl dd", true))
    }
}
