//! de.wiktionary.org, the primary German source.
//!
//! The only adapter that follows root redirects: a page for an
//! inflected form carries "Grammatische Merkmale" but no "Sinn und
//! Bezeichnetes (Semantik)" section, and the resolver keeps hopping to
//! the word named there until a page with a real definition turns up.

use scraper::{ElementRef, Html};
use stichwort_core::dom::{
    child_elements, following_named, next_element, next_element_siblings, preceding_named,
    selector, text_of,
};
use stichwort_core::error::LookupError;
use stichwort_core::page::{PageKind, SourcePage};
use stichwort_core::source::{DictionarySource, SourceProfile};
use stichwort_core::word::Pronunciation;

const PROFILE: SourceProfile = SourceProfile {
    name: "wiktionary",
    base_url: "https://de.wiktionary.org/wiki/",
    query_suffix: "",
    kind: PageKind::Html,
    resolves_root: true,
};

const LANGUAGE_SUFFIX: &str = "_(Deutsch)";
const GRAMMAR_MARKER: &str = "[title=\"Grammatische Merkmale\"]";
const MEANING_MARKER: &str = "[title=\"Sinn und Bezeichnetes (Semantik)\"]";
const EXAMPLE_MARKER: &str = "[title=\"Verwendungsbeispielsätze\"]";

#[derive(Debug, Default)]
pub struct WiktionaryDe;

impl WiktionaryDe {
    pub fn new() -> Self {
        Self
    }
}

/// The page's own word, read off the id of the German section heading
/// ("Stuhl_(Deutsch)" names the page for "Stuhl")
fn page_word(page: &Html) -> Option<String> {
    let marker = page
        .select(&selector(&format!("[id$=\"{LANGUAGE_SUFFIX}\"]")))
        .next()?;
    let id = marker.value().id()?;
    id.strip_suffix(LANGUAGE_SUFFIX).map(str::to_owned)
}

/// True when `heading` opens a section of the same word in another
/// language. The word-bearing id may sit on any child of the heading,
/// so all of them are tested, not just the first.
fn ends_german_section(heading: ElementRef<'_>, word: &str) -> bool {
    let section_prefix = format!("{word}_(");
    child_elements(heading).into_iter().any(|child| {
        child
            .value()
            .id()
            .is_some_and(|id| id.starts_with(&section_prefix) && !id.ends_with(LANGUAGE_SUFFIX))
    })
}

impl DictionarySource for WiktionaryDe {
    fn profile(&self) -> &SourceProfile {
        &PROFILE
    }

    /// Keep the German section only: the language heading and its
    /// following siblings, up to the heading of the next language
    fn isolate(&self, page: SourcePage) -> SourcePage {
        let Some(html) = page.html() else {
            return page;
        };
        let Some(word) = page_word(html) else {
            // no German section on this page
            return SourcePage::Html(Html::parse_document(""));
        };
        let marker_selector = selector(&format!("[id=\"{word}{LANGUAGE_SUFFIX}\"]"));
        let Some(indicator) = html
            .select(&marker_selector)
            .next()
            .and_then(|marker| marker.parent().and_then(ElementRef::wrap))
        else {
            return SourcePage::Html(Html::parse_document(""));
        };

        let mut markup = indicator.html();
        for sibling in next_element_siblings(indicator) {
            if sibling.value().name() == "h2" && ends_german_section(sibling, &word) {
                break;
            }
            markup.push_str(&sibling.html());
        }
        SourcePage::Html(Html::parse_document(&markup))
    }

    fn pronunciation(&self, page: &SourcePage) -> Pronunciation {
        let Some(html) = page.html() else {
            return Pronunciation::default();
        };
        let ipa = html
            .select(&selector(".ipa"))
            .next()
            .map(text_of)
            .unwrap_or_default();
        let audio_url = html
            .select(&selector(".aplay"))
            .next()
            .and_then(next_element)
            .and_then(|anchor| anchor.value().attr("href"))
            .map(|href| format!("https:{href}"))
            .unwrap_or_default();
        Pronunciation { ipa, audio_url }
    }

    fn is_redirect_only(&self, page: &SourcePage) -> bool {
        let Some(html) = page.html() else {
            return false;
        };
        let has_grammar = html.select(&selector(GRAMMAR_MARKER)).next().is_some();
        let has_meaning = html.select(&selector(MEANING_MARKER)).next().is_some();
        has_grammar && !has_meaning
    }

    /// The lemma is the last word of the first line under the grammar
    /// marker ("Präteritum … des Verbs gehen" names "gehen")
    fn redirect_target(&self, page: &SourcePage) -> Result<String, LookupError> {
        let html = page
            .html()
            .ok_or_else(|| self.profile().word_not_available())?;
        let marker = html
            .select(&selector(GRAMMAR_MARKER))
            .next()
            .ok_or_else(|| self.profile().word_not_available())?;
        let first_entry = next_element(marker)
            .or_else(|| {
                marker
                    .parent()
                    .and_then(ElementRef::wrap)
                    .and_then(next_element)
            })
            .ok_or_else(|| self.profile().word_not_available())?;
        text_of(first_entry)
            .split_whitespace()
            .last()
            .map(str::to_owned)
            .ok_or_else(|| self.profile().word_not_available())
    }

    /// Per grammar entry: the `h3` header, the definition list under
    /// the meaning marker, and the example list under the example
    /// marker
    fn info(
        &self,
        page: &SourcePage,
        _root_word: &str,
        _pron: &Pronunciation,
    ) -> Result<String, LookupError> {
        let html = page
            .html()
            .ok_or_else(|| self.profile().word_not_available())?;
        let meanings: Vec<_> = html.select(&selector(MEANING_MARKER)).collect();
        let examples: Vec<_> = html.select(&selector(EXAMPLE_MARKER)).collect();

        let mut out = String::new();
        for (meaning, example) in meanings.into_iter().zip(examples) {
            let Some(grammar) = preceding_named(meaning, "h3") else {
                continue;
            };
            let header = text_of(grammar).replace("[Bearbeiten]", "");
            out.push_str(header.trim_end());
            out.push('\n');
            if let Some(definitions) = following_named(meaning, "dl") {
                out.push('\n');
                out.push_str(&text_of(definitions));
            }
            if let Some(samples) = following_named(example, "dl") {
                out.push_str("\n\n");
                out.push_str(&text_of(samples));
            }
            out.push('\n');
        }
        Ok(out)
    }
}
