//! www.dwds.de, a secondary German source.
//!
//! Definitions carry `d-N-M` element ids, sub-definitions `d-N-M-K`;
//! subs render with letter tags under their parent's number. Examples
//! hang off each definition, with reading buttons and the "Beispiel"
//! caption filtered out.

use regex::Regex;
use scraper::ElementRef;
use stichwort_core::dom::{child_elements, next_element, node_text, selector, text_of};
use stichwort_core::error::LookupError;
use stichwort_core::page::{PageKind, SourcePage};
use stichwort_core::source::{DictionarySource, SourceProfile};
use stichwort_core::word::Pronunciation;

use crate::format::format_info;

const PROFILE: SourceProfile = SourceProfile {
    name: "dwds",
    base_url: "https://www.dwds.de/wb/",
    query_suffix: "",
    kind: PageKind::Html,
    resolves_root: false,
};

#[derive(Debug, Default)]
pub struct Dwds;

impl Dwds {
    pub fn new() -> Self {
        Self
    }
}

/// Compile a pattern literal; only statically known sources reach this
fn pattern(source: &str) -> Regex {
    match Regex::new(source) {
        Ok(compiled) => compiled,
        Err(err) => panic!("bad pattern {source:?}: {err}"),
    }
}

/// One definition entry: the `[tag]` line plus its example list.
/// Returns the entry's content element so the caller can look for
/// sub-definitions inside it.
fn collect_entry<'a>(
    entry: ElementRef<'a>,
    tag: &str,
    definitions: &mut Vec<String>,
    examples: &mut Vec<String>,
) -> Option<ElementRef<'a>> {
    let content = child_elements(entry).into_iter().nth(1)?;
    let meaning = content
        .select(&selector("div.dwdswb-lesart-def"))
        .next()?;
    let lead = if tag.len() > 1 { " " } else { "" };
    definitions.push(format!("{lead}[{tag}] {}", text_of(meaning).trim()));

    if let Some(example_list) = next_element(meaning) {
        for example in child_elements(example_list) {
            if example.value().name() == "button" {
                continue;
            }
            let text = text_of(example);
            if text.contains("Beispiel") {
                continue;
            }
            examples.push(format!("[{tag}] {}", text.trim()));
        }
    }
    Some(content)
}

impl DictionarySource for Dwds {
    fn profile(&self) -> &SourceProfile {
        &PROFILE
    }

    /// IPA sits two nodes after the `<audio>` element, in brackets
    fn pronunciation(&self, page: &SourcePage) -> Pronunciation {
        let Some(html) = page.html() else {
            return Pronunciation::default();
        };
        let Some(audio) = html.select(&selector("audio")).next() else {
            return Pronunciation::default();
        };
        let audio_url = audio
            .select(&selector("source"))
            .next()
            .and_then(|source| source.value().attr("src"))
            .map(str::to_owned)
            .unwrap_or_default();
        let ipa = audio
            .next_siblings()
            .nth(1)
            .map(node_text)
            .map(|text| text.trim().trim_matches(['[', ']']).to_owned())
            .unwrap_or_default();
        Pronunciation { ipa, audio_url }
    }

    fn info(
        &self,
        page: &SourcePage,
        _root_word: &str,
        pron: &Pronunciation,
    ) -> Result<String, LookupError> {
        let html = page
            .html()
            .ok_or_else(|| self.profile().word_not_available())?;
        // no lemma heading means DWDS has no entry, only a search stub
        let Some(lemma) = html
            .select(&selector("h1.dwdswb-ft-lemmaansatz"))
            .next()
            .map(text_of)
        else {
            return Ok(String::new());
        };

        let top = pattern(r"^d-\d+-\d+$");
        let sub = pattern(r"^d-\d+-\d+-\d+$");
        let mut definitions = Vec::new();
        let mut examples = Vec::new();
        let mut number = 0usize;
        for entry in html.select(&selector("[id^=\"d-\"]")) {
            let Some(id) = entry.value().id() else {
                continue;
            };
            if !top.is_match(id) {
                continue;
            }
            number += 1;
            let Some(content) =
                collect_entry(entry, &number.to_string(), &mut definitions, &mut examples)
            else {
                continue;
            };
            let sub_selector = selector("[id^=\"d-\"]");
            let sub_entries = content
                .select(&sub_selector)
                .filter(|el| el.value().id().is_some_and(|id| sub.is_match(id)));
            for (index, sub_entry) in sub_entries.enumerate() {
                let letter = (b'a' + index as u8) as char;
                let tag = format!("{number}{letter}");
                collect_entry(sub_entry, &tag, &mut definitions, &mut examples);
            }
        }
        Ok(format_info(lemma.trim(), &definitions, &examples, Some(pron)))
    }
}
