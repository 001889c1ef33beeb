//! www.duden.de, a secondary German source.
//!
//! The site's backend cannot resolve umlauts in the path, so the word
//! is folded to its ae/oe/ue spelling before the request is built.
//! Entries come in two layouts: a single `#bedeutung` block or an
//! enumerated `Bedeutung-N` list; some enumerated entries are only a
//! figure, in which case the image link stands in for the definition.

use std::borrow::Cow;

use colored::Colorize;
use scraper::ElementRef;
use stichwort_core::dom::{child_elements, node_text, selector, text_of};
use stichwort_core::error::LookupError;
use stichwort_core::page::{PageKind, SourcePage};
use stichwort_core::source::{DictionarySource, SourceProfile};
use stichwort_core::word::Pronunciation;

use crate::format::format_info;

const PROFILE: SourceProfile = SourceProfile {
    name: "duden",
    base_url: "https://www.duden.de/rechtschreibung/",
    query_suffix: "",
    kind: PageKind::Html,
    resolves_root: false,
};

const UMLAUTS: [(char, &str); 6] = [
    ('ä', "ae"),
    ('Ä', "Ae"),
    ('ö', "oe"),
    ('Ö', "Oe"),
    ('ü', "ue"),
    ('Ü', "Ue"),
];

#[derive(Debug, Default)]
pub struct Duden;

impl Duden {
    pub fn new() -> Self {
        Self
    }
}

/// The `[tag]`-prefixed examples under one definition block
fn collect_examples(block: ElementRef<'_>, tag: &str, examples: &mut Vec<String>) {
    let Some(title) = block
        .select(&selector(".note__title"))
        .find(|el| text_of(*el).contains("Beispiel"))
    else {
        return;
    };
    let Some(note) = title.parent().and_then(ElementRef::wrap) else {
        return;
    };
    let Some(list) = note.select(&selector(".note__list")).next() else {
        return;
    };
    for item in child_elements(list) {
        examples.push(format!("[{tag}] {}", text_of(item).trim()));
    }
}

impl DictionarySource for Duden {
    fn profile(&self) -> &SourceProfile {
        &PROFILE
    }

    fn compatible<'a>(&self, word: &'a str) -> Cow<'a, str> {
        if !word.chars().any(|c| UMLAUTS.iter().any(|(u, _)| *u == c)) {
            return Cow::Borrowed(word);
        }
        let mut folded = String::with_capacity(word.len() + 4);
        for c in word.chars() {
            match UMLAUTS.iter().find(|(u, _)| *u == c) {
                Some((_, replacement)) => folded.push_str(replacement),
                None => folded.push(c),
            }
        }
        Cow::Owned(folded)
    }

    /// The pronunciation guide mixes plain phonetic runs with
    /// stress-marked ones; marked runs render underlined, and the one
    /// entry carrying an href is the audio link
    fn pronunciation(&self, page: &SourcePage) -> Pronunciation {
        let Some(html) = page.html() else {
            return Pronunciation::default();
        };
        let Some(guide) = html.select(&selector(".pronunciation-guide")).next() else {
            return Pronunciation::default();
        };

        let mut phonetic_parts = Vec::new();
        let mut audio_url = String::new();
        for detail in guide.select(&selector("dd")) {
            let Some(content) = detail.select(&selector("div")).next() else {
                continue;
            };
            for entry in child_elements(content) {
                if let Some(href) = entry.value().attr("href") {
                    audio_url = href.to_owned();
                    continue;
                }
                let nodes: Vec<_> = entry.children().collect();
                let mut part = String::new();
                if let [only] = nodes.as_slice() {
                    part.push_str(&node_text(*only));
                } else {
                    for node in nodes {
                        match ElementRef::wrap(node) {
                            Some(stressed) => {
                                part.push_str(&text_of(stressed).underline().to_string());
                            }
                            None => part.push_str(&node_text(node)),
                        }
                    }
                }
                phonetic_parts.push(part);
            }
        }
        Pronunciation {
            ipa: phonetic_parts.join(" "),
            audio_url,
        }
    }

    fn info(
        &self,
        page: &SourcePage,
        root_word: &str,
        pron: &Pronunciation,
    ) -> Result<String, LookupError> {
        let html = page
            .html()
            .ok_or_else(|| self.profile().word_not_available())?;
        let mut definitions = Vec::new();
        let mut examples = Vec::new();

        if let Some(single) = html.select(&selector("#bedeutung")).next() {
            let meaning = single
                .select(&selector("p"))
                .next()
                .map(text_of)
                .unwrap_or_default();
            definitions.push(format!("[1] {}", meaning.trim()));
            collect_examples(single, "1", &mut examples);
        } else {
            for entry in html.select(&selector("li[id^=\"Bedeutung-\"]")) {
                let Some(index) = entry.value().id().and_then(|id| id.split('-').nth(1)) else {
                    continue;
                };
                let definition = if let Some(meaning) = entry.select(&selector("div")).next() {
                    format!("[{index}] {}", text_of(meaning).trim())
                } else if let Some(figure) = entry
                    .select(&selector("figure a"))
                    .next()
                    .and_then(|a| a.value().attr("href"))
                {
                    // figure-only entries: the image stands for the meaning
                    format!("[{index}] {figure}")
                } else {
                    String::new()
                };
                definitions.push(definition);
                collect_examples(entry, index, &mut examples);
            }
        }
        Ok(format_info(root_word, &definitions, &examples, Some(pron)))
    }
}
