//! The default command: resolve a word, print the report, copy the
//! pronunciation, optionally show corpus examples.

use std::collections::BTreeSet;

use clap::Args;
use stichwort_config::Config;
use stichwort_core::fetch::Fetcher;
use stichwort_core::resolver::Resolver;
use stichwort_core::word::{Language, WordInfo, WordQuery};
use stichwort_sources::registry;

use crate::{clipboard, corpus, report};

use super::{language, print_examples};

#[derive(Args)]
pub struct LookupArgs {
    /// Word or phrase to look up
    #[arg(required = true)]
    pub word: Vec<String>,

    /// Language code (de, en, fr, la, ru, pt)
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Secondary source (dwds, duden, dict)
    #[arg(short, long)]
    pub source: Option<String>,

    /// Join multi-token input into one phrase query
    #[arg(short, long)]
    pub phrase: bool,

    /// Also search the ebook corpus for the resolved word's forms
    #[arg(short, long)]
    pub examples: bool,
}

pub async fn run(config: &Config, args: LookupArgs) -> anyhow::Result<()> {
    let language = language(config, args.lang.as_deref())?;
    let source = match registry::select(args.source.as_deref(), language) {
        Ok(source) => source,
        Err(err) => {
            println!("{err}");
            return Ok(());
        }
    };

    let query = if args.phrase {
        WordQuery::phrase(&args.word, language)
    } else {
        let word = args.word.first().cloned().unwrap_or_default();
        WordQuery::new(word, language)
    };

    let fetcher = Fetcher::new(config.fetch.timeout(), config.fetch.max_attempts);
    let resolver = Resolver::with_max_hops(&fetcher, config.fetch.max_redirects);
    let info = match resolver.resolve(source.as_ref(), &query).await {
        Ok(info) => info,
        Err(err) if err.is_not_available() => {
            println!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    print!("{}", report::render(&info));
    clipboard::copy_pronunciation(&info);

    if args.examples {
        let targets = example_targets(&info, language);
        let books = corpus::load(&config.ebooks.dir, language)?;
        print_examples(&targets, &books);
    }
    Ok(())
}

/// Search targets for a resolved word: the full inflection paradigm
/// for German when the root page carries grammar tables, the root word
/// itself otherwise
fn example_targets(info: &WordInfo, language: Language) -> BTreeSet<String> {
    if language == Language::German {
        if let Some(markup) = &info.root_html {
            let forms = stichwort_lang_german::inflections(markup, &info.root_word);
            if !forms.is_empty() {
                return forms;
            }
        }
        return BTreeSet::from([stichwort_lang_german::search_targets(&info.root_word)]);
    }
    BTreeSet::from([info.root_word.clone()])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(root_word: &str, root_html: Option<&str>) -> WordInfo {
        WordInfo {
            surface_word: root_word.to_owned(),
            root_word: root_word.to_owned(),
            ipa: String::new(),
            root_ipa: String::new(),
            pronunciation_url: String::new(),
            root_pronunciation_url: String::new(),
            info_text: "[1] etwas".to_owned(),
            redirected: false,
            root_html: root_html.map(str::to_owned),
        }
    }

    #[test]
    fn german_targets_come_from_the_inflection_tables() {
        let markup = "\
<p>Verb</p>
<table class=\"inflection-table\"><tbody><tr>
<td colspan=\"3\">schlafe ein</td><td colspan=\"3\">eingeschlafen</td>
</tr></tbody></table>";
        let targets = example_targets(&resolved("einschlafen", Some(markup)), Language::German);
        assert!(targets.contains("schlafe ein"));
        assert!(targets.contains("eingeschlafen"));
    }

    #[test]
    fn a_german_word_without_tables_splits_its_prefix() {
        let targets = example_targets(&resolved("einschlafen", None), Language::German);
        assert_eq!(targets, BTreeSet::from(["schlafen ein".to_owned()]));
    }

    #[test]
    fn other_languages_search_the_root_itself() {
        let targets = example_targets(&resolved("house", None), Language::English);
        assert_eq!(targets, BTreeSet::from(["house".to_owned()]));
    }
}
