//! Corpus-only example search, no network.

use std::collections::BTreeSet;

use clap::Args;
use stichwort_config::Config;
use stichwort_core::word::Language;

use crate::corpus;

use super::{language, print_examples};

#[derive(Args)]
pub struct ExamplesArgs {
    /// Word to search for; a German separable infinitive is expanded
    /// into its detached form
    pub word: String,

    /// Language code (de, en, fr, la, ru, pt)
    #[arg(short, long)]
    pub lang: Option<String>,
}

pub fn run(config: &Config, args: ExamplesArgs) -> anyhow::Result<()> {
    let language = language(config, args.lang.as_deref())?;
    let target = if language == Language::German {
        stichwort_lang_german::search_targets(&args.word)
    } else {
        args.word.clone()
    };
    let books = corpus::load(&config.ebooks.dir, language)?;
    print_examples(&BTreeSet::from([target]), &books);
    Ok(())
}
