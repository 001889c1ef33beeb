use std::collections::BTreeMap;
use std::collections::BTreeSet;

use anyhow::anyhow;
use stichwort_config::Config;
use stichwort_core::word::Language;

pub mod examples;
pub mod ipa;
pub mod lookup;

/// Session language: the `--lang` flag when given, the configured
/// language otherwise
pub(crate) fn language(config: &Config, flag: Option<&str>) -> anyhow::Result<Language> {
    let code = flag.unwrap_or(&config.language);
    code.parse::<Language>().map_err(|err| anyhow!(err))
}

/// Print the corpus matches for a set of targets, one upper-cased book
/// header per book
pub(crate) fn print_examples(targets: &BTreeSet<String>, books: &BTreeMap<String, String>) {
    for (name, text) in books {
        println!("{}", name.to_uppercase());
        for example in stichwort_search::find_examples(targets.iter(), text) {
            println!("{example}\n");
        }
    }
}
