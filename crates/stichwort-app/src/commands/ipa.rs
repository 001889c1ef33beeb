//! Whole-text IPA transcription, one lookup per word.

use clap::Args;
use stichwort_config::Config;
use stichwort_core::fetch::Fetcher;
use stichwort_core::resolver::Resolver;
use stichwort_core::word::WordQuery;
use stichwort_sources::registry;

use super::language;

#[derive(Args)]
pub struct IpaArgs {
    /// Text to transcribe, word by word
    #[arg(required = true)]
    pub text: Vec<String>,

    /// Language code (de, en, fr, la, ru, pt)
    #[arg(short, long)]
    pub lang: Option<String>,
}

pub async fn run(config: &Config, args: IpaArgs) -> anyhow::Result<()> {
    let language = language(config, args.lang.as_deref())?;
    let source = registry::primary(language);
    let fetcher = Fetcher::new(config.fetch.timeout(), config.fetch.max_attempts);
    let resolver = Resolver::with_max_hops(&fetcher, config.fetch.max_redirects);

    for token in args.text.iter().flat_map(|chunk| chunk.split_whitespace()) {
        let word = strip_punctuation(token);
        if word.is_empty() {
            continue;
        }
        let query = WordQuery::new(word.to_owned(), language);
        match resolver.resolve(source.as_ref(), &query).await {
            Ok(info) => {
                let ipa = if info.ipa.is_empty() {
                    &info.root_ipa
                } else {
                    &info.ipa
                };
                println!("{word}: {ipa}");
            }
            Err(err) if err.is_not_available() => println!("{word}: not found"),
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

fn strip_punctuation(token: &str) -> &str {
    token.trim_matches(|c| matches!(c, '.' | '?' | ';' | ',' | '!' | ':' | '"' | '\'' | '»' | '«'))
}
