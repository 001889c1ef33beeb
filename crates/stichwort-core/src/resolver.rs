use std::collections::BTreeSet;

use crate::error::LookupError;
use crate::fetch::Fetch;
use crate::page::SourcePage;
use crate::source::DictionarySource;
use crate::word::{Pronunciation, WordInfo, WordQuery};

pub const DEFAULT_MAX_HOPS: u32 = 5;

/// Drives one source through fetch, isolation and the root-redirect
/// chain until a page with real content is reached.
pub struct Resolver<'a> {
    fetch: &'a dyn Fetch,
    max_hops: u32,
}

/// What one page told us before the next fetch
struct Inspection {
    pron: Pronunciation,
    outcome: Outcome,
}

enum Outcome {
    Redirect(String),
    Final { info: String, markup: Option<String> },
}

impl<'a> Resolver<'a> {
    pub fn new(fetch: &'a dyn Fetch) -> Self {
        Self::with_max_hops(fetch, DEFAULT_MAX_HOPS)
    }

    pub fn with_max_hops(fetch: &'a dyn Fetch, max_hops: u32) -> Self {
        Self {
            fetch,
            max_hops: max_hops.max(1),
        }
    }

    pub async fn resolve(
        &self,
        source: &dyn DictionarySource,
        query: &WordQuery,
    ) -> Result<WordInfo, LookupError> {
        let profile = source.profile();
        let surface_word = source.compatible(&query.word).into_owned();
        let url = source.request_url(&query.word);
        tracing::debug!("{}: fetching {url}", profile.name);
        let body = self.fetch.get_text(&url).await?;

        let mut inspection = inspect(source, &body, &query.word)?;
        let surface_pron = inspection.pron.clone();
        let mut root_word = query.word.clone();

        let mut visited = BTreeSet::from([surface_word.clone()]);
        let mut hops = 0u32;
        loop {
            match inspection.outcome {
                Outcome::Redirect(target) => {
                    hops += 1;
                    if hops > self.max_hops || !visited.insert(target.clone()) {
                        tracing::warn!(
                            "{}: redirect chain for {} abandoned at {target} ({hops} hops)",
                            profile.name,
                            query.word
                        );
                        return Err(profile.word_not_available());
                    }
                    tracing::debug!("{}: {root_word} redirects to {target}", profile.name);
                    let url = source.request_url(&target);
                    let body = self.fetch.get_text(&url).await?;
                    inspection = inspect(source, &body, &target)?;
                    root_word = target;
                }
                Outcome::Final { info, markup } => {
                    let root_pron = inspection.pron;
                    let redirected = root_word != surface_word;
                    return Ok(WordInfo {
                        surface_word,
                        root_word,
                        ipa: surface_pron.ipa,
                        root_ipa: root_pron.ipa,
                        pronunciation_url: surface_pron.audio_url,
                        root_pronunciation_url: root_pron.audio_url,
                        info_text: info,
                        redirected,
                        root_html: markup,
                    });
                }
            }
        }
    }
}

/// Everything that touches the parsed page happens here, synchronously;
/// only body strings cross await points.
fn inspect(
    source: &dyn DictionarySource,
    body: &str,
    page_word: &str,
) -> Result<Inspection, LookupError> {
    let profile = source.profile();
    let page = SourcePage::decode(profile.kind, body).ok_or_else(|| profile.word_not_available())?;
    let page = source.isolate(page);
    let pron = source.pronunciation(&page);

    if profile.resolves_root && source.is_redirect_only(&page) {
        let target = source.redirect_target(&page)?;
        return Ok(Inspection {
            pron,
            outcome: Outcome::Redirect(target),
        });
    }

    let info = source.info(&page, page_word, &pron)?;
    if info.trim().is_empty() {
        return Err(profile.word_not_available());
    }
    let markup = page.markup();
    Ok(Inspection {
        pron,
        outcome: Outcome::Final { info, markup },
    })
}
