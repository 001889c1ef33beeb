use std::borrow::Cow;

use url::Url;

use crate::error::LookupError;
use crate::page::{PageKind, SourcePage};
use crate::word::Pronunciation;

/// Static description of one dictionary site
#[derive(Debug, Clone)]
pub struct SourceProfile {
    /// Short name used in logs and source selection
    pub name: &'static str,
    pub base_url: &'static str,
    /// Query-string tail appended after the word
    pub query_suffix: &'static str,
    pub kind: PageKind,
    /// Whether redirect-only pages are followed to the lemma entry
    pub resolves_root: bool,
}

impl SourceProfile {
    /// Host component of the base url; not-found errors are scoped to it
    pub fn origin(&self) -> String {
        Url::parse(self.base_url)
            .ok()
            .and_then(|parsed| parsed.host_str().map(str::to_owned))
            .unwrap_or_else(|| self.base_url.to_owned())
    }

    pub fn word_not_available(&self) -> LookupError {
        LookupError::WordNotAvailable {
            origin: self.origin(),
        }
    }
}

/// One dictionary site: request construction plus page interpretation.
///
/// Implementations never perform I/O themselves; the resolver owns
/// fetching. Markup that does not match a site's expected shape must
/// surface as `WordNotAvailable`, never as a structural error.
pub trait DictionarySource: std::fmt::Debug + Send + Sync {
    fn profile(&self) -> &SourceProfile;

    /// Rewrite a word into the form the site's urls accept
    fn compatible<'a>(&self, word: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(word)
    }

    /// Entry url for a word
    fn request_url(&self, word: &str) -> String {
        let profile = self.profile();
        format!(
            "{}{}{}",
            profile.base_url,
            self.compatible(word),
            profile.query_suffix
        )
    }

    /// Narrow a page down to the section this source cares about
    fn isolate(&self, page: SourcePage) -> SourcePage {
        page
    }

    /// Best-effort pronunciation; missing pieces come back empty
    fn pronunciation(&self, _page: &SourcePage) -> Pronunciation {
        Pronunciation::default()
    }

    /// True when the page only carries grammar tags pointing at a lemma
    fn is_redirect_only(&self, _page: &SourcePage) -> bool {
        false
    }

    /// Lemma a redirect-only page points at
    fn redirect_target(&self, _page: &SourcePage) -> Result<String, LookupError> {
        Err(self.profile().word_not_available())
    }

    /// Formatted definitions and examples for the page. Blank output is
    /// upgraded to `WordNotAvailable` by the resolver.
    fn info(
        &self,
        page: &SourcePage,
        root_word: &str,
        pron: &Pronunciation,
    ) -> Result<String, LookupError>;
}
