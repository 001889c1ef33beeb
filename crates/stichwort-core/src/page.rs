use scraper::Html;
use serde_json::Value;

/// Content kind a source serves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Html,
    Json,
}

/// One fetched page, decoded per the source's declared content kind.
///
/// Owned by a single resolution step. Parsed markup is not `Send`, so a
/// page never lives across an await; the resolver re-decodes from the
/// body string on every hop.
pub enum SourcePage {
    Html(Html),
    Json(Value),
}

impl SourcePage {
    /// Decode a response body. A body that does not decode counts as a
    /// missing entry, not a transport failure.
    pub fn decode(kind: PageKind, body: &str) -> Option<SourcePage> {
        match kind {
            PageKind::Html => Some(SourcePage::Html(Html::parse_document(body))),
            PageKind::Json => serde_json::from_str(body).ok().map(SourcePage::Json),
        }
    }

    pub fn html(&self) -> Option<&Html> {
        match self {
            SourcePage::Html(html) => Some(html),
            SourcePage::Json(_) => None,
        }
    }

    pub fn json(&self) -> Option<&Value> {
        match self {
            SourcePage::Json(value) => Some(value),
            SourcePage::Html(_) => None,
        }
    }

    /// Serialized markup, used to keep the root page around after the
    /// lookup finishes
    pub fn markup(&self) -> Option<String> {
        self.html().map(|html| html.root_element().html())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_bodies_always_decode() {
        let page = SourcePage::decode(PageKind::Html, "<p>hallo").unwrap();
        assert!(page.html().is_some());
        assert!(page.json().is_none());
    }

    #[test]
    fn broken_json_reads_as_missing() {
        assert!(SourcePage::decode(PageKind::Json, "<!doctype html>").is_none());
    }

    #[test]
    fn markup_survives_a_decode_round_trip() {
        let page = SourcePage::decode(PageKind::Html, "<div id=\"a\">x</div>").unwrap();
        assert!(page.markup().unwrap().contains("<div id=\"a\">x</div>"));
    }
}
