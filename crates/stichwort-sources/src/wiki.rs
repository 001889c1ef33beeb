//! Shared navigation over Wiktionary-style rendered pages.

use scraper::{ElementRef, Html};
use stichwort_core::dom::{child_elements, next_element_siblings, node_text, selector, text_of};

/// Markup of the language section whose heading carries `id`: the
/// heading element plus every following sibling up to the next heading
/// of the same level. `None` when the page has no such section.
pub fn isolate_by_id(page: &Html, id: &str) -> Option<String> {
    let marker = page.select(&selector(&format!("[id=\"{id}\"]"))).next()?;
    let heading = if marker.value().name().starts_with('h') {
        marker
    } else {
        marker.parent().and_then(ElementRef::wrap)?
    };
    let level = heading.value().name().to_owned();

    let mut markup = heading.html();
    for sibling in next_element_siblings(heading) {
        if sibling.value().name() == level {
            break;
        }
        markup.push_str(&sibling.html());
    }
    Some(markup)
}

/// First `.ogg` audio locator on the page, protocol-relative links
/// upgraded to https
pub fn ogg_url(page: &Html) -> String {
    for el in page.select(&selector("source, a")) {
        let Some(link) = el.value().attr("src").or_else(|| el.value().attr("href")) else {
            continue;
        };
        if link.contains(".ogg") {
            if link.starts_with("//") {
                return format!("https:{link}");
            }
            return link.to_owned();
        }
    }
    String::new()
}

/// Text of the first span carrying the given phonetic class, with the
/// `(key)` superscript and the `IPA:` label stripped
pub fn ipa_span(page: &Html, class_name: &str) -> String {
    page.select(&selector(&format!("span.{class_name}")))
        .next()
        .map(|span| clean_ipa(&text_of(span)))
        .unwrap_or_default()
}

pub fn clean_ipa(raw: &str) -> String {
    raw.replace("(key)", "")
        .replace("IPA:", "")
        .trim()
        .trim_matches('\\')
        .to_owned()
}

/// Definitions and examples grouped under part-of-speech headings.
///
/// Every `h3`/`h4` directly followed by an ordered list is one section:
/// the heading text becomes the section header, each list item a `[n]`
/// definition, and each element matching `example_css` inside an item a
/// `[n]` example. Quotation sub-lists are not part of a definition's
/// own text.
pub fn pos_sections(page: &Html, example_css: &str, upper_headers: bool) -> String {
    let example_selector = selector(example_css);
    let mut out = String::new();
    for heading in page.select(&selector("h3, h4")) {
        let Some(list) = section_list(heading) else {
            continue;
        };
        let header = text_of(heading).replace("[edit]", "");
        let header = header.trim();
        if header.is_empty() {
            continue;
        }

        let mut definitions = Vec::new();
        let mut examples = Vec::new();
        let items = child_elements(list)
            .into_iter()
            .filter(|el| el.value().name() == "li");
        for (index, item) in items.enumerate() {
            let number = index + 1;
            let definition = definition_text(item);
            if definition.is_empty() {
                continue;
            }
            definitions.push(format!("[{number}] {definition}"));
            for example in item.select(&example_selector) {
                let text = text_of(example);
                let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
                if !text.is_empty() {
                    examples.push(format!("[{number}] {text}"));
                }
            }
        }
        if definitions.is_empty() {
            continue;
        }

        if upper_headers {
            out.push_str(&header.to_uppercase());
        } else {
            out.push_str(header);
        }
        out.push('\n');
        for definition in &definitions {
            out.push_str(definition);
            out.push('\n');
        }
        out.push('\n');
        for example in &examples {
            out.push_str(example);
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

/// The ordered list belonging to a heading: the next `ol` sibling,
/// unless another heading comes first
fn section_list(heading: ElementRef<'_>) -> Option<ElementRef<'_>> {
    for sibling in next_element_siblings(heading) {
        match sibling.value().name() {
            "ol" => return Some(sibling),
            "h2" | "h3" | "h4" => return None,
            _ => {}
        }
    }
    None
}

/// List-item text without its nested example/quotation lists
fn definition_text(item: ElementRef<'_>) -> String {
    let mut out = String::new();
    for child in item.children() {
        if let Some(el) = ElementRef::wrap(child) {
            if matches!(el.value().name(), "dl" | "ul" | "ol") {
                continue;
            }
            out.push_str(&text_of(el));
        } else {
            out.push_str(&node_text(child));
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}
