//! Surface-form extraction from Wiktionary inflection tables.

use std::collections::BTreeSet;

use scraper::{ElementRef, Html};
use stichwort_core::dom::{prev_element_siblings, selector, text_of, text_with_breaks};

/// Deduplicated surface forms of one word; empty strings excluded
pub type InflectionSet = BTreeSet<String>;

/// Collect every inflected form from the grammar tables of a resolved
/// root page.
///
/// A table is classified by the text of the element right before it
/// (the grammar header trails its table in the page layout, so tables
/// are walked back to front). Verb tables carry `!`-separated alternate
/// forms, noun tables pair each form with its article, adjective tables
/// wrap superlatives in the "am ..." circumfix, and a surname table
/// only ever stands for the root word itself.
pub fn inflections(root_markup: &str, root_word: &str) -> InflectionSet {
    let page = Html::parse_document(root_markup);
    let tables: Vec<ElementRef<'_>> = page
        .select(&selector("table[class*=\"inflection-table\"]"))
        .collect();

    let mut forms = InflectionSet::new();
    for table in tables.into_iter().rev() {
        let Some(header) = prev_element_siblings(table).first().map(|el| text_of(*el)) else {
            continue;
        };
        if header.contains("Nachname") {
            forms.insert(root_word.to_owned());
        } else if header.contains("Verb") {
            collect_verb_forms(table, &mut forms);
        } else if header.contains("Substantiv") {
            collect_noun_forms(table, &mut forms);
        } else if header.contains("Adjektiv") {
            collect_adjective_forms(table, &mut forms);
        }
    }
    forms.remove("");
    forms
}

/// Wide verb cells hold alternate forms separated by `!`
fn collect_verb_forms(table: ElementRef<'_>, forms: &mut InflectionSet) {
    for cell in table.select(&selector("td[colspan=\"3\"]")) {
        for alternate in text_of(cell).trim().split('!') {
            forms.insert(alternate.trim().to_owned());
        }
    }
}

/// Noun cells pair an article with a form, one pair per line; only the
/// form half is kept
fn collect_noun_forms(table: ElementRef<'_>, forms: &mut InflectionSet) {
    for cell in table.select(&selector("td")) {
        let text = text_with_breaks(cell);
        let tokens: Vec<&str> = text.split_whitespace().collect();
        for pair in tokens.chunks(2) {
            if let [_, form] = pair {
                forms.insert((*form).to_owned());
            }
        }
    }
}

/// Adjective cells spell superlatives as "am größten"; the particle is
/// stripped, the form kept
fn collect_adjective_forms(table: ElementRef<'_>, forms: &mut InflectionSet) {
    for cell in table.select(&selector("td")) {
        let text = text_of(cell);
        let trimmed = text.trim();
        let form = trimmed.strip_prefix("am ").unwrap_or(trimmed);
        forms.insert(form.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(forms: &[&str]) -> InflectionSet {
        forms.iter().map(|form| (*form).to_owned()).collect()
    }

    #[test]
    fn verb_cells_flatten_alternate_forms() {
        let markup = "\
<p>Verb</p>
<table class=\"inflection-table\"><tbody><tr>
<td colspan=\"3\">schlafe ein</td>
<td colspan=\"3\">schläfst ein!schlafst ein</td>
</tr><tr>
<td colspan=\"3\"></td>
<td colspan=\"3\">eingeschlafen</td>
</tr></tbody></table>";
        assert_eq!(
            inflections(markup, "einschlafen"),
            set(&[
                "schlafe ein",
                "schläfst ein",
                "schlafst ein",
                "eingeschlafen"
            ])
        );
    }

    #[test]
    fn noun_cells_keep_the_form_and_drop_the_article() {
        let markup = "\
<p>Substantiv, m</p>
<table class=\"inflection-table\"><tbody><tr>
<td>der Stuhl<br>die Stühle</td>
<td>des Stuhls</td>
</tr></tbody></table>";
        assert_eq!(
            inflections(markup, "Stuhl"),
            set(&["Stuhl", "Stühle", "Stuhls"])
        );
    }

    #[test]
    fn adjective_cells_lose_the_superlative_particle() {
        let markup = "\
<p>Adjektiv</p>
<table class=\"inflection-table\"><tbody><tr>
<td>groß</td><td>größer</td><td>am größten</td>
</tr></tbody></table>";
        assert_eq!(
            inflections(markup, "groß"),
            set(&["groß", "größer", "größten"])
        );
    }

    #[test]
    fn a_surname_table_stands_for_the_root_itself() {
        let markup = "\
<p>Nachname</p>
<table class=\"inflection-table\"><tbody><tr>
<td>die Junges</td>
</tr></tbody></table>";
        assert_eq!(inflections(markup, "Junge"), set(&["Junge"]));
    }

    #[test]
    fn mixed_pages_merge_all_tables() {
        let markup = "\
<p>Verb</p>
<table class=\"inflection-table\"><tbody><tr>
<td colspan=\"3\">verfahre</td>
</tr></tbody></table>
<p>Adjektiv</p>
<table class=\"inflection-table\"><tbody><tr>
<td>verfahren</td><td>verfahrener</td>
</tr></tbody></table>";
        assert_eq!(
            inflections(markup, "verfahren"),
            set(&["verfahre", "verfahren", "verfahrener"])
        );
    }

    #[test]
    fn a_page_without_tables_yields_nothing() {
        assert!(inflections("<p>kein Inhalt</p>", "wort").is_empty());
    }
}
