//! The shared numbered-definition report block.

use stichwort_core::word::Pronunciation;

/// Render definitions and examples into the common report shape:
///
/// ```text
///
/// Stuhl
/// Phonetics: ʃtuːl https://…/De-Stuhl.ogg
/// [1] Sitzmöbel …
///  [1a] …
///
/// [1] Der _ steht am Fenster.
/// ```
///
/// Definitions carry `[n]` tags, sub-definitions letter tags with a
/// leading space, and examples repeat the tag of the definition they
/// illustrate. The root word is blanked to `_` in the body so a glance
/// at an example does not spoil the answer; the header line keeps it.
/// A block with neither definitions nor examples renders empty, which
/// the resolver turns into a failed lookup.
pub fn format_info(
    root_word: &str,
    definitions: &[String],
    examples: &[String],
    phonetics: Option<&Pronunciation>,
) -> String {
    if definitions.is_empty() && examples.is_empty() {
        return String::new();
    }

    let mut body = String::new();
    for definition in definitions {
        body.push_str(definition);
        body.push('\n');
    }
    body.push('\n');
    for example in examples {
        body.push_str(example);
        body.push('\n');
    }
    let body = body.replace(root_word, "_");

    let audio_line = match phonetics {
        Some(pron) if !pron.audio_url.is_empty() => {
            format!("Phonetics: {} {}", pron.ipa, pron.audio_url)
        }
        _ => String::new(),
    };
    format!("\n{root_word}\n{audio_line}\n{body}")
}
