//! Sentence-level example search over plain prose.
//!
//! Given one or more target forms of a word, the engine cuts matching
//! sentences out of a text and paints every matched group red. A target
//! written as two tokens ("schlafen ein") is treated as a separable
//! verb: the stem and the detached prefix may sit apart inside the
//! sentence, so three alternative patterns are pooled.

use std::collections::BTreeSet;

use colored::Colorize;
use regex::{Captures, Regex};

/// Find every sentence of `prose` that uses one of `targets`, with the
/// matched words highlighted. Duplicates by rendered text collapse.
///
/// Pure function of its inputs: searching the same pair twice yields
/// the same set.
pub fn find_examples<I, S>(targets: I, prose: &str) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut examples = BTreeSet::new();
    for target in targets {
        let target = target.as_ref().trim();
        if target.is_empty() {
            continue;
        }
        for pattern in sentence_patterns(target) {
            for captures in pattern.captures_iter(prose) {
                if let Some(example) = highlight_groups(&captures) {
                    examples.insert(example);
                }
            }
        }
    }
    examples
}

/// Sentence patterns for one target form.
///
/// A sentence runs from the nearest preceding line start to the next
/// terminal punctuation mark. With a detached prefix, three shapes are
/// tried: stem with the prefix at a clause break, prefix fused onto the
/// stem, and stem with the prefix right before the sentence end.
fn sentence_patterns(target: &str) -> Vec<Regex> {
    let (stem, prefix) = match target.split_once(' ') {
        Some((stem, prefix)) => (stem, prefix),
        None => (target, ""),
    };
    let flags = format!("(?m){}", case_flag(target));
    let stem = regex::escape(stem);
    let prefix = regex::escape(prefix);
    let sources = if prefix.is_empty() {
        vec![format!(r"{flags}^[^.?!]*?\b({stem})\b[^.]*?[.?!]")]
    } else {
        vec![
            format!(r"{flags}^[^.?!]*?\b({stem})\b[\w\s]*?\b({prefix})[,;][^.]*?[.!?]"),
            format!(r"{flags}^[^.?!]*?\b({prefix}{stem})\b[^.]*?[.!?]"),
            format!(r"{flags}^[^.?!]*?\b({stem})\b[\w\s]*?({prefix})[.!?]"),
        ]
    };
    sources.iter().map(|source| compile(source)).collect()
}

/// An all-lowercase target also matches its capitalized sentence-start
/// form; a target with any uppercase letter matches exactly
fn case_flag(target: &str) -> &'static str {
    if target.chars().any(char::is_uppercase) {
        ""
    } else {
        "(?i)"
    }
}

/// Compile a pattern built from escaped fragments. Invalid syntax can
/// only come from a broken template, so it panics.
fn compile(source: &str) -> Regex {
    match Regex::new(source) {
        Ok(pattern) => pattern,
        Err(err) => panic!("bad pattern {source:?}: {err}"),
    }
}

/// The full match with each capture group wrapped in red, rebuilt in
/// one pass over the group spans so surrounding text stays untouched
fn highlight_groups(captures: &Captures<'_>) -> Option<String> {
    let whole = captures.get(0)?;
    let text = whole.as_str();
    let base = whole.start();
    let mut spans: Vec<(usize, usize)> = (1..captures.len())
        .filter_map(|index| captures.get(index))
        .map(|group| (group.start() - base, group.end() - base))
        .collect();
    spans.sort_unstable();

    let mut rendered = String::new();
    let mut cursor = 0;
    for (start, end) in spans {
        if start < cursor {
            continue;
        }
        rendered.push_str(&text[cursor..start]);
        rendered.push_str(&text[start..end].red().to_string());
        cursor = end;
    }
    rendered.push_str(&text[cursor..]);
    Some(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOETHE: &str = "\
Und wenn er zu Mittage schläft,
Sich nicht das Blatt am Zweige regt;
Gesunder Pflanzen Balsamduft
Erfüllt die schweigsam stille Luft;
Die Nymphe darf nicht munter sein,
Und wo sie stand, da schläft sie ein.";

    fn force_color() {
        colored::control::set_override(true);
    }

    #[test]
    fn plain_word_yields_one_sentence() {
        let result = find_examples(["Luft"], GOETHE);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn separable_form_matches_with_both_parts_highlighted() {
        force_color();
        let result = find_examples(["schläft ein"], GOETHE);
        assert_eq!(result.len(), 1);
        let example = result.iter().next().unwrap();
        assert!(example.contains(&"schläft".red().to_string()));
        assert!(example.contains(&"ein".red().to_string()));
        assert!(example.ends_with('.'));
    }

    #[test]
    fn lowercase_target_still_finds_the_capitalized_form() {
        let result = find_examples(["und"], GOETHE);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn repeated_searches_are_identical() {
        let first = find_examples(["schläft ein"], GOETHE);
        let second = find_examples(["schläft ein"], GOETHE);
        assert_eq!(first, second);
    }

    #[test]
    fn every_occurrence_across_sentences_is_found() {
        let prose = "\
Da ich mit der Geschwulst am Halse sehr geplagt war, indem Arzt und \
Chirurgus diese Exkreszenz erst vertreiben, hernach zeitigen wollten, \
so hatte ich mehr an Unbequemlichkeit als an Schmerzen zu leiden.


      Gewalt ist eher mit Gewalt zu vertreiben; aber ein gut gesinntes \
Kind weiß dem Hohn wenig entgegenzusetzen.


      Von euch Schurken keinen Spott!
    Wollt eure dummen Köpf belehren
    Und euren Weibern die Mücken wehren,
    Die ihr nicht gedenkt ihnen zu vertreiben;
    So mögt ihr denn im Dreck bekleiben.";
        let result = find_examples(["vertreiben"], prose);
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn an_inflection_set_pools_all_pattern_kinds() {
        let prose = "\
[1] Warum musst du immer im Kino einschlafen?
[2] Gestern Nacht ist unsere Oma friedlich eingeschlafen.
[3] Wenn ich noch länger knie, schlafen mir die Füße ein.
[4] Über die Jahre ist dann die Beziehung leider eingeschlafen.
[5] Du schläfst mit mir.
";
        let inflections = [
            "schläfst ein",
            "schlaft ein",
            "schlief ein",
            "schlaf ein",
            "schläft ein",
            "eingeschlafen",
            "schliefe ein",
            "schlafe ein",
            "schlafen ein",
        ];
        let result = find_examples(inflections, prose);
        // fused form in [1], plain participle in [2] and [4], detached
        // prefix in [3]; [5] has no prefix and stays out
        assert_eq!(result.len(), 4);
        assert!(!result.iter().any(|example| example.contains("[5]")));
    }

    #[test]
    fn empty_targets_contribute_nothing() {
        let result = find_examples(["", "  "], GOETHE);
        assert!(result.is_empty());
    }

    #[test]
    fn no_partial_word_matches() {
        let result = find_examples(["Balsam"], GOETHE);
        assert!(result.is_empty());
    }
}
