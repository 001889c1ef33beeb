//! Separable verb prefixes and the stem/prefix split.

/// Separable verb prefixes, longer ones first so that a compound
/// prefix wins over its own tail ("auseinander" before "aus")
pub const SEPARABLE_PREFIXES: [&str; 46] = [
    "auseinander",
    "gegenüber",
    "hinterher",
    "entgegen",
    "zusammen",
    "herunter",
    "entlang",
    "zurecht",
    "entzwei",
    "herüber",
    "weiter",
    "runter",
    "nieder",
    "herauf",
    "heraus",
    "herbei",
    "herein",
    "hervor",
    "gegen",
    "rüber",
    "empor",
    "herab",
    "heran",
    "herum",
    "nach",
    "rein",
    "raus",
    "hoch",
    "fern",
    "fest",
    "fort",
    "heim",
    "auf",
    "aus",
    "bei",
    "ein",
    "mit",
    "vor",
    "hin",
    "her",
    "los",
    "weg",
    "an",
    "ab",
    "da",
    "zu",
];

/// Split a verb into its separable prefix and stem, if it carries one.
/// "einschlafen" becomes `("ein", "schlafen")`; a verb without a known
/// prefix, or with nothing left behind it, yields `None`.
pub fn split_separable(verb: &str) -> Option<(&'static str, String)> {
    for prefix in SEPARABLE_PREFIXES {
        if let Some(rest) = verb.strip_prefix(prefix) {
            let stem: String = rest
                .chars()
                .take_while(|c| c.is_alphanumeric() || *c == '_')
                .collect();
            if !stem.is_empty() {
                return Some((prefix, stem));
            }
        }
    }
    None
}

/// Rewrite a single-token separable infinitive into the detached
/// "stem prefix" form the example search understands; anything else
/// passes through unchanged
pub fn search_targets(word: &str) -> String {
    if word.contains(' ') {
        return word.to_owned();
    }
    match split_separable(word) {
        Some((prefix, stem)) => format!("{stem} {prefix}"),
        None => word.to_owned(),
    }
}
