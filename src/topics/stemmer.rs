// Suffix-stripping stemmer for Russian word forms.
//
// Collapses case, number, tense and adjective agreement so "лечение",
// "лечения" and "лечить" land near the same root. Only the region after the
// first vowel is ever touched; the prefix up to and including that vowel is
// kept verbatim.
//
// Suffix lists are scanned in declared order and the FIRST entry that matches
// is removed, not the longest. Reordering a list changes classification
// output.

use tracing::trace;

const VOWELS: &[char] = &['а', 'е', 'и', 'о', 'у', 'ы', 'э', 'ю', 'я'];

const PERFECTIVE_GERUND: &[&str] = &["ив", "ивши", "ившись", "ыв", "ывши", "ывшись"];

const ADJECTIVE: &[&str] = &[
    "ее", "ие", "ые", "ое", "ими", "ыми", "ей", "ий", "ый", "ой", "ем", "им", "ым", "ом", "его",
    "ого", "ему", "ому", "их", "ых", "ую", "юю", "ая", "яя", "ою", "ею",
];

const VERB: &[&str] = &[
    "ла", "на", "ете", "йте", "ли", "й", "л", "ем", "н", "ло", "но", "ет", "ют", "ны", "ть", "ешь",
    "нно",
];

const NOUN: &[&str] = &[
    "а", "ев", "ов", "ие", "ье", "е", "иями", "ями", "ами", "еи", "ии", "и", "ией", "ей", "ой",
    "ий", "й", "иям", "ям", "ием", "ем", "ам", "ом", "о", "у", "ах", "иях", "ях", "ы", "ь", "ию",
    "ью", "ю", "ия", "ья", "я",
];

const SOFT_SIGN: char = 'ь';

/// Reduce `word` to its root. Pure and total: every input yields a result.
///
/// The input is trimmed and lower-cased first. Words shorter than three
/// characters, and words with no vowel followed by at least one more
/// character, come back otherwise unchanged.
pub fn stem(word: &str) -> String {
    let word = word.trim().to_lowercase();
    if word.chars().count() < 3 {
        return word;
    }

    let Some(rv_start) = invariant_region_start(&word) else {
        return word;
    };
    let (prefix, rv) = word.split_at(rv_start);

    let mut stemmed = match strip_first(rv, PERFECTIVE_GERUND) {
        Some(stripped) => stripped,
        None => {
            let after_adjective = strip_first(rv, ADJECTIVE).unwrap_or(rv);
            let after_verb = strip_first(after_adjective, VERB).unwrap_or(after_adjective);
            strip_first(after_verb, NOUN).unwrap_or(after_verb)
        }
    };

    if let Some(without_soft_sign) = stemmed.strip_suffix(SOFT_SIGN) {
        stemmed = without_soft_sign;
    }

    let result = format!("{prefix}{stemmed}");
    trace!(word = %word, stem = %result, "Stemmed");
    result
}

/// Byte offset of the region right after the first vowel that still has a
/// character following it. `None` when no such vowel exists.
fn invariant_region_start(word: &str) -> Option<usize> {
    word.char_indices()
        .filter(|(_, c)| VOWELS.contains(c))
        .map(|(i, c)| i + c.len_utf8())
        .find(|&next| next < word.len())
}

/// Remove the first suffix in `suffixes` that `region` ends with.
fn strip_first<'a>(region: &'a str, suffixes: &[&str]) -> Option<&'a str> {
    suffixes
        .iter()
        .find_map(|suffix| region.strip_suffix(*suffix))
}
