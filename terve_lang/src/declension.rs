// Noun declension: ten grammatical cases across six noun classes.
//
// Nominative is the identity transform. Every other case builds on the
// class stem (stem.rs) and the harmony vowel computed once from the
// nominative. The locative cases share fixed consonant pairs (ss/st,
// ll/lt) plus the harmony vowel; genitive, partitive, and illative branch
// per class. Accusative aliases genitive.
//
// Class V restores the strong grade where the weak de stem would be wrong:
// illative käteen and partitive kättä come from the te stem, genitive and
// the locatives stay on käde.

use std::collections::BTreeMap;

use crate::gradation::gradate;
use crate::harmony::{harmony_vowel, is_vowel};
use crate::stem::{noun_stem, noun_stem_strong};
use crate::types::{NounCase, NounClass};

/// The nine cases of the full declension table, in display order.
/// Accusative is omitted: its surface form duplicates the genitive.
const TABLE_CASES: [NounCase; 9] = [
    NounCase::Nominative,
    NounCase::Genitive,
    NounCase::Partitive,
    NounCase::Inessive,
    NounCase::Elative,
    NounCase::Illative,
    NounCase::Adessive,
    NounCase::Ablative,
    NounCase::Allative,
];

/// Decline a noun into the given case.
pub fn decline(nominative: &str, class: NounClass, case: NounCase) -> String {
    let stem = noun_stem(nominative, class);
    let a = harmony_vowel(nominative);

    match case {
        NounCase::Nominative => nominative.to_string(),
        NounCase::Genitive | NounCase::Accusative => genitive(&stem, class),
        NounCase::Partitive => partitive(nominative, &stem, class, a),
        NounCase::Inessive => format!("{stem}ss{a}"),
        NounCase::Elative => format!("{stem}st{a}"),
        NounCase::Illative => illative(nominative, &stem, class, a),
        NounCase::Adessive => format!("{stem}ll{a}"),
        NounCase::Ablative => format!("{stem}lt{a}"),
        NounCase::Allative => format!("{stem}lle"),
    }
}

/// The full case table for a noun, keyed by case in display order
/// (`NounCase`'s derived `Ord` follows declaration order).
pub fn decline_all(nominative: &str, class: NounClass) -> BTreeMap<NounCase, String> {
    TABLE_CASES
        .iter()
        .map(|&case| (case, decline(nominative, class, case)))
        .collect()
}

fn genitive(stem: &str, class: NounClass) -> String {
    match class {
        // lintu-type words take the weak grade: kadun.
        NounClass::II => format!("{}n", gradate(stem, true)),
        // nainen → naisen.
        NounClass::IV => format!("{stem}en"),
        _ => format!("{stem}n"),
    }
}

fn partitive(nominative: &str, stem: &str, class: NounClass, a: char) -> String {
    match class {
        NounClass::I => {
            if ends_in_vowel(nominative) {
                format!("{nominative}{a}")
            } else {
                format!("{nominative}t{a}")
            }
        }
        NounClass::II => format!("{nominative}{a}"),
        // Consonant-final and mutated stems take t + harmony: sydäntä,
        // naista, yötä.
        NounClass::III | NounClass::IV | NounClass::VI => format!("{stem}t{a}"),
        NounClass::V => {
            // Geminated consonant stem: käsi → kättä.
            let strong = noun_stem_strong(nominative);
            match strong.strip_suffix('e') {
                Some(base) => format!("{base}t{a}"),
                None => format!("{strong}t{a}"),
            }
        }
    }
}

fn illative(nominative: &str, stem: &str, class: NounClass, a: char) -> String {
    match class {
        NounClass::I => doubled_vowel_or(nominative, "iin"),
        NounClass::II => doubled_vowel_or(nominative, "un"),
        NounClass::III => format!("{nominative}een"),
        NounClass::IV => format!("{stem}een"),
        // Strong grade: käsi → käteen.
        NounClass::V => format!("{}en", noun_stem_strong(nominative)),
        NounClass::VI => format!("{stem}h{a}n"),
    }
}

/// Double a final vowel and append n (talo → taloon); fall back to the
/// class ending for consonant-final words.
fn doubled_vowel_or(nominative: &str, fallback: &str) -> String {
    match nominative.chars().last() {
        Some(last) if is_vowel(last) => format!("{nominative}{last}n"),
        _ => format!("{nominative}{fallback}"),
    }
}

fn ends_in_vowel(word: &str) -> bool {
    word.chars().last().is_some_and(is_vowel)
}
