// Stem extraction: strip or transform a canonical form's class ending.
//
// Each inflection class fixes how many trailing characters to remove from
// the dictionary form to reach the working stem. Two noun classes replace
// rather than truncate: -nen words swap the ending for s (nainen → nais),
// -si/-ti words swap it for the weak de stem (käsi → käde). A form not
// strictly longer than its expected ending passes through unmodified — the
// guard against invalid truncation, never an error.

use crate::types::{NounClass, VerbClass};

/// The working stem of a verb infinitive.
///
/// Class I drops the final vowel (puhua → puhu); classes II–VI drop the
/// two-character infinitive ending (syödä → syö, tulla → tul, tavata →
/// tava, tarvita → tarvi, vanheta → vanhe).
pub fn verb_stem(infinitive: &str, class: VerbClass) -> String {
    let drop = match class {
        VerbClass::I => 1,
        _ => 2,
    };
    truncated(infinitive, drop)
}

/// The working stem of a noun nominative.
///
/// Classes I, II, III, and VI keep the nominative as-is; class IV replaces
/// a trailing `nen` with `s`; class V replaces a trailing `si`/`ti` with
/// the weak stem `de`.
pub fn noun_stem(nominative: &str, class: NounClass) -> String {
    match class {
        NounClass::IV if nominative.ends_with("nen") && char_len(nominative) > 3 => {
            let mut stem = truncated(nominative, 3);
            stem.push('s');
            stem
        }
        NounClass::V if ends_si_or_ti(nominative) => {
            let mut stem = truncated(nominative, 2);
            stem.push_str("de");
            stem
        }
        _ => nominative.to_string(),
    }
}

/// The strong-grade stem of a class V noun: trailing `si`/`ti` replaced by
/// `te` (käsi → käte). Feeds the illative and partitive, which restore the
/// strong grade the weak `de` stem lacks.
pub fn noun_stem_strong(nominative: &str) -> String {
    if ends_si_or_ti(nominative) {
        let mut stem = truncated(nominative, 2);
        stem.push_str("te");
        stem
    } else {
        nominative.to_string()
    }
}

fn ends_si_or_ti(nominative: &str) -> bool {
    (nominative.ends_with("si") || nominative.ends_with("ti")) && char_len(nominative) > 2
}

/// The word with its last `drop` characters removed, or unchanged when it
/// is not strictly longer than `drop`.
fn truncated(word: &str, drop: usize) -> String {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() > drop {
        chars[..chars.len() - drop].iter().collect()
    } else {
        word.to_string()
    }
}

fn char_len(word: &str) -> usize {
    word.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verb_stem_class_i() {
        assert_eq!(verb_stem("puhua", VerbClass::I), "puhu");
        assert_eq!(verb_stem("sanoa", VerbClass::I), "sano");
    }

    #[test]
    fn test_verb_stem_class_ii() {
        assert_eq!(verb_stem("syödä", VerbClass::II), "syö");
        assert_eq!(verb_stem("juoda", VerbClass::II), "juo");
    }

    #[test]
    fn test_verb_stem_class_iii() {
        assert_eq!(verb_stem("tulla", VerbClass::III), "tul");
        assert_eq!(verb_stem("mennä", VerbClass::III), "men");
        assert_eq!(verb_stem("nousta", VerbClass::III), "nous");
    }

    #[test]
    fn test_verb_stem_later_classes() {
        assert_eq!(verb_stem("tavata", VerbClass::IV), "tava");
        assert_eq!(verb_stem("tarvita", VerbClass::V), "tarvi");
        assert_eq!(verb_stem("vanheta", VerbClass::VI), "vanhe");
    }

    #[test]
    fn test_verb_stem_too_short_passes_through() {
        assert_eq!(verb_stem("a", VerbClass::I), "a");
        assert_eq!(verb_stem("da", VerbClass::II), "da");
        assert_eq!(verb_stem("", VerbClass::I), "");
    }

    #[test]
    fn test_noun_stem_identity_classes() {
        assert_eq!(noun_stem("talo", NounClass::I), "talo");
        assert_eq!(noun_stem("lintu", NounClass::II), "lintu");
        assert_eq!(noun_stem("sydän", NounClass::III), "sydän");
        assert_eq!(noun_stem("maa", NounClass::VI), "maa");
    }

    #[test]
    fn test_noun_stem_nen_replacement() {
        assert_eq!(noun_stem("nainen", NounClass::IV), "nais");
        assert_eq!(noun_stem("suomalainen", NounClass::IV), "suomalais");
    }

    #[test]
    fn test_noun_stem_si_ti_replacement() {
        assert_eq!(noun_stem("käsi", NounClass::V), "käde");
        assert_eq!(noun_stem("vesi", NounClass::V), "vede");
        assert_eq!(noun_stem("lehti", NounClass::V), "lehde");
    }

    #[test]
    fn test_noun_stem_strong() {
        assert_eq!(noun_stem_strong("käsi"), "käte");
        assert_eq!(noun_stem_strong("vesi"), "vete");
        // Non -si/-ti words pass through.
        assert_eq!(noun_stem_strong("talo"), "talo");
    }

    #[test]
    fn test_noun_stem_wrong_ending_passes_through() {
        // Class tag says -nen/-si but the ending disagrees: no truncation.
        assert_eq!(noun_stem("talo", NounClass::IV), "talo");
        assert_eq!(noun_stem("talo", NounClass::V), "talo");
    }

    #[test]
    fn test_noun_stem_too_short_passes_through() {
        assert_eq!(noun_stem("nen", NounClass::IV), "nen");
        assert_eq!(noun_stem("si", NounClass::V), "si");
    }
}
