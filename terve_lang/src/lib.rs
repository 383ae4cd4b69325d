// terve_lang — deterministic Finnish morphology engine.
//
// Given a canonical dictionary form (verb infinitive or noun nominative)
// and its inflection class, generates fully inflected surface forms across
// ten verb tense/mood/polarity categories and ten noun cases. Consumed by
// the dictionary/repository and quiz layers; this crate itself does no
// I/O, holds no state, and uses no randomness — every operation is a pure
// function of its inputs.
//
// Architecture:
// - `types.rs`:       Closed enums — `VerbClass`, `NounClass`, `Tense`,
//                     `NounCase`, `CefrLevel` — plus lexicon entry structs
// - `harmony.rs`:     Vowel harmony resolution (a/ä, o/ö suffix variants)
// - `gradation.rs`:   Consonant gradation (kk/pp/tt, k/p/t weak grades)
// - `stem.rs`:        Per-class stem extraction from canonical forms
// - `conjugation.rs`: Verb conjugation across all tense categories
// - `declension.rs`:  Noun declension across all cases
// - `lib.rs` (this file): `Lexicon` — loads and queries the JSON vocabulary
//
// The vocabulary is loaded from `data/sanasto.json` via
// `Lexicon::from_json()` (JSON string in, typed struct out); the
// `default_lexicon()` convenience function embeds the seed vocabulary at
// compile time with `include_str!`.
//
// Error-handling policy: the morphology operations are total — degenerate
// inputs (too-short forms, out-of-range person) fall back to the canonical
// form rather than failing. The only fallible surface is JSON parsing.

pub mod conjugation;
pub mod declension;
pub mod gradation;
pub mod harmony;
pub mod stem;
pub mod types;

// Re-export key operations and types at crate root for convenience.
pub use conjugation::{conjugate, conjugate_all, past_participle};
pub use declension::{decline, decline_all};
pub use harmony::{harmony_rounded_vowel, harmony_vowel};
pub use types::{CefrLevel, NounCase, NounClass, NounEntry, Tense, VerbClass, VerbEntry};

use types::{NounEntry as Noun, VerbEntry as Verb};

/// The top-level JSON structure of the vocabulary file.
#[derive(Debug, serde::Deserialize)]
struct LexiconFile {
    verbs: Vec<Verb>,
    nouns: Vec<Noun>,
}

/// A loaded Finnish vocabulary with query methods.
///
/// Constructed from JSON via `from_json()`. Preserves entry order from the
/// file for deterministic iteration in quiz and table generation.
#[derive(Debug, Clone)]
pub struct Lexicon {
    verbs: Vec<Verb>,
    nouns: Vec<Noun>,
}

impl Lexicon {
    /// Parse a vocabulary from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let file: LexiconFile = serde_json::from_str(json)?;
        Ok(Lexicon {
            verbs: file.verbs,
            nouns: file.nouns,
        })
    }

    /// All verb entries, in file order.
    pub fn verbs(&self) -> &[VerbEntry] {
        &self.verbs
    }

    /// All noun entries, in file order.
    pub fn nouns(&self) -> &[NounEntry] {
        &self.nouns
    }

    /// Look up a verb by its infinitive.
    pub fn find_verb(&self, infinitive: &str) -> Option<&VerbEntry> {
        self.verbs.iter().find(|v| v.infinitive == infinitive)
    }

    /// Look up a noun by its nominative.
    pub fn find_noun(&self, nominative: &str) -> Option<&NounEntry> {
        self.nouns.iter().find(|n| n.nominative == nominative)
    }

    /// Verb entries at a given CEFR level.
    pub fn verbs_at_level(&self, level: CefrLevel) -> Vec<&VerbEntry> {
        self.verbs.iter().filter(|v| v.level == level).collect()
    }

    /// Noun entries at a given CEFR level.
    pub fn nouns_at_level(&self, level: CefrLevel) -> Vec<&NounEntry> {
        self.nouns.iter().filter(|n| n.level == level).collect()
    }
}

/// Load the default vocabulary embedded at compile time.
///
/// Uses `include_str!` to embed `data/sanasto.json`. Panics if the embedded
/// JSON is malformed (should never happen in a released build).
pub fn default_lexicon() -> Lexicon {
    let json = include_str!("../../data/sanasto.json");
    Lexicon::from_json(json).expect("embedded sanasto.json is malformed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicon_from_json() {
        let json = r#"{
            "verbs": [
                { "infinitive": "puhua", "class": "i", "translation": "to speak", "level": "a2" }
            ],
            "nouns": [
                { "nominative": "talo", "class": "i", "translation": "house", "level": "a1" },
                { "nominative": "käsi", "class": "v", "translation": "hand", "level": "a1" }
            ]
        }"#;

        let lexicon = Lexicon::from_json(json).unwrap();
        assert_eq!(lexicon.verbs().len(), 1);
        assert_eq!(lexicon.nouns().len(), 2);
    }

    #[test]
    fn test_lexicon_rejects_malformed_json() {
        assert!(Lexicon::from_json("{").is_err());
        assert!(Lexicon::from_json(r#"{"verbs": []}"#).is_err());
    }

    #[test]
    fn test_lexicon_find() {
        let lexicon = default_lexicon();
        let verb = lexicon.find_verb("puhua").expect("puhua should be seeded");
        assert_eq!(verb.class, VerbClass::I);
        let noun = lexicon.find_noun("käsi").expect("käsi should be seeded");
        assert_eq!(noun.class, NounClass::V);
        assert!(lexicon.find_verb("olematon").is_none());
    }

    #[test]
    fn test_lexicon_preserves_order() {
        let json = r#"{
            "verbs": [
                { "infinitive": "sanoa", "class": "i", "translation": "to say", "level": "a1" },
                { "infinitive": "tulla", "class": "iii", "translation": "to come", "level": "a1" }
            ],
            "nouns": []
        }"#;

        let lexicon = Lexicon::from_json(json).unwrap();
        assert_eq!(lexicon.verbs()[0].infinitive, "sanoa");
        assert_eq!(lexicon.verbs()[1].infinitive, "tulla");
    }

    #[test]
    fn test_default_lexicon_loads() {
        let lexicon = default_lexicon();
        assert!(
            lexicon.verbs().len() >= 25,
            "Expected >= 25 verbs, got {}",
            lexicon.verbs().len()
        );
        assert!(
            lexicon.nouns().len() >= 25,
            "Expected >= 25 nouns, got {}",
            lexicon.nouns().len()
        );
    }

    #[test]
    fn test_default_lexicon_covers_all_classes() {
        let lexicon = default_lexicon();
        for class in [
            VerbClass::I,
            VerbClass::II,
            VerbClass::III,
            VerbClass::IV,
            VerbClass::V,
            VerbClass::VI,
        ] {
            assert!(
                lexicon.verbs().iter().any(|v| v.class == class),
                "No seeded verb for class {class:?}"
            );
        }
        for class in [
            NounClass::I,
            NounClass::II,
            NounClass::III,
            NounClass::IV,
            NounClass::V,
            NounClass::VI,
        ] {
            assert!(
                lexicon.nouns().iter().any(|n| n.class == class),
                "No seeded noun for class {class:?}"
            );
        }
    }

    #[test]
    fn test_level_filters() {
        let lexicon = default_lexicon();
        let a1_verbs = lexicon.verbs_at_level(CefrLevel::A1);
        assert!(!a1_verbs.is_empty(), "Should have A1 verbs");
        assert!(a1_verbs.iter().all(|v| v.level == CefrLevel::A1));
        let b1_nouns = lexicon.nouns_at_level(CefrLevel::B1);
        assert!(b1_nouns.iter().all(|n| n.level == CefrLevel::B1));
    }

    #[test]
    fn test_entry_convenience_methods() {
        let lexicon = default_lexicon();
        let verb = lexicon.find_verb("tulla").unwrap();
        assert_eq!(verb.conjugate_all(Tense::Present)[2], "tulee");
        let noun = lexicon.find_noun("talo").unwrap();
        assert_eq!(noun.decline_all()[&NounCase::Genitive], "talon");
    }
}
