// Core Finnish grammar types: inflection classes, tense categories, cases,
// and lexicon entries.
//
// These are the closed enumerations that cross the engine boundary — no
// free-form strings select a class, tense, or case. Each enum carries a
// `name()` for display in quiz tables and API payloads.
//
// The type hierarchy is:
// - `VerbClass` — the six verbityypit (I: -a/-ä, II: -da/-dä, III: -lla/-nna/
//   -rra/-sta, IV: -ata/-ätä, V: -ita/-itä, VI: -eta/-etä)
// - `NounClass` — the six declension patterns (I/II vowel stems, III
//   consonant stems, IV -nen words, V -si/-ti words, VI special stems)
// - `Tense` — ten tense/mood/polarity categories
// - `NounCase` — ten grammatical cases; declaration order is the display
//   order, and the derived `Ord` preserves it for `decline_all`
// - `CefrLevel` — vocabulary difficulty band for lexicon filtering
// - `VerbEntry` / `NounEntry` — JSON-loadable vocabulary entries
//
// Determinism constraint: the engine is a pure function of these inputs.
// Nothing here holds mutable state.

use serde::{Deserialize, Serialize};

/// Finnish verb conjugation class (verbityyppi 1–6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerbClass {
    /// -a/-ä verbs: puhua, sanoa.
    I,
    /// -da/-dä verbs: syödä, juoda.
    II,
    /// -lla/-llä, -nna/-nnä, -rra/-rrä, -sta/-stä verbs: tulla, mennä.
    III,
    /// -ata/-ätä verbs: tavata, haluta.
    IV,
    /// -ita/-itä verbs: tarvita, valita.
    V,
    /// -eta/-etä verbs: vanheta, kylmetä.
    VI,
}

/// Finnish noun declension class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NounClass {
    /// Simple vowel stems: talo, kirja.
    I,
    /// Vowel stems with consonant gradation: katu, lintu.
    II,
    /// Consonant stems: sydän.
    III,
    /// -nen words: nainen, suomalainen.
    IV,
    /// -si/-ti words with a -de- stem: käsi, vesi.
    V,
    /// Long-vowel and special stems: maa, yö.
    VI,
}

/// Verb tense/mood/polarity category.
///
/// The five affirmative categories each have a negative counterpart built
/// on the negation verb (en/et/ei/emme/ette/eivät).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tense {
    Present,
    Imperfect,
    Perfect,
    Imperative,
    Conditional,
    NegativePresent,
    NegativeImperfect,
    NegativePerfect,
    NegativeImperative,
    NegativeConditional,
}

impl Tense {
    /// English display name of the tense category.
    pub fn name(self) -> &'static str {
        match self {
            Tense::Present => "present",
            Tense::Imperfect => "imperfect",
            Tense::Perfect => "perfect",
            Tense::Imperative => "imperative",
            Tense::Conditional => "conditional",
            Tense::NegativePresent => "negative present",
            Tense::NegativeImperfect => "negative imperfect",
            Tense::NegativePerfect => "negative perfect",
            Tense::NegativeImperative => "negative imperative",
            Tense::NegativeConditional => "negative conditional",
        }
    }

    /// Whether this category inflects as an imperative (5 person forms
    /// instead of 6).
    pub fn is_imperative(self) -> bool {
        matches!(self, Tense::Imperative | Tense::NegativeImperative)
    }
}

/// Finnish grammatical case.
///
/// Declaration order is the canonical table order. Accusative aliases
/// genitive and is skipped by `decline_all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NounCase {
    /// Basic form: talo.
    Nominative,
    /// Possession: talon.
    Genitive,
    /// Partial object: taloa.
    Partitive,
    /// Total object; same surface form as genitive: talon.
    Accusative,
    /// "In": talossa.
    Inessive,
    /// "Out of": talosta.
    Elative,
    /// "Into": taloon.
    Illative,
    /// "At/on": talolla.
    Adessive,
    /// "From": talolta.
    Ablative,
    /// "To/onto": talolle.
    Allative,
}

impl NounCase {
    /// English display name of the case.
    pub fn name(self) -> &'static str {
        match self {
            NounCase::Nominative => "nominative",
            NounCase::Genitive => "genitive",
            NounCase::Partitive => "partitive",
            NounCase::Accusative => "accusative",
            NounCase::Inessive => "inessive",
            NounCase::Elative => "elative",
            NounCase::Illative => "illative",
            NounCase::Adessive => "adessive",
            NounCase::Ablative => "ablative",
            NounCase::Allative => "allative",
        }
    }
}

/// CEFR difficulty band for a vocabulary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CefrLevel {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

/// A JSON-loadable verb vocabulary entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerbEntry {
    /// Dictionary form: the infinitive.
    pub infinitive: String,
    /// Conjugation class.
    pub class: VerbClass,
    /// English translation.
    pub translation: String,
    /// CEFR difficulty band.
    pub level: CefrLevel,
}

impl VerbEntry {
    /// All person forms of this verb in the given tense category.
    pub fn conjugate_all(&self, tense: Tense) -> Vec<String> {
        crate::conjugation::conjugate_all(&self.infinitive, self.class, tense)
    }
}

/// A JSON-loadable noun vocabulary entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NounEntry {
    /// Dictionary form: the nominative singular.
    pub nominative: String,
    /// Declension class.
    pub class: NounClass,
    /// English translation.
    pub translation: String,
    /// CEFR difficulty band.
    pub level: CefrLevel,
}

impl NounEntry {
    /// The full case table for this noun.
    pub fn decline_all(&self) -> std::collections::BTreeMap<NounCase, String> {
        crate::declension::decline_all(&self.nominative, self.class)
    }
}
