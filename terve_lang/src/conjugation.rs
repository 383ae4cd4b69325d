// Verb conjugation: all person forms across ten tense/mood/polarity
// categories and six verb classes.
//
// Every category is assembled from the same primitives: the class stem
// (stem.rs), the harmony vowel (harmony.rs), and for class I the weak
// grade (gradation.rs). The harmony vowel is computed once per call from
// the infinitive and reused for every suffix.
//
// Form order is minä, sinä, hän, me, te, he for every category except the
// imperatives, which carry five forms in the order 2sg, 2pl, 1pl, 3sg,
// 3pl. Compound categories (perfect, all negatives) pair a person-inflected
// auxiliary with an uninflected participle or connegative.

use crate::gradation::gradate;
use crate::harmony::{harmony_rounded_vowel, harmony_vowel};
use crate::stem::verb_stem;
use crate::types::{Tense, VerbClass};

/// Pronouns matching the six-element form order.
pub const PERSONS: [&str; 6] = ["minä", "sinä", "hän", "me", "te", "he"];

/// Pronouns matching the five-element imperative form order.
pub const IMPERATIVE_PERSONS: [&str; 5] = ["sinä", "te", "me", "hän", "he"];

/// Person-inflected "olla" auxiliary for the perfect tense.
pub const PERFECT_AUXILIARY: [&str; 6] = ["olen", "olet", "on", "olemme", "olette", "ovat"];

/// Person-inflected negation verb.
pub const NEGATION: [&str; 6] = ["en", "et", "ei", "emme", "ette", "eivät"];

/// One conjugated form, selected by person (1–3) and number.
///
/// Indexes `(person - 1) + 3` for plural into the table from
/// [`conjugate_all`]. An out-of-range index — reachable only for the
/// five-element imperative categories — returns the infinitive unmodified.
pub fn conjugate(
    infinitive: &str,
    class: VerbClass,
    tense: Tense,
    person: usize,
    plural: bool,
) -> String {
    let mut forms = conjugate_all(infinitive, class, tense);
    if person == 0 {
        return infinitive.to_string();
    }
    let index = (person - 1) + if plural { 3 } else { 0 };
    if index < forms.len() {
        forms.swap_remove(index)
    } else {
        infinitive.to_string()
    }
}

/// All conjugated forms for a verb in a tense category.
///
/// Six forms (minä..he), except the imperatives, which return five.
pub fn conjugate_all(infinitive: &str, class: VerbClass, tense: Tense) -> Vec<String> {
    match tense {
        Tense::Present => present(infinitive, class),
        Tense::Imperfect => imperfect(infinitive, class),
        Tense::Perfect => perfect(infinitive, class),
        Tense::Imperative => imperative(infinitive, class),
        Tense::Conditional => conditional(infinitive, class),
        Tense::NegativePresent => negative_present(infinitive, class),
        Tense::NegativeImperfect => negative_imperfect(infinitive, class),
        Tense::NegativePerfect => negative_perfect(infinitive, class),
        Tense::NegativeImperative => negative_imperative(infinitive, class),
        Tense::NegativeConditional => negative_conditional(infinitive, class),
    }
}

/// The past participle (puhunut / puhuneet), which feeds the perfect tense
/// and the negated past categories.
pub fn past_participle(infinitive: &str, class: VerbClass, plural: bool) -> String {
    let stem = verb_stem(infinitive, class);
    let u = if harmony_vowel(infinitive) == 'a' { 'u' } else { 'y' };

    match class {
        VerbClass::I | VerbClass::II => {
            if plural {
                format!("{stem}neet")
            } else {
                format!("{stem}n{u}t")
            }
        }
        VerbClass::III => {
            // Final stem consonant doubles: tul → tullut / tulleet.
            let Some(last) = stem.chars().last() else {
                return stem;
            };
            if plural {
                format!("{stem}{last}eet")
            } else {
                format!("{stem}{last}{u}t")
            }
        }
        VerbClass::IV | VerbClass::V | VerbClass::VI => {
            // -n- infix: tava → tavannut, tarvi → tarvinnut.
            if plural {
                format!("{stem}nneet")
            } else {
                format!("{stem}nn{u}t")
            }
        }
    }
}

/// Personal endings attached to a tense-marked base: n, t, the bare third
/// person, mme, tte, v{a|ä}t.
fn person_forms(base: &str, third: String, a: char) -> Vec<String> {
    vec![
        format!("{base}n"),
        format!("{base}t"),
        third,
        format!("{base}mme"),
        format!("{base}tte"),
        format!("{base}v{a}t"),
    ]
}

fn present(infinitive: &str, class: VerbClass) -> Vec<String> {
    let stem = verb_stem(infinitive, class);
    let a = harmony_vowel(infinitive);

    match class {
        VerbClass::I => {
            // Weak grade everywhere except the 3rd person, which keeps the
            // strong stem: puhun, puhut, puhuu, puhumme, puhutte, puhuvat.
            let weak = gradate(&stem, true);
            let third = match stem.chars().last() {
                Some(last) => format!("{stem}{last}"),
                None => stem.clone(),
            };
            vec![
                format!("{weak}n"),
                format!("{weak}t"),
                third,
                format!("{weak}mme"),
                format!("{weak}tte"),
                format!("{stem}v{a}t"),
            ]
        }
        VerbClass::II => {
            // Stem already ends in a long vowel or diphthong: syön, syö.
            let third = stem.clone();
            person_forms(&stem, third, a)
        }
        VerbClass::III => {
            // -e- insertion: tulen, tulee.
            let base = format!("{stem}e");
            let third = format!("{base}e");
            person_forms(&base, third, a)
        }
        VerbClass::IV => {
            // Harmony vowel insertion, doubled in the 3rd singular:
            // haluan, haluaa.
            let base = format!("{stem}{a}");
            let third = format!("{base}{a}");
            person_forms(&base, third, a)
        }
        VerbClass::V => {
            // -tse- insertion: tarvitsen, tarvitsee.
            let base = format!("{stem}tse");
            let third = format!("{base}e");
            person_forms(&base, third, a)
        }
        VerbClass::VI => {
            // -ne- insertion: vanhenen, vanhenee.
            let base = format!("{stem}ne");
            let third = format!("{base}e");
            person_forms(&base, third, a)
        }
    }
}

/// The simple-past marker stem: puhu → puhui, halua → haluasi.
fn imperfect_stem(infinitive: &str, class: VerbClass) -> String {
    let stem = verb_stem(infinitive, class);
    let a = harmony_vowel(infinitive);
    match class {
        VerbClass::I => format!("{}i", gradate(&stem, true)),
        VerbClass::II | VerbClass::III => format!("{stem}i"),
        VerbClass::IV => format!("{stem}{a}si"),
        VerbClass::V => format!("{stem}tsi"),
        VerbClass::VI => format!("{stem}ni"),
    }
}

fn imperfect(infinitive: &str, class: VerbClass) -> Vec<String> {
    let base = imperfect_stem(infinitive, class);
    let a = harmony_vowel(infinitive);
    let third = base.clone();
    person_forms(&base, third, a)
}

/// The conditional marker stem: puhu → puhuisi, tarvi → tarvitsisi.
fn conditional_stem(infinitive: &str, class: VerbClass) -> String {
    let stem = verb_stem(infinitive, class);
    let a = harmony_vowel(infinitive);
    match class {
        VerbClass::I => format!("{}isi", gradate(&stem, true)),
        VerbClass::II | VerbClass::III => format!("{stem}isi"),
        VerbClass::IV => format!("{stem}{a}isi"),
        VerbClass::V => format!("{stem}tsisi"),
        VerbClass::VI => format!("{stem}nisi"),
    }
}

fn conditional(infinitive: &str, class: VerbClass) -> Vec<String> {
    let base = conditional_stem(infinitive, class);
    let a = harmony_vowel(infinitive);
    let third = base.clone();
    person_forms(&base, third, a)
}

fn perfect(infinitive: &str, class: VerbClass) -> Vec<String> {
    let singular = past_participle(infinitive, class, false);
    let plural = past_participle(infinitive, class, true);
    PERFECT_AUXILIARY
        .iter()
        .enumerate()
        .map(|(i, aux)| {
            let participle = if i < 3 { &singular } else { &plural };
            format!("{aux} {participle}")
        })
        .collect()
}

/// The connegative stem: the present 2nd-person singular without its
/// ending. Doubles as the bare 2sg imperative.
fn connegative_stem(infinitive: &str, class: VerbClass) -> String {
    let stem = verb_stem(infinitive, class);
    let a = harmony_vowel(infinitive);
    match class {
        VerbClass::I => gradate(&stem, true),
        VerbClass::II => stem,
        VerbClass::III => format!("{stem}e"),
        VerbClass::IV => format!("{stem}{a}"),
        VerbClass::V => format!("{stem}tse"),
        VerbClass::VI => format!("{stem}ne"),
    }
}

/// The stem the plural and 3rd-person imperative markers attach to:
/// bare stem for classes I–III (tulkaa), stem + t for IV–VI (tavatkaa).
fn command_stem(infinitive: &str, class: VerbClass) -> String {
    let stem = verb_stem(infinitive, class);
    match class {
        VerbClass::I | VerbClass::II | VerbClass::III => stem,
        VerbClass::IV | VerbClass::V | VerbClass::VI => format!("{stem}t"),
    }
}

fn imperative(infinitive: &str, class: VerbClass) -> Vec<String> {
    let conneg = connegative_stem(infinitive, class);
    let cmd = command_stem(infinitive, class);
    let a = harmony_vowel(infinitive);
    let o = harmony_rounded_vowel(infinitive);
    vec![
        format!("{conneg}!"),
        format!("{cmd}k{a}{a}!"),
        format!("{cmd}k{a}{a}mme!"),
        format!("{cmd}k{o}{o}n!"),
        format!("{cmd}k{o}{o}t!"),
    ]
}

fn negative_present(infinitive: &str, class: VerbClass) -> Vec<String> {
    let conneg = connegative_stem(infinitive, class);
    NEGATION.iter().map(|aux| format!("{aux} {conneg}")).collect()
}

fn negative_imperfect(infinitive: &str, class: VerbClass) -> Vec<String> {
    let singular = past_participle(infinitive, class, false);
    let plural = past_participle(infinitive, class, true);
    NEGATION
        .iter()
        .enumerate()
        .map(|(i, aux)| {
            let participle = if i < 3 { &singular } else { &plural };
            format!("{aux} {participle}")
        })
        .collect()
}

fn negative_perfect(infinitive: &str, class: VerbClass) -> Vec<String> {
    let singular = past_participle(infinitive, class, false);
    let plural = past_participle(infinitive, class, true);
    NEGATION
        .iter()
        .enumerate()
        .map(|(i, aux)| {
            let participle = if i < 3 { &singular } else { &plural };
            format!("{aux} ole {participle}")
        })
        .collect()
}

fn negative_imperative(infinitive: &str, class: VerbClass) -> Vec<String> {
    let conneg = connegative_stem(infinitive, class);
    let cmd = command_stem(infinitive, class);
    let o = harmony_rounded_vowel(infinitive);
    vec![
        format!("älä {conneg}!"),
        format!("älkää {cmd}k{o}!"),
        format!("älkäämme {cmd}k{o}!"),
        format!("älköön {cmd}k{o}!"),
        format!("älkööt {cmd}k{o}!"),
    ]
}

fn negative_conditional(infinitive: &str, class: VerbClass) -> Vec<String> {
    let conneg = conditional_stem(infinitive, class);
    NEGATION.iter().map(|aux| format!("{aux} {conneg}")).collect()
}
