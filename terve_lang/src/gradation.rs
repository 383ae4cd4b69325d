// Consonant gradation: the strong/weak alternation of k, p, t.
//
// Certain inflected forms use the weak grade of a stem: a geminate kk/pp/tt
// collapses to a single letter, an intervocalic k disappears, p becomes v,
// and t becomes d. The scan runs from the second-to-last character backward
// and mutates only the first qualifying site it finds — at most one
// alternation per call. A stem with no qualifying site passes through
// unchanged.
//
// The strong direction (`to_weak = false`) is a no-op: canonical forms are
// already in the strong grade, so nothing ever needs strengthening here.
// Assimilated pairs (nt/nn, lt/ll, rt/rr) are outside the rule set.
//
// All indexing is char-based; both grades of ä/ö stems survive intact.

use crate::harmony::is_vowel;

/// Apply consonant gradation to a stem.
///
/// With `to_weak` set, rewrites the first qualifying k/p/t site found
/// scanning backward from the second-to-last character. Returns the stem
/// unchanged when no site qualifies or when it is shorter than two
/// characters.
pub fn gradate(stem: &str, to_weak: bool) -> String {
    let chars: Vec<char> = stem.chars().collect();
    let len = chars.len();
    if len < 2 || !to_weak {
        return stem.to_string();
    }

    for i in (0..=len - 2).rev() {
        // Geminate kk/pp/tt collapses to a single letter.
        if i > 0 && chars[i] == chars[i - 1] && matches!(chars[i], 'k' | 'p' | 't') {
            return without(&chars, i);
        }

        // Single-consonant gradation between vowels.
        match chars[i] {
            'k' if i > 0 && is_vowel(chars[i - 1]) && is_vowel(chars[i + 1]) => {
                // k disappears: jalka-type elision.
                return without(&chars, i);
            }
            'p' if i > 0 && is_vowel(chars[i - 1]) => {
                return replaced(&chars, i, 'v');
            }
            't' if i > 0 && is_vowel(chars[i - 1]) => {
                return replaced(&chars, i, 'd');
            }
            _ => {}
        }
    }

    stem.to_string()
}

/// The stem with the character at `i` removed.
fn without(chars: &[char], i: usize) -> String {
    chars[..i].iter().chain(chars[i + 1..].iter()).collect()
}

/// The stem with the character at `i` replaced.
fn replaced(chars: &[char], i: usize, with: char) -> String {
    let mut out: String = chars[..i].iter().collect();
    out.push(with);
    out.extend(chars[i + 1..].iter());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geminate_collapse() {
        assert_eq!(gradate("nukku", true), "nuku");
        assert_eq!(gradate("kauppa", true), "kaupa");
        assert_eq!(gradate("otta", true), "ota");
    }

    #[test]
    fn test_t_to_d() {
        assert_eq!(gradate("katu", true), "kadu");
        assert_eq!(gradate("käte", true), "käde");
    }

    #[test]
    fn test_p_to_v() {
        assert_eq!(gradate("tapa", true), "tava");
        assert_eq!(gradate("leipä", true), "leivä");
    }

    #[test]
    fn test_k_elides_between_vowels() {
        assert_eq!(gradate("luke", true), "lue");
        assert_eq!(gradate("teke", true), "tee");
    }

    #[test]
    fn test_k_needs_vowels_on_both_sides() {
        // The k in "tulka" follows a consonant: no elision.
        assert_eq!(gradate("tulka", true), "tulka");
    }

    #[test]
    fn test_no_site_passes_through() {
        assert_eq!(gradate("puhu", true), "puhu");
        assert_eq!(gradate("sano", true), "sano");
        assert_eq!(gradate("tule", true), "tule");
    }

    #[test]
    fn test_only_first_site_from_the_end() {
        // Both t's qualify; only the later one mutates.
        assert_eq!(gradate("tuota", true), "tuoda");
    }

    #[test]
    fn test_assimilated_pairs_not_covered() {
        // nt/nn alternation is outside the rule set: t after n stays.
        assert_eq!(gradate("lintu", true), "lintu");
        assert_eq!(gradate("anta", true), "anta");
    }

    #[test]
    fn test_strong_direction_is_identity() {
        assert_eq!(gradate("kadu", false), "kadu");
        assert_eq!(gradate("nuku", false), "nuku");
    }

    #[test]
    fn test_short_stems_unchanged() {
        assert_eq!(gradate("t", true), "t");
        assert_eq!(gradate("", true), "");
    }
}
