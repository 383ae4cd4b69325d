// Vowel harmony resolution.
//
// Finnish suffixes come in front/back pairs (a/ä, o/ö): a word with any
// back vowel (a, o, u) anywhere in it takes the back variant, and a word
// with only front or neutral vowels takes the front variant. Words made
// entirely of neutral vowels (i, e) default to the front variant — a
// documented fallback, not an error.
//
// Every generator computes the harmony vowel once per call from the
// canonical form and reuses it for every suffix in that call.

/// Whether a character is a back vowel (a, o, u), either case.
pub fn is_back_vowel(c: char) -> bool {
    matches!(c, 'a' | 'o' | 'u' | 'A' | 'O' | 'U')
}

/// Whether a character is a front vowel (ä, ö, y), either case.
pub fn is_front_vowel(c: char) -> bool {
    matches!(c, 'ä' | 'ö' | 'y' | 'Ä' | 'Ö' | 'Y')
}

/// Whether a character is any Finnish vowel (lowercase).
pub fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'ä' | 'ö' | 'y')
}

/// Whether the word contains any back vowel.
pub fn has_back_vowel(word: &str) -> bool {
    word.chars().any(is_back_vowel)
}

/// The harmonizing suffix vowel for a word: `'a'` if the word contains a
/// back vowel, else `'ä'`.
pub fn harmony_vowel(word: &str) -> char {
    if has_back_vowel(word) { 'a' } else { 'ä' }
}

/// The rounded harmonizing suffix vowel for a word: `'o'` or `'ö'` by the
/// same scan. Used by endings like the imperative -koon/-köön.
pub fn harmony_rounded_vowel(word: &str) -> char {
    if has_back_vowel(word) { 'o' } else { 'ö' }
}
