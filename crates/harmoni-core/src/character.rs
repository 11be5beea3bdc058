// Turkish phoneme classification and case folding
//
// The synthesis engine works on lowercase Turkish text. Classification is
// exact: characters outside the tables below (digits, punctuation, letters of
// other alphabets, uppercase letters) are "not a vowel, not voiceless, no
// softening counterpart". Front ends fold their input with
// `to_turkish_lowercase` before handing it to the engine.

// ---------------------------------------------------------------------------
// Turkish phonological tables
// ---------------------------------------------------------------------------

/// Turkish vowels (lowercase): a e ı i o ö u ü
const TURKISH_VOWELS: &[char] = &['a', 'e', '\u{0131}', 'i', 'o', '\u{00F6}', 'u', '\u{00FC}'];

/// Back vowels: a ı o u
const BACK_VOWELS: &[char] = &['a', '\u{0131}', 'o', 'u'];

/// Rounded vowels: o ö u ü
const ROUNDED_VOWELS: &[char] = &['o', '\u{00F6}', 'u', '\u{00FC}'];

/// Voiceless consonants (lowercase): f s t k ç ş h p
const VOICELESS_CONSONANTS: &[char] = &['f', 's', 't', 'k', '\u{00E7}', '\u{015F}', 'h', 'p'];

/// Voicing-alternating stops and their voiced counterparts: p→b, ç→c, t→d, k→ğ
const SOFTENING: &[(char, char)] = &[
    ('p', 'b'),
    ('\u{00E7}', 'c'),
    ('t', 'd'),
    ('k', '\u{011F}'),
];

// ---------------------------------------------------------------------------
// Single-character classification
// ---------------------------------------------------------------------------

/// Check whether a character is one of the eight Turkish vowels.
pub fn is_vowel(c: char) -> bool {
    TURKISH_VOWELS.contains(&c)
}

/// Check whether a character is a back vowel (a, ı, o, u).
pub fn is_back_vowel(c: char) -> bool {
    BACK_VOWELS.contains(&c)
}

/// Check whether a character is a rounded vowel (o, ö, u, ü).
pub fn is_rounded_vowel(c: char) -> bool {
    ROUNDED_VOWELS.contains(&c)
}

/// Check whether a character is one of the eight voiceless consonants.
pub fn is_voiceless(c: char) -> bool {
    VOICELESS_CONSONANTS.contains(&c)
}

/// Voiced counterpart of a voicing-alternating stop, if `c` is one.
///
/// Used for consonant softening: `kitap` + vowel-initial suffix becomes
/// `kitab-`.
pub fn softened(c: char) -> Option<char> {
    SOFTENING
        .iter()
        .find(|&&(voiceless, _)| voiceless == c)
        .map(|&(_, voiced)| voiced)
}

// ---------------------------------------------------------------------------
// String helpers
// ---------------------------------------------------------------------------

/// Nearest vowel scanning right to left, or `None` if `s` has no vowel.
///
/// Callers treat `None` as front-unrounded harmony.
pub fn last_vowel(s: &str) -> Option<char> {
    s.chars().rev().find(|&c| is_vowel(c))
}

/// Last character of `s`.
pub fn last_char(s: &str) -> Option<char> {
    s.chars().next_back()
}

/// Whether `s` is non-empty and its first character is a vowel.
pub fn starts_with_vowel(s: &str) -> bool {
    s.chars().next().is_some_and(is_vowel)
}

/// Whether `s` is non-empty and its last character is a vowel.
pub fn ends_with_vowel(s: &str) -> bool {
    last_char(s).is_some_and(is_vowel)
}

// ---------------------------------------------------------------------------
// Turkish case folding
//
// The standard library lowercases `I` to `i` and `İ` to `i̇` (i + combining
// dot), both wrong for Turkish. The dotted/dotless pairs are mapped by hand and
// everything else goes through `char::to_lowercase`.
// ---------------------------------------------------------------------------

/// Lowercase a single character using Turkish rules.
pub fn turkish_lower(c: char) -> char {
    match c {
        'I' => '\u{0131}', // I -> ı
        '\u{0130}' => 'i', // İ -> i
        _ => {
            let mut iter = c.to_lowercase();
            iter.next().unwrap_or(c)
        }
    }
}

/// Lowercase a whole string using Turkish rules.
pub fn to_turkish_lowercase(s: &str) -> String {
    s.chars().map(turkish_lower).collect()
}
