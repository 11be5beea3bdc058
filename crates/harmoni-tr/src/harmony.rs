// Pattern resolution: vowel harmony and voicing assimilation
//
// Every placeholder in a suffix pattern is resolved from one snapshot of the
// stem taken before the suffix's own contraction runs. Harmony follows the
// stem's last vowel; voicing follows the stem's last character.

use std::fmt;

use harmoni_core::character::{is_back_vowel, is_voiceless, last_char, last_vowel};
use harmoni_core::{Pattern, Placeholder, Segment};

/// Phonological context of a stem at the moment a suffix is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarmonyContext {
    /// Nearest vowel from the right, `None` if the stem has no vowel.
    pub last_vowel: Option<char>,
    /// Final character of the stem.
    pub trailing: Option<char>,
}

impl HarmonyContext {
    /// Snapshot `stem`.
    pub fn of(stem: &str) -> Self {
        HarmonyContext {
            last_vowel: last_vowel(stem),
            trailing: last_char(stem),
        }
    }

    fn is_back(&self) -> bool {
        self.last_vowel.is_some_and(is_back_vowel)
    }

    /// `A`: a after a back vowel, otherwise e.
    pub fn low_two_way(&self) -> char {
        if self.is_back() { 'a' } else { 'e' }
    }

    /// `H`: ı after a back vowel, otherwise i.
    pub fn high_two_way(&self) -> char {
        if self.is_back() { '\u{0131}' } else { 'i' }
    }

    /// `I`: ı/i/u/ü by backness and rounding. No vowel means i.
    pub fn high_four_way(&self) -> char {
        match self.last_vowel {
            Some('a' | '\u{0131}') => '\u{0131}',
            Some('o' | 'u') => 'u',
            Some('\u{00F6}' | '\u{00FC}') => '\u{00FC}',
            _ => 'i',
        }
    }

    /// Whether the stem ends in a voiceless consonant.
    pub fn voiceless_trailing(&self) -> bool {
        self.trailing.is_some_and(is_voiceless)
    }

    /// Concrete letter for one placeholder.
    pub fn resolve_placeholder(&self, placeholder: Placeholder) -> char {
        match placeholder {
            Placeholder::LowTwoWay => self.low_two_way(),
            Placeholder::HighTwoWay => self.high_two_way(),
            Placeholder::HighFourWay => self.high_four_way(),
            Placeholder::Voicing { voiced, voiceless } => {
                if self.voiceless_trailing() {
                    voiceless
                } else {
                    voiced
                }
            }
        }
    }
}

/// Substitute every placeholder of `pattern`. Literals pass through.
pub fn resolve(pattern: &Pattern, ctx: &HarmonyContext) -> String {
    pattern
        .segments()
        .iter()
        .map(|segment| match *segment {
            Segment::Literal(c) => c,
            Segment::Slot(p) => ctx.resolve_placeholder(p),
        })
        .collect()
}

/// Kind of alternation a placeholder performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HarmonyKind {
    TwoWay,
    FourWay,
    Voicing,
}

impl HarmonyKind {
    fn of(placeholder: Placeholder) -> Self {
        match placeholder {
            Placeholder::LowTwoWay | Placeholder::HighTwoWay => HarmonyKind::TwoWay,
            Placeholder::HighFourWay => HarmonyKind::FourWay,
            Placeholder::Voicing { .. } => HarmonyKind::Voicing,
        }
    }
}

impl fmt::Display for HarmonyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            HarmonyKind::TwoWay => "two-way",
            HarmonyKind::FourWay => "four-way",
            HarmonyKind::Voicing => "voicing",
        };
        f.write_str(text)
    }
}

/// Distinct harmony kinds used by `pattern`, in order of first appearance.
pub fn harmony_kinds(pattern: &Pattern) -> Vec<HarmonyKind> {
    let mut kinds = Vec::new();
    for kind in pattern.placeholders().map(HarmonyKind::of) {
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }
    kinds
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve_str(pattern: &str, stem: &str) -> String {
        resolve(&Pattern::parse(pattern), &HarmonyContext::of(stem))
    }

    #[test]
    fn two_way_low_follows_backness() {
        assert_eq!(resolve_str("lAr", "ev"), "ler");
        assert_eq!(resolve_str("lAr", "oda"), "lar");
        assert_eq!(resolve_str("lAr", "g\u{00F6}z"), "ler");
        assert_eq!(resolve_str("lAr", "kol"), "lar");
        assert_eq!(resolve_str("lAr", "k\u{0131}z"), "lar");
    }

    #[test]
    fn two_way_high_follows_backness() {
        assert_eq!(resolve_str("lHk", "kol"), "l\u{0131}k");
        assert_eq!(resolve_str("lHk", "g\u{00FC}l"), "lik");
    }

    #[test]
    fn four_way_follows_backness_and_rounding() {
        assert_eq!(resolve_str("In", "ev"), "in");
        assert_eq!(resolve_str("In", "kitap"), "\u{0131}n");
        assert_eq!(resolve_str("In", "kol"), "un");
        assert_eq!(resolve_str("In", "g\u{00F6}z"), "\u{00FC}n");
        assert_eq!(resolve_str("In", "okul"), "un");
        assert_eq!(resolve_str("In", "k\u{0131}z"), "\u{0131}n");
    }

    #[test]
    fn no_vowel_defaults_to_front_unrounded() {
        assert_eq!(resolve_str("lAr", "str"), "ler");
        assert_eq!(resolve_str("lHk", "str"), "lik");
        assert_eq!(resolve_str("In", "str"), "in");
        assert_eq!(resolve_str("In", ""), "in");
    }

    #[test]
    fn voicing_follows_trailing_consonant() {
        assert_eq!(resolve_str("DA", "ev"), "de");
        assert_eq!(resolve_str("DA", "kitap"), "ta");
        assert_eq!(resolve_str("DAn", "a\u{011F}a\u{00E7}"), "tan");
        assert_eq!(resolve_str("CA", "g\u{00FC}zel"), "ce");
        assert_eq!(resolve_str("CA", "b\u{00FC}y\u{00FC}k"), "\u{00E7}e");
        // Vowel-final stems take the voiced member.
        assert_eq!(resolve_str("DI", "oku"), "du");
    }

    #[test]
    fn all_placeholders_share_one_snapshot() {
        assert_eq!(resolve_str("DAn", "kitap"), "tan");
        assert_eq!(resolve_str("AcAk", "gel"), "ecek");
        assert_eq!(resolve_str("CIk", "kitap"), "\u{00E7}\u{0131}k");
    }

    #[test]
    fn literals_and_unknown_symbols_pass_through() {
        assert_eq!(resolve_str("sQz", "ev"), "sQz");
        assert_eq!(resolve_str("", "ev"), "");
        assert_eq!(resolve_str("ki", "kol"), "ki");
    }

    #[test]
    fn explicit_segments_cannot_collide_with_notation() {
        // A literal capital A stays literal when built from segments.
        let p = Pattern::from_segments(vec![
            Segment::Literal('A'),
            Segment::Slot(Placeholder::LowTwoWay),
        ]);
        assert_eq!(resolve(&p, &HarmonyContext::of("oda")), "Aa");
    }

    #[test]
    fn harmony_kinds_are_deduplicated() {
        assert_eq!(harmony_kinds(&Pattern::parse("AcAk")), vec![HarmonyKind::TwoWay]);
        assert_eq!(
            harmony_kinds(&Pattern::parse("DIr")),
            vec![HarmonyKind::Voicing, HarmonyKind::FourWay]
        );
        assert!(harmony_kinds(&Pattern::parse("ki")).is_empty());
    }
}
