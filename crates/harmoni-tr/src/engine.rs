// Suffix attachment engine
//
// A left-to-right fold over the suffix list. The state record (`Composition`)
// holds the stem built so far, whether a noun possessive has been attached,
// and the chain entries. Each step consumes the state and returns the next
// one, together with an `Attachment` describing what happened at the
// boundary.
//
// Per suffix, in order:
//   1. inert (empty pattern) -> skip
//   2. null -> chain gets `ø`, stem unchanged
//   3. resolve the pattern against a snapshot of the stem
//   4. contraction (stem vowel / stem consonant / suffix vowel)
//   5. possessive link `n` (noun possessive attached, case suffix, vowel-final
//      stem, consonant-initial fragment other than `n`)
//   6. otherwise buffer consonant between two vowels
//   7. softening of the stem's final stop before a vowel, unless a stem vowel
//      was dropped
//   8. concatenate, then arm the possessive flag for noun possessives

use std::fmt;

use harmoni_core::character::{ends_with_vowel, is_vowel, last_char, softened, starts_with_vowel};
use harmoni_core::{Category, Contraction, NULL_MARKER, Realization, SuffixDescriptor};
use tracing::trace;

use crate::harmony::{HarmonyContext, HarmonyKind, harmony_kinds, resolve};

/// Final result of a synthesis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Synthesis {
    /// Inflected word.
    pub surface: String,
    /// Root and every realized or null fragment, joined by `" + "`.
    pub chain: String,
}

/// A phonological rule that fired while attaching one suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Harmony(HarmonyKind),
    StemVowelDropped(char),
    StemConsonantDropped(char),
    SuffixVowelDropped(char),
    PossessiveLink,
    Buffer(char),
    Softening { from: char, to: char },
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Harmony(kind) => write!(f, "{kind} harmony"),
            Rule::StemVowelDropped(c) => write!(f, "stem vowel '{c}' dropped"),
            Rule::StemConsonantDropped(c) => write!(f, "stem consonant '{c}' dropped"),
            Rule::SuffixVowelDropped(c) => write!(f, "suffix vowel '{c}' dropped"),
            Rule::PossessiveLink => f.write_str("possessive link 'n'"),
            Rule::Buffer(c) => write!(f, "buffer consonant '{c}'"),
            Rule::Softening { from, to } => write!(f, "softening {from} -> {to}"),
        }
    }
}

/// What happened when one suffix was attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Text appended to the stem (and to the chain); `ø` for a null suffix.
    pub fragment: String,
    /// Stem after attachment.
    pub stem: String,
    /// Rules that fired, in application order.
    pub rules: Vec<Rule>,
}

/// Fold state: the stem so far, the possessive flag and the chain entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    stem: String,
    possessive_attached: bool,
    chain: Vec<String>,
}

impl Composition {
    /// Initial state for `root`.
    pub fn seed(root: &str) -> Self {
        Composition {
            stem: root.to_string(),
            possessive_attached: false,
            chain: vec![root.to_string()],
        }
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    pub fn possessive_attached(&self) -> bool {
        self.possessive_attached
    }

    pub fn chain(&self) -> &[String] {
        &self.chain
    }

    /// Attach one suffix, discarding the step record.
    pub fn attach(self, suffix: &SuffixDescriptor) -> Self {
        self.step(suffix).0
    }

    /// Attach one suffix. The attachment is `None` for an inert suffix.
    pub fn step(self, suffix: &SuffixDescriptor) -> (Self, Option<Attachment>) {
        let Composition {
            mut stem,
            possessive_attached,
            mut chain,
        } = self;

        let (pattern, contraction, buffer) = match &suffix.realization {
            Realization::Surface { pattern, .. } if pattern.is_empty() => {
                return (
                    Composition {
                        stem,
                        possessive_attached,
                        chain,
                    },
                    None,
                );
            }
            Realization::Null => {
                chain.push(NULL_MARKER.to_string());
                trace!(stem = %stem, "null suffix");
                let attachment = Attachment {
                    fragment: NULL_MARKER.to_string(),
                    stem: stem.clone(),
                    rules: Vec::new(),
                };
                return (
                    Composition {
                        stem,
                        possessive_attached,
                        chain,
                    },
                    Some(attachment),
                );
            }
            Realization::Surface {
                pattern,
                contraction,
                buffer,
            } => (pattern, *contraction, *buffer),
        };

        let ctx = HarmonyContext::of(&stem);
        let mut fragment = resolve(pattern, &ctx);
        let mut rules: Vec<Rule> = harmony_kinds(pattern)
            .into_iter()
            .map(Rule::Harmony)
            .collect();

        let mut fragment_vowel_initial = starts_with_vowel(&fragment);
        let mut stem_vowel_final = ends_with_vowel(&stem);
        let mut dropped_stem_vowel = false;

        match contraction {
            Contraction::DropStemVowel if stem_vowel_final => {
                if let Some(vowel) = stem.pop() {
                    rules.push(Rule::StemVowelDropped(vowel));
                    dropped_stem_vowel = true;
                    stem_vowel_final = ends_with_vowel(&stem);
                }
            }
            Contraction::DropStemConsonant if !stem_vowel_final => {
                if let Some(consonant) = stem.pop() {
                    rules.push(Rule::StemConsonantDropped(consonant));
                    stem_vowel_final = ends_with_vowel(&stem);
                }
            }
            Contraction::DropSuffixVowel if stem_vowel_final && fragment_vowel_initial => {
                let vowel = fragment.remove(0);
                rules.push(Rule::SuffixVowelDropped(vowel));
                fragment_vowel_initial = starts_with_vowel(&fragment);
            }
            _ => {}
        }

        let links = possessive_attached
            && suffix.category == Category::Case
            && stem_vowel_final
            && fragment
                .chars()
                .next()
                .is_some_and(|c| !is_vowel(c) && c != 'n');

        if links {
            fragment.insert(0, 'n');
            rules.push(Rule::PossessiveLink);
        } else if stem_vowel_final && fragment_vowel_initial {
            fragment.insert(0, buffer);
            rules.push(Rule::Buffer(buffer));
        }

        if !stem_vowel_final && fragment_vowel_initial && !dropped_stem_vowel {
            if let Some((from, to)) = last_char(&stem).and_then(|c| softened(c).map(|v| (c, v))) {
                stem.pop();
                stem.push(to);
                rules.push(Rule::Softening { from, to });
            }
        }

        stem.push_str(&fragment);
        chain.push(fragment.clone());
        trace!(stem = %stem, fragment = %fragment, rules = ?rules, "attached suffix");

        let attachment = Attachment {
            fragment,
            stem: stem.clone(),
            rules,
        };
        (
            Composition {
                stem,
                possessive_attached: possessive_attached || suffix.is_noun_possessive(),
                chain,
            },
            Some(attachment),
        )
    }

    /// Close the fold.
    pub fn finish(self) -> Synthesis {
        Synthesis {
            surface: self.stem,
            chain: self.chain.join(" + "),
        }
    }
}
