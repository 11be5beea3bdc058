// Morpheme data model: placeholders, suffix patterns, suffix descriptors
//
// Suffix patterns are written in the usual Turkish morphology notation
// (`lAr`, `DA`, `(s)I` without the parentheses) and parsed once into tagged
// segments, so resolution never does character find/replace on the pattern
// text. Patterns can also be assembled from segments directly.

use std::fmt;
use std::str::FromStr;

use crate::TagError;

/// Buffer consonant inserted between two vowels when a suffix does not
/// override it: the glide `y`.
pub const DEFAULT_BUFFER: char = 'y';

/// Chain entry for a suffix with no phonetic realization.
pub const NULL_MARKER: &str = "\u{00F8}"; // ø

// ---------------------------------------------------------------------------
// Placeholders and patterns
// ---------------------------------------------------------------------------

/// A harmonizing or assimilating slot in a suffix pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// `A`: a/e, split on backness of the stem's last vowel.
    LowTwoWay,
    /// `H`: ı/i, split on backness of the stem's last vowel.
    HighTwoWay,
    /// `I`: ı/i/u/ü, split on backness and rounding of the stem's last vowel.
    HighFourWay,
    /// `D` (d/t) or `C` (c/ç): voiceless member after a voiceless consonant.
    Voicing { voiced: char, voiceless: char },
}

impl Placeholder {
    /// Placeholder written as `c` in pattern notation, if any.
    pub fn from_notation(c: char) -> Option<Self> {
        match c {
            'A' => Some(Placeholder::LowTwoWay),
            'H' => Some(Placeholder::HighTwoWay),
            'I' => Some(Placeholder::HighFourWay),
            'D' => Some(Placeholder::Voicing {
                voiced: 'd',
                voiceless: 't',
            }),
            'C' => Some(Placeholder::Voicing {
                voiced: 'c',
                voiceless: '\u{00E7}',
            }),
            _ => None,
        }
    }

    /// Pattern notation for this placeholder. Voicing pairs outside the
    /// standard d/t and c/ç are rendered as `{voiced|voiceless}`.
    pub fn notation(&self) -> String {
        match *self {
            Placeholder::LowTwoWay => "A".to_string(),
            Placeholder::HighTwoWay => "H".to_string(),
            Placeholder::HighFourWay => "I".to_string(),
            Placeholder::Voicing {
                voiced: 'd',
                voiceless: 't',
            } => "D".to_string(),
            Placeholder::Voicing {
                voiced: 'c',
                voiceless: '\u{00E7}',
            } => "C".to_string(),
            Placeholder::Voicing { voiced, voiceless } => format!("{{{voiced}|{voiceless}}}"),
        }
    }
}

/// One position of a suffix pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    Literal(char),
    Slot(Placeholder),
}

/// A parsed suffix pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Pattern {
    segments: Vec<Segment>,
}

impl Pattern {
    /// Parse pattern notation. `A`, `H`, `I`, `D` and `C` become placeholders;
    /// every other character is kept as a literal.
    pub fn parse(notation: &str) -> Self {
        let segments = notation
            .chars()
            .map(|c| match Placeholder::from_notation(c) {
                Some(p) => Segment::Slot(p),
                None => Segment::Literal(c),
            })
            .collect();
        Pattern { segments }
    }

    /// Build a pattern from explicit segments.
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Pattern { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Placeholders in pattern order.
    pub fn placeholders(&self) -> impl Iterator<Item = Placeholder> + '_ {
        self.segments.iter().filter_map(|s| match s {
            Segment::Slot(p) => Some(*p),
            Segment::Literal(_) => None,
        })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Literal(c) => write!(f, "{c}")?,
                Segment::Slot(p) => f.write_str(&p.notation())?,
            }
        }
        Ok(())
    }
}

impl From<&str> for Pattern {
    fn from(notation: &str) -> Self {
        Pattern::parse(notation)
    }
}

// ---------------------------------------------------------------------------
// Contraction policy
// ---------------------------------------------------------------------------

/// Deletion applied at the morpheme boundary before a suffix attaches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Contraction {
    #[default]
    None,
    /// Remove the stem's final vowel (`bekle` + `Iyor` → `bekliyor`).
    DropStemVowel,
    /// Remove the stem's final consonant (`küçük` + `l` → `küçül`).
    DropStemConsonant,
    /// Remove the suffix's leading vowel after a vowel-final stem
    /// (`oda` + `Im` → `odam`).
    DropSuffixVowel,
}

impl FromStr for Contraction {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "none" => Ok(Contraction::None),
            "dropLastVowel" => Ok(Contraction::DropStemVowel),
            "dropLastConsonant" => Ok(Contraction::DropStemConsonant),
            "dropSuffixVowel" => Ok(Contraction::DropSuffixVowel),
            other => Err(TagError::Contraction(other.to_string())),
        }
    }
}

impl fmt::Display for Contraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Contraction::None => "none",
            Contraction::DropStemVowel => "dropLastVowel",
            Contraction::DropStemConsonant => "dropLastConsonant",
            Contraction::DropSuffixVowel => "dropSuffixVowel",
        };
        f.write_str(text)
    }
}

// ---------------------------------------------------------------------------
// Classification tags
// ---------------------------------------------------------------------------

/// Part of speech a suffix belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 3] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
    ];

    /// Categories offered for this part of speech, in display order.
    pub fn categories(self) -> &'static [Category] {
        match self {
            PartOfSpeech::Noun => &[Category::Plural, Category::Possessive, Category::Case],
            PartOfSpeech::Verb => &[Category::Tense, Category::Person],
            PartOfSpeech::Adjective => &[Category::Derivation],
        }
    }
}

impl FromStr for PartOfSpeech {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NOUN" => Ok(PartOfSpeech::Noun),
            "VERB" => Ok(PartOfSpeech::Verb),
            "ADJ" => Ok(PartOfSpeech::Adjective),
            other => Err(TagError::PartOfSpeech(other.to_string())),
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::Adjective => "ADJ",
        };
        f.write_str(text)
    }
}

/// Grammatical category of a suffix.
///
/// The engine only looks at `Possessive` (which arms the possessive link) and
/// `Case` (which the link applies to).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Plural,
    Possessive,
    Case,
    Tense,
    Person,
    Derivation,
}

impl FromStr for Category {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plural" => Ok(Category::Plural),
            "possessive" => Ok(Category::Possessive),
            "cases" => Ok(Category::Case),
            "tenses" => Ok(Category::Tense),
            "person" => Ok(Category::Person),
            "derivation" => Ok(Category::Derivation),
            other => Err(TagError::Category(other.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Category::Plural => "plural",
            Category::Possessive => "possessive",
            Category::Case => "cases",
            Category::Tense => "tenses",
            Category::Person => "person",
            Category::Derivation => "derivation",
        };
        f.write_str(text)
    }
}

// ---------------------------------------------------------------------------
// Suffix descriptor
// ---------------------------------------------------------------------------

/// How a suffix shows up in the surface form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Realization {
    /// Zero morpheme: no surface change, `ø` in the chain.
    Null,
    /// Realized suffix. An empty pattern makes the suffix inert.
    Surface {
        pattern: Pattern,
        contraction: Contraction,
        buffer: char,
    },
}

/// One unit of composition handed to the synthesis engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixDescriptor {
    pub pos: PartOfSpeech,
    pub category: Category,
    pub realization: Realization,
}

impl SuffixDescriptor {
    /// Realized suffix with no contraction and the default buffer.
    pub fn surface(pos: PartOfSpeech, category: Category, pattern: impl Into<Pattern>) -> Self {
        SuffixDescriptor {
            pos,
            category,
            realization: Realization::Surface {
                pattern: pattern.into(),
                contraction: Contraction::None,
                buffer: DEFAULT_BUFFER,
            },
        }
    }

    /// Zero-realized suffix.
    pub fn null(pos: PartOfSpeech, category: Category) -> Self {
        SuffixDescriptor {
            pos,
            category,
            realization: Realization::Null,
        }
    }

    /// Set the contraction policy. No effect on a null suffix.
    pub fn with_contraction(mut self, policy: Contraction) -> Self {
        if let Realization::Surface { contraction, .. } = &mut self.realization {
            *contraction = policy;
        }
        self
    }

    /// Override the buffer consonant. No effect on a null suffix.
    pub fn with_buffer(mut self, consonant: char) -> Self {
        if let Realization::Surface { buffer, .. } = &mut self.realization {
            *buffer = consonant;
        }
        self
    }

    /// Whether attaching this suffix is a no-op (realized with an empty pattern).
    pub fn is_inert(&self) -> bool {
        matches!(&self.realization, Realization::Surface { pattern, .. } if pattern.is_empty())
    }

    /// Whether this suffix arms the possessive link for a following case suffix.
    pub fn is_noun_possessive(&self) -> bool {
        self.pos == PartOfSpeech::Noun && self.category == Category::Possessive
    }
}
