//! Shared types for harmoni Turkish word synthesis.
//!
//! - [`character`] -- Phoneme classification (vowels, voiceless consonants,
//!   softening) and Turkish case folding
//! - [`morpheme`] -- Suffix patterns, placeholders and suffix descriptors

pub mod character;
pub mod morpheme;

pub use morpheme::{
    Category, Contraction, DEFAULT_BUFFER, NULL_MARKER, PartOfSpeech, Pattern, Placeholder,
    Realization, Segment, SuffixDescriptor,
};

/// Error type for parsing table tags (part of speech, category, contraction).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
    #[error("unknown part of speech: {0}")]
    PartOfSpeech(String),
    #[error("unknown suffix category: {0}")]
    Category(String),
    #[error("unknown contraction policy: {0}")]
    Contraction(String),
}
