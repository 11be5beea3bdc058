//! Turkish word synthesis.
//!
//! Builds an inflected Turkish word from a root and an ordered list of suffix
//! descriptors, applying vowel harmony, voicing assimilation, consonant
//! softening, contraction, buffer consonants and the possessive-before-case
//! `n` link.
//!
//! # Architecture
//!
//! - [`harmony`] -- Placeholder resolution (two-way / four-way harmony, voicing)
//! - [`engine`] -- The attachment fold and its state record
//! - [`lexicon`] -- Suffix and root tables, ordering and selection policy
//!   (feature `lexicon`)
//!
//! ```
//! use harmoni_core::{Category, PartOfSpeech, SuffixDescriptor};
//!
//! let plural = SuffixDescriptor::surface(PartOfSpeech::Noun, Category::Plural, "lAr");
//! let result = harmoni_tr::synthesize("oda", [&plural]);
//! assert_eq!(result.surface, "odalar");
//! assert_eq!(result.chain, "oda + lar");
//! ```

pub mod engine;
pub mod harmony;
#[cfg(feature = "lexicon")]
pub mod lexicon;

pub use engine::{Attachment, Composition, Rule, Synthesis};
pub use harmony::{HarmonyContext, HarmonyKind};

use harmoni_core::SuffixDescriptor;

/// Synthesize `root` with `suffixes` attached in the given order.
///
/// The suffixes are not reordered. An empty root gives an empty surface and
/// chain whatever the suffixes are.
pub fn synthesize<'a, I>(root: &str, suffixes: I) -> Synthesis
where
    I: IntoIterator<Item = &'a SuffixDescriptor>,
{
    if root.is_empty() {
        return Synthesis::default();
    }
    suffixes
        .into_iter()
        .fold(Composition::seed(root), Composition::attach)
        .finish()
}

/// Like [`synthesize`], also returning one entry per input suffix describing
/// the rules applied (`None` for inert suffixes).
pub fn synthesize_traced<'a, I>(root: &str, suffixes: I) -> (Synthesis, Vec<Option<Attachment>>)
where
    I: IntoIterator<Item = &'a SuffixDescriptor>,
{
    if root.is_empty() {
        return (Synthesis::default(), Vec::new());
    }
    let mut trace = Vec::new();
    let composition = suffixes
        .into_iter()
        .fold(Composition::seed(root), |composition, suffix| {
            let (next, attachment) = composition.step(suffix);
            trace.push(attachment);
            next
        });
    (composition.finish(), trace)
}
