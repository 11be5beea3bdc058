// Suffix and root tables
//
// The tables are plain JSON (camelCase keys) and are parsed into typed
// entries at load time. Tag strings, buffers and the zero/pattern combination
// are validated here so the engine only ever sees well-formed descriptors.
//
// This module is also where the caller-side policy lives: the engine never
// reorders suffixes, so `SuffixTable::ordered` sorts a selection by declared
// `order` rank (ties broken by table position), and `SuffixTable::toggle`
// implements single-select-per-category selection.

mod roots;

pub use roots::{RootEntry, RootLexicon, default_roots};

use hashbrown::HashMap;
use serde::Deserialize;
use tracing::debug;

use harmoni_core::{
    Category, Contraction, DEFAULT_BUFFER, PartOfSpeech, Pattern, Realization, SuffixDescriptor,
    TagError,
};

use crate::engine::{Attachment, Synthesis};

/// Error type for table loading and id lookup.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("malformed table JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("entry {id}: {source}")]
    Tag {
        id: String,
        #[source]
        source: TagError,
    },

    #[error("duplicate id: {0}")]
    DuplicateId(String),

    #[error("entry {0}: buffer must be a single character")]
    InvalidBuffer(String),

    #[error("entry {0}: zero suffix cannot carry a pattern")]
    ZeroWithPattern(String),

    #[error("entry {0}: empty root")]
    EmptyRoot(String),

    #[error("unknown suffix id: {0}")]
    UnknownSuffix(String),

    #[error("unknown root id: {0}")]
    UnknownRoot(String),
}

// ---------------------------------------------------------------------------
// JSON layout
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct SuffixFile {
    suffixes: Vec<RawSuffix>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSuffix {
    id: String,
    pos: String,
    category: String,
    order: u32,
    #[serde(default)]
    label_en: String,
    #[serde(default)]
    label_ru: String,
    #[serde(default)]
    pattern: String,
    #[serde(default)]
    zero: bool,
    #[serde(default)]
    contract: Option<String>,
    #[serde(default)]
    buffer: Option<String>,
}

impl RawSuffix {
    fn into_entry(self, position: usize) -> Result<SuffixEntry, LexiconError> {
        let tag = |source: TagError| LexiconError::Tag {
            id: self.id.clone(),
            source,
        };
        let pos: PartOfSpeech = self.pos.parse().map_err(tag)?;
        let category: Category = self.category.parse().map_err(tag)?;

        let realization = if self.zero {
            if !self.pattern.is_empty() {
                return Err(LexiconError::ZeroWithPattern(self.id));
            }
            Realization::Null
        } else {
            let contraction: Contraction = match &self.contract {
                Some(tag_text) => tag_text.parse().map_err(tag)?,
                None => Contraction::None,
            };
            let buffer = match &self.buffer {
                Some(text) => single_char(text)
                    .ok_or_else(|| LexiconError::InvalidBuffer(self.id.clone()))?,
                None => DEFAULT_BUFFER,
            };
            Realization::Surface {
                pattern: Pattern::parse(&self.pattern),
                contraction,
                buffer,
            }
        };

        Ok(SuffixEntry {
            id: self.id,
            order: self.order,
            label_en: self.label_en,
            label_ru: self.label_ru,
            position,
            descriptor: SuffixDescriptor {
                pos,
                category,
                realization,
            },
        })
    }
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Suffix table
// ---------------------------------------------------------------------------

/// One row of the suffix table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixEntry {
    pub id: String,
    /// Attachment rank; lower ranks attach first.
    pub order: u32,
    pub label_en: String,
    pub label_ru: String,
    pub descriptor: SuffixDescriptor,
    /// Position in the table, used to break `order` ties.
    position: usize,
}

impl SuffixEntry {
    pub fn pos(&self) -> PartOfSpeech {
        self.descriptor.pos
    }

    pub fn category(&self) -> Category {
        self.descriptor.category
    }

    /// Pattern notation, `ø` for a zero suffix.
    pub fn notation(&self) -> String {
        match &self.descriptor.realization {
            Realization::Null => harmoni_core::NULL_MARKER.to_string(),
            Realization::Surface { pattern, .. } => pattern.to_string(),
        }
    }
}

/// A loaded suffix table with lookup, ordering and selection helpers.
///
/// Entry order is the table order, which also breaks ties between suffixes
/// of equal `order` rank.
#[derive(Debug, Clone)]
pub struct SuffixTable {
    entries: Vec<SuffixEntry>,
    index: HashMap<String, usize>,
}

impl SuffixTable {
    /// Parse and validate a suffix table from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, LexiconError> {
        let file: SuffixFile = serde_json::from_str(json)?;
        let mut entries = Vec::with_capacity(file.suffixes.len());
        let mut index = HashMap::with_capacity(file.suffixes.len());
        for (position, raw) in file.suffixes.into_iter().enumerate() {
            let entry = raw.into_entry(position)?;
            if index.insert(entry.id.clone(), position).is_some() {
                return Err(LexiconError::DuplicateId(entry.id));
            }
            entries.push(entry);
        }
        debug!(entries = entries.len(), "loaded suffix table");
        Ok(SuffixTable { entries, index })
    }

    /// All entries, in table order.
    pub fn all(&self) -> &[SuffixEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&SuffixEntry> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    /// Entries for one part of speech, in table order.
    pub fn by_pos(&self, pos: PartOfSpeech) -> Vec<&SuffixEntry> {
        self.entries.iter().filter(|e| e.pos() == pos).collect()
    }

    /// Entries for one part of speech and category, in table order.
    pub fn by_category(&self, pos: PartOfSpeech, category: Category) -> Vec<&SuffixEntry> {
        self.entries
            .iter()
            .filter(|e| e.pos() == pos && e.category() == category)
            .collect()
    }

    /// Look up every id, keeping the given order.
    pub fn resolve_ids<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<&SuffixEntry>, LexiconError> {
        ids.iter()
            .map(|id| {
                let id = id.as_ref();
                self.get(id)
                    .ok_or_else(|| LexiconError::UnknownSuffix(id.to_string()))
            })
            .collect()
    }

    /// Look up every id and sort into attachment order: `order` rank first,
    /// then table position.
    pub fn ordered<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<&SuffixEntry>, LexiconError> {
        let mut entries = self.resolve_ids(ids)?;
        entries.sort_by_key(|e| (e.order, e.position));
        Ok(entries)
    }

    /// Toggle `id` in a selection.
    ///
    /// A selected id is removed. A new id replaces any selected id of the same
    /// category and is appended. Unknown ids leave the selection unchanged.
    pub fn toggle(&self, selected: &[String], id: &str) -> Vec<String> {
        if selected.iter().any(|s| s == id) {
            return selected.iter().filter(|s| *s != id).cloned().collect();
        }
        let Some(next) = self.get(id) else {
            return selected.to_vec();
        };
        let mut result: Vec<String> = selected
            .iter()
            .filter(|s| {
                self.get(s)
                    .is_none_or(|existing| existing.category() != next.category())
            })
            .cloned()
            .collect();
        result.push(id.to_string());
        result
    }

    /// Order the selected suffixes and synthesize them onto `root`.
    pub fn synthesize<S: AsRef<str>>(
        &self,
        root: &str,
        ids: &[S],
    ) -> Result<Synthesis, LexiconError> {
        let entries = self.ordered(ids)?;
        Ok(crate::synthesize(root, entries.iter().map(|e| &e.descriptor)))
    }

    /// Like [`SuffixTable::synthesize`], with the per-suffix trace. Trace entries
    /// follow attachment order.
    pub fn synthesize_traced<S: AsRef<str>>(
        &self,
        root: &str,
        ids: &[S],
    ) -> Result<(Synthesis, Vec<(&SuffixEntry, Option<Attachment>)>), LexiconError> {
        let entries = self.ordered(ids)?;
        let (synthesis, trace) =
            crate::synthesize_traced(root, entries.iter().map(|e| &e.descriptor));
        Ok((synthesis, entries.into_iter().zip(trace).collect()))
    }
}

/// Load the suffix table embedded at compile time.
///
/// Panics if the embedded JSON is malformed (caught by the tests below).
pub fn default_suffix_table() -> SuffixTable {
    let json = include_str!("../../data/suffixes.json");
    SuffixTable::from_json(json).expect("embedded suffixes.json is malformed")
}
