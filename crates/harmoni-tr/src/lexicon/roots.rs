// Example roots per part of speech

use serde::Deserialize;
use tracing::debug;

use harmoni_core::PartOfSpeech;

use super::LexiconError;

#[derive(Debug, Deserialize)]
struct RootFile {
    roots: Vec<RawRoot>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRoot {
    id: String,
    pos: String,
    root: String,
    #[serde(default)]
    gloss_en: String,
    #[serde(default)]
    gloss_ru: String,
}

/// A root with its glosses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootEntry {
    pub id: String,
    pub pos: PartOfSpeech,
    pub root: String,
    pub gloss_en: String,
    pub gloss_ru: String,
}

/// A loaded root list. Preserves file order.
#[derive(Debug, Clone)]
pub struct RootLexicon {
    entries: Vec<RootEntry>,
}

impl RootLexicon {
    /// Parse and validate a root list from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, LexiconError> {
        let file: RootFile = serde_json::from_str(json)?;
        let mut entries: Vec<RootEntry> = Vec::with_capacity(file.roots.len());
        for raw in file.roots {
            let pos = raw.pos.parse().map_err(|source| LexiconError::Tag {
                id: raw.id.clone(),
                source,
            })?;
            if raw.root.is_empty() {
                return Err(LexiconError::EmptyRoot(raw.id));
            }
            if entries.iter().any(|e| e.id == raw.id) {
                return Err(LexiconError::DuplicateId(raw.id));
            }
            entries.push(RootEntry {
                id: raw.id,
                pos,
                root: raw.root,
                gloss_en: raw.gloss_en,
                gloss_ru: raw.gloss_ru,
            });
        }
        debug!(entries = entries.len(), "loaded root lexicon");
        Ok(RootLexicon { entries })
    }

    pub fn all(&self) -> &[RootEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Result<&RootEntry, LexiconError> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| LexiconError::UnknownRoot(id.to_string()))
    }

    pub fn by_pos(&self, pos: PartOfSpeech) -> Vec<&RootEntry> {
        self.entries.iter().filter(|e| e.pos == pos).collect()
    }
}

/// Load the root list embedded at compile time.
///
/// Panics if the embedded JSON is malformed (caught by the tests below).
pub fn default_roots() -> RootLexicon {
    let json = include_str!("../../data/roots.json");
    RootLexicon::from_json(json).expect("embedded roots.json is malformed")
}
