// WASM bindings for harmoni Turkish word synthesis.
//
// Provides a `WasmHarmoni` class exported via wasm-bindgen that wraps a
// `SuffixTable` and a `RootLexicon` from harmoni-tr. Structured return values
// are serialized to JavaScript objects using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const harmoni = new WasmHarmoni();                // embedded tables
//   harmoni.synthesize("kitap", ["noun-poss-3sg"]);   // => { surface: "kitabı", ... }
//   harmoni.synthesizeTraced("ev", ["noun-case-loc"]); // => { surface, chain, steps: [...] }
//   harmoni.toggle(["noun-case-loc"], "noun-case-abl"); // => ["noun-case-abl"]
//   harmoni.suffixes("NOUN");                          // => [{ id, category, notation, ... }, ...]
//   harmoni.roots("VERB");                             // => [{ id, root, glossEn, ... }, ...]

use serde::Serialize;
use wasm_bindgen::prelude::*;

use harmoni_core::character::to_turkish_lowercase;
use harmoni_core::{PartOfSpeech, Realization};
use harmoni_tr::harmony::harmony_kinds;
use harmoni_tr::lexicon::{
    LexiconError, RootEntry, RootLexicon, SuffixEntry, SuffixTable, default_roots,
    default_suffix_table,
};
use harmoni_tr::{Attachment, Synthesis};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable synthesis result.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsSynthesis {
    surface: String,
    chain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    steps: Option<Vec<JsStep>>,
}

/// One attached suffix in a traced synthesis.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsStep {
    suffix_id: String,
    /// False when the suffix contributed nothing.
    applied: bool,
    fragment: String,
    stem: String,
    rules: Vec<String>,
}

/// Serializable suffix table row.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsSuffix {
    id: String,
    pos: String,
    category: String,
    order: u32,
    notation: String,
    zero: bool,
    harmony: Vec<String>,
    label_en: String,
    label_ru: String,
}

/// Serializable root.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsRoot {
    id: String,
    pos: String,
    root: String,
    gloss_en: String,
    gloss_ru: String,
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn synthesis_to_js(synthesis: Synthesis) -> JsSynthesis {
    JsSynthesis {
        surface: synthesis.surface,
        chain: synthesis.chain,
        steps: None,
    }
}

fn step_to_js(entry: &SuffixEntry, attachment: Option<Attachment>) -> JsStep {
    match attachment {
        Some(a) => JsStep {
            suffix_id: entry.id.clone(),
            applied: true,
            fragment: a.fragment,
            stem: a.stem,
            rules: a.rules.iter().map(ToString::to_string).collect(),
        },
        None => JsStep {
            suffix_id: entry.id.clone(),
            applied: false,
            fragment: String::new(),
            stem: String::new(),
            rules: Vec::new(),
        },
    }
}

fn suffix_to_js(entry: &SuffixEntry) -> JsSuffix {
    let (zero, harmony) = match &entry.descriptor.realization {
        Realization::Null => (true, Vec::new()),
        Realization::Surface { pattern, .. } => (
            false,
            harmony_kinds(pattern).iter().map(ToString::to_string).collect(),
        ),
    };
    JsSuffix {
        id: entry.id.clone(),
        pos: entry.pos().to_string(),
        category: entry.category().to_string(),
        order: entry.order,
        notation: entry.notation(),
        zero,
        harmony,
        label_en: entry.label_en.clone(),
        label_ru: entry.label_ru.clone(),
    }
}

fn root_to_js(entry: &RootEntry) -> JsRoot {
    JsRoot {
        id: entry.id.clone(),
        pos: entry.pos.to_string(),
        root: entry.root.clone(),
        gloss_en: entry.gloss_en.clone(),
        gloss_ru: entry.gloss_ru.clone(),
    }
}

/// Parse an optional part-of-speech filter (`"NOUN"`, `"verb"`, ...).
fn parse_pos_filter(pos: Option<String>) -> Result<Option<PartOfSpeech>, String> {
    pos.map(|p| p.to_ascii_uppercase().parse().map_err(|e| format!("{e}")))
        .transpose()
}

fn lexicon_error_to_js(e: LexiconError) -> JsError {
    JsError::new(&e.to_string())
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

// ============================================================================
// WasmHarmoni
// ============================================================================

/// Turkish word synthesis engine for WebAssembly.
#[wasm_bindgen]
pub struct WasmHarmoni {
    table: SuffixTable,
    roots: RootLexicon,
}

#[wasm_bindgen]
impl WasmHarmoni {
    /// Create a new instance.
    ///
    /// - `suffix_json`: suffix table JSON (optional, defaults to the embedded table)
    /// - `root_json`: root list JSON (optional, defaults to the embedded list)
    #[wasm_bindgen(constructor)]
    pub fn new(
        suffix_json: Option<String>,
        root_json: Option<String>,
    ) -> Result<WasmHarmoni, JsError> {
        let table = match suffix_json {
            Some(json) => SuffixTable::from_json(&json).map_err(lexicon_error_to_js)?,
            None => default_suffix_table(),
        };
        let roots = match root_json {
            Some(json) => RootLexicon::from_json(&json).map_err(lexicon_error_to_js)?,
            None => default_roots(),
        };
        Ok(WasmHarmoni { table, roots })
    }

    /// Synthesize `root` with the given suffix ids.
    ///
    /// Ids may be given in any order; they are sorted into attachment order.
    /// Returns `{ surface, chain }`.
    pub fn synthesize(&self, root: &str, suffix_ids: Vec<String>) -> Result<JsValue, JsError> {
        let root = to_turkish_lowercase(root);
        let synthesis = self
            .table
            .synthesize(&root, &suffix_ids)
            .map_err(lexicon_error_to_js)?;
        to_js(&synthesis_to_js(synthesis))
    }

    /// Like `synthesize`, with a `steps` array describing each suffix:
    /// `suffixId`, `applied`, `fragment`, `stem`, `rules`.
    #[wasm_bindgen(js_name = "synthesizeTraced")]
    pub fn synthesize_traced(
        &self,
        root: &str,
        suffix_ids: Vec<String>,
    ) -> Result<JsValue, JsError> {
        let root = to_turkish_lowercase(root);
        let (synthesis, trace) = self
            .table
            .synthesize_traced(&root, &suffix_ids)
            .map_err(lexicon_error_to_js)?;
        let mut result = synthesis_to_js(synthesis);
        result.steps = Some(
            trace
                .into_iter()
                .map(|(entry, attachment)| step_to_js(entry, attachment))
                .collect(),
        );
        to_js(&result)
    }

    /// Toggle a suffix id in a selection, keeping at most one per category.
    pub fn toggle(&self, selected: Vec<String>, id: &str) -> Vec<String> {
        self.table.toggle(&selected, id)
    }

    /// List suffix table rows, optionally filtered by part of speech.
    pub fn suffixes(&self, pos: Option<String>) -> Result<JsValue, JsError> {
        let filter = parse_pos_filter(pos).map_err(|e| JsError::new(&e))?;
        let rows: Vec<JsSuffix> = self
            .table
            .all()
            .iter()
            .filter(|e| filter.is_none_or(|p| e.pos() == p))
            .map(suffix_to_js)
            .collect();
        to_js(&rows)
    }

    /// List roots, optionally filtered by part of speech.
    pub fn roots(&self, pos: Option<String>) -> Result<JsValue, JsError> {
        let filter = parse_pos_filter(pos).map_err(|e| JsError::new(&e))?;
        let rows: Vec<JsRoot> = self
            .roots
            .all()
            .iter()
            .filter(|e| filter.is_none_or(|p| e.pos == p))
            .map(root_to_js)
            .collect();
        to_js(&rows)
    }
}
