//! End-to-end synthesis tests against the embedded tables.
//!
//! The golden list in `tests/golden/words.json` pairs a root and a suffix id
//! selection (in any order) with the expected surface and chain.
//!
//! Run: cargo test -p harmoni-tr --test synthesis

use std::path::PathBuf;

use harmoni_core::character::{is_back_vowel, last_vowel};
use harmoni_core::{Category, PartOfSpeech, SuffixDescriptor};
use harmoni_tr::lexicon::{SuffixTable, default_roots, default_suffix_table};
use harmoni_tr::{Rule, synthesize, synthesize_traced};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct GoldenWord {
    root: String,
    suffixes: Vec<String>,
    surface: String,
    chain: String,
}

fn load_golden() -> Vec<GoldenWord> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/golden/words.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

fn descriptor<'a>(table: &'a SuffixTable, id: &str) -> &'a SuffixDescriptor {
    &table
        .get(id)
        .unwrap_or_else(|| panic!("missing suffix {id}"))
        .descriptor
}

// ---------------------------------------------------------------------------
// Golden words
// ---------------------------------------------------------------------------

#[test]
fn golden_words() {
    let table = default_suffix_table();
    let mut failures = Vec::new();
    for word in load_golden() {
        let result = table
            .synthesize(&word.root, &word.suffixes)
            .unwrap_or_else(|e| panic!("{}: {e}", word.root));
        if result.surface != word.surface || result.chain != word.chain {
            failures.push(format!(
                "{} {:?}: expected {} [{}], got {} [{}]",
                word.root, word.suffixes, word.surface, word.chain, result.surface, result.chain
            ));
        }
    }
    assert!(failures.is_empty(), "golden mismatches:\n{}", failures.join("\n"));
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn no_suffixes_returns_root() {
    for root in default_roots().all() {
        let none: [SuffixDescriptor; 0] = [];
        let result = synthesize(&root.root, &none);
        assert_eq!(result.surface, root.root);
        assert_eq!(result.chain, root.root);
    }
}

#[test]
fn empty_root_gives_empty_result() {
    let table = default_suffix_table();
    let all: Vec<&SuffixDescriptor> = table.all().iter().map(|e| &e.descriptor).collect();
    let result = synthesize("", all.iter().copied());
    assert_eq!(result.surface, "");
    assert_eq!(result.chain, "");
}

#[test]
fn plural_follows_two_way_harmony() {
    let table = default_suffix_table();
    let plural = descriptor(&table, "noun-plural");
    for root in default_roots().by_pos(PartOfSpeech::Noun) {
        let expected = if last_vowel(&root.root).is_some_and(is_back_vowel) {
            "lar"
        } else {
            "ler"
        };
        let result = synthesize(&root.root, [plural]);
        assert_eq!(result.surface, format!("{}{expected}", root.root), "root {}", root.root);
    }
}

#[test]
fn genitive_follows_four_way_harmony() {
    let table = default_suffix_table();
    let genitive = descriptor(&table, "noun-case-gen");
    assert_eq!(synthesize("ev", [genitive]).surface, "evin");
    assert_eq!(synthesize("kol", [genitive]).surface, "kolun");
    assert_eq!(synthesize("g\u{00F6}z", [genitive]).surface, "g\u{00F6}z\u{00FC}n");
    assert_eq!(synthesize("oda", [genitive]).surface, "odan\u{0131}n");
}

#[test]
fn softening_never_leaves_voiceless_stop_before_vowel() {
    let table = default_suffix_table();
    for id in ["noun-case-acc", "noun-case-dat", "noun-poss-1sg", "noun-poss-3sg"] {
        let result = synthesize("kitap", [descriptor(&table, id)]);
        assert!(result.surface.starts_with("kitab"), "{id}: {}", result.surface);
        assert!(result.chain.starts_with("kitap + "), "{id}: {}", result.chain);
    }
}

#[test]
fn buffer_prevents_hiatus() {
    let table = default_suffix_table();
    let result = synthesize("kedi", [descriptor(&table, "noun-case-dat")]);
    assert_eq!(result.surface, "kediye");
    let result = synthesize("kedi", [descriptor(&table, "noun-case-acc")]);
    assert!(result.surface.starts_with("kediy"));
}

#[test]
fn possessive_link_only_with_flag_and_case() {
    let table = default_suffix_table();
    let p3 = descriptor(&table, "noun-poss-3sg");
    let loc = descriptor(&table, "noun-case-loc");
    let plural = descriptor(&table, "noun-plural");

    let (with_flag, trace) = synthesize_traced("kedi", [p3, loc]);
    assert_eq!(with_flag.surface, "kedisinde");
    assert!(
        trace[1]
            .as_ref()
            .is_some_and(|a| a.rules.contains(&Rule::PossessiveLink))
    );

    // Same stem shape without the possessive flag.
    let (without_flag, trace) = synthesize_traced("kedisi", [loc]);
    assert_eq!(without_flag.surface, "kediside");
    assert!(
        trace[0]
            .as_ref()
            .is_some_and(|a| !a.rules.contains(&Rule::PossessiveLink))
    );

    // Flag set but not a case suffix.
    let not_case = SuffixDescriptor::surface(PartOfSpeech::Noun, Category::Plural, "lAr");
    assert_eq!(synthesize("kedi", [p3, &not_case]).surface, "kedisiler");
    assert_eq!(synthesize("kedi", [plural, loc]).surface, "kedilerde");
}

#[test]
fn zero_suffix_only_appends_null_marker() {
    let table = default_suffix_table();
    let zero = descriptor(&table, "verb-person-3sg");
    for root in default_roots().by_pos(PartOfSpeech::Verb) {
        for tense in table.by_category(PartOfSpeech::Verb, Category::Tense) {
            let base = synthesize(&root.root, [&tense.descriptor]);
            let with_zero = synthesize(&root.root, [&tense.descriptor, zero]);
            assert_eq!(with_zero.surface, base.surface);
            assert_eq!(with_zero.chain, format!("{} + \u{00F8}", base.chain));
        }
    }
}

#[test]
fn chain_has_one_entry_per_applicable_suffix() {
    let table = default_suffix_table();
    let ids = ["noun-plural", "noun-poss-1pl", "noun-case-abl"];
    let result = table.synthesize("ev", &ids).unwrap();
    assert_eq!(result.chain.split(" + ").count(), ids.len() + 1);
}

#[test]
fn synthesis_is_deterministic() {
    let table = default_suffix_table();
    for root in default_roots().all() {
        let ids: Vec<&str> = table
            .by_pos(root.pos)
            .iter()
            .map(|e| e.id.as_str())
            .take(2)
            .collect();
        let first = table.synthesize(&root.root, &ids).unwrap();
        let second = table.synthesize(&root.root, &ids).unwrap();
        assert_eq!(first, second);
    }
}
