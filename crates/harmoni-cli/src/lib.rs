// harmoni-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use harmoni_core::PartOfSpeech;
use harmoni_core::character::to_turkish_lowercase;
use harmoni_tr::lexicon::{SuffixTable, default_suffix_table};
use tracing::debug;

/// Suffix table file name looked up in search directories.
const TABLE_FILE: &str = "suffixes.json";

/// Environment variable naming a table file or a directory containing one.
const TABLE_ENV: &str = "HARMONI_TABLE_PATH";

/// Environment variable holding the `tracing` filter directives.
const LOG_ENV: &str = "HARMONI_LOG";

/// Find and load a suffix table.
///
/// Search order:
/// 1. `table_path` argument (if provided; must exist)
/// 2. `HARMONI_TABLE_PATH` environment variable (file, or directory with `suffixes.json`)
/// 3. `~/.harmoni/suffixes.json`
/// 4. The table embedded in `harmoni-tr`
pub fn load_table(table_path: Option<&str>) -> Result<SuffixTable, String> {
    if let Some(p) = table_path.filter(|p| !PathBuf::from(p).is_file()) {
        return Err(format!("table file not found: {p}"));
    }

    for path in build_search_paths(table_path) {
        if path.is_file() {
            debug!(path = %path.display(), "loading suffix table");
            let json = std::fs::read_to_string(&path)
                .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
            return SuffixTable::from_json(&json)
                .map_err(|e| format!("invalid table {}: {e}", path.display()));
        }
    }

    debug!("using embedded suffix table");
    Ok(default_suffix_table())
}

/// Build the list of candidate table files.
fn build_search_paths(table_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = table_path {
        paths.push(PathBuf::from(p));
    }

    if let Ok(env_path) = std::env::var(TABLE_ENV) {
        paths.push(PathBuf::from(&env_path));
        paths.push(PathBuf::from(&env_path).join(TABLE_FILE));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".harmoni").join(TABLE_FILE));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Install a compact `tracing` subscriber on stderr.
///
/// Filter directives come from `HARMONI_LOG` (e.g. `harmoni_tr=trace`),
/// defaulting to `warn`.
pub fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = fmt::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Parse a `--table=PATH` or `-t PATH` argument from command line args.
///
/// Returns `(table_path, remaining_args)`.
pub fn parse_table_path(args: &[String]) -> (Option<String>, Vec<String>) {
    parse_option(args, "--table", "-t")
}

/// Parse a `--long=VALUE`, `--long VALUE` or `-s VALUE` option.
///
/// The last occurrence wins. Returns `(value, remaining_args)`.
pub fn parse_option(args: &[String], long: &str, short: &str) -> (Option<String>, Vec<String>) {
    let mut value = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();
    let prefix = format!("{long}=");

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix(&prefix) {
            value = Some(val.to_string());
        } else if arg == long || arg == short {
            match iter.next() {
                Some(val) => value = Some(val.clone()),
                None => fatal(&format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Remove every occurrence of `flag` from args.
///
/// Returns `(present, remaining_args)`.
pub fn take_flag(args: &[String], flag: &str) -> (bool, Vec<String>) {
    let present = args.iter().any(|a| a == flag);
    let remaining = args.iter().filter(|a| *a != flag).cloned().collect();
    (present, remaining)
}

/// Parse a part-of-speech tag, case-insensitively (`noun`, `VERB`, `adj`).
pub fn parse_pos(tag: &str) -> Result<PartOfSpeech, String> {
    tag.to_ascii_uppercase()
        .parse()
        .map_err(|e| format!("{e} (expected NOUN, VERB or ADJ)"))
}

/// Split a request line `root id id ...` into a lowercased root and suffix ids.
///
/// Returns `None` for blank lines.
pub fn parse_request(line: &str) -> Option<(String, Vec<String>)> {
    let mut words = line.split_whitespace();
    let root = to_turkish_lowercase(words.next()?);
    Some((root, words.map(str::to_string).collect()))
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn table_path_forms() {
        let (path, rest) = parse_table_path(&args(&["-t", "a.json", "ev", "noun-plural"]));
        assert_eq!(path.as_deref(), Some("a.json"));
        assert_eq!(rest, args(&["ev", "noun-plural"]));

        let (path, rest) = parse_table_path(&args(&["ev", "--table=b.json"]));
        assert_eq!(path.as_deref(), Some("b.json"));
        assert_eq!(rest, args(&["ev"]));

        let (path, rest) = parse_table_path(&args(&["ev"]));
        assert_eq!(path, None);
        assert_eq!(rest, args(&["ev"]));
    }

    #[test]
    fn flags_are_removed() {
        let (trace, rest) = take_flag(&args(&["--trace", "ev", "noun-plural"]), "--trace");
        assert!(trace);
        assert_eq!(rest, args(&["ev", "noun-plural"]));
        let (trace, _) = take_flag(&args(&["ev"]), "--trace");
        assert!(!trace);
    }

    #[test]
    fn pos_is_case_insensitive() {
        assert_eq!(parse_pos("noun"), Ok(PartOfSpeech::Noun));
        assert_eq!(parse_pos("Adj"), Ok(PartOfSpeech::Adjective));
        assert!(parse_pos("adverb").is_err());
    }

    #[test]
    fn request_lines() {
        assert_eq!(parse_request("   "), None);
        let (root, ids) = parse_request("KİTAP noun-poss-3sg  noun-case-loc").unwrap();
        assert_eq!(root, "kitap");
        assert_eq!(ids, args(&["noun-poss-3sg", "noun-case-loc"]));
        let (root, ids) = parse_request("IRMAK").unwrap();
        assert_eq!(root, "ırmak");
        assert!(ids.is_empty());
    }

    #[test]
    fn missing_explicit_table_is_an_error() {
        let err = load_table(Some("/nonexistent/harmoni/suffixes.json")).unwrap_err();
        assert!(err.contains("not found"));
    }

    #[test]
    fn explicit_table_is_loaded() {
        let path = std::env::temp_dir().join(format!("harmoni-cli-test-{}.json", process::id()));
        std::fs::write(
            &path,
            r#"{"suffixes": [
                {"id": "pl", "pos": "NOUN", "category": "plural", "order": 1, "pattern": "lAr"}
            ]}"#,
        )
        .unwrap();
        let table = load_table(path.to_str()).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(table.all().len(), 1);
        assert_eq!(table.synthesize("ev", &["pl"]).unwrap().surface, "evler");
    }
}
