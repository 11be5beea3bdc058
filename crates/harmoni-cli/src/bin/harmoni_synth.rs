// harmoni-synth: Build inflected Turkish words from a root and suffix ids.
//
// Suffix ids are put into attachment order before synthesis, so they may be
// given in any order. Prints the surface form and the gloss chain.
//
// Usage:
//   harmoni-synth [-t TABLE] [--trace] [ROOT SUFFIX_ID...]
//
// Options:
//   -t, --table PATH   Suffix table JSON file
//   --trace            Print the rules applied for each suffix
//   -h, --help         Print help

use std::io::{self, BufRead, Write};

use harmoni_tr::lexicon::SuffixTable;

fn main() {
    harmoni_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (table_path, args) = harmoni_cli::parse_table_path(&args);
    let (trace, args) = harmoni_cli::take_flag(&args, "--trace");

    if harmoni_cli::wants_help(&args) {
        println!("harmoni-synth: Turkish word synthesis.");
        println!();
        println!("Usage: harmoni-synth [-t TABLE] [--trace] [ROOT SUFFIX_ID...]");
        println!();
        println!("If ROOT is given, synthesizes ROOT with the listed suffixes.");
        println!("Otherwise reads lines of the form `root id id ...` from stdin.");
        println!();
        println!("Options:");
        println!("  -t, --table PATH   Suffix table JSON file");
        println!("  --trace            Print the rules applied for each suffix");
        println!("  -h, --help         Print this help");
        return;
    }

    let table = harmoni_cli::load_table(table_path.as_deref())
        .unwrap_or_else(|e| harmoni_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if args.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let Some((root, ids)) = harmoni_cli::parse_request(&line) else {
                continue;
            };
            if let Err(e) = synthesize_line(&table, &root, &ids, trace, &mut out) {
                eprintln!("error: {root}: {e}");
            }
        }
    } else {
        let line = args.join(" ");
        if let Some((root, ids)) = harmoni_cli::parse_request(&line) {
            synthesize_line(&table, &root, &ids, trace, &mut out)
                .unwrap_or_else(|e| harmoni_cli::fatal(&format!("{root}: {e}")));
        }
    }
}

fn synthesize_line(
    table: &SuffixTable,
    root: &str,
    ids: &[String],
    trace: bool,
    out: &mut impl Write,
) -> Result<(), harmoni_tr::lexicon::LexiconError> {
    if !trace {
        let result = table.synthesize(root, ids)?;
        let _ = writeln!(out, "{}\t{}", result.surface, result.chain);
        return Ok(());
    }

    let (result, steps) = table.synthesize_traced(root, ids)?;
    let _ = writeln!(out, "{}\t{}", result.surface, result.chain);
    for (entry, attachment) in steps {
        match attachment {
            None => {
                let _ = writeln!(out, "  {}: (inert)", entry.id);
            }
            Some(a) => {
                let rules: Vec<String> = a.rules.iter().map(ToString::to_string).collect();
                let _ = writeln!(
                    out,
                    "  {}: +{} -> {}{}",
                    entry.id,
                    a.fragment,
                    a.stem,
                    if rules.is_empty() {
                        String::new()
                    } else {
                        format!("  [{}]", rules.join("; "))
                    }
                );
            }
        }
    }
    Ok(())
}
