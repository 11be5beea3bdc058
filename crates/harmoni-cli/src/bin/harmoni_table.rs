// harmoni-table: List the roots and suffixes available for synthesis.
//
// Suffixes are grouped by part of speech and category, with their pattern
// notation, attachment rank and English label.
//
// Usage:
//   harmoni-table [-t TABLE] [--pos POS]
//
// Options:
//   -t, --table PATH   Suffix table JSON file
//   -p, --pos POS      Only list NOUN, VERB or ADJ
//   -h, --help         Print help

use std::io::{self, Write};

use harmoni_core::PartOfSpeech;
use harmoni_tr::lexicon::default_roots;

fn main() {
    harmoni_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (table_path, args) = harmoni_cli::parse_table_path(&args);
    let (pos, args) = harmoni_cli::parse_option(&args, "--pos", "-p");

    if harmoni_cli::wants_help(&args) {
        println!("harmoni-table: List roots and suffixes.");
        println!();
        println!("Usage: harmoni-table [-t TABLE] [--pos POS]");
        println!();
        println!("Options:");
        println!("  -t, --table PATH   Suffix table JSON file");
        println!("  -p, --pos POS      Only list NOUN, VERB or ADJ");
        println!("  -h, --help         Print this help");
        return;
    }

    if let Some(extra) = args.first() {
        harmoni_cli::fatal(&format!("unexpected argument: {extra}"));
    }

    let filter = pos
        .map(|p| harmoni_cli::parse_pos(&p).unwrap_or_else(|e| harmoni_cli::fatal(&e)));
    let table = harmoni_cli::load_table(table_path.as_deref())
        .unwrap_or_else(|e| harmoni_cli::fatal(&e));
    let roots = default_roots();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for pos in PartOfSpeech::ALL {
        if filter.is_some_and(|f| f != pos) {
            continue;
        }
        let _ = writeln!(out, "{pos}");

        let _ = writeln!(out, "  roots:");
        for root in roots.by_pos(pos) {
            let _ = writeln!(out, "    {:<10} {:<10} {}", root.id, root.root, root.gloss_en);
        }

        for &category in pos.categories() {
            let entries = table.by_category(pos, category);
            if entries.is_empty() {
                continue;
            }
            let _ = writeln!(out, "  {category}:");
            for entry in entries {
                let _ = writeln!(
                    out,
                    "    {:<16} {:<6} {:>3}  {}",
                    entry.id,
                    entry.notation(),
                    entry.order,
                    entry.label_en
                );
            }
        }
    }
}
