// typo-spell: Check spelling of words from stdin.
//
// Reads words from stdin (one per line) and reports whether each word
// is correctly spelled:
//   C: word    (correct)
//   W: word    (wrong / misspelled)
//
// Usage:
//   typo-spell [-d DICT_PATH] [-l LANG] [OPTIONS]
//
// Options:
//   -d, --dict-path PATH       Directory containing LANG.aff and LANG.dic
//   -l, --lang LANG            Dictionary name (default: en_US)
//   -s, --suggest              Also print suggestions for misspelled words
//   -n, --max-suggestions N    Suggestions printed per word (default: 5)
//   -v, --verbose              Debug logging on stderr
//   -h, --help                 Print help

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = typo_cli::parse_dict_path(&args);
    let (lang, args) = typo_cli::parse_lang(&args);
    let (max_suggestions, args) = typo_cli::take_option(&args, "--max-suggestions", "-n");

    if typo_cli::wants_help(&args) {
        println!("typo-spell: Check spelling of words from stdin.");
        println!();
        println!("Usage: typo-spell [-d DICT_PATH] [-l LANG] [OPTIONS]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  C: word    (correct)");
        println!("  W: word    (misspelled)");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH     Directory containing LANG.aff and LANG.dic");
        println!("  -l, --lang LANG          Dictionary name (default: {})", typo_cli::DEFAULT_LANG);
        println!("  -s, --suggest            Also print suggestions for misspelled words");
        println!("  -n, --max-suggestions N  Suggestions printed per word (default: 5)");
        println!("  -v, --verbose            Debug logging on stderr");
        println!("  -h, --help               Print this help");
        return;
    }

    typo_cli::init_logging(&args);
    let show_suggestions = args.iter().any(|a| a == "-s" || a == "--suggest");

    let mut typo = typo_cli::load_handle(dict_path.as_deref(), &lang)
        .unwrap_or_else(|e| typo_cli::fatal(&e));

    if let Some(n) = max_suggestions {
        let n = n
            .parse()
            .unwrap_or_else(|_| typo_cli::fatal("invalid number for --max-suggestions"));
        typo.set_max_suggestions(n);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        let correct = typo.check(word).unwrap_or_else(|e| typo_cli::fatal(&e.to_string()));
        if correct {
            let _ = writeln!(out, "C: {word}");
        } else {
            let _ = writeln!(out, "W: {word}");
            if show_suggestions {
                let suggestions = typo
                    .suggest(word)
                    .unwrap_or_else(|e| typo_cli::fatal(&e.to_string()));
                for suggestion in suggestions {
                    let _ = writeln!(out, "S: {suggestion}");
                }
            }
        }
    }
}
