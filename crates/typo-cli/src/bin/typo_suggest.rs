// typo-suggest: Generate spelling suggestions for words.
//
// Suggests corrections for each WORD argument, or for words read from
// stdin (one per line). Correctly spelled words are printed as-is.
//
// Usage:
//   typo-suggest [-d DICT_PATH] [-l LANG] [OPTIONS] [WORD...]
//
// Options:
//   -d, --dict-path PATH       Directory containing LANG.aff and LANG.dic
//   -l, --lang LANG            Dictionary name (default: en_US)
//   -n, --max-suggestions N    Maximum number of suggestions (default: 5)
//   -e, --max-distance N       Maximum edit distance (default: 2)
//   --levenshtein              Score swaps as two edits
//   -v, --verbose              Debug logging on stderr
//   -h, --help                 Print help

use std::io::{self, BufRead, Write};

use typo_speller::{DistanceMetric, Typo};

fn parse_number(value: Option<String>, name: &str) -> Option<usize> {
    value.map(|v| {
        v.parse()
            .unwrap_or_else(|_| typo_cli::fatal(&format!("invalid number for {name}")))
    })
}

fn suggest_word(word: &str, typo: &Typo, out: &mut impl Write) {
    let correct = typo.check(word).unwrap_or_else(|e| typo_cli::fatal(&e.to_string()));
    if correct {
        let _ = writeln!(out, "{word} (correct)");
        return;
    }
    let suggestions = typo.suggest(word).unwrap_or_else(|e| typo_cli::fatal(&e.to_string()));
    if suggestions.is_empty() {
        let _ = writeln!(out, "{word}: (no suggestions)");
    } else {
        let _ = writeln!(out, "{word}:");
        for s in &suggestions {
            let _ = writeln!(out, "  {s}");
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = typo_cli::parse_dict_path(&args);
    let (lang, args) = typo_cli::parse_lang(&args);
    let (max_suggestions, args) = typo_cli::take_option(&args, "--max-suggestions", "-n");
    let (max_distance, args) = typo_cli::take_option(&args, "--max-distance", "-e");

    if typo_cli::wants_help(&args) {
        println!("typo-suggest: Generate spelling suggestions.");
        println!();
        println!("Usage: typo-suggest [-d DICT_PATH] [-l LANG] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, suggests for each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH     Directory containing LANG.aff and LANG.dic");
        println!("  -l, --lang LANG          Dictionary name (default: {})", typo_cli::DEFAULT_LANG);
        println!("  -n, --max-suggestions N  Maximum number of suggestions (default: 5)");
        println!("  -e, --max-distance N     Maximum edit distance (default: 2)");
        println!("  --levenshtein            Score swaps as two edits");
        println!("  -v, --verbose            Debug logging on stderr");
        println!("  -h, --help               Print this help");
        return;
    }

    typo_cli::init_logging(&args);
    let max_suggestions = parse_number(max_suggestions, "--max-suggestions");
    let max_distance = parse_number(max_distance, "--max-distance");
    let levenshtein = args.iter().any(|a| a == "--levenshtein");
    let words: Vec<&String> = args.iter().filter(|a| !a.starts_with('-')).collect();

    let mut typo = typo_cli::load_handle(dict_path.as_deref(), &lang)
        .unwrap_or_else(|e| typo_cli::fatal(&e));
    if let Some(n) = max_suggestions {
        typo.set_max_suggestions(n);
    }
    if let Some(n) = max_distance {
        typo.set_max_edit_distance(n);
    }
    if levenshtein {
        typo.set_distance_metric(DistanceMetric::Levenshtein);
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if words.is_empty() {
        let stdin = io::stdin();
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
            suggest_word(word, &typo, &mut out);
        }
    } else {
        for word in words {
            suggest_word(word, &typo, &mut out);
        }
    }
}
