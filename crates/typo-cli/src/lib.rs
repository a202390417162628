// typo-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;

use typo_speller::loader::read_source_strict;
use typo_speller::settings::{DEFAULT_DICTIONARY_DIR, DICTIONARY_PATH_ENV};
use typo_speller::{Typo, TypoSettings};

/// Dictionary used when no `--lang` is given.
pub const DEFAULT_LANG: &str = "en_US";

/// Search for the `.aff`/`.dic` pair of `lang` and build a handle.
///
/// Each search directory may hold the files directly (`<dir>/<lang>.aff`)
/// or in a per-dictionary subdirectory (`<dir>/<lang>/<lang>.aff`).
///
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. `TYPO_DICTIONARY_PATH` environment variable
/// 3. `~/.typo/dictionaries`
/// 4. System Hunspell directories
/// 5. `./dictionaries`, then the current directory
pub fn load_handle(dict_path: Option<&str>, lang: &str) -> Result<Typo, String> {
    let search_paths = build_search_paths(dict_path);

    for dir in &search_paths {
        let Some((aff_path, dic_path)) = find_sources(dir, lang) else {
            continue;
        };
        log::info!("using dictionary {} from {}", lang, dir.display());

        let aff = read_source_strict(&aff_path).map_err(|e| e.to_string())?;
        let dic = read_source_strict(&dic_path).map_err(|e| e.to_string())?;
        return Typo::new(Some(lang), Some(aff), Some(dic), TypoSettings::default())
            .map_err(|e| format!("failed to load dictionary {lang}: {e}"));
    }

    Err(format!(
        "could not find {lang}.aff and {lang}.dic in any of the search paths:\n{}",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Locate both source files of `lang` within `dir`.
fn find_sources(dir: &Path, lang: &str) -> Option<(PathBuf, PathBuf)> {
    [dir.join(lang), dir.to_path_buf()].into_iter().find_map(|base| {
        let aff = base.join(format!("{lang}.aff"));
        let dic = base.join(format!("{lang}.dic"));
        (aff.is_file() && dic.is_file()).then_some((aff, dic))
    })
}

/// Build the list of directories to search for dictionary files.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }

    if let Ok(env_path) = std::env::var(DICTIONARY_PATH_ENV) {
        if !env_path.is_empty() {
            paths.push(PathBuf::from(env_path));
        }
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".typo").join(DEFAULT_DICTIONARY_DIR));
        #[cfg(target_os = "macos")]
        paths.push(home.join("Library").join("Spelling"));
    }

    paths.push(PathBuf::from("/usr/share/hunspell"));
    paths.push(PathBuf::from("/usr/share/myspell/dicts"));

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(DEFAULT_DICTIONARY_DIR));
        paths.push(cwd);
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Remove a `--long=VALUE`, `--long VALUE` or `-s VALUE` option from the
/// argument list.
///
/// Returns `(value, remaining_args)`; the last occurrence wins.
pub fn take_option(args: &[String], long: &str, short: &str) -> (Option<String>, Vec<String>) {
    let prefix = format!("{long}=");
    let mut value = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix(prefix.as_str()) {
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

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    take_option(args, "--dict-path", "-d")
}

/// Parse a `--lang=NAME` or `-l NAME` argument, defaulting to [`DEFAULT_LANG`].
pub fn parse_lang(args: &[String]) -> (String, Vec<String>) {
    let (lang, remaining) = take_option(args, "--lang", "-l");
    (lang.unwrap_or_else(|| DEFAULT_LANG.to_string()), remaining)
}

/// Initialize logging to stderr.
///
/// `RUST_LOG` takes precedence; otherwise `-v`/`--verbose` selects debug
/// output and warnings are shown by default.
pub fn init_logging(args: &[String]) {
    let verbose = args.iter().any(|a| a == "-v" || a == "--verbose");
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
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
    fn dict_path_forms() {
        let (path, rest) = parse_dict_path(&args(&["-d", "/dicts", "-s"]));
        assert_eq!(path.as_deref(), Some("/dicts"));
        assert_eq!(rest, args(&["-s"]));

        let (path, rest) = parse_dict_path(&args(&["--dict-path=/x", "word"]));
        assert_eq!(path.as_deref(), Some("/x"));
        assert_eq!(rest, args(&["word"]));
    }

    #[test]
    fn lang_defaults_to_en_us() {
        let (lang, rest) = parse_lang(&args(&["teh"]));
        assert_eq!(lang, DEFAULT_LANG);
        assert_eq!(rest, args(&["teh"]));

        let (lang, _) = parse_lang(&args(&["--lang", "en_mini"]));
        assert_eq!(lang, "en_mini");
    }

    #[test]
    fn help_flag() {
        assert!(wants_help(&args(&["-h"])));
        assert!(!wants_help(&args(&["-d", "x"])));
    }

    fn test_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-data")
    }

    #[test]
    fn finds_nested_layout() {
        let (aff, dic) = find_sources(&test_data_dir(), "en_mini").unwrap();
        assert!(aff.ends_with("en_mini/en_mini.aff"));
        assert!(dic.ends_with("en_mini/en_mini.dic"));
    }

    #[test]
    fn finds_flat_layout() {
        assert!(find_sources(&test_data_dir().join("en_mini"), "en_mini").is_some());
        assert!(find_sources(&test_data_dir(), "xx_XX").is_none());
    }

    #[test]
    fn loads_from_explicit_path() {
        let dir = test_data_dir();
        let typo = load_handle(dir.to_str(), "en_mini").unwrap();
        assert!(typo.check("rewalked").unwrap());
    }

    #[test]
    fn missing_dictionary_lists_search_paths() {
        let err = load_handle(Some("/nonexistent/typo"), "xx_XX").unwrap_err();
        assert!(err.contains("xx_XX.aff"));
        assert!(err.contains("/nonexistent/typo"));
    }
}
