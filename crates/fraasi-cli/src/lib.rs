// fraasi-cli: shared utilities for CLI tools.

use std::path::Path;
use std::process;

use fraasi::{FraasiError, StopWordSet};

/// Environment variable naming a stop-word list file, consulted when no
/// `--stop-words` flag is given.
const STOP_WORDS_ENV: &str = "FRAASI_STOP_WORDS";

/// Load the stop-word set for a CLI invocation.
///
/// Search order:
/// 1. `path` argument (if provided)
/// 2. `FRAASI_STOP_WORDS` environment variable
/// 3. Neither set: an empty stop-word set
pub fn load_stop_words(path: Option<&str>) -> Result<StopWordSet, String> {
    let resolved = match path {
        Some(p) => Some(p.to_string()),
        None => std::env::var(STOP_WORDS_ENV).ok(),
    };

    match resolved {
        Some(p) => StopWordSet::from_path(Path::new(&p))
            .map_err(|e: FraasiError| format!("failed to load stop-word list {p}: {e}")),
        None => Ok(StopWordSet::new()),
    }
}

/// Parse a `--stop-words=PATH`, `--stop-words PATH` or `-s PATH` argument
/// from command line args.
///
/// Returns `(stop_words_path, remaining_args)`.
pub fn parse_stop_words_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut stop_words_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--stop-words=") {
            stop_words_path = Some(val.to_string());
        } else if arg == "--stop-words" || arg == "-s" {
            if i + 1 < args.len() {
                stop_words_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {} requires a value", arg);
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (stop_words_path, remaining)
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
    fn parse_equals_form() {
        let (path, rest) = parse_stop_words_path(&args(&["--stop-words=sw.txt", "alpha"]));
        assert_eq!(path.as_deref(), Some("sw.txt"));
        assert_eq!(rest, args(&["alpha"]));
    }

    #[test]
    fn parse_separate_value_form() {
        let (path, rest) = parse_stop_words_path(&args(&["-s", "sw.txt", "alpha", "beta"]));
        assert_eq!(path.as_deref(), Some("sw.txt"));
        assert_eq!(rest, args(&["alpha", "beta"]));
    }

    #[test]
    fn parse_absent_flag() {
        let (path, rest) = parse_stop_words_path(&args(&["alpha", "beta"]));
        assert!(path.is_none());
        assert_eq!(rest, args(&["alpha", "beta"]));
    }

    #[test]
    fn load_without_path_or_env_is_empty() {
        // The env var is not set in the test environment.
        if std::env::var(STOP_WORDS_ENV).is_ok() {
            return;
        }
        let set = load_stop_words(None).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let err = load_stop_words(Some("/nonexistent/stopwords.txt")).unwrap_err();
        assert!(err.contains("/nonexistent/stopwords.txt"));
    }
}
