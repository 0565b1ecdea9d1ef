// fraasi-suggest: Generate phrase suggestions from tokens.
//
// Tokens come from positional arguments, or, when none are given, from
// stdin text split on whitespace. Whitespace splitting is input plumbing
// only: punctuation must already be separated into its own tokens by an
// external tokenizer.
//
// Usage:
//   fraasi-suggest [-s STOP_WORDS] [OPTIONS] [TOKEN...]
//
// Options:
//   -s, --stop-words PATH   Stop-word list file (one word per line)
//   -w, --max-words N       Tokens combined per suggestion (default: 3)
//   -i, --ignore-length N   Skip tokens of N characters or fewer (default: 1)
//   -k, --keyword KW        Only print suggestions containing KW
//   -h, --help              Print help

use std::io::{self, Read, Write};

use fraasi::SuggestionGenerator;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (stop_words_path, args) = fraasi_cli::parse_stop_words_path(&args);

    if fraasi_cli::wants_help(&args) {
        println!("fraasi-suggest: Generate phrase suggestions from tokens.");
        println!();
        println!("Usage: fraasi-suggest [-s STOP_WORDS] [OPTIONS] [TOKEN...]");
        println!();
        println!("If TOKEN arguments are given, they form the token stream.");
        println!("Otherwise stdin is read and split on whitespace. Punctuation");
        println!("should already be separated into its own tokens.");
        println!();
        println!("Options:");
        println!("  -s, --stop-words PATH   Stop-word list file (one word per line,");
        println!("                          also via FRAASI_STOP_WORDS)");
        println!("  -w, --max-words N       Tokens combined per suggestion (default: 3)");
        println!("  -i, --ignore-length N   Skip tokens of N characters or fewer (default: 1)");
        println!("  -k, --keyword KW        Only print suggestions containing KW");
        println!("  -h, --help              Print this help");
        return;
    }

    let mut max_words: Option<usize> = None;
    let mut ignore_length: Option<usize> = None;
    let mut keyword: Option<String> = None;
    let mut tokens: Vec<String> = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "-w" || arg == "--max-words" {
            if i + 1 < args.len() {
                max_words = Some(
                    args[i + 1]
                        .parse()
                        .unwrap_or_else(|_| fraasi_cli::fatal("invalid number for --max-words")),
                );
                skip_next = true;
            } else {
                fraasi_cli::fatal("--max-words requires a value");
            }
        } else if arg == "-i" || arg == "--ignore-length" {
            if i + 1 < args.len() {
                ignore_length = Some(args[i + 1].parse().unwrap_or_else(|_| {
                    fraasi_cli::fatal("invalid number for --ignore-length")
                }));
                skip_next = true;
            } else {
                fraasi_cli::fatal("--ignore-length requires a value");
            }
        } else if arg == "-k" || arg == "--keyword" {
            if i + 1 < args.len() {
                keyword = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                fraasi_cli::fatal("--keyword requires a value");
            }
        } else if !arg.starts_with('-') {
            tokens.push(arg.clone());
        }
    }

    if tokens.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .unwrap_or_else(|e| fraasi_cli::fatal(&format!("failed to read stdin: {e}")));
        tokens = input.split_whitespace().map(|s| s.to_string()).collect();
    }

    let stop_words = fraasi_cli::load_stop_words(stop_words_path.as_deref())
        .unwrap_or_else(|e| fraasi_cli::fatal(&e));

    let mut builder = SuggestionGenerator::builder(tokens).stop_word_set(stop_words);
    if let Some(n) = max_words {
        builder = builder.max_combined_words(n);
    }
    if let Some(n) = ignore_length {
        builder = builder.max_word_to_ignore_length(n);
    }
    let generator = builder.build();

    let suggestions = match keyword.as_deref() {
        Some(kw) => generator.suggest_by_keyword(kw),
        None => generator.suggest(),
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for suggestion in &suggestions {
        let _ = writeln!(out, "{suggestion}");
    }
}
