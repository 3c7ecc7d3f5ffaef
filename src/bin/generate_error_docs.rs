//! Generate error code documentation from the source of truth (error enums).
//!
//! Codes, descriptions, details and help text come straight from the
//! `ParseError` and `WordListError` implementations.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::fmt::Write;
use std::io;
use std::path::PathBuf;

use wordtools::errors::ParseError;
use wordtools::word_list::WordListError;

/// Append the documentation block for each error to `$out`. Works for any error
/// type with `code()`, `description()`, `details()`, `help()` and `display_detailed()`.
macro_rules! generate_error_docs {
    ($out:expr, $errors:expr) => {
        for error in $errors {
            let _ = writeln!($out, "### {}: {}\n", error.code(), error.description());
            let _ = writeln!($out, "**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                let _ = writeln!($out, "**How to fix:**\n```\n{help_text}\n```\n");
            }

            let _ = writeln!($out, "**Example error message:**\n```\n{error}\n```\n");
            let _ = writeln!($out, "**Detailed format:**\n```\n{}\n```\n", error.display_detailed());
            let _ = writeln!($out, "---\n");
        }
    };
}

fn all_parse_error_variants() -> Vec<ParseError> {
    vec![
        ParseError::InvalidLetter { invalid_char: '3' },
        ParseError::NoSides,
        ParseError::EmptySide { index: 2 },
        ParseError::EmptyGuess,
        ParseError::DanglingGreenMarker { guess: "cran.".to_string() },
        ParseError::GuessLengthMismatch { guess: "Crane.s".to_string(), expected: 5, found: 6 },
        ParseError::InvalidGuess { guess: "cr-ne".to_string(), invalid_char: '-' },
        ParseError::InvalidRequiredLetter { input: "ab".to_string() },
        ParseError::NomError(nom::error::ErrorKind::OneOf),
    ]
}

fn all_word_list_error_variants() -> Vec<WordListError> {
    let json_err = serde_json::from_str::<Vec<String>>("[1]")
        .err()
        .map(WordListError::Json);
    let mut errors = vec![WordListError::Io {
        path: PathBuf::from("words.txt"),
        source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
    }];
    errors.extend(json_err);
    errors.push(WordListError::Empty { path: PathBuf::from("words.txt") });
    errors
}

fn render_docs() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Error Code Reference\n");
    let _ = writeln!(out, "**This document is generated from the source code. Do not edit manually.**\n");

    let _ = writeln!(out, "## Table of Contents\n");
    let _ = writeln!(out, "- [Word List Errors (W001–W003)](#word-list-errors)");
    let _ = writeln!(out, "- [Parse Errors (E001–E009)](#parse-errors)\n");

    let _ = writeln!(out, "## Word List Errors\n");
    let _ = writeln!(out, "Errors reading or decoding the dictionary file.\n");
    generate_error_docs!(out, all_word_list_error_variants());

    let _ = writeln!(out, "## Parse Errors\n");
    let _ = writeln!(out, "Errors in puzzle input: letter-boxed sides, wordle guesses, spelling-bee letters.\n");
    generate_error_docs!(out, all_parse_error_variants());

    let _ = writeln!(out, "## Error Display Format\n");
    let _ = writeln!(out, "The CLI prints `display_detailed()`:\n");
    let _ = writeln!(out, "```\n<message> (<code>)\n<help text if available>\n```");
    out
}

fn main() {
    print!("{}", render_docs());
}
