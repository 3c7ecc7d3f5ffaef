//! Error types for puzzle-input parsing, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (E001-E009) for documentation lookup:
//!
//! - E001: `InvalidLetter` (Character outside a-z)
//! - E002: `NoSides` (Letter-boxed puzzle without sides)
//! - E003: `EmptySide` (Letter-boxed side without letters)
//! - E004: `EmptyGuess` (Empty wordle guess)
//! - E005: `DanglingGreenMarker` (Wordle guess ends with '.')
//! - E006: `GuessLengthMismatch` (Wordle guesses of different lengths)
//! - E007: `InvalidGuess` (Wordle guess contains an unexpected character)
//! - E008: `InvalidRequiredLetter` (Spelling-bee required letter is not one letter)
//! - E009: `NomError` (Low-level nom parser error)
//!
//! # Examples
//!
//! ```
//! use wordtools::errors::ParseError;
//!
//! fn check_side(side: &str) -> Result<(), Box<ParseError>> {
//!     if side.is_empty() {
//!         return Err(Box::new(ParseError::EmptySide { index: 0 }));
//!     }
//!     Ok(())
//! }
//!
//! match check_side("") {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(()) => println!("Success"),
//! }
//! ```

use nom::error::{ErrorKind, ParseError as NomParseError};

/// Custom error type for puzzle-input parsing
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid character '{invalid_char}' (only lowercase a-z allowed)")]
    InvalidLetter { invalid_char: char },

    #[error("Letter-boxed puzzle has no sides")]
    NoSides,

    #[error("Side {index} of the letter-boxed puzzle has no letters")]
    EmptySide { index: usize },

    #[error("Empty wordle guess")]
    EmptyGuess,

    #[error("Wordle guess \"{guess}\" ends with a green marker but no letter")]
    DanglingGreenMarker { guess: String },

    #[error("Wordle guess \"{guess}\" has {found} letters, expected {expected}")]
    GuessLengthMismatch { guess: String, expected: usize, found: usize },

    #[error("Invalid wordle guess \"{guess}\": unexpected character '{invalid_char}'")]
    InvalidGuess { guess: String, invalid_char: char },

    #[error("Required letter \"{input}\" must be exactly one letter a-z")]
    InvalidRequiredLetter { input: String },

    // nom parser error (lowest level)
    #[error("nom parser error: {0:?}")]
    NomError(ErrorKind),
}

impl<'a> NomParseError<&'a str> for Box<ParseError> {
    fn from_error_kind(_input: &'a str, kind: ErrorKind) -> Self {
        Box::new(ParseError::NomError(kind))
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl ParseError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::InvalidLetter { .. } => "E001",
            ParseError::NoSides => "E002",
            ParseError::EmptySide { .. } => "E003",
            ParseError::EmptyGuess => "E004",
            ParseError::DanglingGreenMarker { .. } => "E005",
            ParseError::GuessLengthMismatch { .. } => "E006",
            ParseError::InvalidGuess { .. } => "E007",
            ParseError::InvalidRequiredLetter { .. } => "E008",
            ParseError::NomError(_) => "E009",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            ParseError::InvalidLetter { .. } => "Character outside a-z",
            ParseError::NoSides => "Letter-boxed puzzle without sides",
            ParseError::EmptySide { .. } => "Letter-boxed side without letters",
            ParseError::EmptyGuess => "Empty wordle guess",
            ParseError::DanglingGreenMarker { .. } => "Wordle guess ends with '.'",
            ParseError::GuessLengthMismatch { .. } => "Wordle guesses of different lengths",
            ParseError::InvalidGuess { .. } => "Wordle guess contains an unexpected character",
            ParseError::InvalidRequiredLetter { .. } => "Spelling-bee required letter is not one letter",
            ParseError::NomError(_) => "Low-level nom parser error",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            ParseError::InvalidLetter { .. } => "Puzzle letters are compared as lowercase ASCII. Accents and case are folded before this check, so the character has no a-z equivalent.",
            ParseError::NoSides => "A letter-boxed puzzle needs at least one side; every side is a group of letters that may not follow each other inside a word.",
            ParseError::EmptySide { .. } => "Each side of a letter-boxed puzzle must contain at least one letter.",
            ParseError::EmptyGuess => "A wordle guess must describe at least one letter.",
            ParseError::DanglingGreenMarker { .. } => "In a wordle guess '.' marks the following letter as green, so it cannot be the last character.",
            ParseError::GuessLengthMismatch { .. } => "All wordle guesses describe the same hidden word and must therefore have the same number of letters.",
            ParseError::InvalidGuess { .. } => "Wordle guesses use lowercase letters for grey, uppercase letters for yellow and '.' before a letter for green.",
            ParseError::InvalidRequiredLetter { .. } => "The spelling-bee centre letter must be a single letter a-z.",
            ParseError::NomError(_) => "The input could not be tokenized. This usually accompanies a more specific error.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ParseError::InvalidLetter { .. } => Some("Only letters a-z are allowed"),
            ParseError::NoSides => Some("Example: letter-boxed abc def ghi jkl"),
            ParseError::EmptySide { .. } => Some("Remove the empty argument or give it some letters"),
            ParseError::EmptyGuess => Some("Example: 'gUe.ss' (grey g, yellow u, grey e, green s, grey s)"),
            ParseError::DanglingGreenMarker { .. } => Some("Put the green letter after the '.' (e.g., 'ab.c' not 'abc.')"),
            ParseError::GuessLengthMismatch { .. } => Some("Make every guess the same length as the first one"),
            ParseError::InvalidGuess { .. } => Some("Use a-z (grey), A-Z (yellow) and '.x' (green x)"),
            ParseError::InvalidRequiredLetter { .. } => Some("Example: spelling-bee abcdef g"),
            ParseError::NomError(_) => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_variants() -> Vec<ParseError> {
        vec![
            ParseError::InvalidLetter { invalid_char: '1' },
            ParseError::NoSides,
            ParseError::EmptySide { index: 2 },
            ParseError::EmptyGuess,
            ParseError::DanglingGreenMarker { guess: "ab.".to_string() },
            ParseError::GuessLengthMismatch { guess: "abc".to_string(), expected: 5, found: 3 },
            ParseError::InvalidGuess { guess: "a-b".to_string(), invalid_char: '-' },
            ParseError::InvalidRequiredLetter { input: "ab".to_string() },
            ParseError::NomError(ErrorKind::Tag),
        ]
    }

    #[test]
    fn test_error_codes_and_help() {
        let err = ParseError::NoSides;
        assert_eq!(err.code(), "E002");
        assert!(err.help().is_some());
        let detailed = err.display_detailed();
        assert!(detailed.contains("E002"));
        assert!(detailed.contains("Example"));
    }

    /// Test that all `ParseError` variants have unique error codes
    #[test]
    fn test_all_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();
        for err in all_variants() {
            let code = err.code();
            assert!(codes.insert(code), "Duplicate error code found: {}", code);
        }
        assert_eq!(codes.len(), 9);
    }

    /// Test that all error codes follow the format E0XX
    #[test]
    fn test_error_code_format() {
        for err in all_variants() {
            let code = err.code();
            assert_eq!(code.len(), 4, "Error code '{}' should be 4 characters (E0XX)", code);
            assert!(code.starts_with("E0"), "Error code '{}' should start with 'E0'", code);
            assert!(code[1..].parse::<u16>().is_ok(), "Error code '{}' should end with a number", code);
        }
    }

    #[test]
    fn test_help_text_adds_information() {
        for err in all_variants() {
            if let Some(help_text) = err.help() {
                assert!(help_text.len() > 10, "Help text for {:?} should be substantial", err);
                assert_ne!(help_text, err.to_string());
            }
            assert!(!err.description().is_empty());
            assert!(!err.details().is_empty());
        }
    }

    #[test]
    fn test_display_detailed_includes_values() {
        let err = ParseError::GuessLengthMismatch { guess: "abc".to_string(), expected: 5, found: 3 };
        let detailed = err.display_detailed();
        assert!(detailed.contains("E006"));
        assert!(detailed.contains("abc"));
        assert!(detailed.contains('5') && detailed.contains('3'));
    }

    #[test]
    fn test_nom_adapter_keeps_original_error() {
        let first = <Box<ParseError> as NomParseError<&str>>::from_error_kind("x", ErrorKind::Tag);
        let kept = <Box<ParseError> as NomParseError<&str>>::append("x", ErrorKind::Alt, first);
        assert!(matches!(*kept, ParseError::NomError(ErrorKind::Tag)));
    }
}
