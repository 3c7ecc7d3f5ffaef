//! Loading and preprocessing of the dictionary the solvers draw from.
//!
//! Three on-disk formats are understood (see [`FileFormat`]):
//! - plain text, one word per line;
//! - a JSON array of strings;
//! - scored lines `word;score`, as used by crossword entry lists.
//!
//! Whatever the format, the result is a [`WordList`] of trimmed, lowercase, unique
//! words sorted by length and then alphabetically.

use std::cmp::Ordering;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

/// How a word-list file is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileFormat {
    /// One word per line. Blank lines are skipped.
    #[default]
    Plain,
    /// A JSON array of strings.
    Json,
    /// `word;score` lines; words scoring below `min_score` (and malformed lines) are skipped.
    Scored { min_score: i32 },
}

/// Errors raised while loading a word list.
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("failed to read word list from '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list is not a JSON array of strings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("word list '{}' contains no usable words", path.display())]
    Empty { path: PathBuf },
}

impl WordListError {
    /// Get the error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            WordListError::Io { .. } => "W001",
            WordListError::Json(_) => "W002",
            WordListError::Empty { .. } => "W003",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WordListError::Io { .. } => "Unreadable word list",
            WordListError::Json(_) => "Malformed JSON word list",
            WordListError::Empty { .. } => "Empty word list",
        }
    }

    pub fn details(&self) -> &'static str {
        match self {
            WordListError::Io { .. } => "The word-list file could not be opened or is not valid UTF-8.",
            WordListError::Json(_) => "JSON word lists must be a single array whose elements are all strings.",
            WordListError::Empty { .. } => "After filtering blank, malformed and low-scoring lines, no words were left.",
        }
    }

    pub fn help(&self) -> Option<&'static str> {
        match self {
            WordListError::Io { .. } => Some("Check the path passed with --word-list (or WORDTOOLS_WORD_LIST)"),
            WordListError::Json(_) => Some("Use --format plain for one-word-per-line files"),
            WordListError::Empty { .. } => Some("Check --format, or lower --min-score for scored lists"),
        }
    }

    pub fn display_detailed(&self) -> String {
        crate::errors::format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// A processed, ready-to-use word list.
///
/// `entries` is sorted by (length in characters, alphabetical) and holds no duplicates.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    pub entries: Vec<String>,
}

fn scored_entry(line: &str, min_score: i32) -> Option<&str> {
    let (entry, score) = line.split_once(';')?;
    let score: i32 = score.trim().parse().ok()?;
    (score >= min_score).then(|| entry.trim())
}

impl WordList {
    /// Parse a word list from an in-memory string.
    ///
    /// # Errors
    ///
    /// Only [`FileFormat::Json`] can fail, with [`WordListError::Json`].
    pub fn parse_from_str(contents: &str, format: FileFormat) -> Result<WordList, WordListError> {
        let raw: Vec<String> = match format {
            FileFormat::Plain => contents.lines().map(str::to_string).collect(),
            FileFormat::Json => serde_json::from_str(contents)?,
            FileFormat::Scored { min_score } => contents
                .lines()
                .filter_map(|line| scored_entry(line.trim(), min_score))
                .map(str::to_string)
                .collect(),
        };

        let mut entries: Vec<String> = raw
            .iter()
            .map(|w| w.trim())
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase)
            .collect();

        // dedup() only drops adjacent duplicates
        entries.sort();
        entries.dedup();
        entries.sort_by(|a, b| match a.chars().count().cmp(&b.chars().count()) {
            Ordering::Equal => a.cmp(b),
            other => other,
        });

        Ok(WordList { entries })
    }

    /// Read `path` and parse it as `format`.
    ///
    /// # Errors
    ///
    /// [`WordListError::Io`] if the file can't be read, [`WordListError::Json`] for a
    /// malformed JSON list, [`WordListError::Empty`] if no words survive parsing.
    pub fn load_from_path<P: AsRef<Path>>(path: P, format: FileFormat) -> Result<WordList, WordListError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|source| WordListError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let list = Self::parse_from_str(&data, format)?;
        if list.is_empty() {
            return Err(WordListError::Empty { path: path.to_path_buf() });
        }
        debug!("loaded {} words from '{}' ({format:?})", list.len(), path.display());
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(String::as_str)
    }
}
