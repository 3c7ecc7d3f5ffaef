//! Anagram keys and phrase decomposition.
//!
//! # Examples
//!
//! ```
//! use wordtools::anagram::{AnagramOptions, Anagrammer};
//!
//! let anagrammer = Anagrammer::from_word_list(["listen", "silent", "a", "b"]);
//! assert_eq!(anagrammer.group("Tinsel"), vec!["listen", "silent"]);
//!
//! let options = AnagramOptions { min_words: 2, ..AnagramOptions::default() };
//! let phrases: Vec<String> = anagrammer.anagram_phrase("ab", &options).collect();
//! assert_eq!(phrases, vec!["a b"]);
//! ```

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;

use log::debug;

use crate::grouper::{KeyFunction, WordGrouper};
use crate::letters::LetterCounts;
use crate::normalize::fold_diacritics;

/// Sorted lowercase letters of a word or phrase: equal keys mean anagrams.
///
/// Ordering is lexicographic on the sorted letters, shorter first on a shared prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct AnagramKey(String);

impl AnagramKey {
    pub fn from_counts(counts: &LetterCounts) -> Self {
        AnagramKey(counts.to_sorted_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of letters (with multiplicity).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn counts(&self) -> LetterCounts {
        LetterCounts::from_letters(&self.0)
    }
}

impl Borrow<str> for AnagramKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnagramKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fold case and accents, drop everything that is not a-z, sort what is left.
///
/// ```
/// use wordtools::anagram::anagram_key;
///
/// assert_eq!(anagram_key("Listen!").as_str(), "eilnst");
/// assert_eq!(anagram_key("Éclair"), anagram_key("lacier"));
/// ```
pub fn anagram_key(word: &str) -> AnagramKey {
    AnagramKey::from_counts(&LetterCounts::from_letters(&fold_diacritics(word)))
}

/// Key function grouping words by [`anagram_key`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AnagramKeyFn;

impl KeyFunction for AnagramKeyFn {
    type Key = AnagramKey;

    fn key(&self, word: &str) -> AnagramKey {
        anagram_key(word)
    }
}

/// Words grouped by anagram key.
pub type Anagrammer = WordGrouper<AnagramKeyFn>;

/// Bounds on phrase decomposition. Zero means "no bound" for every numeric field.
///
/// Contradictory bounds (e.g. `min_words > max_words`) are not rejected; they
/// simply prune every branch and the search yields nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnagramOptions {
    pub max_words: usize,
    pub min_words: usize,
    pub min_word_length: usize,
    pub max_word_length: usize,
    /// Words that must appear in every phrase, placed first in the given order.
    /// They count towards the word bounds but not the length bounds.
    pub include_words: Vec<String>,
    /// Words that never appear in a phrase.
    pub exclude_words: HashSet<String>,
}

/// Word-count and word-length limits actually applied by the search.
#[derive(Debug, Clone, Copy)]
struct SearchBounds {
    min_words: usize,
    max_words: Option<usize>,
    min_word_length: usize,
    max_word_length: Option<usize>,
}

impl From<&AnagramOptions> for SearchBounds {
    fn from(options: &AnagramOptions) -> Self {
        SearchBounds {
            min_words: options.min_words,
            max_words: (options.max_words > 0).then_some(options.max_words),
            min_word_length: options.min_word_length.max(1),
            max_word_length: (options.max_word_length > 0).then_some(options.max_word_length),
        }
    }
}

/// One level of the depth-first search: the letters still to place and the
/// known keys that can be carved out of them next.
struct Frame {
    remaining: LetterCounts,
    parent: Option<AnagramKey>,
    next_size: usize,
    min_size: usize,
    pending: std::vec::IntoIter<(AnagramKey, LetterCounts)>,
}

impl Frame {
    fn new(remaining: LetterCounts, parent: Option<AnagramKey>, bounds: &SearchBounds) -> Self {
        let mut max_size = remaining.len();
        if let Some(max_len) = bounds.max_word_length {
            max_size = max_size.min(max_len);
        }
        // A child longer than its parent would break the canonical order anyway.
        if let Some(parent) = &parent {
            max_size = max_size.min(parent.len());
        }
        Frame {
            remaining,
            parent,
            next_size: max_size,
            min_size: bounds.min_word_length,
            pending: Vec::new().into_iter(),
        }
    }

    /// Next `(ngram, complement)` pair to descend into, largest ngrams first.
    fn next_ngram(&mut self, grouper: &Anagrammer) -> Option<(AnagramKey, LetterCounts)> {
        loop {
            if let Some(next) = self.pending.next() {
                return Some(next);
            }
            if self.next_size == 0 || self.next_size < self.min_size {
                return None;
            }
            let size = self.next_size;
            self.next_size -= 1;

            let remaining = &self.remaining;
            let parent = self.parent.as_ref();
            self.pending = remaining
                .sub_multisets(size)
                .into_iter()
                .filter_map(|ngram| {
                    let key = AnagramKey::from_counts(&ngram);
                    if !grouper.contains_key(&key) || !follows_parent(&key, parent) {
                        return None;
                    }
                    let complement = remaining.checked_sub(&ngram)?;
                    Some((key, complement))
                })
                .collect::<Vec<_>>()
                .into_iter();
        }
    }
}

/// Keys within one decomposition must be non-increasing in length, and
/// non-decreasing in key order among equal lengths. Exactly one ordering of any
/// multiset of keys satisfies this, so no permutation is ever produced twice.
fn follows_parent(ngram: &AnagramKey, parent: Option<&AnagramKey>) -> bool {
    match parent {
        None => true,
        Some(parent) => {
            ngram.len() < parent.len() || (ngram.len() == parent.len() && ngram >= parent)
        }
    }
}

/// Lazy depth-first enumeration of every way to split a letter multiset into
/// known anagram keys.
///
/// Each item is a decomposition path: a sequence of keys whose letters add up
/// to the phrase exactly. The search is finite and holds only in-memory state,
/// so dropping the iterator early is always fine.
pub struct Decompositions<'a> {
    grouper: &'a Anagrammer,
    bounds: SearchBounds,
    root: Option<LetterCounts>,
    stack: Vec<Frame>,
    path: Vec<AnagramKey>,
}

impl<'a> Decompositions<'a> {
    fn new(grouper: &'a Anagrammer, letters: LetterCounts, bounds: SearchBounds) -> Self {
        Decompositions {
            grouper,
            bounds,
            root: Some(letters),
            stack: Vec::new(),
            path: Vec::new(),
        }
    }

    /// Handle arrival at a node whose key was just pushed onto `path`
    /// (or the root, with an empty path). Returns a finished path, if any.
    fn visit(&mut self, remaining: LetterCounts) -> Option<Vec<AnagramKey>> {
        if remaining.is_empty() {
            let found = (self.path.len() >= self.bounds.min_words).then(|| self.path.clone());
            self.path.pop();
            return found;
        }
        if self.bounds.max_words.is_some_and(|max| self.path.len() >= max) {
            self.path.pop();
            return None;
        }
        let frame = Frame::new(remaining, self.path.last().cloned(), &self.bounds);
        self.stack.push(frame);
        None
    }
}

impl Iterator for Decompositions<'_> {
    type Item = Vec<AnagramKey>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            if let Some(found) = self.visit(root) {
                return Some(found);
            }
        }

        loop {
            let frame = self.stack.last_mut()?;
            match frame.next_ngram(self.grouper) {
                Some((ngram, complement)) => {
                    self.path.push(ngram);
                    if let Some(found) = self.visit(complement) {
                        return Some(found);
                    }
                }
                None => {
                    // Frame exhausted: drop it and the key that led into it.
                    self.stack.pop();
                    self.path.pop();
                }
            }
        }
    }
}

/// Odometer over the Cartesian product of word lists (last list varies fastest).
struct Product<'a> {
    lists: Vec<Vec<&'a str>>,
    indices: Vec<usize>,
    done: bool,
}

impl<'a> Product<'a> {
    fn new(lists: Vec<Vec<&'a str>>) -> Self {
        let done = lists.iter().any(Vec::is_empty);
        let indices = vec![0; lists.len()];
        Product { lists, indices, done }
    }
}

impl<'a> Iterator for Product<'a> {
    type Item = Vec<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self
            .indices
            .iter()
            .zip(&self.lists)
            .map(|(&i, list)| list[i])
            .collect();

        self.done = true;
        for (index, list) in self.indices.iter_mut().zip(&self.lists).rev() {
            *index += 1;
            if *index < list.len() {
                self.done = false;
                break;
            }
            *index = 0;
        }
        Some(item)
    }
}

/// Phrase candidates: every decomposition expanded into concrete words, space-joined.
pub struct Anagrams<'a> {
    grouper: &'a Anagrammer,
    decompositions: Option<Decompositions<'a>>,
    prefix: Vec<String>,
    exclude_words: HashSet<String>,
    current: Option<Product<'a>>,
}

impl<'a> Anagrams<'a> {
    fn empty(grouper: &'a Anagrammer) -> Self {
        Anagrams {
            grouper,
            decompositions: None,
            prefix: Vec::new(),
            exclude_words: HashSet::new(),
            current: None,
        }
    }
}

impl Iterator for Anagrams<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(words) = self.current.as_mut().and_then(Iterator::next) {
                let mut phrase: Vec<&str> = self.prefix.iter().map(String::as_str).collect();
                phrase.extend(words);
                return Some(phrase.join(" "));
            }

            let path = self.decompositions.as_mut()?.next()?;
            let lists: Vec<Vec<&str>> = path
                .iter()
                .map(|key| {
                    self.grouper
                        .group_by_key(key)
                        .into_iter()
                        .filter(|word| !self.exclude_words.contains(*word))
                        .collect::<Vec<_>>()
                })
                .collect();
            self.current = Some(Product::new(lists));
        }
    }
}

impl WordGrouper<AnagramKeyFn> {
    /// Group a word list by anagram key.
    pub fn from_word_list<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        WordGrouper::from_words(words, AnagramKeyFn)
    }

    /// Every split of `phrase`'s letters into known anagram keys, honoring the
    /// word-count and word-length bounds of `options`.
    ///
    /// Works on keys only: `include_words` and `exclude_words` are applied by
    /// [`anagram_phrase`](Self::anagram_phrase).
    pub fn decompose(&self, phrase: &str, options: &AnagramOptions) -> Decompositions<'_> {
        let letters = anagram_key(phrase).counts();
        debug!("decomposing \"{phrase}\" ({} letters)", letters.len());
        Decompositions::new(self, letters, SearchBounds::from(options))
    }

    /// Every multi-word anagram of `phrase`, lazily.
    ///
    /// Each decomposition is expanded into the product of its groups' words.
    /// Phrases come out grouped by decomposition, longest words first.
    pub fn anagram_phrase(&self, phrase: &str, options: &AnagramOptions) -> Anagrams<'_> {
        let mut letters = anagram_key(phrase).counts();
        let mut bounds = SearchBounds::from(options);

        for word in &options.include_words {
            let Some(rest) = letters.checked_sub(&anagram_key(word).counts()) else {
                debug!("included word \"{word}\" does not fit in \"{phrase}\"");
                return Anagrams::empty(self);
            };
            letters = rest;
        }

        let num_included = options.include_words.len();
        bounds.min_words = bounds.min_words.saturating_sub(num_included);
        if let Some(max) = bounds.max_words {
            let Some(rest) = max.checked_sub(num_included) else {
                return Anagrams::empty(self);
            };
            bounds.max_words = Some(rest);
        }

        debug!(
            "anagramming \"{phrase}\": {} letters left after {} included words",
            letters.len(),
            num_included
        );

        Anagrams {
            grouper: self,
            decompositions: Some(Decompositions::new(self, letters, bounds)),
            prefix: options.include_words.clone(),
            exclude_words: options.exclude_words.clone(),
            current: None,
        }
    }
}
