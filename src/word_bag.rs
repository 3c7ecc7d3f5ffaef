//! A filtered word collection: a minimum length plus a sticky exclusion list.

use std::collections::HashSet;

/// Words at least `min_length` characters long that have not been excluded.
///
/// Exclusion wins: once a word is excluded, adding it again does nothing.
#[derive(Debug, Clone)]
pub struct WordBag {
    words: HashSet<String>,
    excluded: HashSet<String>,
    min_length: usize,
}

impl Default for WordBag {
    fn default() -> Self {
        Self::new(1)
    }
}

impl WordBag {
    pub fn new(min_length: usize) -> Self {
        Self { words: HashSet::new(), excluded: HashSet::new(), min_length }
    }

    /// Exclusions are applied before inclusions, so a word in both ends up absent.
    pub fn with_words<I, E, S, T>(includes: I, excludes: E, min_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        E: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut bag = Self::new(min_length);
        for word in excludes {
            bag.exclude_word(word.as_ref());
        }
        bag.extend(includes);
        bag
    }

    fn long_enough(&self, word: &str) -> bool {
        word.chars().count() >= self.min_length
    }

    /// Add `word` unless it is excluded or too short. Returns whether it was newly added.
    pub fn add_word(&mut self, word: &str) -> bool {
        if self.excluded.contains(word) || !self.long_enough(word) {
            return false;
        }
        self.words.insert(word.to_string())
    }

    /// Remove `word` and keep it out from now on. Words below the minimum length
    /// could never be added anyway, so they are not recorded.
    pub fn exclude_word(&mut self, word: &str) {
        if self.excluded.contains(word) || !self.long_enough(word) {
            return;
        }
        self.excluded.insert(word.to_string());
        self.words.remove(word);
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Iterate the words in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> Extend<S> for WordBag {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.add_word(word.as_ref());
        }
    }
}
