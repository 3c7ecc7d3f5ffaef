//! Grouping words by a derived key.
//!
//! A [`WordGrouper`] owns a key function and a map from key to the (sorted, unique)
//! words that produce it. The same container serves every grouping we need: anagram
//! keys for the anagram and letter-boxed solvers, lengths for wordle.
//!
//! Invariants:
//! - every stored word's key equals the key of the group it sits in;
//! - a word belongs to exactly one group;
//! - a key with no words is absent from the map (never present with an empty set).

use std::borrow::Borrow;
use std::collections::hash_map::{self, Entry};
use std::collections::{BTreeSet, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

use log::debug;

/// Maps a word to the key it is grouped under.
pub trait KeyFunction {
    type Key: Clone + Eq + Hash + Ord + Debug;

    fn key(&self, word: &str) -> Self::Key;
}

/// Groups words by their length in characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthKey;

impl KeyFunction for LengthKey {
    type Key = usize;

    fn key(&self, word: &str) -> usize {
        word.chars().count()
    }
}

/// Words grouped by length.
pub type LengthGrouper = WordGrouper<LengthKey>;

/// Iterator over the keys currently present in a grouper (order unspecified).
pub type GroupKeys<'a, K> = hash_map::Keys<'a, K, BTreeSet<String>>;

#[derive(Debug, Clone)]
pub struct WordGrouper<F: KeyFunction> {
    key_fn: F,
    groups: HashMap<F::Key, BTreeSet<String>>,
    num_words: usize,
}

impl<F: KeyFunction + Default> Default for WordGrouper<F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

impl<F: KeyFunction> WordGrouper<F> {
    pub fn new(key_fn: F) -> Self {
        Self { key_fn, groups: HashMap::new(), num_words: 0 }
    }

    /// Build a grouper from a finite collection of words.
    pub fn from_words<I, S>(words: I, key_fn: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut grouper = Self::new(key_fn);
        grouper.extend(words);
        debug!(
            "grouped {} words into {} groups",
            grouper.num_words,
            grouper.groups.len()
        );
        grouper
    }

    /// The key `word` is (or would be) grouped under.
    pub fn group_key(&self, word: &str) -> F::Key {
        self.key_fn.key(word)
    }

    /// Insert `word` into its group, creating the group if needed.
    ///
    /// Returns `false` if the word was already present.
    pub fn add_word(&mut self, word: &str) -> bool {
        let inserted = self
            .groups
            .entry(self.key_fn.key(word))
            .or_default()
            .insert(word.to_string());
        if inserted {
            self.num_words += 1;
        }
        inserted
    }

    /// Remove `word`; its group disappears once empty.
    ///
    /// Returns `false` (and changes nothing) if the word was not present.
    pub fn remove_word(&mut self, word: &str) -> bool {
        let Entry::Occupied(mut group) = self.groups.entry(self.key_fn.key(word)) else {
            return false;
        };
        if !group.get_mut().remove(word) {
            return false;
        }
        if group.get().is_empty() {
            group.remove();
        }
        self.num_words -= 1;
        true
    }

    /// All keys with at least one word. Call again to restart.
    pub fn group_keys(&self) -> GroupKeys<'_, F::Key> {
        self.groups.keys()
    }

    /// The words sharing `word`'s key, sorted. Empty if the key is unknown.
    pub fn group(&self, word: &str) -> Vec<&str> {
        self.group_by_key(&self.key_fn.key(word))
    }

    /// The words grouped under `key`, sorted. Empty if the key is unknown.
    pub fn group_by_key<Q>(&self, key: &Q) -> Vec<&str>
    where
        F::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.groups
            .get(key)
            .map(|words| words.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// True iff some word currently maps to `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        F::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.groups.contains_key(key)
    }

    /// True iff `word` itself has been added (not merely something sharing its key).
    pub fn contains(&self, word: &str) -> bool {
        self.groups
            .get(&self.key_fn.key(word))
            .is_some_and(|words| words.contains(word))
    }

    /// Number of words across all groups.
    pub fn len(&self) -> usize {
        self.num_words
    }

    pub fn is_empty(&self) -> bool {
        self.num_words == 0
    }

    pub fn num_groups(&self) -> usize {
        self.groups.len()
    }
}

impl<F: KeyFunction, S: AsRef<str>> Extend<S> for WordGrouper<F> {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.add_word(word.as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn by_length(words: &[&str]) -> LengthGrouper {
        WordGrouper::from_words(words.iter().copied(), LengthKey)
    }

    #[test]
    fn test_group_is_sorted() {
        let grouper = by_length(&["dog", "cat", "bird", "ant"]);
        assert_eq!(grouper.group("xyz"), vec!["ant", "cat", "dog"]);
        assert_eq!(grouper.group("abcd"), vec!["bird"]);
    }

    #[test]
    fn test_unknown_key_is_empty_not_error() {
        let grouper = by_length(&["dog"]);
        assert!(grouper.group("ab").is_empty());
        assert!(!grouper.contains_key(&2));
        assert!(grouper.group_by_key(&7).is_empty());
    }

    #[test]
    fn test_add_word_is_idempotent() {
        let mut grouper = LengthGrouper::default();
        assert!(grouper.add_word("cat"));
        assert!(!grouper.add_word("cat"));
        assert_eq!(grouper.len(), 1);
        assert_eq!(grouper.num_groups(), 1);
    }

    #[test]
    fn test_remove_last_word_drops_group() {
        let mut grouper = by_length(&["cat", "dog", "bird"]);
        assert!(grouper.remove_word("bird"));
        assert!(!grouper.contains_key(&4));
        assert_eq!(grouper.num_groups(), 1);

        assert!(grouper.remove_word("cat"));
        assert!(grouper.contains_key(&3));
        assert_eq!(grouper.group("xxx"), vec!["dog"]);
        assert_eq!(grouper.len(), 1);
    }

    #[test]
    fn test_remove_missing_word_is_noop() {
        let mut grouper = by_length(&["cat"]);
        assert!(!grouper.remove_word("dog"));
        assert!(!grouper.remove_word("horse"));
        assert_eq!(grouper.len(), 1);
        assert!(grouper.contains_key(&3));
    }

    #[test]
    fn test_group_keys_restartable() {
        let grouper = by_length(&["a", "bb", "cc", "ddd"]);
        let mut first: Vec<usize> = grouper.group_keys().copied().collect();
        let mut second: Vec<usize> = grouper.group_keys().copied().collect();
        first.sort_unstable();
        second.sort_unstable();
        assert_eq!(first, vec![1, 2, 3]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_contains_is_word_membership() {
        let grouper = by_length(&["cat"]);
        assert!(grouper.contains("cat"));
        assert!(!grouper.contains("dog"));
        assert!(grouper.contains_key(&grouper.group_key("dog")));
    }

    #[test]
    fn test_length_key_counts_chars_not_bytes() {
        assert_eq!(LengthKey.key("café"), 4);
    }

    #[test]
    fn test_extend() {
        let mut grouper = LengthGrouper::default();
        grouper.extend(vec!["one".to_string(), "two".to_string(), "three".to_string()]);
        assert_eq!(grouper.len(), 3);
        assert!(!grouper.is_empty());
    }
}
