//! Integration tests for the word tools.
//!
//! These drive the public API end to end: load the fixture word list from disk,
//! build the groupers, and check the solvers' answers and invariants.

use std::collections::{BTreeMap, HashSet};

use wordtools::anagram::{anagram_key, AnagramOptions, Anagrammer};
use wordtools::errors::ParseError;
use wordtools::grouper::{LengthGrouper, LengthKey, WordGrouper};
use wordtools::letter_boxed::{find_chains, Sides};
use wordtools::letters::LetterSet;
use wordtools::spelling_bee::spelling_bee;
use wordtools::word_bag::WordBag;
use wordtools::word_list::{FileFormat, WordList, WordListError};
use wordtools::wordle::{self, Guess};

const FIXTURE: &str = "tests/fixtures/words.txt";

/// Load the fixture word list
fn load_words() -> WordList {
    WordList::load_from_path(FIXTURE, FileFormat::Plain).expect("Failed to read fixture word list")
}

fn anagrammer() -> Anagrammer {
    Anagrammer::from_word_list(load_words().iter())
}

/// The anagram grouper the CLI builds for letter-boxed: words of three letters or more.
fn boxed_anagrammer() -> Anagrammer {
    let words = load_words();
    let bag = WordBag::with_words(words.iter(), Vec::<&str>::new(), 3);
    Anagrammer::from_word_list(bag.iter())
}

fn sorted<S: AsRef<str>>(items: impl IntoIterator<Item = S>) -> Vec<String> {
    let mut v: Vec<String> = items.into_iter().map(|s| s.as_ref().to_string()).collect();
    v.sort();
    v
}

#[cfg(test)]
mod word_list_loading {
    use super::*;

    #[test]
    fn test_fixture_is_normalized() {
        let words = load_words();
        // "Tinsel" lowercased, duplicate "listen" and the blank line dropped
        assert_eq!(words.len(), 21);
        assert!(words.iter().any(|w| w == "tinsel"));
        assert_eq!(words.entries.first().map(String::as_str), Some("a"));
        assert_eq!(words.entries.last().map(String::as_str), Some("dormitory"));
    }

    #[test]
    fn test_missing_file() {
        let err = WordList::load_from_path("tests/fixtures/missing.txt", FileFormat::Plain).unwrap_err();
        assert!(matches!(err, WordListError::Io { .. }));
    }

    #[test]
    fn test_fixture_is_not_json() {
        let err = WordList::load_from_path(FIXTURE, FileFormat::Json).unwrap_err();
        assert_eq!(err.code(), "W002");
    }

    #[test]
    fn test_scored_format_without_scores_is_empty() {
        let err = WordList::load_from_path(FIXTURE, FileFormat::Scored { min_score: 0 }).unwrap_err();
        assert!(matches!(err, WordListError::Empty { .. }));
    }
}

#[cfg(test)]
mod anagrams {
    use super::*;

    #[test]
    fn test_single_word_group() {
        let anagrammer = anagrammer();
        assert_eq!(
            anagrammer.group("Listen"),
            vec!["enlist", "inlets", "listen", "silent", "tinsel"]
        );
    }

    #[test]
    fn test_listen_phrases_are_the_group() {
        let phrases: Vec<String> = anagrammer().anagram_phrase("listen", &AnagramOptions::default()).collect();
        assert_eq!(sorted(&phrases), vec!["enlist", "inlets", "listen", "silent", "tinsel"]);
    }

    #[test]
    fn test_dormitory() {
        let phrases: Vec<String> = anagrammer()
            .anagram_phrase("Dirty Room!", &AnagramOptions::default())
            .collect();
        assert_eq!(phrases, vec!["dormitory", "dirty room"]);
    }

    #[test]
    fn test_the_eyes() {
        let phrases: HashSet<String> = anagrammer()
            .anagram_phrase("the eyes", &AnagramOptions::default())
            .collect();
        let expected: HashSet<String> = ["eyes the", "they see"].iter().map(|s| s.to_string()).collect();
        assert_eq!(phrases, expected);
    }

    #[test]
    fn test_phrases_are_sound_and_unique() {
        let anagrammer = anagrammer();
        for phrase in ["the eyes", "dormitory", "silent", "a tile"] {
            let key = anagram_key(phrase);
            let found: Vec<String> = anagrammer.anagram_phrase(phrase, &AnagramOptions::default()).collect();
            let unique: HashSet<&String> = found.iter().collect();
            assert_eq!(unique.len(), found.len(), "duplicates for {phrase:?}");
            for anagram in &found {
                assert_eq!(anagram_key(anagram), key, "{anagram:?} is not an anagram of {phrase:?}");
                for word in anagram.split(' ') {
                    assert!(anagrammer.contains(word), "{word:?} is not a dictionary word");
                }
            }
        }
    }

    #[test]
    fn test_decompositions_never_repeat_a_key_multiset() {
        let anagrammer = anagrammer();
        for phrase in ["the eyes", "dirty room", "a tile", "listen", "sushi a i"] {
            let multisets: Vec<Vec<String>> = anagrammer
                .decompose(phrase, &AnagramOptions::default())
                .map(|path| sorted(path.iter().map(|key| key.as_str())))
                .collect();
            assert!(!multisets.is_empty(), "no decomposition of {phrase:?}");
            let unique: HashSet<&Vec<String>> = multisets.iter().collect();
            assert_eq!(unique.len(), multisets.len(), "repeated key multiset for {phrase:?}");
        }
    }

    #[test]
    fn test_word_count_bounds() {
        let anagrammer = anagrammer();
        let one_word = AnagramOptions { max_words: 1, ..AnagramOptions::default() };
        let found: Vec<String> = anagrammer.anagram_phrase("dirty room", &one_word).collect();
        assert_eq!(found, vec!["dormitory"]);

        let two_words = AnagramOptions { min_words: 2, ..AnagramOptions::default() };
        let found: Vec<String> = anagrammer.anagram_phrase("dirty room", &two_words).collect();
        assert_eq!(found, vec!["dirty room"]);
    }

    #[test]
    fn test_include_and_exclude() {
        let anagrammer = anagrammer();
        let include = AnagramOptions { include_words: vec!["see".to_string()], ..AnagramOptions::default() };
        let found: Vec<String> = anagrammer.anagram_phrase("the eyes", &include).collect();
        assert_eq!(found, vec!["see they"]);

        let exclude = AnagramOptions {
            exclude_words: ["they".to_string()].into_iter().collect(),
            ..AnagramOptions::default()
        };
        let found: Vec<String> = anagrammer.anagram_phrase("the eyes", &exclude).collect();
        assert_eq!(found, vec!["eyes the"]);
    }

    #[test]
    fn test_no_anagram() {
        assert_eq!(anagrammer().anagram_phrase("xyzzy", &AnagramOptions::default()).count(), 0);
    }

    #[test]
    fn test_decompositions_multiply_out_to_phrases() {
        let anagrammer = anagrammer();
        let options = AnagramOptions::default();
        let expected: usize = anagrammer
            .decompose("listen", &options)
            .map(|path| path.iter().map(|key| anagrammer.group_by_key(key).len()).product::<usize>())
            .sum();
        assert_eq!(anagrammer.anagram_phrase("listen", &options).count(), expected);
    }
}

#[cfg(test)]
mod letter_boxed {
    use super::*;

    fn is_valid_chain(chain: &[&str], sides: &Sides) -> bool {
        let links = chain.windows(2).all(|pair| pair[0].chars().last() == pair[1].chars().next());
        let covered: LetterSet = chain.iter().flat_map(|w| w.chars()).collect();
        links && chain.iter().all(|w| sides.allows(w)) && covered == sides.letters()
    }

    #[test]
    fn test_the_eyes_puzzle() {
        let anagrammer = boxed_anagrammer();
        let sides = Sides::parse(&["ts", "hy", "e"]).unwrap();
        let chains: Vec<Vec<&str>> = find_chains(&anagrammer, &sides, 0).collect();
        assert_eq!(chains, vec![vec!["the", "eyes"]]);
    }

    #[test]
    fn test_sides_are_case_folded() {
        let anagrammer = boxed_anagrammer();
        let sides = Sides::parse(&["TS", "Hy", "e"]).unwrap();
        assert_eq!(find_chains(&anagrammer, &sides, 0).count(), 1);
    }

    #[test]
    fn test_chains_are_valid_and_minimal() {
        let anagrammer = boxed_anagrammer();
        let sides = Sides::parse(&["ts", "hy", "e"]).unwrap();
        let chains: Vec<Vec<&str>> = find_chains(&anagrammer, &sides, 0).collect();
        assert!(!chains.is_empty());
        let shortest = chains.iter().map(Vec::len).min();
        for chain in &chains {
            assert!(is_valid_chain(chain, &sides), "{chain:?}");
            assert_eq!(Some(chain.len()), shortest);
        }
    }

    #[test]
    fn test_unsolvable_puzzle_terminates() {
        let anagrammer = boxed_anagrammer();
        // no fixture word uses 'q'
        let sides = Sides::parse(&["ts", "hy", "eq"]).unwrap();
        assert_eq!(find_chains(&anagrammer, &sides, 0).count(), 0);
    }

    #[test]
    fn test_bad_sides() {
        assert!(matches!(*Sides::parse::<&str>(&[]).unwrap_err(), ParseError::NoSides));
        assert!(matches!(*Sides::parse(&["ab", ""]).unwrap_err(), ParseError::EmptySide { index: 1 }));
        assert!(matches!(
            *Sides::parse(&["ab", "c1"]).unwrap_err(),
            ParseError::InvalidLetter { invalid_char: '1' }
        ));
    }
}

#[cfg(test)]
mod wordle_tests {
    use super::*;

    fn by_length() -> LengthGrouper {
        WordGrouper::from_words(load_words().iter(), LengthKey)
    }

    fn guesses(raw: &[&str]) -> Vec<Guess> {
        raw.iter().map(|g| g.parse().unwrap()).collect()
    }

    #[test]
    fn test_help_text_example() {
        let grouper = by_length();
        let found = wordle::solve(&guesses(&["gUe.ss"]), &grouper).unwrap();
        assert_eq!(found, vec!["blush", "brush", "crust", "trust"]);
    }

    #[test]
    fn test_second_guess_narrows() {
        let grouper = by_length();
        let found = wordle::solve(&guesses(&["gUe.ss", "t.r.u.s.t"]), &grouper).unwrap();
        assert_eq!(found, vec!["crust"]);
        assert_eq!(wordle::summarise(&found), "  u: 1\n  t: 1\n  s: 1\n  r: 1\n  c: 1");
    }

    #[test]
    fn test_mismatched_guesses() {
        let grouper = by_length();
        let err = wordle::solve(&guesses(&["gUe.ss", "the"]), &grouper).unwrap_err();
        assert_eq!(err.code(), "E006");
    }
}

#[cfg(test)]
mod spelling_bee_tests {
    use super::*;

    #[test]
    fn test_pangrams_and_short_words() {
        let words = load_words();
        let found = spelling_bee(words.iter(), "ilnes", "t").unwrap();

        let mut expected: BTreeMap<usize, Vec<String>> = BTreeMap::new();
        expected.insert(1, vec!["tile".to_string()]);
        expected.insert(
            13,
            sorted(["enlist", "inlets", "listen", "silent", "tinsel"]),
        );
        assert_eq!(found, expected);
    }

    #[test]
    fn test_bad_required_letter() {
        let err = spelling_bee(load_words().iter(), "ilnes", "tt").unwrap_err();
        assert_eq!(err.code(), "E008");
    }
}
