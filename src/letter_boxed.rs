//! Letter-boxed solver: chains of words linked end-to-start that use every letter.
//!
//! The puzzle's letters are split into sides. A word is playable when no two
//! consecutive letters in it sit on the same side; each word after the first must
//! start with the last letter of the previous one; a chain solves the puzzle once
//! its words use every letter.
//!
//! # Known limitation
//!
//! The adjacency test asks "is there a side holding both letters?". If one letter
//! is printed on several sides, a word may be rejected even though an assignment
//! of its letters to sides exists that would make it playable.
//!
//! # Examples
//!
//! ```
//! use wordtools::anagram::Anagrammer;
//! use wordtools::letter_boxed::{find_chains, Sides};
//!
//! let anagrammer = Anagrammer::from_word_list(["ac", "cb", "bd"]);
//! let sides = Sides::parse(&["ab", "cd"])?;
//! let chains: Vec<Vec<&str>> = find_chains(&anagrammer, &sides, 0).collect();
//! assert_eq!(chains, vec![vec!["ac", "cb", "bd"]]);
//! # Ok::<(), Box<wordtools::errors::ParseError>>(())
//! ```

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

use log::debug;

use crate::anagram::Anagrammer;
use crate::errors::ParseError;
use crate::letters::{letter_to_num, LetterSet};
use crate::normalize::fold_diacritics;

/// The sides of a letter-boxed puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sides {
    sides: Vec<LetterSet>,
    letters: LetterSet,
}

impl Sides {
    /// Build the sides from one string per side. Case and accents are folded;
    /// anything that is not then a letter a-z is rejected.
    ///
    /// # Errors
    ///
    /// - `ParseError::NoSides` if `sides` is empty;
    /// - `ParseError::EmptySide` if a side has no letters;
    /// - `ParseError::InvalidLetter` for any other character.
    pub fn parse<S: AsRef<str>>(sides: &[S]) -> Result<Self, Box<ParseError>> {
        if sides.is_empty() {
            return Err(Box::new(ParseError::NoSides));
        }

        let mut parsed = Vec::with_capacity(sides.len());
        let mut letters = LetterSet::default();
        for (index, raw) in sides.iter().enumerate() {
            let mut side = LetterSet::default();
            for c in fold_diacritics(raw.as_ref()).chars() {
                letter_to_num(c)?;
                side.insert(c);
            }
            if side.is_empty() {
                return Err(Box::new(ParseError::EmptySide { index }));
            }
            letters = letters.union(side);
            parsed.push(side);
        }

        Ok(Sides { sides: parsed, letters })
    }

    /// Every letter on the box.
    pub fn letters(&self) -> LetterSet {
        self.letters
    }

    pub fn len(&self) -> usize {
        self.sides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sides.is_empty()
    }

    /// True if no two consecutive letters of `word` share a side.
    pub fn allows(&self, word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();
        chars.windows(2).all(|pair| {
            !self
                .sides
                .iter()
                .any(|side| side.contains(pair[0]) && side.contains(pair[1]))
        })
    }
}

impl fmt::Display for Sides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sides: Vec<String> = self.sides.iter().map(LetterSet::to_string).collect();
        write!(f, "{}", sides.join(" "))
    }
}

/// A playable word with the facts the search needs about it.
#[derive(Debug)]
struct Candidate<'a> {
    word: &'a str,
    letters: LetterSet,
    last: char,
}

/// A partial chain: indices into the candidate list plus the letters used so far.
#[derive(Debug, Clone)]
struct Chain {
    words: Vec<usize>,
    covered: LetterSet,
}

/// Breadth-first search over chains, yielded shortest first.
///
/// Without an explicit maximum, the length of the first solution becomes the
/// maximum, so only the shortest solutions are reported. The search also stops
/// once a whole breadth-first level reaches no (last letter, used letters) state
/// it has not seen before; from then on no solution can appear.
pub struct Chains<'a> {
    candidates: Vec<Candidate<'a>>,
    by_first: HashMap<char, Vec<usize>>,
    target: LetterSet,
    max_len: Option<usize>,
    queue: VecDeque<Chain>,
    expanding: Option<(Chain, usize)>,
    seen_states: HashSet<(char, LetterSet)>,
    level: usize,
    level_found_new: bool,
}

impl Chains<'_> {
    fn stop(&mut self) {
        self.queue.clear();
        self.expanding = None;
    }
}

impl<'a> Iterator for Chains<'a> {
    type Item = Vec<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((chain, next)) = self.expanding.as_mut() {
                let last = self.candidates[chain.words[chain.words.len() - 1]].last;
                let successors = self.by_first.get(&last).map(Vec::as_slice).unwrap_or_default();

                while *next < successors.len() {
                    let index = successors[*next];
                    *next += 1;

                    let candidate = &self.candidates[index];
                    let covered = chain.covered.union(candidate.letters);
                    let mut words = chain.words.clone();
                    words.push(index);

                    if covered == self.target {
                        if self.max_len.is_none() {
                            debug!("first solution has {} words", words.len());
                            self.max_len = Some(words.len());
                        }
                        let found = words.iter().map(|&i| self.candidates[i].word).collect();
                        return Some(found);
                    }

                    if self.seen_states.insert((candidate.last, covered)) {
                        self.level_found_new = true;
                    }
                    self.queue.push_back(Chain { words, covered });
                }
                self.expanding = None;
            }

            let chain = self.queue.pop_front()?;
            if self.max_len.is_some_and(|max| chain.words.len() >= max) {
                self.stop();
                return None;
            }

            if chain.words.len() > self.level {
                if self.level > 0 && self.max_len.is_none() && !self.level_found_new {
                    debug!("no new states after {} words; stopping", self.level);
                    self.stop();
                    return None;
                }
                self.level = chain.words.len();
                self.level_found_new = false;
            }

            self.expanding = Some((chain, 0));
        }
    }
}

/// Find letter-boxed chains over the words in `anagrammer`.
///
/// `max_chain_len` of 0 means no explicit limit. With no limit and a puzzle
/// whose letters can all be used by some word, the queue can still grow large
/// before the search ends; pull only as many chains as you need.
pub fn find_chains<'a>(anagrammer: &'a Anagrammer, sides: &Sides, max_chain_len: usize) -> Chains<'a> {
    let target = sides.letters();

    // Keys narrow the dictionary to words built from puzzle letters only.
    let mut words: Vec<&'a str> = anagrammer
        .group_keys()
        .filter(|key| !key.is_empty())
        .filter(|key| key.as_str().chars().collect::<LetterSet>().is_subset(&target))
        .flat_map(|key| anagrammer.group_by_key(key))
        .filter(|word| word.chars().all(|c| target.contains(c)))
        .collect();
    let num_candidates = words.len();

    words.retain(|word| sides.allows(word));
    words.sort_unstable();
    debug!(
        "{} playable words out of {} candidates for {}",
        words.len(),
        num_candidates,
        sides
    );

    let candidates: Vec<Candidate<'a>> = words
        .into_iter()
        .filter_map(|word| {
            let last = word.chars().last()?;
            Some(Candidate { word, letters: word.chars().collect(), last })
        })
        .collect();

    let mut by_first: HashMap<char, Vec<usize>> = HashMap::new();
    for (i, candidate) in candidates.iter().enumerate() {
        if let Some(first) = candidate.word.chars().next() {
            by_first.entry(first).or_default().push(i);
        }
    }

    let reachable = candidates
        .iter()
        .fold(LetterSet::default(), |acc, c| acc.union(c.letters));

    let mut chains = Chains {
        candidates,
        by_first,
        target,
        max_len: (max_chain_len > 0).then_some(max_chain_len),
        queue: VecDeque::new(),
        expanding: None,
        seen_states: HashSet::new(),
        level: 0,
        level_found_new: false,
    };

    if !target.is_subset(&reachable) {
        debug!("letters {target} cannot all be used by playable words");
        return chains;
    }

    for (i, candidate) in chains.candidates.iter().enumerate() {
        chains.seen_states.insert((candidate.last, candidate.letters));
        chains.queue.push_back(Chain { words: vec![i], covered: candidate.letters });
    }

    chains
}
