//! Spelling-bee scoring: words built from a fixed letter set that use the centre letter.

use std::collections::BTreeMap;

use log::debug;

use crate::errors::ParseError;
use crate::letters::{letter_to_num, LetterSet};
use crate::normalize::fold_diacritics;

/// Bonus for a pangram (a word using every puzzle letter), on top of its length.
pub const PANGRAM_BONUS: usize = 7;
/// Words shorter than this never score.
pub const MIN_WORD_LENGTH: usize = 4;

/// Score one word against the puzzle.
///
/// Four-letter words score 1, longer words score their length, and pangrams
/// score their length plus [`PANGRAM_BONUS`]. Anything too short, missing the
/// required letter, or using letters outside the puzzle scores 0.
pub fn score(word: &str, all_letters: &LetterSet, required: char) -> usize {
    let len = word.chars().count();
    if len < MIN_WORD_LENGTH
        || !word.contains(required)
        || !word.chars().all(|c| all_letters.contains(c))
    {
        return 0;
    }
    if len == MIN_WORD_LENGTH {
        return 1;
    }
    let used: LetterSet = word.chars().collect();
    if used == *all_letters {
        len + PANGRAM_BONUS
    } else {
        len
    }
}

/// Group every scoring word by its score. Words within a score are sorted.
///
/// `letters` are the outer letters; `required_letter` (the centre) must be a
/// single letter and counts as a puzzle letter too. Both are case- and
/// accent-folded first.
///
/// # Errors
///
/// `ParseError::InvalidRequiredLetter` if the centre is not one letter,
/// `ParseError::InvalidLetter` if an outer letter is not a-z.
pub fn spelling_bee<I, S>(
    words: I,
    letters: &str,
    required_letter: &str,
) -> Result<BTreeMap<usize, Vec<String>>, Box<ParseError>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let folded = fold_diacritics(required_letter);
    let mut centre = folded.chars();
    let required = match (centre.next(), centre.next()) {
        (Some(c), None) if letter_to_num(c).is_ok() => c,
        _ => {
            return Err(Box::new(ParseError::InvalidRequiredLetter {
                input: required_letter.to_string(),
            }))
        }
    };

    let mut all_letters = LetterSet::default();
    all_letters.insert(required);
    for c in fold_diacritics(letters).chars().filter(|c| !c.is_whitespace()) {
        letter_to_num(c)?;
        all_letters.insert(c);
    }
    debug!("spelling bee letters {all_letters}, centre '{required}'");

    let mut by_score: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    for word in words {
        let word = word.as_ref();
        let points = score(word, &all_letters, required);
        if points > 0 {
            by_score.entry(points).or_default().push(word.to_string());
        }
    }
    for group in by_score.values_mut() {
        group.sort();
        group.dedup();
    }
    Ok(by_score)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle(letters: &str) -> LetterSet {
        letters.chars().collect()
    }

    #[test]
    fn test_score_rules() {
        let letters = puzzle("abcdelt");
        assert_eq!(score("tab", &letters, 't'), 0, "too short");
        assert_eq!(score("bead", &letters, 't'), 0, "missing required letter");
        assert_eq!(score("tabs", &letters, 't'), 0, "letter outside the puzzle");
        assert_eq!(score("tale", &letters, 't'), 1);
        assert_eq!(score("tablet", &letters, 't'), 6);
    }

    #[test]
    fn test_pangram_bonus() {
        let letters = puzzle("abcdelt");
        // uses every letter once: a b c d e l t
        assert_eq!(score("blacted", &letters, 't'), 7 + PANGRAM_BONUS);
        // a four-letter pangram is still a four-letter word
        assert_eq!(score("abcd", &puzzle("abcd"), 'a'), 1);
    }

    #[test]
    fn test_spelling_bee_groups_by_score() {
        let words = ["tale", "late", "tablet", "cat", "batted", "bleat", "zeta"];
        let found = spelling_bee(words, "abdel", "t").unwrap();
        assert_eq!(found.get(&1), Some(&vec!["late".to_string(), "tale".to_string()]));
        assert_eq!(found.get(&5), Some(&vec!["bleat".to_string()]));
        assert_eq!(found.get(&6), Some(&vec!["batted".to_string(), "tablet".to_string()]));
        assert_eq!(found.len(), 3);
    }

    #[test]
    fn test_required_letter_is_a_puzzle_letter() {
        let found = spelling_bee(["tent"], "en", "T").unwrap();
        assert_eq!(found.get(&1), Some(&vec!["tent".to_string()]));
    }

    #[test]
    fn test_invalid_required_letter() {
        for bad in ["", "ab", "1"] {
            let err = spelling_bee(["word"], "abc", bad).unwrap_err();
            assert!(matches!(*err, ParseError::InvalidRequiredLetter { .. }), "{bad:?}");
        }
    }

    #[test]
    fn test_invalid_outer_letter() {
        let err = spelling_bee(["word"], "ab3", "c").unwrap_err();
        assert!(matches!(*err, ParseError::InvalidLetter { invalid_char: '3' }));
    }
}
