//! Wordle candidate filtering.
//!
//! Guesses are written one character per letter:
//! - lowercase letter: grey (not in the word, beyond what other hints account for)
//! - uppercase letter: yellow (in the word, but not here)
//! - `.` then a letter: green (exactly here)
//!
//! `"gUe.ss"` therefore reads grey g, yellow u, grey e, green s, grey s.

use std::collections::HashMap;
use std::str::FromStr;

use log::debug;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{one_of, satisfy},
    combinator::map,
    sequence::preceded,
    IResult, Parser,
};

use crate::errors::ParseError;
use crate::grouper::LengthGrouper;
use crate::letters::{LITERAL_CHARS, UPPERCASE_CHARS};

/// Parser result type: input, output, with our custom `ParseError`
type PResult<'a, O> = IResult<&'a str, O, Box<ParseError>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    Green,
    Yellow,
    Grey,
}

/// One position of a guess: the letter played and what the game said about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    pub letter: char,
    pub colour: Colour,
}

/// A parsed guess, one hint per letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess(pub Vec<Hint>);

impl Guess {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn hints(&self) -> &[Hint] {
        &self.0
    }
}

// === Token parsers ===

fn grey(input: &'_ str) -> PResult<'_, Hint> {
    map(one_of(LITERAL_CHARS), |letter| Hint { letter, colour: Colour::Grey }).parse(input)
}

fn yellow(input: &'_ str) -> PResult<'_, Hint> {
    map(one_of(UPPERCASE_CHARS), |c: char| Hint {
        letter: c.to_ascii_lowercase(),
        colour: Colour::Yellow,
    })
    .parse(input)
}

fn green(input: &'_ str) -> PResult<'_, Hint> {
    map(
        preceded(tag("."), satisfy(|c| c.is_ascii_alphabetic())),
        |c: char| Hint { letter: c.to_ascii_lowercase(), colour: Colour::Green },
    )
    .parse(input)
}

fn hint(input: &'_ str) -> PResult<'_, Hint> {
    alt((green, yellow, grey)).parse(input)
}

impl FromStr for Guess {
    type Err = Box<ParseError>;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut rest = raw;
        let mut hints = Vec::with_capacity(raw.len());

        while !rest.is_empty() {
            match hint(rest) {
                Ok((next, h)) => {
                    hints.push(h);
                    rest = next;
                }
                Err(_) => {
                    let mut chars = rest.chars();
                    let first = chars.next().unwrap_or('?');
                    return Err(Box::new(match (first, chars.next()) {
                        ('.', None) => ParseError::DanglingGreenMarker { guess: raw.to_string() },
                        ('.', Some(after)) => ParseError::InvalidGuess { guess: raw.to_string(), invalid_char: after },
                        (other, _) => ParseError::InvalidGuess { guess: raw.to_string(), invalid_char: other },
                    }));
                }
            }
        }

        if hints.is_empty() {
            return Err(Box::new(ParseError::EmptyGuess));
        }
        Ok(Guess(hints))
    }
}

/// Per-position facts extracted from one guess.
#[derive(Debug, Default)]
struct Constraints {
    greens: Vec<(usize, char)>,
    yellows: Vec<(usize, char)>,
    greys: Vec<(usize, char)>,
    /// Letters with a grey hint: the word holds exactly as many as the guess's
    /// green and yellow hints for that letter.
    exact_counts: HashMap<char, usize>,
}

impl From<&Guess> for Constraints {
    fn from(guess: &Guess) -> Self {
        let mut constraints = Constraints::default();
        let mut colours_by_letter: HashMap<char, Vec<Colour>> = HashMap::new();

        for (i, h) in guess.hints().iter().enumerate() {
            colours_by_letter.entry(h.letter).or_default().push(h.colour);
            match h.colour {
                Colour::Green => constraints.greens.push((i, h.letter)),
                Colour::Yellow => constraints.yellows.push((i, h.letter)),
                Colour::Grey => constraints.greys.push((i, h.letter)),
            }
        }

        for (letter, colours) in colours_by_letter {
            if colours.contains(&Colour::Grey) {
                let not_grey = colours.iter().filter(|&&c| c != Colour::Grey).count();
                constraints.exact_counts.insert(letter, not_grey);
            }
        }

        constraints
    }
}

impl Constraints {
    fn matches(&self, word: &[char]) -> bool {
        let at = |i: usize| word.get(i).copied();

        self.greens.iter().all(|&(i, letter)| at(i) == Some(letter))
            && self
                .yellows
                .iter()
                .all(|&(i, letter)| at(i) != Some(letter) && word.contains(&letter))
            && self.greys.iter().all(|&(i, letter)| at(i) != Some(letter))
            && self
                .exact_counts
                .iter()
                .all(|(letter, &n)| word.iter().filter(|c| *c == letter).count() == n)
    }
}

/// The words still possible after `guess`.
pub fn candidates<'w>(guess: &Guess, words: &[&'w str]) -> Vec<&'w str> {
    let constraints = Constraints::from(guess);
    words
        .iter()
        .copied()
        .filter(|word| {
            let chars: Vec<char> = word.chars().collect();
            chars.len() == guess.len() && constraints.matches(&chars)
        })
        .collect()
}

/// Apply every guess in turn to the words of the guessed length.
///
/// # Errors
///
/// Returns `ParseError::GuessLengthMismatch` if the guesses differ in length,
/// or `ParseError::EmptyGuess` if there are none.
pub fn solve<'w>(guesses: &[Guess], by_length: &'w LengthGrouper) -> Result<Vec<&'w str>, Box<ParseError>> {
    let first = guesses.first().ok_or_else(|| Box::new(ParseError::EmptyGuess))?;
    let expected = first.len();

    if let Some(bad) = guesses.iter().find(|g| g.len() != expected) {
        let guess: String = bad
            .hints()
            .iter()
            .map(|h| match h.colour {
                Colour::Green => format!(".{}", h.letter),
                Colour::Yellow => h.letter.to_ascii_uppercase().to_string(),
                Colour::Grey => h.letter.to_string(),
            })
            .collect();
        return Err(Box::new(ParseError::GuessLengthMismatch { guess, expected, found: bad.len() }));
    }

    let mut remaining = by_length.group_by_key(&expected);
    debug!("{} words of length {expected}", remaining.len());
    for guess in guesses {
        remaining = candidates(guess, &remaining);
        debug!("{} candidates left", remaining.len());
    }
    Ok(remaining)
}

/// Letter frequencies across the candidates, most common first
/// (ties in reverse alphabetical order), one `"  x: n"` line per letter.
pub fn summarise(candidates: &[&str]) -> String {
    let mut counter: HashMap<char, usize> = HashMap::new();
    for c in candidates.iter().flat_map(|w| w.chars()) {
        *counter.entry(c).or_default() += 1;
    }

    let mut rows: Vec<(usize, char)> = counter.into_iter().map(|(c, n)| (n, c)).collect();
    rows.sort_unstable_by(|a, b| b.cmp(a));
    rows.iter()
        .map(|(n, c)| format!("  {c}: {n}"))
        .collect::<Vec<_>>()
        .join("\n")
}
