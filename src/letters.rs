//! Alphabet constants and letter-multiset arithmetic.
//!
//! Everything downstream of normalization works on lowercase ASCII letters, so a
//! multiset of letters is just a 26-slot histogram ([`LetterCounts`]) and a set of
//! letters is a 26-bit mask ([`LetterSet`]).

use std::fmt;
use std::ops::RangeInclusive;

use crate::errors::ParseError;

// Character-set constants
pub(crate) const ALPHABET_SIZE: usize = 26;
pub(crate) const LOWERCASE_ALPHABET: RangeInclusive<char> = 'a'..='z';
pub(crate) const LITERAL_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
pub(crate) const UPPERCASE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// 'a' -> 0, 'b' -> 1, ..., 'z' -> 25
///
/// # Errors
///
/// Returns `ParseError::InvalidLetter` for anything outside `'a'..='z'`.
pub fn letter_to_num(c: char) -> Result<usize, Box<ParseError>> {
    (c as usize)
        .checked_sub('a' as usize)
        .filter(|&diff| diff < ALPHABET_SIZE)
        .ok_or_else(|| Box::new(ParseError::InvalidLetter { invalid_char: c }))
}

#[inline]
fn num_to_letter(i: usize) -> char {
    debug_assert!(i < ALPHABET_SIZE, "letter index {i} out of range");
    (b'a' + i as u8) as char
}

/// Histogram of lowercase ASCII letters: the multiset behind an anagram key.
///
/// Subtraction and containment are per-slot count comparisons, so they cost the
/// same regardless of how long the phrase is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterCounts {
    counts: [u32; ALPHABET_SIZE],
    len: usize,
}

impl LetterCounts {
    /// Count the lowercase ASCII letters in `s`, ignoring everything else.
    pub fn from_letters(s: &str) -> Self {
        let mut counts = LetterCounts::default();
        for c in s.chars() {
            if let Ok(i) = letter_to_num(c) {
                counts.counts[i] += 1;
                counts.len += 1;
            }
        }
        counts
    }

    /// Total number of letters (with multiplicity).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Multiset difference `self - other`, or `None` if `other` is not contained in `self`.
    pub fn checked_sub(&self, other: &LetterCounts) -> Option<LetterCounts> {
        let mut out = *self;
        for (slot, &need) in out.counts.iter_mut().zip(other.counts.iter()) {
            *slot = slot.checked_sub(need)?;
        }
        out.len -= other.len;
        Some(out)
    }

    /// Sorted spelling of the multiset, e.g. `{s:1, t:1, a:2}` -> `"aast"`.
    pub fn to_sorted_string(&self) -> String {
        let mut s = String::with_capacity(self.len);
        for (i, &n) in self.counts.iter().enumerate() {
            for _ in 0..n {
                s.push(num_to_letter(i));
            }
        }
        s
    }

    /// Every distinct sub-multiset of exactly `size` letters.
    ///
    /// Each multiset is produced once no matter how many letter positions could
    /// have supplied it. Results come out in lexicographic order of their sorted
    /// spelling ("aab" before "abb").
    pub fn sub_multisets(&self, size: usize) -> Vec<LetterCounts> {
        let mut out = Vec::new();
        if size > self.len {
            return out;
        }

        // suffix[i] = letters available from slot i onwards
        let mut suffix = [0usize; ALPHABET_SIZE + 1];
        for i in (0..ALPHABET_SIZE).rev() {
            suffix[i] = suffix[i + 1] + self.counts[i] as usize;
        }

        let mut current = LetterCounts::default();
        self.fill_sub_multisets(0, size, &suffix, &mut current, &mut out);
        out
    }

    fn fill_sub_multisets(
        &self,
        slot: usize,
        still_needed: usize,
        suffix: &[usize; ALPHABET_SIZE + 1],
        current: &mut LetterCounts,
        out: &mut Vec<LetterCounts>,
    ) {
        if still_needed == 0 {
            out.push(*current);
            return;
        }
        if slot == ALPHABET_SIZE || suffix[slot] < still_needed {
            return;
        }

        // Taking more of the earlier letter first gives lexicographic order.
        let most = (self.counts[slot] as usize).min(still_needed);
        for take in (0..=most).rev() {
            current.counts[slot] = take as u32;
            current.len += take;
            self.fill_sub_multisets(slot + 1, still_needed - take, suffix, current, out);
            current.len -= take;
        }
        current.counts[slot] = 0;
    }
}

/// A set of lowercase ASCII letters packed into the low 26 bits of a `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    pub fn insert(&mut self, c: char) -> bool {
        match letter_to_num(c) {
            Ok(i) => {
                self.0 |= 1 << i;
                true
            }
            Err(_) => false,
        }
    }

    pub fn contains(&self, c: char) -> bool {
        letter_to_num(c).is_ok_and(|i| self.0 & (1 << i) != 0)
    }

    pub fn union(self, other: LetterSet) -> LetterSet {
        LetterSet(self.0 | other.0)
    }

    pub fn is_subset(&self, other: &LetterSet) -> bool {
        self.0 & !other.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Letters in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        LOWERCASE_ALPHABET.filter(move |&c| self.contains(c))
    }
}

impl FromIterator<char> for LetterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = LetterSet::default();
        for c in iter {
            set.insert(c);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iter().collect::<String>())
    }
}
