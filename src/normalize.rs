//! Folding of accented Latin text to plain lowercase ASCII.
//!
//! Each non-ASCII character is replaced by its `deunicode` transliteration, so
//! "é" becomes "e", "ß" becomes "ss" and "ŋ" becomes "ng". Anything without a
//! transliteration passes through unchanged.

use deunicode::deunicode_char;

/// Lowercase `s` and transliterate its non-ASCII characters to ASCII.
///
/// Characters with no ASCII equivalent pass through (lowercased); callers that
/// only care about letters filter them afterwards.
///
/// ```
/// use wordtools::normalize::fold_diacritics;
///
/// assert_eq!(fold_diacritics("Crème Brûlée"), "creme brulee");
/// assert_eq!(fold_diacritics("Straße"), "strasse");
/// ```
pub fn fold_diacritics(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_ascii() {
            out.push(c.to_ascii_lowercase());
        } else if let Some(ascii) = deunicode_char(c) {
            out.push_str(&ascii.to_ascii_lowercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}
