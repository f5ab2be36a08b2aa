/// Returns `true` if `c` can start or extend a word.
///
/// Follows Unicode's alphabetic classification, so accented and non-Latin
/// letters count the same as ASCII ones. Digits do not.
pub fn is_word_char(c: char) -> bool {
    c.is_alphabetic()
}
