use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ROMAN_NUMERAL_REGEX: Regex =
        Regex::new(r"^m{0,4}(cm|cd|d?c{0,3})(xc|xl|l?x{0,3})(ix|iv|v?i{0,3})$")
            .expect("Roman-numeral pattern is valid");
}

/// Returns `true` if `word` parses as a Roman numeral.
///
/// The input must already be normalized to lowercase. The grammar covers
/// 1..=4999 in the usual subtractive notation; the empty string is not a
/// numeral even though the pattern would accept it.
///
/// This exists to keep chapter and section references ("iii", "xiv") out of
/// the frequency report. Real words that happen to parse, such as "mix", are
/// an accepted false positive.
///
/// # Example
/// ```
/// use word_tally::utils::is_roman_numeral;
///
/// assert!(is_roman_numeral("xiv"));
/// assert!(!is_roman_numeral("fourteen"));
/// ```
pub fn is_roman_numeral(word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    ROMAN_NUMERAL_REGEX.is_match(word)
}
