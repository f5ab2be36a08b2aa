/// Returns `true` if `c` is the ASCII hyphen-minus.
///
/// Unicode dashes (en dash, em dash) are deliberately not recognized; text
/// extractors emit those as punctuation between words, never inside one.
pub fn is_hyphen(c: char) -> bool {
    c == '-'
}
