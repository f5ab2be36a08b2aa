/// Apostrophe forms that may appear inside a word. Text extraction produces
/// either the ASCII apostrophe or the typographic right single quotation mark
/// depending on the source's fonts; both are treated as interchangeable.
pub const APOSTROPHES: [char; 2] = ['\'', '\u{2019}'];

/// Returns `true` if `c` is an apostrophe in either form.
pub fn is_apostrophe(c: char) -> bool {
    c == APOSTROPHES[0] || c == APOSTROPHES[1]
}
