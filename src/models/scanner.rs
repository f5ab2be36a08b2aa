use crate::types::RawToken;
use crate::utils::{is_apostrophe, is_hyphen, is_word_char};

/// Scanner state while walking a page's code points. `in_word` is set once at
/// least one letter has been buffered; the pending flags hold a hyphen or
/// apostrophe whose fate depends on the next code point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct ScanState {
    in_word: bool,
    pending_hyphen: bool,
    pending_apostrophe: bool,
}

/// Single-pass word-boundary scanner.
///
/// Consumes one page's text, code point by code point, and emits the raw word
/// tokens it finds in order. Case is preserved; lowercasing happens later in
/// [`WordTally`](crate::models::WordTally). Hyphens and apostrophes are only
/// kept inside a token when a letter immediately follows them, which
/// disambiguates compound words ("well-known") and contractions ("don't")
/// from justification hyphens and quoting artifacts. A hyphen followed
/// directly by a newline is a line-wrap hyphenation marker and is dropped so
/// the word continues on the next line.
#[derive(Debug, Clone, Copy)]
pub struct PageScanner;

impl PageScanner {
    pub fn new() -> Self {
        PageScanner
    }

    /// Scans one page. State always starts blank, so a token left dangling by
    /// a previous page can never leak into this one.
    pub fn scan(&self, text: &str) -> Vec<RawToken> {
        let mut tokens = Vec::new();
        let mut state = ScanState::default();
        let mut word = RawToken::new();

        for ch in text.chars() {
            if is_word_char(ch) {
                state.in_word = true;
                if state.pending_hyphen {
                    // A letter followed the hyphen: structural, part of the word.
                    word.push('-');
                    state.pending_hyphen = false;
                }
                if state.pending_apostrophe {
                    // Same for the apostrophe; typographic forms normalize to ASCII.
                    word.push('\'');
                    state.pending_apostrophe = false;
                }
                word.push(ch);
            } else if is_hyphen(ch) && state.in_word {
                // Held until the next code point decides whether it belongs to the word.
                state.pending_hyphen = true;
            } else if is_apostrophe(ch) && state.in_word {
                state.pending_apostrophe = true;
            } else if ch == '\n' && state.pending_hyphen {
                // Line-terminal hyphen: the word was wrapped, drop the hyphen.
                state.pending_hyphen = false;
            } else if state.in_word {
                // Space, tab, punctuation, digit. Sometimes text extraction
                // fails and control-char garbage appears; it ends the word too.
                tokens.push(std::mem::take(&mut word));
                state = ScanState::default();
            }
        }

        // Last word of the page. A dangling pending hyphen or apostrophe means
        // the page ended mid-decision; the buffered token is dropped.
        if state.in_word && !state.pending_hyphen && !state.pending_apostrophe {
            tokens.push(word);
        }

        tokens
    }
}

impl Default for PageScanner {
    fn default() -> Self {
        Self::new()
    }
}
