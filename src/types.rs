use std::collections::{HashMap, HashSet};

// Types listed here are either shared across multiple files and/or exposed via the library.

/// A raw word token as assembled by the scanner, case preserved. Owned, since the
/// scanner hands it off by value to the tally.
pub type RawToken = String;

/// The lowercase form of a token; the sole aggregation key. Two tokens differing
/// only in case collapse to one entry under this type.
pub type NormalizedWord = String;

/// How many times a normalized word has been counted.
pub type WordCount = usize;

/// Maps normalized words to their occurrence counts.
pub type WordCountMap = HashMap<NormalizedWord, WordCount>;

/// A free-text note attached to a word by a merge file. Carried through to the
/// report for display only; never affects counting or filtering.
pub type Annotation = String;

/// Maps normalized words to their annotations.
pub type AnnotationMap = HashMap<NormalizedWord, Annotation>;

/// Normalized words to omit unconditionally from the tally. Loaded once before
/// scanning begins and never mutated during a scan.
pub type ExclusionSet = HashSet<NormalizedWord>;

/// Zero-based index of a page within a document source.
pub type PageIndex = usize;

/// One row of the final frequency report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub word: NormalizedWord,
    pub count: WordCount,
    pub annotation: Option<Annotation>,
}
