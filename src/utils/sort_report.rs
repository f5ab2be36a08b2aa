use crate::types::{NormalizedWord, WordCount, WordCountMap};

/// Sorts a word-count mapping for reporting.
///
/// ### Sorting Order:
/// - **Primary:** count in descending order (most frequent first).
/// - **Secondary:** word in ascending lexicographical order, so equal counts
///   come out in a deterministic order.
///
/// ### Returns:
/// - A `Vec` of `(NormalizedWord, WordCount)` tuples, sorted as described.
pub fn sort_report(counts: WordCountMap) -> Vec<(NormalizedWord, WordCount)> {
    let mut sorted: Vec<(NormalizedWord, WordCount)> = counts.into_iter().collect();

    sorted.sort_by(|a, b| {
        b.1.cmp(&a.1) // Sort by count (descending)
            .then_with(|| a.0.cmp(&b.0)) // Secondary sort by word (ascending)
    });

    sorted
}
