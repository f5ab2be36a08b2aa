use crate::constants::MAX_SKIPPED_WORD_LEN;
use crate::types::{
    AnnotationMap, ExclusionSet, NormalizedWord, RawToken, ReportRow, WordCountMap,
};
use crate::utils::{is_roman_numeral, sort_report};

/// The aggregation table: normalized word -> (count, optional annotation).
///
/// Holds the exclusion set as a shared borrow for the duration of the scan;
/// the set is loaded once up front and nothing may mutate it mid-scan.
/// Entries are created by merge-file seeding or by the first counted
/// occurrence, and are never deleted during a run.
pub struct WordTally<'a> {
    counts: WordCountMap,
    annotations: AnnotationMap,
    exclusion: &'a ExclusionSet,
}

impl<'a> WordTally<'a> {
    pub fn new(exclusion: &'a ExclusionSet) -> Self {
        Self::with_seed(exclusion, WordCountMap::new(), AnnotationMap::new())
    }

    /// Seeds the table from a previously loaded merge file. Seeded keys show
    /// up in the report even if this run never counts them again.
    pub fn with_seed(
        exclusion: &'a ExclusionSet,
        counts: WordCountMap,
        annotations: AnnotationMap,
    ) -> Self {
        WordTally {
            counts,
            annotations,
            exclusion,
        }
    }

    /// Normalizes and counts one scanner token, consuming it.
    ///
    /// Tokens that are too short, excluded, or Roman numerals are silently
    /// discarded. This is total: it has no error path.
    pub fn collect_if_suitable(&mut self, word: RawToken) {
        if word.chars().count() <= MAX_SKIPPED_WORD_LEN {
            return;
        }

        // Code-point-wise, locale-independent lowercasing; idempotent, so the
        // normalized form is safe to use as the sole aggregation key.
        let lowered: NormalizedWord = word.chars().flat_map(char::to_lowercase).collect();

        if self.exclusion.contains(&lowered) || is_roman_numeral(&lowered) {
            return;
        }
        *self.counts.entry(lowered).or_insert(0) += 1;
    }

    /// Current count for a normalized word, 0 if never seen.
    pub fn count_of(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &WordCountMap {
        &self.counts
    }

    /// Consumes the table, keeping only the counts.
    pub fn into_counts(self) -> WordCountMap {
        self.counts
    }

    /// Consumes the table into report rows ordered by count descending.
    /// Ties break on the word itself for deterministic output, but callers
    /// must not depend on tie order.
    pub fn into_report(self) -> Vec<ReportRow> {
        let WordTally {
            counts,
            mut annotations,
            ..
        } = self;

        sort_report(counts)
            .into_iter()
            .map(|(word, count)| {
                let annotation = annotations.remove(&word);
                ReportRow {
                    word,
                    count,
                    annotation,
                }
            })
            .collect()
    }
}
