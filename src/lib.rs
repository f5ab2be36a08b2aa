mod constants;
pub mod models;
pub use constants::MAX_SKIPPED_WORD_LEN;
pub use models::{Error, PageScanner, ScanOptions, WordTally};
pub mod sources;
pub use sources::{DocumentSource, PageRegion, PdfDocument, PlainTextDocument};
pub mod types;
pub use types::{
    AnnotationMap, ExclusionSet, NormalizedWord, RawToken, ReportRow, WordCount, WordCountMap,
};
pub mod utils;
pub use utils::{load_exclusion_list, load_merge_file, write_report};

use log::warn;
use std::io::Write;

/// Tallies one blob of already-extracted text, treated as a single page.
///
/// Zero-I/O entry point for library consumers that have their own text in
/// hand; no merge seeding, no report ordering, just the counts.
pub fn tally_text(text: &str, exclusion: &ExclusionSet) -> WordCountMap {
    let scanner = PageScanner::new();
    let mut tally = WordTally::new(exclusion);

    for token in scanner.scan(text) {
        tally.collect_if_suitable(token);
    }

    tally.into_counts()
}

/// Runs the full pipeline over a document: walk the selected pages in order,
/// optionally dump each page's raw text to `text_dump`, scan and tally every
/// token, and return the report sorted by count descending.
///
/// The aggregation table is seeded from `seed_counts`/`annotations` (usually
/// the output of [`load_merge_file`]) before the first page is scanned.
pub fn tally_document(
    source: &dyn DocumentSource,
    options: &ScanOptions,
    exclusion: &ExclusionSet,
    seed_counts: WordCountMap,
    annotations: AnnotationMap,
    mut text_dump: Option<&mut dyn Write>,
) -> Result<Vec<ReportRow>, Error> {
    let scanner = PageScanner::new();
    let mut tally = WordTally::with_seed(exclusion, seed_counts, annotations);

    if options.region.is_some() && !source.supports_region() {
        warn!("this document backend cannot crop to a page region; scanning full pages");
    }

    let start = options.start_page.unwrap_or(0);
    let end = match options.pages_count {
        Some(count) => start.saturating_add(count).min(source.page_count()),
        None => source.page_count(),
    };

    for page in start..end {
        let text = source.page_text(page, options.region.as_ref())?;

        if let Some(sink) = text_dump.as_mut() {
            writeln!(sink, "{}", text)?;
        }

        // Scanner state is per page; a token left dangling at a page boundary
        // is dropped, never carried into the next page.
        for token in scanner.scan(&text) {
            tally.collect_if_suitable(token);
        }
    }

    Ok(tally.into_report())
}
