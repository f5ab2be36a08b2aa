use word_tally::models::Error;
use word_tally::{
    tally_document, AnnotationMap, DocumentSource, ExclusionSet, PlainTextDocument, ScanOptions,
    WordCountMap,
};

fn count_in(report: &[word_tally::ReportRow], word: &str) -> Option<usize> {
    report
        .iter()
        .find(|row| row.word == word)
        .map(|row| row.count)
}

#[cfg(test)]
mod plain_text_document_tests {
    use super::*;

    #[test]
    fn test_form_feed_splits_pages() {
        let document = PlainTextDocument::from_text("page one\u{0c}page two\u{0c}page three");

        assert_eq!(document.page_count(), 3);
        assert_eq!(document.page_text(1, None).expect("page exists"), "page two");
    }

    #[test]
    fn test_no_form_feed_is_a_single_page() {
        let document = PlainTextDocument::from_text("just one page");
        assert_eq!(document.page_count(), 1);
    }

    #[test]
    fn test_page_out_of_range() {
        let document = PlainTextDocument::from_text("only page");
        assert!(matches!(
            document.page_text(1, None),
            Err(Error::PageExtraction(_))
        ));
    }

    #[test]
    fn test_open_missing_file_is_a_document_open_error() {
        let result = PlainTextDocument::open("tests/test_files/no_such_document.txt");
        assert!(matches!(result, Err(Error::DocumentOpen(_))));
    }
}

#[cfg(test)]
mod pipeline_tests {
    use super::*;

    #[test]
    fn test_tally_across_pages() {
        let document =
            PlainTextDocument::open("tests/test_files/sample_pages.txt").expect("fixture opens");
        assert_eq!(document.page_count(), 2);

        let exclusion = ExclusionSet::new();
        let report = tally_document(
            &document,
            &ScanOptions::default(),
            &exclusion,
            WordCountMap::new(),
            AnnotationMap::new(),
            None,
        )
        .expect("pipeline runs");

        // "story" appears once per page; "Fox fox" folds to one key.
        assert_eq!(count_in(&report, "story"), Some(2));
        assert_eq!(count_in(&report, "fox"), Some(2));
        assert_eq!(count_in(&report, "the"), Some(2));
        // Line-wrap hyphenation joined "compli-\ncated".
        assert_eq!(count_in(&report, "complicated"), Some(1));
        // Structural hyphen kept.
        assert_eq!(count_in(&report, "well-known"), Some(1));
        // Page one ends with a dangling "mid-"; the buffered token is dropped
        // and does not continue into page two.
        assert_eq!(count_in(&report, "mid"), None);
        assert_eq!(count_in(&report, "midterm"), None);
        assert_eq!(count_in(&report, "term"), Some(1));
    }

    #[test]
    fn test_start_page_skips_earlier_pages() {
        let document =
            PlainTextDocument::open("tests/test_files/sample_pages.txt").expect("fixture opens");

        let options = ScanOptions {
            start_page: Some(1),
            ..ScanOptions::default()
        };
        let exclusion = ExclusionSet::new();
        let report = tally_document(
            &document,
            &options,
            &exclusion,
            WordCountMap::new(),
            AnnotationMap::new(),
            None,
        )
        .expect("pipeline runs");

        assert_eq!(count_in(&report, "story"), Some(1));
        assert_eq!(count_in(&report, "fox"), None);
        assert_eq!(count_in(&report, "resumes"), Some(1));
    }

    #[test]
    fn test_pages_count_limits_the_range() {
        let document =
            PlainTextDocument::open("tests/test_files/sample_pages.txt").expect("fixture opens");

        let options = ScanOptions {
            pages_count: Some(1),
            ..ScanOptions::default()
        };
        let exclusion = ExclusionSet::new();
        let report = tally_document(
            &document,
            &options,
            &exclusion,
            WordCountMap::new(),
            AnnotationMap::new(),
            None,
        )
        .expect("pipeline runs");

        assert_eq!(count_in(&report, "fox"), Some(2));
        assert_eq!(count_in(&report, "resumes"), None);
    }

    #[test]
    fn test_start_page_past_end_yields_empty_report() {
        let document = PlainTextDocument::from_text("some words here");

        let options = ScanOptions {
            start_page: Some(5),
            ..ScanOptions::default()
        };
        let exclusion = ExclusionSet::new();
        let report = tally_document(
            &document,
            &options,
            &exclusion,
            WordCountMap::new(),
            AnnotationMap::new(),
            None,
        )
        .expect("pipeline runs");

        assert!(report.is_empty());
    }

    #[test]
    fn test_raw_text_dump_side_channel() {
        let document = PlainTextDocument::from_text("page one\u{0c}page two");

        let exclusion = ExclusionSet::new();
        let mut dump = Vec::new();
        tally_document(
            &document,
            &ScanOptions::default(),
            &exclusion,
            WordCountMap::new(),
            AnnotationMap::new(),
            Some(&mut dump as &mut dyn std::io::Write),
        )
        .expect("pipeline runs");

        let dumped = String::from_utf8(dump).expect("dump is UTF-8");
        assert_eq!(dumped, "page one\npage two\n");
    }
}
