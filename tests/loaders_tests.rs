use word_tally::models::Error;
use word_tally::{
    load_exclusion_list, load_merge_file, write_report, AnnotationMap, ExclusionSet, WordCountMap,
    WordTally,
};

#[cfg(test)]
mod exclusion_list_tests {
    use super::*;

    #[test]
    fn test_load_lowercases_entries() {
        let exclusion =
            load_exclusion_list("tests/test_files/exclusion_sample.txt").expect("fixture loads");

        assert_eq!(exclusion.len(), 3);
        assert!(exclusion.contains("common"));
        assert!(exclusion.contains("the"));
        assert!(exclusion.contains("words"));
    }

    #[test]
    fn test_missing_file_is_a_filter_load_error() {
        let result = load_exclusion_list("tests/test_files/no_such_file.txt");
        assert!(matches!(result, Err(Error::FilterLoad(_))));
    }
}

#[cfg(test)]
mod merge_file_tests {
    use super::*;

    #[test]
    fn test_load_with_kept_counts() {
        let (counts, annotations) =
            load_merge_file("tests/test_files/merge_sample.txt", true).expect("fixture loads");

        // The malformed "###" row is skipped, the three real rows survive.
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.get("apple"), Some(&5));
        assert_eq!(counts.get("banana"), Some(&12));
        assert_eq!(counts.get("cherry"), Some(&2));

        assert_eq!(
            annotations.get("apple").map(String::as_str),
            Some("keeps the doctor away")
        );
        assert_eq!(annotations.get("banana").map(String::as_str), Some("yellow"));
        // cherry has no annotation text, so none is stored
        assert_eq!(annotations.get("cherry"), None);
    }

    #[test]
    fn test_load_with_reset_counts() {
        let (counts, annotations) =
            load_merge_file("tests/test_files/merge_sample.txt", false).expect("fixture loads");

        assert!(counts.values().all(|&count| count == 0));
        // Annotations survive a reset; that is the point of the merge file.
        assert_eq!(annotations.len(), 2);
    }

    #[test]
    fn test_missing_file_is_a_merge_load_error() {
        let result = load_merge_file("tests/test_files/no_such_file.txt", true);
        assert!(matches!(result, Err(Error::MergeLoad(_))));
    }
}

#[cfg(test)]
mod round_trip_tests {
    use super::*;

    #[test]
    fn test_written_report_reloads_as_merge_source() {
        let exclusion = ExclusionSet::new();
        let mut annotations = AnnotationMap::new();
        annotations.insert("apple".to_string(), "keeps the doctor away".to_string());

        let mut tally = WordTally::with_seed(&exclusion, WordCountMap::new(), annotations);
        for word in ["apple", "apple", "apple", "banana", "wordy"] {
            tally.collect_if_suitable(word.to_string());
        }

        let mut output = Vec::new();
        write_report(&tally.into_report(), &mut output).expect("report writes");

        let path = std::env::temp_dir().join(format!("word_tally_round_trip_{}", std::process::id()));
        std::fs::write(&path, &output).expect("report file writes");

        let (counts, annotations) = load_merge_file(&path, true).expect("report reloads");
        std::fs::remove_file(&path).ok();

        assert_eq!(counts.get("apple"), Some(&3));
        assert_eq!(counts.get("banana"), Some(&1));
        assert_eq!(counts.get("wordy"), Some(&1));
        assert_eq!(
            annotations.get("apple").map(String::as_str),
            Some("keeps the doctor away")
        );
    }

    #[test]
    fn test_wide_count_row_without_annotation_reloads() {
        // A 3-digit count fills its column, so the writer emits nothing after
        // it; the row must still parse as a merge source.
        let row = word_tally::ReportRow {
            word: "frequent".to_string(),
            count: 100,
            annotation: None,
        };

        let mut output = Vec::new();
        write_report(&[row], &mut output).expect("report writes");
        assert_eq!(String::from_utf8_lossy(&output), "frequent             100\n");

        let path =
            std::env::temp_dir().join(format!("word_tally_wide_count_{}", std::process::id()));
        std::fs::write(&path, &output).expect("report file writes");

        let (counts, annotations) = load_merge_file(&path, true).expect("report reloads");
        std::fs::remove_file(&path).ok();

        assert_eq!(counts.get("frequent"), Some(&100));
        assert_eq!(annotations.get("frequent"), None);
    }

    #[test]
    fn test_bare_row_without_trailing_whitespace_loads() {
        let path =
            std::env::temp_dir().join(format!("word_tally_bare_row_{}", std::process::id()));
        std::fs::write(&path, "plain 7\n").expect("merge file writes");

        let (counts, annotations) = load_merge_file(&path, true).expect("merge file loads");
        std::fs::remove_file(&path).ok();

        assert_eq!(counts.get("plain"), Some(&7));
        assert_eq!(annotations.get("plain"), None);
    }
}
