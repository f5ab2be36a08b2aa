use crate::models::Error;
use crate::types::{AnnotationMap, WordCountMap};
use lazy_static::lazy_static;
use log::warn;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

lazy_static! {
    // <token> <count> [annotation...], the same row shape the reporter
    // writes. The annotation group is optional: a count wide enough to fill
    // its column is written with nothing after it.
    static ref MERGE_LINE_REGEX: Regex =
        Regex::new(r"^(\S+)\s+(\d+)(?:\s+(.*))?$").expect("merge-line pattern is valid");
}

/// Loads a merge file produced by an earlier run (or authored by hand).
///
/// Each line is `<word> <count> [annotation]`. With `keep_count` the parsed
/// count is kept, otherwise it resets to 0; the annotation survives either
/// way, which is what lets hand-written notes outlive a re-count. Lines that
/// do not match the row grammar are skipped with a warning rather than
/// aborting the load. Empty annotations are not stored.
pub fn load_merge_file<P: AsRef<Path>>(
    path: P,
    keep_count: bool,
) -> Result<(WordCountMap, AnnotationMap), Error> {
    let path = path.as_ref();
    let file =
        File::open(path).map_err(|err| Error::MergeLoad(format!("{}: {}", path.display(), err)))?;

    let mut counts = WordCountMap::new();
    let mut annotations = AnnotationMap::new();

    for (line_number, line) in BufReader::new(file).lines().enumerate() {
        let line =
            line.map_err(|err| Error::MergeLoad(format!("{}: {}", path.display(), err)))?;

        let captures = match MERGE_LINE_REGEX.captures(&line) {
            Some(captures) => captures,
            None => {
                if !line.trim().is_empty() {
                    warn!(
                        "skipping malformed merge line {}:{}: {:?}",
                        path.display(),
                        line_number + 1,
                        line
                    );
                }
                continue;
            }
        };

        let word = captures[1].to_string();
        let count = match captures[2].parse::<usize>() {
            Ok(count) => count,
            Err(err) => {
                warn!(
                    "skipping merge line {}:{} with unusable count: {}",
                    path.display(),
                    line_number + 1,
                    err
                );
                continue;
            }
        };
        let annotation = captures
            .get(3)
            .map_or("", |text| text.as_str().trim_end());

        counts.insert(word.clone(), if keep_count { count } else { 0 });
        if !annotation.is_empty() {
            annotations.insert(word, annotation.to_string());
        }
    }

    Ok((counts, annotations))
}
