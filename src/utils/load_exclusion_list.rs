use crate::models::Error;
use crate::types::{ExclusionSet, NormalizedWord};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Loads the exclusion list: one word per line, blank lines skipped.
///
/// Entries are lowercased on load, so the file's author does not have to
/// pre-normalize; membership tests against scanned tokens always compare
/// normalized forms.
pub fn load_exclusion_list<P: AsRef<Path>>(path: P) -> Result<ExclusionSet, Error> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|err| Error::FilterLoad(format!("{}: {}", path.display(), err)))?;

    let mut exclusion = ExclusionSet::new();
    for line in BufReader::new(file).lines() {
        let line =
            line.map_err(|err| Error::FilterLoad(format!("{}: {}", path.display(), err)))?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        let normalized: NormalizedWord = word.chars().flat_map(char::to_lowercase).collect();
        exclusion.insert(normalized);
    }

    Ok(exclusion)
}
