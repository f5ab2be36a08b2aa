use crate::models::Error;
use crate::sources::{DocumentSource, PageRegion};
use crate::types::PageIndex;
use std::fs;
use std::path::Path;

/// Plain-text document source with form-feed page breaks.
///
/// Covers pre-extracted text (the common `pdftotext` output convention) and
/// keeps the scanning pipeline testable without a PDF in sight. A file with
/// no form feeds is a single page.
pub struct PlainTextDocument {
    pages: Vec<String>,
}

impl PlainTextDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|err| Error::DocumentOpen(format!("{}: {}", path.display(), err)))?;
        Ok(Self::from_text(&text))
    }

    pub fn from_text(text: &str) -> Self {
        let pages = text.split('\u{0c}').map(str::to_string).collect();
        PlainTextDocument { pages }
    }
}

impl DocumentSource for PlainTextDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    // Plain text has no geometry, so the region is ignored.
    fn page_text(&self, page: PageIndex, _region: Option<&PageRegion>) -> Result<String, Error> {
        self.pages
            .get(page)
            .cloned()
            .ok_or_else(|| Error::PageExtraction(format!("page {} is out of range", page)))
    }
}
