use crate::models::Error;
use crate::sources::{DocumentSource, PageRegion};
use crate::types::PageIndex;
use lopdf::Document;
use std::path::Path;

/// PDF-backed document source.
///
/// Opening distinguishes an unreadable file from an encrypted one, since the
/// user can do something about the latter (decrypt it first) but decryption
/// itself is out of scope here.
pub struct PdfDocument {
    document: Document,
    page_numbers: Vec<u32>,
}

impl PdfDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let document = Document::load(path)
            .map_err(|err| Error::DocumentOpen(format!("{}: {}", path.display(), err)))?;

        if document.is_encrypted() {
            return Err(Error::EncryptedDocument(path.display().to_string()));
        }

        // lopdf numbers pages from 1; keep the ordered numbering so callers
        // can use plain zero-based indexes.
        let page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();

        Ok(PdfDocument {
            document,
            page_numbers,
        })
    }
}

impl DocumentSource for PdfDocument {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    // Region cropping is unsupported: lopdf extracts text per page, not per
    // rectangle. supports_region stays false and the region is ignored.
    fn page_text(&self, page: PageIndex, _region: Option<&PageRegion>) -> Result<String, Error> {
        let page_number = self
            .page_numbers
            .get(page)
            .ok_or_else(|| Error::PageExtraction(format!("page {} is out of range", page)))?;

        self.document
            .extract_text(&[*page_number])
            .map_err(|err| Error::PageExtraction(format!("page {}: {}", page, err)))
    }
}
