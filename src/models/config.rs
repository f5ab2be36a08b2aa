use crate::sources::PageRegion;

/// Page selection and cropping for a document scan. Defaults scan every page
/// in full.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ScanOptions {
    /// First page to scan, zero-based. `None` starts at the beginning.
    pub start_page: Option<usize>,
    /// Number of pages to scan from `start_page`. `None` runs to the end;
    /// a range reaching past the document is clamped, never an error.
    pub pages_count: Option<usize>,
    /// Crop rectangle forwarded to the document source.
    pub region: Option<PageRegion>,
}
