use crate::models::Error;
use crate::types::PageIndex;

pub mod pdf;
pub use pdf::PdfDocument;

pub mod plain_text;
pub use plain_text::PlainTextDocument;

/// Crop rectangle for page text extraction, in page coordinates. Each `None`
/// field falls back to the page's own rectangle, so a partially specified
/// region crops only the axes it names.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PageRegion {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// A paginated document the tally pipeline can pull text from.
///
/// Implementations must return page text in natural reading order well enough
/// for word-boundary detection; the rendering itself is the backend's
/// business. Pages are addressed by zero-based index.
pub trait DocumentSource {
    fn page_count(&self) -> usize;

    /// Whether `page_text` honors a crop region. Backends that return `false`
    /// scan the full page regardless of the region argument.
    fn supports_region(&self) -> bool {
        false
    }

    fn page_text(&self, page: PageIndex, region: Option<&PageRegion>) -> Result<String, Error>;
}
