use std::fmt;
use std::io;

#[derive(Debug)]
pub enum Error {
    /// The document could not be loaded at all.
    DocumentOpen(String),
    /// The document is encrypted; decryption is out of scope.
    EncryptedDocument(String),
    /// A page existed but its text could not be extracted.
    PageExtraction(String),
    /// The exclusion-list file could not be read.
    FilterLoad(String),
    /// The merge file could not be read.
    MergeLoad(String),
    IoError(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DocumentOpen(msg) => write!(f, "Document Open Error: {}", msg),
            Error::EncryptedDocument(path) => write!(f, "Encrypted Document: {}", path),
            Error::PageExtraction(msg) => write!(f, "Page Extraction Error: {}", msg),
            Error::FilterLoad(msg) => write!(f, "Filter Load Error: {}", msg),
            Error::MergeLoad(msg) => write!(f, "Merge Load Error: {}", msg),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IoError(err)
    }
}
