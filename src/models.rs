pub mod config;
pub use config::ScanOptions;

pub mod error;
pub use error::Error;

pub mod scanner;
pub use scanner::PageScanner;

pub mod word_tally;
pub use word_tally::WordTally;
