pub mod is_apostrophe;
pub mod is_hyphen;
pub mod is_roman_numeral;
pub mod is_word_char;
pub mod load_exclusion_list;
pub mod load_merge_file;
pub mod resolve_path;
pub mod sort_report;
pub mod write_report;

pub use is_apostrophe::{is_apostrophe, APOSTROPHES};
pub use is_hyphen::is_hyphen;
pub use is_roman_numeral::is_roman_numeral;
pub use is_word_char::is_word_char;
pub use load_exclusion_list::load_exclusion_list;
pub use load_merge_file::load_merge_file;
pub use resolve_path::resolve_path;
pub use sort_report::sort_report;
pub use write_report::write_report;
