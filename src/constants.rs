/// Tokens of this many code points or fewer are discarded before counting.
/// Short fragments ("a", "of", extraction debris) carry no signal in a
/// frequency report.
pub const MAX_SKIPPED_WORD_LEN: usize = 2;

/// Report column widths. Longer words simply overflow their column; the row
/// stays parseable by the merge loader either way.
pub const REPORT_WORD_WIDTH: usize = 20;
pub const REPORT_COUNT_WIDTH: usize = 3;
