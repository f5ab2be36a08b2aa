use crate::constants::{REPORT_COUNT_WIDTH, REPORT_WORD_WIDTH};
use crate::types::ReportRow;
use std::io::{self, Write};

/// Writes report rows as `<word> <count> [annotation]`, one per line.
///
/// The row format is the same grammar `load_merge_file` parses, so a written
/// report can be fed back in as a merge source on a later run.
pub fn write_report<W: Write>(rows: &[ReportRow], out: &mut W) -> io::Result<()> {
    for row in rows {
        match &row.annotation {
            Some(annotation) => writeln!(
                out,
                "{:<word_width$} {:<count_width$} {}",
                row.word,
                row.count,
                annotation,
                word_width = REPORT_WORD_WIDTH,
                count_width = REPORT_COUNT_WIDTH,
            )?,
            None => writeln!(
                out,
                "{:<word_width$} {:<count_width$}",
                row.word,
                row.count,
                word_width = REPORT_WORD_WIDTH,
                count_width = REPORT_COUNT_WIDTH,
            )?,
        }
    }
    Ok(())
}
