//! Spreadsheet reader for the delay-cause workbook.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use tracing::{debug, info};

use crate::error::{PipelineError, Result};
use crate::table::RawTable;

/// Reads the first worksheet of `path`, taking the zero-indexed sheet row
/// `header_row` as the header and every non-blank row below it as data.
///
/// # Errors
///
/// [`PipelineError::Io`] when the file cannot be read, [`PipelineError::Format`]
/// when it is not a workbook or has no usable header row.
#[tracing::instrument(fields(path = %path.display()))]
pub fn load_sheet(path: &Path, header_row: usize) -> Result<RawTable> {
    std::fs::File::open(path).map_err(|e| PipelineError::io(path, e))?;

    let mut workbook = open_workbook_auto(path)
        .map_err(|e| PipelineError::format(format!("cannot open workbook: {e}")))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| PipelineError::format("workbook has no worksheet"))?
        .map_err(|e| PipelineError::format(format!("cannot read first worksheet: {e}")))?;

    // `rows()` starts at the first used row, not at the top of the sheet.
    let (start_row, _) = range
        .start()
        .ok_or_else(|| PipelineError::format("worksheet is empty"))?;
    let skip = header_row
        .checked_sub(start_row as usize)
        .ok_or_else(|| PipelineError::format(format!("header row {header_row} is empty")))?;

    let mut rows = range.rows().skip(skip);
    let header_cells = rows.next().ok_or_else(|| {
        PipelineError::format(format!("header row {header_row} is past the end of the sheet"))
    })?;

    let header: Vec<String> = header_cells
        .iter()
        .enumerate()
        .map(|(i, cell)| header_label(cell).unwrap_or_else(|| format!("Unnamed: {i}")))
        .collect();

    let width = header.len();
    let mut skipped_blank = 0usize;
    let data: Vec<Vec<Data>> = rows
        .filter(|row| {
            let blank = row.iter().all(|c| matches!(c, Data::Empty));
            if blank {
                skipped_blank += 1;
            }
            !blank
        })
        .map(|row| {
            let mut cells = row.to_vec();
            cells.resize(width, Data::Empty);
            cells
        })
        .collect();

    if skipped_blank > 0 {
        debug!(skipped_blank, "Skipped blank rows");
    }
    info!(columns = width, rows = data.len(), "Worksheet loaded");

    Ok(RawTable { header, rows: data })
}

/// Text used for a header cell; `None` for blank cells.
fn header_label(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) if s.trim().is_empty() => None,
        Data::String(s) => Some(s.trim().to_string()),
        Data::Float(v) if v.fract() == 0.0 && v.abs() < 1e15 => Some(format!("{}", *v as i64)),
        Data::Float(v) => Some(format!("{v}")),
        Data::Int(v) => Some(format!("{v}")),
        Data::Bool(v) => Some(v.to_string()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_xlsx(dir: &TempDir, name: &str, rows: &[Vec<&str>]) -> PathBuf {
        let path = dir.path().join(name);
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();

        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                if value.is_empty() {
                    continue;
                }
                match value.parse::<f64>() {
                    Ok(n) => sheet.write_number(r as u32, c as u16, n).unwrap(),
                    Err(_) => sheet.write_string(r as u32, c as u16, *value).unwrap(),
                };
            }
        }

        workbook.save(&path).unwrap();
        path
    }

    #[test]
    fn test_header_taken_from_second_row() {
        let dir = TempDir::new().unwrap();
        let path = write_xlsx(
            &dir,
            "sheet.xlsx",
            &[
                vec!["Percent of Flight Delay by Delay Cause"],
                vec!["", "2010", "2011"],
                vec!["Air Carrier Delay", "5.1", "5.4"],
                vec!["Security Delay", "0.1", "N/A"],
            ],
        );

        let raw = load_sheet(&path, 1).unwrap();

        assert_eq!(raw.header, vec!["Unnamed: 0", "2010", "2011"]);
        assert_eq!(raw.rows.len(), 2);
        assert_eq!(raw.rows[0][0], Data::String("Air Carrier Delay".into()));
        assert_eq!(raw.rows[0][1], Data::Float(5.1));
        assert_eq!(raw.rows[1][2], Data::String("N/A".into()));
    }

    #[test]
    fn test_short_rows_are_padded_and_blank_rows_skipped() {
        let dir = TempDir::new().unwrap();
        let path = write_xlsx(
            &dir,
            "ragged.xlsx",
            &[
                vec!["title"],
                vec!["", "2010", "2011"],
                vec!["Air Carrier Delay", "5.1"],
                vec![],
                vec!["Security Delay", "0.1", "0.2"],
            ],
        );

        let raw = load_sheet(&path, 1).unwrap();

        assert_eq!(raw.rows.len(), 2);
        assert_eq!(raw.rows[0].len(), 3);
        assert_eq!(raw.rows[0][2], Data::Empty);
        assert_eq!(raw.rows[1][0], Data::String("Security Delay".into()));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = load_sheet(&dir.path().join("absent.xlsx"), 1).unwrap_err();
        assert!(matches!(err, PipelineError::Io { .. }), "{err:?}");
    }

    #[test]
    fn test_non_workbook_is_format_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("not_a_workbook.xlsx");
        std::fs::write(&path, b"this is not a zip archive").unwrap();

        let err = load_sheet(&path, 1).unwrap_err();
        assert!(matches!(err, PipelineError::Format(_)), "{err:?}");
    }

    #[test]
    fn test_header_past_end_is_format_error() {
        let dir = TempDir::new().unwrap();
        let path = write_xlsx(&dir, "one_row.xlsx", &[vec!["only", "row"]]);

        let err = load_sheet(&path, 1).unwrap_err();
        assert!(matches!(err, PipelineError::Format(_)), "{err:?}");
    }

    #[test]
    fn test_header_label_renders_years_without_fraction() {
        assert_eq!(header_label(&Data::Float(2010.0)).as_deref(), Some("2010"));
        assert_eq!(header_label(&Data::Float(0.5)).as_deref(), Some("0.5"));
        assert_eq!(header_label(&Data::String("  ".into())), None);
    }
}
