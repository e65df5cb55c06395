//! XLSX tabular reader built on calamine.
//!
//! Yields the data rows of the first worksheet as plain text cells. The
//! first sheet row is the source table's own column header and is
//! skipped; the converter prepends its own header later.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use calamine::{open_workbook, Data, Range, Reader, Xlsx};

use crate::error::{ConverterError, Result};
use crate::pipeline::TableSource;

/// Tabular source reading the first worksheet of an XLSX file.
pub struct XlsxSource {
    path: PathBuf,
}

impl XlsxSource {
    /// Create a source for the workbook at `path`.
    ///
    /// The file is only opened when rows are read.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TableSource for XlsxSource {
    fn read_rows(&mut self) -> Result<Vec<Vec<String>>> {
        let mut workbook: Xlsx<BufReader<File>> = open_workbook(&self.path)?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| ConverterError::NoWorksheet {
                path: self.path.clone(),
            })?;

        let range = workbook.worksheet_range(&sheet_name)?;
        let formulas = workbook.worksheet_formula(&sheet_name)?;

        Ok(render_range(&range, &formulas))
    }
}

/// Render a worksheet range into text rows, skipping the header row.
///
/// Formula cells render their formula text, not the computed value;
/// the formula range is overlaid on the value range by absolute cell
/// position.
fn render_range(range: &Range<Data>, formulas: &Range<String>) -> Vec<Vec<String>> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };

    range
        .rows()
        .enumerate()
        .skip(1) // the sheet's own column header row
        .map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(|(c, cell)| {
                    let position = (start_row + r as u32, start_col + c as u32);
                    match formulas.get_value(position) {
                        Some(formula) if !formula.is_empty() => formula.clone(),
                        _ => render_cell(cell),
                    }
                })
                .collect()
        })
        .collect()
}

/// Render one cell as text.
///
/// Numeric and boolean cells become their textual form, date-formatted
/// cells a textual date, and blank or error cells the empty string.
fn render_cell(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|d: chrono::NaiveDateTime| d.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| dt.as_f64().to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(_) | Data::Empty => String::new(),
    }
}
