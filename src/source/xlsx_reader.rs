//! Excel item sheet reader - first worksheet, first row as header

use crate::error::{SheetError, SheetResult};
use crate::source::{SheetReader, SourceKind};
use crate::types::{SheetRow, SheetTable};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads item rows from an .xlsx workbook
pub struct XlsxReader {
    path: PathBuf,
}

impl XlsxReader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Convert a worksheet range to a table
    fn process_range(&self, range: &Range<Data>) -> SheetResult<SheetTable> {
        let mut rows = range.rows();

        let headers: Vec<String> = match rows.next() {
            Some(header_row) => header_row
                .iter()
                .enumerate()
                .map(|(col, cell)| {
                    Self::cell_text(cell)
                        .map(|s| s.trim().to_string())
                        .unwrap_or_else(|| format!("col_{}", col))
                })
                .collect(),
            None => return Ok(SheetTable::default()), // Empty sheet
        };

        let mut table = SheetTable::new(headers);
        let mut number = 0;
        for cells in rows {
            if cells.iter().all(|cell| matches!(cell, Data::Empty)) {
                continue;
            }
            number += 1;

            let mut row = SheetRow::new(number);
            for (header, cell) in table.headers.iter().zip(cells.iter()) {
                if let Data::Error(e) = cell {
                    return Err(SheetError::Xlsx(format!(
                        "row {}, column '{}': cell error {:?}",
                        number, header, e
                    )));
                }
                if let Some(text) = Self::cell_text(cell) {
                    row.insert(header.clone(), text);
                }
            }
            table.add_row(row);
        }

        Ok(table)
    }

    /// Text form of a cell, None for empty cells
    fn cell_text(cell: &Data) -> Option<String> {
        match cell {
            Data::Empty => None,
            Data::String(s) => Some(s.clone()),
            Data::Int(i) => Some(i.to_string()),
            Data::Float(f) => Some(Self::format_float(*f)),
            Data::Bool(b) => Some(b.to_string()),
            other => Some(other.to_string()),
        }
    }

    /// Whole-valued floats render as integers (Excel stores 2 as 2.0)
    fn format_float(f: f64) -> String {
        if f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e15 {
            (f as i64).to_string()
        } else {
            f.to_string()
        }
    }
}

impl SheetReader for XlsxReader {
    fn kind(&self) -> SourceKind {
        SourceKind::Xlsx
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> SheetResult<SheetTable> {
        let mut workbook: Xlsx<_> = open_workbook(&self.path)
            .map_err(|e| SheetError::Xlsx(format!("Failed to open Excel file: {}", e)))?;

        let sheet_name = match workbook.sheet_names().first().cloned() {
            Some(name) => name,
            None => return Ok(SheetTable::default()),
        };

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| SheetError::Xlsx(format!("Failed to read sheet '{}': {}", sheet_name, e)))?;

        let table = self.process_range(&range)?;
        debug!(
            path = %self.path.display(),
            sheet = %sheet_name,
            columns = table.headers.len(),
            rows = table.row_count(),
            "read Excel sheet"
        );
        Ok(table)
    }
}
