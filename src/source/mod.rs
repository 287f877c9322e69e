//! Item sheet sources
//!
//! Two readers implement [`SheetReader`]:
//! - [`CsvReader`]: comma-delimited UTF-8 (always available)
//! - `XlsxReader`: first worksheet of an .xlsx workbook (cargo feature `xlsx`)
//!
//! [`select_reader`] applies the precedence rule once per run: the workbook
//! wins when it exists and Excel support is compiled in, otherwise the CSV.

mod csv_reader;
#[cfg(feature = "xlsx")]
mod xlsx_reader;

pub use csv_reader::CsvReader;
#[cfg(feature = "xlsx")]
pub use xlsx_reader::XlsxReader;

use crate::error::{SheetError, SheetResult};
use crate::types::SheetTable;
use clap::ValueEnum;
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

/// Whether this build can read .xlsx workbooks
pub const XLSX_SUPPORTED: bool = cfg!(feature = "xlsx");

/// Format of the sheet a reader consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Csv,
    Xlsx,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Csv => write!(f, "CSV"),
            SourceKind::Xlsx => write!(f, "XLSX"),
        }
    }
}

/// Which source to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SourcePreference {
    /// Workbook if present and supported, else CSV
    #[default]
    Auto,
    Csv,
    Xlsx,
}

/// Reads a header row plus data rows from one file
pub trait SheetReader {
    fn kind(&self) -> SourceKind;

    fn path(&self) -> &Path;

    fn read_table(&self) -> SheetResult<SheetTable>;
}

/// Pick the reader for this run
pub fn select_reader(
    preference: SourcePreference,
    csv_path: &Path,
    xlsx_path: &Path,
) -> SheetResult<Box<dyn SheetReader>> {
    match preference {
        SourcePreference::Csv => Ok(Box::new(CsvReader::new(csv_path))),
        SourcePreference::Xlsx => {
            if !XLSX_SUPPORTED {
                return Err(SheetError::XlsxUnsupported);
            }
            if !xlsx_path.is_file() {
                return Err(SheetError::SourceNotFound(xlsx_path.to_path_buf()));
            }
            xlsx_reader(xlsx_path)
        }
        SourcePreference::Auto => {
            if XLSX_SUPPORTED && xlsx_path.is_file() {
                info!(path = %xlsx_path.display(), "using workbook source");
                return xlsx_reader(xlsx_path);
            }
            if !XLSX_SUPPORTED && xlsx_path.is_file() {
                debug!(
                    path = %xlsx_path.display(),
                    "workbook present but Excel support not compiled in"
                );
            }
            if !csv_path.is_file() {
                return Err(SheetError::SourceNotFound(csv_path.to_path_buf()));
            }
            info!(path = %csv_path.display(), "using CSV source");
            Ok(Box::new(CsvReader::new(csv_path)))
        }
    }
}

#[cfg(feature = "xlsx")]
fn xlsx_reader(path: &Path) -> SheetResult<Box<dyn SheetReader>> {
    Ok(Box::new(XlsxReader::new(path)))
}

#[cfg(not(feature = "xlsx"))]
fn xlsx_reader(_path: &Path) -> SheetResult<Box<dyn SheetReader>> {
    Err(SheetError::XlsxUnsupported)
}
