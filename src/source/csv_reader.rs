//! CSV item sheet reader

use crate::error::SheetResult;
use crate::source::{SheetReader, SourceKind};
use crate::types::{SheetRow, SheetTable};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads a comma-delimited UTF-8 sheet with a header row
pub struct CsvReader {
    path: PathBuf,
}

impl CsvReader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Parse an already-open CSV stream
    pub fn parse<R: Read>(input: R) -> SheetResult<SheetTable> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(input);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .enumerate()
            .map(|(idx, h)| {
                let h = if idx == 0 { h.trim_start_matches('\u{feff}') } else { h };
                h.trim().to_string()
            })
            .collect();

        let mut table = SheetTable::new(headers);
        for (idx, result) in reader.records().enumerate() {
            let record = result?;
            let mut row = SheetRow::new(idx + 1);
            // Short rows leave trailing columns absent; extra cells have no header
            for (header, value) in table.headers.iter().zip(record.iter()) {
                row.insert(header.clone(), value);
            }
            table.add_row(row);
        }

        Ok(table)
    }
}

impl SheetReader for CsvReader {
    fn kind(&self) -> SourceKind {
        SourceKind::Csv
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> SheetResult<SheetTable> {
        let file = File::open(&self.path)?;
        let table = Self::parse(BufReader::new(file))?;
        debug!(
            path = %self.path.display(),
            columns = table.headers.len(),
            rows = table.row_count(),
            "read CSV sheet"
        );
        Ok(table)
    }
}
