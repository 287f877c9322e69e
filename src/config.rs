//! Resolved run configuration

use crate::source::SourcePreference;
use crate::types::Schema;
use std::path::{Path, PathBuf};

pub const DEFAULT_CSV_FILE: &str = "CSV-itens.csv";
pub const DEFAULT_XLSX_FILE: &str = "CSV-itens.xlsx";
pub const DEFAULT_OUTPUT_FILE: &str = "items.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub csv_path: PathBuf,
    pub xlsx_path: PathBuf,
    pub output_path: PathBuf,
    pub schema: Schema,
    pub source: SourcePreference,
    /// Skip the write; the caller prints the document instead
    pub dry_run: bool,
}

impl ConvertConfig {
    /// Default file names inside `dir`
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            csv_path: dir.join(DEFAULT_CSV_FILE),
            xlsx_path: dir.join(DEFAULT_XLSX_FILE),
            output_path: dir.join(DEFAULT_OUTPUT_FILE),
            schema: Schema::default(),
            source: SourcePreference::default(),
            dry_run: false,
        }
    }

    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = schema;
        self
    }

    pub fn with_source(mut self, source: SourcePreference) -> Self {
        self.source = source;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
