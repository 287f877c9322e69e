//! Source → records → destination pipeline

use crate::config::ConvertConfig;
use crate::error::SheetResult;
use crate::normalizer::normalize_table;
use crate::source::{select_reader, SourceKind};
use crate::types::{ItemRecord, Schema};
use crate::writer::{probe_destination, write_items, PriorContent};
use std::path::PathBuf;
use tracing::info;

/// Outcome of one conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub source: PathBuf,
    pub source_kind: SourceKind,
    pub destination: PathBuf,
    pub schema: Schema,
    pub records: Vec<ItemRecord>,
    pub prior: PriorContent,
    /// False for dry runs
    pub written: bool,
}

impl ConversionSummary {
    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}

/// Read the selected sheet and overwrite the destination with its items
pub fn convert_items(config: &ConvertConfig) -> SheetResult<ConversionSummary> {
    let reader = select_reader(config.source, &config.csv_path, &config.xlsx_path)?;
    let table = reader.read_table()?;
    let records = normalize_table(&table, config.schema)?;

    let prior = if config.dry_run {
        probe_destination(&config.output_path)?
    } else {
        write_items(&config.output_path, &records)?
    };

    info!(
        source = %reader.path().display(),
        kind = %reader.kind(),
        destination = %config.output_path.display(),
        records = records.len(),
        dry_run = config.dry_run,
        "conversion finished"
    );

    Ok(ConversionSummary {
        source: reader.path().to_path_buf(),
        source_kind: reader.kind(),
        destination: config.output_path.clone(),
        schema: config.schema,
        records,
        prior,
        written: !config.dry_run,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourcePreference;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_convert_csv_base() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("CSV-itens.csv"),
            "nome,width,height,color\nEscudo,2,3,azul\n",
        )
        .unwrap();

        let config = ConvertConfig::in_dir(dir.path())
            .with_schema(Schema::Base)
            .with_source(SourcePreference::Csv);
        let summary = convert_items(&config).unwrap();

        assert_eq!(summary.record_count(), 1);
        assert_eq!(summary.source_kind, SourceKind::Csv);
        assert_eq!(summary.prior, PriorContent::Missing);
        assert!(summary.written);
        assert!(dir.path().join("items.json").exists());
    }

    #[test]
    fn test_dry_run_leaves_destination() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("CSV-itens.csv"), "nome\nArco\n").unwrap();
        fs::write(dir.path().join("items.json"), "[]").unwrap();

        let config = ConvertConfig::in_dir(dir.path()).with_dry_run(true);
        let summary = convert_items(&config).unwrap();

        assert!(!summary.written);
        assert_eq!(summary.prior, PriorContent::Valid { entries: 0 });
        assert_eq!(
            fs::read_to_string(dir.path().join("items.json")).unwrap(),
            "[]"
        );
    }

    #[test]
    fn test_bad_row_leaves_destination_untouched() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("CSV-itens.csv"), "nome,width\nArco,largo\n").unwrap();
        fs::write(dir.path().join("items.json"), "[1]").unwrap();

        let config = ConvertConfig::in_dir(dir.path());
        assert!(convert_items(&config).is_err());
        assert_eq!(
            fs::read_to_string(dir.path().join("items.json")).unwrap(),
            "[1]"
        );
    }
}
