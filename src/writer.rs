use crate::error::SheetResult;
use crate::types::ItemRecord;
use serde_json::Value;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

/// What the destination held before this run overwrote it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriorContent {
    /// No file at the destination path
    Missing,
    /// Parsed as JSON; `entries` is the array length (1 for a non-array document)
    Valid { entries: usize },
    /// Present but not JSON, treated as empty
    Malformed,
}

impl fmt::Display for PriorContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriorContent::Missing => write!(f, "none"),
            PriorContent::Valid { entries } => write!(f, "{} entries (replaced)", entries),
            PriorContent::Malformed => write!(f, "malformed (replaced)"),
        }
    }
}

/// Load the destination to check it, then discard it
pub fn probe_destination(path: &Path) -> SheetResult<PriorContent> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(PriorContent::Missing),
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            warn!(path = %path.display(), "existing file is not UTF-8, treating as empty");
            return Ok(PriorContent::Malformed);
        }
        Err(e) => return Err(e.into()),
    };

    match serde_json::from_str::<Value>(&content) {
        Ok(Value::Array(items)) => Ok(PriorContent::Valid {
            entries: items.len(),
        }),
        Ok(_) => Ok(PriorContent::Valid { entries: 1 }),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "existing JSON is malformed, treating as empty");
            Ok(PriorContent::Malformed)
        }
    }
}

/// Pretty JSON document for the records (2-space indent, non-ASCII kept literal)
pub fn render_items(records: &[ItemRecord]) -> SheetResult<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Replace the destination with the full record array
pub fn write_items(path: &Path, records: &[ItemRecord]) -> SheetResult<PriorContent> {
    let prior = probe_destination(path)?;
    let document = render_items(records)?;
    fs::write(path, document)?;
    debug!(path = %path.display(), records = records.len(), prior = %prior, "wrote items");
    Ok(prior)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Schema;
    use tempfile::{NamedTempFile, TempDir};

    fn sample() -> Vec<ItemRecord> {
        let mut escudo = ItemRecord::new("Escudo", Schema::Base);
        escudo.width = 2;
        escudo.height = 3;
        escudo.color = "azul".to_string();
        vec![escudo]
    }

    #[test]
    fn test_render_two_space_indent() {
        let text = render_items(&sample()).unwrap();
        let expected = "[\n  {\n    \"nome\": \"Escudo\",\n    \"width\": 2,\n    \"height\": 3,\n    \"color\": \"azul\",\n    \"img\": \"\"\n  }\n]";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_keeps_non_ascii() {
        let records = vec![ItemRecord::new("Poção de Cura", Schema::Base)];
        let text = render_items(&records).unwrap();
        assert!(text.contains("\"Poção de Cura\""));
        assert!(!text.contains("\\u"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_items(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_probe_missing() {
        let dir = TempDir::new().unwrap();
        let prior = probe_destination(&dir.path().join("items.json")).unwrap();
        assert_eq!(prior, PriorContent::Missing);
    }

    #[test]
    fn test_probe_valid_array() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), r#"[{"a": 1}, {"b": 2}]"#).unwrap();
        assert_eq!(
            probe_destination(file.path()).unwrap(),
            PriorContent::Valid { entries: 2 }
        );
    }

    #[test]
    fn test_probe_malformed() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "[{ not json").unwrap();
        assert_eq!(
            probe_destination(file.path()).unwrap(),
            PriorContent::Malformed
        );
    }

    #[test]
    fn test_write_replaces_previous_array() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), r#"[{"nome": "Velho"}, {"nome": "Antigo"}]"#).unwrap();

        let prior = write_items(file.path(), &sample()).unwrap();
        assert_eq!(prior, PriorContent::Valid { entries: 2 });

        let written: Value = serde_json::from_str(&fs::read_to_string(file.path()).unwrap()).unwrap();
        let items = written.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["nome"], "Escudo");
    }

    #[test]
    fn test_write_over_malformed() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "garbage").unwrap();

        let prior = write_items(file.path(), &sample()).unwrap();
        assert_eq!(prior, PriorContent::Malformed);
        assert_eq!(
            fs::read_to_string(file.path()).unwrap(),
            render_items(&sample()).unwrap()
        );
    }
}
