use std::path::PathBuf;
use thiserror::Error;

pub type SheetResult<T> = Result<T, SheetError>;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No item sheet found (looked for {0})")]
    SourceNotFound(PathBuf),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Excel read error: {0}")]
    Xlsx(String),

    #[error("Excel support not compiled in (rebuild with --features xlsx)")]
    XlsxUnsupported,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Row {row}: missing required field '{field}'")]
    MissingField { row: usize, field: &'static str },

    #[error("Row {row}: field '{field}' is not an integer: {value:?}")]
    InvalidInteger {
        row: usize,
        field: &'static str,
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let err = SheetError::MissingField {
            row: 4,
            field: "nome",
        };
        assert_eq!(err.to_string(), "Row 4: missing required field 'nome'");
    }

    #[test]
    fn test_invalid_integer_message() {
        let err = SheetError::InvalidInteger {
            row: 2,
            field: "width",
            value: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Row 2: field 'width' is not an integer: \"abc\""
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: SheetError = io.into();
        assert!(matches!(err, SheetError::Io(_)));
    }
}
