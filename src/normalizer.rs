//! Row normalization - sheet rows → item records
//!
//! Looks up each target field by header name and applies the fixed coercions:
//! `nome` is required, numeric fields must be integers when present, and every
//! other field falls back to its default.

use crate::error::{SheetError, SheetResult};
use crate::types::{ExtendedFields, ItemRecord, Schema, SheetRow, SheetTable, DEFAULT_MAX_STRESS};

/// Column names as they appear in the sheet header
pub mod columns {
    pub const NAME: &str = "nome";
    pub const WIDTH: &str = "width";
    pub const HEIGHT: &str = "height";
    pub const COLOR: &str = "color";
    pub const IMAGE: &str = "img";
    pub const MAX_STRESS: &str = "maxEstresse";
    pub const TYPE: &str = "tipo";
    pub const SLOT: &str = "slot";
}

/// Normalize every data row, preserving sheet order
pub fn normalize_table(table: &SheetTable, schema: Schema) -> SheetResult<Vec<ItemRecord>> {
    table
        .rows
        .iter()
        .map(|row| normalize_row(row, schema))
        .collect()
}

/// Normalize a single row into a record of the given schema
pub fn normalize_row(row: &SheetRow, schema: Schema) -> SheetResult<ItemRecord> {
    let name = row.get(columns::NAME).ok_or(SheetError::MissingField {
        row: row.number,
        field: columns::NAME,
    })?;

    let extended = match schema {
        Schema::Base => None,
        Schema::Extended => Some(ExtendedFields {
            max_stress: integer_or(row, columns::MAX_STRESS, DEFAULT_MAX_STRESS)?,
            item_type: text_or_empty(row, columns::TYPE),
            slot: text_or_empty(row, columns::SLOT),
        }),
    };

    Ok(ItemRecord {
        name: name.to_string(),
        width: integer_or(row, columns::WIDTH, 0)?,
        height: integer_or(row, columns::HEIGHT, 0)?,
        color: text_or_empty(row, columns::COLOR),
        image_reference: text_or_empty(row, columns::IMAGE),
        extended,
    })
}

fn text_or_empty(row: &SheetRow, field: &str) -> String {
    row.get(field).unwrap_or_default().to_string()
}

fn integer_or(row: &SheetRow, field: &'static str, default: i64) -> SheetResult<i64> {
    match row.get(field).map(str::trim) {
        None => Ok(default),
        Some(raw) => raw.parse::<i64>().map_err(|_| SheetError::InvalidInteger {
            row: row.number,
            field,
            value: raw.to_string(),
        }),
    }
}
