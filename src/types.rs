use clap::ValueEnum;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

//==============================================================================
// Schema Selection
//==============================================================================

/// Target record shape written to items.json
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Schema {
    /// nome, width, height, color, img
    Base,
    /// Base fields plus maxEstresse, tipo, slot
    #[default]
    Extended,
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schema::Base => write!(f, "base"),
            Schema::Extended => write!(f, "extended"),
        }
    }
}

//==============================================================================
// Item Records
//==============================================================================

/// Default stress capacity for items whose sheet leaves `maxEstresse` blank
pub const DEFAULT_MAX_STRESS: i64 = 3;

/// One normalized item, serialized with the sheet's column names as keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRecord {
    #[serde(rename = "nome")]
    pub name: String,
    pub width: i64,
    pub height: i64,
    pub color: String,
    #[serde(rename = "img")]
    pub image_reference: String,
    /// Present only for the extended schema
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub extended: Option<ExtendedFields>,
}

/// Fields added by the extended schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtendedFields {
    #[serde(rename = "maxEstresse")]
    pub max_stress: i64,
    #[serde(rename = "tipo")]
    pub item_type: String,
    pub slot: String,
}

impl Default for ExtendedFields {
    fn default() -> Self {
        Self {
            max_stress: DEFAULT_MAX_STRESS,
            item_type: String::new(),
            slot: String::new(),
        }
    }
}

impl ItemRecord {
    /// Create a record with every optional field at its default
    pub fn new(name: impl Into<String>, schema: Schema) -> Self {
        Self {
            name: name.into(),
            width: 0,
            height: 0,
            color: String::new(),
            image_reference: String::new(),
            extended: match schema {
                Schema::Base => None,
                Schema::Extended => Some(ExtendedFields::default()),
            },
        }
    }
}

//==============================================================================
// Sheet Rows
//==============================================================================

/// One data row keyed by header name
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SheetRow {
    /// 1-based position among data rows (header excluded)
    pub number: usize,
    cells: HashMap<String, String>,
}

impl SheetRow {
    pub fn new(number: usize) -> Self {
        Self {
            number,
            cells: HashMap::new(),
        }
    }

    /// Set a cell; a repeated header keeps the last value
    pub fn insert(&mut self, header: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(header.into(), value.into());
    }

    /// Cell text as stored, or None when the column is absent or the cell is blank
    pub fn get(&self, header: &str) -> Option<&str> {
        self.cells
            .get(header)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }
}

/// Header plus data rows as read from a source
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SheetTable {
    pub headers: Vec<String>,
    pub rows: Vec<SheetRow>,
}

impl SheetTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: SheetRow) {
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_base_record_serializes_five_keys() {
        let record = ItemRecord::new("Escudo", Schema::Base);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({"nome": "Escudo", "width": 0, "height": 0, "color": "", "img": ""})
        );
    }

    #[test]
    fn test_extended_record_key_order() {
        let record = ItemRecord::new("Espada", Schema::Extended);
        let text = serde_json::to_string(&record).unwrap();
        assert_eq!(
            text,
            r#"{"nome":"Espada","width":0,"height":0,"color":"","img":"","maxEstresse":3,"tipo":"","slot":""}"#
        );
    }

    #[test]
    fn test_sheet_row_blank_is_absent() {
        let mut row = SheetRow::new(1);
        row.insert("color", "   ");
        row.insert("nome", " Arco ");
        assert_eq!(row.get("color"), None);
        assert_eq!(row.get("img"), None);
        assert_eq!(row.get("nome"), Some(" Arco "));
    }

    #[test]
    fn test_sheet_row_repeated_header_keeps_last() {
        let mut row = SheetRow::new(1);
        row.insert("color", "azul");
        row.insert("color", "verde");
        assert_eq!(row.get("color"), Some("verde"));
    }

    #[test]
    fn test_schema_default_and_display() {
        assert_eq!(Schema::default(), Schema::Extended);
        assert_eq!(Schema::Base.to_string(), "base");
        assert_eq!(Schema::Extended.to_string(), "extended");
    }
}
