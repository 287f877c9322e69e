//! Itemsheet - spreadsheet to JSON item catalog converter
//!
//! Reads item definitions from `CSV-itens.xlsx` (when present and Excel
//! support is compiled in) or `CSV-itens.csv`, normalizes every row into a
//! fixed record shape and replaces `items.json` with the resulting array.
//!
//! # Example
//!
//! ```no_run
//! use itemsheet::config::ConvertConfig;
//! use itemsheet::converter::convert_items;
//! use itemsheet::types::Schema;
//!
//! let config = ConvertConfig::in_dir("public/data").with_schema(Schema::Base);
//! let summary = convert_items(&config)?;
//!
//! println!("Wrote {} items", summary.record_count());
//! # Ok::<(), itemsheet::error::SheetError>(())
//! ```

pub mod cli;
pub mod config;
pub mod converter;
pub mod error;
pub mod normalizer;
pub mod source;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{SheetError, SheetResult};
pub use types::{ExtendedFields, ItemRecord, Schema, SheetRow, SheetTable};
