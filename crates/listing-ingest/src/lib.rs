//! Product spreadsheet ingestion.
//!
//! Reads CSV exports of the product template into [`RawRow`]s and loads the
//! category and origin lookup tables used during conversion.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use listing_ingest::{read_rows, read_category_table};
//!
//! let rows = read_rows(Path::new("products.csv"))?;
//! let categories = read_category_table(Path::new("categories.csv"))?;
//! ```
//!
//! [`RawRow`]: listing_model::RawRow

mod error;
mod rows;
mod tables;

// === Error Types ===
pub use error::{IngestError, Result};

// === Row Reading ===
pub use rows::{FIRST_DATA_ROW, infer_cell, read_rows};

// === Lookup Tables ===
pub use tables::{read_category_table, read_origin_table};
