//! Product listing data model.
//!
//! - **row**: loosely-typed spreadsheet rows (`RawRow`, `CellValue`)
//! - **column**: the recognized spreadsheet columns and their header aliases
//! - **enums**: closed API vocabularies (sale/display status, delivery, carrier)
//! - **request**: the normalized registration request and its blocks
//! - **options**: conversion defaults
//! - **lookup**: category and origin lookup tables
//! - **error**: validation errors and coercion warnings

pub mod column;
pub mod enums;
pub mod error;
pub mod lookup;
pub mod options;
pub mod request;
pub mod row;

pub use column::Column;
pub use enums::{Carrier, DeliveryMethod, DisplayStatus, SaleStatus, UnknownCode};
pub use error::{CoercionWarning, Result, ValidationError};
pub use lookup::{CategoryTable, OriginTable};
pub use options::ConversionOptions;
pub use request::{
    CertificationEntry, CertificationExclusion, CertificationInfo, DOMESTIC_ORIGIN_CODE,
    DeliveryInfo, IMPORT_ORIGIN_CODE, NormalizedProductRequest, OriginInfo, is_import_code,
};
pub use row::{CellValue, RawRow};
