//! Loosely-typed spreadsheet rows.

use bigdecimal::BigDecimal;

use crate::column::{Column, header_key};

/// A single spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Integer(i64),
    Decimal(BigDecimal),
}

impl CellValue {
    /// Trimmed textual form, `None` when absent or blank.
    pub fn text(&self) -> Option<String> {
        match self {
            CellValue::Empty => None,
            CellValue::Text(text) => {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            CellValue::Integer(value) => Some(value.to_string()),
            CellValue::Decimal(value) => Some(value.to_string()),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text().is_none()
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<BigDecimal> for CellValue {
    fn from(value: BigDecimal) -> Self {
        CellValue::Decimal(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Empty, Into::into)
    }
}

/// One input row: ordered `(header label, cell)` pairs plus the row index
/// used in error messages.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawRow {
    index: usize,
    cells: Vec<(String, CellValue)>,
}

impl RawRow {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            cells: Vec::new(),
        }
    }

    /// Builder-style [`RawRow::push`].
    #[must_use]
    pub fn with(mut self, label: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.push(label, value);
        self
    }

    pub fn push(&mut self, label: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.push((label.into(), value.into()));
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn cells(&self) -> &[(String, CellValue)] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell stored under an exact header label (case/space-insensitive).
    pub fn get(&self, label: &str) -> Option<&CellValue> {
        let key = header_key(label);
        self.cells
            .iter()
            .find(|(header, _)| header_key(header) == key)
            .map(|(_, value)| value)
    }

    /// Cell for a logical column.
    ///
    /// When several headers map to the same column, the first non-blank one
    /// wins; otherwise the first matching cell is returned.
    pub fn value(&self, column: Column) -> Option<&CellValue> {
        let mut matching = self
            .cells
            .iter()
            .filter(|(header, _)| Column::from_header(header) == Some(column))
            .map(|(_, value)| value)
            .peekable();
        let first = *matching.peek()?;
        Some(matching.find(|value| !value.is_blank()).unwrap_or(first))
    }

    /// Trimmed text for a logical column, `None` when absent or blank.
    pub fn text(&self, column: Column) -> Option<String> {
        self.value(column).and_then(CellValue::text)
    }
}
