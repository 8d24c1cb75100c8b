//! Error taxonomy for row conversion.
//!
//! Every failure is attributable to exactly one spreadsheet row. Callers
//! aggregate across rows; nothing here is retried.

use std::fmt;

use thiserror::Error;

use crate::column::Column;

/// A required-field rule was violated for one row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Required field is absent or blank after trimming.
    #[error("row {row}: {field} is required")]
    Missing { row: usize, field: Column },

    /// Field is present but its value cannot be used.
    #[error("row {row}: invalid {field} '{value}': {reason}")]
    Invalid {
        row: usize,
        field: Column,
        value: String,
        reason: String,
    },

    /// Category path could not be mapped to a category id.
    #[error(
        "row {row}: category '{path}' could not be resolved; supply a numeric category id or a valid category path"
    )]
    CategoryNotFound { row: usize, path: String },
}

impl ValidationError {
    pub fn missing(row: usize, field: Column) -> Self {
        Self::Missing { row, field }
    }

    pub fn invalid(
        row: usize,
        field: Column,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Invalid {
            row,
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Row index the error belongs to.
    pub fn row(&self) -> usize {
        match self {
            Self::Missing { row, .. }
            | Self::Invalid { row, .. }
            | Self::CategoryNotFound { row, .. } => *row,
        }
    }

    /// Field the error refers to.
    pub fn field(&self) -> Column {
        match self {
            Self::Missing { field, .. } | Self::Invalid { field, .. } => *field,
            Self::CategoryNotFound { .. } => Column::Category,
        }
    }

    /// True for category resolution misses.
    pub fn is_resolution_miss(&self) -> bool {
        matches!(self, Self::CategoryNotFound { .. })
    }
}

/// A present value that could not be coerced; the field is treated as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoercionWarning {
    pub row: usize,
    pub field: Column,
    pub value: String,
}

impl CoercionWarning {
    pub fn new(row: usize, field: Column, value: impl Into<String>) -> Self {
        Self {
            row,
            field,
            value: value.into(),
        }
    }
}

impl fmt::Display for CoercionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {}: could not parse {} from '{}'; treating as absent",
            self.row, self.field, self.value
        )
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_cover_every_variant() {
        let missing = ValidationError::missing(4, Column::SalePrice);
        assert_eq!(missing.row(), 4);
        assert_eq!(missing.field(), Column::SalePrice);
        assert!(!missing.is_resolution_miss());

        let miss = ValidationError::CategoryNotFound {
            row: 9,
            path: "Food > Nothing".to_string(),
        };
        assert_eq!(miss.row(), 9);
        assert_eq!(miss.field(), Column::Category);
        assert!(miss.is_resolution_miss());
    }

    #[test]
    fn messages_name_row_and_field() {
        insta::assert_snapshot!(
            ValidationError::missing(2, Column::SalePrice).to_string(),
            @"row 2: sale price is required"
        );
        insta::assert_snapshot!(
            ValidationError::invalid(3, Column::SalePrice, "-5", "must be greater than zero")
                .to_string(),
            @"row 3: invalid sale price '-5': must be greater than zero"
        );
        insta::assert_snapshot!(
            ValidationError::CategoryNotFound { row: 7, path: "Toys > Robots".to_string() }
                .to_string(),
            @"row 7: category 'Toys > Robots' could not be resolved; supply a numeric category id or a valid category path"
        );
    }

    #[test]
    fn coercion_warning_display() {
        let warning = CoercionWarning::new(5, Column::DeliveryFee, "free");
        assert_eq!(
            warning.to_string(),
            "row 5: could not parse delivery fee from 'free'; treating as absent"
        );
    }
}
