//! Numeric coercion for loosely-typed cells.
//!
//! Handles the formats sellers actually type into spreadsheets:
//! - Thousands separators: "10,000"
//! - Surrounding whitespace: "  5  "
//! - Decimal stock counts: "5.9" (truncated toward zero)

use std::str::FromStr;

use bigdecimal::{BigDecimal, ToPrimitive};

use listing_model::CellValue;

/// Outcome of reading a numeric cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Coerced<T> {
    /// Cell absent or blank.
    Absent,
    /// Cell parsed.
    Value(T),
    /// Cell present but unparsable; carries the trimmed raw text.
    Malformed(String),
}

impl<T> Coerced<T> {
    pub fn value(self) -> Option<T> {
        match self {
            Coerced::Value(value) => Some(value),
            Coerced::Absent | Coerced::Malformed(_) => None,
        }
    }
}

/// Parse a decimal, stripping comma thousands separators.
pub fn parse_decimal(value: &str) -> Option<BigDecimal> {
    let cleaned: String = value
        .trim()
        .chars()
        .filter(|ch| *ch != ',' && *ch != '\u{a0}')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    BigDecimal::from_str(&cleaned).ok()
}

/// Parse an integer count; fractional input is truncated toward zero.
pub fn parse_count(value: &str) -> Option<i64> {
    parse_decimal(value).and_then(|decimal| truncate(&decimal))
}

fn truncate(value: &BigDecimal) -> Option<i64> {
    value.with_scale(0).to_i64()
}

/// Read a cell as an exact decimal.
pub fn decimal_cell(cell: Option<&CellValue>) -> Coerced<BigDecimal> {
    match cell {
        None | Some(CellValue::Empty) => Coerced::Absent,
        Some(CellValue::Integer(value)) => Coerced::Value(BigDecimal::from(*value)),
        Some(CellValue::Decimal(value)) => Coerced::Value(value.clone()),
        Some(CellValue::Text(text)) => text_coerced(text, parse_decimal),
    }
}

/// Read a cell as an integer count (truncating decimals).
pub fn count_cell(cell: Option<&CellValue>) -> Coerced<i64> {
    match cell {
        None | Some(CellValue::Empty) => Coerced::Absent,
        Some(CellValue::Integer(value)) => Coerced::Value(*value),
        Some(CellValue::Decimal(value)) => match truncate(value) {
            Some(count) => Coerced::Value(count),
            None => Coerced::Malformed(value.to_string()),
        },
        Some(CellValue::Text(text)) => text_coerced(text, parse_count),
    }
}

fn text_coerced<T>(text: &str, parse: impl Fn(&str) -> Option<T>) -> Coerced<T> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Coerced::Absent;
    }
    match parse(trimmed) {
        Some(value) => Coerced::Value(value),
        None => Coerced::Malformed(trimmed.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: &str) -> BigDecimal {
        BigDecimal::from_str(value).unwrap()
    }

    #[test]
    fn test_thousands_separator() {
        assert_eq!(parse_decimal("10,000"), Some(dec("10000")));
        assert_eq!(parse_decimal("1,234.50"), Some(dec("1234.5")));
    }

    #[test]
    fn test_whitespace() {
        assert_eq!(parse_decimal("  12  "), Some(dec("12")));
        assert_eq!(parse_decimal("   "), None);
        assert_eq!(parse_decimal(","), None);
    }

    #[test]
    fn test_invalid() {
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal("12.34.56"), None);
        assert_eq!(parse_decimal("₩1000"), None);
    }

    #[test]
    fn test_count_truncates_toward_zero() {
        assert_eq!(parse_count("5.9"), Some(5));
        assert_eq!(parse_count("-1.7"), Some(-1));
        assert_eq!(parse_count("1,200"), Some(1200));
        assert_eq!(parse_count("many"), None);
    }

    #[test]
    fn test_cells() {
        assert_eq!(decimal_cell(None), Coerced::Absent);
        assert_eq!(decimal_cell(Some(&CellValue::from(" "))), Coerced::Absent);
        assert_eq!(
            decimal_cell(Some(&CellValue::Integer(300))),
            Coerced::Value(dec("300"))
        );
        assert_eq!(
            decimal_cell(Some(&CellValue::from(" free "))),
            Coerced::Malformed("free".to_string())
        );
        assert_eq!(count_cell(Some(&CellValue::Decimal(dec("7.99")))), Coerced::Value(7));
        assert_eq!(count_cell(Some(&CellValue::from("3"))).value(), Some(3));
    }
}
