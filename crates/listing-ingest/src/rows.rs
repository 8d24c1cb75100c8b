use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, trace};

use listing_model::{CellValue, Column, RawRow};

use crate::error::{IngestError, Result};

/// Spreadsheet line of the first data row (the header is line 1).
pub const FIRST_DATA_ROW: usize = 2;

pub(crate) fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub(crate) fn open_csv(path: &Path) -> Result<csv::Reader<File>> {
    let file = File::open(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file))
}

pub(crate) fn read_headers(reader: &mut csv::Reader<File>, path: &Path) -> Result<Vec<String>> {
    let headers: Vec<String> = reader
        .headers()
        .map_err(|err| IngestError::csv(path, err))?
        .iter()
        .map(normalize_header)
        .collect();
    if headers.iter().all(String::is_empty) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    Ok(headers)
}

/// Infer a loosely-typed cell from CSV text.
///
/// - blank -> [`CellValue::Empty`]
/// - plain integer without leading zeros -> [`CellValue::Integer`]
/// - plain decimal (`12.5`) -> [`CellValue::Decimal`]
/// - anything else, including "10,000" and "007", stays text
pub fn infer_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return CellValue::Empty;
    }
    let unsigned = trimmed.strip_prefix('-').unwrap_or(trimmed);
    let all_digits = |s: &str| !s.is_empty() && s.chars().all(|ch| ch.is_ascii_digit());
    let leading_zero = unsigned.len() > 1 && unsigned.starts_with('0') && !unsigned.starts_with("0.");

    if all_digits(unsigned)
        && !leading_zero
        && let Ok(value) = trimmed.parse::<i64>()
    {
        return CellValue::Integer(value);
    }
    if let Some((int_part, frac_part)) = unsigned.split_once('.')
        && all_digits(int_part)
        && all_digits(frac_part)
        && !leading_zero
        && let Ok(value) = BigDecimal::from_str(trimmed)
    {
        return CellValue::Decimal(value);
    }
    CellValue::Text(trimmed.to_string())
}

fn to_row(index: usize, headers: &[String], record: &StringRecord) -> RawRow {
    let mut row = RawRow::new(index);
    for (header, cell) in headers.iter().zip(record.iter()) {
        if header.is_empty() {
            continue;
        }
        row.push(header.clone(), infer_cell(cell));
    }
    row
}

/// Spreadsheet line a record starts on.
///
/// The reader skips empty lines and quoted cells may span several lines, so
/// the record count alone drifts from the line number.
fn record_line(record: &StringRecord) -> Option<usize> {
    record
        .position()
        .and_then(|position| usize::try_from(position.line()).ok())
}

/// Read every non-blank data row of a CSV export.
///
/// Row indexes are spreadsheet line numbers (the start line for cells that
/// span lines); blank lines keep their number so error messages point at the
/// right line.
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>> {
    let mut reader = open_csv(path)?;
    let headers = read_headers(&mut reader, path)?;

    let recognized = headers
        .iter()
        .filter(|header| Column::from_header(header).is_some())
        .count();
    debug!(
        path = %path.display(),
        columns = headers.len(),
        recognized,
        "read CSV headers"
    );

    let mut rows = Vec::new();
    for (offset, record) in reader.records().enumerate() {
        let record = record.map_err(|err| IngestError::csv(path, err))?;
        let index = record_line(&record).unwrap_or(FIRST_DATA_ROW + offset);
        if record.iter().all(|cell| cell.trim().is_empty()) {
            trace!(row = index, "skipping blank row");
            continue;
        }
        rows.push(to_row(index, &headers, &record));
    }
    debug!(path = %path.display(), rows = rows.len(), "read rows");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_scalars() {
        assert_eq!(infer_cell("  "), CellValue::Empty);
        assert_eq!(infer_cell("12345"), CellValue::Integer(12345));
        assert_eq!(infer_cell("-3"), CellValue::Integer(-3));
        assert_eq!(infer_cell("0"), CellValue::Integer(0));
        assert_eq!(
            infer_cell("12.50"),
            CellValue::Decimal(BigDecimal::from_str("12.50").unwrap())
        );
        assert_eq!(
            infer_cell("0.5"),
            CellValue::Decimal(BigDecimal::from_str("0.5").unwrap())
        );
    }

    #[test]
    fn keeps_text_that_only_looks_numeric() {
        assert_eq!(infer_cell("10,000"), CellValue::from("10,000"));
        assert_eq!(infer_cell("007"), CellValue::from("007"));
        assert_eq!(infer_cell("1e5"), CellValue::from("1e5"));
        assert_eq!(infer_cell("99999999999999999999"), CellValue::from("99999999999999999999"));
        assert_eq!(infer_cell(" 중국 "), CellValue::from("중국"));
    }

    #[test]
    fn header_whitespace_collapses() {
        assert_eq!(normalize_header("\u{feff} 대표 이미지  URL "), "대표 이미지 URL");
    }
}
