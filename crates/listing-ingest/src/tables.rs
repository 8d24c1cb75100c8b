//! Lookup-table loading.
//!
//! Category tables need `path` and `id` columns (Korean `카테고리경로` /
//! `카테고리ID` also accepted); origin tables need `name` and `code`
//! (`원산지명` / `원산지코드`). Extra columns are ignored.

use std::path::Path;

use tracing::debug;

use listing_model::column::header_key;
use listing_model::{CategoryTable, OriginTable};

use crate::error::{IngestError, Result};
use crate::rows::{open_csv, read_headers};

const CATEGORY_PATH_HEADERS: &[&str] = &["path", "category path", "카테고리경로", "카테고리명"];
const CATEGORY_ID_HEADERS: &[&str] = &["id", "category id", "카테고리ID", "카테고리코드"];
const ORIGIN_NAME_HEADERS: &[&str] = &["name", "origin", "원산지명", "원산지"];
const ORIGIN_CODE_HEADERS: &[&str] = &["code", "origin code", "원산지코드"];

fn find_column(headers: &[String], accepted: &[&str], path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|header| {
            let key = header_key(header);
            accepted.iter().any(|candidate| header_key(candidate) == key)
        })
        .ok_or_else(|| IngestError::MissingColumn {
            column: accepted[0].to_string(),
            path: path.to_path_buf(),
        })
}

/// Read `(key, value)` pairs from two columns, skipping rows where either is blank.
fn read_pairs(path: &Path, keys: &[&str], values: &[&str]) -> Result<Vec<(String, String)>> {
    let mut reader = open_csv(path)?;
    let headers = read_headers(&mut reader, path)?;
    let key_idx = find_column(&headers, keys, path)?;
    let value_idx = find_column(&headers, values, path)?;

    let mut pairs = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|err| IngestError::csv(path, err))?;
        let key = record.get(key_idx).unwrap_or_default().trim();
        let value = record.get(value_idx).unwrap_or_default().trim();
        if key.is_empty() || value.is_empty() {
            continue;
        }
        pairs.push((key.to_string(), value.to_string()));
    }
    Ok(pairs)
}

/// Load a category path -> id table.
pub fn read_category_table(path: &Path) -> Result<CategoryTable> {
    let pairs = read_pairs(path, CATEGORY_PATH_HEADERS, CATEGORY_ID_HEADERS)?;
    let table = CategoryTable::from_pairs(pairs);
    debug!(path = %path.display(), categories = table.len(), "loaded category table");
    Ok(table)
}

/// Load an origin name -> code table, preserving file order.
pub fn read_origin_table(path: &Path) -> Result<OriginTable> {
    let pairs = read_pairs(path, ORIGIN_NAME_HEADERS, ORIGIN_CODE_HEADERS)?;
    let table = OriginTable::from_pairs(pairs);
    debug!(path = %path.display(), origins = table.len(), "loaded origin table");
    Ok(table)
}
