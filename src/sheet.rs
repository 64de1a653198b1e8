//! Product name extraction from spreadsheets.
//!
//! This module handles:
//! - Picking the product name column (header alias or first column)
//! - Cleaning values: trim, drop empties, deduplicate preserving order
//! - Reading CSV files, xlsx/xls workbooks, and shared Google Sheet links

use std::collections::HashSet;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto_from_rs};
use csv::ReaderBuilder;
use thiserror::Error;

/// Header names recognized as the product name column.
/// Matched case-insensitively against trimmed header cells.
const NAME_COLUMN_ALIASES: [&str; 5] = ["name", "product name", "product", "item name", "item"];

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("Fetching sheet failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),
}

/// Extract product names from raw sheet rows.
///
/// The first row is always treated as a header and never yields a product.
/// The name column is the first header matching [`NAME_COLUMN_ALIASES`], or
/// column zero when no alias matches.
pub fn products_from_rows(rows: Vec<Vec<String>>) -> Vec<String> {
    let mut iter = rows.into_iter();
    let Some(header) = iter.next() else {
        return Vec::new();
    };
    let column = name_column(&header);

    let mut seen = HashSet::new();
    let mut products = Vec::new();
    for row in iter {
        let Some(cell) = row.get(column) else {
            continue;
        };
        let value = cell.trim();
        if value.is_empty() {
            continue;
        }
        if seen.insert(value.to_string()) {
            products.push(value.to_string());
        }
    }
    products
}

// Columns are scanned left to right; the leftmost alias match wins.
fn name_column(header: &[String]) -> usize {
    header
        .iter()
        .position(|cell| {
            let cell = cell.trim().to_ascii_lowercase();
            NAME_COLUMN_ALIASES.contains(&cell.as_str())
        })
        .unwrap_or(0)
}

/// Extract product names from CSV data.
pub fn products_from_csv<R: Read>(reader: R) -> Result<Vec<String>, SheetError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(|field| field.to_string()).collect());
    }
    Ok(products_from_rows(rows))
}

/// Extract product names from the first worksheet of an xlsx/xls workbook.
pub fn products_from_workbook(bytes: &[u8]) -> Result<Vec<String>, SheetError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let Some(sheet) = workbook.sheet_names().first().cloned() else {
        return Ok(Vec::new());
    };
    let range = workbook.worksheet_range(&sheet)?;

    let rows = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();
    Ok(products_from_rows(rows))
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Empty => String::new(),
        // Integral floats print without the trailing ".0" Excel stores them with
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        other => other.to_string(),
    }
}

/// Extract product names from an uploaded file, dispatching on its extension.
pub fn products_from_upload(filename: &str, bytes: &[u8]) -> Result<Vec<String>, SheetError> {
    match file_extension(filename).as_str() {
        "csv" => products_from_csv(bytes),
        "xlsx" | "xls" => products_from_workbook(bytes),
        _ => Err(SheetError::UnsupportedType(filename.to_string())),
    }
}

/// Load product names from a local CSV or workbook file.
pub fn load_products_from_path(path: &Path) -> Result<Vec<String>, SheetError> {
    match file_extension(&path.to_string_lossy()).as_str() {
        "csv" => products_from_csv(File::open(path)?),
        "xlsx" | "xls" => {
            let bytes = std::fs::read(path)?;
            products_from_workbook(&bytes)
        }
        _ => Err(SheetError::UnsupportedType(
            path.to_string_lossy().into_owned(),
        )),
    }
}

fn file_extension(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default()
}

/// Turn a shared Google Sheet link into its CSV export URL.
///
/// Other URLs pass through unchanged and are fetched as CSV.
pub fn rewrite_sheet_url(url: &str) -> String {
    if url.contains("docs.google.com/spreadsheets") {
        if let Some(edit) = url.find("/edit") {
            return format!("{}/export?format=csv", &url[..edit]);
        }
    }
    url.to_string()
}

/// Fetch a remote sheet and extract product names from its CSV body.
pub async fn fetch_products_from_url(url: &str) -> Result<Vec<String>, SheetError> {
    let export_url = rewrite_sheet_url(url);
    let response = reqwest::get(&export_url).await?.error_for_status()?;
    let body = response.bytes().await?;
    products_from_csv(body.as_ref())
}
