// src/specs/climate.rs
//! Monthly climate normals from a local spreadsheet export.
//!
//! - `;`-delimited, first row is the header.
//! - Numbers use a decimal comma (`16,3`).
//! - Column names come from `ClimateColumns`; matching ignores case,
//!   surrounding whitespace, a BOM, and the `Â°` mis-encoding of `°`.

use std::{error::Error, fs, path::Path};

use crate::config::{consts::CLIMATE_SEP, options::ClimateColumns};
use crate::core::sanitize::{header_key, parse_decimal};
use crate::csv::parse_rows;
use crate::data::ClimateTable;

/// Read and parse the file. A missing file is an error, not an empty table.
pub fn load(path: &Path, columns: &ClimateColumns) -> Result<ClimateTable, Box<dyn Error>> {
    let bytes = fs::read(path)
        .map_err(|e| format!("Cannot read climate file {}: {}", path.display(), e))?;
    let text = String::from_utf8_lossy(&bytes);
    let table = parse_table(&text, columns)?;
    logf!("Climate: Loaded {} rows from {}", table.len(), path.display());
    Ok(table)
}

/// Split out for unit tests.
pub fn parse_table(text: &str, columns: &ClimateColumns) -> Result<ClimateTable, Box<dyn Error>> {
    let mut rows = parse_rows(text, CLIMATE_SEP).into_iter();
    let header = rows.next().ok_or("Climate file is empty")?;

    let label_ix = column_index(&header, &columns.label)?;
    let temp_ix = column_index(&header, &columns.temperature)?;
    let precip_ix = column_index(&header, &columns.precipitation)?;

    let mut table = ClimateTable::default();
    for row in rows {
        let cell = |ix: usize| row.get(ix).map(String::as_str);
        let parsed = (
            cell(label_ix).map(str::trim).filter(|s| !s.is_empty()),
            cell(temp_ix).and_then(parse_decimal),
            cell(precip_ix).and_then(parse_decimal),
        );
        match parsed {
            (Some(label), Some(t), Some(p)) => table.push(s!(label), t, p),
            _ => logd!("Climate: Skip row {:?}", row),
        }
    }
    Ok(table)
}

fn column_index(header: &[String], name: &str) -> Result<usize, Box<dyn Error>> {
    let want = header_key(name);
    header
        .iter()
        .position(|h| header_key(h) == want)
        .ok_or_else(|| format!("Climate file has no column {:?} (found {:?})", name, header).into())
}
