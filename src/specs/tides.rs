// src/specs/tides.rs
//! Tide heights from the first table of the HKO tide page.
//! Columns: time, height (m). First row is the header.

use std::error::Error;

use crate::core::{html, net};
use crate::data::Sample;

pub fn fetch(url: &str) -> Result<Vec<Sample>, Box<dyn Error>> {
    let doc = net::http_get(url)?;
    let t = std::time::Instant::now();
    let out = parse_doc(&doc);
    logd!("Tides: Parse {} rows in {:?}", out.len(), t.elapsed());
    Ok(out)
}

/// Split out for unit tests.
pub fn parse_doc(doc: &str) -> Vec<Sample> {
    let Some(rows) = html::first_table_rows(doc) else {
        logd!("Tides: No table in document");
        return Vec::new();
    };
    parse_rows(rows.into_iter().skip(1))
}

/// `(label, value)` from each row's first two cells; rows whose value is not
/// a finite float are dropped.
pub fn parse_rows<I>(rows: I) -> Vec<Sample>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut out = Vec::new();
    for row in rows {
        if row.len() < 2 { continue; }
        match row[1].trim().parse::<f64>() {
            Ok(v) if v.is_finite() => out.push(Sample::new(row[0].trim(), v)),
            _ => logd!("Tides: Skip row {:?}", row),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_skipped_and_short_rows_ignored() {
        let doc = r#"
            <html><body>
              <table class="tide">
                <tr><th>Time</th><th>Height (m)</th></tr>
                <tr><td>03:12</td><td>2.1</td></tr>
                <tr><td colspan=2>Remarks</td></tr>
                <tr><td>09:40</td><td> 0.6 </td></tr>
              </table>
            </body></html>
        "#;
        let out = parse_doc(doc);
        assert_eq!(out, vec![Sample::new("03:12", 2.1), Sample::new("09:40", 0.6)]);
    }

    #[test]
    fn first_row_is_skipped_even_with_td_cells() {
        let doc = "<table><tr><td>Time</td><td>1.0</td></tr><tr><td>a</td><td>2.0</td></tr></table>";
        assert_eq!(parse_doc(doc), vec![Sample::new("a", 2.0)]);
    }

    #[test]
    fn inf_and_nan_cells_are_dropped() {
        let rows = ["1.5", "inf", "NaN", "2.5"]
            .iter()
            .enumerate()
            .map(|(i, v)| vec![format!("{i:02}:00"), s!(*v)]);
        let out = parse_rows(rows);
        assert_eq!(crate::data::values(&out), vec![1.5, 2.5]);
    }

    #[test]
    fn no_table_means_no_samples() {
        assert!(parse_doc("<html><p>maintenance</p></html>").is_empty());
    }
}
