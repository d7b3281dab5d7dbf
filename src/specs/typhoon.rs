// src/specs/typhoon.rs
//! Historical tropical cyclone warning signals.
//!
//! Columns of the result table, in order:
//! intensity, name, signal, issuing time, cancelling time, duration.
//! Extra trailing columns are ignored; rows with fewer than six are skipped.

use std::error::Error;

use crate::core::{html, net};
use crate::data::TyphoonWarning;

const MIN_COLS: usize = 6;

pub fn fetch(url: &str) -> Result<Vec<TyphoonWarning>, Box<dyn Error>> {
    let doc = net::http_get(url)?;
    let out = parse_doc(&doc);
    logf!("Typhoon: Parsed {} warnings from HTML table", out.len());
    Ok(out)
}

/// Split out for unit tests.
pub fn parse_doc(doc: &str) -> Vec<TyphoonWarning> {
    let Some(table) = html::TagBlocks::new(doc, "table").next() else {
        loge!("Typhoon: No table found in HTML");
        return Vec::new();
    };

    let mut trs = html::TagBlocks::new(table, "tr");
    if let Some(head) = trs.next() {
        logd!("Typhoon: Header {:?}", html::header_cells(head));
    }

    trs.filter_map(|tr| {
        let cols: Vec<String> = html::TagBlocks::new(tr, "td").map(html::cell_text).collect();
        warning_from_cols(cols)
    })
    .collect()
}

fn warning_from_cols(mut cols: Vec<String>) -> Option<TyphoonWarning> {
    if cols.len() < MIN_COLS { return None; }
    cols.truncate(MIN_COLS);
    let mut it = cols.into_iter();
    Some(TyphoonWarning {
        intensity:  it.next()?,
        name:       it.next()?,
        signal:     it.next()?,
        issuing:    it.next()?,
        cancelling: it.next()?,
        duration:   it.next()?,
    })
}
