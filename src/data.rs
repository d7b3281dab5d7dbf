// src/data.rs
//
// Plain data fetched from the sources. Immutable after loading; every
// derived value (radii, colors, positions) is recomputed from these.

use std::{error::Error, fmt};

use crate::config::options::VariantKind;

/// One (label, value) data point.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    pub label: String,
    pub value: f64,
}

impl Sample {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value }
    }
}

pub fn values(samples: &[Sample]) -> Vec<f64> {
    samples.iter().map(|s| s.value).collect()
}

/// Parallel columns of the climate file. Same length by construction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClimateTable {
    labels: Vec<String>,
    mean_temperature: Vec<f64>,
    precipitation: Vec<f64>,
}

impl ClimateTable {
    pub fn push(&mut self, label: String, temperature: f64, precipitation: f64) {
        self.labels.push(label);
        self.mean_temperature.push(temperature);
        self.precipitation.push(precipitation);
    }

    pub fn len(&self) -> usize { self.labels.len() }
    pub fn is_empty(&self) -> bool { self.labels.is_empty() }

    pub fn labels(&self) -> &[String] { &self.labels }
    pub fn mean_temperature(&self) -> &[f64] { &self.mean_temperature }
    pub fn precipitation(&self) -> &[f64] { &self.precipitation }
}

/// One row of the historical warning table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TyphoonWarning {
    pub intensity: String,
    pub name: String,
    pub signal: String,
    pub issuing: String,
    pub cancelling: String,
    pub duration: String,
}

impl TyphoonWarning {
    /// Year of the issuing time, when it starts with four digits.
    pub fn year(&self) -> Option<u16> {
        let head = self.issuing.get(..4)?;
        if !head.bytes().all(|b| b.is_ascii_digit()) { return None; }
        head.parse().ok()
    }

    /// `"No. 8"` → 8. Anything unreadable counts as signal 1.
    pub fn signal_number(&self) -> u32 {
        let cleaned: String = self.signal.replace("No.", "").split_whitespace().collect();
        cleaned.parse().unwrap_or(1)
    }

    /// Stable key for the warning's anchor position.
    pub fn anchor_key(&self) -> String {
        join!(&self.issuing, &self.name)
    }
}

/// Startup data set came back empty. Always fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyDataset {
    pub kind: VariantKind,
}

impl fmt::Display for EmptyDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            VariantKind::TidalStarburst => write!(f, "No tidal data found. Exiting."),
            VariantKind::ClimateFlower  => write!(f, "No climate data found. Exiting."),
            VariantKind::TyphoonStars   => write!(f, "No typhoon warnings found. Exiting."),
        }
    }
}

impl Error for EmptyDataset {}

#[cfg(test)]
mod tests {
    use super::*;

    fn warning(signal: &str, issuing: &str) -> TyphoonWarning {
        TyphoonWarning { signal: s!(signal), issuing: s!(issuing), ..Default::default() }
    }

    #[test]
    fn year_needs_four_leading_digits() {
        assert_eq!(warning("", "1998-06-01 10:00").year(), Some(1998));
        assert_eq!(warning("", "98-06").year(), None);
        assert_eq!(warning("", "").year(), None);
        assert_eq!(warning("", "N/A 2001").year(), None);
    }

    #[test]
    fn signal_number_fallbacks() {
        assert_eq!(warning("No. 8", "").signal_number(), 8);
        assert_eq!(warning("No.10", "").signal_number(), 10);
        assert_eq!(warning("", "").signal_number(), 1);
        assert_eq!(warning("8NE", "").signal_number(), 1);
    }

    #[test]
    fn climate_columns_stay_parallel() {
        let mut t = ClimateTable::default();
        t.push(s!("Jan"), 16.3, 33.2);
        t.push(s!("Feb"), 17.0, 43.7);
        assert_eq!(t.len(), 2);
        assert_eq!(t.mean_temperature().len(), t.precipitation().len());
        assert_eq!(t.labels()[1], "Feb");
    }
}
