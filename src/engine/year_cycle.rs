// src/engine/year_cycle.rs
use crate::config::consts::FRAMES_PER_YEAR;
use crate::data::TyphoonWarning;

/// Highlighted-year state machine: one step per `frames_per_year` frames,
/// through the sorted distinct years, wrapping after the last.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YearCycle {
    years: Vec<u16>,
    frame: u64,
    frames_per_year: u64,
}

impl Default for YearCycle {
    fn default() -> Self {
        Self { years: Vec::new(), frame: 0, frames_per_year: FRAMES_PER_YEAR }
    }
}

impl YearCycle {
    pub fn new<I: IntoIterator<Item = u16>>(years: I, frames_per_year: u64) -> Self {
        let mut years: Vec<u16> = years.into_iter().collect();
        years.sort_unstable();
        years.dedup();
        Self { years, frame: 0, frames_per_year: frames_per_year.max(1) }
    }

    /// Years of all warnings that carry one.
    pub fn from_warnings(warnings: &[TyphoonWarning]) -> Self {
        Self::new(warnings.iter().filter_map(TyphoonWarning::year), FRAMES_PER_YEAR)
    }

    pub fn advance(&mut self) {
        self.frame += 1;
    }

    pub fn frame(&self) -> u64 { self.frame }
    pub fn years(&self) -> &[u16] { &self.years }

    pub fn index(&self) -> Option<usize> {
        if self.years.is_empty() { return None; }
        Some(((self.frame / self.frames_per_year) % self.years.len() as u64) as usize)
    }

    pub fn current(&self) -> Option<u16> {
        self.index().map(|i| self.years[i])
    }
}
