// src/cli.rs
//
// Headless dump: load every variant's source and print the samples next to
// the magnitudes they would be drawn with.

use std::error::Error;

use crate::{
    config::options::{VariantKind, VisualOptions},
    data,
    engine::normalize::normalize,
    load::{self, Dataset},
    progress::{ConsoleProgress, Progress},
};

pub const ALL: [VariantKind; 3] = [
    VariantKind::TidalStarburst,
    VariantKind::ClimateFlower,
    VariantKind::TyphoonStars,
];

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut progress = ConsoleProgress;
    for kind in ALL {
        let opts = VisualOptions::for_variant(kind);
        let data = load::collect(&opts, Some(&mut progress))?;
        report(&mut progress, &opts, &data);
    }
    Ok(())
}

/// Header plus one line per record, through the progress sink.
pub fn report(progress: &mut dyn Progress, opts: &VisualOptions, data: &Dataset) {
    progress.log(&format!("== {} ==", opts.kind.label()));
    for line in render(opts, data) {
        progress.log(&line);
    }
}

/// One printable line per record.
pub fn render(opts: &VisualOptions, data: &Dataset) -> Vec<String> {
    let (lo, hi) = (opts.radii.lo, opts.radii.hi);
    match data {
        Dataset::Tides(samples) => {
            samples
                .iter()
                .zip(normalize(&data::values(samples), lo, hi))
                .map(|(s, m)| format!("{:<12} {:>8.2} -> {:>7.1}", s.label, s.value, m))
                .collect()
        }
        Dataset::Climate(table) => {
            let petals = normalize(table.mean_temperature(), lo, hi);
            (0..table.len())
                .map(|i| format!(
                    "{:<12} {:>6.1} °C {:>7.1} mm -> {:>7.1}",
                    table.labels()[i],
                    table.mean_temperature()[i],
                    table.precipitation()[i],
                    petals[i],
                ))
                .collect()
        }
        Dataset::Typhoon(warnings) => warnings
            .iter()
            .map(|w| {
                let year = w.year().map(|y| y.to_string()).unwrap_or_else(|| s!("----"));
                format!("{year} | {} | {} | {} | {}", w.name, w.signal, w.issuing, w.duration)
            })
            .collect(),
    }
}
