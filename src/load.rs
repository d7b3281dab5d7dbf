// src/load.rs
//
// The one blocking step of every run: pull the variant's data before the
// window opens. Anything empty comes back as `EmptyDataset`, which the
// binaries treat as fatal.

use std::error::Error;

use crate::{
    config::options::{Source, VariantKind, VisualOptions},
    data::{ClimateTable, EmptyDataset, Sample, TyphoonWarning},
    progress::Progress,
    specs,
};

/// Everything a scene needs, by variant.
#[derive(Clone, Debug)]
pub enum Dataset {
    Tides(Vec<Sample>),
    Climate(ClimateTable),
    Typhoon(Vec<TyphoonWarning>),
}

impl Dataset {
    pub fn kind(&self) -> VariantKind {
        match self {
            Dataset::Tides(_)   => VariantKind::TidalStarburst,
            Dataset::Climate(_) => VariantKind::ClimateFlower,
            Dataset::Typhoon(_) => VariantKind::TyphoonStars,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Dataset::Tides(v)   => v.len(),
            Dataset::Climate(t) => t.len(),
            Dataset::Typhoon(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

pub fn collect(
    opts: &VisualOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Dataset, Box<dyn Error>> {
    let kind = opts.kind;
    if let Some(p) = progress.as_deref_mut() {
        p.begin(what(kind));
    }
    logf!("Load: Begin {:?}", kind);

    let ds = match (kind, &opts.source) {
        (VariantKind::TidalStarburst, Source::Url(url)) => Dataset::Tides(specs::tides::fetch(url)?),
        (VariantKind::TyphoonStars, Source::Url(url))   => Dataset::Typhoon(specs::typhoon::fetch(url)?),
        (VariantKind::ClimateFlower, Source::File { path, columns }) => {
            Dataset::Climate(specs::climate::load(path, columns)?)
        }
        (kind, source) => {
            return Err(format!("No reader for {:?} from {:?}", kind, source).into());
        }
    };

    ensure_not_empty(ds, progress)
}

/// Empty is fatal; everything else passes through untouched.
pub fn ensure_not_empty(
    ds: Dataset,
    progress: Option<&mut dyn Progress>,
) -> Result<Dataset, Box<dyn Error>> {
    if ds.is_empty() {
        loge!("Load: {:?} returned no records", ds.kind());
        return Err(Box::new(EmptyDataset { kind: ds.kind() }));
    }
    logf!("Load: {:?} ok, records={}", ds.kind(), ds.len());
    if let Some(p) = progress {
        p.finish(ds.len());
    }
    Ok(ds)
}

fn what(kind: VariantKind) -> &'static str {
    match kind {
        VariantKind::TidalStarburst => "tidal data",
        VariantKind::ClimateFlower  => "climate data",
        VariantKind::TyphoonStars   => "typhoon warning data",
    }
}
