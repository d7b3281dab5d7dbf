// src/config/options.rs
use std::path::PathBuf;
use super::consts::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VariantKind {
    TidalStarburst,
    ClimateFlower,
    TyphoonStars,
}

impl VariantKind {
    pub fn label(&self) -> &'static str {
        match self {
            VariantKind::TidalStarburst => "tidal",
            VariantKind::ClimateFlower  => "climate",
            VariantKind::TyphoonStars   => "typhoon",
        }
    }
}

/// How magnitudes turn into radii on the circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LayoutMode {
    Plain,
    /// `r * (1 + amplitude * sin(2π·p·frequency + 2π·i·frequency/n))`
    Pulsing { amplitude: f64, frequency: f64 },
}

/// Fixed saturation/value pair; hue is the only thing that moves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tone {
    pub saturation: f64,
    pub value: f64,
}

/// Per-tick increments at a fixed frame rate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cadence {
    pub fps: u32,
    pub rotation_step: f64,
    pub phase_step: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiusRange {
    pub lo: f64,
    pub hi: f64,
}

/// Header names of the climate file. The published file has shipped with a
/// mangled degree sign before, so nothing here is assumed about the text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClimateColumns {
    pub label: String,
    pub temperature: String,
    pub precipitation: String,
}

impl Default for ClimateColumns {
    fn default() -> Self {
        Self {
            label: s!("Month"),
            temperature: s!("Mean Temperature (°C)"),
            precipitation: s!("Total Rainfall (mm)"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Source {
    Url(String),
    File { path: PathBuf, columns: ClimateColumns },
}

#[derive(Clone, Debug, PartialEq)]
pub struct VisualOptions {
    pub kind: VariantKind,
    pub window_title: String,
    pub width: f32,
    pub height: f32,
    pub background: [u8; 3],
    pub cadence: Cadence,
    pub tone: Tone,
    pub layout: LayoutMode,
    pub radii: RadiusRange,
    pub seed: u64,
    pub source: Source,
}

impl VisualOptions {
    pub fn for_variant(kind: VariantKind) -> Self {
        match kind {
            VariantKind::TidalStarburst => Self {
                kind,
                window_title: s!("Tidal Spiral Visualization"),
                width: 800.0,
                height: 800.0,
                background: [10, 10, 30],
                cadence: Cadence { fps: FPS, rotation_step: 0.01, phase_step: 0.003 },
                tone: Tone { saturation: 0.4, value: 1.0 },
                layout: LayoutMode::Plain,
                radii: RadiusRange { lo: 80.0, hi: 350.0 },
                seed: DEFAULT_SEED,
                source: Source::Url(s!(TIDE_URL)),
            },
            VariantKind::ClimateFlower => Self {
                kind,
                window_title: s!("Hong Kong Climate Flower"),
                width: 900.0,
                height: 900.0,
                background: [18, 12, 28],
                cadence: Cadence { fps: FPS, rotation_step: 0.009, phase_step: 0.004 },
                tone: Tone { saturation: 0.6, value: 0.95 },
                layout: LayoutMode::Pulsing { amplitude: 0.08, frequency: 3.0 },
                radii: RadiusRange { lo: 90.0, hi: 330.0 },
                seed: DEFAULT_SEED,
                source: Source::File {
                    path: PathBuf::from(CLIMATE_FILE),
                    columns: ClimateColumns::default(),
                },
            },
            VariantKind::TyphoonStars => Self {
                kind,
                window_title: s!("Historical Typhoon Warnings Generative Art"),
                width: 900.0,
                height: 900.0,
                background: [0, 0, 0],
                cadence: Cadence { fps: FPS, rotation_step: 0.008, phase_step: 0.003 },
                tone: Tone { saturation: 0.8, value: 1.0 },
                layout: LayoutMode::Plain,
                radii: RadiusRange { lo: 0.0, hi: 1.0 },
                seed: DEFAULT_SEED,
                source: Source::Url(s!(TYPHOON_URL)),
            },
        }
    }

    /// Integer-pixel center, like a window of `width // 2`.
    pub fn center(&self) -> (f64, f64) {
        ((self.width as f64 / 2.0).floor(), (self.height as f64 / 2.0).floor())
    }
}
