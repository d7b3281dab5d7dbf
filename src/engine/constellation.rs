// src/engine/constellation.rs
//
// Typhoon sky. All per-run state (background stars, warning anchors, year
// cycle) sits in one `SkyState` built up front from a seed; `update` takes
// it and hands back the next frame's state.

use std::collections::HashMap;

use rand::{rngs::StdRng, SeedableRng};

use crate::config::consts::{BG_STARS, STAR_MARGIN, WARNING_MARGIN};
use crate::data::TyphoonWarning;
use super::color::{hsv_to_rgb, hue, Rgb};
use super::starfield::{self, Bounds, Star};
use super::year_cycle::YearCycle;

pub const STAR_COLOR: Rgb = Rgb::new(220, 220, 255);
const FADE: f64 = 0.18;
const WARNING_SAT: f64 = 0.8;

/// A diamond with a soft glow, ready to paint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glyph {
    pub x: f64,
    pub y: f64,
    pub base_radius: f64,
    pub glow_radius: f64,
    pub color: Rgb,
    pub twinkle: f64,
}

impl Glyph {
    /// Glow rings from the outside in, stepping 2px, as `(radius, alpha)`.
    /// `peak` is the alpha a ring right at the core would get.
    pub fn glow_rings(&self, peak: f64) -> Vec<(f64, u8)> {
        let span = self.glow_radius - self.base_radius;
        let mut out = Vec::new();
        let mut r = self.glow_radius;
        while r > self.base_radius {
            let a = peak * self.twinkle * (1.0 - (r - self.base_radius) / span);
            out.push((r, a.clamp(0.0, 255.0) as u8));
            r -= 2.0;
        }
        out
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WarningGlyph {
    pub glyph: Glyph,
    pub highlighted: bool,
}

#[derive(Clone, Debug, Default)]
pub struct SkyState {
    stars: Vec<Star>,
    anchors: HashMap<String, (f64, f64)>,
    cycle: YearCycle,
}

impl SkyState {
    pub fn new(warnings: &[TyphoonWarning], width: f64, height: f64, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let stars = starfield::scatter(&mut rng, BG_STARS, Bounds { width, height, margin: STAR_MARGIN });
        let anchors = starfield::anchors(&mut rng, warnings, Bounds { width, height, margin: WARNING_MARGIN });
        Self { stars, anchors, cycle: YearCycle::from_warnings(warnings) }
    }

    /// Next frame's state.
    pub fn update(mut self) -> Self {
        self.cycle.advance();
        self
    }

    pub fn frame(&self) -> u64 { self.cycle.frame() }
    pub fn cycle(&self) -> &YearCycle { &self.cycle }
    pub fn current_year(&self) -> Option<u16> { self.cycle.current() }
    pub fn stars(&self) -> &[Star] { &self.stars }

    pub fn background(&self) -> Vec<Glyph> {
        let frame = self.frame();
        self.stars
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let tw = starfield::twinkle(frame, s.phase);
                let (x, y) = starfield::orbit((s.x, s.y), 6.0, frame, i);
                let base = (s.size as f64 * tw).trunc();
                Glyph {
                    x, y,
                    base_radius: base,
                    glow_radius: base + (8.0 * tw).trunc(),
                    color: STAR_COLOR,
                    twinkle: tw,
                }
            })
            .collect()
    }

    pub fn warnings(&self, warnings: &[TyphoonWarning], color_phase: f64) -> Vec<WarningGlyph> {
        let frame = self.frame();
        let n = warnings.len();
        let current = self.current_year();

        warnings
            .iter()
            .enumerate()
            .map(|(i, w)| {
                let sig = w.signal_number() as f64;
                let tw = starfield::twinkle(frame, i as f64 * 0.7);
                let anchor = self.anchors.get(&w.anchor_key()).copied().unwrap_or((0.0, 0.0));
                let (x, y) = starfield::orbit(anchor, 8.0 + sig * 2.0, frame, i);
                let base = ((2.0 + (10.0 - sig * 2.0).max(1.0)) * tw).trunc();
                let h = hue(color_phase + sig * 0.1, i, n);
                let highlighted = current.is_some() && w.year() == current;
                let color = hsv_to_rgb(h, WARNING_SAT, tw);
                WarningGlyph {
                    glyph: Glyph {
                        x, y,
                        base_radius: base,
                        glow_radius: base + (10.0 * tw).trunc(),
                        color: if highlighted { color } else { color.scaled(FADE) },
                        twinkle: tw,
                    },
                    highlighted,
                }
            })
            .collect()
    }
}
