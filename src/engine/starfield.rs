// src/engine/starfield.rs
//
// Seeded placement of decorative stars and warning anchors, plus the
// per-frame twinkle/orbit helpers they share.

use std::collections::HashMap;
use std::f64::consts::TAU;

use rand::Rng;

use crate::data::TyphoonWarning;

/// Drawable area with an inset margin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl Bounds {
    fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> (f64, f64) {
        let m = self.margin as i64;
        let x = rng.random_range(m..=(self.width as i64 - m).max(m));
        let y = rng.random_range(m..=(self.height as i64 - m).max(m));
        (x as f64, y as f64)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub size: u32,
    pub phase: f64,
}

pub fn scatter<R: Rng + ?Sized>(rng: &mut R, count: usize, bounds: Bounds) -> Vec<Star> {
    (0..count)
        .map(|_| {
            let (x, y) = bounds.pick(rng);
            Star { x, y, size: rng.random_range(2..=4), phase: rng.random_range(0.0..TAU) }
        })
        .collect()
}

/// One fixed position per warning key. A repeated key keeps its last draw.
pub fn anchors<R: Rng + ?Sized>(
    rng: &mut R,
    warnings: &[TyphoonWarning],
    bounds: Bounds,
) -> HashMap<String, (f64, f64)> {
    let mut out = HashMap::with_capacity(warnings.len());
    for w in warnings {
        out.insert(w.anchor_key(), bounds.pick(rng));
    }
    out
}

/// Brightness in `[0.4, 1.0]`.
pub fn twinkle(frame: u64, phase: f64) -> f64 {
    0.7 + 0.3 * (frame as f64 * 0.04 + phase).rem_euclid(TAU).sin()
}

/// Small circular drift around `base`, snapped to whole pixels.
pub fn orbit(base: (f64, f64), radius: f64, frame: u64, index: usize) -> (f64, f64) {
    let angle = (frame as f64 * 0.01 + index as f64 * 0.5).rem_euclid(TAU);
    (
        (base.0 + radius * angle.cos()).trunc(),
        (base.1 + radius * angle.sin()).trunc(),
    )
}
