// src/engine/layout.rs
use std::f64::consts::TAU;

use crate::config::options::{LayoutMode, Tone};
use super::animation::AnimationState;
use super::color::{phase_color, Rgb};

/// One sample placed on the circle for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialPoint {
    pub index: usize,
    pub angle: f64,
    pub radius: f64,
    pub x: f64,
    pub y: f64,
    pub color: Rgb,
}

/// Multiplier applied to point `index` of `count` in pulsing mode; 1 otherwise.
pub fn pulse_factor(mode: LayoutMode, phase: f64, index: usize, count: usize) -> f64 {
    match mode {
        LayoutMode::Plain => 1.0,
        LayoutMode::Pulsing { .. } if count == 0 => 1.0,
        LayoutMode::Pulsing { amplitude, frequency } => {
            let t = TAU * phase * frequency + TAU * index as f64 * frequency / count as f64;
            1.0 + amplitude * t.sin()
        }
    }
}

/// Point `i` at `θ + 2π·i/n`, radius from its magnitude, position around `center`.
pub fn layout(
    magnitudes: &[f64],
    state: &AnimationState,
    mode: LayoutMode,
    center: (f64, f64),
    tone: Tone,
) -> Vec<RadialPoint> {
    let n = magnitudes.len();
    let phase = state.color_phase();

    magnitudes
        .iter()
        .enumerate()
        .map(|(i, &m)| {
            let angle = state.rotation() + TAU * i as f64 / n as f64;
            let radius = m * pulse_factor(mode, phase, i, n);
            RadialPoint {
                index: i,
                angle,
                radius,
                x: center.0 + radius * angle.cos(),
                y: center.1 + radius * angle.sin(),
                color: phase_color(phase, i, n, tone.saturation, tone.value),
            }
        })
        .collect()
}

/// Nearest point within `tolerance` of a click, if any.
pub fn hit_test(points: &[RadialPoint], pos: (f64, f64), tolerance: f64) -> Option<usize> {
    points
        .iter()
        .map(|p| (p.index, (p.x - pos.0).hypot(p.y - pos.1)))
        .filter(|&(_, d)| d <= tolerance)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}
