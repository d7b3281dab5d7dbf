// src/gui/scenes/starburst.rs
// Tide heights as rays from the center, spinning, hues walking around.

use eframe::egui::{self, Stroke};

use crate::{
    config::options::VisualOptions,
    data::{self, Sample},
    engine::{layout, normalize::normalize, AnimationState},
    gui::paint,
};

const RAY_WIDTH: f32 = 3.0;

pub struct StarburstScene {
    opts: VisualOptions,
    radii: Vec<f64>,
}

impl StarburstScene {
    pub fn new(opts: VisualOptions, samples: &[Sample]) -> Self {
        let radii = normalize(&data::values(samples), opts.radii.lo, opts.radii.hi);
        Self { opts, radii }
    }

    pub fn radii(&self) -> &[f64] { &self.radii }
}

impl super::Scene for StarburstScene {
    fn label(&self) -> &'static str { "Tidal starburst" }

    fn paint(&self, painter: &egui::Painter, origin: egui::Pos2, state: &AnimationState) {
        let (cx, cy) = self.opts.center();
        let center = paint::at(origin, cx, cy);
        for p in layout::layout(&self.radii, state, self.opts.layout, (cx, cy), self.opts.tone) {
            painter.line_segment(
                [center, paint::at(origin, p.x, p.y)],
                Stroke::new(RAY_WIDTH, paint::color(p.color)),
            );
        }
    }
}
