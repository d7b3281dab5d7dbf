// src/gui/scenes/typhoon.rs
//
// Historical typhoon warnings as a twinkling sky. One year at a time is lit
// up; the rest fade into the background stars.

use eframe::egui::{self, Align2, Color32, FontId};

use crate::{
    config::options::VisualOptions,
    data::TyphoonWarning,
    engine::{constellation::SkyState, AnimationState},
    gui::paint,
};

const TITLE: &str = "Historical Typhoon Warnings in Hong Kong (1998-2025)";
const NO_DATA: &str = "No valid typhoon warning data found.";

const STAR_GLOW: f64 = 40.0;
const LIT_GLOW: f64 = 80.0;
const FADED_GLOW: f64 = 30.0;

pub struct TyphoonScene {
    opts: VisualOptions,
    warnings: Vec<TyphoonWarning>,
    sky: SkyState,
}

impl TyphoonScene {
    pub fn new(opts: VisualOptions, warnings: Vec<TyphoonWarning>) -> Self {
        let sky = SkyState::new(&warnings, opts.width as f64, opts.height as f64, opts.seed);
        logd!("Typhoon: {} warnings over {} years", warnings.len(), sky.cycle().years().len());
        Self { opts, warnings, sky }
    }

    pub fn sky(&self) -> &SkyState { &self.sky }

    /// Text over the sky, top to bottom. The title is always there.
    pub fn captions(&self) -> Vec<Caption> {
        let mut out = vec![Caption {
            text: s!(TITLE),
            y: 40.0,
            size: 32.0,
            color: Color32::from_rgb(255, 230, 120),
        }];
        match self.sky.current_year() {
            Some(year) => out.push(Caption {
                text: format!("Year: {year}"),
                y: 80.0,
                size: 28.0,
                color: Color32::from_rgb(200, 220, 255),
            }),
            None => out.push(Caption {
                text: s!(NO_DATA),
                y: self.opts.height as f64 / 2.0,
                size: 24.0,
                color: Color32::from_rgb(255, 80, 80),
            }),
        }
        out
    }
}

pub struct Caption {
    pub text: String,
    pub y: f64,
    pub size: f32,
    pub color: Color32,
}

impl super::Scene for TyphoonScene {
    fn label(&self) -> &'static str { "Typhoon stars" }

    fn on_tick(&mut self, _state: &AnimationState, _frame: u64) {
        self.sky = std::mem::take(&mut self.sky).update();
    }

    fn paint(&self, painter: &egui::Painter, origin: egui::Pos2, state: &AnimationState) {
        if self.sky.current_year().is_some() {
            for g in self.sky.background() {
                paint::glowing_diamond(painter, origin, &g, STAR_GLOW);
            }

            for w in self.sky.warnings(&self.warnings, state.color_phase()) {
                if w.highlighted {
                    paint::glowing_diamond(painter, origin, &w.glyph, LIT_GLOW);
                    let core = (w.glyph.base_radius / 2.0).trunc().max(1.0);
                    paint::diamond(painter, paint::at(origin, w.glyph.x, w.glyph.y), core as f32, Color32::WHITE);
                } else {
                    paint::glowing_diamond(painter, origin, &w.glyph, FADED_GLOW);
                }
            }
        }

        let cx = self.opts.width as f64 / 2.0;
        for c in self.captions() {
            painter.text(
                paint::at(origin, cx, c.y),
                Align2::CENTER_TOP,
                c.text,
                FontId::proportional(c.size),
                c.color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::VariantKind;
    use crate::gui::scenes::Scene;

    fn w(issuing: &str) -> TyphoonWarning {
        TyphoonWarning { name: s!("X"), signal: s!("No. 3"), issuing: s!(issuing), ..Default::default() }
    }

    #[test]
    fn ticks_advance_the_sky() {
        let opts = VisualOptions::for_variant(VariantKind::TyphoonStars);
        let mut scene = TyphoonScene::new(opts, vec![w("2001-07-01 10:00"), w("2003-09-01 10:00")]);
        let state = AnimationState::default();
        for f in 0..60 { scene.on_tick(&state, f); }
        assert_eq!(scene.sky().frame(), 60);
        assert_eq!(scene.sky().current_year(), Some(2003));
    }

    #[test]
    fn no_years_means_no_cycle() {
        let opts = VisualOptions::for_variant(VariantKind::TyphoonStars);
        let scene = TyphoonScene::new(opts, vec![w("n/a")]);
        assert_eq!(scene.sky().current_year(), None);
    }

    #[test]
    fn title_is_shown_with_or_without_years() {
        let opts = VisualOptions::for_variant(VariantKind::TyphoonStars);
        let empty = TyphoonScene::new(opts.clone(), vec![w("n/a")]);
        let texts: Vec<String> = empty.captions().into_iter().map(|c| c.text).collect();
        assert_eq!(texts, vec![s!(TITLE), s!(NO_DATA)]);

        let lit = TyphoonScene::new(opts, vec![w("2001-07-01 10:00")]);
        let texts: Vec<String> = lit.captions().into_iter().map(|c| c.text).collect();
        assert_eq!(texts, vec![s!(TITLE), s!("Year: 2001")]);
    }
}
