// src/gui/scenes/flower.rs
//
// Climate normals as a pulsing flower: petal length from mean temperature,
// bloom size from rainfall. Buttons toggle pulsing and the data panel, and
// quit; clicking a bloom selects its month.

use eframe::egui::{self, Align2, Color32, FontId, Stroke};

use crate::{
    config::{
        consts::{BLOOM_MAX, BLOOM_MIN, PICK_TOLERANCE},
        options::{LayoutMode, VisualOptions},
    },
    data::ClimateTable,
    engine::{layout, normalize::normalize, AnimationState, RadialPoint, Signal},
    gui::{components::{button_bar, sample_table}, paint},
};

const BUTTONS: [&str; 3] = ["Pulse", "Data", "Quit"];
const HEADERS: [&str; 3] = ["Month", "Temp (°C)", "Rain (mm)"];

pub struct FlowerScene {
    opts: VisualOptions,
    table: ClimateTable,
    petals: Vec<f64>,
    blooms: Vec<f64>,
    pulsing: bool,
    show_table: bool,
    selected: Option<usize>,
}

impl FlowerScene {
    pub fn new(opts: VisualOptions, table: ClimateTable) -> Self {
        let petals = normalize(table.mean_temperature(), opts.radii.lo, opts.radii.hi);
        let blooms = normalize(table.precipitation(), BLOOM_MIN, BLOOM_MAX);
        let pulsing = matches!(opts.layout, LayoutMode::Pulsing { .. });
        Self { opts, table, petals, blooms, pulsing, show_table: false, selected: None }
    }

    pub fn mode(&self) -> LayoutMode {
        if self.pulsing { self.opts.layout } else { LayoutMode::Plain }
    }

    pub fn points(&self, state: &AnimationState) -> Vec<RadialPoint> {
        layout::layout(&self.petals, state, self.mode(), self.opts.center(), self.opts.tone)
    }

    pub fn toggle_pulse(&mut self) {
        self.pulsing = !self.pulsing;
        logf!("UI: Pulsing → {}", self.pulsing);
    }

    pub fn is_pulsing(&self) -> bool { self.pulsing }
    pub fn selected(&self) -> Option<usize> { self.selected }
    pub fn blooms(&self) -> &[f64] { &self.blooms }

    fn rows(&self) -> Vec<Vec<String>> {
        (0..self.table.len())
            .map(|i| vec![
                self.table.labels()[i].clone(),
                format!("{:.1}", self.table.mean_temperature()[i]),
                format!("{:.1}", self.table.precipitation()[i]),
            ])
            .collect()
    }

    fn bar_origin(&self, origin: egui::Pos2) -> egui::Pos2 {
        origin + egui::vec2(20.0, self.opts.height - 50.0)
    }
}

impl super::Scene for FlowerScene {
    fn label(&self) -> &'static str { "Climate flower" }

    fn paint(&self, painter: &egui::Painter, origin: egui::Pos2, state: &AnimationState) {
        let (cx, cy) = self.opts.center();
        let center = paint::at(origin, cx, cy);

        // soft halo behind the petals
        painter.circle_filled(
            center,
            (self.opts.radii.hi + BLOOM_MAX + 20.0) as f32,
            Color32::from_rgba_unmultiplied(255, 255, 255, 10),
        );

        for p in self.points(state) {
            let tip = paint::at(origin, p.x, p.y);
            let bloom = self.blooms[p.index] as f32;
            painter.line_segment([center, tip], Stroke::new(2.0, paint::color_alpha(p.color, 160)));
            painter.circle_filled(tip, bloom, paint::color_alpha(p.color, 190));
            if self.selected == Some(p.index) {
                painter.circle_stroke(tip, bloom + 4.0, Stroke::new(2.0, Color32::WHITE));
            }

            let r = p.radius + bloom as f64 + 16.0;
            painter.text(
                paint::at(origin, cx + r * p.angle.cos(), cy + r * p.angle.sin()),
                Align2::CENTER_CENTER,
                &self.table.labels()[p.index],
                FontId::proportional(14.0),
                Color32::from_gray(220),
            );
        }
        painter.circle_filled(center, 10.0, Color32::from_rgb(255, 236, 170));

        painter.text(
            paint::at(origin, cx, 40.0),
            Align2::CENTER_TOP,
            "Hong Kong Climate Normals",
            FontId::proportional(30.0),
            Color32::from_rgb(255, 230, 120),
        );

        if let Some(i) = self.selected {
            painter.text(
                paint::at(origin, cx, self.opts.height as f64 - 90.0),
                Align2::CENTER_TOP,
                format!(
                    "{}: {:.1} °C, {:.1} mm",
                    self.table.labels()[i],
                    self.table.mean_temperature()[i],
                    self.table.precipitation()[i],
                ),
                FontId::proportional(18.0),
                Color32::from_rgb(200, 220, 255),
            );
        }
    }

    fn draw_panels(&mut self, ctx: &egui::Context) {
        if !self.show_table { return; }
        let rows = self.rows();
        egui::SidePanel::right("climate_table")
            .resizable(false)
            .show(ctx, |ui| {
                ui.heading("Climate data");
                ui.separator();
                sample_table::draw(ui, &HEADERS, &rows, self.selected);
            });
    }

    fn draw_overlay(&mut self, ui: &mut egui::Ui, origin: egui::Pos2) -> Signal {
        match button_bar::draw(ui, self.bar_origin(origin), &BUTTONS) {
            Some(0) => self.toggle_pulse(),
            Some(1) => self.show_table = !self.show_table,
            Some(2) => return Signal::Quit,
            _ => {}
        }
        Signal::None
    }

    fn on_click(&mut self, pos: (f64, f64), state: &AnimationState) {
        let points = self.points(state);
        self.selected = layout::hit_test(&points, pos, PICK_TOLERANCE);
        if let Some(i) = self.selected {
            logd!("UI: Selected {}", self.table.labels()[i]);
        }
    }

    fn on_input(&mut self, input: &egui::InputState) {
        if input.key_pressed(egui::Key::Space) {
            self.toggle_pulse();
        }
    }
}
