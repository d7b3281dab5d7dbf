// src/gui/components/button_bar.rs
//
// Row of fixed-size buttons at a fixed spot on the canvas.
// Rects are computed up front so clicks can be tested without a frame.

use eframe::egui::{self, Pos2, Rect, Vec2};

pub const BUTTON_SIZE: Vec2 = Vec2::new(96.0, 30.0);
pub const GAP: f32 = 10.0;

/// Left-to-right rects starting at `origin`.
pub fn rects(origin: Pos2, count: usize) -> Vec<Rect> {
    (0..count)
        .map(|i| {
            let min = origin + egui::vec2(i as f32 * (BUTTON_SIZE.x + GAP), 0.0);
            Rect::from_min_size(min, BUTTON_SIZE)
        })
        .collect()
}

/// Index of the button under `pos`.
pub fn hit(rects: &[Rect], pos: Pos2) -> Option<usize> {
    rects.iter().position(|r| r.contains(pos))
}

/// Draw the bar; returns the index of the clicked button, if any.
pub fn draw(ui: &mut egui::Ui, origin: Pos2, labels: &[&str]) -> Option<usize> {
    let mut clicked = None;
    for (i, (rect, label)) in rects(origin, labels.len()).into_iter().zip(labels).enumerate() {
        if ui.put(rect, egui::Button::new(*label)).clicked() {
            clicked = Some(i);
        }
    }
    clicked
}
