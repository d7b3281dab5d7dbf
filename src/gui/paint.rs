// src/gui/paint.rs
// Painter helpers shared by the scenes. Scene coordinates are pixels from
// the canvas top-left.

use eframe::egui::{self, Color32, Pos2, Shape, Stroke};

use crate::engine::{constellation::Glyph, Rgb};

#[inline]
pub fn color(c: Rgb) -> Color32 {
    Color32::from_rgb(c.r, c.g, c.b)
}

#[inline]
pub fn color_alpha(c: Rgb, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r, c.g, c.b, alpha)
}

#[inline]
pub fn at(origin: Pos2, x: f64, y: f64) -> Pos2 {
    origin + egui::vec2(x as f32, y as f32)
}

/// Filled diamond with its corners `size` away from the center.
pub fn diamond(painter: &egui::Painter, center: Pos2, size: f32, fill: Color32) {
    let size = size.max(0.5);
    let points = vec![
        center + egui::vec2(0.0, -size),
        center + egui::vec2(size, 0.0),
        center + egui::vec2(0.0, size),
        center + egui::vec2(-size, 0.0),
    ];
    painter.add(Shape::convex_polygon(points, fill, Stroke::NONE));
}

/// Translucent glow rings, then the solid core.
pub fn glowing_diamond(painter: &egui::Painter, origin: Pos2, g: &Glyph, peak_alpha: f64) {
    let center = at(origin, g.x, g.y);
    for (r, a) in g.glow_rings(peak_alpha) {
        diamond(painter, center, r as f32, color_alpha(g.color, a));
    }
    diamond(painter, center, g.base_radius as f32, color(g.color));
}
