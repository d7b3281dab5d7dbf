// src/gui/icon.rs
// Window icon, drawn at startup: a small pastel starburst.

use std::f64::consts::TAU;

use eframe::egui::IconData;
use image::{Rgba, RgbaImage};

use crate::engine::color::hsv_to_rgb;

const SIZE: u32 = 64;
const RAYS: f64 = 12.0;

pub fn app_icon() -> IconData {
    let c = SIZE as f64 / 2.0;
    let img = RgbaImage::from_fn(SIZE, SIZE, |x, y| {
        let dx = x as f64 + 0.5 - c;
        let dy = y as f64 + 0.5 - c;
        let r = dx.hypot(dy);
        let angle = dy.atan2(dx).rem_euclid(TAU);
        // distance from the nearest ray, in ray widths
        let ray = (angle / TAU * RAYS).fract();
        let on_ray = (ray.min(1.0 - ray) * r) < 1.2;
        if r < c - 2.0 && (on_ray || r < 3.0) {
            let rgb = hsv_to_rgb(angle / TAU, 0.4, 1.0);
            Rgba([rgb.r, rgb.g, rgb.b, 255])
        } else {
            Rgba([10, 10, 30, 255])
        }
    });
    let (w, h) = img.dimensions();
    IconData { rgba: img.into_raw(), width: w, height: h }
}
