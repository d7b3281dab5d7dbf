// src/engine/color.rs

/// 8-bit sRGB triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }

    pub fn from_bytes([r, g, b]: [u8; 3]) -> Self { Self { r, g, b } }

    /// Scale every channel, truncating.
    pub fn scaled(self, k: f64) -> Self {
        let f = |c: u8| (c as f64 * k) as u8;
        Self { r: f(self.r), g: f(self.g), b: f(self.b) }
    }
}

/// `(phase + index/count) mod 1`. With no points the phase is the hue.
pub fn hue(phase: f64, index: usize, count: usize) -> f64 {
    if count == 0 {
        return phase.rem_euclid(1.0);
    }
    (phase + index as f64 / count as f64).rem_euclid(1.0)
}

/// Standard HSV → RGB, channels truncated to `int(255·c)`.
#[inline]
pub fn hsv_to_rgb(hue: f64, sat: f64, val: f64) -> Rgb {
    let (r, g, b) = if sat == 0.0 {
        (val, val, val)
    } else {
        let var_h = if hue == 1.0 { 0.0 } else { hue * 6.0 };

        let var_i = var_h.floor();
        let var_1 = val * (1.0 - sat);
        let var_2 = val * (1.0 - sat * (var_h - var_i));
        let var_3 = val * (1.0 - sat * (1.0 - (var_h - var_i)));

        match var_i as i64 {
            0 => (val, var_3, var_1),
            1 => (var_2, val, var_1),
            2 => (var_1, val, var_3),
            3 => (var_1, var_2, val),
            4 => (var_3, var_1, val),
            _ => (val, var_1, var_2),
        }
    };
    let byte = |c: f64| (255.0 * c.clamp(0.0, 1.0)) as u8;
    Rgb::new(byte(r), byte(g), byte(b))
}

/// Color of point `index` of `count` at the given phase.
pub fn phase_color(phase: f64, index: usize, count: usize, sat: f64, val: f64) -> Rgb {
    hsv_to_rgb(hue(phase, index, count), sat, val)
}
