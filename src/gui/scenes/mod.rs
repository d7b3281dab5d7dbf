// src/gui/scenes/mod.rs
use eframe::egui;

use crate::engine::{AnimationState, Signal};

pub mod flower;
pub mod starburst;
pub mod typhoon;

/// One visualization. The app owns the driver; scenes only read its state.
pub trait Scene {
    fn label(&self) -> &'static str;

    /// Called once per animation tick, after the driver advanced.
    fn on_tick(&mut self, _state: &AnimationState, _frame: u64) {}

    /// Draw the frame. `origin` is the canvas top-left in screen space.
    fn paint(&self, painter: &egui::Painter, origin: egui::Pos2, state: &AnimationState);

    /// Panels that sit outside the canvas (side tables etc.).
    fn draw_panels(&mut self, _ctx: &egui::Context) {}

    /// Widgets on top of the canvas. May ask to quit.
    fn draw_overlay(&mut self, _ui: &mut egui::Ui, _origin: egui::Pos2) -> Signal {
        Signal::None
    }

    /// Click on the canvas, in canvas coordinates.
    fn on_click(&mut self, _pos: (f64, f64), _state: &AnimationState) {}

    /// Keyboard, polled once per frame.
    fn on_input(&mut self, _input: &egui::InputState) {}
}
