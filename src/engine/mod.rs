// src/engine/mod.rs
//
// Frame math. No egui types in here: everything takes plain numbers and
// returns plain numbers so the GUI only has to paint.

pub mod animation;
pub mod color;
pub mod constellation;
pub mod layout;
pub mod normalize;
pub mod starfield;
pub mod year_cycle;

pub use animation::{AnimationDriver, AnimationState, Flow, FrameClock, Signal};
pub use color::Rgb;
pub use layout::RadialPoint;
