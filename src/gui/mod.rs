// src/gui/mod.rs
pub mod app;
pub mod components;
pub mod icon;
pub mod paint;
pub mod router;
pub mod scenes;

pub use app::{launch, run};
