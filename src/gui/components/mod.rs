// src/gui/components/mod.rs
pub mod button_bar;
pub mod sample_table;
