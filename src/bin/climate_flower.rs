// src/bin/climate_flower.rs
use harbour_art::{config::options::VariantKind, gui};

fn main() {
    if let Err(e) = gui::launch(VariantKind::ClimateFlower) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
