// src/bin/typhoon_stars.rs
use harbour_art::{config::options::VariantKind, gui};

fn main() {
    if let Err(e) = gui::launch(VariantKind::TyphoonStars) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
