// src/bin/tidal_starburst.rs
use harbour_art::{config::options::VariantKind, gui};

fn main() {
    if let Err(e) = gui::launch(VariantKind::TidalStarburst) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
