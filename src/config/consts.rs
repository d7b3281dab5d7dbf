// src/config/consts.rs

// Sources
pub const TIDE_URL: &str = "https://www.hko.gov.hk/tide/eCLKtext2027.html";
pub const TYPHOON_URL: &str = "https://envf.ust.hk/dataview/warnings/current/select_data_typh.py?signal__string=1_or_higher&start_time__YMD=19970701&end_time__YMD=20250924&submit=+Query+";
pub const CLIMATE_FILE: &str = "data/hk_climate.csv";
pub const CLIMATE_SEP: char = ';';

// Net config
pub const USER_AGENT: &str = concat!("harbour_art/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// Local log
pub const LOG_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Animation
pub const FPS: u32 = 60;
pub const MAX_CATCHUP_TICKS: u32 = 4;
pub const FRAMES_PER_YEAR: u64 = 60;

// Typhoon starfield
pub const BG_STARS: usize = 180;
pub const STAR_MARGIN: f64 = 30.0;
pub const WARNING_MARGIN: f64 = 40.0;
pub const DEFAULT_SEED: u64 = 0x5EED_1997;

// Climate flower
pub const BLOOM_MIN: f64 = 6.0;
pub const BLOOM_MAX: f64 = 28.0;
pub const PICK_TOLERANCE: f64 = 24.0;
