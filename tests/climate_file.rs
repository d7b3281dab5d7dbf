// tests/climate_file.rs
use std::fs;
use std::path::PathBuf;

use harbour_art::config::options::ClimateColumns;
use harbour_art::specs::climate;

fn tmp_file(name: &str, body: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("harbour_art_{}.csv", name));
    fs::write(&p, body).unwrap();
    p
}

#[test]
fn reads_comma_decimals_and_skips_bad_rows() {
    let path = tmp_file(
        "normals",
        "Month;Mean Temperature (Â°C);Total Rainfall (mm)\n\
         Jan;16,3;33,2\n\
         Feb;warm;43,7\n\
         Mar;19,4\n\
         Apr;22,8;148,4\n",
    );
    let table = climate::load(&path, &ClimateColumns::default()).unwrap();
    assert_eq!(table.labels(), &["Jan".to_string(), "Apr".to_string()]);
    assert_eq!(table.mean_temperature(), &[16.3, 22.8]);
    assert_eq!(table.precipitation(), &[33.2, 148.4]);
}

#[test]
fn column_names_are_configurable() {
    let path = tmp_file("custom", "when;t;rain\nQ1;10,5;1,0\nQ2;12,0;2,5\n");
    let cols = ClimateColumns { label: "WHEN".into(), temperature: "t".into(), precipitation: "Rain".into() };
    let table = climate::load(&path, &cols).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.precipitation(), &[1.0, 2.5]);
}

#[test]
fn missing_column_or_file_is_an_error() {
    let path = tmp_file("nocol", "Month;Temp\nJan;1,0\n");
    let err = climate::load(&path, &ClimateColumns::default()).unwrap_err();
    assert!(err.to_string().contains("no column"));

    let missing = std::env::temp_dir().join("harbour_art_does_not_exist.csv");
    assert!(climate::load(&missing, &ClimateColumns::default()).is_err());
}

#[test]
fn bundled_file_has_twelve_months() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/hk_climate.csv");
    let table = climate::load(&path, &ClimateColumns::default()).unwrap();
    assert_eq!(table.len(), 12);
    assert_eq!(table.labels()[6], "Jul");
}
