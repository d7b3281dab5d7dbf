// tests/tides_e2e.rs
use harbour_art::config::options::{VariantKind, VisualOptions};
use harbour_art::engine::{layout::layout, normalize::normalize, AnimationState};
use harbour_art::{data, specs::tides};

fn row(a: &str, b: &str) -> Vec<String> {
    vec![a.to_string(), b.to_string()]
}

#[test]
fn rows_to_samples_drops_non_numbers() {
    let samples = tides::parse_rows(vec![row("00:00", "1.5"), row("06:00", "abc"), row("12:00", "2.5")]);
    assert_eq!(data::values(&samples), vec![1.5, 2.5]);
    assert_eq!(samples[1].label, "12:00");
}

#[test]
fn page_to_points() {
    let doc = "<html><body><p>Tide</p>\
        <TABLE><tr><th>Time</th><th>Height (m)</th></tr>\
        <tr><td>00:00</td><td>1.5</td></tr>\
        <tr><td>06:00</td><td>n/a</td></tr>\
        <tr><td>only one cell</td></tr>\
        <tr><td>12:00</td><td>2.5</td></tr>\
        <tr><td>18:00</td><td>&nbsp;2.0</td></tr></TABLE></body></html>";
    let samples = tides::parse_doc(doc);
    assert_eq!(data::values(&samples), vec![1.5, 2.5, 2.0]);

    let opts = VisualOptions::for_variant(VariantKind::TidalStarburst);
    let radii = normalize(&data::values(&samples), opts.radii.lo, opts.radii.hi);
    assert_eq!(radii, vec![80.0, 350.0, 215.0]);

    let pts = layout(&radii, &AnimationState::default(), opts.layout, opts.center(), opts.tone);
    assert_eq!(pts.len(), 3);
    assert_eq!((pts[0].x, pts[0].y), (480.0, 400.0));
}

#[test]
fn page_without_table_is_empty() {
    assert!(tides::parse_doc("<html><body>No data</body></html>").is_empty());
}
