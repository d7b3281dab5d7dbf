// tests/engine_props.rs
use std::f64::consts::TAU;

use harbour_art::config::options::{Cadence, LayoutMode, Tone};
use harbour_art::engine::{
    color::hue, layout::layout, normalize::normalize, year_cycle::YearCycle, AnimationDriver,
    AnimationState, Flow, Signal,
};

const TONE: Tone = Tone { saturation: 0.4, value: 1.0 };

fn close(a: f64, b: f64) -> bool { (a - b).abs() < 1e-9 }

/// Distance on the unit circle of phases.
fn phase_close(a: f64, b: f64) -> bool {
    let d = (a - b).rem_euclid(1.0);
    d.min(1.0 - d) < 1e-9
}

#[test]
fn normalized_values_stay_in_range() {
    let inputs = [
        vec![3.0, -1.0, 7.5, 0.0, 2.25],
        vec![1e6, 1e6 + 1.0],
        vec![-40.0, -20.0, -30.0],
    ];
    for v in inputs {
        let out = normalize(&v, 80.0, 350.0);
        assert_eq!(out.len(), v.len());
        assert!(out.iter().all(|&m| (80.0..=350.0).contains(&m)), "{out:?}");
        assert!(out.iter().any(|&m| m == 80.0));
        assert!(out.iter().any(|&m| m == 350.0));
    }
}

#[test]
fn normalizer_known_values() {
    assert_eq!(normalize(&[5.0, 10.0, 15.0], 0.0, 100.0), vec![0.0, 50.0, 100.0]);
    assert_eq!(normalize(&[4.0, 4.0, 4.0], 10.0, 20.0), vec![10.0; 3]);
    assert!(normalize(&[], 0.0, 1.0).is_empty());
}

#[test]
fn plain_layout_is_evenly_spaced_from_rotation() {
    let state = AnimationState::new(0.4, 0.25);
    for n in [1usize, 3, 7, 24] {
        let mags = vec![100.0; n];
        let pts = layout(&mags, &state, LayoutMode::Plain, (400.0, 400.0), TONE);
        assert_eq!(pts.len(), n);
        assert!(close(pts[0].angle, 0.4));
        for w in pts.windows(2) {
            assert!(close(w[1].angle - w[0].angle, TAU / n as f64));
        }
        assert!(pts.iter().all(|p| close(p.radius, 100.0)));
    }
}

#[test]
fn pulsing_stays_within_amplitude() {
    let mode = LayoutMode::Pulsing { amplitude: 0.08, frequency: 3.0 };
    let mags = vec![200.0; 12];
    for k in 0..50 {
        let state = AnimationState::new(0.0, k as f64 * 0.02);
        for p in layout(&mags, &state, mode, (0.0, 0.0), TONE) {
            assert!(p.radius >= 200.0 * 0.92 - 1e-9 && p.radius <= 200.0 * 1.08 + 1e-9);
        }
    }
}

#[test]
fn hue_examples() {
    assert!(close(hue(0.5, 0, 4), 0.5));
    assert!(close(hue(0.9, 3, 4), 0.65));
}

#[test]
fn driver_phase_after_k_ticks() {
    let cadence = Cadence { fps: 60, rotation_step: 0.01, phase_step: 0.003 };
    let mut d = AnimationDriver::new(cadence);
    let mut rendered = 0u64;
    for _ in 0..250 {
        assert_eq!(d.tick(Signal::None, |_, frame| rendered = frame), Flow::Continue);
    }
    assert_eq!(rendered, 250);
    assert!(phase_close(d.state().color_phase(), 0.75));
    assert!(d.state().rotation() < TAU);

    assert_eq!(d.tick(Signal::Quit, |_, _| panic!("rendered after quit")), Flow::Stop);
    assert_eq!(d.frame(), 250);
}

#[test]
fn year_cycle_wraps_through_sorted_years() {
    let mut c = YearCycle::new([2005, 1998, 2000, 2000], 60);
    assert_eq!(c.years(), &[1998, 2000, 2005]);
    for _ in 0..60 { c.advance(); }
    assert_eq!(c.index(), Some(1));
    for _ in 0..120 { c.advance(); }
    assert_eq!(c.index(), Some(0));
    assert_eq!(c.current(), Some(1998));
}
