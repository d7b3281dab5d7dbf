// src/engine/animation.rs
use std::f64::consts::TAU;
use std::time::{Duration, Instant};

use crate::config::options::Cadence;

/// Rotation and color phase. Only `AnimationDriver` moves these.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationState {
    rotation: f64,
    color_phase: f64,
}

impl AnimationState {
    pub fn new(rotation: f64, color_phase: f64) -> Self {
        Self { rotation: rotation.rem_euclid(TAU), color_phase: color_phase.rem_euclid(1.0) }
    }

    /// Radians, kept in `[0, 2π)`.
    pub fn rotation(&self) -> f64 { self.rotation }

    /// In `[0, 1)`.
    pub fn color_phase(&self) -> f64 { self.color_phase }
}

/// What the frontend saw since the last tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    None,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Fixed-step animation: one `tick` per frame at `cadence.fps`.
/// Quitting is the only way out; nothing in here fails.
#[derive(Clone, Debug)]
pub struct AnimationDriver {
    cadence: Cadence,
    state: AnimationState,
    frame: u64,
    stopped: bool,
}

impl AnimationDriver {
    pub fn new(cadence: Cadence) -> Self {
        Self { cadence, state: AnimationState::default(), frame: 0, stopped: false }
    }

    pub fn state(&self) -> &AnimationState { &self.state }
    pub fn frame(&self) -> u64 { self.frame }
    pub fn is_stopped(&self) -> bool { self.stopped }

    pub fn interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.cadence.fps.max(1) as f64)
    }

    /// Poll, advance, render. After a quit every further tick is a no-op.
    pub fn tick<R>(&mut self, signal: Signal, mut render: R) -> Flow
    where
        R: FnMut(&AnimationState, u64),
    {
        if self.stopped || signal == Signal::Quit {
            self.stopped = true;
            return Flow::Stop;
        }
        self.advance();
        render(&self.state, self.frame);
        Flow::Continue
    }

    fn advance(&mut self) {
        self.state.rotation = (self.state.rotation + self.cadence.rotation_step).rem_euclid(TAU);
        self.state.color_phase = (self.state.color_phase + self.cadence.phase_step).rem_euclid(1.0);
        self.frame += 1;
    }
}

/// Turns wall time into a whole number of due ticks.
/// Long stalls are dropped rather than replayed.
#[derive(Clone, Debug)]
pub struct FrameClock {
    interval: Duration,
    last: Instant,
    max_catchup: u32,
}

impl FrameClock {
    pub fn new(interval: Duration, now: Instant, max_catchup: u32) -> Self {
        Self { interval, last: now, max_catchup: max_catchup.max(1) }
    }

    pub fn due(&mut self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.last);
        let n = elapsed.as_nanos() / self.interval.as_nanos().max(1);
        if n > self.max_catchup as u128 {
            self.last = now;
            return self.max_catchup;
        }
        let n = n as u32;
        self.last += self.interval * n;
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cadence() -> Cadence {
        Cadence { fps: 60, rotation_step: 0.01, phase_step: 0.003 }
    }

    #[test]
    fn quit_stops_before_advancing_or_rendering() {
        let mut d = AnimationDriver::new(cadence());
        let mut renders = 0;
        assert_eq!(d.tick(Signal::None, |_, _| renders += 1), Flow::Continue);
        assert_eq!(d.tick(Signal::Quit, |_, _| renders += 1), Flow::Stop);
        assert_eq!(d.tick(Signal::None, |_, _| renders += 1), Flow::Stop);
        assert_eq!(renders, 1);
        assert_eq!(d.frame(), 1);
        assert!(d.is_stopped());
    }

    #[test]
    fn render_sees_advanced_state() {
        let mut d = AnimationDriver::new(cadence());
        let mut seen = None;
        d.tick(Signal::None, |s, f| seen = Some((s.rotation(), s.color_phase(), f)));
        let (rot, phase, frame) = seen.unwrap();
        assert!((rot - 0.01).abs() < 1e-12);
        assert!((phase - 0.003).abs() < 1e-12);
        assert_eq!(frame, 1);
    }

    #[test]
    fn interval_is_sixtieth() {
        let d = AnimationDriver::new(cadence());
        assert_eq!(d.interval().as_micros(), 16_666);
    }

    #[test]
    fn clock_counts_whole_intervals() {
        let t0 = Instant::now();
        let ms = Duration::from_millis;
        let mut c = FrameClock::new(ms(16), t0, 4);
        assert_eq!(c.due(t0 + ms(10)), 0);
        assert_eq!(c.due(t0 + ms(50)), 3);
        assert_eq!(c.due(t0 + ms(50)), 0);
        assert_eq!(c.due(t0 + ms(64)), 1);
        // stall: capped, backlog dropped
        assert_eq!(c.due(t0 + ms(2_000)), 4);
        assert_eq!(c.due(t0 + ms(2_010)), 0);
    }
}
