// Host-side tests for the frame clock and per-frame driver.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod params {
    include!("../src/params.rs");
}
mod input {
    include!("../src/input.rs");
}
mod surface {
    include!("../src/surface.rs");
}
mod energy {
    include!("../src/energy.rs");
}
mod sampler {
    include!("../src/sampler.rs");
}
mod frame {
    include!("../src/frame.rs");
}

use energy::baseline_y;
use frame::*;
use glam::Vec2;
use input::PointerState;
use params::{Background, LineStyle, ParamsError, WaveParams};
use surface::SurfaceSize;

#[derive(Default)]
struct RecordingSurface {
    clears: Vec<(SurfaceSize, Background)>,
    strokes: Vec<(Vec<Vec2>, LineStyle)>,
}

impl Surface for RecordingSurface {
    fn clear(&mut self, size: SurfaceSize, background: &Background) {
        self.clears.push((size, background.clone()));
    }

    fn stroke_polyline(&mut self, points: &[Vec2], style: &LineStyle) {
        self.strokes.push((points.to_vec(), style.clone()));
    }
}

fn size() -> SurfaceSize {
    SurfaceSize::new(800.0, 600.0)
}

#[test]
fn clock_reports_seconds_and_clamps_stalls() {
    let mut clock = FrameClock::new(1000.0);
    assert!((clock.tick(1016.0) - 0.016).abs() < 1e-6);
    assert_eq!(clock.tick(1516.0), 0.033);
    assert_eq!(clock.last_ms(), 1516.0);
}

#[test]
fn clock_never_goes_backwards() {
    let mut clock = FrameClock::new(500.0);
    assert_eq!(clock.tick(480.0), 0.0);
    assert!((clock.tick(490.0) - 0.010).abs() < 1e-6);
}

#[test]
fn clock_reset_skips_paused_interval() {
    let mut clock = FrameClock::new(0.0);
    clock.reset(60_000.0);
    assert!((clock.tick(60_020.0) - 0.020).abs() < 1e-6);
}

#[test]
fn invalid_params_are_rejected_up_front() {
    let mut p = WaveParams::resonance();
    p.line_count = 0;
    assert!(matches!(FrameDriver::new(p, 1, 0.0), Err(ParamsError::NoLines)));
}

#[test]
fn step_clears_then_strokes_every_line() {
    let mut driver = FrameDriver::new(WaveParams::resonance(), 1, 0.0).unwrap();
    let mut surface = RecordingSurface::default();
    let stats = driver.step(16.0, PointerState::default(), size(), &mut surface);

    assert_eq!(surface.clears.len(), 1);
    assert_eq!(surface.clears[0], (size(), Background::Transparent));
    assert_eq!(surface.strokes.len(), 3);
    for (points, style) in &surface.strokes {
        assert_eq!(points.len(), 261);
        assert_eq!(points[0].x, 0.0);
        assert_eq!(points[260].x, 800.0);
        assert_eq!(style, &WaveParams::resonance().style);
    }
    assert_eq!(stats.lines, 3);
    assert_eq!(stats.points, 3 * 261);
}

#[test]
fn solid_background_is_passed_to_surface() {
    let mut p = WaveParams::soft();
    p.background = Background::Solid("#101010".to_string());
    let mut driver = FrameDriver::new(p, 1, 0.0).unwrap();
    let mut surface = RecordingSurface::default();
    driver.step(16.0, PointerState::default(), size(), &mut surface);
    assert_eq!(surface.clears[0].1, Background::Solid("#101010".to_string()));
}

#[test]
fn surface_resize_between_frames_is_honoured() {
    let mut driver = FrameDriver::new(WaveParams::resonance(), 1, 0.0).unwrap();
    let mut surface = RecordingSurface::default();
    driver.step(16.0, PointerState::default(), size(), &mut surface);
    driver.step(32.0, PointerState::default(), SurfaceSize::new(320.0, 200.0), &mut surface);
    let (last_points, _) = surface.strokes.last().unwrap();
    assert_eq!(last_points.last().unwrap().x, 320.0);
    assert_eq!(surface.clears[1].0, SurfaceSize::new(320.0, 200.0));
}

#[test]
fn long_stall_is_integrated_as_clamped_dt() {
    let p = WaveParams::resonance();
    let mut driver = FrameDriver::new(p.clone(), 1, 0.0).unwrap();
    let pointer = PointerState {
        x: 400.0,
        y: baseline_y(&p, 1, 600.0),
        inside: true,
    };
    let mut surface = RecordingSurface::default();
    let stats = driver.step(500.0, pointer, size(), &mut surface);
    assert_eq!(stats.dt_sec, 0.033);

    // target 1 on line 1, neighbours at rest
    let coupled = 1.0 - p.coupling_factor;
    let clamped = coupled * 6.5 * 0.033 * 0.88;
    let unclamped = coupled * 6.5 * 0.5 * 0.88;
    let v = driver.model().line(1).energy_velocity;
    assert!((v - clamped).abs() < 1e-5, "velocity {v}, expected {clamped}");
    assert!(v < unclamped * 0.1);
}

#[test]
fn idle_frames_leave_energy_at_rest() {
    let mut driver = FrameDriver::new(WaveParams::resonance(), 4, 0.0).unwrap();
    let mut surface = RecordingSurface::default();
    for i in 1..=100 {
        driver.step(i as f64 * 16.0, PointerState::default(), size(), &mut surface);
    }
    assert_eq!(driver.model().energies(), vec![0.0, 0.0, 0.0]);
    assert_eq!(surface.strokes.len(), 300);
}

#[test]
fn resume_does_not_integrate_pause() {
    let mut driver = FrameDriver::new(WaveParams::resonance(), 1, 0.0).unwrap();
    let mut surface = RecordingSurface::default();
    driver.step(16.0, PointerState::default(), size(), &mut surface);
    driver.resume(30_000.0);
    let stats = driver.step(30_008.0, PointerState::default(), size(), &mut surface);
    assert!((stats.dt_sec - 0.008).abs() < 1e-6);
}

#[test]
fn hovering_frames_lift_the_drawn_wave() {
    let p = WaveParams::resonance();
    let mut driver = FrameDriver::new(p.clone(), 6, 0.0).unwrap();
    let pointer = PointerState {
        x: 400.0,
        y: baseline_y(&p, 1, 600.0),
        inside: true,
    };
    let mut surface = RecordingSurface::default();
    for i in 1..=90 {
        driver.step(i as f64 * 16.0, pointer, size(), &mut surface);
    }
    let energies = driver.model().energies();
    assert!(energies[1] > 0.5, "energies {energies:?}");

    let base = baseline_y(&p, 1, 600.0);
    let (points, _) = &surface.strokes[surface.strokes.len() - 2];
    let max_dev = points.iter().map(|pt| (pt.y - base).abs()).fold(0.0_f32, f32::max);
    let idle_bound = p.base_amplitude_px * (1.0 + p.breathe_amplitude_fraction) * p.amplitude_multipliers[1];
    assert!(max_dev > idle_bound);
}
