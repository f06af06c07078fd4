use crate::constants::BREATHE_RATE_PER_MS;
use crate::energy::{baseline_y, LineEnergyModel};
use crate::input::{proximity_falloff, PointerState};
use crate::params::WaveParams;
use crate::surface::SurfaceSize;
use glam::Vec2;

/// Slow global amplitude modulation shared by all lines.
#[inline]
pub fn breathe_factor(params: &WaveParams, now_ms: f64) -> f32 {
    1.0 + (now_ms * BREATHE_RATE_PER_MS).sin() as f32 * params.breathe_amplitude_fraction
}

/// Read-only view of one frame's state that evaluates wave heights.
pub struct WaveSampler<'a> {
    params: &'a WaveParams,
    model: &'a LineEnergyModel,
    pointer: PointerState,
    surface: SurfaceSize,
    breathe: f32,
}

impl<'a> WaveSampler<'a> {
    pub fn new(
        params: &'a WaveParams,
        model: &'a LineEnergyModel,
        pointer: PointerState,
        surface: SurfaceSize,
        now_ms: f64,
    ) -> Self {
        Self {
            params,
            model,
            pointer,
            surface,
            breathe: breathe_factor(params, now_ms),
        }
    }

    #[inline]
    pub fn breathe(&self) -> f32 {
        self.breathe
    }

    pub fn amplitude(&self, line: usize) -> f32 {
        let energy = self.model.line(line).energy;
        self.params.base_amplitude_px * self.breathe * self.params.amplitude_multipliers[line]
            + self.params.hover_amplitude_px * energy
    }

    /// Extra bulge near the pointer's x; 1 when the pointer is away.
    pub fn local_lift(&self, line: usize, x: f32) -> f32 {
        if !self.pointer.inside {
            return 1.0;
        }
        let m2 = proximity_falloff(x - self.pointer.x, self.params.hover_radius_px);
        1.0 + m2 * self.model.line(line).energy * self.params.lift_focus
    }

    pub fn sample_y(&self, line: usize, x: f32) -> f32 {
        let y_line = baseline_y(self.params, line, self.surface.height);
        let phase = self.model.line(line).phase;
        let wave = (x * self.params.base_frequency + phase).sin();
        y_line + wave * self.amplitude(line) * self.local_lift(line, x)
    }

    /// Replaces `out` with `sample_count + 1` points spanning the full width.
    pub fn trace(&self, line: usize, out: &mut Vec<Vec2>) {
        let samples = self.params.sample_count;
        out.clear();
        out.reserve(samples + 1);
        for s in 0..=samples {
            let x = (s as f32 / samples as f32) * self.surface.width;
            out.push(Vec2::new(x, self.sample_y(line, x)));
        }
    }
}
