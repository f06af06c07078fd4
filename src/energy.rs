use crate::constants::{ENERGY_DAMPING, ENERGY_SPEED_BOOST, REFERENCE_HOVER_SMOOTH, SPRING_CONSTANT};
use crate::input::{proximity_falloff, PointerState};
use crate::params::WaveParams;
use rand::prelude::*;
use smallvec::SmallVec;
use std::f32::consts::TAU;

type LineBuf = SmallVec<[f32; 8]>;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LineState {
    pub energy: f32,
    pub energy_velocity: f32,
    pub phase: f32,
}

/// Per-line excitation driven by pointer proximity and shared with neighbours.
#[derive(Clone, Debug)]
pub struct LineEnergyModel {
    lines: Vec<LineState>,
}

/// Resting y of line `index`, spaced around `center_y_fraction` of the height.
#[inline]
pub fn baseline_y(params: &WaveParams, index: usize, surface_height: f32) -> f32 {
    params.center_y_fraction * surface_height
        + (index as f32 - params.mid_index()) * params.line_separation_px
}

#[inline]
pub fn spring_constant(params: &WaveParams) -> f32 {
    SPRING_CONSTANT * (params.hover_smooth / REFERENCE_HOVER_SMOOTH)
}

impl LineEnergyModel {
    /// Lines start at rest with phases scattered by `rng` and offset by index.
    pub fn new<R: Rng>(params: &WaveParams, rng: &mut R) -> Self {
        let lines = (0..params.line_count)
            .map(|i| LineState {
                energy: 0.0,
                energy_velocity: 0.0,
                phase: rng.gen::<f32>() * TAU + i as f32 * params.phase_spread,
            })
            .collect();
        Self { lines }
    }

    pub fn with_seed(params: &WaveParams, seed: u64) -> Self {
        Self::new(params, &mut StdRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn lines(&self) -> &[LineState] {
        &self.lines
    }

    #[inline]
    pub fn line(&self, index: usize) -> &LineState {
        &self.lines[index]
    }

    pub fn energies(&self) -> Vec<f32> {
        self.lines.iter().map(|l| l.energy).collect()
    }

    /// Overwrites energies, clamped to [0, 1]. Extra values are ignored.
    pub fn set_energies(&mut self, energies: &[f32]) {
        for (line, e) in self.lines.iter_mut().zip(energies) {
            line.energy = e.clamp(0.0, 1.0);
        }
    }

    /// Pointer-driven target for one line before coupling.
    pub fn target_energy(
        params: &WaveParams,
        pointer: &PointerState,
        surface_height: f32,
        index: usize,
    ) -> f32 {
        if !pointer.inside {
            return 0.0;
        }
        let dy = pointer.y - baseline_y(params, index, surface_height);
        proximity_falloff(dy, params.hover_radius_px)
    }

    pub fn targets(params: &WaveParams, pointer: &PointerState, surface_height: f32) -> Vec<f32> {
        (0..params.line_count)
            .map(|i| Self::target_energy(params, pointer, surface_height, i))
            .collect()
    }

    /// Advances every line by one frame.
    ///
    /// Coupling reads the energies as they were before this call, so the
    /// result does not depend on iteration order.
    pub fn update(
        &mut self,
        params: &WaveParams,
        pointer: &PointerState,
        surface_height: f32,
        dt_sec: f32,
    ) {
        let n = self.lines.len();
        if n == 0 {
            return;
        }
        let prev: LineBuf = self.lines.iter().map(|l| l.energy).collect();
        let k = spring_constant(params);

        for (i, line) in self.lines.iter_mut().enumerate() {
            let target = Self::target_energy(params, pointer, surface_height, i);
            let left = if i > 0 { prev[i - 1] } else { prev[i] };
            let right = if i + 1 < n { prev[i + 1] } else { prev[i] };
            let neighbor_mean = (left + right) * 0.5;
            let coupled = target + (neighbor_mean - target) * params.coupling_factor;

            let accel = (coupled - prev[i]) * k;
            line.energy_velocity += accel * dt_sec;
            line.energy_velocity *= ENERGY_DAMPING;
            line.energy = (prev[i] + line.energy_velocity).clamp(0.0, 1.0);

            let speed = params.base_speed
                * params.speed_multipliers[i]
                * (1.0 + line.energy * ENERGY_SPEED_BOOST);
            line.phase += dt_sec * speed;
        }
    }
}
