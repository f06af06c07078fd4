use crate::constants::MAX_FRAME_DT_SEC;
use crate::energy::LineEnergyModel;
use crate::input::PointerState;
use crate::params::{Background, LineStyle, ParamsError, WaveParams};
use crate::sampler::WaveSampler;
use crate::surface::SurfaceSize;
use glam::Vec2;

/// Drawing primitives the frame step needs from the host.
pub trait Surface {
    fn clear(&mut self, size: SurfaceSize, background: &Background);
    /// First point is a move-to, the rest are line-to.
    fn stroke_polyline(&mut self, points: &[Vec2], style: &LineStyle);
}

/// Turns host timestamps (ms) into bounded frame deltas (s).
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    last_ms: f64,
}

impl FrameClock {
    pub fn new(now_ms: f64) -> Self {
        Self { last_ms: now_ms }
    }

    /// Clamped to [0, MAX_FRAME_DT_SEC] so stalls and clock skew stay stable.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let dt = ((now_ms - self.last_ms) / 1000.0) as f32;
        self.last_ms = now_ms;
        dt.clamp(0.0, MAX_FRAME_DT_SEC)
    }

    pub fn reset(&mut self, now_ms: f64) {
        self.last_ms = now_ms;
    }

    #[inline]
    pub fn last_ms(&self) -> f64 {
        self.last_ms
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameStats {
    pub dt_sec: f32,
    pub lines: usize,
    pub points: usize,
}

pub struct FrameDriver {
    params: WaveParams,
    model: LineEnergyModel,
    clock: FrameClock,
    points: Vec<Vec2>,
}

impl FrameDriver {
    pub fn new(params: WaveParams, seed: u64, now_ms: f64) -> Result<Self, ParamsError> {
        params.validate()?;
        let model = LineEnergyModel::with_seed(&params, seed);
        let points = Vec::with_capacity(params.sample_count + 1);
        Ok(Self {
            params,
            model,
            clock: FrameClock::new(now_ms),
            points,
        })
    }

    #[inline]
    pub fn params(&self) -> &WaveParams {
        &self.params
    }

    #[inline]
    pub fn model(&self) -> &LineEnergyModel {
        &self.model
    }

    /// Restart after a pause without integrating the paused interval.
    pub fn resume(&mut self, now_ms: f64) {
        self.clock.reset(now_ms);
    }

    pub fn step<S: Surface>(
        &mut self,
        now_ms: f64,
        pointer: PointerState,
        size: SurfaceSize,
        surface: &mut S,
    ) -> FrameStats {
        let dt_sec = self.clock.tick(now_ms);

        surface.clear(size, &self.params.background);
        self.model.update(&self.params, &pointer, size.height, dt_sec);

        let sampler = WaveSampler::new(&self.params, &self.model, pointer, size, now_ms);
        let mut stats = FrameStats {
            dt_sec,
            ..Default::default()
        };
        for line in 0..self.params.line_count {
            sampler.trace(line, &mut self.points);
            surface.stroke_polyline(&self.points, &self.params.style);
            stats.lines += 1;
            stats.points += self.points.len();
        }
        log::trace!("[loop] dt={:.4} lines={} points={}", dt_sec, stats.lines, stats.points);
        stats
    }
}
