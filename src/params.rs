use thiserror::Error;

// Static parameter sets for the wave lines. Two presets are built in; both
// go through `validate` before a `FrameDriver` accepts them.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

impl LineCap {
    pub fn as_str(self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

impl LineJoin {
    pub fn as_str(self) -> &'static str {
        match self {
            LineJoin::Miter => "miter",
            LineJoin::Round => "round",
            LineJoin::Bevel => "bevel",
        }
    }
}

/// Stroke style shared by every line.
#[derive(Clone, Debug, PartialEq)]
pub struct LineStyle {
    pub color: String,
    pub width: f32,
    pub cap: LineCap,
    pub join: LineJoin,
}

/// What the surface is reset to before lines are drawn each frame.
#[derive(Clone, Debug, PartialEq)]
pub enum Background {
    Transparent,
    Solid(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct WaveParams {
    pub line_count: usize,
    pub style: LineStyle,
    pub background: Background,

    // Layout
    pub center_y_fraction: f32,
    pub line_separation_px: f32,

    // Idle motion
    pub base_amplitude_px: f32,
    pub base_speed: f32,
    pub base_frequency: f32,
    pub breathe_amplitude_fraction: f32,

    // Pointer response
    pub hover_amplitude_px: f32,
    pub hover_radius_px: f32,
    pub hover_smooth: f32,
    pub lift_focus: f32,
    pub coupling_factor: f32,

    // Rendering
    pub sample_count: usize,

    // Per-line variation
    pub phase_spread: f32,
    pub speed_multipliers: Vec<f32>,
    pub amplitude_multipliers: Vec<f32>,
}

#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("line_count must be at least 1")]
    NoLines,
    #[error("{name} has {actual} entries, expected {expected} (one per line)")]
    MultiplierLength {
        name: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("sample_count must be at least 2, got {0}")]
    TooFewSamples(usize),
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{name} must lie in [0, 1], got {value}")]
    OutOfUnitRange { name: &'static str, value: f32 },
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },
}

impl Default for WaveParams {
    fn default() -> Self {
        Self::resonance()
    }
}

impl WaveParams {
    pub fn resonance() -> Self {
        Self {
            line_count: 3,
            style: LineStyle {
                color: "rgba(255,59,26,0.85)".to_string(),
                width: 1.2,
                cap: LineCap::Round,
                join: LineJoin::Round,
            },
            background: Background::Transparent,
            center_y_fraction: 0.52,
            line_separation_px: 12.0,
            base_amplitude_px: 5.0,
            base_speed: 0.16,
            base_frequency: 0.008,
            breathe_amplitude_fraction: 0.12,
            hover_amplitude_px: 70.0,
            hover_radius_px: 240.0,
            hover_smooth: 0.08,
            lift_focus: 1.05,
            coupling_factor: 0.38,
            sample_count: 260,
            phase_spread: 1.2,
            speed_multipliers: vec![1.0, 0.85, 0.7],
            amplitude_multipliers: vec![1.15, 0.95, 1.2],
        }
    }

    /// Tighter, calmer variant: lines sit closer together and react less.
    pub fn soft() -> Self {
        Self {
            line_separation_px: 10.0,
            base_amplitude_px: 4.0,
            base_speed: 0.18,
            base_frequency: 0.0085,
            breathe_amplitude_fraction: 0.10,
            hover_amplitude_px: 58.0,
            hover_radius_px: 220.0,
            lift_focus: 0.95,
            coupling_factor: 0.35,
            phase_spread: 1.1,
            speed_multipliers: vec![1.0, 0.86, 0.72],
            amplitude_multipliers: vec![1.10, 0.92, 1.18],
            ..Self::resonance()
        }
    }

    pub fn from_preset_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "" | "resonance" => Some(Self::resonance()),
            "soft" => Some(Self::soft()),
            _ => None,
        }
    }

    /// Geometric center of the line set; fractional for even line counts.
    #[inline]
    pub fn mid_index(&self) -> f32 {
        (self.line_count.saturating_sub(1)) as f32 * 0.5
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.line_count == 0 {
            return Err(ParamsError::NoLines);
        }
        for (name, seq) in [
            ("speed_multipliers", &self.speed_multipliers),
            ("amplitude_multipliers", &self.amplitude_multipliers),
        ] {
            if seq.len() != self.line_count {
                return Err(ParamsError::MultiplierLength {
                    name,
                    expected: self.line_count,
                    actual: seq.len(),
                });
            }
        }
        if self.sample_count < 2 {
            return Err(ParamsError::TooFewSamples(self.sample_count));
        }
        for (name, value) in [
            ("hover_radius_px", self.hover_radius_px),
            ("hover_smooth", self.hover_smooth),
            ("style.width", self.style.width),
        ] {
            // also rejects NaN
            if !(value > 0.0) {
                return Err(ParamsError::NotPositive { name, value });
            }
        }
        for (name, value) in [
            ("center_y_fraction", self.center_y_fraction),
            ("coupling_factor", self.coupling_factor),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ParamsError::OutOfUnitRange { name, value });
            }
        }
        // phase only ever accumulates forward
        let speeds = self
            .speed_multipliers
            .iter()
            .map(|&v| ("speed_multipliers", v));
        for (name, value) in [("lift_focus", self.lift_focus), ("base_speed", self.base_speed)]
            .into_iter()
            .chain(speeds)
        {
            if !(value >= 0.0) {
                return Err(ParamsError::Negative { name, value });
            }
        }
        Ok(())
    }
}
