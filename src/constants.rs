// Fixed model and host tuning constants shared by the simulation and the web glue.

// Spring-damper
pub const SPRING_CONSTANT: f32 = 6.5; // stiffness at the reference hover smoothing
pub const REFERENCE_HOVER_SMOOTH: f32 = 0.08; // hover_smooth value at which SPRING_CONSTANT applies unscaled
pub const ENERGY_DAMPING: f32 = 0.88; // per-frame velocity decay, not scaled by dt

// Phase
pub const ENERGY_SPEED_BOOST: f32 = 0.15; // full energy speeds a line's wave up by this fraction

// Breathing
pub const BREATHE_RATE_PER_MS: f64 = 0.00035; // angular rate of the global amplitude modulation

// Frame clock
pub const MAX_FRAME_DT_SEC: f32 = 0.033; // longer gaps (backgrounded tab) are clamped to this

// Host surface
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;
pub const MIN_SURFACE_PX: f32 = 1.0;
pub const DEFAULT_CANVAS_ID: &str = "waves";
pub const INIT_MARKER_KEY: &str = "init"; // data-init="1" on an attached canvas
pub const PRESET_KEY: &str = "preset"; // data-preset selects a WaveParams preset
