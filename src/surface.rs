use crate::constants::{MAX_DEVICE_PIXEL_RATIO, MIN_SURFACE_PX};

/// Drawable size in CSS pixels, as read from the host each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    /// Floors both sides at one pixel so collapsed layouts still sample safely.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(MIN_SURFACE_PX),
            height: height.max(MIN_SURFACE_PX),
        }
    }
}

/// Canvas backing store derived from a CSS size and the device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackingStore {
    pub width_px: u32,
    pub height_px: u32,
    pub scale: f64,
}

pub fn backing_store(css: SurfaceSize, device_pixel_ratio: f64) -> BackingStore {
    let scale = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(MAX_DEVICE_PIXEL_RATIO)
    } else {
        1.0
    };
    let width_px = (css.width as f64 * scale).floor() as u32;
    let height_px = (css.height as f64 * scale).floor() as u32;
    BackingStore {
        width_px: width_px.max(1),
        height_px: height_px.max(1),
        scale,
    }
}
