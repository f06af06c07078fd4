use glam::Vec2;

/// Latest pointer position in surface-local CSS pixels.
///
/// Written by the pointer listeners, read once per frame as a copy.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub inside: bool,
}

impl PointerState {
    #[inline]
    pub fn move_to(&mut self, pos: Vec2) {
        self.x = pos.x;
        self.y = pos.y;
        self.inside = true;
    }

    /// Keeps the last coordinates; only validity is dropped.
    #[inline]
    pub fn leave(&mut self) {
        self.inside = false;
    }

    #[inline]
    pub fn position(&self) -> Option<Vec2> {
        self.inside.then(|| Vec2::new(self.x, self.y))
    }
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn client_to_local(client: Vec2, rect_origin: Vec2) -> Vec2 {
    client - rect_origin
}

/// Squared linear falloff: 1 at distance 0, 0 at or beyond `radius`.
#[inline]
pub fn proximity_falloff(distance: f32, radius: f32) -> f32 {
    let n = (1.0 - distance.abs() / radius).clamp(0.0, 1.0);
    n * n
}
