use glam::Vec2;

/// Bounding box of a tracked element, in CSS pixels.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Pointer position rescaled to [-1, 1] per axis, 0 at the element center.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerOffset {
    pub nx: f32,
    pub ny: f32,
}

impl PointerOffset {
    pub const CENTER: Self = Self { nx: 0.0, ny: 0.0 };

    pub fn new(nx: f32, ny: f32) -> Self {
        Self { nx, ny }
    }
}

// ---------------- Pointer helpers ----------------

/// Normalize a client-space pointer position against an element's bounds.
///
/// Components are always clamped to [-1, 1]; a degenerate rectangle yields
/// the centered offset.
#[inline]
pub fn normalized_offset(client: Vec2, bounds: Bounds) -> PointerOffset {
    if bounds.width <= 0.0 || bounds.height <= 0.0 {
        return PointerOffset::CENTER;
    }
    let fx = (client.x - bounds.left) / bounds.width;
    let fy = (client.y - bounds.top) / bounds.height;
    PointerOffset {
        nx: ((fx - 0.5) * 2.0).clamp(-1.0, 1.0),
        ny: ((fy - 0.5) * 2.0).clamp(-1.0, 1.0),
    }
}

/// Pointer position as a signed fraction of an element, 0 at center.
///
/// Used for the CTA magnets; events delivered inside the element keep both
/// components within [-0.5, 0.5].
#[inline]
pub fn centered_fraction(client: Vec2, bounds: Bounds) -> Vec2 {
    if bounds.width <= 0.0 || bounds.height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (client.x - bounds.left) / bounds.width - 0.5,
        (client.y - bounds.top) / bounds.height - 0.5,
    )
}
