//! Pointer-driven motion channels.
//!
//! Six spring instances with distinct parameter sets: a pair smoothing the
//! normalized container offset, and a magnet pair per CTA. Everything else the
//! renderer needs (background drift, orb tilt, spotlight, haze) is a linear
//! remap of the smoothed offset, read fresh each frame.

use glam::Vec2;

use crate::constants::*;
use crate::input::PointerOffset;
use crate::spring::{SpringConfig, SpringPair};

const OFFSET_SPRING: SpringConfig = SpringConfig::new(OFFSET_STIFFNESS, OFFSET_DAMPING, OFFSET_MASS);
const MAGNET_SPRING: SpringConfig = SpringConfig::new(MAGNET_STIFFNESS, MAGNET_DAMPING, MAGNET_MASS);

/// Remap a value in [-1, 1] onto [lo, hi].
#[inline]
fn remap(n: f32, lo: f32, hi: f32) -> f32 {
    lo + (n + 1.0) * 0.5 * (hi - lo)
}

pub struct HeroMotion {
    offset: SpringPair,
    primary: SpringPair,
    secondary: SpringPair,
}

impl HeroMotion {
    pub fn new() -> Self {
        Self {
            offset: SpringPair::new(OFFSET_SPRING),
            primary: SpringPair::new(MAGNET_SPRING),
            secondary: SpringPair::new(MAGNET_SPRING),
        }
    }

    /// Feed the latest normalized container offset.
    pub fn set_pointer(&mut self, off: PointerOffset) {
        self.offset.set_target(Vec2::new(off.nx, off.ny));
    }

    /// Pointer left the surface; all channels glide back to rest.
    pub fn clear_pointer(&mut self) {
        self.offset.set_target(Vec2::ZERO);
    }

    /// Magnetic target for the primary CTA from its centered pointer fraction.
    pub fn set_primary_target(&mut self, fraction: Vec2) {
        self.primary.set_target(Vec2::new(
            fraction.x * PRIMARY_MAGNET_SPAN[0],
            fraction.y * PRIMARY_MAGNET_SPAN[1],
        ));
    }

    pub fn clear_primary(&mut self) {
        self.primary.set_target(Vec2::ZERO);
    }

    pub fn set_secondary_target(&mut self, fraction: Vec2) {
        self.secondary.set_target(Vec2::new(
            fraction.x * SECONDARY_MAGNET_SPAN[0],
            fraction.y * SECONDARY_MAGNET_SPAN[1],
        ));
    }

    pub fn clear_secondary(&mut self) {
        self.secondary.set_target(Vec2::ZERO);
    }

    /// Advance all springs in lockstep with the frame loop.
    pub fn advance(&mut self, dt_sec: f32) {
        self.offset.step(dt_sec);
        self.primary.step(dt_sec);
        self.secondary.step(dt_sec);
    }

    /// Smoothed normalized offset, each axis in [-1, 1].
    #[inline]
    pub fn smoothed(&self) -> Vec2 {
        self.offset.value()
    }

    /// Background parallax shift in percent of the surface.
    pub fn background_shift_pct(&self) -> Vec2 {
        let s = self.smoothed();
        Vec2::new(s.x * BG_DRIFT_X_PCT, s.y * BG_DRIFT_Y_PCT)
    }

    /// Orb tilt `(rot_x, rot_y)` in degrees. Vertical movement tips the orb
    /// away from the pointer, horizontal movement toward it.
    pub fn orb_tilt_deg(&self) -> Vec2 {
        let s = self.smoothed();
        Vec2::new(
            remap(s.y, ORB_TILT_X_DEG, -ORB_TILT_X_DEG),
            remap(s.x, -ORB_TILT_Y_DEG, ORB_TILT_Y_DEG),
        )
    }

    /// Spotlight center in percent of the surface.
    pub fn spotlight_pct(&self) -> Vec2 {
        let s = self.smoothed();
        Vec2::new(
            remap(s.x, SPOT_X_RANGE[0], SPOT_X_RANGE[1]),
            remap(s.y, SPOT_Y_RANGE[0], SPOT_Y_RANGE[1]),
        )
    }

    /// Haze drift behind the masked headline, in px.
    pub fn haze_shift_px(&self) -> Vec2 {
        let s = self.smoothed();
        Vec2::new(s.x * HAZE_X_PX, s.y * HAZE_Y_PX)
    }

    #[inline]
    pub fn primary_shift_px(&self) -> Vec2 {
        self.primary.value()
    }

    #[inline]
    pub fn secondary_shift_px(&self) -> Vec2 {
        self.secondary.value()
    }

    /// All channels at rest; the renderer may skip style writes.
    pub fn is_idle(&self) -> bool {
        self.offset.is_settled() && self.primary.is_settled() && self.secondary.is_settled()
    }
}

impl Default for HeroMotion {
    fn default() -> Self {
        Self::new()
    }
}
