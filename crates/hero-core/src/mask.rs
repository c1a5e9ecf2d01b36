//! Rate-limited smoke-mask positioning.
//!
//! Pointer-move events arrive far more often than frames render. The
//! scheduler coalesces a burst into a single publication per frame: record
//! the latest desired position, hand out one "schedule a callback" signal,
//! and rebuild the descriptor when the callback runs.

use crate::constants::{MASK_SPAN_X_PCT, MASK_SPAN_Y_PCT};
use crate::input::PointerOffset;

/// Circular reveal region over the masked headline.
///
/// Position is in percent of the masked element; radius is fixed per render
/// from configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaskDescriptor {
    pub x_percent: f32,
    pub y_percent: f32,
    pub radius_px: f32,
}

impl MaskDescriptor {
    pub fn centered(radius_px: f32) -> Self {
        Self {
            x_percent: 50.0,
            y_percent: 50.0,
            radius_px,
        }
    }
}

/// Coalesces pointer-move bursts into at most one mask update per frame.
#[derive(Clone, Copy, Debug)]
pub struct MaskScheduler {
    radius_px: f32,
    x_percent: f32,
    y_percent: f32,
    pending: bool,
}

impl MaskScheduler {
    pub fn new(radius_px: f32) -> Self {
        Self {
            radius_px,
            x_percent: 50.0,
            y_percent: 50.0,
            pending: false,
        }
    }

    /// Record the latest desired position.
    ///
    /// Returns `true` exactly when the caller should schedule a frame
    /// callback; while one is already pending, further requests only
    /// overwrite the recorded position.
    pub fn request(&mut self, off: PointerOffset) -> bool {
        self.x_percent = (50.0 + off.nx * MASK_SPAN_X_PCT)
            .clamp(50.0 - MASK_SPAN_X_PCT, 50.0 + MASK_SPAN_X_PCT);
        self.y_percent = (50.0 + off.ny * MASK_SPAN_Y_PCT)
            .clamp(50.0 - MASK_SPAN_Y_PCT, 50.0 + MASK_SPAN_Y_PCT);
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Run the scheduled update: clear the flag and publish the descriptor
    /// for the most recent request.
    pub fn run(&mut self) -> MaskDescriptor {
        self.pending = false;
        self.descriptor()
    }

    /// Pointer-leave path: re-center immediately, bypassing rate limiting.
    ///
    /// The recorded position is re-centered too, so a callback that is still
    /// scheduled republishes the same centered value.
    pub fn reset(&mut self) -> MaskDescriptor {
        self.x_percent = 50.0;
        self.y_percent = 50.0;
        self.descriptor()
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    #[inline]
    pub fn descriptor(&self) -> MaskDescriptor {
        MaskDescriptor {
            x_percent: self.x_percent,
            y_percent: self.y_percent,
            radius_px: self.radius_px,
        }
    }
}
