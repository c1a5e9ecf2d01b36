//! Coarse responsive layout state derived from viewport width.

use crate::constants::COMPACT_BREAKPOINT_PX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    Compact,
    Wide,
}

impl LayoutMode {
    #[inline]
    pub fn from_width(viewport_width: f64) -> Self {
        if viewport_width < COMPACT_BREAKPOINT_PX {
            LayoutMode::Compact
        } else {
            LayoutMode::Wide
        }
    }

    #[inline]
    pub fn is_compact(self) -> bool {
        matches!(self, LayoutMode::Compact)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LayoutMode::Compact => "compact",
            LayoutMode::Wide => "wide",
        }
    }
}

/// Publishes a layout mode only when it differs from the last observation.
///
/// The first observation always publishes. Consumers must tolerate redundant
/// identical publications anyway, so suppression here is an optimization,
/// not a contract they rely on.
#[derive(Clone, Copy, Debug, Default)]
pub struct BreakpointDetector {
    current: Option<LayoutMode>,
}

impl BreakpointDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, viewport_width: f64) -> Option<LayoutMode> {
        let next = LayoutMode::from_width(viewport_width);
        if self.current == Some(next) {
            return None;
        }
        self.current = Some(next);
        Some(next)
    }

    #[inline]
    pub fn current(&self) -> Option<LayoutMode> {
        self.current
    }
}
