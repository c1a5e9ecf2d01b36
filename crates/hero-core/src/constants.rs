// Shared animation and layout tuning constants used by the web frontend.

// Responsive breakpoint
pub const COMPACT_BREAKPOINT_PX: f64 = 980.0; // below this the hero collapses to one column
pub const COMPACT_ORB_SCALE: f32 = 0.72; // orb shrink factor in compact layout

// Container offset smoothing (per-axis spring)
pub const OFFSET_STIFFNESS: f32 = 140.0;
pub const OFFSET_DAMPING: f32 = 24.0;
pub const OFFSET_MASS: f32 = 0.65;

// CTA magnet springs
pub const MAGNET_STIFFNESS: f32 = 320.0;
pub const MAGNET_DAMPING: f32 = 26.0;
pub const MAGNET_MASS: f32 = 1.0;

// Magnetic shift per unit of centered pointer fraction, in px
pub const PRIMARY_MAGNET_SPAN: [f32; 2] = [14.0, 10.0];
pub const SECONDARY_MAGNET_SPAN: [f32; 2] = [10.0, 8.0];

// Background parallax drift at |n| = 1, in percent
pub const BG_DRIFT_X_PCT: f32 = 2.8;
pub const BG_DRIFT_Y_PCT: f32 = 2.2;

// Orb tilt at |n| = 1, in degrees
pub const ORB_TILT_X_DEG: f32 = 6.0;
pub const ORB_TILT_Y_DEG: f32 = 8.0;

// Spotlight travel, in percent of the surface
pub const SPOT_X_RANGE: [f32; 2] = [35.0, 65.0];
pub const SPOT_Y_RANGE: [f32; 2] = [38.0, 62.0];

// Haze drift behind the masked headline, in px
pub const HAZE_X_PX: f32 = 18.0;
pub const HAZE_Y_PX: f32 = 12.0;

// Smoke mask travel around center, in percent
pub const MASK_SPAN_X_PCT: f32 = 14.0;
pub const MASK_SPAN_Y_PCT: f32 = 10.0;

// Spring integration
pub const MAX_FRAME_DT_SEC: f32 = 0.05; // cap dt after a backgrounded tab resumes
pub const SETTLE_EPSILON: f32 = 1e-3;

// Headline entrance
pub const ENTRANCE_DURATION_SEC: f32 = 0.85;
pub const ENTRANCE_BEZIER: [f32; 4] = [0.2, 0.8, 0.2, 1.0];
pub const ENTRANCE_BLUR_PX: f32 = 10.0;
pub const ENTRANCE_RISE_PX: f32 = 14.0;

// Ambient loops
pub const MARQUEE_PERIOD_SEC: f32 = 10.0;
pub const MARQUEE_DISTANCE_PX: f32 = 420.0;
pub const FLOAT_PERIOD_SEC: f32 = 1.6;
pub const FLOAT_AMPLITUDE_PX: f32 = 6.0;
