// Default tuning shared by the web front-end and the native preview runner.

// Style properties written to the hero surface
pub const NOISE_X_PROPERTY: &str = "--noise-x";
pub const NOISE_Y_PROPERTY: &str = "--noise-y";
pub const CONIC_ANGLE_PROPERTY: &str = "--conic-angle";
pub const CONIC_ANGLE_REVERSE_PROPERTY: &str = "--conic-angle-reverse";
pub const TEXT_ANGLE_PROPERTY: &str = "--text-angle";

// Frame pacing
pub const FRAME_INTERVAL_MS: f64 = 20.0; // min gap between executed ticks
pub const SMOOTH_FRAME_INTERVAL_MS: f64 = 32.0; // coarser pacing for engines that stutter at 20 ms
pub const POINTER_INTERVAL_MS: f64 = 80.0; // min gap between accepted pointer samples

// Interpolation
pub const LERP_FACTOR: f32 = 0.08;
pub const SMOOTH_LERP_FACTOR: f32 = 0.06;
pub const CONVERGE_EPSILON: f32 = 0.1; // percent, per axis
pub const PUBLISH_DECIMALS: u32 = 2;
pub const MAX_ROUND_DECIMALS: u32 = 6; // beyond this f32 scaling loses the value

// Surface geometry (percent of the bounding box)
pub const SURFACE_CENTER_PCT: f32 = 50.0;

// Rotation speeds (degrees per second)
pub const GRADIENT_DEG_PER_SEC: f32 = 80.0;
pub const TEXT_DEG_PER_SEC: f32 = 78.0; // slightly slower so text drifts against the gradient
pub const TEXT_PHASE_OFFSET_DEG: f32 = 0.0;

// Idle orbit
pub const IDLE_TIMEOUT_MS: f64 = 2000.0;
pub const ORBIT_RADIUS_PCT: f32 = 18.0;
pub const ORBIT_DEG_PER_SEC: f32 = 24.0;

// Sequence cycling
pub const CASCADE_INTERVAL_MS: u32 = 3000;
pub const TESTIMONIAL_INTERVAL_MS: u32 = 5000;
pub const TESTIMONIAL_TILT_MAX_DEG: i32 = 10;
