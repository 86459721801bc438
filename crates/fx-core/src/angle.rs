//! Continuously rotating angle tracks.

/// Reduce any angle into `[0, 360)`.
#[inline]
pub fn wrap_degrees(degrees: f32) -> f32 {
    let r = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

/// Closed-form angle after `elapsed_ms` from `phase_deg` at `deg_per_sec`.
#[inline]
pub fn angle_at(deg_per_sec: f32, phase_deg: f32, elapsed_ms: f64) -> f32 {
    let raw = phase_deg as f64 + deg_per_sec as f64 * elapsed_ms / 1000.0;
    wrap_degrees(raw.rem_euclid(360.0) as f32)
}

/// Shortest distance between two angles on the circle, in degrees.
#[inline]
pub fn angular_distance(a: f32, b: f32) -> f32 {
    let d = wrap_degrees(a - b);
    d.min(360.0 - d)
}

/// An angle advanced by elapsed time; always stored wrapped.
#[derive(Clone, Debug, PartialEq)]
pub struct AngleTrack {
    degrees: f32,
    deg_per_sec: f32,
}

impl AngleTrack {
    pub fn new(deg_per_sec: f32, phase_deg: f32) -> Self {
        Self {
            degrees: wrap_degrees(phase_deg),
            deg_per_sec,
        }
    }

    pub fn degrees(&self) -> f32 {
        self.degrees
    }

    pub fn deg_per_sec(&self) -> f32 {
        self.deg_per_sec
    }

    /// Advance by `delta_ms` and return the new wrapped angle.
    pub fn advance(&mut self, delta_ms: f64) -> f32 {
        self.degrees = angle_at(self.deg_per_sec, self.degrees, delta_ms);
        self.degrees
    }

    /// Time for one full turn, or `None` for a stationary track.
    pub fn period_ms(&self) -> Option<f64> {
        (self.deg_per_sec != 0.0).then(|| 360_000.0 / self.deg_per_sec.abs() as f64)
    }
}
