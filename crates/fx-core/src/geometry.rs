//! Surface-relative geometry for the pointer-follow engine.
//!
//! Positions are percentages of the animated surface's bounding box, which is
//! what the CSS gradient consumes directly.

use glam::Vec2;

/// Bounding box of the animated surface in client (viewport) pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl SurfaceRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Map a client-space point to percentages of this box.
    ///
    /// Returns `None` for a collapsed box (not laid out yet, or detached).
    /// Points outside the box map outside `[0, 100]`; nothing is clamped.
    pub fn to_percent(&self, client: Vec2) -> Option<Vec2> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return None;
        }
        Some(Vec2::new(
            (client.x - self.left) / self.width * 100.0,
            (client.y - self.top) / self.height * 100.0,
        ))
    }
}

/// One geometric smoothing step: move `factor` of the remaining distance.
#[inline]
pub fn lerp_toward(current: Vec2, target: Vec2, factor: f32) -> Vec2 {
    current + (target - current) * factor
}

/// True when both axes are within `epsilon` of each other.
#[inline]
pub fn within_epsilon(a: Vec2, b: Vec2, epsilon: f32) -> bool {
    (a.x - b.x).abs() <= epsilon && (a.y - b.y).abs() <= epsilon
}

#[inline]
pub fn round_to(value: f32, decimals: Option<u32>) -> f32 {
    match decimals {
        Some(d) => {
            let scale = 10f32.powi(d as i32);
            (value * scale).round() / scale
        }
        None => value,
    }
}

/// Point on a circle of `radius` around `center` at `degrees`.
#[inline]
pub fn orbit_point(center: Vec2, radius: f32, degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    center + Vec2::new(cos, sin) * radius
}

/// Format a percentage style value, e.g. `50.25%`.
pub fn format_percent(value: f32) -> String {
    // adding 0.0 turns -0.0 into 0.0
    format!("{}%", value + 0.0)
}

/// Format an angle style value, e.g. `123.4deg`.
pub fn format_degrees(value: f32) -> String {
    format!("{}deg", value + 0.0)
}
