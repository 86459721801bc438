//! Engine and cycling configuration.
//!
//! Every knob is an explicit field with a documented default so that hosts
//! never have to branch on the rendering platform; they pick a
//! [`TimingPreset`] or override fields instead.

use crate::constants::*;
use glam::Vec2;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("lerp factor {0} must lie strictly between 0 and 1")]
    LerpFactor(f32),
    #[error("{name} must be a finite, non-negative number of milliseconds (got {value})")]
    Interval { name: &'static str, value: f64 },
    #[error("convergence epsilon {0} must be positive")]
    Epsilon(f32),
    #[error("idle orbit radius {0} must be finite and non-negative")]
    OrbitRadius(f32),
    #[error("angular speed {0} must be finite")]
    Speed(f32),
    #[error("style property name must not be empty")]
    EmptyProperty,
    #[error("round_decimals {0} exceeds the maximum of {MAX_ROUND_DECIMALS}")]
    RoundDecimals(u32),
    #[error("unknown timing preset '{0}'")]
    UnknownPreset(String),
}

/// One rotating angle published to the style sink.
#[derive(Clone, Debug, PartialEq)]
pub struct AngleTrackConfig {
    pub property: String,
    /// Also publish `(360 - angle) mod 360` under this name.
    pub mirror_property: Option<String>,
    pub deg_per_sec: f32,
    pub phase_deg: f32,
}

impl AngleTrackConfig {
    pub fn new(property: impl Into<String>, deg_per_sec: f32) -> Self {
        Self {
            property: property.into(),
            mirror_property: None,
            deg_per_sec,
            phase_deg: 0.0,
        }
    }

    pub fn with_mirror(mut self, property: impl Into<String>) -> Self {
        self.mirror_property = Some(property.into());
        self
    }

    pub fn with_phase(mut self, phase_deg: f32) -> Self {
        self.phase_deg = phase_deg;
        self
    }
}

/// Synthetic circular target used after the pointer has been still for a while.
#[derive(Clone, Debug, PartialEq)]
pub struct IdleOrbit {
    pub center: Vec2,
    pub radius: f32,
    pub deg_per_sec: f32,
    pub quiescence_ms: f64,
}

impl Default for IdleOrbit {
    fn default() -> Self {
        Self {
            center: Vec2::splat(SURFACE_CENTER_PCT),
            radius: ORBIT_RADIUS_PCT,
            deg_per_sec: ORBIT_DEG_PER_SEC,
            quiescence_ms: IDLE_TIMEOUT_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    pub x_property: String,
    pub y_property: String,
    pub initial_position: Vec2,
    /// Fraction of the remaining distance covered per executed tick.
    pub lerp_factor: f32,
    /// Ticks closer together than this are skipped (but rescheduled).
    pub min_frame_interval_ms: f64,
    /// Pointer samples closer together than this are dropped; `None` accepts all.
    pub min_pointer_interval_ms: Option<f64>,
    /// Per-axis distance below which the position counts as settled.
    pub converge_epsilon: f32,
    /// Decimal places kept in published values; `None` publishes full precision.
    pub round_decimals: Option<u32>,
    pub angle_tracks: Vec<AngleTrackConfig>,
    /// Enables the Follow/Idle mode switch when present.
    pub idle_orbit: Option<IdleOrbit>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            x_property: NOISE_X_PROPERTY.to_string(),
            y_property: NOISE_Y_PROPERTY.to_string(),
            initial_position: Vec2::splat(SURFACE_CENTER_PCT),
            lerp_factor: LERP_FACTOR,
            min_frame_interval_ms: FRAME_INTERVAL_MS,
            min_pointer_interval_ms: Some(POINTER_INTERVAL_MS),
            converge_epsilon: CONVERGE_EPSILON,
            round_decimals: Some(PUBLISH_DECIMALS),
            angle_tracks: vec![
                AngleTrackConfig::new(CONIC_ANGLE_PROPERTY, GRADIENT_DEG_PER_SEC)
                    .with_mirror(CONIC_ANGLE_REVERSE_PROPERTY),
                AngleTrackConfig::new(TEXT_ANGLE_PROPERTY, TEXT_DEG_PER_SEC)
                    .with_phase(TEXT_PHASE_OFFSET_DEG),
            ],
            idle_orbit: Some(IdleOrbit::default()),
        }
    }
}

impl EngineConfig {
    pub fn with_preset(mut self, preset: TimingPreset) -> Self {
        match preset {
            TimingPreset::Standard => {
                self.lerp_factor = LERP_FACTOR;
                self.min_frame_interval_ms = FRAME_INTERVAL_MS;
            }
            TimingPreset::Smooth => {
                self.lerp_factor = SMOOTH_LERP_FACTOR;
                self.min_frame_interval_ms = SMOOTH_FRAME_INTERVAL_MS;
            }
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.lerp_factor > 0.0 && self.lerp_factor < 1.0) {
            return Err(ConfigError::LerpFactor(self.lerp_factor));
        }
        check_interval("min_frame_interval_ms", self.min_frame_interval_ms)?;
        if let Some(ms) = self.min_pointer_interval_ms {
            check_interval("min_pointer_interval_ms", ms)?;
        }
        if let Some(d) = self.round_decimals {
            if d > MAX_ROUND_DECIMALS {
                return Err(ConfigError::RoundDecimals(d));
            }
        }
        if !(self.converge_epsilon > 0.0) {
            return Err(ConfigError::Epsilon(self.converge_epsilon));
        }
        if self.x_property.is_empty() || self.y_property.is_empty() {
            return Err(ConfigError::EmptyProperty);
        }
        for track in &self.angle_tracks {
            if track.property.is_empty() || track.mirror_property.as_deref() == Some("") {
                return Err(ConfigError::EmptyProperty);
            }
            if !track.deg_per_sec.is_finite() || !track.phase_deg.is_finite() {
                return Err(ConfigError::Speed(track.deg_per_sec));
            }
        }
        if let Some(orbit) = &self.idle_orbit {
            if !(orbit.radius >= 0.0 && orbit.radius.is_finite()) {
                return Err(ConfigError::OrbitRadius(orbit.radius));
            }
            if !orbit.deg_per_sec.is_finite() {
                return Err(ConfigError::Speed(orbit.deg_per_sec));
            }
            if !(orbit.quiescence_ms > 0.0) {
                return Err(ConfigError::Interval {
                    name: "quiescence_ms",
                    value: orbit.quiescence_ms,
                });
            }
            check_interval("quiescence_ms", orbit.quiescence_ms)?;
        }
        Ok(())
    }
}

fn check_interval(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Interval { name, value })
    }
}

/// Frame pacing profile chosen by the host page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimingPreset {
    #[default]
    Standard,
    /// Lower lerp factor and coarser frame interval for engines with
    /// irregular animation timing.
    Smooth,
}

impl FromStr for TimingPreset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "standard" => Ok(Self::Standard),
            "smooth" => Ok(Self::Smooth),
            other => Err(ConfigError::UnknownPreset(other.to_string())),
        }
    }
}

/// Auto-advance settings for a cycling sequence (image cascade, testimonials).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CycleConfig {
    /// Delay between advances; `None` falls back to the widget's default.
    pub interval_ms: Option<u32>,
    pub autoplay: bool,
}

impl CycleConfig {
    /// Image cascade: always cycles, every 3 s unless overridden.
    pub fn cascade() -> Self {
        Self {
            interval_ms: Some(CASCADE_INTERVAL_MS),
            autoplay: true,
        }
    }

    /// Testimonials: manual by default, 5 s when autoplay is on.
    pub fn testimonials() -> Self {
        Self {
            interval_ms: Some(TESTIMONIAL_INTERVAL_MS),
            autoplay: false,
        }
    }

    /// Apply `data-interval` / `data-autoplay` style overrides. Unparseable or
    /// zero intervals keep the current value.
    pub fn with_attributes(mut self, interval: Option<&str>, autoplay: Option<&str>) -> Self {
        if let Some(ms) = interval
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|ms| *ms > 0)
        {
            self.interval_ms = Some(ms);
        }
        if let Some(flag) = autoplay {
            self.autoplay = !matches!(flag.trim(), "false" | "0" | "off");
        }
        self
    }

    /// Interval for the auto-advance timer, or `None` when no timer should run.
    pub fn autoplay_interval(&self, len: usize) -> Option<u32> {
        if !self.autoplay || len < 2 {
            return None;
        }
        self.interval_ms
    }
}
