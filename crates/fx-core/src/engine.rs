//! Pointer-follow animation engine.
//!
//! Keeps a `current` position easing toward a `target` derived from the
//! pointer (or from an idle orbit), plus a set of rotating angles, and
//! publishes them to a [`StyleSink`] once per executed frame. Frames are
//! requested from a [`Scheduler`] only while the surface is visible and there
//! is still motion to show.

use crate::angle::{wrap_degrees, AngleTrack};
use crate::config::{ConfigError, EngineConfig};
use crate::geometry::{
    format_degrees, format_percent, lerp_toward, orbit_point, round_to, within_epsilon,
    SurfaceRect,
};
use crate::host::{FrameHandle, Scheduler, StyleSink, TimeoutHandle};
use crate::shared::{angle_board, AngleReader, AngleWriter};
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Target tracks the pointer.
    Follow,
    /// Target orbits the configured center.
    Idle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Detached,
    Running,
    /// Terminal; nothing is scheduled or written any more.
    TornDown,
}

/// Counters for tests and diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EngineStats {
    pub ticks_run: u64,
    pub ticks_skipped: u64,
    pub frames_requested: u64,
    pub idle_entries: u64,
}

pub struct PointerFollowEngine<S, H> {
    config: EngineConfig,
    sink: S,
    host: H,

    current: Vec2,
    target: Vec2,
    mode: Mode,
    tracks: SmallVec<[AngleTrack; 4]>,
    orbit: Option<AngleTrack>,

    visible: bool,
    lifecycle: Lifecycle,
    pending_frame: Option<FrameHandle>,
    idle_timer: Option<TimeoutHandle>,
    last_tick_ms: Option<f64>,
    last_pointer_ms: Option<f64>,

    angles: AngleWriter,
    reader: AngleReader,
    stats: EngineStats,
}

impl<S: StyleSink, H: Scheduler> PointerFollowEngine<S, H> {
    pub fn new(config: EngineConfig, sink: S, host: H) -> Result<Self, ConfigError> {
        config.validate()?;
        let tracks = config
            .angle_tracks
            .iter()
            .map(|t| AngleTrack::new(t.deg_per_sec, t.phase_deg))
            .collect::<SmallVec<_>>();
        let orbit = config
            .idle_orbit
            .as_ref()
            .map(|o| AngleTrack::new(o.deg_per_sec, 0.0));
        // With an orbit configured there is no pointer input yet, so start idle.
        let (mode, target) = match &config.idle_orbit {
            Some(o) => (Mode::Idle, orbit_point(o.center, o.radius, 0.0)),
            None => (Mode::Follow, config.initial_position),
        };
        let (angles, reader) = angle_board(tracks.len());
        angles.publish(tracks.iter().map(AngleTrack::degrees));
        Ok(Self {
            current: config.initial_position,
            target,
            mode,
            tracks,
            orbit,
            config,
            sink,
            host,
            visible: true,
            lifecycle: Lifecycle::Detached,
            pending_frame: None,
            idle_timer: None,
            last_tick_ms: None,
            last_pointer_ms: None,
            angles,
            reader,
            stats: EngineStats::default(),
        })
    }

    /// Begin animating. The surface is assumed visible until the sensor says otherwise.
    pub fn start(&mut self) {
        if self.lifecycle != Lifecycle::Detached {
            return;
        }
        self.lifecycle = Lifecycle::Running;
        log::debug!("[hero] start mode={:?} visible={}", self.mode, self.visible);
        self.ensure_scheduled();
    }

    /// Release the pending frame and idle timer. Nothing is written afterwards.
    pub fn stop(&mut self) {
        if self.lifecycle == Lifecycle::TornDown {
            return;
        }
        self.cancel_frame();
        if let Some(t) = self.idle_timer.take() {
            self.host.clear_timeout(t);
        }
        self.last_tick_ms = None;
        self.lifecycle = Lifecycle::TornDown;
        log::debug!("[hero] stopped after {} ticks", self.stats.ticks_run);
    }

    /// Retarget from a pointer sample in client coordinates. `rect` is the
    /// surface's current bounding box; `None` means there is no live surface.
    pub fn on_pointer_move(&mut self, client: Vec2, rect: Option<SurfaceRect>, now_ms: f64) {
        if self.lifecycle != Lifecycle::Running {
            return;
        }
        if let (Some(min), Some(last)) = (self.config.min_pointer_interval_ms, self.last_pointer_ms)
        {
            if now_ms - last < min {
                return;
            }
        }
        let Some(pct) = rect.and_then(|r| r.to_percent(client)) else {
            return;
        };
        self.last_pointer_ms = Some(now_ms);
        let decimals = self.config.round_decimals;
        self.target = Vec2::new(round_to(pct.x, decimals), round_to(pct.y, decimals));

        if self.config.idle_orbit.is_some() {
            if self.mode != Mode::Follow {
                log::debug!("[hero] mode -> Follow");
            }
            self.mode = Mode::Follow;
            self.restart_idle_timer();
        }
        self.ensure_scheduled();
    }

    pub fn on_visibility_change(&mut self, visible: bool) {
        let was_visible = self.visible;
        self.visible = visible;
        if self.lifecycle != Lifecycle::Running {
            return;
        }
        if visible && !was_visible {
            // Re-anchor so the first resumed tick sees a zero delta instead of
            // the whole hidden interval.
            self.last_tick_ms = None;
            self.ensure_scheduled();
        } else if !visible {
            self.cancel_frame();
        }
    }

    /// Quiescence timer callback: the pointer has been still long enough.
    pub fn on_idle_timeout(&mut self) {
        if self.idle_timer.take().is_none() || self.lifecycle != Lifecycle::Running {
            return;
        }
        if self.mode != Mode::Idle {
            self.mode = Mode::Idle;
            self.stats.idle_entries += 1;
            log::debug!("[hero] mode -> Idle");
        }
        self.ensure_scheduled();
    }

    /// Frame callback. `time_ms` is the scheduler's timestamp for this frame.
    pub fn tick(&mut self, time_ms: f64) {
        // Nothing pending means this callback was cancelled or outlived the engine.
        if self.pending_frame.take().is_none()
            || self.lifecycle != Lifecycle::Running
            || !self.visible
        {
            return;
        }

        if let Some(last) = self.last_tick_ms {
            if time_ms - last < self.config.min_frame_interval_ms {
                self.stats.ticks_skipped += 1;
                self.schedule_frame();
                return;
            }
        }
        let delta_ms = self
            .last_tick_ms
            .map_or(0.0, |last| (time_ms - last).max(0.0));
        self.last_tick_ms = Some(time_ms);
        self.stats.ticks_run += 1;

        for track in &mut self.tracks {
            track.advance(delta_ms);
        }
        if let Some(orbit) = &mut self.orbit {
            orbit.advance(delta_ms);
        }
        if self.mode == Mode::Idle {
            if let (Some(cfg), Some(orbit)) = (&self.config.idle_orbit, &self.orbit) {
                self.target = orbit_point(cfg.center, cfg.radius, orbit.degrees());
            }
        }

        self.current = lerp_toward(self.current, self.target, self.config.lerp_factor);
        self.publish();

        let settled = within_epsilon(self.current, self.target, self.config.converge_epsilon);
        if self.mode == Mode::Idle || !settled {
            self.schedule_frame();
        } else {
            // The next session starts from a zero delta, like a resume.
            self.last_tick_ms = None;
            log::debug!(
                "[hero] settled at ({:.2},{:.2}); session ends",
                self.current.x,
                self.current.y
            );
        }
    }

    fn publish(&mut self) {
        let decimals = self.config.round_decimals;
        let x = round_to(self.current.x, decimals);
        let y = round_to(self.current.y, decimals);
        self.sink
            .set_property(&self.config.x_property, &format_percent(x));
        self.sink
            .set_property(&self.config.y_property, &format_percent(y));

        for (track, cfg) in self.tracks.iter().zip(&self.config.angle_tracks) {
            // Rounding can land on exactly 360, so wrap again afterwards.
            let deg = wrap_degrees(round_to(track.degrees(), decimals));
            self.sink.set_property(&cfg.property, &format_degrees(deg));
            if let Some(mirror) = &cfg.mirror_property {
                self.sink
                    .set_property(mirror, &format_degrees(wrap_degrees(-deg)));
            }
        }
        self.angles
            .publish(self.tracks.iter().map(AngleTrack::degrees));
    }

    fn ensure_scheduled(&mut self) {
        if self.lifecycle == Lifecycle::Running && self.visible && self.pending_frame.is_none() {
            self.schedule_frame();
        }
    }

    fn schedule_frame(&mut self) {
        self.pending_frame = self.host.request_frame();
        if self.pending_frame.is_some() {
            self.stats.frames_requested += 1;
        }
    }

    fn cancel_frame(&mut self) {
        if let Some(f) = self.pending_frame.take() {
            self.host.cancel_frame(f);
        }
    }

    fn restart_idle_timer(&mut self) {
        if let Some(t) = self.idle_timer.take() {
            self.host.clear_timeout(t);
        }
        if let Some(orbit) = &self.config.idle_orbit {
            self.idle_timer = self.host.set_timeout(orbit.quiescence_ms);
        }
    }
}

impl<S, H> PointerFollowEngine<S, H> {
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn current(&self) -> Vec2 {
        self.current
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// True while a frame is pending, i.e. an animation session is active.
    pub fn is_animating(&self) -> bool {
        self.pending_frame.is_some()
    }

    pub fn angle(&self, index: usize) -> Option<f32> {
        self.tracks.get(index).map(AngleTrack::degrees)
    }

    pub fn track(&self, index: usize) -> Option<&AngleTrack> {
        self.tracks.get(index)
    }

    /// Read-only view of the published angles for other components.
    pub fn angles(&self) -> AngleReader {
        self.reader.clone()
    }

    pub fn stats(&self) -> EngineStats {
        self.stats
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
