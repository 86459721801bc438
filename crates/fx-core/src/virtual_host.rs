//! Deterministic host for running the engine without a browser: a virtual
//! clock that fires frames and timeouts on demand, and a sink that records
//! every style write.

use crate::engine::PointerFollowEngine;
use crate::host::{FrameHandle, Scheduler, StyleSink, TimeoutHandle};
use fnv::FnvHashMap;

#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    values: FnvHashMap<String, String>,
    writes: usize,
}

impl RecordingSink {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Parse a value like `12.5%` or `90deg` back into its number.
    pub fn number(&self, name: &str) -> Option<f32> {
        let raw = self.get(name)?;
        raw.trim_end_matches('%')
            .trim_end_matches("deg")
            .parse()
            .ok()
    }

    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl StyleSink for RecordingSink {
    fn set_property(&mut self, name: &str, value: &str) {
        self.writes += 1;
        self.values.insert(name.to_string(), value.to_string());
    }
}

/// Scheduler on a virtual millisecond clock.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    now_ms: f64,
    next_id: i32,
    frame: Option<FrameHandle>,
    timeouts: Vec<(TimeoutHandle, f64)>,
    frame_requests: usize,
    frame_cancels: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    pub fn set_now(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
    }

    pub fn has_pending_frame(&self) -> bool {
        self.frame.is_some()
    }

    pub fn take_frame(&mut self) -> Option<FrameHandle> {
        self.frame.take()
    }

    pub fn pending_timeouts(&self) -> usize {
        self.timeouts.len()
    }

    /// Remove and return every timeout due at or before the current time.
    pub fn take_due_timeouts(&mut self) -> Vec<TimeoutHandle> {
        let now = self.now_ms;
        let (due, rest): (Vec<_>, Vec<_>) = std::mem::take(&mut self.timeouts)
            .into_iter()
            .partition(|(_, at)| *at <= now);
        self.timeouts = rest;
        due.into_iter().map(|(h, _)| h).collect()
    }

    pub fn frame_requests(&self) -> usize {
        self.frame_requests
    }

    pub fn frame_cancels(&self) -> usize {
        self.frame_cancels
    }

    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

impl Scheduler for ManualScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let handle = FrameHandle(self.next_id());
        self.frame = Some(handle);
        self.frame_requests += 1;
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.frame == Some(handle) {
            self.frame = None;
            self.frame_cancels += 1;
        }
    }

    fn set_timeout(&mut self, delay_ms: f64) -> Option<TimeoutHandle> {
        let handle = TimeoutHandle(self.next_id());
        self.timeouts.push((handle, self.now_ms + delay_ms));
        Some(handle)
    }

    fn clear_timeout(&mut self, handle: TimeoutHandle) {
        self.timeouts.retain(|(h, _)| *h != handle);
    }
}

/// Advance the virtual clock by `frame_ms`, fire due timeouts, then run the
/// pending frame if there is one.
pub fn step<S: StyleSink>(engine: &mut PointerFollowEngine<S, ManualScheduler>, frame_ms: f64) {
    let now = engine.host().now_ms() + frame_ms;
    engine.host_mut().set_now(now);
    for _ in engine.host_mut().take_due_timeouts() {
        engine.on_idle_timeout();
    }
    if engine.host_mut().take_frame().is_some() {
        engine.tick(now);
    }
}

/// Run `step` repeatedly until `duration_ms` of virtual time has passed.
pub fn run_for<S: StyleSink>(
    engine: &mut PointerFollowEngine<S, ManualScheduler>,
    duration_ms: f64,
    frame_ms: f64,
) {
    let end = engine.host().now_ms() + duration_ms;
    while engine.host().now_ms() + frame_ms <= end + 1e-9 {
        step(engine, frame_ms);
    }
}
