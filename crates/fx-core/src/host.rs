//! Seams between the engine and whatever hosts it (browser, native runner, tests).

/// Receives named style properties, e.g. CSS custom properties on an element.
pub trait StyleSink {
    fn set_property(&mut self, name: &str, value: &str);
}

/// Opaque id of a pending "run on next frame" request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Opaque id of a pending delayed callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimeoutHandle(pub i32);

/// Cooperative single-threaded scheduling primitives.
///
/// Requests only register a callback; the host later calls back into the
/// engine (`tick` / `on_idle_timeout`) outside of these methods, so
/// implementations must never invoke the engine synchronously.
pub trait Scheduler {
    /// `None` when the host cannot schedule (e.g. no window); treated as no session.
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
    fn set_timeout(&mut self, delay_ms: f64) -> Option<TimeoutHandle>;
    fn clear_timeout(&mut self, handle: TimeoutHandle);
}
