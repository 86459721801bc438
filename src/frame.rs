use fx_core::{FrameHandle, Scheduler, TimeoutHandle};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;
pub type TimeoutSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` / `setTimeout` backed scheduler.
///
/// The callbacks live in shared slots filled in after the engine exists (they
/// need a handle back to it); until then, and after the slots are emptied on
/// teardown, every request is declined.
pub struct BrowserScheduler {
    window: Option<web::Window>,
    on_frame: FrameSlot,
    on_timeout: TimeoutSlot,
}

impl BrowserScheduler {
    pub fn new(on_frame: FrameSlot, on_timeout: TimeoutSlot) -> Self {
        Self {
            window: web::window(),
            on_frame,
            on_timeout,
        }
    }
}

impl Scheduler for BrowserScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let window = self.window.as_ref()?;
        let slot = self.on_frame.borrow();
        let cb = slot.as_ref()?;
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => Some(FrameHandle(id)),
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Some(w) = &self.window {
            _ = w.cancel_animation_frame(handle.0);
        }
    }

    fn set_timeout(&mut self, delay_ms: f64) -> Option<TimeoutHandle> {
        let window = self.window.as_ref()?;
        let slot = self.on_timeout.borrow();
        let cb = slot.as_ref()?;
        window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                delay_ms.round() as i32,
            )
            .ok()
            .map(TimeoutHandle)
    }

    fn clear_timeout(&mut self, handle: TimeoutHandle) {
        if let Some(w) = &self.window {
            w.clear_timeout_with_handle(handle.0);
        }
    }
}

/// A `setInterval` registration, cleared on drop.
pub struct Interval {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn start(period_ms: u32, tick: impl FnMut() + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let closure = Closure::wrap(Box::new(tick) as Box<dyn FnMut()>);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                period_ms as i32,
            )
            .map_err(|e| anyhow::anyhow!("setInterval: {:?}", e))?;
        Ok(Self {
            id,
            _closure: closure,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.id);
        }
    }
}
