//! Wires one hero surface to the pointer-follow engine.

use crate::constants::{PRESET_ATTR, VISIBILITY_THRESHOLD};
use crate::dom::{self, ElementStyleSink, Listener};
use crate::frame::{BrowserScheduler, FrameSlot, TimeoutSlot};
use fx_core::{AngleReader, EngineConfig, PointerFollowEngine, TimingPreset};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type HeroEngine = PointerFollowEngine<ElementStyleSink, BrowserScheduler>;

/// A mounted hero animation. Dropping it (or calling [`HeroFx::stop`])
/// detaches the listener and observer and cancels any pending frame/timer.
pub struct HeroFx {
    engine: Rc<RefCell<HeroEngine>>,
    pointer: Option<Listener<dyn FnMut(web::PointerEvent)>>,
    observer: Option<(web::IntersectionObserver, Closure<dyn FnMut(js_sys::Array)>)>,
    frame_slot: FrameSlot,
    timeout_slot: TimeoutSlot,
}

impl HeroFx {
    pub fn mount(element: web::HtmlElement) -> anyhow::Result<Self> {
        let preset = read_preset(&element);
        let config = EngineConfig::default().with_preset(preset);

        let frame_slot: FrameSlot = Rc::new(RefCell::new(None));
        let timeout_slot: TimeoutSlot = Rc::new(RefCell::new(None));
        let scheduler = BrowserScheduler::new(frame_slot.clone(), timeout_slot.clone());
        let engine = Rc::new(RefCell::new(PointerFollowEngine::new(
            config,
            ElementStyleSink::new(element.clone()),
            scheduler,
        )?));

        // Callbacks hold weak handles: the engine owns the scheduler that owns them.
        let weak = Rc::downgrade(&engine);
        *frame_slot.borrow_mut() = Some(Closure::wrap(Box::new(move |time_ms: f64| {
            with_engine(&weak, |e| e.tick(time_ms));
        }) as Box<dyn FnMut(f64)>));

        let weak = Rc::downgrade(&engine);
        *timeout_slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            with_engine(&weak, |e| e.on_idle_timeout());
        }) as Box<dyn FnMut()>));

        let mut hero = Self {
            engine,
            pointer: None,
            observer: None,
            frame_slot,
            timeout_slot,
        };
        // On error `hero` drops here and releases whatever was attached.
        hero.pointer = Some(wire_pointer(&element, &hero.engine)?);
        hero.observer = Some(wire_visibility(&element, &hero.engine)?);
        hero.engine.borrow_mut().start();
        log::info!(
            "[hero] mounted preset={:?} lerp={}",
            preset,
            hero.engine.borrow().config().lerp_factor
        );
        Ok(hero)
    }

    pub fn angles(&self) -> AngleReader {
        self.engine.borrow().angles()
    }

    /// Time for one full turn of angle track `index`.
    pub fn rotation_period_ms(&self, index: usize) -> Option<f64> {
        self.engine.borrow().track(index).and_then(|t| t.period_ms())
    }

    pub fn stop(&mut self) {
        self.pointer = None;
        if let Some((observer, _callback)) = self.observer.take() {
            observer.disconnect();
        }
        match self.engine.try_borrow_mut() {
            Ok(mut engine) => engine.stop(),
            Err(_) => {
                // A pending frame or timer may still fire, so its closure must outlive us.
                log::warn!("[hero] stop while engine busy; leaving callbacks in place");
                return;
            }
        }
        // Pending work was cancelled above, so the callbacks can go.
        self.frame_slot.borrow_mut().take();
        self.timeout_slot.borrow_mut().take();
    }
}

impl Drop for HeroFx {
    fn drop(&mut self) {
        self.stop();
    }
}

fn with_engine(weak: &Weak<RefCell<HeroEngine>>, f: impl FnOnce(&mut HeroEngine)) {
    if let Some(engine) = weak.upgrade() {
        f(&mut *engine.borrow_mut());
    }
}

fn read_preset(element: &web::HtmlElement) -> TimingPreset {
    match element.get_attribute(PRESET_ATTR) {
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            log::warn!("[hero] {}; using standard timing", e);
            TimingPreset::Standard
        }),
        None => TimingPreset::Standard,
    }
}

fn wire_pointer(
    element: &web::HtmlElement,
    engine: &Rc<RefCell<HeroEngine>>,
) -> anyhow::Result<Listener<dyn FnMut(web::PointerEvent)>> {
    let weak = Rc::downgrade(engine);
    let surface = element.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        // Layout may have changed since the last event, so measure every time.
        let rect = dom::surface_rect(&surface);
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let now_ms = ev.time_stamp();
        with_engine(&weak, |e| e.on_pointer_move(client, rect, now_ms));
    }) as Box<dyn FnMut(web::PointerEvent)>);
    Listener::attach(element, "pointermove", closure)
}

fn wire_visibility(
    element: &web::HtmlElement,
    engine: &Rc<RefCell<HeroEngine>>,
) -> anyhow::Result<(web::IntersectionObserver, Closure<dyn FnMut(js_sys::Array)>)> {
    let weak = Rc::downgrade(engine);
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        // Only the most recent entry matters when several are batched.
        let visible = entries
            .iter()
            .filter_map(|v| v.dyn_into::<web::IntersectionObserverEntry>().ok())
            .last()
            .map(|entry| entry.is_intersecting());
        if let Some(visible) = visible {
            with_engine(&weak, |e| e.on_visibility_change(visible));
        }
    }) as Box<dyn FnMut(js_sys::Array)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    observer.observe(element);
    Ok((observer, callback))
}
