#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod frame;
mod hero;
mod slides;

use constants::{CASCADE_SELECTOR, HERO_SELECTOR, TESTIMONIALS_SELECTOR};
use hero::HeroFx;
use slides::{DeckKind, SlideDeck};

/// Everything mounted by `start`, kept alive until `teardown`.
#[derive(Default)]
struct Mounted {
    heroes: Vec<HeroFx>,
    decks: Vec<SlideDeck>,
}

thread_local! {
    static MOUNTED: RefCell<Mounted> = RefCell::new(Mounted::default());
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hero-fx starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Mount every widget on the page again, replacing any previous mount.
/// Used after `teardown` when the page swaps its content in place.
#[wasm_bindgen]
pub fn remount() -> Result<(), JsValue> {
    init().map_err(|e| JsValue::from_str(&format!("{:?}", e)))
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let mut mounted = Mounted::default();

    // One failing mount should not take the rest of the page down with it.
    for el in dom::query_document::<web::HtmlElement>(&document, HERO_SELECTOR) {
        match HeroFx::mount(el) {
            Ok(h) => mounted.heroes.push(h),
            Err(e) => log::error!("[hero] mount failed: {:?}", e),
        }
    }
    for (selector, kind) in [
        (CASCADE_SELECTOR, DeckKind::Cascade),
        (TESTIMONIALS_SELECTOR, DeckKind::Testimonials),
    ] {
        for el in dom::query_document::<web::Element>(&document, selector) {
            match SlideDeck::mount(el, kind) {
                Ok(d) => mounted.decks.push(d),
                Err(e) => log::error!("[deck] mount failed: {:?}", e),
            }
        }
    }

    log::info!(
        "mounted {} hero surface(s), {} deck(s)",
        mounted.heroes.len(),
        mounted.decks.len()
    );
    // Replacing a previous mount drops (and so releases) it outside the borrow.
    let previous = MOUNTED.with(|m| std::mem::replace(&mut *m.borrow_mut(), mounted));
    drop(previous);
    Ok(())
}

/// Release every listener, observer, timer and pending frame. Safe to call twice.
#[wasm_bindgen]
pub fn teardown() {
    let mounted = MOUNTED.with(|m| std::mem::take(&mut *m.borrow_mut()));
    if !mounted.heroes.is_empty() || !mounted.decks.is_empty() {
        log::info!(
            "tearing down {} hero surface(s), {} deck(s)",
            mounted.heroes.len(),
            mounted.decks.len()
        );
    }
}

/// Last published angles of the first hero (gradient, text), so other
/// components can rotate in phase with it.
#[wasm_bindgen]
pub fn rotation_angles() -> Vec<f32> {
    MOUNTED.with(|m| {
        m.borrow()
            .heroes
            .first()
            .map(|h| h.angles().snapshot().to_vec())
            .unwrap_or_default()
    })
}

/// Milliseconds for one full turn of the first hero's angle track `track`.
#[wasm_bindgen]
pub fn rotation_period_ms(track: usize) -> Option<f64> {
    MOUNTED.with(|m| m.borrow().heroes.first()?.rotation_period_ms(track))
}
