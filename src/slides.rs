//! Image cascade and testimonial decks: index cycling on top of server-rendered
//! slides. Transitions are pure CSS keyed off the state classes.

use crate::constants::*;
use crate::dom::{self, Listener};
use crate::frame::Interval;
use fx_core::{tilt_degrees, CycleConfig, Cycler, TESTIMONIAL_TILT_MAX_DEG};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeckKind {
    /// Current image plus the next one peeking from behind.
    Cascade,
    /// One active card; the rest rest at a random tilt.
    Testimonials,
}

struct DeckState {
    kind: DeckKind,
    cycler: Cycler,
    slides: Vec<web::Element>,
}

impl DeckState {
    fn render(&self) {
        let mut rng = rand::thread_rng();
        for (i, slide) in self.slides.iter().enumerate() {
            match self.kind {
                DeckKind::Cascade => {
                    dom::set_class(slide, CLASS_CURRENT, self.cycler.is_active(i));
                    dom::set_class(slide, CLASS_NEXT, self.cycler.upcoming() == Some(i));
                }
                DeckKind::Testimonials => {
                    let active = self.cycler.is_active(i);
                    dom::set_class(slide, CLASS_ACTIVE, active);
                    if let Some(el) = slide.dyn_ref::<web::HtmlElement>() {
                        let tilt = if active {
                            0
                        } else {
                            tilt_degrees(&mut rng, TESTIMONIAL_TILT_MAX_DEG)
                        };
                        _ = el.style().set_property(TILT_PROPERTY, &format!("{}deg", tilt));
                    }
                }
            }
        }
    }

    fn step(&mut self, forward: bool) {
        let moved = if forward {
            self.cycler.advance()
        } else {
            self.cycler.retreat()
        };
        if moved {
            self.render();
        }
    }

    fn show(&mut self, index: usize) {
        if self.cycler.select(index) {
            self.render();
        }
    }
}

/// A mounted deck; its interval and button listeners are released on drop.
pub struct SlideDeck {
    _state: Rc<RefCell<DeckState>>,
    _autoplay: Option<Interval>,
    _buttons: Vec<Listener<dyn FnMut()>>,
}

impl SlideDeck {
    pub fn mount(root: web::Element, kind: DeckKind) -> anyhow::Result<Self> {
        let slides: Vec<web::Element> = dom::query_within(&root, SLIDE_SELECTOR);
        let defaults = match kind {
            DeckKind::Cascade => CycleConfig::cascade(),
            DeckKind::Testimonials => CycleConfig::testimonials(),
        };
        let config = defaults.with_attributes(
            root.get_attribute(INTERVAL_ATTR).as_deref(),
            root.get_attribute(AUTOPLAY_ATTR).as_deref(),
        );

        let len = slides.len();
        let state = Rc::new(RefCell::new(DeckState {
            kind,
            cycler: Cycler::new(len),
            slides,
        }));
        state.borrow().render();

        let autoplay = match config.autoplay_interval(len) {
            Some(period) => {
                let s = state.clone();
                Some(Interval::start(period, move || s.borrow_mut().step(true))?)
            }
            None => None,
        };

        let mut buttons = Vec::new();
        if kind == DeckKind::Testimonials {
            for (selector, forward) in [(PREV_SELECTOR, false), (NEXT_SELECTOR, true)] {
                for button in dom::query_within::<web::Element>(&root, selector) {
                    let s = state.clone();
                    let closure =
                        Closure::wrap(Box::new(move || s.borrow_mut().step(forward)) as Box<dyn FnMut()>);
                    buttons.push(Listener::attach(&button, "click", closure)?);
                }
            }
            let dots: Vec<web::Element> = dom::query_within(&root, DOT_SELECTOR);
            for (index, dot) in dots.into_iter().enumerate() {
                let s = state.clone();
                let closure = Closure::wrap(Box::new(move || s.borrow_mut().show(index)) as Box<dyn FnMut()>);
                buttons.push(Listener::attach(&dot, "click", closure)?);
            }
        }

        log::info!(
            "[deck] mounted {:?} with {} slides (autoplay: {:?})",
            kind,
            len,
            autoplay.is_some()
        );
        Ok(Self {
            _state: state,
            _autoplay: autoplay,
            _buttons: buttons,
        })
    }
}
