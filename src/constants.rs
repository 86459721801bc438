// Markup contract between the site's HTML and the wasm front-end.

// Mount points
pub const HERO_SELECTOR: &str = "[data-fx-hero]";
pub const CASCADE_SELECTOR: &str = "[data-fx-cascade]";
pub const TESTIMONIALS_SELECTOR: &str = "[data-fx-testimonials]";
pub const SLIDE_SELECTOR: &str = "[data-fx-slide]";
pub const PREV_SELECTOR: &str = "[data-fx-prev]";
pub const NEXT_SELECTOR: &str = "[data-fx-next]";
pub const DOT_SELECTOR: &str = "[data-fx-dot]"; // nth dot selects the nth slide

// Per-element options
pub const PRESET_ATTR: &str = "data-fx-preset"; // "standard" | "smooth"
pub const INTERVAL_ATTR: &str = "data-interval"; // milliseconds
pub const AUTOPLAY_ATTR: &str = "data-autoplay";

// Slide state classes
pub const CLASS_CURRENT: &str = "is-current";
pub const CLASS_NEXT: &str = "is-next";
pub const CLASS_ACTIVE: &str = "is-active";
pub const TILT_PROPERTY: &str = "--tilt-y";

// Fraction of the hero that must be on screen for it to animate
pub const VISIBILITY_THRESHOLD: f64 = 0.1;
