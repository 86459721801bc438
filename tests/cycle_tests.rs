// Host-side tests for sequence cycling (image cascade, testimonials).

use fx_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn single_item_never_cycles() {
    let mut c = Cycler::new(1);
    assert!(!c.can_cycle());
    assert_eq!(c.active(), Some(0));
    assert_eq!(c.upcoming(), None);
    assert!(!c.advance());
    assert!(!c.retreat());
    assert_eq!(c.active(), Some(0));

    // and no auto-advance timer is started for it
    assert_eq!(CycleConfig::cascade().autoplay_interval(1), None);
    let autoplaying = CycleConfig::testimonials().with_attributes(None, Some(""));
    assert_eq!(autoplaying.autoplay_interval(1), None);
}

#[test]
fn empty_sequence_has_nothing_active() {
    let mut c = Cycler::new(0);
    assert!(c.is_empty());
    assert_eq!(c.active(), None);
    assert_eq!(c.upcoming(), None);
    assert!(!c.advance());
    assert!(!c.select(0));
    assert!(!c.is_active(0));
    assert_eq!(CycleConfig::cascade().autoplay_interval(0), None);
}

#[test]
fn advance_and_retreat_wrap_around() {
    let mut c = Cycler::new(3);
    assert_eq!(c.upcoming(), Some(1));
    assert!(c.advance());
    assert!(c.advance());
    assert_eq!(c.active(), Some(2));
    assert_eq!(c.upcoming(), Some(0));
    assert!(c.advance());
    assert_eq!(c.active(), Some(0));

    assert!(c.retreat());
    assert_eq!(c.active(), Some(2));
    assert!(c.is_active(2));
}

#[test]
fn two_items_alternate() {
    let mut c = Cycler::new(2);
    for expected in [1, 0, 1, 0] {
        assert!(c.advance());
        assert_eq!(c.active(), Some(expected));
        assert_eq!(c.upcoming(), Some(1 - expected));
    }
}

#[test]
fn select_validates_index() {
    let mut c = Cycler::new(4);
    assert!(c.select(3));
    assert_eq!(c.active(), Some(3));
    assert!(!c.select(3));
    assert!(!c.select(4));
    assert_eq!(c.active(), Some(3));
}

#[test]
fn cycle_config_defaults_and_overrides() {
    assert_eq!(CycleConfig::cascade().autoplay_interval(5), Some(3000));
    assert_eq!(CycleConfig::testimonials().autoplay_interval(5), None);

    let on = CycleConfig::testimonials().with_attributes(Some(" 4000 "), Some(""));
    assert_eq!(on.autoplay_interval(5), Some(4000));

    let off = CycleConfig::cascade().with_attributes(Some("abc"), Some("false"));
    assert_eq!(off.interval_ms, Some(3000));
    assert!(!off.autoplay);

    let zero = CycleConfig::cascade().with_attributes(Some("0"), None);
    assert_eq!(zero.autoplay_interval(2), Some(3000));
}

#[test]
fn tilt_stays_within_bounds() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut seen_neg = false;
    let mut seen_pos = false;
    for _ in 0..500 {
        let t = tilt_degrees(&mut rng, TESTIMONIAL_TILT_MAX_DEG);
        assert!((-10..=10).contains(&t));
        seen_neg |= t < 0;
        seen_pos |= t > 0;
    }
    assert!(seen_neg && seen_pos);
    assert_eq!(tilt_degrees(&mut rng, 0), 0);
}
