// Host-side tests for surface geometry, interpolation and angle math.

use fx_core::*;
use glam::Vec2;

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

#[test]
fn pointer_maps_to_percent_of_surface() {
    let rect = SurfaceRect::new(0.0, 0.0, 200.0, 100.0);
    let pct = rect.to_percent(Vec2::new(100.0, 50.0)).unwrap();
    assert_eq!(pct, Vec2::new(50.0, 50.0));
}

#[test]
fn pointer_mapping_accounts_for_origin_and_is_not_clamped() {
    let rect = SurfaceRect::new(100.0, 40.0, 400.0, 200.0);
    let pct = rect.to_percent(Vec2::new(300.0, 140.0)).unwrap();
    assert_eq!(pct, Vec2::new(50.0, 50.0));

    let outside = rect.to_percent(Vec2::new(700.0, 0.0)).unwrap();
    assert!(approx(outside.x, 150.0, 1e-4));
    assert!(approx(outside.y, -20.0, 1e-4));
}

#[test]
fn collapsed_surface_has_no_mapping() {
    assert!(SurfaceRect::new(0.0, 0.0, 0.0, 100.0)
        .to_percent(Vec2::ZERO)
        .is_none());
    assert!(SurfaceRect::new(0.0, 0.0, 100.0, 0.0)
        .to_percent(Vec2::ZERO)
        .is_none());
    assert!(SurfaceRect::new(0.0, 0.0, f32::NAN, 10.0)
        .to_percent(Vec2::ZERO)
        .is_none());
}

#[test]
fn lerp_converges_geometrically_without_overshoot() {
    for factor in [0.05_f32, 0.08, 0.12, 0.5] {
        for (start, target) in [
            (Vec2::new(0.0, 100.0), Vec2::new(100.0, 0.0)),
            (Vec2::new(80.0, 20.0), Vec2::new(10.0, 35.0)),
        ] {
            let d0 = (target - start).abs();
            let mut current = start;
            let mut prev = d0;
            for n in 1..=60 {
                current = lerp_toward(current, target, factor);
                let d = (target - current).abs();
                // never past the target on either axis
                assert!((target.x - current.x) * (target.x - start.x) >= 0.0);
                assert!((target.y - current.y) * (target.y - start.y) >= 0.0);
                assert!(d.x <= prev.x && d.y <= prev.y, "distance grew at step {n}");

                let expected = d0.x * (1.0 - factor).powi(n);
                assert!(
                    approx(d.x, expected, 1e-3 * d0.x.max(1.0)),
                    "factor {factor} step {n}: {} vs {expected}",
                    d.x
                );
                prev = d;
            }
        }
    }
}

#[test]
fn lerp_reaches_one_percent_in_predicted_steps() {
    for factor in [0.06_f32, 0.08, 0.12] {
        let target = Vec2::splat(100.0);
        let mut current = Vec2::ZERO;
        let mut steps = 0;
        while (target.x - current.x) > 1.0 {
            current = lerp_toward(current, target, factor);
            steps += 1;
        }
        let predicted = (0.01_f64.ln() / (1.0 - factor as f64).ln()).ceil() as i32;
        assert!(
            (steps - predicted).abs() <= 1,
            "factor {factor}: {steps} steps, predicted {predicted}"
        );
    }
}

#[test]
fn epsilon_check_is_per_axis() {
    let a = Vec2::new(50.0, 50.0);
    assert!(within_epsilon(a, Vec2::new(50.05, 49.95), 0.1));
    assert!(!within_epsilon(a, Vec2::new(50.0, 50.2), 0.1));
    assert!(!within_epsilon(a, Vec2::new(49.8, 50.0), 0.1));
}

#[test]
fn rounding_keeps_requested_decimals() {
    assert_eq!(round_to(12.3456, Some(2)), 12.35);
    assert_eq!(round_to(12.3449, Some(2)), 12.34);
    assert_eq!(round_to(12.5, Some(0)), 13.0);
    assert_eq!(round_to(12.3456, None), 12.3456);
}

#[test]
fn style_values_are_formatted_for_css() {
    assert_eq!(format_percent(50.0), "50%");
    assert_eq!(format_percent(12.25), "12.25%");
    assert_eq!(format_percent(-0.0), "0%");
    assert_eq!(format_degrees(90.5), "90.5deg");
    assert_eq!(format_degrees(0.0), "0deg");
}

#[test]
fn orbit_point_lies_on_circle() {
    let center = Vec2::splat(50.0);
    let p = orbit_point(center, 10.0, 90.0);
    assert!(approx(p.x, 50.0, 1e-4) && approx(p.y, 60.0, 1e-4));
    for deg in (0..360).step_by(15) {
        let p = orbit_point(center, 18.0, deg as f32);
        assert!(approx((p - center).length(), 18.0, 1e-3));
    }
}

#[test]
fn wrap_degrees_stays_in_range() {
    assert_eq!(wrap_degrees(0.0), 0.0);
    assert_eq!(wrap_degrees(360.0), 0.0);
    assert_eq!(wrap_degrees(720.0), 0.0);
    assert_eq!(wrap_degrees(-10.0), 350.0);
    assert_eq!(wrap_degrees(370.5), 10.5);
    for v in [-1e-9_f32, -1e-7, 359.99999, 1e7] {
        let w = wrap_degrees(v);
        assert!((0.0..360.0).contains(&w), "{v} wrapped to {w}");
    }
}

#[test]
fn angle_is_periodic_in_its_turn_time() {
    for speed in [80.0_f32, 78.0, 24.0, -45.0] {
        let period = AngleTrack::new(speed, 0.0).period_ms().unwrap();
        for t in [0.0, 17.0, 1234.5, 99_999.0] {
            let a = angle_at(speed, 30.0, t);
            let b = angle_at(speed, 30.0, t + period);
            assert!(
                angular_distance(a, b) < 1e-2,
                "speed {speed} t {t}: {a} vs {b}"
            );
        }
    }
}

#[test]
fn track_advance_matches_closed_form() {
    let mut track = AngleTrack::new(80.0, 0.0);
    let mut elapsed = 0.0;
    for _ in 0..500 {
        track.advance(20.0);
        elapsed += 20.0;
        assert!((0.0..360.0).contains(&track.degrees()));
    }
    let expected = angle_at(80.0, 0.0, elapsed);
    assert!(angular_distance(track.degrees(), expected) < 1e-2);

    // one full turn lands where it started
    let before = track.degrees();
    track.advance(track.period_ms().unwrap());
    assert!(angular_distance(track.degrees(), before) < 1e-3);
}

#[test]
fn stationary_track_has_no_period() {
    let mut track = AngleTrack::new(0.0, 45.0);
    assert_eq!(track.period_ms(), None);
    track.advance(10_000.0);
    assert_eq!(track.degrees(), 45.0);
}
