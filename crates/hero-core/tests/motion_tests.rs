// Channel target maps at their documented endpoints, driven through the
// springs until settled.

use glam::Vec2;
use hero_core::{HeroMotion, PointerOffset};

const DT: f32 = 1.0 / 120.0;

fn settle(m: &mut HeroMotion) {
    for _ in 0..2400 {
        m.advance(DT);
    }
}

fn assert_close(actual: Vec2, expected: Vec2) {
    assert!(
        (actual.x - expected.x).abs() < 1e-2 && (actual.y - expected.y).abs() < 1e-2,
        "expected {expected:?}, got {actual:?}"
    );
}

#[test]
fn background_drift_endpoints() {
    let mut m = HeroMotion::new();
    m.set_pointer(PointerOffset::new(1.0, 1.0));
    settle(&mut m);
    assert_close(m.background_shift_pct(), Vec2::new(2.8, 2.2));
}

#[test]
fn orb_tilts_away_vertically_and_toward_horizontally() {
    let mut m = HeroMotion::new();
    m.set_pointer(PointerOffset::new(1.0, 1.0));
    settle(&mut m);
    assert_close(m.orb_tilt_deg(), Vec2::new(-6.0, 8.0));

    m.set_pointer(PointerOffset::new(-1.0, -1.0));
    settle(&mut m);
    assert_close(m.orb_tilt_deg(), Vec2::new(6.0, -8.0));
}

#[test]
fn spotlight_travels_between_its_corners() {
    let mut m = HeroMotion::new();
    m.set_pointer(PointerOffset::new(1.0, 1.0));
    settle(&mut m);
    assert_close(m.spotlight_pct(), Vec2::new(65.0, 62.0));

    m.set_pointer(PointerOffset::new(-1.0, -1.0));
    settle(&mut m);
    assert_close(m.spotlight_pct(), Vec2::new(35.0, 38.0));
}

#[test]
fn haze_drift_endpoints() {
    let mut m = HeroMotion::new();
    m.set_pointer(PointerOffset::new(-1.0, 1.0));
    settle(&mut m);
    assert_close(m.haze_shift_px(), Vec2::new(-18.0, 12.0));
}

#[test]
fn magnets_scale_the_centered_fraction() {
    let mut m = HeroMotion::new();
    m.set_primary_target(Vec2::new(0.5, -0.5));
    m.set_secondary_target(Vec2::new(0.5, 0.5));
    settle(&mut m);
    assert_close(m.primary_shift_px(), Vec2::new(7.0, -5.0));
    assert_close(m.secondary_shift_px(), Vec2::new(5.0, 4.0));
}

#[test]
fn clearing_the_pointer_returns_every_channel_to_rest() {
    let mut m = HeroMotion::new();
    m.set_pointer(PointerOffset::new(0.8, -0.6));
    m.set_primary_target(Vec2::new(0.4, 0.4));
    settle(&mut m);

    m.clear_pointer();
    m.clear_primary();
    settle(&mut m);

    assert_close(m.smoothed(), Vec2::ZERO);
    assert_close(m.primary_shift_px(), Vec2::ZERO);
    assert!(m.is_idle());
}
