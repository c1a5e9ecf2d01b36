// Native tests for the pure pointer-tracking functions.

use glam::Vec2;
use hero_core::{centered_fraction, normalized_offset, Bounds, PointerOffset};

fn bounds() -> Bounds {
    Bounds::new(100.0, 50.0, 400.0, 200.0)
}

#[test]
fn center_maps_to_zero() {
    let off = normalized_offset(Vec2::new(300.0, 150.0), bounds());
    assert_eq!(off, PointerOffset::CENTER);
}

#[test]
fn corners_hit_the_extremes() {
    let tl = normalized_offset(Vec2::new(100.0, 50.0), bounds());
    assert_eq!((tl.nx, tl.ny), (-1.0, -1.0));

    let br = normalized_offset(Vec2::new(500.0, 250.0), bounds());
    assert_eq!((br.nx, br.ny), (1.0, 1.0));
}

#[test]
fn positions_outside_the_bounds_are_clamped() {
    let off = normalized_offset(Vec2::new(10_000.0, -10_000.0), bounds());
    assert_eq!((off.nx, off.ny), (1.0, -1.0));
}

#[test]
fn every_inside_position_is_within_unit_range() {
    let b = bounds();
    for ix in 0..=20 {
        for iy in 0..=20 {
            let client = Vec2::new(
                b.left + b.width * ix as f32 / 20.0,
                b.top + b.height * iy as f32 / 20.0,
            );
            let off = normalized_offset(client, b);
            assert!((-1.0..=1.0).contains(&off.nx), "nx out of range: {}", off.nx);
            assert!((-1.0..=1.0).contains(&off.ny), "ny out of range: {}", off.ny);
        }
    }
}

#[test]
fn degenerate_bounds_yield_the_centered_offset() {
    let off = normalized_offset(Vec2::new(37.0, 12.0), Bounds::new(0.0, 0.0, 0.0, 120.0));
    assert_eq!(off, PointerOffset::CENTER);
}

#[test]
fn centered_fraction_is_zero_at_center_and_half_at_edges() {
    let b = bounds();
    assert_eq!(centered_fraction(Vec2::new(300.0, 150.0), b), Vec2::ZERO);

    let edge = centered_fraction(Vec2::new(500.0, 50.0), b);
    assert_eq!((edge.x, edge.y), (0.5, -0.5));
}
