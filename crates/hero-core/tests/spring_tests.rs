// Spring interpolator behavior: convergence, determinism, dt capping.

use hero_core::{Spring, SpringConfig};

const DT: f32 = 1.0 / 120.0;

const OFFSET: SpringConfig = SpringConfig::new(140.0, 24.0, 0.65);
const MAGNET: SpringConfig = SpringConfig::new(320.0, 26.0, 1.0);

#[test]
fn converges_to_a_held_target() {
    let mut s = Spring::new(OFFSET);
    s.set_target(1.0);
    for _ in 0..1200 {
        s.step(DT);
    }
    assert!((s.value - 1.0).abs() < 1e-3, "value = {}", s.value);
    assert!(s.velocity.abs() < 1e-3, "velocity = {}", s.velocity);
    assert!(s.is_settled());
}

#[test]
fn underdamped_magnet_settles_too() {
    let mut s = Spring::new(MAGNET);
    s.set_target(-7.0);
    for _ in 0..2400 {
        s.step(DT);
    }
    assert!((s.value + 7.0).abs() < 1e-3);
    assert!(s.is_settled());
}

#[test]
fn integration_is_deterministic() {
    let run = || {
        let mut s = Spring::new(OFFSET);
        let mut trace = Vec::new();
        for i in 0..600 {
            if i == 100 {
                s.set_target(0.8);
            }
            if i == 300 {
                s.set_target(-0.4);
            }
            s.step(DT);
            trace.push((s.value, s.velocity));
        }
        trace
    };
    assert_eq!(run(), run());
}

#[test]
fn long_frame_deltas_are_capped() {
    // A tab coming back from the background delivers a huge dt; it must
    // behave exactly like the cap.
    let mut a = Spring::new(OFFSET);
    let mut b = Spring::new(OFFSET);
    a.set_target(1.0);
    b.set_target(1.0);
    a.step(10.0);
    b.step(0.05);
    assert_eq!(a.value, b.value);
    assert_eq!(a.velocity, b.velocity);
}

#[test]
fn zero_dt_is_a_no_op() {
    let mut s = Spring::new(OFFSET);
    s.set_target(1.0);
    s.step(0.0);
    assert_eq!(s.value, 0.0);
    assert_eq!(s.velocity, 0.0);
}
