// Ambient loop behavior: wrapping, clamping, symmetry.

use hero_core::{Entrance, FloatLoop, MarqueeLoop};

#[test]
fn marquee_offset_stays_in_range_and_wraps() {
    let mut m = MarqueeLoop::new();
    let mut t = 0.0_f32;
    while t < 25.0 {
        m.tick(0.016);
        t += 0.016;
        let off = m.offset_px();
        assert!((-420.0..=0.0).contains(&off), "offset out of range: {off}");
    }

    let mut m = MarqueeLoop::new();
    m.tick(10.0);
    assert_eq!(m.offset_px(), 0.0);
}

#[test]
fn entrance_progress_is_monotonic_and_clamps() {
    let mut e = Entrance::new();
    let mut last = 0.0_f32;
    for _ in 0..60 {
        e.tick(0.016);
        let p = e.progress();
        assert!(p >= last, "progress went backwards: {p} < {last}");
        assert!((0.0..=1.0).contains(&p));
        last = p;
    }

    e.tick(5.0);
    assert!(e.is_finished());
    assert_eq!(e.progress(), 1.0);
}

#[test]
fn float_cue_peaks_mid_period_and_returns_home() {
    let mut f = FloatLoop::new();
    f.tick(0.8);
    assert!((f.offset_px() - 6.0).abs() < 1e-3);

    f.tick(0.8);
    assert!(f.offset_px().abs() < 1e-3);
}
