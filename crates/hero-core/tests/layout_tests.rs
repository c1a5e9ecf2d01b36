// Breakpoint boundary and publish-on-change semantics.

use hero_core::{BreakpointDetector, LayoutMode};

#[test]
fn boundary_sits_exactly_at_980() {
    assert_eq!(LayoutMode::from_width(979.0), LayoutMode::Compact);
    assert_eq!(LayoutMode::from_width(980.0), LayoutMode::Wide);
}

#[test]
fn first_observation_always_publishes() {
    let mut d = BreakpointDetector::new();
    assert_eq!(d.update(1440.0), Some(LayoutMode::Wide));
}

#[test]
fn redundant_observations_are_suppressed() {
    let mut d = BreakpointDetector::new();
    assert_eq!(d.update(1200.0), Some(LayoutMode::Wide));
    assert_eq!(d.update(1100.0), None);
    assert_eq!(d.update(900.0), Some(LayoutMode::Compact));
    assert_eq!(d.update(900.0), None);
    assert_eq!(d.current(), Some(LayoutMode::Compact));
}

#[test]
fn mode_string_drives_the_dom_attribute() {
    assert_eq!(LayoutMode::Compact.as_str(), "compact");
    assert_eq!(LayoutMode::Wide.as_str(), "wide");
}
