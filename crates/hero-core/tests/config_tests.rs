// Configuration parsing: silent fallback to the built-in defaults.

use hero_core::{parse_chips, parse_nav, parse_stats, HeroConfig, LayoutMode};

#[test]
fn malformed_nav_json_falls_back_to_the_default_list() {
    let nav = parse_nav("{not json");
    assert_eq!(nav.len(), 4);
    let labels: Vec<&str> = nav.iter().map(|n| n.label.as_str()).collect();
    assert_eq!(labels, ["Services", "About", "Projects", "Contact"]);
}

#[test]
fn valid_nav_json_is_used_verbatim() {
    let nav = parse_nav(r#"[{"label":"Home","href":"/"},{"label":"Work","href":"/work"}]"#);
    assert_eq!(nav.len(), 2);
    assert_eq!(nav[0].label, "Home");
    assert_eq!(nav[1].href, "/work");
}

#[test]
fn wrong_shape_chips_fall_back() {
    // Valid JSON, wrong element type.
    assert_eq!(parse_chips("[1, 2, 3]").len(), 6);
    // Not JSON at all.
    assert_eq!(parse_chips("").len(), 6);
}

#[test]
fn malformed_stats_fall_back() {
    let stats = parse_stats(r#"[{"label":"only-a-label"}]"#);
    assert_eq!(stats.len(), 3);
    assert_eq!(stats[0].label, "Enfoque");
}

#[test]
fn defaults_match_the_documented_values() {
    let cfg = HeroConfig::default();
    assert_eq!(cfg.smoke_radius, 120.0);
    assert_eq!(cfg.orb_size, 520.0);
    assert!(cfg.show_nav);
    assert!(cfg.show_accent_line);
    assert_eq!(cfg.nav.len(), 4);
    assert_eq!(cfg.chips.len(), 6);
    assert_eq!(cfg.stats.len(), 3);
    assert_eq!(cfg.accent, "#00D7FF");
}

#[test]
fn orb_shrinks_and_rounds_in_compact_layout() {
    let cfg = HeroConfig::default();
    assert_eq!(cfg.orb_final_size(LayoutMode::Wide), 520.0);
    assert_eq!(cfg.orb_final_size(LayoutMode::Compact), 374.0);
}
