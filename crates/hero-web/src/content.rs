//! One-time content projection from configuration into the host markup, plus
//! layout-mode application. The host page owns the hero's visual markup; this
//! module only fills tagged slots and flips coarse layout state.

use hero_core::{parse_chips, parse_nav, parse_stats, HeroConfig, LayoutMode};
use web_sys as web;

use crate::dom::{hide, role_element, set_style, set_text};
use crate::HeroElements;

// Slot caps, matching the rendered design
const NAV_MAX: usize = 5;
const CHIP_MAX: usize = 6;
const STAT_MAX: usize = 3;

/// Read the full configuration from `data-*` attributes on the mount root.
/// Absent attributes keep their defaults; malformed values fall back silently.
pub(crate) fn config_from_attrs(root: &web::Element) -> HeroConfig {
    let mut cfg = HeroConfig::default();
    let attr = |name: &str| root.get_attribute(name);

    if let Some(v) = attr("data-brand") {
        cfg.brand = v;
    }
    if let Some(v) = attr("data-nav") {
        cfg.nav = parse_nav(&v);
    }
    if let Some(v) = attr("data-headline-a") {
        cfg.headline_a = v;
    }
    if let Some(v) = attr("data-headline-b") {
        cfg.headline_b = v;
    }
    if let Some(v) = attr("data-kicker") {
        cfg.right_kicker = v;
    }
    if let Some(v) = attr("data-text") {
        cfg.right_text = v;
    }
    if let Some(v) = attr("data-cta-label") {
        cfg.cta_label = v;
    }
    if let Some(v) = attr("data-cta-href") {
        cfg.cta_href = v;
    }
    if let Some(v) = attr("data-secondary-cta-label") {
        cfg.secondary_cta_label = v;
    }
    if let Some(v) = attr("data-secondary-cta-href") {
        cfg.secondary_cta_href = v;
    }
    if let Some(v) = attr("data-accent") {
        cfg.accent = v;
    }
    if let Some(v) = attr("data-smoke-radius").and_then(|v| v.parse().ok()) {
        cfg.smoke_radius = v;
    }
    if let Some(v) = attr("data-orb-size").and_then(|v| v.parse().ok()) {
        cfg.orb_size = v;
    }
    if let Some(v) = attr("data-show-nav") {
        cfg.show_nav = parse_flag(&v);
    }
    if let Some(v) = attr("data-show-accent-line") {
        cfg.show_accent_line = parse_flag(&v);
    }
    if let Some(v) = attr("data-chips") {
        cfg.chips = parse_chips(&v);
    }
    if let Some(v) = attr("data-stats") {
        cfg.stats = parse_stats(&v);
    }
    if let Some(v) = attr("data-marquee") {
        cfg.marquee_text = v;
    }
    if let Some(v) = attr("data-badge-left") {
        cfg.badge_left = v;
    }
    if let Some(v) = attr("data-badge-right") {
        cfg.badge_right = v;
    }
    cfg
}

fn parse_flag(raw: &str) -> bool {
    !matches!(raw, "false" | "0" | "no")
}

/// Fill the tagged content slots. Missing slots are skipped, not errors.
pub(crate) fn apply_content(document: &web::Document, root: &web::HtmlElement, cfg: &HeroConfig) {
    set_style(root, "--hero-accent", &cfg.accent);

    let text_slots: [(&str, &str); 8] = [
        ("brand", &cfg.brand),
        ("badge-left", &cfg.badge_left),
        ("badge-right", &cfg.badge_right),
        ("headline", &cfg.headline_a),
        ("kicker", &cfg.right_kicker),
        ("right-text", &cfg.right_text),
        ("cta-primary-label", &cfg.cta_label),
        ("cta-secondary-label", &cfg.secondary_cta_label),
    ];
    for (role, value) in text_slots {
        if let Some(el) = role_element(root, role) {
            set_text(&el, value);
        }
    }

    // The smoke headline exists twice: a blurred ghost and the masked copy.
    for role in ["headline-ghost", "headline-reveal"] {
        if let Some(el) = role_element(root, role) {
            set_text(&el, &cfg.headline_b);
        }
    }

    if let Some(el) = role_element(root, "marquee") {
        set_text(&el, &format!("• {m} • {m}", m = cfg.marquee_text));
    }

    if let Some(el) = role_element(root, "cta-primary") {
        let _ = el.set_attribute("href", &cfg.cta_href);
    }
    if let Some(el) = role_element(root, "cta-secondary") {
        let _ = el.set_attribute("href", &cfg.secondary_cta_href);
    }

    if let Some(nav) = role_element(root, "nav") {
        if cfg.show_nav {
            nav.set_inner_html("");
            for item in cfg.nav.iter().take(NAV_MAX) {
                if let Ok(a) = document.create_element("a") {
                    let _ = a.set_attribute("href", &item.href);
                    a.set_text_content(Some(&item.label));
                    let _ = nav.append_child(&a);
                }
            }
        } else {
            hide(&nav);
        }
    }

    if let Some(chips) = role_element(root, "chips") {
        chips.set_inner_html("");
        for (i, chip) in cfg.chips.iter().take(CHIP_MAX).enumerate() {
            if let Ok(span) = document.create_element("span") {
                span.set_class_name("hero-chip");
                if i == 0 {
                    let _ = span.set_attribute("data-active", "1");
                }
                span.set_text_content(Some(chip));
                let _ = chips.append_child(&span);
            }
        }
    }

    if let Some(stats) = role_element(root, "stats") {
        stats.set_inner_html("");
        for stat in cfg.stats.iter().take(STAT_MAX) {
            let (Ok(card), Ok(label), Ok(value)) = (
                document.create_element("div"),
                document.create_element("div"),
                document.create_element("div"),
            ) else {
                continue;
            };
            card.set_class_name("hero-stat");
            label.set_class_name("hero-stat-label");
            value.set_class_name("hero-stat-value");
            label.set_text_content(Some(&stat.label));
            value.set_text_content(Some(&stat.value));
            let _ = card.append_child(&label);
            let _ = card.append_child(&value);
            let _ = stats.append_child(&card);
        }
    }

    if !cfg.show_accent_line {
        if let Some(el) = role_element(root, "accent-line") {
            hide(&el);
        }
    }
}

/// Apply a published layout mode: flip the root attribute and resize the orb.
pub(crate) fn apply_layout(els: &HeroElements, cfg: &HeroConfig, mode: LayoutMode) {
    let _ = els.root.set_attribute("data-layout", mode.as_str());
    if let Some(orb) = &els.orb {
        let size = cfg.orb_final_size(mode);
        set_style(orb, "width", &format!("{size:.0}px"));
        set_style(orb, "height", &format!("{size:.0}px"));
    }
}
