//! Static hero content configuration.
//!
//! Every input is optional and defaulted. List-valued fields arrive as JSON
//! strings; malformed input silently falls back to the built-in default list
//! and never surfaces an error to the caller. The strict parsing layer below
//! exists so the fallback path can say why it fired.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::constants::COMPACT_ORB_SCALE;
use crate::layout::LayoutMode;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct StatItem {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid JSON list: {0}")]
    Json(#[from] serde_json::Error),
}

/// Strict variant of the list parsers; the lenient wrappers below implement
/// the silent-fallback contract.
pub fn parse_json_list<T: DeserializeOwned>(raw: &str) -> Result<Vec<T>, ConfigError> {
    Ok(serde_json::from_str(raw)?)
}

fn json_or<T: DeserializeOwned>(field: &str, raw: &str, fallback: Vec<T>) -> Vec<T> {
    match parse_json_list(raw) {
        Ok(items) => items,
        Err(e) => {
            log::debug!("[config] {field} fell back to default: {e}");
            fallback
        }
    }
}

pub fn parse_nav(raw: &str) -> Vec<NavItem> {
    json_or("nav", raw, default_nav())
}

pub fn parse_chips(raw: &str) -> Vec<String> {
    json_or("chips", raw, default_chips())
}

pub fn parse_stats(raw: &str) -> Vec<StatItem> {
    json_or("stats", raw, default_stats())
}

pub fn default_nav() -> Vec<NavItem> {
    [
        ("Services", "#services"),
        ("About", "#about"),
        ("Projects", "#projects"),
        ("Contact", "#contact"),
    ]
    .into_iter()
    .map(|(label, href)| NavItem {
        label: label.to_string(),
        href: href.to_string(),
    })
    .collect()
}

pub fn default_chips() -> Vec<String> {
    [
        "Restauración",
        "Nightlife",
        "Ads",
        "Contenido",
        "Branding",
        "Web & SEO",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

pub fn default_stats() -> Vec<StatItem> {
    [
        ("Enfoque", "Reservas & Aforo"),
        ("Reporting", "Semanal"),
        ("Optimización", "Siempre"),
    ]
    .into_iter()
    .map(|(label, value)| StatItem {
        label: label.to_string(),
        value: value.to_string(),
    })
    .collect()
}

/// Full content configuration for one hero instance.
#[derive(Clone, Debug)]
pub struct HeroConfig {
    pub brand: String,
    pub nav: Vec<NavItem>,
    pub headline_a: String,
    pub headline_b: String,
    pub right_kicker: String,
    pub right_text: String,
    pub cta_label: String,
    pub cta_href: String,
    pub secondary_cta_label: String,
    pub secondary_cta_href: String,
    pub accent: String,
    pub smoke_radius: f32,
    pub orb_size: f32,
    pub show_nav: bool,
    pub show_accent_line: bool,
    pub chips: Vec<String>,
    pub stats: Vec<StatItem>,
    pub marquee_text: String,
    pub badge_left: String,
    pub badge_right: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            brand: "Last Agency".to_string(),
            nav: default_nav(),
            headline_a: "Marketing,".to_string(),
            headline_b: "Sin humo".to_string(),
            right_kicker: "© Restauración & ocio nocturno".to_string(),
            right_text: "Estrategia, creatividad y performance para llenar mesas y pistas. \
                         Sin promesas mágicas: datos, ejecución y resultados medibles."
                .to_string(),
            cta_label: "Agenda una llamada".to_string(),
            cta_href: "#contact".to_string(),
            secondary_cta_label: "Ver servicios".to_string(),
            secondary_cta_href: "#services".to_string(),
            accent: "#00D7FF".to_string(),
            smoke_radius: 120.0,
            orb_size: 520.0,
            show_nav: true,
            show_accent_line: true,
            chips: default_chips(),
            stats: default_stats(),
            marquee_text: "Ads • Reels • UGC • Influencers • Branding • Web • SEO".to_string(),
            badge_left: "Marketing sin humo".to_string(),
            badge_right: "Disponible".to_string(),
        }
    }
}

impl HeroConfig {
    /// Rendered orb diameter for the active layout mode.
    pub fn orb_final_size(&self, mode: LayoutMode) -> f32 {
        if mode.is_compact() {
            (self.orb_size * COMPACT_ORB_SCALE).round()
        } else {
            self.orb_size
        }
    }
}
