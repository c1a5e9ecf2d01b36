#![cfg(target_arch = "wasm32")]
//! WASM glue for the cover hero. The host page supplies the markup (elements
//! tagged with `data-hero-role`); this crate fills the content slots, tracks
//! the pointer, advances the animation core once per frame, and writes the
//! resulting style values back.

mod content;
mod dom;
mod events;
mod frame;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use hero_core::{
    BreakpointDetector, Entrance, FloatLoop, HeroConfig, HeroMotion, MarqueeLoop, MaskScheduler,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Shared per-instance animation state, confined to the UI timeline.
pub(crate) struct HeroState {
    pub motion: HeroMotion,
    pub mask: MaskScheduler,
    pub breakpoints: BreakpointDetector,
    pub entrance: Entrance,
    pub marquee: MarqueeLoop,
    pub float_cue: FloatLoop,
    pub config: HeroConfig,
}

/// Role elements the frame loop writes to. Absent roles are skipped.
pub(crate) struct HeroElements {
    pub root: web::HtmlElement,
    pub backdrop: Option<web::HtmlElement>,
    pub spotlight: Option<web::HtmlElement>,
    pub orb: Option<web::HtmlElement>,
    pub haze: Option<web::HtmlElement>,
    pub headline: Option<web::HtmlElement>,
    pub reveal: Option<web::HtmlElement>,
    pub primary_cta: Option<web::HtmlElement>,
    pub secondary_cta: Option<web::HtmlElement>,
    pub marquee_track: Option<web::HtmlElement>,
    pub scroll_cue: Option<web::HtmlElement>,
}

impl HeroElements {
    fn collect(root: &web::HtmlElement) -> Self {
        let role = |name: &str| dom::role_element(root, name);
        Self {
            backdrop: role("backdrop"),
            spotlight: role("spotlight"),
            orb: role("orb"),
            haze: role("haze"),
            headline: role("headline"),
            reveal: role("headline-reveal"),
            primary_cta: role("cta-primary"),
            secondary_cta: role("cta-secondary"),
            marquee_track: role("marquee"),
            scroll_cue: role("scroll-cue"),
            root: root.clone(),
        }
    }
}

/// Liveness flag plus pending `requestAnimationFrame` ids, shared between the
/// frame loop, the mask callback, and teardown.
pub(crate) struct RafCells {
    pub alive: Cell<bool>,
    pub loop_id: Cell<Option<i32>>,
    pub mask_id: Cell<Option<i32>>,
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hero-web ready");
    Ok(())
}

/// Owner of one mounted hero. Dropping it on the JS side without calling
/// `dispose` keeps the hero running for the page lifetime.
#[wasm_bindgen]
pub struct HeroHandle {
    teardown: Option<events::Teardown>,
}

#[wasm_bindgen]
impl HeroHandle {
    /// Stop the frame loop, cancel pending frame callbacks, and release the
    /// pointer and resize listeners.
    pub fn dispose(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown.dispose();
        }
    }
}

/// Mount the hero onto the element matching `selector`.
#[wasm_bindgen]
pub fn mount(selector: &str) -> Result<HeroHandle, JsValue> {
    init(selector).map_err(|e| {
        log::error!("mount error: {e:?}");
        JsValue::from_str(&e.to_string())
    })
}

fn init(selector: &str) -> anyhow::Result<HeroHandle> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let root: web::HtmlElement = document
        .query_selector(selector)
        .ok()
        .flatten()
        .ok_or_else(|| anyhow::anyhow!("missing hero root {selector}"))?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("hero root is not an HTML element"))?;

    let config = content::config_from_attrs(&root);
    content::apply_content(&document, &root, &config);
    log::info!(
        "hero mounted on {selector}: nav={} chips={} stats={}",
        config.nav.len(),
        config.chips.len(),
        config.stats.len()
    );

    let els = Rc::new(HeroElements::collect(&root));
    let state = Rc::new(RefCell::new(HeroState {
        motion: HeroMotion::new(),
        mask: MaskScheduler::new(config.smoke_radius),
        breakpoints: BreakpointDetector::new(),
        entrance: Entrance::new(),
        marquee: MarqueeLoop::new(),
        float_cue: FloatLoop::new(),
        config,
    }));

    // Initial layout mode and centered mask, before the first frame.
    {
        let st = &mut *state.borrow_mut();
        if let Some(mode) = st.breakpoints.update(events::viewport_width(&window)) {
            content::apply_layout(&els, &st.config, mode);
        }
        let desc = st.mask.reset();
        frame::apply_mask(&els, desc);
    }

    let cells = Rc::new(RafCells {
        alive: Cell::new(true),
        loop_id: Cell::new(None),
        mask_id: Cell::new(None),
    });

    let teardown = events::wire(window, state.clone(), els.clone(), cells.clone());
    frame::start_loop(state, els, cells);

    Ok(HeroHandle {
        teardown: Some(teardown),
    })
}
