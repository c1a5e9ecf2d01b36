//! Per-frame advancement: springs and ambient loops tick once per animation
//! frame, then the style writes happen. The mask is not updated here; it has
//! its own coalesced callback (see `events`).

use std::cell::RefCell;
use std::rc::Rc;

use hero_core::constants::{ENTRANCE_BLUR_PX, ENTRANCE_RISE_PX};
use hero_core::MaskDescriptor;
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom::set_style;
use crate::{HeroElements, HeroState, RafCells};

pub(crate) struct FrameContext {
    state: Rc<RefCell<HeroState>>,
    els: Rc<HeroElements>,
    last_instant: Instant,
    entrance_done: bool,
}

impl FrameContext {
    fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let mut st = self.state.borrow_mut();
        st.motion.advance(dt);
        st.entrance.tick(dt);
        st.marquee.tick(dt);
        st.float_cue.tick(dt);

        let els = &self.els;
        if let Some(el) = &els.backdrop {
            let s = st.motion.background_shift_pct();
            set_style(el, "transform", &format!("translate({:.3}%, {:.3}%)", s.x, s.y));
        }
        if let Some(el) = &els.spotlight {
            let p = st.motion.spotlight_pct();
            set_style(
                el,
                "background",
                &format!(
                    "radial-gradient(800px 480px at {:.2}% {:.2}%, rgba(255,255,255,0.07), transparent 60%)",
                    p.x, p.y
                ),
            );
        }
        if let Some(el) = &els.orb {
            let t = st.motion.orb_tilt_deg();
            set_style(
                el,
                "transform",
                &format!(
                    "translate(-50%, -50%) rotateX({:.2}deg) rotateY({:.2}deg)",
                    t.x, t.y
                ),
            );
        }
        if let Some(el) = &els.haze {
            let h = st.motion.haze_shift_px();
            set_style(el, "transform", &format!("translate({:.2}px, {:.2}px)", h.x, h.y));
        }
        if let Some(el) = &els.primary_cta {
            let m = st.motion.primary_shift_px();
            set_style(el, "transform", &format!("translate({:.2}px, {:.2}px)", m.x, m.y));
        }
        if let Some(el) = &els.secondary_cta {
            let m = st.motion.secondary_shift_px();
            set_style(el, "transform", &format!("translate({:.2}px, {:.2}px)", m.x, m.y));
        }
        if let Some(el) = &els.marquee_track {
            set_style(el, "transform", &format!("translateX({:.1}px)", st.marquee.offset_px()));
        }
        if let Some(el) = &els.scroll_cue {
            set_style(el, "transform", &format!("translateY({:.2}px)", st.float_cue.offset_px()));
        }

        // Entrance writes stop one frame after the progress clamps at 1, so
        // the final resting values always land.
        if !self.entrance_done {
            if let Some(el) = &els.headline {
                let p = st.entrance.progress();
                set_style(el, "opacity", &format!("{p:.3}"));
                set_style(el, "filter", &format!("blur({:.2}px)", (1.0 - p) * ENTRANCE_BLUR_PX));
                set_style(
                    el,
                    "transform",
                    &format!("translateY({:.2}px)", (1.0 - p) * ENTRANCE_RISE_PX),
                );
            }
            self.entrance_done = st.entrance.is_finished();
        }
    }
}

pub(crate) fn apply_mask(els: &HeroElements, desc: MaskDescriptor) {
    if let Some(el) = &els.reveal {
        let css = format!(
            "radial-gradient(circle {:.0}px at {:.1}% {:.1}%, #000 0%, #000 45%, transparent 70%)",
            desc.radius_px, desc.x_percent, desc.y_percent
        );
        set_style(el, "-webkit-mask-image", &css);
        set_style(el, "mask-image", &css);
    }
}

pub(crate) fn start_loop(
    state: Rc<RefCell<HeroState>>,
    els: Rc<HeroElements>,
    cells: Rc<RafCells>,
) {
    let mut ctx = FrameContext {
        state,
        els,
        last_instant: Instant::now(),
        entrance_done: false,
    };
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let cells_tick = cells.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !cells_tick.alive.get() {
            return;
        }
        ctx.frame();
        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            ) {
                cells_tick.loop_id.set(Some(id));
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Ok(id) =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        {
            cells.loop_id.set(Some(id));
        }
    }
}
