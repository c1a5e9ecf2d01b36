//! Event wiring and teardown.
//!
//! Pointer-move and resize handlers run synchronously; the only deferred work
//! is the coalesced mask callback, scheduled at most once per frame. All
//! listeners and pending callbacks are released through [`Teardown`] so
//! nothing writes to the DOM after `dispose`.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use hero_core::{centered_fraction, normalized_offset, HeroMotion};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::{content, dom, frame, HeroElements, HeroState, RafCells};

pub(crate) struct Teardown {
    window: web::Window,
    cells: Rc<RafCells>,
    unbind: Vec<Box<dyn FnOnce()>>,
}

impl Teardown {
    pub(crate) fn dispose(mut self) {
        self.cells.alive.set(false);
        if let Some(id) = self.cells.loop_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        if let Some(id) = self.cells.mask_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        for unbind in self.unbind.drain(..) {
            unbind();
        }
        log::info!("hero disposed");
    }
}

pub(crate) fn viewport_width(window: &web::Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

#[inline]
fn client_pos(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

pub(crate) fn wire(
    window: web::Window,
    state: Rc<RefCell<HeroState>>,
    els: Rc<HeroElements>,
    cells: Rc<RafCells>,
) -> Teardown {
    let mut unbind: Vec<Box<dyn FnOnce()>> = Vec::new();

    // Coalesced mask publication: one persistent callback, scheduled on
    // demand by the pointer-move handler.
    let mask_cb: Rc<Closure<dyn FnMut()>> = {
        let state = state.clone();
        let els = els.clone();
        let cells = cells.clone();
        Rc::new(Closure::wrap(Box::new(move || {
            cells.mask_id.set(None);
            if !cells.alive.get() {
                return;
            }
            let desc = state.borrow_mut().mask.run();
            frame::apply_mask(&els, desc);
        }) as Box<dyn FnMut()>))
    };

    // pointermove: normalize against the root bounds, feed springs + mask
    {
        let state_m = state.clone();
        let els_m = els.clone();
        let cells_m = cells.clone();
        let window_m = window.clone();
        let mask_cb_m = mask_cb.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let bounds = dom::element_bounds(&els_m.root);
            let off = normalized_offset(client_pos(&ev), bounds);
            let mut st = state_m.borrow_mut();
            st.motion.set_pointer(off);
            if st.mask.request(off) {
                if let Ok(id) =
                    window_m.request_animation_frame(mask_cb_m.as_ref().as_ref().unchecked_ref())
                {
                    cells_m.mask_id.set(Some(id));
                }
            }
        }) as Box<dyn FnMut(_)>);
        let _ = els
            .root
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        let target = els.root.clone();
        unbind.push(Box::new(move || {
            let _ = target.remove_event_listener_with_callback(
                "pointermove",
                closure.as_ref().unchecked_ref(),
            );
        }));
    }

    // pointerleave: springs glide home, mask re-centers immediately
    {
        let state_l = state.clone();
        let els_l = els.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            let mut st = state_l.borrow_mut();
            st.motion.clear_pointer();
            let desc = st.mask.reset();
            drop(st);
            frame::apply_mask(&els_l, desc);
        }) as Box<dyn FnMut(_)>);
        let _ = els
            .root
            .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
        let target = els.root.clone();
        unbind.push(Box::new(move || {
            let _ = target.remove_event_listener_with_callback(
                "pointerleave",
                closure.as_ref().unchecked_ref(),
            );
        }));
    }

    // CTA magnets
    if let Some(btn) = els.primary_cta.clone() {
        wire_magnet(
            &mut unbind,
            btn,
            state.clone(),
            HeroMotion::set_primary_target,
            HeroMotion::clear_primary,
        );
    }
    if let Some(btn) = els.secondary_cta.clone() {
        wire_magnet(
            &mut unbind,
            btn,
            state.clone(),
            HeroMotion::set_secondary_target,
            HeroMotion::clear_secondary,
        );
    }

    // resize: recompute the layout mode, apply only on change
    {
        let state_r = state.clone();
        let els_r = els.clone();
        let window_r = window.clone();
        let closure = Closure::wrap(Box::new(move || {
            let width = viewport_width(&window_r);
            let st = &mut *state_r.borrow_mut();
            if let Some(mode) = st.breakpoints.update(width) {
                content::apply_layout(&els_r, &st.config, mode);
            }
        }) as Box<dyn FnMut()>);
        let _ =
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        let target = window.clone();
        unbind.push(Box::new(move || {
            let _ = target
                .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }));
    }

    Teardown {
        window,
        cells,
        unbind,
    }
}

fn wire_magnet(
    unbind: &mut Vec<Box<dyn FnOnce()>>,
    btn: web::HtmlElement,
    state: Rc<RefCell<HeroState>>,
    set: fn(&mut HeroMotion, Vec2),
    clear: fn(&mut HeroMotion),
) {
    {
        let state = state.clone();
        let target = btn.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let fraction = centered_fraction(client_pos(&ev), dom::element_bounds(&target));
            set(&mut state.borrow_mut().motion, fraction);
        }) as Box<dyn FnMut(_)>);
        let _ = btn.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        let target = btn.clone();
        unbind.push(Box::new(move || {
            let _ = target.remove_event_listener_with_callback(
                "pointermove",
                closure.as_ref().unchecked_ref(),
            );
        }));
    }
    {
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            clear(&mut state.borrow_mut().motion);
        }) as Box<dyn FnMut(_)>);
        let _ =
            btn.add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
        unbind.push(Box::new(move || {
            let _ = btn.remove_event_listener_with_callback(
                "pointerleave",
                closure.as_ref().unchecked_ref(),
            );
        }));
    }
}
