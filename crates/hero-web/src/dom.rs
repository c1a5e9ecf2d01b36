use hero_core::Bounds;
use wasm_bindgen::JsCast;
use web_sys as web;

// ---------------- Element lookup ----------------

/// Find the child element tagged with `data-hero-role="<role>"`.
pub(crate) fn role_element(root: &web::Element, role: &str) -> Option<web::HtmlElement> {
    root.query_selector(&format!("[data-hero-role=\"{role}\"]"))
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

// ---------------- Style/content helpers ----------------

#[inline]
pub(crate) fn set_style(el: &web::HtmlElement, prop: &str, value: &str) {
    let _ = el.style().set_property(prop, value);
}

#[inline]
pub(crate) fn set_text(el: &web::HtmlElement, text: &str) {
    el.set_text_content(Some(text));
}

#[inline]
pub(crate) fn hide(el: &web::HtmlElement) {
    set_style(el, "display", "none");
}

/// Bounding box of an element in CSS pixels, as the core crate expects it.
#[inline]
pub(crate) fn element_bounds(el: &web::Element) -> Bounds {
    let r = el.get_bounding_client_rect();
    Bounds::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}
