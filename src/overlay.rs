use crate::constants::{MODAL_HIDE_DELAY_MS, MODAL_SHOW_DELAY_MS};
use crate::dom;
use web_sys as web;

/// Unhide a modal, then add `show` on the next tick so the CSS transition runs.
pub fn open(el: &web::Element) {
    dom::remove_class(el, "hidden");
    let el = el.clone();
    dom::set_timeout(MODAL_SHOW_DELAY_MS, move || dom::add_class(&el, "show"));
}

/// Reverse of [`open`]: fade out, then hide once the transition is over.
pub fn close(el: &web::Element) {
    dom::remove_class(el, "show");
    let el = el.clone();
    dom::set_timeout(MODAL_HIDE_DELAY_MS, move || dom::add_class(&el, "hidden"));
}

#[inline]
pub fn is_hidden(el: &web::Element) -> bool {
    el.class_list().contains("hidden")
}

pub fn open_by_id(document: &web::Document, id: &str) {
    match document.get_element_by_id(id) {
        Some(el) => open(&el),
        None => log::warn!("[overlay] no #{}", id),
    }
}

pub fn close_by_id(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        if !is_hidden(&el) {
            close(&el);
        }
    }
}

/// Fade an overlay out and drop it from the DOM after `ms`.
pub fn fade_and_remove(el: &web::Element, ms: i32) {
    dom::add_class(el, "hidden-fade");
    let el = el.clone();
    dom::set_timeout(ms, move || el.remove());
}
