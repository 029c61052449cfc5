use crate::dom;
use crate::widgets::carousel::CarouselView;
use std::rc::Rc;
use web_sys as web;

/// Carousel direction bound to a key, if any.
#[inline]
pub fn carousel_step_for_key(key: &str) -> Option<i32> {
    match key {
        "ArrowRight" => Some(1),
        "ArrowLeft" => Some(-1),
        _ => None,
    }
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, carousel: &CarouselView) {
    match carousel_step_for_key(&ev.key()) {
        Some(1) => carousel.next(),
        Some(_) => carousel.prev(),
        None => {}
    }
}

pub fn wire_global_keydown(carousel: Rc<CarouselView>) {
    let Some(document) = dom::window_document() else {
        return;
    };
    dom::listen(&document, "keydown", move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &carousel);
    });
}
