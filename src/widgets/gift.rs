use crate::constants::*;
use crate::core::decor::ConfettiBurst;
use crate::dom;
use crate::frame;
use crate::overlay;
use crate::widgets::confetti;
use std::time::Duration;
use web_sys as web;

/// The gift opens once: side cannons fire for a few seconds and the popup
/// card follows.
pub fn wire_gift(document: &web::Document) {
    let Some(container) = document.get_element_by_id(GIFT_CONTAINER_ID) else {
        log::warn!("[gift] no #{}", GIFT_CONTAINER_ID);
        return;
    };
    let doc = document.clone();
    let container_el = container.clone();
    dom::listen(&container, "click", move |_: web::Event| {
        let Some(gift_box) = dom::query_one(&container_el, ".gift-box") else {
            return;
        };
        if gift_box.class_list().contains("open") {
            return;
        }
        dom::add_class(&gift_box, "open");
        log::info!("[gift] opened");

        frame::run_for(Duration::from_millis(GIFT_CONFETTI_MS), || {
            confetti::fire(&ConfettiBurst::gift_side(true));
            confetti::fire(&ConfettiBurst::gift_side(false));
        });

        let doc_popup = doc.clone();
        dom::set_timeout(GIFT_POPUP_DELAY_MS, move || {
            overlay::open_by_id(&doc_popup, POPUP_OVERLAY_ID);
        });
    });

    let doc_close = document.clone();
    dom::add_click_listener(document, CLOSE_POPUP_ID, move || {
        overlay::close_by_id(&doc_close, POPUP_OVERLAY_ID);
    });
}
