use crate::constants::{WISH_DELAY_MS, WISH_MESSAGE_ID};
use crate::core::decor::ConfettiBurst;
use crate::dom;
use crate::widgets::confetti;
use web_sys as web;

/// Candles go out one click at a time; the wish appears once all are out.
pub fn wire_candles(document: &web::Document) {
    let flames = dom::query_all(document, ".flame");
    let smokes = dom::query_all(document, ".smoke");
    if flames.is_empty() {
        log::warn!("[cake] no candles on the page");
        return;
    }
    for (i, flame) in flames.iter().enumerate() {
        let flame_el = flame.clone();
        let smoke = smokes.get(i).cloned();
        let doc = document.clone();
        dom::listen(flame, "click", move |_: web::Event| {
            dom::add_class(&flame_el, "hidden");
            if let Some(smoke) = &smoke {
                dom::remove_class(smoke, "hidden");
            }
            check_candles(&doc);
        });
    }
}

fn check_candles(document: &web::Document) {
    if !dom::query_all(document, ".flame:not(.hidden)").is_empty() {
        return;
    }
    let doc = document.clone();
    dom::set_timeout(WISH_DELAY_MS, move || {
        if let Some(wish) = doc.get_element_by_id(WISH_MESSAGE_ID) {
            dom::remove_class(&wish, "hidden");
        }
    });
    confetti::fire(&ConfettiBurst::candles_out());
    log::info!("[cake] all candles out");
}
