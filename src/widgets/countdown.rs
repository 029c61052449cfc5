use crate::constants::{COUNTDOWN_DIGIT_IDS, COUNTDOWN_OVERLAY_ID, COUNTDOWN_TARGET, COUNTDOWN_TICK_MS};
use crate::core::countdown;
use crate::dom;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Gate the page behind a countdown until the birthday arrives.
pub fn wire_countdown(document: &web::Document) -> anyhow::Result<()> {
    let target_ms = js_sys::Date::new(&JsValue::from_str(COUNTDOWN_TARGET)).get_time();
    if target_ms.is_nan() {
        return Err(anyhow::anyhow!("unparseable countdown target {:?}", COUNTDOWN_TARGET));
    }

    // Render immediately, then once per tick until the target passes.
    if !tick(document, target_ms) {
        return Ok(());
    }
    let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let handle_tick = handle.clone();
    let doc = document.clone();
    let id = dom::set_interval(COUNTDOWN_TICK_MS, move || {
        if !tick(&doc, target_ms) {
            if let Some(h) = handle_tick.take() {
                dom::clear_interval(h);
            }
        }
    });
    handle.set(id);
    Ok(())
}

/// Update the gate; returns false once it has been lifted.
fn tick(document: &web::Document, target_ms: f64) -> bool {
    let body = document.body();
    match countdown::remaining(target_ms, js_sys::Date::now()) {
        None => {
            if let Some(overlay) = document.get_element_by_id(COUNTDOWN_OVERLAY_ID) {
                dom::add_class(&overlay, "hidden");
            }
            if let Some(body) = &body {
                dom::set_style(body, "overflow", "auto");
            }
            log::info!("[countdown] target reached, gate lifted");
            false
        }
        Some(left) => {
            for (id, label) in COUNTDOWN_DIGIT_IDS.iter().zip(left.labels()) {
                if let Some(el) = document.get_element_by_id(id) {
                    el.set_text_content(Some(&label));
                }
            }
            if let Some(body) = &body {
                dom::set_style(body, "overflow", "hidden");
            }
            true
        }
    }
}
