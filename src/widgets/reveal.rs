use crate::constants::{REVEAL_SELECTOR, REVEAL_THRESHOLD};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Fade sections in the first time they scroll into view.
pub fn wire_reveal(document: &web::Document) -> anyhow::Result<()> {
    let callback = Closure::<dyn FnMut(js_sys::Array)>::wrap(Box::new(|entries: js_sys::Array| {
        for entry in entries.iter() {
            let entry: web::IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                dom::add_class(&entry.target(), "visible");
            }
        }
    }));
    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();

    let targets = dom::query_all(document, REVEAL_SELECTOR);
    for el in &targets {
        dom::add_class(el, "fade-in-up");
        observer.observe(el);
    }
    log::info!("[reveal] observing {} elements", targets.len());
    Ok(())
}
