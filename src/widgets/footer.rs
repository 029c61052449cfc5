use crate::constants::CURRENT_DATE_ID;
use js_sys::{Object, Reflect};
use wasm_bindgen::JsValue;
use web_sys as web;

/// Today's date in long US form, e.g. "October 18, 2026".
pub fn write_current_date(document: &web::Document) {
    let Some(el) = document.get_element_by_id(CURRENT_DATE_ID) else {
        return;
    };
    let opts = Object::new();
    for (key, value) in [("year", "numeric"), ("month", "long"), ("day", "numeric")] {
        _ = Reflect::set(&opts, &JsValue::from_str(key), &JsValue::from_str(value));
    }
    let text: String = js_sys::Date::new_0()
        .to_locale_date_string("en-US", &opts)
        .into();
    el.set_text_content(Some(&text));
}
