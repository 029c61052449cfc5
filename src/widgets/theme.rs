use crate::constants::{THEME_ATTR, THEME_TOGGLE_ID};
use crate::core::Theme;
use crate::dom;
use web_sys as web;

/// Theme currently set on the root element.
pub fn current(document: &web::Document) -> Theme {
    let attr = document
        .document_element()
        .and_then(|root| root.get_attribute(THEME_ATTR));
    Theme::from_attr(attr.as_deref())
}

pub fn wire_theme_toggle(document: &web::Document) {
    let doc = document.clone();
    dom::add_click_listener(document, THEME_TOGGLE_ID, move || {
        let next = current(&doc).toggled();
        if let Some(root) = doc.document_element() {
            _ = root.set_attribute(THEME_ATTR, next.as_attr());
        }
        if let Some(icon) = doc
            .get_element_by_id(THEME_TOGGLE_ID)
            .and_then(|btn| dom::query_one(&btn, "i"))
        {
            icon.set_class_name(next.icon_class());
        }
        log::info!("[theme] {}", next.as_attr());
    });
}
