use crate::constants::{LETTER_BODY_ID, LETTER_MODAL_ID, LETTER_TITLE_ID};
use crate::core::letters::LetterKind;
use crate::dom;
use crate::overlay;
use wasm_bindgen::prelude::*;
use web_sys as web;

/// Open the letter modal with the letter for `kind` ("sad", "happy", "bored").
/// Called from inline `onclick` handlers in the page.
#[wasm_bindgen(js_name = openLetter)]
pub fn open_letter(kind: &str) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let Some(letter) = LetterKind::parse(kind) else {
        log::warn!("[letters] unknown letter {:?}", kind);
        return;
    };
    set_text(&document, LETTER_TITLE_ID, letter.title());
    set_text(&document, LETTER_BODY_ID, letter.body());
    overlay::open_by_id(&document, LETTER_MODAL_ID);
}

#[wasm_bindgen(js_name = closeLetter)]
pub fn close_letter() {
    if let Some(document) = dom::window_document() {
        overlay::close_by_id(&document, LETTER_MODAL_ID);
    }
}

fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}
