use crate::core::flipbook::Flipbook;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_flipbook(document: &web::Document) {
    let pages = dom::query_all(document, ".page");
    if pages.is_empty() {
        log::warn!("[book] no pages");
        return;
    }
    let book = document.query_selector(".book").ok().flatten();
    let state = Rc::new(RefCell::new(Flipbook::new(pages.len())));
    let pages = Rc::new(pages);

    for (i, page) in pages.iter().enumerate() {
        let pages = pages.clone();
        let state = state.clone();
        let book = book.clone();
        dom::listen(page, "click", move |ev: web::Event| {
            ev.stop_propagation();
            let mut s = state.borrow_mut();
            s.click(i);
            if let (true, Some(book)) = (s.is_open(), &book) {
                dom::add_class(book, "book-open");
            }
            for (j, el) in pages.iter().enumerate() {
                dom::set_class(el, "flipped", s.is_flipped(j));
            }
        });
    }
}
