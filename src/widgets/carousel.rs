use crate::constants::CAROUSEL_AUTOPLAY_MS;
use crate::core::carousel::{slide_offset, Carousel};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const CURRENT: &str = "current-slide";

/// DOM side of the photo carousel: a translated track of absolutely
/// positioned slides plus a row of dots.
pub struct CarouselView {
    track: web::HtmlElement,
    slides: Vec<web::Element>,
    dots: Vec<web::Element>,
    slide_width: f64,
    state: RefCell<Carousel>,
}

impl CarouselView {
    pub fn from_document(document: &web::Document) -> anyhow::Result<Self> {
        let track = document
            .query_selector(".carousel-track")
            .ok()
            .flatten()
            .ok_or_else(|| anyhow::anyhow!("missing .carousel-track"))?
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let slides = children(&track);
        let first = slides
            .first()
            .ok_or_else(|| anyhow::anyhow!("carousel has no slides"))?;
        let slide_width = first.get_bounding_client_rect().width();
        let dots = document
            .query_selector(".carousel-nav")
            .ok()
            .flatten()
            .map(|nav| children(&nav))
            .unwrap_or_default();

        for (i, slide) in slides.iter().enumerate() {
            if let Some(slide) = slide.dyn_ref::<web::HtmlElement>() {
                dom::set_style(slide, "left", &format!("{}px", slide_offset(i, slide_width)));
            }
        }
        let mut state = Carousel::new(slides.len());
        if let Some(i) = slides.iter().position(|s| s.class_list().contains(CURRENT)) {
            state.go_to(i);
        }
        Ok(Self {
            track,
            slides,
            dots,
            slide_width,
            state: RefCell::new(state),
        })
    }

    pub fn next(&self) {
        let (from, to) = {
            let mut s = self.state.borrow_mut();
            let from = s.current();
            (from, s.next())
        };
        self.show(from, to);
    }

    pub fn prev(&self) {
        let (from, to) = {
            let mut s = self.state.borrow_mut();
            let from = s.current();
            (from, s.prev())
        };
        self.show(from, to);
    }

    fn show(&self, from: usize, to: usize) {
        dom::set_style(
            &self.track,
            "transform",
            &format!("translateX(-{}px)", slide_offset(to, self.slide_width)),
        );
        for group in [&self.slides, &self.dots] {
            if let Some(el) = group.get(from) {
                dom::remove_class(el, CURRENT);
            }
            if let Some(el) = group.get(to) {
                dom::add_class(el, CURRENT);
            }
        }
    }
}

fn children(el: &web::Element) -> Vec<web::Element> {
    let list = el.children();
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

/// Buttons and autoplay. Arrow keys are wired with the global key handler.
pub fn wire_carousel(document: &web::Document) -> anyhow::Result<Rc<CarouselView>> {
    let view = Rc::new(CarouselView::from_document(document)?);

    if let Some(btn) = document.query_selector(".carousel-button--right").ok().flatten() {
        let v = view.clone();
        dom::listen(&btn, "click", move |_: web::Event| v.next());
    }
    if let Some(btn) = document.query_selector(".carousel-button--left").ok().flatten() {
        let v = view.clone();
        dom::listen(&btn, "click", move |_: web::Event| v.prev());
    }

    let autoplay = view.clone();
    dom::set_interval(CAROUSEL_AUTOPLAY_MS, move || autoplay.next());
    log::info!("[carousel] {} slides", view.state.borrow().len());
    Ok(view)
}
