use crate::canvas::CanvasSurface;
use crate::constants::{GARDEN_CANVAS_ID, GARDEN_HEIGHT_PX, GARDEN_TRIGGER_MARGIN_PX};
use crate::core::decor::{self, FLOWER_HEAD_Y, FLOWER_MAX_DELAY_MS};
use crate::dom;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// Footer garden that blooms the first time the visitor reaches the bottom.
pub fn wire_garden(document: &web::Document) -> anyhow::Result<()> {
    let surface = Rc::new(RefCell::new(CanvasSurface::by_id(document, GARDEN_CANVAS_ID)?));
    fit(&surface.borrow());

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

    let resize_surface = surface.clone();
    dom::listen(&window, "resize", move |_: web::Event| {
        fit(&resize_surface.borrow());
    });

    let grown = Rc::new(Cell::new(false));
    let doc = document.clone();
    dom::listen(&window, "scroll", move |_: web::Event| {
        if grown.get() || !at_page_bottom(&doc) {
            return;
        }
        grown.set(true);
        bloom(&surface);
    });
    Ok(())
}

fn fit(surface: &CanvasSurface) {
    let width = dom::viewport_size().map(|s| s.x as u32).unwrap_or(0);
    surface.set_size(width, GARDEN_HEIGHT_PX);
}

fn at_page_bottom(document: &web::Document) -> bool {
    let Some(window) = web::window() else {
        return false;
    };
    let inner_h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let body_h = document
        .body()
        .map(|b| b.offset_height() as f64)
        .unwrap_or(f64::MAX);
    inner_h + scroll_y >= body_h - GARDEN_TRIGGER_MARGIN_PX
}

/// Plant one flower per column, each after its own random delay.
fn bloom(surface: &Rc<RefCell<CanvasSurface>>) {
    let width = surface.borrow().canvas().width();
    let mut rng = StdRng::from_entropy();
    let mut planted = 0usize;
    for x in decor::flower_columns(width) {
        let delay = (rng.gen::<f64>() * FLOWER_MAX_DELAY_MS) as i32;
        let color = decor::random_petal_color(&mut rng);
        let surface = surface.clone();
        dom::set_timeout(delay, move || {
            let head = Vec2::new(x, FLOWER_HEAD_Y);
            if let Err(e) = decor::draw_flower(&mut *surface.borrow_mut(), head, &color) {
                log::warn!("[garden] flower at {} failed: {:?}", x, e);
            }
        });
        planted += 1;
    }
    log::info!("[garden] planting {} flowers", planted);
}
