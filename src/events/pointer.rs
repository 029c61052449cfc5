use crate::core::constants::TRAIL_BURST;
use crate::core::{PointerState, StarField, TrailSim};
use crate::dom;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Shared state the window input handlers write to. The star field and the
/// trail are optional: a simulation that failed to start is simply absent.
#[derive(Clone)]
pub struct InputWiring {
    pub pointer: Rc<RefCell<PointerState>>,
    pub trail: Option<Rc<RefCell<TrailSim>>>,
    pub stars: Option<Rc<RefCell<StarField>>>,
    /// Canvases kept at full viewport size.
    pub viewport_canvases: Vec<web::HtmlCanvasElement>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_resize(&w);
}

fn wire_pointermove(w: &InputWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let w = w.clone();
    let mut rng = StdRng::from_entropy();
    dom::listen(&window, "pointermove", move |ev: web::PointerEvent| {
        let (x, y) = (ev.client_x() as f32, ev.client_y() as f32);
        w.pointer.borrow_mut().set(x, y);
        if let Some(trail) = &w.trail {
            trail
                .borrow_mut()
                .spawn(Vec2::new(x, y), TRAIL_BURST, &mut rng);
        }
    });
}

fn wire_resize(w: &InputWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let w = w.clone();
    let mut rng = StdRng::from_entropy();
    dom::listen(&window, "resize", move |_: web::Event| {
        let size = dom::viewport_size().unwrap_or(Vec2::ZERO);
        let (pw, ph) = (size.x as u32, size.y as u32);
        for canvas in &w.viewport_canvases {
            canvas.set_width(pw);
            canvas.set_height(ph);
        }
        if let Some(stars) = &w.stars {
            stars.borrow_mut().resize(size.x, size.y, &mut rng);
            log::debug!("[stars] resized to {}x{}", pw, ph);
        }
    });
}
