use crate::canvas::CanvasSurface;
use crate::core::{FrameStats, PointerState, StarField, TextSim, TrailSim};
use crate::dom;
use crate::widgets::theme;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// What a single frame step did.
pub enum Frame {
    Drawn,
    /// Shared state was busy (an event handler holds it); try next refresh.
    Skipped,
}

pub struct StarFrame {
    pub field: Rc<RefCell<StarField>>,
    pub pointer: Rc<RefCell<PointerState>>,
    pub surface: CanvasSurface,
    pub document: web::Document,
}

impl StarFrame {
    pub fn frame(&mut self) -> anyhow::Result<Frame> {
        let Ok(mut field) = self.field.try_borrow_mut() else {
            return Ok(Frame::Skipped);
        };
        let pointer = self.pointer.borrow().position();
        // polled every frame so a toggle shows up on the next refresh
        let theme = theme::current(&self.document);
        field.update();
        field.draw(&mut self.surface, pointer, theme)?;
        Ok(Frame::Drawn)
    }
}

pub struct TrailFrame {
    pub trail: Rc<RefCell<TrailSim>>,
    pub surface: CanvasSurface,
}

impl TrailFrame {
    pub fn frame(&mut self) -> anyhow::Result<Frame> {
        let Ok(mut trail) = self.trail.try_borrow_mut() else {
            return Ok(Frame::Skipped);
        };
        trail.update();
        trail.draw(&mut self.surface)?;
        Ok(Frame::Drawn)
    }
}

pub struct TextFrame {
    pub text: TextSim,
    pub pointer: Rc<RefCell<PointerState>>,
    pub surface: CanvasSurface,
}

impl TextFrame {
    pub fn frame(&mut self) -> anyhow::Result<Frame> {
        let origin = dom::client_origin(self.surface.canvas());
        let local = self.pointer.borrow().local_to(origin);
        self.text.update(local);
        self.text.draw(&mut self.surface)?;
        Ok(Frame::Drawn)
    }
}

/// Drive `step` from `requestAnimationFrame` for the lifetime of the page.
///
/// Errors are logged (throttled) and the loop keeps going; each simulation
/// gets its own loop so one failing step cannot stall the others.
pub fn start_loop(label: &'static str, mut step: impl FnMut() -> anyhow::Result<Frame> + 'static) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let mut stats = FrameStats::default();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        match step() {
            Ok(Frame::Drawn) => stats.record_ok(),
            Ok(Frame::Skipped) => stats.record_skip(),
            Err(e) => {
                if stats.record_failure() {
                    log::error!(
                        "[{}] frame step failed ({} of {} frames): {:?}",
                        label,
                        stats.failures,
                        stats.frames,
                        e
                    );
                }
            }
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
    log::info!("[{}] animation loop started", label);
}

/// Call `step` every frame until `duration` has elapsed. Always runs at least
/// once.
pub fn run_for(duration: Duration, mut step: impl FnMut() + 'static) {
    let end = Instant::now() + duration;
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        step();
        if Instant::now() < end {
            request_frame(&tick_clone);
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
