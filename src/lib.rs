#![cfg(target_arch = "wasm32")]
use crate::canvas::CanvasSurface;
use crate::constants::*;
use crate::core::{Launch, PointerState, StarField, TextSim, TrailSim};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod canvas;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod widgets;

pub use widgets::letters::{close_letter, open_letter};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("birthday-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    widgets::footer::write_current_date(&document);
    let mut launch = Launch::default();
    wire_widgets(&document, &mut launch);

    // Ambient simulations share one pointer; each starts (or fails) alone.
    let pointer = Rc::new(RefCell::new(PointerState::default()));
    let stars = launch.attempt("stars", || start_stars(&document, &pointer));
    let trail = launch.attempt("trail", || start_trail(&document));

    let mut viewport_canvases = Vec::new();
    viewport_canvases.extend(stars.as_ref().map(|(_, canvas)| canvas.clone()));
    viewport_canvases.extend(trail.as_ref().map(|(_, canvas)| canvas.clone()));
    events::wire_input_handlers(events::InputWiring {
        pointer: pointer.clone(),
        trail: trail.map(|(sim, _)| sim),
        stars: stars.map(|(field, _)| field),
        viewport_canvases,
    });
    launch.log_summary();

    let doc_text = document.clone();
    dom::set_timeout(TEXT_INIT_DELAY_MS, move || {
        Launch::default().attempt("text", || start_particle_text(&doc_text, pointer));
    });

    Ok(())
}

/// Size the star canvas to the viewport and start the star loop. Returns the
/// field and its canvas for the resize handler.
fn start_stars(
    document: &web::Document,
    pointer: &Rc<RefCell<PointerState>>,
) -> anyhow::Result<(Rc<RefCell<StarField>>, web::HtmlCanvasElement)> {
    let surface = CanvasSurface::by_id(document, STAR_CANVAS_ID)?;
    let viewport = surface.fit_viewport();
    let field = Rc::new(RefCell::new(StarField::new(
        viewport.x,
        viewport.y,
        &mut StdRng::from_entropy(),
    )));
    log::info!(
        "[stars] {} stars on {}x{}",
        field.borrow().stars.len(),
        viewport.x,
        viewport.y
    );
    let canvas = surface.canvas().clone();
    let mut star_frame = frame::StarFrame {
        field: field.clone(),
        pointer: pointer.clone(),
        surface,
        document: document.clone(),
    };
    frame::start_loop("stars", move || star_frame.frame());
    Ok((field, canvas))
}

fn start_trail(
    document: &web::Document,
) -> anyhow::Result<(Rc<RefCell<TrailSim>>, web::HtmlCanvasElement)> {
    let surface = CanvasSurface::by_id(document, TRAIL_CANVAS_ID)?;
    surface.fit_viewport();
    let trail = Rc::new(RefCell::new(TrailSim::default()));
    let canvas = surface.canvas().clone();
    let mut trail_frame = frame::TrailFrame {
        trail: trail.clone(),
        surface,
    };
    frame::start_loop("trail", move || trail_frame.frame());
    Ok((trail, canvas))
}

/// Rasterize the hero word and start its particle loop. Runs once, after
/// web fonts have had time to load.
fn start_particle_text(
    document: &web::Document,
    pointer: Rc<RefCell<PointerState>>,
) -> anyhow::Result<()> {
    use crate::core::constants::{TEXT_BUFFER_HEIGHT, TEXT_BUFFER_WIDTH};

    let surface = CanvasSurface::by_id(document, TEXT_CANVAS_ID)?;
    let rgba = surface.rasterize_word()?;
    let text = TextSim::from_rgba(
        &rgba,
        TEXT_BUFFER_WIDTH,
        TEXT_BUFFER_HEIGHT,
        &mut StdRng::from_entropy(),
    );
    log::info!("[text] {} particles", text.len());
    let mut text_frame = frame::TextFrame {
        text,
        pointer,
        surface,
    };
    frame::start_loop("text", move || text_frame.frame());
    Ok(())
}

/// Widgets are independent; one missing from the page is logged and skipped.
fn wire_widgets(document: &web::Document, launch: &mut Launch) {
    if let Some(music) = launch.attempt("music", || audio::MusicController::new(document)) {
        let doc = document.clone();
        audio::wire_music_controls(document, music, move || widgets::balloons::start(&doc));
    }
    widgets::theme::wire_theme_toggle(document);
    launch.attempt("reveal", || widgets::reveal::wire_reveal(document));
    widgets::cake::wire_candles(document);
    widgets::gift::wire_gift(document);
    widgets::book::wire_flipbook(document);
    launch.attempt("garden", || widgets::garden::wire_garden(document));
    if let Some(view) = launch.attempt("carousel", || widgets::carousel::wire_carousel(document)) {
        events::wire_global_keydown(view);
    }
    launch.attempt("countdown", || widgets::countdown::wire_countdown(document));
}
