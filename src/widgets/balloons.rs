use crate::constants::{BALLOON_CONTAINER_ID, BALLOON_POP_MS, BALLOON_SPAWN_MS};
use crate::core::decor::{BalloonSpec, ConfettiBurst};
use crate::dom;
use crate::widgets::confetti;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Release a balloon every `BALLOON_SPAWN_MS` into the balloon container.
pub fn start(document: &web::Document) {
    let Some(container) = document.get_element_by_id(BALLOON_CONTAINER_ID) else {
        log::warn!("[balloons] no #{}", BALLOON_CONTAINER_ID);
        return;
    };
    let doc = document.clone();
    let mut rng = StdRng::from_entropy();
    dom::set_interval(BALLOON_SPAWN_MS, move || {
        if let Err(e) = spawn(&doc, &container, BalloonSpec::random(&mut rng)) {
            log::warn!("[balloons] spawn failed: {:?}", e);
        }
    });
    log::info!("[balloons] started");
}

fn spawn(
    document: &web::Document,
    container: &web::Element,
    spec: BalloonSpec,
) -> anyhow::Result<()> {
    let balloon = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    dom::add_class(&balloon, "balloon");
    dom::set_style(&balloon, "background-color", spec.color);
    dom::set_style(&balloon, "left", &format!("{}vw", spec.left_vw));
    dom::set_style(
        &balloon,
        "animation-duration",
        &format!("{}s", spec.duration_sec),
    );

    let popped = balloon.clone();
    dom::listen(&balloon, "click", move |ev: web::MouseEvent| {
        dom::set_style(&popped, "transform", "scale(1.5)");
        dom::set_style(&popped, "opacity", "0");
        let gone = popped.clone();
        dom::set_timeout(BALLOON_POP_MS, move || gone.remove());
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let viewport = dom::viewport_size().unwrap_or(Vec2::ZERO);
        confetti::fire(&ConfettiBurst::balloon_pop(client, viewport));
    });

    let finished = balloon.clone();
    dom::listen(&balloon, "animationend", move |_: web::Event| finished.remove());

    container
        .append_child(&balloon)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}
