use crate::constants::*;
use crate::dom;
use crate::overlay;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Background music: one looping track with a play/pause button and a volume
/// slider.
pub struct MusicController {
    audio: web::HtmlAudioElement,
    playing: Cell<bool>,
    icon: Option<web::Element>,
}

impl MusicController {
    pub fn new(document: &web::Document) -> anyhow::Result<Rc<Self>> {
        let audio = web::HtmlAudioElement::new_with_src(MUSIC_SRC)
            .map_err(|e| anyhow::anyhow!("Audio element: {:?}", e))?;
        audio.set_loop(true);
        audio.set_volume(MUSIC_DEFAULT_VOLUME);
        let icon = document
            .get_element_by_id(MUSIC_TOGGLE_ID)
            .and_then(|btn| dom::query_one(&btn, "i"));
        Ok(Rc::new(Self {
            audio,
            playing: Cell::new(false),
            icon,
        }))
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playing.get()
    }

    /// Start playback. Browsers may reject it (autoplay policy); the button
    /// then stays in its "play" state so the user can retry.
    pub fn play(self: &Rc<Self>) {
        let promise = match self.audio.play() {
            Ok(p) => p,
            Err(e) => {
                log::warn!("[music] play() threw: {:?}", e);
                return;
            }
        };
        let this = self.clone();
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => {
                    this.playing.set(true);
                    this.update_icon();
                    log::info!("[music] playing");
                }
                Err(e) => log::warn!("[music] playback failed: {:?}", e),
            }
        });
    }

    pub fn pause(&self) {
        _ = self.audio.pause();
        self.playing.set(false);
        self.update_icon();
    }

    pub fn toggle(self: &Rc<Self>) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    pub fn set_volume(&self, volume: f64) {
        self.audio.set_volume(volume.clamp(0.0, 1.0));
    }

    fn update_icon(&self) {
        let Some(icon) = &self.icon else {
            return;
        };
        let (from, to) = if self.is_playing() {
            ("fa-play", "fa-pause")
        } else {
            ("fa-pause", "fa-play")
        };
        dom::remove_class(icon, from);
        dom::add_class(icon, to);
    }
}

/// Wire the entry screen and the player controls. `on_enter` runs once, when
/// the visitor first enters the page.
pub fn wire_music_controls(
    document: &web::Document,
    music: Rc<MusicController>,
    on_enter: impl FnOnce() + 'static,
) {
    let on_enter = RefCell::new(Some(on_enter));
    let music_enter = music.clone();
    let doc_enter = document.clone();
    dom::add_click_listener(document, ENTER_BUTTON_ID, move || {
        if let Some(el) = doc_enter.get_element_by_id(ENTRY_OVERLAY_ID) {
            overlay::fade_and_remove(&el, ENTRY_FADE_MS);
        }
        music_enter.play();
        if let Some(f) = on_enter.borrow_mut().take() {
            f();
        }
    });

    let music_toggle = music.clone();
    dom::add_click_listener(document, MUSIC_TOGGLE_ID, move || music_toggle.toggle());

    match dom::element_by_id::<web::HtmlInputElement>(document, VOLUME_SLIDER_ID) {
        Ok(slider) => {
            let target = slider.clone();
            dom::listen(&slider, "input", move |_: web::Event| {
                match target.value().parse::<f64>() {
                    Ok(v) => music.set_volume(v),
                    Err(_) => log::warn!("[music] bad volume {:?}", target.value()),
                }
            });
        }
        Err(e) => log::warn!("[music] volume slider unavailable: {}", e),
    }
}
