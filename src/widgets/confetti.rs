use crate::core::decor::ConfettiBurst;
use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    // canvas-confetti, loaded by index.html as a global
    #[wasm_bindgen(catch, js_name = confetti)]
    fn confetti_js(options: &JsValue) -> Result<JsValue, JsValue>;
}

fn set(obj: &Object, key: &str, value: f64) {
    _ = Reflect::set(obj, &JsValue::from_str(key), &JsValue::from_f64(value));
}

fn to_options(burst: &ConfettiBurst) -> Object {
    let opts = Object::new();
    set(&opts, "particleCount", burst.particle_count as f64);
    set(&opts, "spread", burst.spread as f64);
    if let Some(angle) = burst.angle {
        set(&opts, "angle", angle as f64);
    }
    if burst.origin_x.is_some() || burst.origin_y.is_some() {
        let origin = Object::new();
        if let Some(x) = burst.origin_x {
            set(&origin, "x", x as f64);
        }
        if let Some(y) = burst.origin_y {
            set(&origin, "y", y as f64);
        }
        _ = Reflect::set(&opts, &JsValue::from_str("origin"), &origin);
    }
    opts
}

/// Fire one burst. A missing confetti library only costs a warning.
pub fn fire(burst: &ConfettiBurst) {
    if let Err(e) = confetti_js(&to_options(burst)) {
        log::warn!("[confetti] burst failed: {:?}", e);
    }
}
