//! Bridge to the page's confetti generator
//!
//! The generator is a plain `window.confetti(options)` function provided by
//! the page. If it is missing, the celebration is skipped.

use wasm_bindgen::prelude::*;

use super::{now_ms, window};
use crate::error::Result;
use crate::sim::{Celebration, ConfettiBurst};

#[wasm_bindgen(inline_js = "
    export function fire_confetti(options) {
        if (typeof window.confetti !== 'function') {
            return false;
        }
        window.confetti(options);
        return true;
    }
")]
extern "C" {
    fn fire_confetti(options: &JsValue) -> bool;
}

/// Fire one burst. Returns false if the page has no generator.
fn fire(burst: &ConfettiBurst) -> Result<bool> {
    let json = burst.to_json()?;
    let options = js_sys::JSON::parse(&json)?;
    Ok(fire_confetti(&options))
}

/// Run the celebration until its end time, one pair of bursts per frame
pub fn celebrate(celebration: Celebration) {
    log::info!("Celebrating until {:.0}", celebration.ends_at_ms());
    celebration_frame(celebration);
}

fn celebration_frame(celebration: Celebration) {
    for burst in celebration.frame_bursts() {
        match fire(&burst) {
            Ok(true) => {}
            Ok(false) => {
                log::warn!("window.confetti not found, skipping celebration");
                return;
            }
            Err(e) => {
                log::warn!("Confetti burst failed: {}", e);
                return;
            }
        }
    }

    if celebration.should_continue(now_ms()) {
        request_celebration_frame(celebration);
    }
}

fn request_celebration_frame(celebration: Celebration) {
    let Ok(window) = window() else {
        return;
    };
    let closure = Closure::once(move |_time: f64| {
        celebration_frame(celebration);
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}
