//! Browser platform layer
//!
//! Handles everything that touches the page:
//! - Mounting phase views and applying scene events to the DOM
//! - Pointer/touch wiring for the envelope and letter
//! - The starfield frame loop and its teardown
//! - Calling the page's confetti generator

pub mod app;
pub mod confetti;
pub mod dom;
pub mod starfield_loop;

pub use app::run;
pub use starfield_loop::StarfieldLoop;

use web_sys::{Document, Window};

use crate::error::{CardError, Result};

pub(crate) fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| CardError::Js("no window".into()))
}

pub(crate) fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| CardError::Js("no document".into()))
}

/// Milliseconds since the epoch, as used by every frame loop
pub(crate) fn now_ms() -> f64 {
    js_sys::Date::now()
}
