//! Failure classes for the card
//!
//! Everything the card does is total except acquiring browser resources,
//! loading settings, and misusing the phase machine.

use thiserror::Error;

use crate::sim::Phase;

#[derive(Debug, Error)]
pub enum CardError {
    /// Canvas element or its 2-D context could not be acquired
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// A required element id is missing from the page
    #[error("element #{0} not found")]
    ElementMissing(&'static str),

    /// Requested phase is not the successor of the current one
    #[error("invalid transition from {from:?} to {to:?}")]
    InvalidTransition { from: Phase, to: Phase },

    /// Settings JSON failed to parse
    #[error("invalid card settings: {0}")]
    Config(#[from] serde_json::Error),

    /// Confetti options could not be encoded for the page
    #[error("confetti options not encodable: {0}")]
    Confetti(#[source] serde_json::Error),

    /// Any other error raised by the browser
    #[error("browser error: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for CardError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        CardError::Js(format!("{value:?}"))
    }
}

pub type Result<T> = std::result::Result<T, CardError>;
