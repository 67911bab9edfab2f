//! Envelope Card - an animated greeting card for the web
//!
//! Core modules:
//! - `sim`: Presentation logic (phases, envelope/letter controls, starfield)
//! - `renderer`: 2-D canvas drawing of the starfield
//! - `platform`: Browser glue (DOM mounting, events, frame loops)
//! - `settings`: Card text and asset configuration
//! - `error`: Failure classes shared across modules

pub mod error;
#[cfg(target_arch = "wasm32")]
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::CardError;
pub use settings::Settings;

/// Card configuration constants
pub mod consts {
    /// Number of stars in the backdrop
    pub const STAR_COUNT: usize = 120;
    /// Stars wrap once they leave the surface by this many pixels
    pub const WRAP_MARGIN: f32 = 5.0;

    /// Star radius range (pixels)
    pub const STAR_SIZE_MIN: f32 = 0.4;
    pub const STAR_SIZE_MAX: f32 = 2.0;
    /// Star base opacity range
    pub const STAR_OPACITY_MIN: f32 = 0.2;
    pub const STAR_OPACITY_MAX: f32 = 0.7;
    /// Twinkle speed range (radians per frame)
    pub const TWINKLE_SPEED_MIN: f32 = 0.003;
    pub const TWINKLE_SPEED_MAX: f32 = 0.011;
    /// Maximum drift per frame on each axis (pixels)
    pub const DRIFT_X_MAX: f32 = 0.04;
    pub const DRIFT_Y_MAX: f32 = 0.03;

    /// Backdrop gradient stops, top to bottom
    pub const SKY_GRADIENT: [(f64, &str); 3] =
        [(0.0, "#0b0e1a"), (0.5, "#10132a"), (1.0, "#14092b")];

    /// The "No" button jumps at most this far on each axis
    pub const EVASIVE_RANGE: f32 = 100.0;

    /// Confetti runs this long after "Yes" (milliseconds)
    pub const CELEBRATION_DURATION_MS: f64 = 3000.0;

    /// Photos on the reveal wall
    pub const PHOTO_COUNT: usize = 25;
    pub const PHOTO_COLUMNS: usize = 5;

    /// Decorative hearts floating over the first two phases
    pub const HEART_COUNT: usize = 5;
}
