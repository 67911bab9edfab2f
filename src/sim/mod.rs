//! Presentation logic
//!
//! Everything the card decides lives here. This module must stay free of
//! browser dependencies:
//! - Randomness is injected (`rand::Rng`), seeded in tests
//! - Time is passed in as milliseconds
//! - No drawing or DOM access

pub mod card;
pub mod celebration;
pub mod hearts;
pub mod lifecycle;
pub mod phase;
pub mod photos;
pub mod scene;
pub mod starfield;

pub use card::{Envelope, EvasiveButton, Letter};
pub use celebration::{Celebration, ConfettiBurst};
pub use hearts::{Heart, hearts, hearts_visible};
pub use lifecycle::{BackdropAction, PageTransition};
pub use phase::{Phase, PhaseChange, PhaseMachine};
pub use photos::{PhotoStatus, PhotoWall, Scroll};
pub use scene::{CardInput, Presentation, Scene, SceneEvent};
pub use starfield::{Star, Starfield};
