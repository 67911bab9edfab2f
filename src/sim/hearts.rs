//! Floating hearts over the entrance and letter

use super::phase::Phase;
use crate::consts::HEART_COUNT;

/// Styling for one floating heart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Heart {
    /// Horizontal position (% of viewport width)
    pub left_pct: f32,
    pub delay_secs: f32,
    pub duration_secs: f32,
    pub font_px: f32,
    pub opacity: f32,
}

impl Heart {
    pub fn nth(i: usize) -> Self {
        let i = i as f32;
        Self {
            left_pct: 12.0 + i * 18.0,
            delay_secs: i * 1.6,
            duration_secs: 8.0 + i * 2.0,
            font_px: 10.0 + i * 2.0,
            opacity: 0.12 + i * 0.02,
        }
    }

    /// Inline CSS for the heart element
    pub fn style(&self) -> String {
        format!(
            "left:{}%;animation-delay:{}s;animation-duration:{}s;font-size:{}px;opacity:{}",
            self.left_pct, self.delay_secs, self.duration_secs, self.font_px, self.opacity
        )
    }
}

pub fn hearts() -> impl Iterator<Item = Heart> {
    (0..HEART_COUNT).map(Heart::nth)
}

/// Hearts give way to the photo wall
pub fn hearts_visible(phase: Phase) -> bool {
    match phase {
        Phase::Entrance | Phase::Reading => true,
        Phase::Reveal => false,
    }
}
