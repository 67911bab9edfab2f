//! Confetti schedule for the "Yes" answer
//!
//! Two cannons, one in each bottom corner, fire a small burst every frame
//! for three seconds. The confetti itself is drawn by the page.

use serde::Serialize;

use crate::consts::CELEBRATION_DURATION_MS;
use crate::error::{CardError, Result};

/// Rose palette shared by both cannons
pub const CONFETTI_COLORS: [&str; 4] = ["#f43f5e", "#ec4899", "#fb7185", "#fda4af"];

/// Options for one confetti call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfettiBurst {
    pub particle_count: u32,
    /// Launch angle in degrees (90 is straight up)
    pub angle: f32,
    /// Spread in degrees
    pub spread: f32,
    pub origin: Origin,
    pub colors: Vec<&'static str>,
}

/// Normalized launch point; y is left to the generator's default
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Origin {
    pub x: f32,
}

impl ConfettiBurst {
    fn cannon(angle: f32, origin_x: f32) -> Self {
        Self {
            particle_count: 5,
            angle,
            spread: 55.0,
            origin: Origin { x: origin_x },
            colors: CONFETTI_COLORS.to_vec(),
        }
    }

    /// Left-corner cannon aimed up and right
    pub fn left() -> Self {
        Self::cannon(60.0, 0.0)
    }

    /// Right-corner cannon aimed up and left
    pub fn right() -> Self {
        Self::cannon(120.0, 1.0)
    }

    /// Option object for the page's generator, as JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(CardError::Confetti)
    }
}

/// A running celebration
#[derive(Debug, Clone, PartialEq)]
pub struct Celebration {
    started_at_ms: f64,
    duration_ms: f64,
}

impl Celebration {
    pub fn start(now_ms: f64) -> Self {
        Self {
            started_at_ms: now_ms,
            duration_ms: CELEBRATION_DURATION_MS,
        }
    }

    pub fn started_at_ms(&self) -> f64 {
        self.started_at_ms
    }

    pub fn ends_at_ms(&self) -> f64 {
        self.started_at_ms + self.duration_ms
    }

    /// Bursts to fire on every frame of the celebration
    pub fn frame_bursts(&self) -> [ConfettiBurst; 2] {
        [ConfettiBurst::left(), ConfettiBurst::right()]
    }

    /// Whether to schedule another frame after firing at `now_ms`
    pub fn should_continue(&self, now_ms: f64) -> bool {
        now_ms < self.ends_at_ms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_for_three_seconds() {
        let celebration = Celebration::start(10_000.0);
        assert!(celebration.should_continue(10_000.0));
        assert!(celebration.should_continue(12_999.9));
        assert!(!celebration.should_continue(13_000.0));
        assert!(!celebration.should_continue(20_000.0));
    }

    #[test]
    fn test_cannons_mirror_each_other() {
        let [left, right] = Celebration::start(0.0).frame_bursts();
        assert_eq!(left.angle, 60.0);
        assert_eq!(right.angle, 120.0);
        assert_eq!(left.origin.x, 0.0);
        assert_eq!(right.origin.x, 1.0);
        assert_eq!(left.particle_count, right.particle_count);
        assert_eq!(left.spread, 55.0);
        assert_eq!(left.colors, CONFETTI_COLORS.to_vec());
    }

    #[test]
    fn test_burst_serializes_for_the_page() {
        let json = serde_json::to_value(ConfettiBurst::left()).unwrap();
        assert_eq!(json["particleCount"], 5);
        assert_eq!(json["origin"]["x"], 0.0);
        assert_eq!(json["colors"][0], "#f43f5e");
    }

    #[test]
    fn test_burst_json_text() {
        let json = ConfettiBurst::right().to_json().unwrap();
        assert!(json.contains("\"particleCount\":5"));
        assert!(json.contains("\"angle\":120.0"));
    }
}
