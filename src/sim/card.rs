//! Envelope and letter controls
//!
//! The envelope opens once. The letter carries the question, a "Yes"
//! button that accepts once, and a "No" button that jumps away whenever a
//! pointer or finger gets near it.

use glam::Vec2;
use rand::Rng;

use super::celebration::Celebration;
use crate::consts::EVASIVE_RANGE;

/// Inner card lift when the envelope is open (pixels, negative is up)
pub const CARD_LIFT_OPEN: f32 = -100.0;
/// Inner card peek while hovering a closed envelope
pub const CARD_LIFT_HOVER: f32 = -12.0;
/// Envelope scale while hovering a closed envelope
pub const HOVER_SCALE: f32 = 1.04;
/// Envelope tilt while hovering a closed envelope, (rotateX, rotateY) degrees
pub const HOVER_TILT_DEG: (f32, f32) = (5.0, -5.0);

/// The sealed envelope on the entrance screen
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Envelope {
    open: bool,
    hovered: bool,
}

impl Envelope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Open the envelope. Returns true only for the first call.
    pub fn open(&mut self) -> bool {
        if self.open {
            return false;
        }
        self.open = true;
        true
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Hover affordance only applies while the envelope is still sealed
    fn hover_active(&self) -> bool {
        self.hovered && !self.open
    }

    /// Vertical offset of the inner card
    pub fn card_lift(&self) -> f32 {
        if self.open {
            CARD_LIFT_OPEN
        } else if self.hovered {
            CARD_LIFT_HOVER
        } else {
            0.0
        }
    }

    /// Scale of the whole envelope
    pub fn scale(&self) -> f32 {
        if self.hover_active() { HOVER_SCALE } else { 1.0 }
    }

    /// (rotateX, rotateY) in degrees
    pub fn tilt(&self) -> (f32, f32) {
        if self.hover_active() {
            HOVER_TILT_DEG
        } else {
            (0.0, 0.0)
        }
    }

    /// The wax seal fades out once opened
    pub fn seal_visible(&self) -> bool {
        !self.open
    }
}

/// The "No" button that will not be clicked
#[derive(Debug, Clone, Default)]
pub struct EvasiveButton {
    offset: Vec2,
    has_moved: bool,
}

impl EvasiveButton {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current display offset from the button's resting place
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// Jump to a fresh random offset, each axis uniform in `[-range, range]`
    pub fn dodge<R: Rng>(&mut self, rng: &mut R) -> Vec2 {
        self.offset = Vec2::new(
            rng.random_range(-EVASIVE_RANGE..=EVASIVE_RANGE),
            rng.random_range(-EVASIVE_RANGE..=EVASIVE_RANGE),
        );
        self.has_moved = true;
        log::debug!("No button dodged to ({:.1}, {:.1})", self.offset.x, self.offset.y);
        self.offset
    }
}

/// The open letter with its two answers
#[derive(Debug, Clone, Default)]
pub struct Letter {
    no_button: EvasiveButton,
    accepted: bool,
}

impl Letter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn no_button(&self) -> &EvasiveButton {
        &self.no_button
    }

    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Pointer entered or touch started on the "No" button
    pub fn approach_no<R: Rng>(&mut self, rng: &mut R) -> Vec2 {
        self.no_button.dodge(rng)
    }

    /// "Yes" was pressed. Starts the celebration on the first press only.
    pub fn accept(&mut self, now_ms: f64) -> Option<Celebration> {
        if self.accepted {
            return None;
        }
        self.accepted = true;
        Some(Celebration::start(now_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_envelope_opens_once() {
        let mut envelope = Envelope::new();
        assert!(!envelope.is_open());
        assert!(envelope.open());
        assert!(envelope.is_open());
        assert!(!envelope.open());
        assert!(envelope.is_open());
    }

    #[test]
    fn test_hover_affordance() {
        let mut envelope = Envelope::new();
        assert_eq!(envelope.card_lift(), 0.0);

        envelope.set_hovered(true);
        assert_eq!(envelope.card_lift(), CARD_LIFT_HOVER);
        assert_eq!(envelope.scale(), HOVER_SCALE);
        assert_eq!(envelope.tilt(), HOVER_TILT_DEG);

        // Once open, hover no longer matters
        envelope.open();
        assert_eq!(envelope.card_lift(), CARD_LIFT_OPEN);
        assert_eq!(envelope.scale(), 1.0);
        assert_eq!(envelope.tilt(), (0.0, 0.0));
        assert!(!envelope.seal_visible());
    }

    #[test]
    fn test_no_button_starts_in_place() {
        let button = EvasiveButton::new();
        assert_eq!(button.offset(), Vec2::ZERO);
        assert!(!button.has_moved());
    }

    #[test]
    fn test_accept_only_once() {
        let mut letter = Letter::new();
        let celebration = letter.accept(1000.0).expect("first accept celebrates");
        assert_eq!(celebration.started_at_ms(), 1000.0);
        assert!(letter.is_accepted());
        assert!(letter.accept(1500.0).is_none());
    }

    proptest! {
        #[test]
        fn dodges_stay_in_range(seed in any::<u64>(), attempts in 1usize..200) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut letter = Letter::new();
            let mut samples = Vec::with_capacity(attempts);

            for _ in 0..attempts {
                let offset = letter.approach_no(&mut rng);
                prop_assert!(offset.x.abs() <= EVASIVE_RANGE);
                prop_assert!(offset.y.abs() <= EVASIVE_RANGE);
                prop_assert_eq!(letter.no_button().offset(), offset);
                samples.push(offset);
            }

            prop_assert_eq!(samples.len(), attempts);
            prop_assert!(letter.no_button().has_moved());
            prop_assert!(!letter.is_accepted());
        }
    }
}
