//! The mounted scene and its input handling
//!
//! Exactly one scene is mounted at a time. Each variant owns the state of
//! its view, so a phase without a view (or two views at once) cannot exist.

use glam::Vec2;
use rand::Rng;

use super::card::{Envelope, Letter};
use super::celebration::Celebration;
use super::phase::{Phase, PhaseChange, PhaseMachine};
use super::photos::PhotoWall;
use crate::error::Result;

/// View state for the active phase
#[derive(Debug, Clone)]
pub enum Scene {
    Entrance { envelope: Envelope },
    Reading { letter: Letter },
    Reveal { wall: PhotoWall },
}

impl Scene {
    /// Fresh view state for `phase`
    pub fn mount(phase: Phase, photo_base: &str) -> Self {
        match phase {
            Phase::Entrance => Scene::Entrance {
                envelope: Envelope::new(),
            },
            Phase::Reading => Scene::Reading {
                letter: Letter::new(),
            },
            Phase::Reveal => Scene::Reveal {
                wall: PhotoWall::new(photo_base),
            },
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            Scene::Entrance { .. } => Phase::Entrance,
            Scene::Reading { .. } => Phase::Reading,
            Scene::Reveal { .. } => Phase::Reveal,
        }
    }
}

/// UI input addressed to the card
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardInput {
    /// Pointer entered (true) or left (false) the envelope
    EnvelopeHover(bool),
    /// Envelope clicked or tapped
    EnvelopeClick,
    /// Pointer entered or touch started on the "No" button
    NoApproach,
    /// "Yes" clicked
    YesClick,
    /// Photo at this index failed to load
    PhotoFailed(usize),
}

/// Something the page has to reflect after handling input
#[derive(Debug, Clone, PartialEq)]
pub enum SceneEvent {
    /// Envelope hover or open state changed; carries the new state
    EnvelopeChanged(Envelope),
    NoMoved { offset: Vec2 },
    Celebrate(Celebration),
    PhaseChanged(PhaseChange),
    PhotoHidden(usize),
}

/// Phase machine plus the scene it has mounted
#[derive(Debug, Clone)]
pub struct Presentation {
    machine: PhaseMachine,
    scene: Scene,
    photo_base: String,
}

impl Presentation {
    pub fn new(photo_base: impl Into<String>) -> Self {
        let photo_base = photo_base.into();
        let machine = PhaseMachine::new();
        let scene = Scene::mount(machine.phase(), &photo_base);
        Self {
            machine,
            scene,
            photo_base,
        }
    }

    pub fn phase(&self) -> Phase {
        self.machine.phase()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Move to the next phase and mount its scene.
    ///
    /// Rejects any target other than the immediate successor; the current
    /// scene is kept in that case.
    pub fn advance(&mut self, toward: Phase) -> Result<PhaseChange> {
        let change = self.machine.advance(toward)?;
        self.scene = Scene::mount(change.to, &self.photo_base);
        debug_assert_eq!(self.scene.phase(), self.machine.phase());
        Ok(change)
    }

    /// Apply one input to the mounted scene.
    ///
    /// Input meant for a view that is not mounted is ignored.
    pub fn handle<R: Rng>(&mut self, input: CardInput, now_ms: f64, rng: &mut R) -> Vec<SceneEvent> {
        let mut events = Vec::new();
        let next = match (&mut self.scene, input) {
            (Scene::Entrance { envelope }, CardInput::EnvelopeHover(hovered)) => {
                envelope.set_hovered(hovered);
                events.push(SceneEvent::EnvelopeChanged(*envelope));
                None
            }
            (Scene::Entrance { envelope }, CardInput::EnvelopeClick) => {
                if envelope.open() {
                    log::info!("Envelope opened");
                    events.push(SceneEvent::EnvelopeChanged(*envelope));
                    Some(Phase::Reading)
                } else {
                    None
                }
            }
            (Scene::Reading { letter }, CardInput::NoApproach) => {
                let offset = letter.approach_no(rng);
                events.push(SceneEvent::NoMoved { offset });
                None
            }
            (Scene::Reading { letter }, CardInput::YesClick) => match letter.accept(now_ms) {
                Some(celebration) => {
                    log::info!("Answer accepted");
                    events.push(SceneEvent::Celebrate(celebration));
                    Some(Phase::Reveal)
                }
                None => None,
            },
            (Scene::Reveal { wall }, CardInput::PhotoFailed(index)) => {
                if wall.mark_failed(index) {
                    events.push(SceneEvent::PhotoHidden(index));
                }
                None
            }
            (scene, input) => {
                log::debug!("Ignoring {:?} in {:?}", input, scene.phase());
                None
            }
        };

        if let Some(target) = next {
            match self.advance(target) {
                Ok(change) => events.push(SceneEvent::PhaseChanged(change)),
                Err(e) => log::error!("{}", e),
            }
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn phase_changes(events: &[SceneEvent]) -> Vec<PhaseChange> {
        events
            .iter()
            .filter_map(|e| match e {
                SceneEvent::PhaseChanged(change) => Some(*change),
                _ => None,
            })
            .collect()
    }

    fn celebrations(events: &[SceneEvent]) -> usize {
        events
            .iter()
            .filter(|e| matches!(e, SceneEvent::Celebrate(_)))
            .count()
    }

    #[test]
    fn test_end_to_end() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut card = Presentation::new("/photos");
        assert_eq!(card.phase(), Phase::Entrance);
        assert!(matches!(card.scene(), Scene::Entrance { .. }));

        let events = card.handle(CardInput::EnvelopeClick, 0.0, &mut rng);
        match &events[0] {
            SceneEvent::EnvelopeChanged(envelope) => assert!(envelope.is_open()),
            other => panic!("expected envelope change, got {other:?}"),
        }
        assert_eq!(
            phase_changes(&events),
            vec![PhaseChange { from: Phase::Entrance, to: Phase::Reading }]
        );
        assert_eq!(card.phase(), Phase::Reading);

        let events = card.handle(CardInput::YesClick, 500.0, &mut rng);
        assert_eq!(celebrations(&events), 1);
        assert_eq!(
            phase_changes(&events),
            vec![PhaseChange { from: Phase::Reading, to: Phase::Reveal }]
        );
        assert_eq!(card.phase(), Phase::Reveal);
        assert!(matches!(card.scene(), Scene::Reveal { .. }));

        // Nothing moves the card out of the reveal
        for target in Phase::ALL {
            assert!(card.advance(target).is_err());
        }
        for input in [CardInput::EnvelopeClick, CardInput::YesClick, CardInput::NoApproach] {
            assert!(card.handle(input, 900.0, &mut rng).is_empty());
        }
        assert_eq!(card.phase(), Phase::Reveal);
    }

    #[test]
    fn test_hover_does_not_advance() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut card = Presentation::new("/photos");

        let events = card.handle(CardInput::EnvelopeHover(true), 0.0, &mut rng);
        match &events[..] {
            [SceneEvent::EnvelopeChanged(envelope)] => {
                assert!(envelope.is_hovered());
                assert!(!envelope.is_open());
            }
            other => panic!("unexpected events {other:?}"),
        }
        assert_eq!(card.phase(), Phase::Entrance);
        match card.scene() {
            Scene::Entrance { envelope } => assert!(envelope.is_hovered()),
            other => panic!("unexpected scene {:?}", other.phase()),
        }
    }

    #[test]
    fn test_letter_input_ignored_before_opening() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut card = Presentation::new("/photos");

        assert!(card.handle(CardInput::YesClick, 0.0, &mut rng).is_empty());
        assert!(card.handle(CardInput::NoApproach, 0.0, &mut rng).is_empty());
        assert_eq!(card.phase(), Phase::Entrance);
    }

    #[test]
    fn test_no_button_never_advances() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut card = Presentation::new("/photos");
        card.handle(CardInput::EnvelopeClick, 0.0, &mut rng);

        for _ in 0..50 {
            let events = card.handle(CardInput::NoApproach, 0.0, &mut rng);
            assert_eq!(events.len(), 1);
            assert!(matches!(events[0], SceneEvent::NoMoved { .. }));
        }
        assert_eq!(card.phase(), Phase::Reading);
    }

    #[test]
    fn test_skip_to_reveal_rejected() {
        let mut card = Presentation::new("/photos");
        assert!(card.advance(Phase::Reveal).is_err());
        assert_eq!(card.phase(), Phase::Entrance);
        assert!(matches!(card.scene(), Scene::Entrance { .. }));
    }

    #[test]
    fn test_photo_failures_only_in_reveal() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut card = Presentation::new("/photos");
        assert!(card.handle(CardInput::PhotoFailed(0), 0.0, &mut rng).is_empty());

        card.advance(Phase::Reading).unwrap();
        card.advance(Phase::Reveal).unwrap();

        let events = card.handle(CardInput::PhotoFailed(7), 0.0, &mut rng);
        assert_eq!(events, vec![SceneEvent::PhotoHidden(7)]);
        assert!(card.handle(CardInput::PhotoFailed(7), 0.0, &mut rng).is_empty());
    }
}
