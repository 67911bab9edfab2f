//! Presentation phases
//!
//! The card moves strictly forward: Entrance -> Reading -> Reveal.

use serde::{Deserialize, Serialize};

use crate::error::{CardError, Result};

/// Top-level presentation phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Phase {
    /// Title and sealed envelope
    #[default]
    Entrance,
    /// The open letter with the question
    Reading,
    /// Photo wall and the answer
    Reveal,
}

impl Phase {
    /// All phases in presentation order
    pub const ALL: [Phase; 3] = [Phase::Entrance, Phase::Reading, Phase::Reveal];

    /// The phase that follows this one, `None` for the terminal phase
    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::Entrance => Some(Phase::Reading),
            Phase::Reading => Some(Phase::Reveal),
            Phase::Reveal => None,
        }
    }

    /// Element id of the view mounted for this phase
    pub fn view_id(self) -> &'static str {
        match self {
            Phase::Entrance => "phase-entrance",
            Phase::Reading => "phase-reading",
            Phase::Reveal => "phase-reveal",
        }
    }

    /// Entry animation length in seconds
    pub fn enter_secs(self) -> f32 {
        match self {
            Phase::Entrance => 1.0,
            Phase::Reading => 0.8,
            Phase::Reveal => 1.5,
        }
    }

    /// Exit animation length in seconds (the terminal phase never exits)
    pub fn exit_secs(self) -> Option<f32> {
        match self {
            Phase::Entrance => Some(1.0),
            Phase::Reading => Some(0.8),
            Phase::Reveal => None,
        }
    }
}

/// A completed transition, used to swap the mounted view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseChange {
    pub from: Phase,
    pub to: Phase,
}

/// Tracks the active phase and enforces forward-only transitions
#[derive(Debug, Clone, Default)]
pub struct PhaseMachine {
    phase: Phase,
}

impl PhaseMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_terminal(&self) -> bool {
        self.phase.next().is_none()
    }

    /// Move to `toward`, which must be the immediate successor.
    ///
    /// Any other target is rejected and the current phase is left unchanged.
    pub fn advance(&mut self, toward: Phase) -> Result<PhaseChange> {
        let from = self.phase;
        if from.next() != Some(toward) {
            return Err(CardError::InvalidTransition { from, to: toward });
        }
        self.phase = toward;
        log::info!("Phase {:?} -> {:?}", from, toward);
        Ok(PhaseChange { from, to: toward })
    }
}
