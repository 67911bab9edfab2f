//! What the backdrop does when the page is hidden or shown
//!
//! A page going into the back/forward cache fires `pagehide` with
//! `persisted` set and may come back later through `pageshow`. Only a page
//! that is really going away gives up its frame loop.

/// Page lifecycle notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTransition {
    Hide { persisted: bool },
    Show { persisted: bool },
}

/// What to do with the starfield loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackdropAction {
    Keep,
    Stop,
    Restart,
}

impl PageTransition {
    /// Decide the backdrop's fate given whether its loop is running
    pub fn backdrop_action(self, running: bool) -> BackdropAction {
        match self {
            PageTransition::Hide { persisted: false } if running => BackdropAction::Stop,
            PageTransition::Show { persisted: true } if !running => BackdropAction::Restart,
            _ => BackdropAction::Keep,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unload_stops_loop() {
        let hide = PageTransition::Hide { persisted: false };
        assert_eq!(hide.backdrop_action(true), BackdropAction::Stop);
        assert_eq!(hide.backdrop_action(false), BackdropAction::Keep);
    }

    #[test]
    fn test_back_forward_cache_keeps_loop() {
        let hide = PageTransition::Hide { persisted: true };
        assert_eq!(hide.backdrop_action(true), BackdropAction::Keep);

        // Restored from the cache; the loop is still there
        let show = PageTransition::Show { persisted: true };
        assert_eq!(show.backdrop_action(true), BackdropAction::Keep);
    }

    #[test]
    fn test_restore_restarts_missing_loop() {
        let show = PageTransition::Show { persisted: true };
        assert_eq!(show.backdrop_action(false), BackdropAction::Restart);

        // A first load never restarts; startup owns that
        let first = PageTransition::Show { persisted: false };
        assert_eq!(first.backdrop_action(false), BackdropAction::Keep);
    }
}
