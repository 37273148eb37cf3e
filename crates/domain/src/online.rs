//! Online/offline edge detection across poll cycles.
//!
//! The controller reports a free-text state every cycle. The tracker only
//! reports *transitions*, so a printer that stays offline for many cycles
//! yields a single offline edge.

use serde::Serialize;

use crate::snapshot::OFFLINE_STATE;

/// Whether the printer is reachable and connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OnlineState {
    Online,
    Offline,
}

impl OnlineState {
    /// Classify a reported state text. Only the exact text `Offline` is offline.
    #[must_use]
    pub fn from_state_text(text: &str) -> Self {
        if text == OFFLINE_STATE {
            Self::Offline
        } else {
            Self::Online
        }
    }
}

/// A change of [`OnlineState`] between two cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    WentOffline,
    CameOnline,
}

/// Remembers the previous cycle's [`OnlineState`].
///
/// Before the first cycle the state is unknown: a first `Offline` report is
/// an offline edge and a first online report is an online edge.
#[derive(Debug, Clone, Default)]
pub struct OnlineTracker {
    last: Option<OnlineState>,
}

impl OnlineTracker {
    /// Record the state text of a successful cycle.
    pub fn observe(&mut self, state_text: &str) -> Option<Transition> {
        self.record(OnlineState::from_state_text(state_text))
    }

    /// Record a cycle in which the controller could not be reached.
    ///
    /// The caller reports the failure itself, so no transition is returned.
    pub fn mark_unreachable(&mut self) {
        self.last = Some(OnlineState::Offline);
    }

    /// The state recorded by the last cycle, if any.
    #[must_use]
    pub fn current(&self) -> Option<OnlineState> {
        self.last
    }

    fn record(&mut self, next: OnlineState) -> Option<Transition> {
        let previous = self.last.replace(next);
        match (previous, next) {
            (Some(OnlineState::Offline) | None, OnlineState::Online) => {
                Some(Transition::CameOnline)
            }
            (Some(OnlineState::Online) | None, OnlineState::Offline) => {
                Some(Transition::WentOffline)
            }
            _ => None,
        }
    }
}
