//! Single-owner state store with one dispatch entry point.
//!
//! # Invariants
//! - State is only replaced by `ResumeReducer::reduce` inside `dispatch`.
//! - Actions are applied strictly in call order.
//! - `revision` increases by one for every applied action.

use crate::state::action::{DecodedAction, ResumeAction};
use crate::state::reducer::{Reducer, ResumeReducer, ResumeState};
use log::{debug, warn};

/// Holds the current [`ResumeState`] and applies actions to it.
#[derive(Debug, Default)]
pub struct ResumeStore {
    state: ResumeState,
    revision: u64,
}

impl ResumeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing state, e.g. in tests or after restore.
    pub fn with_state(state: ResumeState) -> Self {
        Self { state, revision: 0 }
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &ResumeState {
        &self.state
    }

    /// Owned copy of the current state for export/persistence consumers.
    pub fn snapshot(&self) -> ResumeState {
        self.state.clone()
    }

    /// Number of actions applied so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Applies one action synchronously.
    pub fn dispatch(&mut self, action: ResumeAction) -> &ResumeState {
        let tag = action.tag();
        let current = std::mem::take(&mut self.state);
        self.state = ResumeReducer::reduce(current, action);
        self.revision += 1;
        debug!(
            "event=dispatch module=state status=ok action={} revision={}",
            tag, self.revision
        );
        &self.state
    }

    /// Applies a decoded JSON action. Unknown tags leave the state untouched.
    ///
    /// Returns whether the action was applied.
    pub fn dispatch_decoded(&mut self, action: DecodedAction) -> bool {
        match action {
            DecodedAction::Known(action) => {
                self.dispatch(action);
                true
            }
            DecodedAction::Unknown(tag) => {
                warn!(
                    "event=dispatch_unknown module=state status=ignored action={} revision={}",
                    tag, self.revision
                );
                false
            }
        }
    }
}
