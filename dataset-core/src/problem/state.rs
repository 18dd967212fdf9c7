#[cfg(test)]
#[path = "../../tests/unit/problem/state_test.rs"]
mod state_test;

use crate::utils::{DatasetError, DatasetResult, ErrorKind};
use std::fmt::{Display, Formatter};

/// Specifies a lifecycle state of the problem. Transitions are one directional.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProblemState {
    /// Descriptor is stored, nothing is computed.
    #[default]
    Constructed,
    /// Concrete source kind is computed.
    Resolved,
    /// Content is loaded.
    Loaded,
    /// Content load failed.
    LoadFailed,
    /// Structured instance is parsed.
    Parsed,
    /// Evaluation calls are well defined.
    Ready,
}

/// Specifies an event which moves the problem to the next state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProblemEvent {
    /// Source kind is resolved.
    Resolve,
    /// Loader finished successfully.
    LoadSucceeded,
    /// Loader captured an error.
    LoadFailed,
    /// Parser populated structured instance.
    Parse,
    /// Structured instance is accepted for evaluation.
    Complete,
}

impl ProblemState {
    /// Returns the next state or an error if the event is not applicable to the current state.
    pub fn next(self, event: ProblemEvent) -> DatasetResult<ProblemState> {
        match (self, event) {
            (ProblemState::Constructed, ProblemEvent::Resolve) => Ok(ProblemState::Resolved),
            (ProblemState::Resolved, ProblemEvent::LoadSucceeded) => Ok(ProblemState::Loaded),
            (ProblemState::Resolved, ProblemEvent::LoadFailed) => Ok(ProblemState::LoadFailed),
            (ProblemState::Loaded, ProblemEvent::Parse) => Ok(ProblemState::Parsed),
            (ProblemState::Parsed, ProblemEvent::Complete) => Ok(ProblemState::Ready),
            (state, event) => {
                Err(DatasetError::new(ErrorKind::InvalidTransition, format!("cannot apply {event:?} to {state} state")))
            }
        }
    }
}

impl Display for ProblemState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ProblemState::Constructed => "constructed",
            ProblemState::Resolved => "resolved",
            ProblemState::Loaded => "loaded",
            ProblemState::LoadFailed => "load_failed",
            ProblemState::Parsed => "parsed",
            ProblemState::Ready => "ready",
        };

        write!(f, "{name}")
    }
}
