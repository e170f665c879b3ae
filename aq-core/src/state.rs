//! Per-view query state.
//!
//! The result and the error message live inside [`Phase`], so a state can
//! never hold both, and neither is present outside `Success` / `Error`.

use crate::mode::Mode;
use crate::model::QueryResult;

/// Lifecycle of one lookup view.
#[derive(Debug, Default, PartialEq, Clone)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success(QueryResult),
    Error(String),
}

/// Data-free discriminant of [`Phase`], handy for logging and assertions.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum PhaseKind {
    Idle,
    Loading,
    Success,
    Error,
}

impl Phase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            Phase::Idle => PhaseKind::Idle,
            Phase::Loading => PhaseKind::Loading,
            Phase::Success(_) => PhaseKind::Success,
            Phase::Error(_) => PhaseKind::Error,
        }
    }
}

/// State owned by one lookup controller.
#[derive(Debug, PartialEq, Clone)]
pub struct QueryState<I> {
    mode: Mode,
    pub(crate) input: I,
    pub(crate) phase: Phase,
}

impl<I: Default> QueryState<I> {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            input: I::default(),
            phase: Phase::Idle,
        }
    }
}

impl<I> QueryState<I> {
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn phase_kind(&self) -> PhaseKind {
        self.phase.kind()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn result(&self) -> Option<&QueryResult> {
        match &self.phase {
            Phase::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            Phase::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::CityInput;

    #[test]
    fn test_new_state_is_idle() {
        let state: QueryState<CityInput> = QueryState::new(Mode::City);
        assert_eq!(state.mode(), Mode::City);
        assert_eq!(state.phase_kind(), PhaseKind::Idle);
        assert!(state.result().is_none());
        assert!(state.error_message().is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_error_phase_has_no_result() {
        let mut state: QueryState<CityInput> = QueryState::new(Mode::City);
        state.phase = Phase::Error("Missing city".to_string());
        assert_eq!(state.error_message(), Some("Missing city"));
        assert!(state.result().is_none());
    }
}
