//! Generic lookup controller.
//!
//! A controller owns one [`QueryState`] and drives it through
//! `Idle -> Loading -> Success | Error`. Submission is split in two so that
//! a UI can hold the state in a reactive cell across the request:
//!
//! 1. [`LookupController::begin_submit`] validates the input, moves to
//!    `Loading` and hands back a [`PendingRequest`].
//! 2. [`LookupController::complete`] applies the transport outcome.
//!
//! [`LookupController::submit`] chains both around a [`Transport`].
//!
//! Every pending request carries a sequence number. Only the most recently
//! issued request may complete; older completions are dropped.

use std::marker::PhantomData;

use log::{debug, info, warn};
use url::Url;

use crate::error::QueryError;
use crate::mode::{round_coordinate, CoordinatesLookup, LookupMode};
use crate::model::QueryResult;
use crate::state::{Phase, PhaseKind, QueryState};
use crate::transport::Transport;

/// An issued request awaiting completion.
#[derive(Debug, PartialEq, Clone)]
pub struct PendingRequest {
    pub seq: u64,
    pub url: Url,
}

/// Lookup state machine for one mode.
#[derive(Debug, Clone)]
pub struct LookupController<M: LookupMode> {
    state: QueryState<M::Input>,
    base_url: Url,
    issued: u64,
    _mode: PhantomData<M>,
}

impl<M: LookupMode> LookupController<M> {
    /// Create an idle controller issuing requests against `base_url`.
    pub fn new(base_url: Url) -> Self {
        Self {
            state: QueryState::new(M::MODE),
            base_url,
            issued: 0,
            _mode: PhantomData,
        }
    }

    pub fn state(&self) -> &QueryState<M::Input> {
        &self.state
    }

    pub fn phase(&self) -> &Phase {
        self.state.phase()
    }

    pub fn input(&self) -> &M::Input {
        self.state.input()
    }

    /// Edit the input. Never changes the phase.
    pub fn input_mut(&mut self) -> &mut M::Input {
        &mut self.state.input
    }

    pub fn set_input(&mut self, input: M::Input) {
        self.state.input = input;
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.state.is_loading()
    }

    /// Validate the input and move to `Loading`.
    ///
    /// On a validation failure the state moves to `Error` and no request is
    /// issued. While a request is in flight this returns
    /// [`QueryError::Busy`] and leaves the state untouched.
    pub fn begin_submit(&mut self) -> Result<PendingRequest, QueryError> {
        if self.state.is_loading() {
            warn!("{} lookup already in flight, ignoring submit", M::MODE.name());
            return Err(QueryError::Busy);
        }

        let url = M::validate(&self.state.input)
            .and_then(|query| M::request_url(&query, &self.base_url));
        let url = match url {
            Ok(url) => url,
            Err(e) => {
                debug!("{} lookup rejected: {}", M::MODE.name(), e);
                self.state.phase = Phase::Error(e.to_string());
                return Err(e);
            }
        };

        self.issued += 1;
        self.state.phase = Phase::Loading;
        info!("{} lookup #{}: GET {}", M::MODE.name(), self.issued, url);
        Ok(PendingRequest {
            seq: self.issued,
            url,
        })
    }

    /// Apply the outcome of `pending`.
    ///
    /// Returns `false` when the completion was stale and ignored.
    pub fn complete(
        &mut self,
        pending: PendingRequest,
        outcome: Result<String, QueryError>,
    ) -> bool {
        if pending.seq != self.issued {
            debug!(
                "{} lookup #{} superseded by #{}, dropping response",
                M::MODE.name(),
                pending.seq,
                self.issued
            );
            return false;
        }

        let decoded =
            outcome.and_then(|body| QueryResult::from_json(&body).map_err(QueryError::from));
        self.state.phase = match decoded {
            Ok(result) => {
                info!(
                    "{} lookup #{}: station {} level {:?}",
                    M::MODE.name(),
                    pending.seq,
                    result.station.id,
                    result.level
                );
                Phase::Success(result)
            }
            Err(e) => {
                warn!("{} lookup #{} failed: {}", M::MODE.name(), pending.seq, e);
                Phase::Error(e.to_string())
            }
        };
        true
    }

    /// Run one full submission through `transport`.
    pub async fn submit<T: Transport>(&mut self, transport: &T) -> PhaseKind {
        if let Ok(pending) = self.begin_submit() {
            let outcome = transport.get(&pending.url).await;
            self.complete(pending, outcome);
        }
        self.state.phase_kind()
    }

    /// Clear an error banner. No effect outside `Error`.
    pub fn dismiss_error(&mut self) {
        if let Phase::Error(_) = self.state.phase {
            self.state.phase = Phase::Idle;
        }
    }
}

impl LookupController<CoordinatesLookup> {
    /// Fill the coordinate fields from a geolocation fix.
    pub fn apply_location(&mut self, latitude: f64, longitude: f64) {
        let input = self.input_mut();
        input.latitude = Some(round_coordinate(latitude));
        input.longitude = Some(round_coordinate(longitude));
    }
}
