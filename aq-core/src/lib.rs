//! Core types for the air quality lookup client.
//!
//! This crate provides:
//! - `severity`: level identifier -> display title and tier lookup table
//! - `model`: `QueryResult` and `Station` as returned by the status service
//! - `state`: `QueryState` and its `Phase` lifecycle
//! - `mode`: per-mode input validation and request URL building
//! - `controller`: the generic `LookupController` state machine
//! - `shell`: tab selection and the `AirQualityApp` bundle
//! - `transport`: the outbound request seam
//!
//! The `api` feature adds a `reqwest` backed transport for native builds.

pub mod controller;
pub mod error;
pub mod mode;
pub mod model;
pub mod severity;
pub mod shell;
pub mod state;
pub mod transport;

#[cfg(feature = "api")]
pub mod api;

pub use controller::{LookupController, PendingRequest};
pub use error::QueryError;
pub use mode::{CityLookup, CoordinatesLookup, LookupMode, Mode, StationLookup};
pub use model::{QueryResult, Station};
pub use severity::{classify, Classification, Severity};
pub use shell::{AirQualityApp, AppShell, Page};
pub use state::{Phase, PhaseKind, QueryState};
pub use transport::Transport;
