//! Application state managed via Dioxus context.
//!
//! `AppState` holds the tab shell and the three lookup controllers, each in
//! its own Signal, and is provided via `use_context_provider`. Views retrieve
//! it with `use_context::<AppState>()`.

use aq_core::{
    AirQualityApp, AppShell, CityLookup, CoordinatesLookup, LookupController, LookupMode,
    StationLookup, Transport,
};
use dioxus::prelude::*;
use url::Url;

use crate::browser::BrowserTransport;

/// Shared application state.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Which page is visible
    pub shell: Signal<AppShell>,
    /// Lookup by latitude/longitude
    pub by_location: Signal<LookupController<CoordinatesLookup>>,
    /// Lookup by city name
    pub by_city: Signal<LookupController<CityLookup>>,
    /// Lookup by station ID
    pub by_station: Signal<LookupController<StationLookup>>,
}

impl AppState {
    /// Create an AppState whose controllers query `base_url`.
    pub fn new(base_url: Url) -> Self {
        let app = AirQualityApp::new(base_url);
        Self {
            shell: Signal::new(app.shell),
            by_location: Signal::new(app.by_location),
            by_city: Signal::new(app.by_city),
            by_station: Signal::new(app.by_station),
        }
    }
}

/// Start a submission on `controller` and finish it in a spawned task.
///
/// Validation failures and the in-flight guard are handled synchronously by
/// the controller; only a valid submission reaches the network.
pub fn submit_lookup<M: LookupMode>(mut controller: Signal<LookupController<M>>) {
    let pending = match controller.write().begin_submit() {
        Ok(pending) => pending,
        Err(_) => return,
    };

    spawn(async move {
        let outcome = BrowserTransport.get(&pending.url).await;
        controller.write().complete(pending, outcome);
    });
}
