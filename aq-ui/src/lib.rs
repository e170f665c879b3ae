//! Dioxus front end for the air quality lookup client.
//!
//! This crate provides:
//! - `browser`: `fetch` transport, geolocation and page origin via `web-sys`
//! - `state`: `AppState` with one Dioxus Signal per controller
//! - `components`: RSX components (tabs, lookup forms, result view)
//!
//! [`mount`] is the single entry point; it launches the app into a given
//! root element.

pub mod browser;
pub mod components;
pub mod state;

use components::App;

/// Launch the app into the element with id `root`.
pub fn mount(root: &str) {
    log::info!("Mounting air quality client into #{}", root);
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(root))
        .launch(App);
}
