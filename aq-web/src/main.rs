//! Air Quality lookup, browser build.
//!
//! Three tabs query the status service by coordinates, by city and by
//! station ID; each keeps its own lookup state while hidden. The service is
//! expected on the same origin as the page under `/api/status/*`.

/// DOM element the app is mounted into.
const ROOT_ELEMENT_ID: &str = "main";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    log::info!("Starting air quality client");
    aq_ui::mount(ROOT_ELEMENT_ID);
}
