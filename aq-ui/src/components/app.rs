//! Root component: tab strip plus the three lookup pages.

use aq_core::Page;
use dioxus::prelude::*;

use super::{CityView, LocationView, StationView, TabBar};
use crate::browser;
use crate::state::AppState;

/// Inactive panes stay mounted so their lookups keep running.
fn pane_style(active: bool) -> &'static str {
    if active {
        "display: block;"
    } else {
        "display: none;"
    }
}

#[component]
pub fn App() -> Element {
    let mut state = use_context_provider(|| AppState::new(browser::origin_url()));
    let shell = (state.shell)();

    rsx! {
        div {
            style: "max-width: 720px; margin: 0 auto; padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            h1 {
                style: "font-size: 22px; color: #2c3e50; margin: 0 0 16px 0;",
                "Air Quality"
            }

            TabBar {
                active: shell.active_page(),
                on_select: move |page: Page| state.shell.write().select_page(page),
            }

            div {
                id: Page::ByLocation.key(),
                role: "tabpanel",
                style: pane_style(shell.is_active(Page::ByLocation)),
                LocationView {}
            }
            div {
                id: Page::ByCity.key(),
                role: "tabpanel",
                style: pane_style(shell.is_active(Page::ByCity)),
                CityView {}
            }
            div {
                id: Page::ByStation.key(),
                role: "tabpanel",
                style: pane_style(shell.is_active(Page::ByStation)),
                StationView {}
            }
        }
    }
}
