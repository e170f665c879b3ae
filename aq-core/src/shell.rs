//! Tab selection and the application bundle.

use url::Url;

use crate::controller::LookupController;
use crate::mode::{CityLookup, CoordinatesLookup, StationLookup};

/// One of the three lookup pages.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Page {
    #[default]
    ByLocation,
    ByCity,
    ByStation,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::ByLocation, Page::ByCity, Page::ByStation];

    /// Stable identifier, also used for DOM ids.
    pub fn key(self) -> &'static str {
        match self {
            Page::ByLocation => "by-location",
            Page::ByCity => "by-city",
            Page::ByStation => "by-station",
        }
    }

    /// Tab caption.
    pub fn label(self) -> &'static str {
        match self {
            Page::ByLocation => "By location",
            Page::ByCity => "By city",
            Page::ByStation => "By station",
        }
    }
}

/// Tracks which page is visible. Exactly one is active at all times.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct AppShell {
    active: Page,
}

impl AppShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_page(&self) -> Page {
        self.active
    }

    pub fn is_active(&self, page: Page) -> bool {
        self.active == page
    }

    pub fn select_page(&mut self, page: Page) {
        if self.active != page {
            log::debug!("switching page {} -> {}", self.active.key(), page.key());
        }
        self.active = page;
    }
}

/// One application instance: the shell plus a controller per page.
///
/// Nothing is global, so any number of instances can coexist. Switching
/// pages never touches the controllers.
#[derive(Debug, Clone)]
pub struct AirQualityApp {
    pub shell: AppShell,
    pub by_location: LookupController<CoordinatesLookup>,
    pub by_city: LookupController<CityLookup>,
    pub by_station: LookupController<StationLookup>,
}

impl AirQualityApp {
    pub fn new(base_url: Url) -> Self {
        Self {
            shell: AppShell::new(),
            by_location: LookupController::new(base_url.clone()),
            by_city: LookupController::new(base_url.clone()),
            by_station: LookupController::new(base_url),
        }
    }

    pub fn select_page(&mut self, page: Page) {
        self.shell.select_page(page);
    }

    pub fn active_page(&self) -> Page {
        self.shell.active_page()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::{CityInput, CoordinatesInput, StationInput};
    use crate::state::PhaseKind;

    fn app() -> AirQualityApp {
        AirQualityApp::new(Url::parse("http://localhost:8000").unwrap())
    }

    #[test]
    fn test_default_page() {
        assert_eq!(AppShell::new().active_page(), Page::ByLocation);
        assert_eq!(app().active_page(), Page::ByLocation);
    }

    #[test]
    fn test_select_page() {
        let mut shell = AppShell::new();
        for page in Page::ALL {
            shell.select_page(page);
            assert_eq!(shell.active_page(), page);
            let active: Vec<Page> = Page::ALL
                .into_iter()
                .filter(|p| shell.is_active(*p))
                .collect();
            assert_eq!(active, vec![page]);
        }
    }

    #[test]
    fn test_switching_pages_keeps_controller_state() {
        let mut app = app();
        app.by_location.set_input(CoordinatesInput::new(51.5, -0.12));
        let pending = app.by_location.begin_submit().unwrap();
        app.by_city.set_input(CityInput::new(""));
        let _ = app.by_city.begin_submit();
        app.by_station.set_input(StationInput::new(7));

        let before = (
            app.by_location.state().clone(),
            app.by_city.state().clone(),
            app.by_station.state().clone(),
        );
        for page in [Page::ByCity, Page::ByStation, Page::ByLocation, Page::ByCity] {
            app.select_page(page);
        }
        assert_eq!(app.by_location.state(), &before.0);
        assert_eq!(app.by_city.state(), &before.1);
        assert_eq!(app.by_station.state(), &before.2);
        assert_eq!(app.by_city.state().phase_kind(), PhaseKind::Error);

        assert!(app.by_location.complete(
            pending,
            Ok(r#"{"station":{"id":7,"name":"X"},"level":"good"}"#.to_string())
        ));
        assert_eq!(app.by_location.state().phase_kind(), PhaseKind::Success);
    }

    #[test]
    fn test_page_keys() {
        let keys: Vec<&str> = Page::ALL.iter().map(|p| p.key()).collect();
        assert_eq!(keys, vec!["by-location", "by-city", "by-station"]);
        assert_eq!(Page::ByStation.label(), "By station");
    }
}
