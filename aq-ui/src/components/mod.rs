//! Dioxus RSX components for the air quality lookup client.

mod app;
mod city_view;
mod error_banner;
mod loading_spinner;
mod location_view;
mod result_panel;
mod result_view;
mod station_view;
mod tab_bar;

pub use app::App;
pub use city_view::CityView;
pub use error_banner::ErrorBanner;
pub use loading_spinner::LoadingSpinner;
pub use location_view::LocationView;
pub use result_panel::{ResultPanel, ResultRow};
pub use result_view::ResultView;
pub use station_view::StationView;
pub use tab_bar::TabBar;

/// Shared style for the lookup forms.
pub(crate) const FORM_STYLE: &str = "margin: 16px 0; display: flex; flex-wrap: wrap; gap: 12px; align-items: flex-end;";
pub(crate) const LABEL_STYLE: &str = "font-weight: bold; display: flex; flex-direction: column; gap: 4px;";
pub(crate) const INPUT_STYLE: &str = "padding: 6px 8px; border: 1px solid #BDBDBD; border-radius: 4px;";
pub(crate) const PRIMARY_BUTTON_STYLE: &str = "padding: 6px 16px; background: #1565C0; color: white; border: none; border-radius: 4px; cursor: pointer;";
pub(crate) const SECONDARY_BUTTON_STYLE: &str = "padding: 6px 16px; background: #757575; color: white; border: none; border-radius: 4px; cursor: pointer;";
