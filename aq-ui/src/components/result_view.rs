//! Phase-driven presentation of one lookup.

use aq_core::Phase;
use dioxus::prelude::*;

use super::{ErrorBanner, LoadingSpinner, ResultPanel};

#[derive(Props, Clone, PartialEq)]
pub struct ResultViewProps {
    pub phase: Phase,
    /// Wired to the owning controller's `dismiss_error`
    pub on_dismiss: EventHandler<()>,
}

/// Nothing when idle, a spinner while loading, a dismissible banner on
/// error and the result card on success.
#[component]
pub fn ResultView(props: ResultViewProps) -> Element {
    match props.phase {
        Phase::Idle => rsx! {},
        Phase::Loading => rsx! { LoadingSpinner {} },
        Phase::Error(message) => rsx! {
            ErrorBanner { message, on_dismiss: props.on_dismiss }
        },
        Phase::Success(result) => rsx! {
            ResultPanel { result }
        },
    }
}
