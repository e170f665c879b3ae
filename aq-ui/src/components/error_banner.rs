//! Dismissible error banner.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
    /// Called when the close button is pressed
    pub on_dismiss: EventHandler<()>,
}

/// Displays an error message in a styled box with a close button.
#[component]
pub fn ErrorBanner(props: ErrorBannerProps) -> Element {
    let on_dismiss = props.on_dismiss;

    rsx! {
        div {
            role: "alert",
            style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 16px; margin: 16px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            span {
                strong { "Error: " }
                "{props.message}"
            }
            button {
                r#type: "button",
                aria_label: "Close",
                style: "background: none; border: none; color: #C62828; font-size: 18px; cursor: pointer;",
                onclick: move |_| on_dismiss.call(()),
                "×"
            }
        }
    }
}
