//! Loading indicator shown while a lookup is in flight.

use dioxus::prelude::*;

/// Simple loading indicator.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            role: "status",
            style: "display: flex; justify-content: center; align-items: center; padding: 24px; color: #666;",
            "Loading..."
        }
    }
}
