//! Lookup by monitoring station ID.

use aq_core::mode::parse_station_id;
use dioxus::prelude::*;

use super::{ResultView, FORM_STYLE, INPUT_STYLE, LABEL_STYLE, PRIMARY_BUTTON_STYLE};
use crate::state::{submit_lookup, AppState};

#[component]
pub fn StationView() -> Element {
    let state = use_context::<AppState>();
    let mut controller = state.by_station;
    let mut station_text = use_signal(String::new);

    let (phase, busy) = {
        let current = controller.read();
        (current.phase().clone(), !current.can_submit())
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        submit_lookup(controller);
    };

    let on_input = move |evt: Event<FormData>| {
        let text = evt.value();
        controller.write().input_mut().station = parse_station_id(&text);
        station_text.set(text);
    };

    rsx! {
        div {
            form {
                style: FORM_STYLE,
                onsubmit: on_submit,
                label {
                    style: LABEL_STYLE,
                    "Station ID"
                    input {
                        r#type: "number",
                        placeholder: "Station ID",
                        style: INPUT_STYLE,
                        value: "{station_text}",
                        disabled: busy,
                        oninput: on_input,
                    }
                }
                button {
                    r#type: "submit",
                    style: PRIMARY_BUTTON_STYLE,
                    disabled: busy,
                    "Go"
                }
            }
            ResultView {
                phase,
                on_dismiss: move |_| controller.write().dismiss_error(),
            }
        }
    }
}
