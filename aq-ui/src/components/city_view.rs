//! Lookup by city name.

use dioxus::prelude::*;

use super::{ResultView, FORM_STYLE, INPUT_STYLE, LABEL_STYLE, PRIMARY_BUTTON_STYLE};
use crate::state::{submit_lookup, AppState};

#[component]
pub fn CityView() -> Element {
    let state = use_context::<AppState>();
    let mut controller = state.by_city;

    let (phase, busy, city) = {
        let current = controller.read();
        (
            current.phase().clone(),
            !current.can_submit(),
            current.input().city.clone(),
        )
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        submit_lookup(controller);
    };

    let on_input = move |evt: Event<FormData>| {
        controller.write().input_mut().city = evt.value();
    };

    rsx! {
        div {
            form {
                style: FORM_STYLE,
                onsubmit: on_submit,
                label {
                    style: LABEL_STYLE,
                    "City"
                    input {
                        r#type: "text",
                        placeholder: "City",
                        style: INPUT_STYLE,
                        value: "{city}",
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
