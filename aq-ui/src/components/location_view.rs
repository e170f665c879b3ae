//! Lookup by latitude/longitude, with an optional geolocation fill.

use aq_core::mode::parse_coordinate;
use dioxus::prelude::*;

use super::{
    ResultView, FORM_STYLE, INPUT_STYLE, LABEL_STYLE, PRIMARY_BUTTON_STYLE,
    SECONDARY_BUTTON_STYLE,
};
use crate::browser;
use crate::state::{submit_lookup, AppState};

fn coordinate_text(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[component]
pub fn LocationView() -> Element {
    let state = use_context::<AppState>();
    let mut controller = state.by_location;

    // Raw entry text; the controller only keeps parsed values.
    let mut lat_text = use_signal(|| coordinate_text(controller.read().input().latitude));
    let mut lon_text = use_signal(|| coordinate_text(controller.read().input().longitude));

    let (phase, busy) = {
        let current = controller.read();
        (current.phase().clone(), !current.can_submit())
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        submit_lookup(controller);
    };

    let on_lat_input = move |evt: Event<FormData>| {
        let text = evt.value();
        controller.write().input_mut().latitude = parse_coordinate(&text);
        lat_text.set(text);
    };

    let on_lon_input = move |evt: Event<FormData>| {
        let text = evt.value();
        controller.write().input_mut().longitude = parse_coordinate(&text);
        lon_text.set(text);
    };

    let on_locate = move |_: MouseEvent| {
        spawn(async move {
            if let Some((latitude, longitude)) = browser::current_position().await {
                controller.write().apply_location(latitude, longitude);
                let input = *controller.read().input();
                lat_text.set(coordinate_text(input.latitude));
                lon_text.set(coordinate_text(input.longitude));
            }
        });
    };

    rsx! {
        div {
            form {
                style: FORM_STYLE,
                onsubmit: on_submit,
                label {
                    style: LABEL_STYLE,
                    "Latitude"
                    input {
                        r#type: "number",
                        step: "0.000001",
                        placeholder: "Latitude",
                        style: INPUT_STYLE,
                        value: "{lat_text}",
                        disabled: busy,
                        oninput: on_lat_input,
                    }
                }
                label {
                    style: LABEL_STYLE,
                    "Longitude"
                    input {
                        r#type: "number",
                        step: "0.000001",
                        placeholder: "Longitude",
                        style: INPUT_STYLE,
                        value: "{lon_text}",
                        disabled: busy,
                        oninput: on_lon_input,
                    }
                }
                button {
                    r#type: "submit",
                    style: PRIMARY_BUTTON_STYLE,
                    disabled: busy,
                    "Go"
                }
                button {
                    r#type: "button",
                    style: SECONDARY_BUTTON_STYLE,
                    disabled: busy,
                    onclick: on_locate,
                    "Use current location"
                }
            }
            ResultView {
                phase,
                on_dismiss: move |_| controller.write().dismiss_error(),
            }
        }
    }
}
