//! Result card for a successful lookup.

use aq_core::QueryResult;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ResultRowProps {
    pub name: String,
    pub value: String,
}

/// One labelled value in the result list.
#[component]
pub fn ResultRow(props: ResultRowProps) -> Element {
    rsx! {
        li {
            style: "margin: 4px 0;",
            strong { "{props.name}: " }
            span { "{props.value}" }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ResultPanelProps {
    pub result: QueryResult,
}

/// Card bordered and titled by the result's severity classification,
/// listing the station and every reading the service returned.
#[component]
pub fn ResultPanel(props: ResultPanelProps) -> Element {
    let result = &props.result;
    let classification = result.classification();
    let tier = classification.tier;
    let title = classification.title;
    let tier_name = tier.name();

    let card_style = format!(
        "margin: 16px 0; border: 1px solid {}; border-radius: 4px;",
        tier.accent_color()
    );
    let header_style = format!(
        "padding: 8px 16px; background: {}; border-bottom: 1px solid {}; color: #212121;",
        tier.background_color(),
        tier.accent_color()
    );

    let station_id = result.station.id;
    let station_name = result.station.name.clone();
    let station_url = result.station.url.clone();
    let readings: Vec<(&'static str, String)> = result
        .readings()
        .into_iter()
        .map(|(label, value)| (label, value.to_string()))
        .collect();
    let updated = result.updated_display();

    rsx! {
        div {
            class: "result-panel severity-{tier_name}",
            style: "{card_style}",
            div {
                style: "{header_style}",
                h5 {
                    style: "margin: 0; font-size: 16px;",
                    "Air Quality: {title}"
                }
            }
            ul {
                style: "list-style: none; padding: 0 16px; margin: 12px 0;",
                li {
                    style: "margin: 4px 0;",
                    strong { "Station: " }
                    if let Some(url) = station_url {
                        a { href: "{url}", target: "_blank", "#{station_id} \"{station_name}\"" }
                    } else {
                        "#{station_id} \"{station_name}\""
                    }
                }
                for (label, value) in readings {
                    ResultRow { key: "{label}", name: label.to_string(), value }
                }
                if !updated.is_empty() {
                    ResultRow { name: "Last updated".to_string(), value: updated.clone() }
                }
            }
        }
    }
}
