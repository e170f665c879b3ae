//! Tab strip for switching between lookup pages.

use aq_core::Page;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct TabBarProps {
    pub active: Page,
    pub on_select: EventHandler<Page>,
}

fn tab_style(active: bool) -> &'static str {
    if active {
        "padding: 8px 16px; border: 1px solid #BDBDBD; border-bottom: 1px solid white; border-radius: 4px 4px 0 0; background: white; margin-bottom: -1px; font-weight: bold; cursor: pointer;"
    } else {
        "padding: 8px 16px; border: 1px solid transparent; background: none; color: #1565C0; cursor: pointer;"
    }
}

/// One button per page; the active one is highlighted.
#[component]
pub fn TabBar(props: TabBarProps) -> Element {
    let on_select = props.on_select;

    rsx! {
        div {
            role: "tablist",
            style: "display: flex; gap: 4px; border-bottom: 1px solid #BDBDBD;",
            for (page, key, label) in Page::ALL.map(|p| (p, p.key(), p.label())) {
                button {
                    key: "{key}",
                    id: "{key}-tab",
                    r#type: "button",
                    role: "tab",
                    aria_selected: props.active == page,
                    style: tab_style(props.active == page),
                    onclick: move |_| on_select.call(page),
                    "{label}"
                }
            }
        }
    }
}
