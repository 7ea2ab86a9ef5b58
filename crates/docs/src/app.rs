// File: crates/docs/src/app.rs
// Summary: Site shell (styles + navigation) and the interactive root component.

use dioxus::prelude::*;

use crate::pages::{home, pages, resolve_route, Page};
use crate::{DOCS_CSS, ECHARTS_CDN};

fn nav_class(page: &Page, current: &str) -> &'static str {
    if page.route == current { "active" } else { "" }
}

/// Styles, navigation and the page body. With `on_navigate`, links switch pages in place
/// instead of following their relative `href`.
#[component]
pub fn Shell(current: &'static str, on_navigate: Option<EventHandler<&'static str>>, children: Element) -> Element {
    let depth = resolve_route(current).map_or(0, |p| p.depth());
    rsx! {
        style { dangerous_inner_html: DOCS_CSS }
        header { class: "chart_dioxus__nav",
            for page in pages() {
                a {
                    class: nav_class(&page, current),
                    href: page.href(depth),
                    onclick: move |evt: MouseEvent| {
                        if let Some(handler) = on_navigate {
                            evt.prevent_default();
                            handler.call(page.route);
                        }
                    },
                    {page.label}
                }
            }
        }
        main { class: "chart_dioxus__main", {children} }
    }
}

/// Interactive root: keeps the current route in a signal.
#[component]
pub fn App() -> Element {
    let mut route = use_signal(|| "");
    let page = resolve_route(route()).unwrap_or(home::PAGE);
    #[allow(non_snake_case)]
    let Body = page.component;
    tracing::debug!(route = page.route, "rendering page");

    rsx! {
        document::Script { src: "{ECHARTS_CDN}" }
        Shell { current: page.route, on_navigate: move |next: &'static str| route.set(next),
            Body {}
        }
    }
}
