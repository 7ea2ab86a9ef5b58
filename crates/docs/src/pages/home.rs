// File: crates/docs/src/pages/home.rs
// Summary: Landing page: headline, embedded demo and the three selling points. Static content only.

use dioxus::prelude::*;

use super::examples;
use super::Page;

pub const PAGE: Page = Page { label: "Home", route: "", order: 0, exact: true, component: Home };

#[component]
pub fn Home() -> Element {
    let examples_href = examples::GALLERY.href(PAGE.depth());
    let demo_src = examples::SIMPLE_AREA.href(PAGE.depth());

    rsx! {
        div { class: "chart_dioxus__home",
            div { class: "chart_dioxus__home_header",
                div { class: "chart_dioxus__home_header_text",
                    span { "A simple and declarative set of Dioxus components built on top of Apache ECharts" }
                    a { href: "{examples_href}",
                        button { "Check out the examples" }
                    }
                }
                iframe { src: "{demo_src}", title: "Simple area chart" }
            }

            div { class: "chart_dioxus__home_articles",
                article {
                    h2 { "Simplicity" }
                    span {
                        "chart-dioxus makes it easy to generate ECharts components by wrapping the code required to render the entire chart."
                    }
                }

                article {
                    h2 { "Easy to customize" }
                    span {
                        "In most cases, charts look and behave exactly as you need without modifications. A simple options-structure allows for deep customization, and styling can be done via options or CSS."
                    }
                }

                article {
                    h2 { "Declarative" }
                    span { "components are purely presentational" }
                }
            }
        }
    }
}
