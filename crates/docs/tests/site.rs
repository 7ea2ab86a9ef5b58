// File: crates/docs/tests/site.rs
// Purpose: Page registry, route resolution, Home purity and static export output.

use chart_docs::pages::{examples, home};
use chart_docs::{export, pages, resolve_route};
use dioxus::prelude::*;

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn pages_are_ordered_with_home_first() {
    let all = pages();
    assert_eq!(all[0], home::PAGE);
    assert!(all.windows(2).all(|w| w[0].order <= w[1].order));
    assert_eq!(home::PAGE.label, "Home");
    assert!(home::PAGE.exact);
}

#[test]
fn routes_resolve_exact_then_prefix() {
    assert_eq!(resolve_route(""), Some(home::PAGE));
    assert_eq!(resolve_route("/"), Some(home::PAGE));
    assert_eq!(resolve_route("/examples/line/"), Some(examples::LINE));
    assert_eq!(resolve_route("examples"), Some(examples::GALLERY));
    assert_eq!(resolve_route("examples/heatmap"), Some(examples::GALLERY));
    assert_eq!(resolve_route("about"), None);
}

#[test]
fn home_renders_static_content() {
    let html = render(home::Home);
    assert!(html.contains("A simple and declarative set of Dioxus components built on top of Apache ECharts"));
    for heading in ["Simplicity", "Easy to customize", "Declarative"] {
        assert!(html.contains(&format!("<h2>{heading}</h2>")), "missing {heading}: {html}");
    }
    assert!(html.contains(r#"src="examples/simple-area.html""#), "{html}");
}

#[test]
fn home_render_is_idempotent() {
    assert_eq!(render(home::Home), render(home::Home));
}

#[test]
fn exported_line_page_mounts_inline() {
    let html = export::render_page(examples::LINE);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(chart_docs::ECHARTS_CDN));
    assert!(html.contains(r#"id="example-line""#), "{html}");
    assert!(html.contains(r#"data-chart-type="line""#), "{html}");
    assert!(html.contains("chart.setOption("), "{html}");
    assert!(html.contains(r#"href="../index.html""#), "{html}");
}

#[test]
fn export_writes_every_page() {
    let out = std::path::PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("site_export");
    let _ = std::fs::remove_dir_all(&out);
    let written = export::export_site(&out).expect("export site");
    assert_eq!(written.len(), pages().len());
    assert!(out.join("index.html").exists());
    assert!(out.join("examples/simple-area.html").exists());
    let pie = std::fs::read_to_string(out.join("examples/pie.html")).expect("read pie page");
    assert!(pie.contains(r#"data-chart-type="pie""#));
}
