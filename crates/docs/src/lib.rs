// File: crates/docs/src/lib.rs
// Summary: Documentation site for the chart components: pages, shell layout, static export.

pub mod app;
pub mod export;
pub mod pages;

pub use app::{App, Shell};
pub use pages::{pages, resolve_route, Page};

/// Engine bundle loaded by every page.
pub const ECHARTS_CDN: &str = "https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js";

pub(crate) const DOCS_CSS: &str = include_str!("../assets/docs.css");
