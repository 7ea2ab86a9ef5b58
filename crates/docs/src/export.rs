// File: crates/docs/src/export.rs
// Summary: Static HTML export of every page via server-side rendering, with inline chart mounts.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_dioxus::StaticMount;
use dioxus::prelude::*;

use crate::app::Shell;
use crate::pages::{pages, Page};
use crate::ECHARTS_CDN;

#[component]
fn ExportPage(page: Page) -> Element {
    #[allow(non_snake_case)]
    let Body = page.component;
    rsx! {
        StaticMount {
            Shell { current: page.route,
                Body {}
            }
        }
    }
}

/// Full HTML document for `page`.
pub fn render_page(page: Page) -> String {
    let mut dom = VirtualDom::new_with_props(ExportPage, ExportPageProps { page });
    dom.rebuild_in_place();
    let body = dioxus_ssr::render(&dom);
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{} | chart-dioxus</title>\n<script src=\"{ECHARTS_CDN}\"></script>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        page.label
    )
}

/// Write every page under `out_dir`, returning the written paths in page order.
pub fn export_site(out_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for page in pages() {
        let path = out_dir.join(page.file_name());
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(&path, render_page(page)).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(page = page.label, path = %path.display(), "exported page");
        written.push(path);
    }
    Ok(written)
}
