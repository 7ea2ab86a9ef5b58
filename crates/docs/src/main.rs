// File: crates/docs/src/main.rs
// Purpose: Docs site launcher. With `web`/`desktop` runs the site interactively; otherwise
// exports static HTML to the directory given as first argument (default `target/site`).

#[cfg(any(feature = "web", feature = "desktop"))]
fn main() {
    dioxus::launch(chart_docs::App);
}

#[cfg(not(any(feature = "web", feature = "desktop")))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;

    let _ = chart_core::telemetry::init_default_tracing();
    let out = std::env::args().nth(1).unwrap_or_else(|| "target/site".to_string());
    let written = chart_docs::export::export_site(std::path::Path::new(&out))
        .with_context(|| format!("exporting docs to '{out}'"))?;
    println!("Wrote {} pages to {}", written.len(), out);
    Ok(())
}
