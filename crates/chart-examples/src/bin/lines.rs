// File: crates/chart-examples/src/bin/lines.rs
// Summary: Minimal example that resolves a line chart through the decorators and writes the
// engine option JSON.

use anyhow::{Context, Result};
use chart_core::{with_cartesian_props, with_type, Axis, ChartOptions, ChartType, Series};

fn main() -> Result<()> {
    let line = with_type(with_cartesian_props(|o: ChartOptions| o), ChartType::Line);

    let options = line(
        ChartOptions::new()
            .with_title("Example lines")
            .with_x_axis(Axis::category().with_categories(["0", "1", "2", "3", "4", "5"]))
            .add_series(Series::new("y").with_data([0.0, 1.2, 0.8, 1.8, 1.4, 2.0]).smooth(true)),
    );

    let out = std::path::PathBuf::from(
        std::env::args().nth(1).unwrap_or_else(|| "target/out/example_lines.json".to_string()),
    );
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(&out, options.to_echarts_json_pretty()?).with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}
