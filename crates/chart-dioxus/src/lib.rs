// File: crates/chart-dioxus/src/lib.rs
// Summary: Dioxus components over chart-core: the base `Chart` and one wrapper per chart type.
// Notes:
// - The engine (Apache ECharts) must be loaded by the host page as the global `echarts`.
// - Wrappers are plain render functions composed with chart-core decorators, so the same
//   defaults and precedence apply here and in headless use.

pub mod chart;
pub mod charts;

pub use chart::{Chart, ChartProps, MountStrategy, StaticMount};
pub use charts::{cartesian_chart, radial_chart, AreaChart, BarChart, LineChart, PieChart, ScatterChart};

pub use chart_core;
