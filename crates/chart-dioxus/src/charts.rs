// File: crates/chart-dioxus/src/charts.rs
// Summary: Chart-type wrappers. Each forwards the caller props, layers family (and variant)
// defaults under them, and fixes the `type` discriminant last.

use chart_core::{variant_defaults, with_cartesian_props, with_defaults, with_radial_props, with_type, ChartType};
use dioxus::prelude::*;

use crate::chart::{Chart, ChartProps};

fn mount(props: ChartProps) -> Element {
    let ChartProps { options, id, width, height, class, theme } = props;
    rsx! {
        Chart {
            options: options,
            id: id,
            width: width,
            height: height,
            class: class,
            theme: theme,
        }
    }
}

/// `Chart` with the shared X/Y axis defaults of line, area, bar and scatter charts.
pub fn cartesian_chart(props: ChartProps) -> Element {
    with_cartesian_props(mount)(props)
}

/// `Chart` with the item tooltip and legend defaults of axis-less charts.
pub fn radial_chart(props: ChartProps) -> Element {
    with_radial_props(mount)(props)
}

#[component]
pub fn LineChart(props: ChartProps) -> Element {
    with_type(cartesian_chart, ChartType::Line)(props)
}

#[component]
pub fn AreaChart(props: ChartProps) -> Element {
    with_type(with_defaults(cartesian_chart, variant_defaults(ChartType::Area)), ChartType::Area)(props)
}

#[component]
pub fn BarChart(props: ChartProps) -> Element {
    with_type(cartesian_chart, ChartType::Bar)(props)
}

/// Value axes on both dimensions; feed it `[x, y]` pairs.
#[component]
pub fn ScatterChart(props: ChartProps) -> Element {
    with_type(with_defaults(cartesian_chart, variant_defaults(ChartType::Scatter)), ChartType::Scatter)(props)
}

/// Feed it named items, e.g. from `Dataset::to_items`.
#[component]
pub fn PieChart(props: ChartProps) -> Element {
    with_type(radial_chart, ChartType::Pie)(props)
}
