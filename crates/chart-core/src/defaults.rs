// File: crates/chart-core/src/defaults.rs
// Summary: Default option sets injected by the family and variant decorators.

use crate::axis::Axis;
use crate::options::{ChartOptions, Grid, Legend, Tooltip, TooltipTrigger};
use crate::types::{ChartFamily, ChartType};

/// Category X axis, value Y axis, axis-triggered tooltip, labels kept inside the grid.
pub fn cartesian_defaults() -> ChartOptions {
    ChartOptions::new()
        .with_x_axis(Axis::category())
        .with_y_axis(Axis::value())
        .with_tooltip(Tooltip::trigger(TooltipTrigger::Axis))
        .with_grid(Grid { contain_label: Some(true), ..Grid::default() })
}

/// Item tooltip and a visible legend; no axes.
pub fn radial_defaults() -> ChartOptions {
    ChartOptions::new()
        .with_tooltip(Tooltip::trigger(TooltipTrigger::Item))
        .with_legend(Legend { show: Some(true), ..Legend::default() })
}

pub fn family_defaults(family: ChartFamily) -> ChartOptions {
    match family {
        ChartFamily::Cartesian => cartesian_defaults(),
        ChartFamily::Radial => radial_defaults(),
    }
}

/// Defaults a single variant layers above its family defaults.
pub fn variant_defaults(kind: ChartType) -> ChartOptions {
    match kind {
        // Fill starts at the Y axis instead of half a category in.
        ChartType::Area => ChartOptions::new().with_x_axis(Axis::category().with_boundary_gap(false)),
        ChartType::Scatter => ChartOptions::new()
            .with_x_axis(Axis::value())
            .with_y_axis(Axis::value())
            .with_tooltip(Tooltip::trigger(TooltipTrigger::Item)),
        ChartType::Line | ChartType::Bar | ChartType::Pie => ChartOptions::new(),
    }
}
