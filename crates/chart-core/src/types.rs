// File: crates/chart-core/src/types.rs
// Summary: Shared enums and small value types (chart discriminant, families, CSS-like lengths).

use serde::{Deserialize, Serialize};

/// Concrete chart type. Serialized as the `type` discriminant of [`crate::ChartOptions`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Line,
    Area,
    Bar,
    Scatter,
    Pie,
}

impl ChartType {
    pub const ALL: [ChartType; 5] = [
        ChartType::Line,
        ChartType::Area,
        ChartType::Bar,
        ChartType::Scatter,
        ChartType::Pie,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ChartType::Line => "line",
            ChartType::Area => "area",
            ChartType::Bar => "bar",
            ChartType::Scatter => "scatter",
            ChartType::Pie => "pie",
        }
    }

    /// Series type understood by the engine. Area charts are line series with a fill.
    pub const fn series_type(self) -> &'static str {
        match self {
            ChartType::Line | ChartType::Area => "line",
            ChartType::Bar => "bar",
            ChartType::Scatter => "scatter",
            ChartType::Pie => "pie",
        }
    }

    pub const fn family(self) -> ChartFamily {
        match self {
            ChartType::Pie => ChartFamily::Radial,
            _ => ChartFamily::Cartesian,
        }
    }
}

impl std::fmt::Display for ChartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Group of chart types sharing a coordinate system and therefore defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartFamily {
    /// X/Y axes: line, area, bar, scatter.
    Cartesian,
    /// No axes: pie.
    Radial,
}

/// Position or size accepted by the engine either as pixels or as a CSS-like string (`"10%"`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Length {
    Px(f64),
    Css(String),
}

impl From<f64> for Length {
    fn from(px: f64) -> Self { Length::Px(px) }
}

impl From<&str> for Length {
    fn from(s: &str) -> Self { Length::Css(s.to_string()) }
}

impl From<String> for Length {
    fn from(s: String) -> Self { Length::Css(s) }
}
