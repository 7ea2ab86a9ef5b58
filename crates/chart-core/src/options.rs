// File: crates/chart-core/src/options.rs
// Summary: ChartOptions, the caller-facing configuration mapping, and its typed sub-options.
// Notes:
// - Every field is optional so that "unset" is distinguishable from "set to the default";
//   the merge in `merge.rs` relies on that.
// - Keys follow the engine's camelCase names so options can be loaded from JSON as-is.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::axis::Axis;
use crate::series::Series;
use crate::types::{ChartType, Length};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Title {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtext: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Length>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipTrigger {
    Axis,
    Item,
    None,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<TooltipTrigger>,
}

impl Tooltip {
    pub fn trigger(trigger: TooltipTrigger) -> Self {
        Self { show: None, trigger: Some(trigger) }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orient {
    Horizontal,
    Vertical,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orient: Option<Orient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<Length>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Length>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Length>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Length>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<Length>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<Length>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contain_label: Option<bool>,
}

/// Chart configuration supplied partly by the caller and partly by decorators.
///
/// `kind` is the `type` discriminant. It stays optional here because callers and
/// defaults may omit it; the wrapper components fix it before the options reach
/// the base chart, and translation to engine JSON requires it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ChartType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<Tooltip>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<Grid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<Vec<Series>>,
    /// Palette cycled across series.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<bool>,
    /// Engine options without a typed field, forwarded as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChartOptions {
    pub fn new() -> Self { Self::default() }

    pub fn with_kind(mut self, kind: ChartType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_title(mut self, text: impl Into<String>) -> Self {
        self.title = Some(Title { text: Some(text.into()), ..Title::default() });
        self
    }

    pub fn with_tooltip(mut self, tooltip: Tooltip) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    pub fn with_legend(mut self, legend: Legend) -> Self {
        self.legend = Some(legend);
        self
    }

    pub fn with_grid(mut self, grid: Grid) -> Self {
        self.grid = Some(grid);
        self
    }

    pub fn with_x_axis(mut self, axis: Axis) -> Self {
        self.x_axis = Some(axis);
        self
    }

    pub fn with_y_axis(mut self, axis: Axis) -> Self {
        self.y_axis = Some(axis);
        self
    }

    /// Append a series, creating the list when unset.
    pub fn add_series(mut self, series: Series) -> Self {
        self.series.get_or_insert_with(Vec::new).push(series);
        self
    }

    pub fn with_color<I, S>(mut self, palette: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.color = Some(palette.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn with_animation(mut self, enabled: bool) -> Self {
        self.animation = Some(enabled);
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Parse caller options from engine-style JSON.
    pub fn from_json_str(input: &str) -> crate::ChartResult<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_options_serialize_to_empty_object() {
        assert_eq!(serde_json::to_value(ChartOptions::new()).unwrap(), json!({}));
    }

    #[test]
    fn unknown_keys_land_in_extra() {
        let opts = ChartOptions::from_json_str(r#"{ "type": "bar", "xAxis": { "type": "category" }, "dataZoom": [{}] }"#)
            .unwrap();
        assert_eq!(opts.kind, Some(ChartType::Bar));
        assert_eq!(opts.x_axis, Some(Axis::category()));
        assert_eq!(opts.extra.get("dataZoom"), Some(&json!([{}])));
        assert!(!opts.extra.contains_key("type"));
    }

    #[test]
    fn add_series_appends() {
        let opts = ChartOptions::new().add_series(Series::new("a")).add_series(Series::new("b"));
        let names: Vec<_> = opts.series.unwrap().into_iter().filter_map(|s| s.name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
