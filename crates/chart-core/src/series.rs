// File: crates/chart-core/src/series.rs
// Summary: Series options and data points. The series `type` is not stored here;
// it is derived from the chart discriminant when translating to engine JSON.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One datum of a series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataPoint {
    /// Plain value, positioned by the category axis.
    Value(f64),
    /// `[x, y]` pair for value/value axes (scatter).
    Pair(f64, f64),
    /// Named item (pie slices).
    Item { name: String, value: f64 },
    /// Gap in the series, serialized as `null`.
    Missing,
}

impl From<f64> for DataPoint {
    fn from(v: f64) -> Self { DataPoint::Value(v) }
}

impl From<(f64, f64)> for DataPoint {
    fn from((x, y): (f64, f64)) -> Self { DataPoint::Pair(x, y) }
}

impl From<Option<f64>> for DataPoint {
    fn from(v: Option<f64>) -> Self { v.map_or(DataPoint::Missing, DataPoint::Value) }
}

impl From<(&str, f64)> for DataPoint {
    fn from((name, value): (&str, f64)) -> Self { DataPoint::Item { name: name.to_string(), value } }
}

impl From<(String, f64)> for DataPoint {
    fn from((name, value): (String, f64)) -> Self { DataPoint::Item { name, value } }
}

/// Area fill under a line series. An empty style still enables the fill.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AreaStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Label {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub data: Vec<DataPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smooth: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_style: Option<AreaStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    /// Engine series options without a typed field, forwarded as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Series {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), ..Self::default() }
    }

    pub fn with_data<I, D>(mut self, data: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<DataPoint>,
    {
        self.data = data.into_iter().map(Into::into).collect();
        self
    }

    pub fn smooth(mut self, smooth: bool) -> Self {
        self.smooth = Some(smooth);
        self
    }

    pub fn stacked(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    pub fn with_area_style(mut self, style: AreaStyle) -> Self {
        self.area_style = Some(style);
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn data_points_match_engine_shapes() {
        let s = Series::default().with_data(vec![
            DataPoint::Value(1.5),
            DataPoint::Pair(2.0, 3.0),
            DataPoint::Item { name: "a".into(), value: 4.0 },
            DataPoint::Missing,
        ]);
        assert_eq!(
            serde_json::to_value(&s.data).unwrap(),
            json!([1.5, [2.0, 3.0], { "name": "a", "value": 4.0 }, null])
        );
    }

    #[test]
    fn data_points_parse_back() {
        let pts: Vec<DataPoint> = serde_json::from_str(r#"[1, [2, 3], {"name": "x", "value": 5}, null]"#).unwrap();
        assert_eq!(
            pts,
            vec![
                DataPoint::Value(1.0),
                DataPoint::Pair(2.0, 3.0),
                DataPoint::Item { name: "x".into(), value: 5.0 },
                DataPoint::Missing,
            ]
        );
    }

    #[test]
    fn extras_are_flattened() {
        let s = Series::new("s").with_extra("barWidth", json!(12));
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["barWidth"], json!(12));
        assert_eq!(v["name"], json!("s"));
    }
}
