// File: crates/chart-core/src/axis.rs
// Summary: Axis options for the Cartesian family (category/value/time/log scales).

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    Category,
    Value,
    Time,
    Log,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<AxisType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Category labels; only meaningful for `AxisType::Category`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boundary_gap: Option<bool>,
    /// Value axes only: do not force zero into the extent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
}

impl Axis {
    pub fn of(kind: AxisType) -> Self {
        Self { kind: Some(kind), ..Self::default() }
    }

    pub fn category() -> Self { Self::of(AxisType::Category) }

    pub fn value() -> Self { Self::of(AxisType::Value) }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_categories<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn with_boundary_gap(mut self, gap: bool) -> Self {
        self.boundary_gap = Some(gap);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unset_fields_are_omitted() {
        let axis = Axis::category().with_categories(["Mon", "Tue"]);
        assert_eq!(
            serde_json::to_value(&axis).unwrap(),
            json!({ "type": "category", "data": ["Mon", "Tue"] })
        );
    }

    #[test]
    fn boundary_gap_uses_engine_key() {
        let axis = Axis::value().with_boundary_gap(false);
        assert_eq!(
            serde_json::to_value(&axis).unwrap(),
            json!({ "type": "value", "boundaryGap": false })
        );
    }
}
