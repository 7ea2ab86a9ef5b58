// File: crates/chart-core/src/echarts.rs
// Summary: Translation of resolved ChartOptions into the engine's option JSON, plus the
// JavaScript snippets that mount and dispose an engine instance on a DOM container.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::axis::Axis;
use crate::error::{ChartError, ChartResult};
use crate::options::{ChartOptions, Grid, Legend, Title, Tooltip};
use crate::series::{AreaStyle, Series};
use crate::types::ChartType;

const DISCRIMINANT_KEY: &str = "type";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EngineOption<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tooltip: Option<&'a Tooltip>,
    #[serde(skip_serializing_if = "Option::is_none")]
    legend: Option<&'a Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    grid: Option<&'a Grid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    x_axis: Option<&'a Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    y_axis: Option<&'a Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    series: Option<Vec<EngineSeries>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<&'a Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    background_color: Option<&'a String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    animation: Option<bool>,
}

#[derive(Serialize)]
struct EngineSeries {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(flatten)]
    series: Series,
}

impl EngineSeries {
    fn new(kind: ChartType, mut series: Series) -> Self {
        series.extra.remove(DISCRIMINANT_KEY);
        if kind == ChartType::Area && series.area_style.is_none() {
            series.area_style = Some(AreaStyle::default());
        }
        Self { kind: kind.series_type(), series }
    }
}

impl ChartOptions {
    /// Engine option object for these options.
    ///
    /// Requires the discriminant. Typed fields win over `extra` keys of the same name.
    pub fn to_echarts(&self) -> ChartResult<Value> {
        let kind = self.kind.ok_or(ChartError::MissingType)?;
        let series = self
            .series
            .as_ref()
            .map(|list| list.iter().cloned().map(|s| EngineSeries::new(kind, s)).collect::<Vec<_>>());
        let series_count = series.as_ref().map_or(0, Vec::len);

        let option = EngineOption {
            title: self.title.as_ref(),
            tooltip: self.tooltip.as_ref(),
            legend: self.legend.as_ref(),
            grid: self.grid.as_ref(),
            x_axis: self.x_axis.as_ref(),
            y_axis: self.y_axis.as_ref(),
            series,
            color: self.color.as_ref(),
            background_color: self.background_color.as_ref(),
            animation: self.animation,
        };

        let mut out = match serde_json::to_value(&option)? {
            Value::Object(map) => map,
            other => return Err(ChartError::InvalidData(format!("engine option is not an object: {other}"))),
        };
        let mut shadowed = 0usize;
        for (key, value) in &self.extra {
            if key == DISCRIMINANT_KEY || out.contains_key(key) {
                shadowed += 1;
                continue;
            }
            out.insert(key.clone(), value.clone());
        }
        retype_raw_series(&mut out, kind);
        tracing::debug!(
            chart_type = %kind,
            series = series_count,
            extra = self.extra.len(),
            shadowed,
            "translated chart options"
        );
        Ok(Value::Object(out))
    }

    pub fn to_echarts_json(&self) -> ChartResult<String> {
        Ok(serde_json::to_string(&self.to_echarts()?)?)
    }

    pub fn to_echarts_json_pretty(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(&self.to_echarts()?)?)
    }
}

/// Series given as raw JSON through `extra` still get the chart's engine type; with no
/// series at all the engine receives an empty list.
fn retype_raw_series(out: &mut Map<String, Value>, kind: ChartType) {
    match out.entry("series").or_insert_with(|| Value::Array(Vec::new())) {
        Value::Array(list) => {
            for item in list.iter_mut().filter_map(Value::as_object_mut) {
                item.insert(DISCRIMINANT_KEY.to_string(), Value::from(kind.series_type()));
                if kind == ChartType::Area && !item.contains_key("areaStyle") {
                    item.insert("areaStyle".to_string(), Value::Object(Map::new()));
                }
            }
        }
        Value::Object(item) => {
            item.insert(DISCRIMINANT_KEY.to_string(), Value::from(kind.series_type()));
        }
        _ => {}
    }
}

/// JavaScript that initialises (or reuses) the engine instance on `dom_id` and applies `option`
/// without merging into the previous option.
///
/// Does nothing if the container or the global `echarts` is missing.
pub fn mount_script(dom_id: &str, option: &Value, theme: Option<&str>) -> ChartResult<String> {
    let id = serde_json::to_string(dom_id)?;
    let theme = match theme {
        Some(t) => serde_json::to_string(t)?,
        None => "null".to_string(),
    };
    let option = serde_json::to_string(option)?;
    let script = format!(
        "(function(){{\
var el=document.getElementById({id});\
if(!el||typeof echarts==='undefined'){{return;}}\
var chart=echarts.getInstanceByDom(el)||echarts.init(el,{theme});\
chart.setOption({option},true);\
}})();"
    );
    Ok(escape_inline(&script))
}

/// JavaScript that disposes the engine instance on `dom_id`, if any.
pub fn dispose_script(dom_id: &str) -> ChartResult<String> {
    let id = serde_json::to_string(dom_id)?;
    let script = format!(
        "(function(){{\
var el=document.getElementById({id});\
if(!el||typeof echarts==='undefined'){{return;}}\
var chart=echarts.getInstanceByDom(el);\
if(chart){{chart.dispose();}}\
}})();"
    );
    Ok(escape_inline(&script))
}

/// Keep scripts safe to embed inside an HTML `<script>` element.
fn escape_inline(script: &str) -> String {
    script.replace("</", "<\\/")
}
