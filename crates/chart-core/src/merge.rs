// File: crates/chart-core/src/merge.rs
// Summary: Three-stage option merge: defaults, then caller overrides, then forced discriminant.
// Notes:
// - Merge depth is shallow at top-level field granularity: a caller `xAxis` replaces the
//   default `xAxis` whole, series and palettes are replaced, never concatenated.
// - `extra` merges per key with the caller winning; values are replaced, not merged.
// - A caller `extra` entry named like a typed field (`xAxis`, `tooltip`, ...) hides the
//   default typed field, since typed fields shadow `extra` keys at translation.

use crate::options::ChartOptions;
use crate::types::ChartType;

/// Layer `overrides` on top of `defaults`. Fields set in `overrides` win.
pub fn merge(defaults: &ChartOptions, overrides: ChartOptions) -> ChartOptions {
    let ChartOptions {
        kind,
        title,
        tooltip,
        legend,
        grid,
        x_axis,
        y_axis,
        series,
        color,
        background_color,
        animation,
        extra,
    } = overrides;

    let claimed = |key: &str| extra.contains_key(key);
    let title = inherit(title, &defaults.title, claimed("title"));
    let tooltip = inherit(tooltip, &defaults.tooltip, claimed("tooltip"));
    let legend = inherit(legend, &defaults.legend, claimed("legend"));
    let grid = inherit(grid, &defaults.grid, claimed("grid"));
    let x_axis = inherit(x_axis, &defaults.x_axis, claimed("xAxis"));
    let y_axis = inherit(y_axis, &defaults.y_axis, claimed("yAxis"));
    let series = inherit(series, &defaults.series, claimed("series"));
    let color = inherit(color, &defaults.color, claimed("color"));
    let background_color = inherit(background_color, &defaults.background_color, claimed("backgroundColor"));
    let animation = inherit(animation, &defaults.animation, claimed("animation"));

    let mut merged_extra = defaults.extra.clone();
    merged_extra.extend(extra);

    ChartOptions {
        kind: kind.or(defaults.kind),
        title,
        tooltip,
        legend,
        grid,
        x_axis,
        y_axis,
        series,
        color,
        background_color,
        animation,
        extra: merged_extra,
    }
}

/// Caller value if set; otherwise the default, unless the caller's `extra` claims the key.
fn inherit<T: Clone>(own: Option<T>, default: &Option<T>, claimed_by_caller: bool) -> Option<T> {
    match own {
        Some(value) => Some(value),
        None if claimed_by_caller => None,
        None => default.clone(),
    }
}

/// Full resolution used by the chart wrappers: `defaults < caller < kind`.
pub fn resolve(defaults: &ChartOptions, caller: ChartOptions, kind: ChartType) -> ChartOptions {
    let mut merged = merge(defaults, caller);
    merged.kind = Some(kind);
    merged
}
