// File: crates/chart-core/tests/composition.rs
// Purpose: Wrapper composition contract: forced discriminant, pass-through, default injection.

use chart_core::{
    cartesian_defaults, variant_defaults, with_cartesian_props, with_defaults, with_theme, with_type, Axis,
    ChartOptions, ChartType, Grid, Series, Theme, Tooltip, TooltipTrigger,
};
use serde_json::json;

fn line(caller: ChartOptions) -> ChartOptions {
    with_type(with_cartesian_props(|o: ChartOptions| o), ChartType::Line)(caller)
}

#[test]
fn empty_caller_options_still_get_line_type() {
    let got = line(ChartOptions::new());
    assert_eq!(got.kind, Some(ChartType::Line));
    assert_eq!(got.x_axis, Some(Axis::category()));
    assert_eq!(got.y_axis, Some(Axis::value()));
}

#[test]
fn caller_type_cannot_override_wrapper() {
    for kind in ChartType::ALL {
        assert_eq!(line(ChartOptions::new().with_kind(kind)).kind, Some(ChartType::Line));
    }
}

#[test]
fn color_scenario_forwards_color_type_and_cartesian_defaults() {
    let got = line(ChartOptions::new().with_color(["red"]));
    let want = ChartOptions::new()
        .with_color(["red"])
        .with_kind(ChartType::Line)
        .with_x_axis(Axis::category())
        .with_y_axis(Axis::value())
        .with_tooltip(Tooltip::trigger(TooltipTrigger::Axis))
        .with_grid(Grid { contain_label: Some(true), ..Grid::default() });
    assert_eq!(got, want);
}

#[test]
fn caller_fields_are_forwarded_unmodified() {
    let caller = ChartOptions::new()
        .with_title("t")
        .with_tooltip(Tooltip { show: Some(false), trigger: None })
        .with_x_axis(Axis::default().with_name("x"))
        .add_series(Series::new("s").with_data([1.0]))
        .with_extra("dataZoom", json!([{ "type": "inside" }]));
    let got = line(caller.clone());
    assert_eq!(got.title, caller.title);
    assert_eq!(got.tooltip, caller.tooltip);
    assert_eq!(got.x_axis, caller.x_axis);
    assert_eq!(got.series, caller.series);
    assert_eq!(got.extra, caller.extra);
    // Untouched by the caller, so the default survives.
    assert_eq!(got.y_axis, cartesian_defaults().y_axis);
}

#[test]
fn variant_layer_sits_between_family_and_caller() {
    let scatter = with_type(
        with_defaults(with_cartesian_props(|o: ChartOptions| o), variant_defaults(ChartType::Scatter)),
        ChartType::Scatter,
    );
    let got = scatter(ChartOptions::new().with_y_axis(Axis::value().with_name("kg")));
    assert_eq!(got.x_axis, Some(Axis::value()));
    assert_eq!(got.y_axis, Some(Axis::value().with_name("kg")));
    assert_eq!(got.tooltip, Some(Tooltip::trigger(TooltipTrigger::Item)));
}

#[test]
fn theme_defaults_yield_to_caller_palette() {
    let themed = with_type(with_theme(|o: ChartOptions| o, &Theme::dark()), ChartType::Bar);
    let got = themed(ChartOptions::new().with_color(["#123456"]));
    assert_eq!(got.color, Some(vec!["#123456".to_string()]));
    assert_eq!(got.background_color.as_deref(), Some(Theme::dark().background));
}

#[test]
fn repeated_renders_are_identical() {
    let caller = ChartOptions::new().with_title("same").add_series(Series::new("a").with_data([1.0, 2.0]));
    let a = line(caller.clone()).to_echarts().unwrap();
    let b = line(caller).to_echarts().unwrap();
    assert_eq!(a, b);
}

#[test]
fn caller_extra_axis_beats_injected_default_axis() {
    let got = line(ChartOptions::new().with_extra("xAxis", json!({ "type": "time" })));
    let engine = got.to_echarts().unwrap();
    assert_eq!(engine["xAxis"], json!({ "type": "time" }));
    assert_eq!(engine["yAxis"], json!({ "type": "value" }));
}

#[test]
fn caller_extra_tooltip_survives_variant_and_family_layers() {
    let area = with_type(
        with_defaults(with_cartesian_props(|o: ChartOptions| o), variant_defaults(ChartType::Area)),
        ChartType::Area,
    );
    let engine = area(ChartOptions::new().with_extra("tooltip", json!({ "show": false }))).to_echarts().unwrap();
    assert_eq!(engine["tooltip"], json!({ "show": false }));
    assert_eq!(engine["xAxis"]["boundaryGap"], json!(false));
}
