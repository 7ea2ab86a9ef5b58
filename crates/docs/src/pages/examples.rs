// File: crates/docs/src/pages/examples.rs
// Summary: Example pages, one per chart component, plus a gallery showing all of them.
// Data comes from CSV files bundled into the binary.

use chart_core::{Axis, ChartOptions, Dataset, Series};
use chart_dioxus::{AreaChart, BarChart, LineChart, PieChart, ScatterChart};
use dioxus::prelude::*;

use super::Page;

const TEMPERATURES_CSV: &str = include_str!("../../data/temperatures.csv");
const BROWSERS_CSV: &str = include_str!("../../data/browsers.csv");

pub const GALLERY: Page = Page { label: "Examples", route: "examples", order: 1, exact: false, component: Gallery };
pub const LINE: Page = Page { label: "Line", route: "examples/line", order: 2, exact: true, component: LineExample };
pub const SIMPLE_AREA: Page =
    Page { label: "Area", route: "examples/simple-area", order: 3, exact: true, component: SimpleAreaExample };
pub const BAR: Page = Page { label: "Bar", route: "examples/bar", order: 4, exact: true, component: BarExample };
pub const SCATTER: Page =
    Page { label: "Scatter", route: "examples/scatter", order: 5, exact: true, component: ScatterExample };
pub const PIE: Page = Page { label: "Pie", route: "examples/pie", order: 6, exact: true, component: PieExample };

const LINE_SNIPPET: &str = r#"let data = Dataset::from_csv_str(TEMPERATURES_CSV)?;
rsx! { LineChart { options: data.to_options().with_title("Monthly average temperature") } }"#;

const AREA_SNIPPET: &str = r#"let options = ChartOptions::new()
    .with_x_axis(Axis::category().with_categories(["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]))
    .add_series(Series::new("visits").with_data([820.0, 932.0, 901.0, 934.0, 1290.0, 1330.0, 1320.0]));
rsx! { AreaChart { options } }"#;

const BAR_SNIPPET: &str = r#"rsx! { BarChart { options: data.to_options() } }"#;

const SCATTER_SNIPPET: &str = r#"let points = (0..120).map(|i| (i as f64 / 4.0, (i as f64 / 9.0).sin() * 10.0));
rsx! { ScatterChart { options: ChartOptions::new().add_series(Series::new("samples").with_data(points)) } }"#;

const PIE_SNIPPET: &str = r#"let slices = Dataset::from_csv_str(BROWSERS_CSV)?.to_items("share")?;
rsx! { PieChart { options: ChartOptions::new().add_series(Series::new("share").with_data(slices)) } }"#;

#[component]
fn Example(title: &'static str, snippet: &'static str, children: Element) -> Element {
    rsx! {
        section { class: "chart_dioxus__example",
            h2 { "{title}" }
            {children}
            pre { code { "{snippet}" } }
        }
    }
}

#[component]
fn DemoError(message: String) -> Element {
    rsx! { p { class: "chart_dioxus__error", "{message}" } }
}

#[component]
pub fn LineExample() -> Element {
    let data = match Dataset::from_csv_str(TEMPERATURES_CSV) {
        Ok(data) => data,
        Err(err) => return rsx! { DemoError { message: err.to_string() } },
    };
    rsx! {
        Example { title: "Line", snippet: LINE_SNIPPET,
            LineChart { id: "example-line", options: data.to_options().with_title("Monthly average temperature") }
        }
    }
}

#[component]
pub fn SimpleAreaExample() -> Element {
    let options = ChartOptions::new()
        .with_x_axis(Axis::category().with_categories(["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]))
        .add_series(Series::new("visits").with_data([820.0, 932.0, 901.0, 934.0, 1290.0, 1330.0, 1320.0]));
    rsx! {
        Example { title: "Simple area", snippet: AREA_SNIPPET,
            AreaChart { id: "example-simple-area", options: options }
        }
    }
}

#[component]
pub fn BarExample() -> Element {
    let data = match Dataset::from_csv_str(TEMPERATURES_CSV) {
        Ok(data) => data,
        Err(err) => return rsx! { DemoError { message: err.to_string() } },
    };
    rsx! {
        Example { title: "Bar", snippet: BAR_SNIPPET,
            BarChart { id: "example-bar", options: data.to_options() }
        }
    }
}

#[component]
pub fn ScatterExample() -> Element {
    let points = (0..120).map(|i| (i as f64 / 4.0, (i as f64 / 9.0).sin() * 10.0));
    let options = ChartOptions::new().add_series(Series::new("samples").with_data(points));
    rsx! {
        Example { title: "Scatter", snippet: SCATTER_SNIPPET,
            ScatterChart { id: "example-scatter", options: options }
        }
    }
}

#[component]
pub fn PieExample() -> Element {
    let slices = match Dataset::from_csv_str(BROWSERS_CSV).and_then(|d| d.to_items("share")) {
        Ok(slices) => slices,
        Err(err) => return rsx! { DemoError { message: err.to_string() } },
    };
    rsx! {
        Example { title: "Pie", snippet: PIE_SNIPPET,
            PieChart { id: "example-pie", options: ChartOptions::new().add_series(Series::new("share").with_data(slices)) }
        }
    }
}

#[component]
pub fn Gallery() -> Element {
    rsx! {
        h1 { "Examples" }
        LineExample {}
        SimpleAreaExample {}
        BarExample {}
        ScatterExample {}
        PieExample {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_datasets_parse() {
        let temps = Dataset::from_csv_str(TEMPERATURES_CSV).unwrap();
        assert_eq!(temps.categories.len(), 12);
        assert_eq!(temps.columns.len(), 2);
        assert_eq!(Dataset::from_csv_str(BROWSERS_CSV).unwrap().to_items("share").unwrap().len(), 5);
    }
}
