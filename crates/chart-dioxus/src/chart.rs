// File: crates/chart-dioxus/src/chart.rs
// Summary: Base `Chart` component. Translates resolved options to engine JSON and mounts
// the engine on its container, either through `eval` after render or as an inline script.

use std::cell::RefCell;
use std::rc::Rc;

use chart_core::{dispose_script, mount_script, ChartOptions, ChartResult, HasOptions};
use dioxus::prelude::*;

/// How `Chart` hands its option to the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MountStrategy {
    /// Run the mount script with `document::eval` once the container exists.
    #[default]
    Eval,
    /// Emit the mount script right after the container (static HTML export).
    InlineScript,
}

#[derive(Props, Clone, PartialEq)]
pub struct ChartProps {
    #[props(default)]
    pub options: ChartOptions,
    /// DOM id of the container; generated when empty.
    #[props(into, default)]
    pub id: String,
    #[props(into, default = "100%".to_string())]
    pub width: String,
    #[props(into, default = "400px".to_string())]
    pub height: String,
    #[props(into, default)]
    pub class: String,
    /// Engine theme name passed to `echarts.init`; none when empty.
    #[props(into, default)]
    pub theme: String,
}

impl HasOptions for ChartProps {
    fn options_mut(&mut self) -> &mut ChartOptions { &mut self.options }
}

fn build_mount_script(id: &str, props: &ChartProps) -> ChartResult<String> {
    let option = props.options.to_echarts()?;
    let theme = (!props.theme.is_empty()).then_some(props.theme.as_str());
    mount_script(id, &option, theme)
}

/// Id used when the caller gives none. Scope ids are stable for a given tree, so
/// rendering the same tree twice yields the same markup.
fn default_chart_id() -> String {
    format!("chart-dioxus-{}", current_scope_id().map(|scope| scope.0).unwrap_or_default())
}

/// Tracks which container currently holds a live engine instance, in `Eval` mode.
#[derive(Debug, Default)]
struct EngineSlot {
    mounted: Option<String>,
}

impl EngineSlot {
    /// Scripts to run after a render that targets `id`. `mount` is `None` when the
    /// options were rejected; the previous instance is then torn down.
    fn update(&mut self, id: &str, mount: Option<&str>) -> Vec<String> {
        let mut scripts = Vec::new();
        if let Some(previous) = self.mounted.take() {
            if previous != id || mount.is_none() {
                scripts.extend(dispose_for(&previous));
            }
        }
        if let Some(js) = mount {
            scripts.push(js.to_string());
            self.mounted = Some(id.to_string());
        }
        scripts
    }

    /// Container id and dispose script of the live instance, if any.
    fn release(&mut self) -> Option<(String, String)> {
        let id = self.mounted.take()?;
        let js = dispose_for(&id)?;
        Some((id, js))
    }
}

fn dispose_for(id: &str) -> Option<String> {
    match dispose_script(id) {
        Ok(js) => Some(js),
        Err(err) => {
            tracing::debug!(chart = %id, error = %err, "could not build dispose script");
            None
        }
    }
}

/// Hand `js` to the renderer. Failures surface asynchronously and are only logged.
fn run_script(chart: String, js: String) {
    spawn_forever(async move {
        if let Err(err) = document::eval(&js).await {
            tracing::debug!(chart = %chart, error = %err, "engine script failed");
        }
    });
}

/// Container for one engine instance. Options without a `type` are rejected with a
/// warning and leave the container empty.
#[component]
pub fn Chart(props: ChartProps) -> Element {
    let generated = use_hook(default_chart_id);
    let id = if props.id.is_empty() { generated } else { props.id.clone() };
    let strategy = try_use_context::<MountStrategy>().unwrap_or_default();
    let slot = use_hook(|| Rc::new(RefCell::new(EngineSlot::default())));

    let script = match build_mount_script(&id, &props) {
        Ok(js) => Some(js),
        Err(err) => {
            tracing::warn!(chart = %id, error = %err, "chart options rejected; rendering empty container");
            None
        }
    };

    let eval_script = script.clone().filter(|_| strategy == MountStrategy::Eval);
    let effect_slot = slot.clone();
    use_effect(use_reactive((&id, &eval_script), move |(id, eval_script)| {
        let scripts = effect_slot.borrow_mut().update(&id, eval_script.as_deref());
        for js in scripts {
            run_script(id.clone(), js);
        }
    }));

    use_drop(move || {
        let released = slot.borrow_mut().release();
        if let Some((id, js)) = released {
            run_script(id, js);
        }
    });

    let inline_script = script.filter(|_| strategy == MountStrategy::InlineScript);
    let chart_type = props.options.kind.map_or("none", |k| k.name());
    let class = props.class.clone();
    let style = format!("width:{};height:{};", props.width, props.height);

    rsx! {
        div {
            id: "{id}",
            class: "{class}",
            style: "{style}",
            "data-chart-type": chart_type,
        }
        if let Some(js) = inline_script {
            script { dangerous_inner_html: js }
        }
    }
}

/// Switches every `Chart` below it to inline mount scripts.
#[component]
pub fn StaticMount(children: Element) -> Element {
    use_context_provider(|| MountStrategy::InlineScript);
    rsx! { {children} }
}
