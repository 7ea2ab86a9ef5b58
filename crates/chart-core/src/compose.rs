// File: crates/chart-core/src/compose.rs
// Summary: Decorators over render functions. Each takes a base renderer `Fn(P) -> R` and
// returns a new renderer with extra defaults or a fixed discriminant layered on.
// Notes:
// - Renderers are generic over the props type so the same combinators serve plain
//   `ChartOptions` (tests, headless use) and UI component props.

use crate::defaults::{cartesian_defaults, radial_defaults};
use crate::merge::merge;
use crate::options::ChartOptions;
use crate::theme::Theme;
use crate::types::ChartType;

/// Props that carry a [`ChartOptions`] mapping the decorators can rewrite.
pub trait HasOptions {
    fn options_mut(&mut self) -> &mut ChartOptions;
}

impl HasOptions for ChartOptions {
    fn options_mut(&mut self) -> &mut ChartOptions { self }
}

/// Layer `defaults` under whatever options the caller passes.
pub fn with_defaults<P, R, F>(base: F, defaults: ChartOptions) -> impl Fn(P) -> R
where
    P: HasOptions,
    F: Fn(P) -> R,
{
    move |mut props: P| {
        let caller = std::mem::take(props.options_mut());
        *props.options_mut() = merge(&defaults, caller);
        base(props)
    }
}

/// Shared X/Y axis defaults for line, area, bar and scatter charts.
pub fn with_cartesian_props<P, R, F>(base: F) -> impl Fn(P) -> R
where
    P: HasOptions,
    F: Fn(P) -> R,
{
    with_defaults(base, cartesian_defaults())
}

/// Item tooltip and legend defaults for axis-less charts.
pub fn with_radial_props<P, R, F>(base: F) -> impl Fn(P) -> R
where
    P: HasOptions,
    F: Fn(P) -> R,
{
    with_defaults(base, radial_defaults())
}

/// Palette and background of `theme` as defaults.
pub fn with_theme<P, R, F>(base: F, theme: &Theme) -> impl Fn(P) -> R
where
    P: HasOptions,
    F: Fn(P) -> R,
{
    with_defaults(base, theme.as_defaults())
}

/// Fix the `type` discriminant. Applied after the caller options, so it cannot be overridden.
pub fn with_type<P, R, F>(base: F, kind: ChartType) -> impl Fn(P) -> R
where
    P: HasOptions,
    F: Fn(P) -> R,
{
    move |mut props: P| {
        props.options_mut().kind = Some(kind);
        base(props)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::Axis;
    use crate::merge::resolve;

    fn forward(opts: ChartOptions) -> ChartOptions { opts }

    #[test]
    fn stacked_defaults_take_outer_precedence() {
        let inner = with_cartesian_props(forward);
        let outer = with_defaults(inner, ChartOptions::new().with_x_axis(Axis::value()));
        let got = outer(ChartOptions::new());
        assert_eq!(got.x_axis, Some(Axis::value()));
        assert_eq!(got.y_axis, Some(Axis::value()));
    }

    #[test]
    fn wrapper_matches_three_stage_resolve() {
        let render = with_type(with_cartesian_props(forward), ChartType::Bar);
        let caller = ChartOptions::new().with_title("t").with_kind(ChartType::Pie);
        assert_eq!(render(caller.clone()), resolve(&cartesian_defaults(), caller, ChartType::Bar));
    }

    struct Wrapped {
        options: ChartOptions,
        id: &'static str,
    }

    impl HasOptions for Wrapped {
        fn options_mut(&mut self) -> &mut ChartOptions { &mut self.options }
    }

    #[test]
    fn other_props_pass_through() {
        let render = with_type(with_radial_props(|p: Wrapped| (p.id, p.options)), ChartType::Pie);
        let (id, opts) = render(Wrapped { options: ChartOptions::new(), id: "c1" });
        assert_eq!(id, "c1");
        assert_eq!(opts.kind, Some(ChartType::Pie));
        assert!(opts.legend.is_some());
    }
}
