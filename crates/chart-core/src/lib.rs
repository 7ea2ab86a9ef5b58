// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; typed chart options, decorators and engine translation.

pub mod axis;
pub mod compose;
pub mod dataset;
pub mod defaults;
pub mod echarts;
pub mod error;
pub mod merge;
pub mod options;
pub mod series;
pub mod telemetry;
pub mod theme;
pub mod types;

pub use axis::{Axis, AxisType};
pub use compose::{with_cartesian_props, with_defaults, with_radial_props, with_theme, with_type, HasOptions};
pub use dataset::Dataset;
pub use defaults::{cartesian_defaults, family_defaults, radial_defaults, variant_defaults};
pub use echarts::{dispose_script, mount_script};
pub use error::{ChartError, ChartResult};
pub use merge::{merge, resolve};
pub use options::{ChartOptions, Grid, Legend, Orient, Title, Tooltip, TooltipTrigger};
pub use series::{AreaStyle, DataPoint, Label, Series};
pub use theme::Theme;
pub use types::{ChartFamily, ChartType, Length};
