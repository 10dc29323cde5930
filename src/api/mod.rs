mod animation_controller;
mod axis_config;
mod axis_label_format;
mod data_controller;
mod engine;
mod engine_config;
mod engine_snapshot;
mod label_cache;
mod label_formatter_controller;
mod layout_controller;
mod snapshot_controller;
mod validation;

pub use axis_config::{AxisLabelLocale, TimeAxisLabelConfig, TimeAxisTimeZone};
pub use axis_label_format::{
    TickLabelPattern, format_time_axis_tick_label, resolve_tick_label_pattern,
};
pub use engine::DateAxis;
pub use engine_config::DateAxisConfig;
pub use engine_snapshot::{AxisLayout, AxisSnapshot, AxisTick};
pub use label_cache::{TimeLabelCacheStats, TimeLabelFormatterFn};
