use serde::{Deserialize, Serialize};

use crate::animation::AnimationState;
use crate::core::{Bounds, Granularity, TimeValue};
use crate::error::{AxisError, AxisResult};

use super::{DateAxisConfig, TimeLabelCacheStats};

/// One rendered tick: instant, pixel offset and label text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: TimeValue,
    pub position_px: f64,
    pub label: String,
}

/// Result of one layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLayout {
    pub granularity: Granularity,
    pub logical_bounds: Bounds,
    pub displayed_bounds: Bounds,
    pub ticks: Vec<AxisTick>,
}

impl AxisLayout {
    #[must_use]
    pub fn tick_values(&self) -> Vec<TimeValue> {
        self.ticks.iter().map(|tick| tick.value).collect()
    }

    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.ticks.iter().map(|tick| tick.label.as_str()).collect()
    }
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSnapshot {
    pub config: DateAxisConfig,
    pub logical_bounds: Option<Bounds>,
    pub displayed_bounds: Option<Bounds>,
    pub animation: Option<AnimationState>,
    pub layout: Option<AxisLayout>,
    pub has_custom_formatter: bool,
    pub time_label_cache: TimeLabelCacheStats,
}

impl AxisSnapshot {
    pub fn from_json_str(input: &str) -> AxisResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| AxisError::InvalidData(format!("failed to parse snapshot json: {e}")))
    }
}
