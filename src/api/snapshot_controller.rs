use crate::error::{AxisError, AxisResult};

use super::{AxisSnapshot, DateAxis};

impl DateAxis {
    /// Builds a deterministic snapshot useful for regression tests.
    ///
    /// Missing explicit bounds leave bounds and layout empty instead of
    /// failing, so a misconfigured axis can still be inspected.
    pub fn snapshot(&self) -> AxisResult<AxisSnapshot> {
        let layout = match self.layout() {
            Ok(layout) => Some(layout),
            Err(AxisError::MissingBounds) => None,
            Err(err) => return Err(err),
        };

        Ok(AxisSnapshot {
            config: self.config(),
            logical_bounds: self.logical_bounds().ok(),
            displayed_bounds: self.displayed_bounds().ok(),
            animation: self.animation_state(),
            layout,
            has_custom_formatter: self.has_time_label_formatter(),
            time_label_cache: self.time_label_cache_stats(),
        })
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> AxisResult<String> {
        let snapshot = self.snapshot()?;
        serde_json::to_string_pretty(&snapshot)
            .map_err(|e| AxisError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
