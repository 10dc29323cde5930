use tracing::{debug, trace, warn};

use crate::core::{Bounds, DataPoint, TimeValue};
use crate::error::AxisResult;

use super::DateAxis;

impl DateAxis {
    /// Replaces the data snapshot backing auto-ranging.
    pub fn set_data(&mut self, snapshot: &[TimeValue]) {
        debug!(count = snapshot.len(), "set data snapshot");
        self.range.set_auto_range_from_data(snapshot);
        self.forward_pending_transition();
    }

    /// Replaces the data snapshot from timestamped samples.
    pub fn set_data_points(&mut self, points: &[DataPoint]) {
        let times: Vec<TimeValue> = points.iter().map(|point| point.time).collect();
        self.set_data(&times);
    }

    /// Extends auto-ranged bounds with one streamed instant.
    pub fn append_time(&mut self, value: TimeValue) {
        trace!(time = %value, "append data instant");
        self.range.extend_auto_range(value);
        self.forward_pending_transition();
    }

    pub fn append_point(&mut self, point: DataPoint) {
        self.append_time(point.time);
    }

    /// Sets explicit bounds and disables auto-ranging.
    ///
    /// The displayed range animates toward the new bounds when animation is
    /// enabled.
    pub fn set_explicit_bounds(&mut self, lower: TimeValue, upper: TimeValue) -> AxisResult<()> {
        if let Err(err) = self.range.set_explicit_bounds(lower, upper) {
            warn!(error = %err, "rejecting explicit bounds");
            return Err(err);
        }
        self.forward_pending_transition();
        Ok(())
    }

    /// Sets explicit bounds and snaps the displayed range to them at once.
    pub fn set_explicit_bounds_immediate(
        &mut self,
        lower: TimeValue,
        upper: TimeValue,
    ) -> AxisResult<()> {
        if let Err(err) = self.range.set_explicit_bounds(lower, upper) {
            warn!(error = %err, "rejecting explicit bounds");
            return Err(err);
        }
        let _ = self.range.take_pending_transition();
        let bounds = self.range.logical_bounds()?;
        debug!(lower = %bounds.lower(), upper = %bounds.upper(), "explicit bounds applied immediately");
        self.animator.jump_to(bounds);
        Ok(())
    }

    pub fn set_auto_ranging(&mut self, enabled: bool) {
        debug!(enabled, "set auto-ranging");
        self.range.set_auto_ranging(enabled);
        self.forward_pending_transition();
    }

    #[must_use]
    pub fn is_auto_ranging(&self) -> bool {
        self.range.is_auto_ranging()
    }

    /// Authoritative bounds used for tick planning.
    pub fn logical_bounds(&self) -> AxisResult<Bounds> {
        self.range.logical_bounds()
    }

    /// Bounds derived from the latest data snapshot, if any was supplied.
    #[must_use]
    pub fn data_bounds(&self) -> Option<Bounds> {
        self.range.data_bounds()
    }
}
