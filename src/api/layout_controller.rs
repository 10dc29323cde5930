#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::core::{CoordinateMapper, DataPoint, Orientation, TickPlan, TimeValue};
use crate::error::{AxisError, AxisResult};

use super::validation::{validate_axis_length, validate_target_tick_spacing, validate_zero_offset};
use super::{AxisLayout, AxisTick, DateAxis};

impl DateAxis {
    #[must_use]
    pub fn axis_length(&self) -> f64 {
        self.config.axis_length_px
    }

    /// Updates the viewport length after a resize.
    pub fn set_axis_length(&mut self, axis_length_px: f64) -> AxisResult<()> {
        let axis_length_px = validate_axis_length(axis_length_px)?;
        debug!(axis_length_px, "set axis length");
        self.config.axis_length_px = axis_length_px;
        Ok(())
    }

    pub fn set_zero_offset(&mut self, zero_offset_px: f64) -> AxisResult<()> {
        self.config.zero_offset_px = validate_zero_offset(zero_offset_px)?;
        Ok(())
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.config.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.config.orientation = orientation;
    }

    pub fn set_target_tick_spacing(&mut self, spacing_px: f64) -> AxisResult<()> {
        self.config.target_tick_spacing_px = validate_target_tick_spacing(spacing_px)?;
        Ok(())
    }

    /// Mapper over the displayed bounds.
    ///
    /// A viewport no longer than the zero offset is clamped to an empty
    /// mapping range so layout keeps going.
    pub fn coordinate_mapper(&self) -> AxisResult<CoordinateMapper> {
        let bounds = self.displayed_bounds()?;
        let length = self.config.axis_length_px;
        let zero_offset = self.config.zero_offset_px;
        let orientation = self.config.orientation;

        match CoordinateMapper::new(bounds, length, zero_offset, orientation) {
            Err(AxisError::DegenerateViewport {
                length,
                zero_offset,
            }) => {
                warn!(length, zero_offset, "clamping degenerate axis viewport");
                CoordinateMapper::clamped(bounds, length, zero_offset, orientation)
            }
            other => other,
        }
    }

    pub fn display_position(&self, value: TimeValue) -> AxisResult<f64> {
        Ok(self.coordinate_mapper()?.display_position(value))
    }

    pub fn value_for_display(&self, position: f64) -> AxisResult<TimeValue> {
        self.coordinate_mapper()?.value_for_display(position)
    }

    /// Strict-exclusive membership in the displayed bounds.
    pub fn is_value_on_axis(&self, value: TimeValue) -> AxisResult<bool> {
        Ok(self.coordinate_mapper()?.is_value_on_axis(value))
    }

    /// Plans ticks for the logical bounds and current axis length.
    pub fn plan_ticks(&self) -> AxisResult<TickPlan> {
        let bounds = self.logical_bounds()?;
        let plan = self.tick_planner()?.plan(bounds, self.config.axis_length_px);
        debug!(
            granularity = %plan.granularity,
            tick_count = plan.ticks.len(),
            target_tick_count = plan.target_tick_count,
            "planned time axis ticks"
        );
        Ok(plan)
    }

    /// Full layout pass: ticks, their pixel positions and labels.
    pub fn layout(&self) -> AxisResult<AxisLayout> {
        let plan = self.plan_ticks()?;
        let mapper = self.coordinate_mapper()?;

        let ticks = plan
            .ticks
            .iter()
            .map(|value| AxisTick {
                value: *value,
                position_px: mapper.display_position(*value),
                label: self.tick_label(*value, plan.granularity),
            })
            .collect();

        Ok(AxisLayout {
            granularity: plan.granularity,
            logical_bounds: self.logical_bounds()?,
            displayed_bounds: mapper.bounds(),
            ticks,
        })
    }

    /// Maps every sample time to its pixel offset on the displayed range.
    pub fn project_points(&self, points: &[DataPoint]) -> AxisResult<Vec<f64>> {
        let mapper = self.coordinate_mapper()?;

        // Large live snapshots can be projected in parallel; the result order
        // matches the input order either way.
        #[cfg(feature = "parallel-projection")]
        {
            Ok(points
                .par_iter()
                .map(|point| mapper.display_position(point.time))
                .collect())
        }

        #[cfg(not(feature = "parallel-projection"))]
        {
            Ok(points
                .iter()
                .map(|point| mapper.display_position(point.time))
                .collect())
        }
    }
}
