use std::cell::RefCell;

use tracing::debug;

use crate::animation::BoundsAnimator;
use crate::core::{RangeModel, TickPlanner};
use crate::error::AxisResult;

use super::label_cache::{TimeLabelCache, TimeLabelFormatterFn};
use super::validation::validate_axis_config;
use super::DateAxisConfig;

/// Main orchestration facade consumed by host applications.
///
/// `DateAxis` coordinates the range model, the bounds animator, tick
/// planning, coordinate mapping and tick-label formatting. It is meant to
/// live on the layout thread; callers serialize mutations.
pub struct DateAxis {
    pub(super) config: DateAxisConfig,
    pub(super) range: RangeModel,
    pub(super) animator: BoundsAnimator,
    pub(super) time_label_formatter: Option<TimeLabelFormatterFn>,
    pub(super) time_label_formatter_generation: u64,
    pub(super) time_label_cache: RefCell<TimeLabelCache>,
}

impl DateAxis {
    pub fn new(config: DateAxisConfig) -> AxisResult<Self> {
        let config = validate_axis_config(config)?;
        debug!(
            axis_length_px = config.axis_length_px,
            orientation = ?config.orientation,
            auto_ranging = config.auto_ranging,
            "create date axis"
        );

        Ok(Self {
            config,
            range: RangeModel::new(config.auto_ranging),
            animator: BoundsAnimator::new(config.animation),
            time_label_formatter: None,
            time_label_formatter_generation: 0,
            time_label_cache: RefCell::new(TimeLabelCache::default()),
        })
    }

    #[must_use]
    pub fn config(&self) -> DateAxisConfig {
        let mut config = self.config;
        config.auto_ranging = self.range.is_auto_ranging();
        config
    }

    pub(super) fn tick_planner(&self) -> AxisResult<TickPlanner> {
        TickPlanner::new(
            self.config.target_tick_spacing_px,
            self.config.label_config.timezone.fixed_offset(),
        )
    }

    /// Hands the range model's queued transition to the animator.
    pub(super) fn forward_pending_transition(&mut self) {
        if let Some(target) = self.range.take_pending_transition() {
            let animated = self.animator.request_transition(target);
            debug!(
                lower = %target.lower(),
                upper = %target.upper(),
                animated,
                "logical bounds changed"
            );
        }
    }
}
