use crate::core::{Granularity, TimeValue};
use crate::error::AxisResult;

use super::axis_label_format::format_time_axis_tick_label;
use super::label_cache::{TimeLabelCacheKey, TimeLabelCacheProfile};
use super::validation::validate_time_axis_label_config;
use super::{DateAxis, TimeAxisLabelConfig, TimeLabelCacheStats, TimeLabelFormatterFn};

impl DateAxis {
    /// Installs a formatter that takes precedence over the built-in labels.
    pub fn set_time_label_formatter(&mut self, formatter: TimeLabelFormatterFn) {
        self.time_label_formatter = Some(formatter);
        self.time_label_formatter_generation =
            self.time_label_formatter_generation.saturating_add(1);
        self.time_label_cache.borrow_mut().clear();
    }

    pub fn clear_time_label_formatter(&mut self) {
        self.time_label_formatter = None;
        self.time_label_formatter_generation =
            self.time_label_formatter_generation.saturating_add(1);
        self.time_label_cache.borrow_mut().clear();
    }

    #[must_use]
    pub fn has_time_label_formatter(&self) -> bool {
        self.time_label_formatter.is_some()
    }

    #[must_use]
    pub fn time_label_config(&self) -> TimeAxisLabelConfig {
        self.config.label_config
    }

    /// Changes locale/time zone. Calendar alignment follows the new zone on
    /// the next layout pass.
    pub fn set_time_label_config(&mut self, config: TimeAxisLabelConfig) -> AxisResult<()> {
        self.config.label_config = validate_time_axis_label_config(config)?;
        self.time_label_cache.borrow_mut().clear();
        Ok(())
    }

    /// Label text for a tick produced at `granularity`.
    #[must_use]
    pub fn tick_label(&self, value: TimeValue, granularity: Granularity) -> String {
        let key = TimeLabelCacheKey {
            profile: self.time_label_cache_profile(),
            value,
            granularity,
        };

        if let Some(cached) = self.time_label_cache.borrow_mut().get(key) {
            return cached;
        }

        let text = match &self.time_label_formatter {
            Some(formatter) => formatter(value),
            None => format_time_axis_tick_label(value, granularity, self.config.label_config),
        };
        self.time_label_cache.borrow_mut().insert(key, text.clone());
        text
    }

    #[must_use]
    pub fn time_label_cache_stats(&self) -> TimeLabelCacheStats {
        self.time_label_cache.borrow().stats()
    }

    pub fn clear_time_label_cache(&self) {
        self.time_label_cache.borrow_mut().clear();
    }

    fn time_label_cache_profile(&self) -> TimeLabelCacheProfile {
        if self.time_label_formatter.is_some() {
            TimeLabelCacheProfile::Custom {
                formatter_generation: self.time_label_formatter_generation,
            }
        } else {
            TimeLabelCacheProfile::BuiltIn {
                locale: self.config.label_config.locale,
                timezone: self.config.label_config.timezone,
            }
        }
    }
}
