use serde::{Deserialize, Serialize};

use crate::animation::BoundsAnimationConfig;
use crate::core::{DEFAULT_TARGET_TICK_SPACING_PX, Orientation};

use super::{AxisLabelLocale, TimeAxisLabelConfig, TimeAxisTimeZone};

/// Public axis bootstrap configuration.
///
/// This type is serializable so host applications can persist/load axis setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DateAxisConfig {
    pub axis_length_px: f64,
    #[serde(default)]
    pub zero_offset_px: f64,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default = "default_auto_ranging")]
    pub auto_ranging: bool,
    #[serde(default = "default_target_tick_spacing_px")]
    pub target_tick_spacing_px: f64,
    #[serde(default)]
    pub animation: BoundsAnimationConfig,
    #[serde(default)]
    pub label_config: TimeAxisLabelConfig,
}

impl DateAxisConfig {
    /// Creates an auto-ranging horizontal axis config with default tuning.
    #[must_use]
    pub fn new(axis_length_px: f64) -> Self {
        Self {
            axis_length_px,
            zero_offset_px: 0.0,
            orientation: Orientation::default(),
            auto_ranging: default_auto_ranging(),
            target_tick_spacing_px: default_target_tick_spacing_px(),
            animation: BoundsAnimationConfig::default(),
            label_config: TimeAxisLabelConfig::default(),
        }
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the pixel offset at which the lower bound is drawn.
    #[must_use]
    pub fn with_zero_offset(mut self, zero_offset_px: f64) -> Self {
        self.zero_offset_px = zero_offset_px;
        self
    }

    #[must_use]
    pub fn with_auto_ranging(mut self, auto_ranging: bool) -> Self {
        self.auto_ranging = auto_ranging;
        self
    }

    /// Sets the preferred average gap between ticks.
    #[must_use]
    pub fn with_target_tick_spacing(mut self, target_tick_spacing_px: f64) -> Self {
        self.target_tick_spacing_px = target_tick_spacing_px;
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animation: BoundsAnimationConfig) -> Self {
        self.animation = animation;
        self
    }

    /// Disables bounds animation so every change is applied immediately.
    #[must_use]
    pub fn without_animation(mut self) -> Self {
        self.animation.enabled = false;
        self
    }

    #[must_use]
    pub fn with_label_locale(mut self, locale: AxisLabelLocale) -> Self {
        self.label_config.locale = locale;
        self
    }

    #[must_use]
    pub fn with_timezone(mut self, timezone: TimeAxisTimeZone) -> Self {
        self.label_config.timezone = timezone;
        self
    }
}

fn default_auto_ranging() -> bool {
    true
}

fn default_target_tick_spacing_px() -> f64 {
    DEFAULT_TARGET_TICK_SPACING_PX
}
