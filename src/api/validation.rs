use crate::animation::BoundsAnimationConfig;
use crate::error::{AxisError, AxisResult};

use super::{DateAxisConfig, TimeAxisLabelConfig};

const MAX_TRANSITION_DURATION_MS: u64 = 60_000;

pub(super) fn validate_axis_config(config: DateAxisConfig) -> AxisResult<DateAxisConfig> {
    validate_axis_length(config.axis_length_px)?;
    validate_zero_offset(config.zero_offset_px)?;
    validate_target_tick_spacing(config.target_tick_spacing_px)?;
    validate_animation_config(config.animation)?;
    validate_time_axis_label_config(config.label_config)?;
    Ok(config)
}

pub(super) fn validate_axis_length(axis_length_px: f64) -> AxisResult<f64> {
    if !axis_length_px.is_finite() || axis_length_px < 0.0 {
        return Err(AxisError::InvalidData(
            "axis length must be finite and >= 0".to_owned(),
        ));
    }
    Ok(axis_length_px)
}

pub(super) fn validate_zero_offset(zero_offset_px: f64) -> AxisResult<f64> {
    if !zero_offset_px.is_finite() || zero_offset_px < 0.0 {
        return Err(AxisError::InvalidData(
            "zero offset must be finite and >= 0".to_owned(),
        ));
    }
    Ok(zero_offset_px)
}

pub(super) fn validate_target_tick_spacing(spacing_px: f64) -> AxisResult<f64> {
    if !spacing_px.is_finite() || spacing_px <= 0.0 {
        return Err(AxisError::InvalidData(
            "target tick spacing must be finite and > 0".to_owned(),
        ));
    }
    Ok(spacing_px)
}

pub(super) fn validate_animation_config(
    config: BoundsAnimationConfig,
) -> AxisResult<BoundsAnimationConfig> {
    if config.duration_ms > MAX_TRANSITION_DURATION_MS {
        return Err(AxisError::InvalidData(format!(
            "transition duration must be <= {MAX_TRANSITION_DURATION_MS} ms"
        )));
    }
    Ok(config)
}

pub(super) fn validate_time_axis_label_config(
    config: TimeAxisLabelConfig,
) -> AxisResult<TimeAxisLabelConfig> {
    let offset_minutes = i32::from(config.timezone.offset_minutes());
    if !(-14 * 60..=14 * 60).contains(&offset_minutes) {
        return Err(AxisError::InvalidData(
            "time-axis timezone offset must be between -840 and 840 minutes".to_owned(),
        ));
    }
    Ok(config)
}
