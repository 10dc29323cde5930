use serde::{Deserialize, Serialize};

use crate::core::{Bounds, Orientation, TimeValue};
use crate::error::{AxisError, AxisResult};

/// Linear, reversible mapping between instants and pixel offsets along the
/// axis.
///
/// Horizontal: `position = Z + f * (L - Z)`.
/// Vertical: `position = L - f * (L - Z) + Z`.
/// Here `f = (value - Lo) / (Hi - Lo)`, and `f = 0` when `Hi == Lo`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateMapper {
    bounds: Bounds,
    length: f64,
    zero_offset: f64,
    orientation: Orientation,
}

impl CoordinateMapper {
    /// Builds a mapper, rejecting viewports that leave no room past the zero
    /// offset.
    pub fn new(
        bounds: Bounds,
        length: f64,
        zero_offset: f64,
        orientation: Orientation,
    ) -> AxisResult<Self> {
        validate_extent(length, zero_offset)?;
        if length <= zero_offset {
            return Err(AxisError::DegenerateViewport {
                length,
                zero_offset,
            });
        }

        Ok(Self {
            bounds,
            length,
            zero_offset,
            orientation,
        })
    }

    /// Builds a mapper, clamping a viewport shorter than the zero offset to
    /// an empty mapping range instead of failing.
    pub fn clamped(
        bounds: Bounds,
        length: f64,
        zero_offset: f64,
        orientation: Orientation,
    ) -> AxisResult<Self> {
        validate_extent(length, zero_offset)?;
        Ok(Self {
            bounds,
            length: length.max(zero_offset),
            zero_offset,
            orientation,
        })
    }

    #[must_use]
    pub fn bounds(self) -> Bounds {
        self.bounds
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.length
    }

    #[must_use]
    pub fn zero_offset(self) -> f64 {
        self.zero_offset
    }

    #[must_use]
    pub fn orientation(self) -> Orientation {
        self.orientation
    }

    fn range_px(self) -> f64 {
        self.length - self.zero_offset
    }

    fn span_millis(self) -> f64 {
        self.bounds.span_millis() as f64
    }

    /// Maps an instant to its pixel offset.
    #[must_use]
    pub fn display_position(self, value: TimeValue) -> f64 {
        self.position_for_millis(value.millis() as f64)
    }

    /// Maps raw epoch milliseconds to a pixel offset.
    #[must_use]
    pub fn position_for_millis(self, millis: f64) -> f64 {
        let span = self.span_millis();
        let fraction = if span == 0.0 {
            0.0
        } else {
            (millis - self.bounds.lower().millis() as f64) / span
        };

        match self.orientation {
            Orientation::Horizontal => self.zero_offset + fraction * self.range_px(),
            Orientation::Vertical => self.length - fraction * self.range_px() + self.zero_offset,
        }
    }

    /// Inverse of [`Self::position_for_millis`] without rounding.
    pub fn millis_for_position(self, position: f64) -> AxisResult<f64> {
        if !position.is_finite() {
            return Err(AxisError::InvalidData(
                "display position must be finite".to_owned(),
            ));
        }

        let lower = self.bounds.lower().millis() as f64;
        let range = self.range_px();
        if range == 0.0 {
            return Ok(lower);
        }

        let fraction = match self.orientation {
            Orientation::Horizontal => (position - self.zero_offset) / range,
            Orientation::Vertical => (self.length + self.zero_offset - position) / range,
        };
        Ok(lower + fraction * self.span_millis())
    }

    /// Maps a pixel offset back to the nearest millisecond instant.
    pub fn value_for_display(self, position: f64) -> AxisResult<TimeValue> {
        let millis = self.millis_for_position(position)?.round();
        if millis > i64::MAX as f64 || millis < i64::MIN as f64 {
            return Err(AxisError::InvalidData(
                "display position maps outside the representable time range".to_owned(),
            ));
        }
        Ok(TimeValue::from_millis(millis as i64))
    }

    /// Strict-exclusive test against the mapped bounds.
    #[must_use]
    pub fn is_value_on_axis(self, value: TimeValue) -> bool {
        self.bounds.contains_exclusive(value)
    }
}

fn validate_extent(length: f64, zero_offset: f64) -> AxisResult<()> {
    if !length.is_finite() || length < 0.0 {
        return Err(AxisError::InvalidData(
            "axis length must be finite and >= 0".to_owned(),
        ));
    }
    if !zero_offset.is_finite() || zero_offset < 0.0 {
        return Err(AxisError::InvalidData(
            "zero offset must be finite and >= 0".to_owned(),
        ));
    }
    Ok(())
}
