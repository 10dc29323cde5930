use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::{AxisError, AxisResult};

/// Absolute instant stored as integer milliseconds since the Unix epoch.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TimeValue(i64);

impl TimeValue {
    pub const EPOCH: Self = Self(0);

    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    #[must_use]
    pub const fn millis(self) -> i64 {
        self.0
    }

    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(time: &DateTime<Tz>) -> Self {
        Self(time.timestamp_millis())
    }

    /// Returns `None` when the instant is outside chrono's representable range.
    #[must_use]
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.0)
    }

    /// Signed distance `self - earlier` in milliseconds.
    #[must_use]
    pub fn millis_since(self, earlier: Self) -> i64 {
        self.0.saturating_sub(earlier.0)
    }

    #[must_use]
    pub fn checked_add_millis(self, millis: i64) -> Option<Self> {
        self.0.checked_add(millis).map(Self)
    }
}

impl From<DateTime<Utc>> for TimeValue {
    fn from(time: DateTime<Utc>) -> Self {
        Self::from_datetime(&time)
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(time) => write!(f, "{}", time.format("%Y-%m-%dT%H:%M:%S%.3fZ")),
            None => write!(f, "{}ms", self.0),
        }
    }
}

/// Closed time interval with `lower <= upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoundsRepr")]
pub struct Bounds {
    lower: TimeValue,
    upper: TimeValue,
}

/// Unchecked wire form; deserialized bounds go through [`Bounds::new`].
#[derive(Deserialize)]
struct BoundsRepr {
    lower: TimeValue,
    upper: TimeValue,
}

impl TryFrom<BoundsRepr> for Bounds {
    type Error = AxisError;

    fn try_from(repr: BoundsRepr) -> AxisResult<Self> {
        Self::new(repr.lower, repr.upper)
    }
}

impl Bounds {
    pub fn new(lower: TimeValue, upper: TimeValue) -> AxisResult<Self> {
        if lower > upper {
            return Err(AxisError::InvalidRange { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Single-instant bounds.
    #[must_use]
    pub fn collapsed(value: TimeValue) -> Self {
        Self {
            lower: value,
            upper: value,
        }
    }

    /// Builds bounds from two instants in any order.
    #[must_use]
    pub(crate) fn ordered(a: TimeValue, b: TimeValue) -> Self {
        Self {
            lower: a.min(b),
            upper: a.max(b),
        }
    }

    #[must_use]
    pub fn lower(self) -> TimeValue {
        self.lower
    }

    #[must_use]
    pub fn upper(self) -> TimeValue {
        self.upper
    }

    #[must_use]
    pub fn span_millis(self) -> i64 {
        self.upper.millis_since(self.lower)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.lower == self.upper
    }

    /// Strict-exclusive membership test.
    #[must_use]
    pub fn contains_exclusive(self, value: TimeValue) -> bool {
        value > self.lower && value < self.upper
    }

    /// Smallest bounds covering `self` and `value`.
    #[must_use]
    pub fn extended_to(self, value: TimeValue) -> Self {
        Self {
            lower: self.lower.min(value),
            upper: self.upper.max(value),
        }
    }
}

/// Axis direction used by the coordinate mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// Positions grow left to right with time.
    #[default]
    Horizontal,
    /// Positions grow downwards, so later instants sit higher on screen.
    Vertical,
}

/// Timestamped sample supplied by the data collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub time: TimeValue,
    pub value: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(time: TimeValue, value: f64) -> Self {
        Self { time, value }
    }

    pub fn from_decimal_time(time: DateTime<Utc>, value: Decimal) -> AxisResult<Self> {
        Ok(Self {
            time: TimeValue::from(time),
            value: decimal_to_f64(value, "value")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Bounds, TimeValue};
    use crate::error::AxisError;

    #[test]
    fn bounds_reject_inverted_range() {
        let err = Bounds::new(TimeValue::from_millis(10), TimeValue::from_millis(5))
            .expect_err("inverted range must fail");
        assert!(matches!(err, AxisError::InvalidRange { .. }));
    }

    #[test]
    fn exclusive_membership_excludes_both_ends() {
        let bounds = Bounds::new(TimeValue::from_millis(0), TimeValue::from_millis(10))
            .expect("valid bounds");
        assert!(!bounds.contains_exclusive(TimeValue::from_millis(0)));
        assert!(bounds.contains_exclusive(TimeValue::from_millis(5)));
        assert!(!bounds.contains_exclusive(TimeValue::from_millis(10)));
    }

    #[test]
    fn deserializing_inverted_bounds_fails() {
        let valid: Bounds =
            serde_json::from_str(r#"{"lower":5,"upper":10}"#).expect("valid bounds json");
        assert_eq!(valid.lower(), TimeValue::from_millis(5));
        assert_eq!(valid.upper(), TimeValue::from_millis(10));

        let inverted = serde_json::from_str::<Bounds>(r#"{"lower":10,"upper":5}"#);
        assert!(inverted.is_err());
    }

    #[test]
    fn display_uses_utc_iso_layout() {
        assert_eq!(
            TimeValue::from_millis(1_500).to_string(),
            "1970-01-01T00:00:01.500Z"
        );
    }
}
