use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::core::TimeValue;
use crate::error::{AxisError, AxisResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> AxisResult<f64> {
    value.to_f64().ok_or_else(|| {
        AxisError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Wall-clock view of `value` in the given fixed offset.
#[must_use]
pub fn to_local_datetime(value: TimeValue, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    value
        .to_datetime()
        .map(|utc_time| utc_time.with_timezone(&offset))
}

/// Resolves a wall-clock time in the given fixed offset back to an instant.
#[must_use]
pub fn from_local_naive(local: NaiveDateTime, offset: FixedOffset) -> Option<TimeValue> {
    offset
        .from_local_datetime(&local)
        .single()
        .map(|time| TimeValue::from_datetime(&time))
}
