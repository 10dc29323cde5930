use thiserror::Error;

use crate::core::TimeValue;

pub type AxisResult<T> = Result<T, AxisError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AxisError {
    #[error("invalid range: lower bound {lower} is after upper bound {upper}")]
    InvalidRange { lower: TimeValue, upper: TimeValue },

    #[error("degenerate viewport: length={length} does not exceed zero offset={zero_offset}")]
    DegenerateViewport { length: f64, zero_offset: f64 },

    #[error("auto-ranging is disabled but no explicit lower and upper bounds were set")]
    MissingBounds,

    #[error("invalid data: {0}")]
    InvalidData(String),
}
