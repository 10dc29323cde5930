use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

/// Locale preset used by tick label formatters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AxisLabelLocale {
    #[default]
    EnUs,
    EsEs,
}

/// Time zone in which calendar steps, alignment and labels are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TimeAxisTimeZone {
    #[default]
    Utc,
    FixedOffsetMinutes {
        minutes: i16,
    },
}

impl TimeAxisTimeZone {
    #[must_use]
    pub fn offset_minutes(self) -> i16 {
        match self {
            Self::Utc => 0,
            Self::FixedOffsetMinutes { minutes } => minutes,
        }
    }

    /// Resolves the chrono offset, falling back to UTC for out-of-range values.
    #[must_use]
    pub fn fixed_offset(self) -> FixedOffset {
        let seconds = i32::from(self.offset_minutes()) * 60;
        FixedOffset::east_opt(seconds).unwrap_or_else(|| Utc.fix())
    }
}

/// Runtime formatter configuration for tick labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TimeAxisLabelConfig {
    pub locale: AxisLabelLocale,
    pub timezone: TimeAxisTimeZone,
}
