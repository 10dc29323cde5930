use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::{Granularity, TimeValue};

use super::{AxisLabelLocale, TimeAxisTimeZone};

pub type TimeLabelFormatterFn = Arc<dyn Fn(TimeValue) -> String + Send + Sync + 'static>;

/// Runtime metrics exposed by the in-axis tick-label cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeLabelCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(super) enum TimeLabelCacheProfile {
    BuiltIn {
        locale: AxisLabelLocale,
        timezone: TimeAxisTimeZone,
    },
    Custom {
        formatter_generation: u64,
    },
}

/// Labels are keyed by instant and granularity together: the same instant
/// renders differently as a year tick and as a day tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(super) struct TimeLabelCacheKey {
    pub(super) profile: TimeLabelCacheProfile,
    pub(super) value: TimeValue,
    pub(super) granularity: Granularity,
}

#[derive(Debug, Default)]
pub(super) struct TimeLabelCache {
    entries: HashMap<TimeLabelCacheKey, String>,
    hits: u64,
    misses: u64,
}

impl TimeLabelCache {
    const MAX_ENTRIES: usize = 8192;

    pub(super) fn get(&mut self, key: TimeLabelCacheKey) -> Option<String> {
        let value = self.entries.get(&key).cloned();
        if value.is_some() {
            self.hits = self.hits.saturating_add(1);
        }
        value
    }

    pub(super) fn insert(&mut self, key: TimeLabelCacheKey, value: String) {
        self.misses = self.misses.saturating_add(1);
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.clear();
        }
        self.entries.insert(key, value);
    }

    pub(super) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(super) fn stats(&self) -> TimeLabelCacheStats {
        TimeLabelCacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.entries.len(),
        }
    }
}
