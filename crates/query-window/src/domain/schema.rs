use serde::{Deserialize, Serialize};

use crate::domain::types::ObjectKind;
use crate::error::{Error, Result};

/// One schema period. Applies from `from_day` (days since the unix epoch)
/// until the next period starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodConfig {
    pub from_day: u64,
    pub object_kind: ObjectKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaConfig {
    pub periods: Vec<PeriodConfig>,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            periods: vec![PeriodConfig {
                from_day: 0,
                object_kind: ObjectKind::Filesystem,
            }],
        }
    }
}

impl SchemaConfig {
    pub fn validate(&self) -> Result<()> {
        if self.periods.is_empty() {
            return Err(Error::ConfigInvalid(
                "schema.periods must contain at least one period".to_string(),
            ));
        }
        for (i, pair) in self.periods.windows(2).enumerate() {
            if pair[0].from_day >= pair[1].from_day {
                return Err(Error::ConfigInvalid(format!(
                    "schema.periods[{}].from_day must be greater than schema.periods[{i}].from_day",
                    i + 1
                )));
            }
        }
        Ok(())
    }

    /// Period in effect on `day`, or `None` if `day` precedes every period.
    pub fn active_period(&self, day: u64) -> Option<&PeriodConfig> {
        self.period_index_at(day).map(|i| &self.periods[i])
    }

    pub(crate) fn period_index_at(&self, day: u64) -> Option<usize> {
        index_in_effect(&self.periods, day, |p| p.from_day)
    }
}

/// Index of the last entry starting on or before `day`. `entries` must be
/// sorted by start day.
pub(crate) fn index_in_effect<T>(
    entries: &[T],
    day: u64,
    from_day: impl Fn(&T) -> u64,
) -> Option<usize> {
    entries
        .partition_point(|e| from_day(e) <= day)
        .checked_sub(1)
}
