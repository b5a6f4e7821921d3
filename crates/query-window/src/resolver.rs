use std::time::Duration;

use serde::Serialize;
use tracing::{info, warn};

use crate::config::QueryWindowConfig;
use crate::domain::schema::{SchemaConfig, index_in_effect};
use crate::domain::types::{
    IngesterWindowBound, IngesterWindowRequest, LookbackBound, LookbackRequest, ObjectKind,
};
use crate::error::Result;
use crate::policy::{resolve_ingester_window_bound, resolve_lookback_bound, safety_floor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedPeriod {
    pub from_day: u64,
    pub object_kind: ObjectKind,
    pub max_look_back: LookbackBound,
}

/// Effective bounds handed to the query executor. Recompute on config reload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedQueryWindow {
    pub periods: Vec<ResolvedPeriod>,
    pub query_ingesters_within: IngesterWindowBound,
}

impl ResolvedQueryWindow {
    /// Lookback of the period in effect on `day`.
    pub fn lookback_at(&self, day: u64) -> Option<LookbackBound> {
        index_in_effect(&self.periods, day, |p| p.from_day)
            .map(|i| self.periods[i].max_look_back)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryWindowResolver {
    pub max_chunk_age: Duration,
    pub resync_interval: Duration,
    pub max_look_back: LookbackRequest,
    pub query_ingesters_within: IngesterWindowRequest,
}

impl QueryWindowResolver {
    pub fn new(max_chunk_age: Duration, resync_interval: Duration) -> Self {
        Self {
            max_chunk_age,
            resync_interval,
            max_look_back: LookbackRequest::UseDefault,
            query_ingesters_within: IngesterWindowRequest::Disabled,
        }
    }

    pub fn from_config(config: &QueryWindowConfig) -> Self {
        Self {
            max_chunk_age: config.max_chunk_age(),
            resync_interval: config.index_resync_interval(),
            max_look_back: config.max_look_back,
            query_ingesters_within: config.query_ingesters_within,
        }
    }

    pub fn floor(&self) -> Duration {
        safety_floor(self.max_chunk_age, self.resync_interval)
    }

    pub fn lookback_for(&self, object_kind: ObjectKind) -> Result<LookbackBound> {
        resolve_lookback_bound(
            object_kind,
            self.max_look_back,
            self.max_chunk_age,
            self.resync_interval,
        )
    }

    pub fn ingester_window(&self) -> IngesterWindowBound {
        resolve_ingester_window_bound(
            self.query_ingesters_within,
            self.max_chunk_age,
            self.resync_interval,
        )
    }

    /// Resolves every period; the first rejected period aborts resolution.
    pub fn resolve(&self, schema: &SchemaConfig) -> Result<ResolvedQueryWindow> {
        let mut periods = Vec::with_capacity(schema.periods.len());
        for period in &schema.periods {
            let max_look_back = self.lookback_for(period.object_kind).inspect_err(|e| {
                warn!(
                    from_day = period.from_day,
                    object_kind = %period.object_kind,
                    error = %e,
                    "rejecting max look back for schema period"
                );
            })?;
            periods.push(ResolvedPeriod {
                from_day: period.from_day,
                object_kind: period.object_kind,
                max_look_back,
            });
        }

        let query_ingesters_within = self.ingester_window();
        info!(
            periods = periods.len(),
            floor_secs = self.floor().as_secs(),
            query_ingesters_within_secs = query_ingesters_within.as_secs(),
            "resolved query window bounds"
        );
        Ok(ResolvedQueryWindow {
            periods,
            query_ingesters_within,
        })
    }
}
