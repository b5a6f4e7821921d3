use std::time::Duration;

use tracing::debug;

use crate::domain::types::{LookbackBound, LookbackRequest, ObjectKind};
use crate::error::{Error, Result};
use crate::policy::floor::safety_floor;
use crate::policy::guard::{Applicability, check_store_applicability};

/// Resolves the lookback for one schema period.
///
/// An explicit value below the safety floor is rejected, never clamped.
pub fn resolve_lookback_bound(
    object_kind: ObjectKind,
    requested: LookbackRequest,
    max_chunk_age: Duration,
    resync_interval: Duration,
) -> Result<LookbackBound> {
    match check_store_applicability(object_kind, requested)? {
        Applicability::Inapplicable => Ok(LookbackBound::Inapplicable),
        Applicability::Applicable => {
            resolve_applicable_lookback(requested, max_chunk_age, resync_interval)
        }
    }
}

/// Floor check for a store already known to support the restriction.
pub fn resolve_applicable_lookback(
    requested: LookbackRequest,
    max_chunk_age: Duration,
    resync_interval: Duration,
) -> Result<LookbackBound> {
    match requested.normalized() {
        LookbackRequest::Unlimited => {
            debug!("max look back unlimited, skipping floor check");
            Ok(LookbackBound::Unlimited)
        }
        LookbackRequest::UseDefault => {
            let floor = safety_floor(max_chunk_age, resync_interval);
            debug!(floor_secs = floor.as_secs(), "max look back defaulted to floor");
            Ok(LookbackBound::Limited(floor))
        }
        LookbackRequest::Explicit(requested) => {
            let floor = safety_floor(max_chunk_age, resync_interval);
            if requested < floor {
                return Err(Error::LookbackBelowSafetyFloor { requested, floor });
            }
            Ok(LookbackBound::Limited(requested))
        }
    }
}
