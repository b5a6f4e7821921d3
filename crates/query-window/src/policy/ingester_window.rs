use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::types::{IngesterWindowBound, IngesterWindowRequest};
use crate::policy::floor::safety_floor;

/// Resolves the minimum window in which ingesters are also queried.
///
/// Never fails: a non-zero window below the safety floor is raised to it.
pub fn resolve_ingester_window_bound(
    requested: IngesterWindowRequest,
    max_chunk_age: Duration,
    resync_interval: Duration,
) -> IngesterWindowBound {
    let window = requested.as_duration();
    if window.is_zero() {
        return IngesterWindowBound::Disabled;
    }

    let floor = safety_floor(max_chunk_age, resync_interval);
    if window < floor {
        warn!(
            requested_secs = window.as_secs(),
            floor_secs = floor.as_secs(),
            "query_ingesters_within below safety floor, raising to floor"
        );
        return IngesterWindowBound::Window(floor);
    }
    debug!(window_secs = window.as_secs(), "query_ingesters_within kept");
    IngesterWindowBound::Window(window)
}
