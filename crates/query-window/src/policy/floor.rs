use std::time::Duration;

/// Slack on top of chunk age and resync interval for index upload and
/// propagation latency that neither term captures.
pub const SAFETY_MARGIN: Duration = Duration::from_secs(16 * 60);

/// Worst-case staleness of a local index replica: a chunk may stay unflushed
/// for `max_chunk_age`, and the replica may then lag for `resync_interval`.
///
/// Both policies go through this function so their floors cannot diverge.
pub fn safety_floor(max_chunk_age: Duration, resync_interval: Duration) -> Duration {
    max_chunk_age
        .saturating_add(resync_interval)
        .saturating_add(SAFETY_MARGIN)
}
