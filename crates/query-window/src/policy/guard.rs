use tracing::debug;

use crate::domain::types::{LookbackRequest, ObjectKind};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applicability {
    /// The store supports the restriction; resolve against the floor.
    Applicable,
    /// The store does not support it and nothing was requested.
    Inapplicable,
}

/// Rejects an explicit lookback on stores without a resynced local index.
/// `Unlimited` counts as explicit.
pub fn check_store_applicability(
    object_kind: ObjectKind,
    requested: LookbackRequest,
) -> Result<Applicability> {
    if object_kind.supports_lookback_restriction() {
        return Ok(Applicability::Applicable);
    }
    if requested.is_explicit() {
        return Err(Error::UnsupportedStoreForLookback { object_kind });
    }
    debug!(%object_kind, "lookback restriction not applicable to store");
    Ok(Applicability::Inapplicable)
}
