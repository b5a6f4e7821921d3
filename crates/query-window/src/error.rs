use std::time::Duration;

use crate::domain::types::ObjectKind;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "max look back is only supported for the filesystem object store with a \
         periodically resynced local index, got explicit value on {object_kind} store"
    )]
    UnsupportedStoreForLookback { object_kind: ObjectKind },
    #[error(
        "max look back {requested:?} is below the minimum safe value {floor:?}, \
         queries could miss data not yet indexed"
    )]
    LookbackBelowSafetyFloor { requested: Duration, floor: Duration },
    #[error("config invalid: {0}")]
    ConfigInvalid(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("io error: {0}")]
    Io(String),
}

pub type Result<T> = core::result::Result<T, Error>;
